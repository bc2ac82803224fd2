use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    brackets_balanced, find_operator_outside_brackets, find_pair_to_this_bracket,
    is_wrapped_in_brackets,
};
use std::f64::consts::{E, PI};
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedRoots::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^3 - x - 1").unwrap();
/// assert_eq!(parsed_expression.eval_real("x", 2.0), 5.0);
/// ```
//                  search recursion diagram
//                "x^2+exp(x)-ln(x)/2"               |
//                |       left  | right              |
//                |__________________________________|
//                |  split by rightmost + or -       |
//                |__________________________________|
//                | x^2+exp(x)  |   ln(x)/2          |
//                |       |     |          |         |
//                |_____ \|/    |         \|/        |
//                |   split by +|  split by /        |
//                |_____________|____________________|
//                |  x^2 | exp(x)| ln(x)  |    2     |
//                  etc...
// precedence, from the weakest: binary + -, unary sign, * /, ^ (right associative), functions
pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }
    if !input.is_ascii() {
        return Err(format!("non-ASCII characters in '{}'", input));
    }
    if !brackets_balanced(input) {
        return Err(format!("unbalanced brackets in '{}'", input));
    }

    if is_wrapped_in_brackets(input) {
        return parse_expression_func(&input[1..input.len() - 1]);
    }

    if let Some((pos, op)) = find_operator_outside_brackets(input, b"+-", true) {
        let left = parse_expression_func(&input[..pos])?;
        let right = parse_expression_func(&input[pos + 1..])?;
        return Ok(match op {
            '+' => Expr::Add(left.boxed(), right.boxed()),
            _ => Expr::Sub(left.boxed(), right.boxed()),
        });
    }

    // no binary + or - left on this level: a leading sign applies to the whole rest
    if let Some(rest) = input.strip_prefix('-') {
        let inner = parse_expression_func(rest)?;
        return Ok(match inner {
            Expr::Const(value) => Expr::Const(-value),
            other => -other,
        });
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_expression_func(rest);
    }

    if let Some((pos, op)) = find_operator_outside_brackets(input, b"*/", true) {
        let left = parse_expression_func(&input[..pos])?;
        let right = parse_expression_func(&input[pos + 1..])?;
        return Ok(match op {
            '*' => Expr::Mul(left.boxed(), right.boxed()),
            _ => Expr::Div(left.boxed(), right.boxed()),
        });
    }

    if let Some((pos, _)) = find_operator_outside_brackets(input, b"^", false) {
        let base = parse_expression_func(&input[..pos])?;
        let exponent = parse_expression_func(&input[pos + 1..])?;
        return Ok(Expr::Pow(base.boxed(), exponent.boxed()));
    }

    if let Some(open) = input.find('(') {
        return parse_function_call(input, open);
    }

    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }
    match input {
        "pi" => return Ok(Expr::Const(PI)),
        "e" => return Ok(Expr::Const(E)),
        _ => {}
    }
    let starts_with_letter = input
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if starts_with_letter && input.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Ok(Expr::Var(input.to_string()));
    }
    Err(format!("invalid expression format: '{}'", input))
}

// "name(argument)" where the bracket opened at `open` closes at the very end
fn parse_function_call(input: &str, open: usize) -> Result<Expr, String> {
    let close = find_pair_to_this_bracket(input, open)
        .ok_or_else(|| format!("unbalanced brackets in '{}'", input))?;
    if close != input.len() - 1 {
        return Err(format!("missing operator in '{}'", input));
    }
    let name = input[..open].trim();
    let argument = parse_expression_func(&input[open + 1..close])?.boxed();
    let expr = match name {
        "exp" => Expr::Exp(argument),
        "ln" | "log" => Expr::Ln(argument),
        "sqrt" => Expr::Pow(argument, Box::new(Expr::Const(0.5))),
        "sin" => Expr::sin(argument),
        "cos" => Expr::cos(argument),
        "tg" | "tan" => Expr::tg(argument),
        "ctg" | "cot" => Expr::ctg(argument),
        "arcsin" | "asin" => Expr::arcsin(argument),
        "arccos" | "acos" => Expr::arccos(argument),
        "arctg" | "atan" | "arctan" => Expr::arctg(argument),
        "arcctg" | "acot" | "arccot" => Expr::arcctg(argument),
        "" => return Err(format!("missing operator in '{}'", input)),
        unknown => return Err(format!("unknown function '{}'", unknown)),
    };
    Ok(expr)
}

impl Expr {
    /// parse a string into a symbolic expression
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }

    pub fn parse_vector_expression(input: Vec<&str>) -> Result<Vec<Expr>, String> {
        input.into_iter().map(parse_expression_func).collect()
    }
}
