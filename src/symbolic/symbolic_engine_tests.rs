//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::symbolic_engine::Expr;

    #[test]
    fn test_operator_overloading() {
        let x = Expr::var("x");
        let expr = x.clone() * x.clone() - Expr::Const(2.0);
        let expected = Expr::Sub(
            Box::new(Expr::Mul(Box::new(x.clone()), Box::new(x))),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
        assert_eq!(expr.eval_real("x", 3.0), 7.0);
    }

    #[test]
    fn test_negation() {
        let expr = -Expr::var("x");
        assert_eq!(expr.eval_real("x", 2.5), -2.5);
    }

    #[test]
    fn test_display() {
        let expr = Expr::parse_expression("exp(x)/(x+1)").unwrap();
        assert_eq!(expr.to_string(), "(exp(x) / (x + 1))");
        let expr = Expr::parse_expression("tan(x)").unwrap();
        assert_eq!(expr.to_string(), "tg(x)");
    }

    #[test]
    fn test_variables() {
        let expr = Expr::parse_expression("a*x^2 + b*x + sin(c)").unwrap();
        assert_eq!(expr.variables(), vec!["a", "b", "c", "x"]);
        assert!(expr.contains_variable("c"));
        assert!(!expr.contains_variable("y"));
        assert!(Expr::Const(1.0).variables().is_empty());
    }

    #[test]
    fn test_constructors() {
        let expr = Expr::var("x").exp().ln();
        assert!((expr.eval_real("x", 1.7) - 1.7).abs() < 1e-15);
        let expr = Expr::var("x").pow(Expr::Const(3.0));
        assert_eq!(expr.eval_real("x", 2.0), 8.0);
        assert!(Expr::Const(0.0).is_zero());
        assert!(Expr::Const(1.0).is_one());
    }
}
