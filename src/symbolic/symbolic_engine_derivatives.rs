//! Analytical differentiation and light algebraic simplification of symbolic expressions.
//! The derivative of the equation function is what Newton-Raphson consumes when the
//! equation is given as a string.
use crate::symbolic::symbolic_engine::Expr;

fn c(value: f64) -> Box<Expr> {
    Box::new(Expr::Const(value))
}

impl Expr {
    /// Computes the analytical derivative with respect to a variable.
    ///
    /// Standard rules: sum, product, quotient and chain rules. The power rule is the
    /// general one, `d(u^v) = u^v * (v' ln(u) + v u'/u)`, reduced to `v u^(v-1) u'` when the
    /// exponent does not depend on the variable.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let df_dx = f.diff("x").simplify(); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if !exp.contains_variable(var) {
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), c(1.0))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                } else {
                    Expr::Mul(
                        Box::new(self.clone()),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(c(-1.0), Box::new(Expr::sin(expr.clone())))),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    c(1.0),
                    Box::new(Expr::Pow(Box::new(Expr::cos(expr.clone())), c(2.0))),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    c(-1.0),
                    Box::new(Expr::Pow(Box::new(Expr::sin(expr.clone())), c(2.0))),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::arcsin(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(c(1.0), Box::new(Expr::Pow(expr.clone(), c(2.0))))),
                    c(0.5),
                )),
            ),
            Expr::arccos(expr) => Expr::Div(
                Box::new(Expr::Mul(c(-1.0), Box::new(expr.diff(var)))),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(c(1.0), Box::new(Expr::Pow(expr.clone(), c(2.0))))),
                    c(0.5),
                )),
            ),
            Expr::arctg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Add(c(1.0), Box::new(Expr::Pow(expr.clone(), c(2.0))))),
            ),
            Expr::arcctg(expr) => Expr::Div(
                Box::new(Expr::Mul(c(-1.0), Box::new(expr.diff(var)))),
                Box::new(Expr::Add(c(1.0), Box::new(Expr::Pow(expr.clone(), c(2.0))))),
            ),
        }
    } // end of diff

    /// Folds constants and removes neutral elements (`x + 0`, `x * 1`, `0 * x`, `x ^ 1`, ...).
    /// The result evaluates to the same values as the input wherever the input is defined.
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                (l, r) if l.is_zero() => r,
                (l, r) if r.is_zero() => l,
                (l, r) => Expr::Add(l.boxed(), r.boxed()),
            },
            Expr::Sub(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                (l, r) if r.is_zero() => l,
                (l, r) if l.is_zero() => Expr::Mul(c(-1.0), r.boxed()).simplify(),
                (l, r) => Expr::Sub(l.boxed(), r.boxed()),
            },
            Expr::Mul(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                (l, r) if l.is_zero() || r.is_zero() => Expr::Const(0.0),
                (l, r) if l.is_one() => r,
                (l, r) if r.is_one() => l,
                // -1 * (-1 * u) = u
                (Expr::Const(a), Expr::Mul(inner_l, inner_r)) => match *inner_l {
                    Expr::Const(b) => Expr::Mul(c(a * b), inner_r).simplify(),
                    other => Expr::Mul(c(a), Box::new(Expr::Mul(Box::new(other), inner_r))),
                },
                (l, r) => Expr::Mul(l.boxed(), r.boxed()),
            },
            Expr::Div(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (Expr::Const(a), Expr::Const(b)) if b != 0.0 => Expr::Const(a / b),
                (l, r) if r.is_one() => l,
                (l, r) => Expr::Div(l.boxed(), r.boxed()),
            },
            Expr::Pow(base, exp) => match (base.simplify(), exp.simplify()) {
                (Expr::Const(a), Expr::Const(b)) => Expr::Const(a.powf(b)),
                (_, e) if e.is_zero() => Expr::Const(1.0),
                (b, e) if e.is_one() => b,
                (b, e) => Expr::Pow(b.boxed(), e.boxed()),
            },
            Expr::Exp(arg) => Expr::Exp(arg.simplify().boxed()),
            Expr::Ln(arg) => Expr::Ln(arg.simplify().boxed()),
            Expr::sin(arg) => Expr::sin(arg.simplify().boxed()),
            Expr::cos(arg) => Expr::cos(arg.simplify().boxed()),
            Expr::tg(arg) => Expr::tg(arg.simplify().boxed()),
            Expr::ctg(arg) => Expr::ctg(arg.simplify().boxed()),
            Expr::arcsin(arg) => Expr::arcsin(arg.simplify().boxed()),
            Expr::arccos(arg) => Expr::arccos(arg.simplify().boxed()),
            Expr::arctg(arg) => Expr::arctg(arg.simplify().boxed()),
            Expr::arcctg(arg) => Expr::arcctg(arg.simplify().boxed()),
        }
    }

    /// derivative followed by simplification
    pub fn diff_simplified(&self, var: &str) -> Expr {
        self.diff(var).simplify()
    }
}
