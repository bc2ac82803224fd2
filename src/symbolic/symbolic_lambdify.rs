use crate::symbolic::symbolic_engine::Expr;
use num_complex::Complex64;
use std::f64::consts::PI;

// exponent value that can be applied through powi
fn integer_exponent(exp: &Expr) -> Option<i32> {
    match exp {
        Expr::Const(n) if n.fract() == 0.0 && n.abs() <= i32::MAX as f64 => Some(*n as i32),
        _ => None,
    }
}

impl Expr {
    /// Evaluates a single-variable expression in real arithmetic.
    ///
    /// Variables other than `var` evaluate to NaN. Domain errors (e.g. `ln(-1)`) are not
    /// trapped here: they propagate as NaN or infinity and are reported by the caller.
    pub fn eval_real(&self, var: &str, x: f64) -> f64 {
        match self {
            Expr::Var(name) => {
                if name == var {
                    x
                } else {
                    f64::NAN
                }
            }
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => lhs.eval_real(var, x) + rhs.eval_real(var, x),
            Expr::Sub(lhs, rhs) => lhs.eval_real(var, x) - rhs.eval_real(var, x),
            Expr::Mul(lhs, rhs) => lhs.eval_real(var, x) * rhs.eval_real(var, x),
            Expr::Div(lhs, rhs) => lhs.eval_real(var, x) / rhs.eval_real(var, x),
            Expr::Pow(base, exp) => {
                let base_value = base.eval_real(var, x);
                match integer_exponent(exp) {
                    Some(n) => base_value.powi(n),
                    None => base_value.powf(exp.eval_real(var, x)),
                }
            }
            Expr::Exp(expr) => expr.eval_real(var, x).exp(),
            Expr::Ln(expr) => expr.eval_real(var, x).ln(),
            Expr::sin(expr) => expr.eval_real(var, x).sin(),
            Expr::cos(expr) => expr.eval_real(var, x).cos(),
            Expr::tg(expr) => expr.eval_real(var, x).tan(),
            Expr::ctg(expr) => 1.0 / expr.eval_real(var, x).tan(),
            Expr::arcsin(expr) => expr.eval_real(var, x).asin(),
            Expr::arccos(expr) => expr.eval_real(var, x).acos(),
            Expr::arctg(expr) => expr.eval_real(var, x).atan(),
            Expr::arcctg(expr) => PI / 2.0 - expr.eval_real(var, x).atan(),
        }
    }

    /// Evaluates a single-variable expression in complex arithmetic (principal branches).
    pub fn eval_complex(&self, var: &str, z: Complex64) -> Complex64 {
        match self {
            Expr::Var(name) => {
                if name == var {
                    z
                } else {
                    Complex64::new(f64::NAN, f64::NAN)
                }
            }
            Expr::Const(val) => Complex64::new(*val, 0.0),
            Expr::Add(lhs, rhs) => lhs.eval_complex(var, z) + rhs.eval_complex(var, z),
            Expr::Sub(lhs, rhs) => lhs.eval_complex(var, z) - rhs.eval_complex(var, z),
            Expr::Mul(lhs, rhs) => lhs.eval_complex(var, z) * rhs.eval_complex(var, z),
            Expr::Div(lhs, rhs) => lhs.eval_complex(var, z) / rhs.eval_complex(var, z),
            Expr::Pow(base, exp) => {
                let base_value = base.eval_complex(var, z);
                match (integer_exponent(exp), exp.as_ref()) {
                    (Some(n), _) => base_value.powi(n),
                    (None, Expr::Const(p)) => base_value.powf(*p),
                    _ => base_value.powc(exp.eval_complex(var, z)),
                }
            }
            Expr::Exp(expr) => expr.eval_complex(var, z).exp(),
            Expr::Ln(expr) => expr.eval_complex(var, z).ln(),
            Expr::sin(expr) => expr.eval_complex(var, z).sin(),
            Expr::cos(expr) => expr.eval_complex(var, z).cos(),
            Expr::tg(expr) => expr.eval_complex(var, z).tan(),
            Expr::ctg(expr) => expr.eval_complex(var, z).tan().inv(),
            Expr::arcsin(expr) => expr.eval_complex(var, z).asin(),
            Expr::arccos(expr) => expr.eval_complex(var, z).acos(),
            Expr::arctg(expr) => expr.eval_complex(var, z).atan(),
            Expr::arcctg(expr) => Complex64::new(PI / 2.0, 0.0) - expr.eval_complex(var, z).atan(),
        }
    }

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let func = f.lambdify1D("x");
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, var: &str) -> Box<dyn Fn(f64) -> f64 + Send + Sync> {
        let expr = self.clone();
        let var = var.to_string();
        Box::new(move |x| expr.eval_real(&var, x))
    }

    pub fn lambdify1D_complex(&self, var: &str) -> Box<dyn Fn(Complex64) -> Complex64 + Send + Sync> {
        let expr = self.clone();
        let var = var.to_string();
        Box::new(move |z| expr.eval_complex(&var, z))
    }
}
