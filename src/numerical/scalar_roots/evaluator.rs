//! The function `f` handed to the solvers.
//!
//! Every solver consumes `f` through the [`Evaluator`] trait, so the numerical core never
//! depends on a particular expression parser. Adapters cover plain closures, closures with an
//! analytical derivative, complex closures and symbolic expressions parsed from strings.
use num_complex::Complex64;

use crate::numerical::scalar_roots::constants::REAL_AXIS_IMAGINARY_FLOOR;
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::symbolic::symbolic_engine::Expr;

/// Capability to evaluate `f(x)` in real and, optionally, complex arithmetic.
///
/// Implementations must be deterministic and free of side effects: the solvers call them
/// repeatedly with the same arguments.
pub trait Evaluator {
    /// Evaluate the function at real point x
    fn evaluate_real(&self, x: f64) -> Result<f64, RootFindingError>;

    /// Evaluate the function at complex point z (needed by Muller's method only)
    fn evaluate_complex(&self, z: Complex64) -> Result<Complex64, RootFindingError> {
        Err(RootFindingError::InvalidInput(format!(
            "{} cannot be evaluated at complex z = {}",
            self.name(),
            z
        )))
    }

    /// Analytical derivative at x, `Ok(None)` when the evaluator has none
    fn derivative(&self, _x: f64) -> Result<Option<f64>, RootFindingError> {
        Ok(None)
    }

    /// Readable form of the analytical derivative, if known
    fn derivative_expression(&self) -> Option<String> {
        None
    }

    /// Get function name for debugging/logging
    fn name(&self) -> &str {
        "unnamed_function"
    }
}

/// NaN and infinities are domain errors of the evaluated function.
pub(crate) fn finite_or_error(x: f64, value: f64, name: &str) -> Result<f64, RootFindingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RootFindingError::Evaluation {
            at: x.to_string(),
            reason: format!("{} returned {}", name, value),
        })
    }
}

pub(crate) fn finite_or_error_complex(
    z: Complex64,
    value: Complex64,
    name: &str,
) -> Result<Complex64, RootFindingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RootFindingError::Evaluation {
            at: z.to_string(),
            reason: format!("{} returned {}", name, value),
        })
    }
}

/// Simple function wrapper for closures
pub struct ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    func: F,
    name: String,
}

impl<F> ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> Evaluator for ClosureFunction<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate_real(&self, x: f64) -> Result<f64, RootFindingError> {
        finite_or_error(x, (self.func)(x), &self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Function wrapper with analytical derivative
pub struct FunctionWithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    func: F,
    derivative_func: D,
    name: String,
}

impl<F, D> FunctionWithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub fn new(func: F, derivative_func: D, name: String) -> Self {
        Self {
            func,
            derivative_func,
            name,
        }
    }
}

impl<F, D> Evaluator for FunctionWithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn evaluate_real(&self, x: f64) -> Result<f64, RootFindingError> {
        finite_or_error(x, (self.func)(x), &self.name)
    }

    fn derivative(&self, x: f64) -> Result<Option<f64>, RootFindingError> {
        finite_or_error(x, (self.derivative_func)(x), &self.name).map(Some)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrapper for closures defined on the complex plane.
/// Real evaluation embeds x as x + 0i and accepts the result when its imaginary part is
/// negligible against its real part.
pub struct ComplexClosureFunction<F>
where
    F: Fn(Complex64) -> Complex64,
{
    func: F,
    name: String,
}

impl<F> ComplexClosureFunction<F>
where
    F: Fn(Complex64) -> Complex64,
{
    pub fn new(func: F, name: String) -> Self {
        Self { func, name }
    }
}

impl<F> Evaluator for ComplexClosureFunction<F>
where
    F: Fn(Complex64) -> Complex64,
{
    fn evaluate_real(&self, x: f64) -> Result<f64, RootFindingError> {
        let value = self.evaluate_complex(Complex64::new(x, 0.0))?;
        if value.im.abs() > REAL_AXIS_IMAGINARY_FLOOR * value.re.abs().max(1.0) {
            return Err(RootFindingError::Evaluation {
                at: x.to_string(),
                reason: format!("{} is not real on the real axis: {}", self.name, value),
            });
        }
        Ok(value.re)
    }

    fn evaluate_complex(&self, z: Complex64) -> Result<Complex64, RootFindingError> {
        finite_or_error_complex(z, (self.func)(z), &self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

////////////////////////SYMBOLIC FUNCTIONS//////////////////////////////////////////
/// Symbolic function of one variable parsed from a string, with its analytical derivative.
#[derive(Debug, Clone)]
pub struct SymbolicFunction {
    expr: Expr,
    derivative_expr: Expr,
    variable: String,
    name: String,
}

impl SymbolicFunction {
    /// Create a new symbolic function from a string expression
    pub fn from_string(expr_str: &str, variable: &str) -> Result<Self, RootFindingError> {
        let expr = Expr::parse_expression(expr_str).map_err(|reason| {
            RootFindingError::Evaluation {
                at: expr_str.to_string(),
                reason,
            }
        })?;
        Self::from_expr(expr, variable, Some(expr_str.to_string()))
    }

    /// Create a new symbolic function from an Expr; the only free variable allowed is `variable`
    pub fn from_expr(
        expr: Expr,
        variable: &str,
        name: Option<String>,
    ) -> Result<Self, RootFindingError> {
        let foreign: Vec<String> = expr
            .variables()
            .into_iter()
            .filter(|v| v != variable)
            .collect();
        if !foreign.is_empty() {
            return Err(RootFindingError::InvalidInput(format!(
                "expression {} depends on {:?} besides {}",
                expr, foreign, variable
            )));
        }
        let derivative_expr = expr.diff_simplified(variable);
        let name = name.unwrap_or_else(|| expr.to_string());
        Ok(Self {
            expr,
            derivative_expr,
            variable: variable.to_string(),
            name,
        })
    }

    pub fn expression(&self) -> &Expr {
        &self.expr
    }

    pub fn derivative_expr(&self) -> &Expr {
        &self.derivative_expr
    }
}

impl Evaluator for SymbolicFunction {
    fn evaluate_real(&self, x: f64) -> Result<f64, RootFindingError> {
        finite_or_error(x, self.expr.eval_real(&self.variable, x), &self.name)
    }

    fn evaluate_complex(&self, z: Complex64) -> Result<Complex64, RootFindingError> {
        finite_or_error_complex(z, self.expr.eval_complex(&self.variable, z), &self.name)
    }

    fn derivative(&self, x: f64) -> Result<Option<f64>, RootFindingError> {
        finite_or_error(x, self.derivative_expr.eval_real(&self.variable, x), &self.name).map(Some)
    }

    fn derivative_expression(&self) -> Option<String> {
        Some(self.derivative_expr.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
