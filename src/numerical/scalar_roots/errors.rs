//! Error types of the root finders.
//!
//! ┌ input errors      : `InvalidInput`, `SingularPolynomial`
//! ├ precondition      : `NoSignChange`
//! ├ numerical breakdown: `DerivativeZero`, `StagnantSecant`, `DegenerateMuller`
//! ├ evaluator failure : `Evaluation`
//! └ iteration cap     : `NonConvergence` (keeps the best point found)
use num_complex::Complex64;
use thiserror::Error;

use crate::numerical::scalar_roots::root_finder_api::RootFindingMethod;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative vanishes at x = {x}: f'(x) = {derivative}")]
    DerivativeZero { x: f64, derivative: f64 },

    #[error("secant stagnated: f({x0}) = f({x1}) = {value}")]
    StagnantSecant { x0: f64, x1: f64, value: f64 },

    #[error("Muller step degenerated at x = {x}")]
    DegenerateMuller { x: Complex64 },

    #[error("leading coefficient of the polynomial is zero")]
    SingularPolynomial,

    #[error("{method} did not converge in {iterations} iterations, best point {best}")]
    NonConvergence {
        method: RootFindingMethod,
        iterations: usize,
        best: Complex64,
    },

    #[error("evaluation failed at x = {at}: {reason}")]
    Evaluation { at: String, reason: String },
}

impl RootFindingError {
    /// Best point reached before the iteration cap, if this is a non-convergence error.
    pub fn best_point(&self) -> Option<Complex64> {
        match self {
            RootFindingError::NonConvergence { best, .. } => Some(*best),
            _ => None,
        }
    }

    pub(crate) fn non_convergence(method: RootFindingMethod, iterations: usize, best: f64) -> Self {
        RootFindingError::NonConvergence {
            method,
            iterations,
            best: Complex64::new(best, 0.0),
        }
    }
}
