//! Front end of the scalar root finders.
//!
//! `ScalarRootFinder` holds the configuration and carries every method as an `impl` block
//! spread over the sibling modules. This module adds the method catalogue, dispatch by
//! method name, the logging wrapper and the string entry point.
//!
//! Example
//! ```
//! use RustedRoots::numerical::scalar_roots::root_finder_api::{
//!     InitialGuess, RootFindingMethod, ScalarRootFinder,
//! };
//! let mut finder = ScalarRootFinder::new();
//! finder.set_tolerance(1e-10);
//! finder.set_loglevel(Some("off".to_string()));
//! let outcome = finder
//!     .solve_symbolic_str(
//!         "x^3 - x - 1",
//!         "x",
//!         RootFindingMethod::NewtonRaphson,
//!         InitialGuess::Point(1.5),
//!     )
//!     .unwrap();
//! assert!((outcome.root().re - 1.3247179572).abs() < 1e-9);
//! ```
use std::path::PathBuf;
use std::time::Instant;

use log::{error, info};
use num_complex::Complex64;
use strum_macros::{Display, EnumIter, EnumString};

use crate::Utils::logger::init_logger;
use crate::numerical::scalar_roots::companion;
use crate::numerical::scalar_roots::config::{RootFinderSettings, SolverConfig};
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::evaluator::{
    ClosureFunction, ComplexClosureFunction, Evaluator, FunctionWithDerivative, SymbolicFunction,
};
use crate::numerical::scalar_roots::iteration::{IterationRecord, RootFindingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RootFindingMethod {
    Bisection,
    FalsePosition,
    BisectionAitken,
    NewtonRaphson,
    Secant,
    SecantAitken,
    Steffensen,
    /// the evaluator is the map g of x = g(x), not f
    FixedPoint,
    Muller,
}

impl RootFindingMethod {
    pub fn is_bracketing(&self) -> bool {
        matches!(
            self,
            RootFindingMethod::Bisection
                | RootFindingMethod::FalsePosition
                | RootFindingMethod::BisectionAitken
        )
    }

    /// Guess shape the method expects, as named in error messages
    pub fn expected_guess(&self) -> &'static str {
        match self {
            m if m.is_bracketing() => "InitialGuess::Bracket(a, b)",
            RootFindingMethod::Secant | RootFindingMethod::SecantAitken => {
                "InitialGuess::Pair(x0, x1)"
            }
            RootFindingMethod::Muller => "InitialGuess::ComplexTriple([x1, x2, x3])",
            _ => "InitialGuess::Point(x0)",
        }
    }
}

/// Seed values; which one is valid depends on the method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialGuess {
    /// endpoints enclosing a sign change
    Bracket(f64, f64),
    /// starting point of Newton-Raphson, Steffensen and fixed point
    Point(f64),
    /// the two starting points of the secant family
    Pair(f64, f64),
    /// the three starting points of Muller's method
    ComplexTriple([Complex64; 3]),
}

/// Result of `solve_with_method`: real for every method but Muller.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    Real(RootFindingResult),
    Complex(RootFindingResult<Complex64>),
}

impl SolverOutcome {
    /// root as a complex number (zero imaginary part for real methods)
    pub fn root(&self) -> Complex64 {
        match self {
            SolverOutcome::Real(result) => Complex64::new(result.root, 0.0),
            SolverOutcome::Complex(result) => result.root,
        }
    }

    pub fn iterations(&self) -> usize {
        match self {
            SolverOutcome::Real(result) => result.iterations,
            SolverOutcome::Complex(result) => result.iterations,
        }
    }

    pub fn method(&self) -> RootFindingMethod {
        match self {
            SolverOutcome::Real(result) => result.method,
            SolverOutcome::Complex(result) => result.method,
        }
    }

    pub fn trace(&self) -> &[IterationRecord] {
        match self {
            SolverOutcome::Real(result) => &result.trace,
            SolverOutcome::Complex(result) => &result.trace,
        }
    }

    pub fn trace_table(&self) -> String {
        match self {
            SolverOutcome::Real(result) => result.trace_table(),
            SolverOutcome::Complex(result) => result.trace_table(),
        }
    }
}

/// Main structure for scalar root finding methods
#[derive(Debug, Clone, Default)]
pub struct ScalarRootFinder {
    pub(crate) config: SolverConfig,
    loglevel: Option<String>,
    log_file: Option<PathBuf>,
    default_method: Option<RootFindingMethod>,
}

impl ScalarRootFinder {
    /// Create a new ScalarRootFinder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ScalarRootFinder with custom configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: RootFinderSettings) -> Self {
        Self {
            config: settings.config,
            loglevel: settings.loglevel,
            log_file: None,
            default_method: settings.method,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// method named in the settings the finder was built from
    pub fn default_method(&self) -> Option<RootFindingMethod> {
        self.default_method
    }

    /// Set tolerance for convergence
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.config.tolerance = tolerance;
    }

    /// Set maximum number of iterations
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.config.max_iterations = max_iterations;
    }

    /// "debug", "info", "warn", "error" or "off"; `None` means "info"
    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    /// also write the log into this file
    pub fn set_log_file(&mut self, log_file: Option<PathBuf>) {
        self.log_file = log_file;
    }

    /// Runs `method` on `function` from `guess` without touching the logger setup.
    pub fn solve_with_method<F>(
        &self,
        function: &F,
        method: RootFindingMethod,
        guess: InitialGuess,
    ) -> Result<SolverOutcome, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        use InitialGuess::*;
        use RootFindingMethod::*;
        let outcome = match (method, guess) {
            (Bisection, Bracket(a, b)) => SolverOutcome::Real(self.bisection(function, a, b)?),
            (FalsePosition, Bracket(a, b)) => {
                SolverOutcome::Real(self.false_position(function, a, b)?)
            }
            (BisectionAitken, Bracket(a, b)) => {
                SolverOutcome::Real(self.bisection_aitken(function, a, b)?)
            }
            (NewtonRaphson, Point(x0)) => SolverOutcome::Real(self.newton_raphson(function, x0)?),
            (Secant, Pair(x0, x1)) => SolverOutcome::Real(self.secant(function, x0, x1)?),
            (SecantAitken, Pair(x0, x1)) => {
                SolverOutcome::Real(self.secant_aitken(function, x0, x1)?)
            }
            (Steffensen, Point(x0)) => SolverOutcome::Real(self.steffensen(function, x0)?),
            (FixedPoint, Point(x0)) => SolverOutcome::Real(self.fixed_point(function, x0)?),
            (Muller, ComplexTriple([x1, x2, x3])) => {
                SolverOutcome::Complex(self.muller(function, x1, x2, x3)?)
            }
            (method, guess) => {
                return Err(RootFindingError::InvalidInput(format!(
                    "{} expects {}, got {:?}",
                    method,
                    method.expected_guess(),
                    guess
                )));
            }
        };
        Ok(outcome)
    }

    /// wrapper around `solve_with_method` to implement logging: installs the logger for the
    /// configured level, then logs the trace table and the elapsed time
    pub fn solve<F>(
        &self,
        function: &F,
        method: RootFindingMethod,
        guess: InitialGuess,
    ) -> Result<SolverOutcome, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        let loglevel = self.loglevel.as_deref().unwrap_or("info");
        init_logger(loglevel, self.log_file.as_deref())?;
        let begin = Instant::now();
        let outcome = self.solve_with_method(function, method, guess);
        match &outcome {
            Ok(outcome) => {
                info!(
                    "{} for {}: root {} after {} iterations\n{}",
                    method,
                    function.name(),
                    outcome.root(),
                    outcome.iterations(),
                    outcome.trace_table()
                );
            }
            Err(e) => error!("{} for {} failed: {}", method, function.name(), e),
        }
        info!("time elapsed: {:?}", begin.elapsed());
        outcome
    }

    /// Parses `expression` in the single variable `variable` and solves it. For
    /// `FixedPoint` the expression is the map g(x).
    pub fn solve_symbolic_str(
        &self,
        expression: &str,
        variable: &str,
        method: RootFindingMethod,
        guess: InitialGuess,
    ) -> Result<SolverOutcome, RootFindingError> {
        let function = SymbolicFunction::from_string(expression, variable)?;
        self.solve(&function, method, guess)
    }
}

/// Convenience function for quick bisection
pub fn bisection<F>(function: F, a: f64, b: f64, tolerance: f64) -> Result<f64, RootFindingError>
where
    F: Fn(f64) -> f64,
{
    let func = ClosureFunction::new(function, "bisection_function".to_string());
    let mut solver = ScalarRootFinder::new();
    solver.set_tolerance(tolerance);
    let result = solver.bisection(&func, a, b)?;
    Ok(result.root)
}

/// Convenience function for quick secant method
pub fn secant<F>(function: F, x0: f64, x1: f64, tolerance: f64) -> Result<f64, RootFindingError>
where
    F: Fn(f64) -> f64,
{
    let func = ClosureFunction::new(function, "secant_function".to_string());
    let mut solver = ScalarRootFinder::new();
    solver.set_tolerance(tolerance);
    let result = solver.secant(&func, x0, x1)?;
    Ok(result.root)
}

/// Convenience function for Newton-Raphson with an analytical derivative
pub fn newton_raphson<F, D>(
    function: F,
    derivative: D,
    x0: f64,
    tolerance: f64,
) -> Result<f64, RootFindingError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let func = FunctionWithDerivative::new(function, derivative, "newton_function".to_string());
    let mut solver = ScalarRootFinder::new();
    solver.set_tolerance(tolerance);
    let result = solver.newton_raphson(&func, x0)?;
    Ok(result.root)
}

/// Convenience function for Muller's method on a complex closure
pub fn muller<F>(
    function: F,
    seeds: [Complex64; 3],
    tolerance: f64,
) -> Result<Complex64, RootFindingError>
where
    F: Fn(Complex64) -> Complex64,
{
    let func = ComplexClosureFunction::new(function, "muller_function".to_string());
    let mut solver = ScalarRootFinder::new();
    solver.set_tolerance(tolerance);
    let [x1, x2, x3] = seeds;
    let result = solver.muller(&func, x1, x2, x3)?;
    Ok(result.root)
}

/// All roots of a real polynomial, coefficients from the highest degree down
pub fn find_all_roots(coefficients: &[f64]) -> Result<Vec<Complex64>, RootFindingError> {
    companion::find_all_roots(coefficients)
}
