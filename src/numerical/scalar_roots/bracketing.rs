//! Bracketing methods: bisection, false position (regula falsi) and bisection with Aitken
//! extrapolation of the midpoints.
//!
//! All three require `f(a) f(b) <= 0` and keep a bracket `[a, b]` around the root. The new
//! point `c` replaces the endpoint whose function value has the same sign as `f(c)`.
//!
//! False position inherits this update rule unchanged. On convex or concave functions one
//! endpoint is then never replaced and convergence degrades to linear; this is the classical
//! behaviour of the method and is kept as is.
use log::{debug, info, warn};

use crate::numerical::scalar_roots::aitken::AitkenWindow;
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::evaluator::Evaluator;
use crate::numerical::scalar_roots::iteration::{IterationRecord, RootFindingResult};
use crate::numerical::scalar_roots::root_finder_api::{RootFindingMethod, ScalarRootFinder};

impl ScalarRootFinder {
    /// Bisection method: `c = (a + b) / 2`.
    /// Stops when the distance between consecutive midpoints (on the first step `|b - a|`)
    /// is at most the tolerance or when `|f(c)| < tolerance`.
    pub fn bisection<F>(&self, function: &F, a: f64, b: f64) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.bracketing(function, a, b, RootFindingMethod::Bisection)
    }

    /// False position: `c = a - (a - b) f(a) / (f(a) - f(b))`, same stopping rule as bisection.
    pub fn false_position<F>(
        &self,
        function: &F,
        a: f64,
        b: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.bracketing(function, a, b, RootFindingMethod::FalsePosition)
    }

    /// Bisection whose last three midpoints are extrapolated with Aitken Δ².
    /// The extrapolated point is reported as the root whenever its residual is smaller than
    /// the residual of the current midpoint.
    pub fn bisection_aitken<F>(
        &self,
        function: &F,
        a: f64,
        b: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.bracketing(function, a, b, RootFindingMethod::BisectionAitken)
    }

    fn bracketing<F>(
        &self,
        function: &F,
        a: f64,
        b: f64,
        method: RootFindingMethod,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.config.validate()?;
        if !(a.is_finite() && b.is_finite()) || a == b {
            return Err(RootFindingError::InvalidInput(format!(
                "bracket [{}, {}] must be finite and non-degenerate",
                a, b
            )));
        }
        let tolerance = self.config.tolerance;
        let (mut a, mut b) = if a > b { (b, a) } else { (a, b) };
        let mut fa = function.evaluate_real(a)?;
        let mut fb = function.evaluate_real(b)?;

        if fa == 0.0 {
            return Ok(RootFindingResult::new(a, fa, method, Vec::new()));
        }
        if fb == 0.0 {
            return Ok(RootFindingResult::new(b, fb, method, Vec::new()));
        }
        // signs, not the product: fa * fb underflows to 0 for tiny values
        if fa.signum() == fb.signum() {
            warn!("{}: f({}) = {} and f({}) = {} have the same sign", method, a, fa, b, fb);
            return Err(RootFindingError::NoSignChange { a, b, fa, fb });
        }

        debug!("{} for function {} on [{}, {}]", method, function.name(), a, b);
        let mut trace = Vec::new();
        let mut aitken = AitkenWindow::new();
        let mut previous: Option<f64> = None;
        let (mut best, mut f_best) = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };

        for iteration in 1..=self.config.max_iterations {
            let c = match method {
                RootFindingMethod::FalsePosition => a - (a - b) * fa / (fa - fb),
                _ => 0.5 * (a + b),
            };
            let fc = function.evaluate_real(c)?;
            let error = previous.map_or((b - a).abs(), |p| (c - p).abs());

            let accelerated = match method {
                RootFindingMethod::BisectionAitken => aitken.push(c),
                _ => None,
            };
            let (mut candidate, mut f_candidate) = (c, fc);
            if let Some(x) = accelerated {
                // the extrapolated point may fall outside the domain of f, then it is ignored
                if let Ok(fx) = function.evaluate_real(x) {
                    if fx.abs() < fc.abs() {
                        (candidate, f_candidate) = (x, fx);
                    }
                }
            }
            if f_candidate.abs() < f_best.abs() {
                (best, f_best) = (candidate, f_candidate);
            }

            trace.push(IterationRecord::Bracketing {
                iteration,
                a,
                b,
                c,
                f_c: fc,
                error,
                accelerated,
            });
            debug!(
                "iteration {}: x = {:.10}, f(x) = {:.2e}, interval = [{:.6}, {:.6}]",
                iteration, c, fc, a, b
            );

            if error <= tolerance || f_candidate.abs() < tolerance {
                info!(
                    "{} converged to {} in {} iterations",
                    method, candidate, iteration
                );
                return Ok(RootFindingResult::new(candidate, f_candidate, method, trace));
            }

            if fa.signum() == fc.signum() {
                a = c;
                fa = fc;
            } else {
                b = c;
                fb = fc;
            }
            previous = Some(c);
        }

        warn!(
            "{} stopped after {} iterations, best point {} with f = {:e}",
            method, self.config.max_iterations, best, f_best
        );
        Err(RootFindingError::non_convergence(
            method,
            self.config.max_iterations,
            best,
        ))
    }
}
