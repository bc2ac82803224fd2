//! Open-domain methods: Newton-Raphson, secant, secant with Aitken extrapolation,
//! Steffensen and fixed-point iteration. None of them needs a bracket, none of them is
//! guaranteed to converge.
use log::{debug, info, warn};

use crate::numerical::scalar_roots::aitken::AitkenWindow;
use crate::numerical::scalar_roots::constants::{
    CENTRAL_DIFFERENCE_STEP, DERIVATIVE_FLOOR, SECANT_STAGNATION_FLOOR,
    STEFFENSEN_DENOMINATOR_FLOOR,
};
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::evaluator::Evaluator;
use crate::numerical::scalar_roots::iteration::{
    DerivativeSource, IterationRecord, RootFindingResult,
};
use crate::numerical::scalar_roots::root_finder_api::{RootFindingMethod, ScalarRootFinder};

fn check_seed(name: &str, x: f64) -> Result<(), RootFindingError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(RootFindingError::InvalidInput(format!(
            "initial guess {} = {} is not finite",
            name, x
        )))
    }
}

/// f'(x) from the evaluator, or (f(x+h) - f(x-h)) / 2h when it has no derivative
fn slope<F>(function: &F, x: f64) -> Result<(f64, DerivativeSource), RootFindingError>
where
    F: Evaluator + ?Sized,
{
    match function.derivative(x)? {
        Some(derivative) => Ok((
            derivative,
            DerivativeSource::Analytic {
                expression: function.derivative_expression(),
            },
        )),
        None => {
            let h = CENTRAL_DIFFERENCE_STEP;
            let derivative =
                (function.evaluate_real(x + h)? - function.evaluate_real(x - h)?) / (2.0 * h);
            Ok((derivative, DerivativeSource::CentralDifference { step: h }))
        }
    }
}

impl ScalarRootFinder {
    /// Newton-Raphson: `x_{n+1} = x_n - f(x_n) / f'(x_n)`.
    /// Converges when `|f(x_{n+1})| <= tolerance`. The derivative actually used is returned in
    /// `RootFindingResult::derivative`.
    pub fn newton_raphson<F>(
        &self,
        function: &F,
        x0: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.config.validate()?;
        check_seed("x0", x0)?;
        let tolerance = self.config.tolerance;
        let method = RootFindingMethod::NewtonRaphson;
        debug!("Newton-Raphson method for function: {}, x0 = {}", function.name(), x0);

        let mut x = x0;
        let mut fx = function.evaluate_real(x)?;
        let (mut best, mut f_best) = (x, fx);
        let mut source: Option<DerivativeSource> = None;
        if fx.abs() <= tolerance {
            let (_, used) = slope(function, x)?;
            let mut result = RootFindingResult::new(x, fx, method, Vec::new());
            result.derivative = Some(used);
            return Ok(result);
        }

        let mut trace = Vec::new();
        for iteration in 1..=self.config.max_iterations {
            let (dfx, used) = slope(function, x)?;
            source.get_or_insert(used);
            if dfx.abs() < DERIVATIVE_FLOOR {
                warn!("derivative {:e} at x = {} is below the floor", dfx, x);
                return Err(RootFindingError::DerivativeZero { x, derivative: dfx });
            }
            let x_next = x - fx / dfx;
            let f_next = function.evaluate_real(x_next)?;
            let error = (x_next - x).abs();
            trace.push(IterationRecord::Newton {
                iteration,
                x,
                f_x: fx,
                df_x: dfx,
                x_next,
                error,
            });
            debug!(
                "iteration {}: x = {:.10}, f(x) = {:.2e}, f'(x) = {:.4e}",
                iteration, x_next, f_next, dfx
            );
            if f_next.abs() < f_best.abs() {
                (best, f_best) = (x_next, f_next);
            }
            if f_next.abs() <= tolerance {
                info!("Newton-Raphson converged to {} in {} iterations", x_next, iteration);
                let mut result = RootFindingResult::new(x_next, f_next, method, trace);
                result.derivative = source;
                return Ok(result);
            }
            x = x_next;
            fx = f_next;
        }

        warn!(
            "Newton-Raphson stopped after {} iterations, best point {} with f = {:e}",
            self.config.max_iterations, best, f_best
        );
        Err(RootFindingError::non_convergence(
            method,
            self.config.max_iterations,
            best,
        ))
    }

    /// Secant method for finding roots
    /// Requires two initial guesses x0 and x1
    pub fn secant<F>(
        &self,
        function: &F,
        x0: f64,
        x1: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.secant_family(function, x0, x1, RootFindingMethod::Secant)
    }

    /// Secant recurrence with Aitken Δ² applied to every three consecutive iterates
    /// (the two seeds included). The extrapolated point is reported when its residual is
    /// smaller; the recurrence itself is never altered.
    pub fn secant_aitken<F>(
        &self,
        function: &F,
        x0: f64,
        x1: f64,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.secant_family(function, x0, x1, RootFindingMethod::SecantAitken)
    }

    fn secant_family<F>(
        &self,
        function: &F,
        mut x0: f64,
        mut x1: f64,
        method: RootFindingMethod,
    ) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.config.validate()?;
        check_seed("x0", x0)?;
        check_seed("x1", x1)?;
        let tolerance = self.config.tolerance;
        let mut f0 = function.evaluate_real(x0)?;
        let mut f1 = function.evaluate_real(x1)?;
        debug!("{} for function: {}, x0 = {}, x1 = {}", method, function.name(), x0, x1);

        // Check if we already have a root
        if f0.abs() <= tolerance {
            return Ok(RootFindingResult::new(x0, f0, method, Vec::new()));
        }
        if f1.abs() <= tolerance {
            return Ok(RootFindingResult::new(x1, f1, method, Vec::new()));
        }

        let mut aitken = AitkenWindow::new();
        if method == RootFindingMethod::SecantAitken {
            aitken.push(x0);
            aitken.push(x1);
        }
        let (mut best, mut f_best) = if f0.abs() < f1.abs() { (x0, f0) } else { (x1, f1) };
        let mut trace = Vec::new();

        for iteration in 1..=self.config.max_iterations {
            if (f1 - f0).abs() < SECANT_STAGNATION_FLOOR {
                warn!("{} stagnated: f({}) = f({}) = {}", method, x0, x1, f1);
                return Err(RootFindingError::StagnantSecant { x0, x1, value: f1 });
            }
            let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
            let f2 = function.evaluate_real(x2)?;
            let error = (x2 - x1).abs();

            let accelerated = match method {
                RootFindingMethod::SecantAitken => aitken.push(x2),
                _ => None,
            };
            let (mut candidate, mut f_candidate) = (x2, f2);
            if let Some(x) = accelerated {
                if let Ok(fx) = function.evaluate_real(x) {
                    if fx.abs() < f2.abs() {
                        (candidate, f_candidate) = (x, fx);
                    }
                }
            }
            if f_candidate.abs() < f_best.abs() {
                (best, f_best) = (candidate, f_candidate);
            }

            trace.push(IterationRecord::Secant {
                iteration,
                x0,
                x1,
                x_next: x2,
                f_next: f2,
                error,
                accelerated,
            });
            debug!("iteration {}: x = {:.10}, f(x) = {:.2e}", iteration, x2, f2);

            if f_candidate.abs() <= tolerance || error <= tolerance {
                info!("{} converged to {} in {} iterations", method, candidate, iteration);
                return Ok(RootFindingResult::new(candidate, f_candidate, method, trace));
            }

            x0 = x1;
            f0 = f1;
            x1 = x2;
            f1 = f2;
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

    /// Steffensen's method: `x_{n+1} = x_n - f(x_n)² / (f(x_n + f(x_n)) - f(x_n))`.
    /// A denominator smaller than the floor keeps its sign and is replaced by the floor.
    pub fn steffensen<F>(&self, function: &F, x0: f64) -> Result<RootFindingResult, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.config.validate()?;
        check_seed("x0", x0)?;
        let tolerance = self.config.tolerance;
        let method = RootFindingMethod::Steffensen;
        debug!("Steffensen method for function: {}, x0 = {}", function.name(), x0);

        let mut x = x0;
        let mut fx = function.evaluate_real(x)?;
        if fx.abs() <= tolerance {
            return Ok(RootFindingResult::new(x, fx, method, Vec::new()));
        }
        let (mut best, mut f_best) = (x, fx);
        let mut trace = Vec::new();

        for iteration in 1..=self.config.max_iterations {
            let f_shifted = function.evaluate_real(x + fx)?;
            let mut denominator = f_shifted - fx;
            if denominator.abs() < STEFFENSEN_DENOMINATOR_FLOOR {
                debug!("Steffensen denominator {:e} floored at x = {}", denominator, x);
                denominator = STEFFENSEN_DENOMINATOR_FLOOR.copysign(denominator);
            }
            let x_next = x - fx * fx / denominator;
            let f_next = function.evaluate_real(x_next)?;
            let error = (x_next - x).abs();
            trace.push(IterationRecord::Steffensen {
                iteration,
                x,
                f_x: fx,
                f_shifted,
                x_next,
                error,
            });
            debug!("iteration {}: x = {:.10}, f(x) = {:.2e}", iteration, x_next, f_next);
            if f_next.abs() < f_best.abs() {
                (best, f_best) = (x_next, f_next);
            }
            if f_next.abs() <= tolerance || error <= tolerance {
                info!("Steffensen converged to {} in {} iterations", x_next, iteration);
                return Ok(RootFindingResult::new(x_next, f_next, method, trace));
            }
            x = x_next;
            fx = f_next;
        }

        warn!(
            "Steffensen stopped after {} iterations, best point {} with f = {:e}",
            self.config.max_iterations, best, f_best
        );
        Err(RootFindingError::non_convergence(
            method,
            self.config.max_iterations,
            best,
        ))
    }

    /// Fixed-point iteration `x_{n+1} = g(x_n)`; `function` is g, not f.
    /// Converges when `|g(x_n) - x_n| <= tolerance`; the reported function value is the
    /// residual `g(root) - root`. No contraction check is made: a diverging map runs into
    /// the iteration cap, a map that overflows fails with an evaluation error.
    pub fn fixed_point<G>(&self, function: &G, x0: f64) -> Result<RootFindingResult, RootFindingError>
    where
        G: Evaluator + ?Sized,
    {
        self.config.validate()?;
        check_seed("x0", x0)?;
        let tolerance = self.config.tolerance;
        let method = RootFindingMethod::FixedPoint;
        debug!("fixed point iteration for g = {}, x0 = {}", function.name(), x0);

        let mut x = x0;
        let (mut best, mut best_error) = (x, f64::INFINITY);
        let mut trace = Vec::new();
        for iteration in 1..=self.config.max_iterations {
            let gx = function.evaluate_real(x)?;
            let error = (gx - x).abs();
            trace.push(IterationRecord::FixedPoint {
                iteration,
                x,
                g_x: gx,
                error,
            });
            debug!("iteration {}: x = {:.10}, |g(x) - x| = {:.2e}", iteration, gx, error);
            if error < best_error {
                (best, best_error) = (gx, error);
            }
            if error <= tolerance {
                let residual = function.evaluate_real(gx)? - gx;
                info!("fixed point converged to {} in {} iterations", gx, iteration);
                return Ok(RootFindingResult::new(gx, residual, method, trace));
            }
            x = gx;
        }

        warn!(
            "fixed point iteration stopped after {} iterations, best point {} with |g(x) - x| = {:e}",
            self.config.max_iterations, best, best_error
        );
        Err(RootFindingError::non_convergence(
            method,
            self.config.max_iterations,
            best,
        ))
    }
}
