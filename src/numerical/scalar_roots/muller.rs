//! Muller's method: a quadratic is fitted through the last three points and its root nearest
//! to the newest point becomes the next iterate. All arithmetic is complex, so the method
//! reaches complex roots of real functions from real seeds.
use log::{debug, info, warn};
use num_complex::Complex64;

use crate::numerical::scalar_roots::constants::{
    MULLER_COINCIDENCE_FLOOR, MULLER_DEGENERACY_FLOOR, MULLER_PERTURBATION,
};
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::evaluator::Evaluator;
use crate::numerical::scalar_roots::iteration::{IterationRecord, RootFindingResult};
use crate::numerical::scalar_roots::root_finder_api::{RootFindingMethod, ScalarRootFinder};

/// Shifts `older` by (ε, ε) when it coincides with `newer`; returns true if it moved.
fn separate(older: &mut Complex64, newer: Complex64) -> bool {
    if (*older - newer).norm() < MULLER_COINCIDENCE_FLOOR {
        *older += Complex64::new(MULLER_PERTURBATION, MULLER_PERTURBATION);
        true
    } else {
        false
    }
}

/// One Muller step from the points (x1, x2, x3) and their values.
fn muller_step(
    [x1, x2, x3]: [Complex64; 3],
    [f1, f2, f3]: [Complex64; 3],
) -> Result<Complex64, RootFindingError> {
    let h1 = x2 - x1;
    let h2 = x3 - x2;
    let d1 = (f2 - f1) / h1;
    let d2 = (f3 - f2) / h2;
    let a = (d2 - d1) / (h2 + h1);
    let b = a * h2 + d2;
    let c = f3;

    if a.norm() < MULLER_DEGENERACY_FLOOR {
        // the parabola is a line: secant step
        if b.norm() < MULLER_DEGENERACY_FLOOR {
            return Err(RootFindingError::DegenerateMuller { x: x3 });
        }
        return Ok(x3 - c / b);
    }
    let discriminant = (b * b - 4.0 * a * c).sqrt();
    let plus = b + discriminant;
    let minus = b - discriminant;
    let denominator = if plus.norm() > minus.norm() { plus } else { minus };
    if denominator.norm() < MULLER_DEGENERACY_FLOOR {
        return Err(RootFindingError::DegenerateMuller { x: x3 });
    }
    Ok(x3 - 2.0 * c / denominator)
}

impl ScalarRootFinder {
    /// Muller's method from three complex seeds.
    /// Converges when `|x4 - x3| < tolerance` or `|f(x4)| < tolerance`.
    pub fn muller<F>(
        &self,
        function: &F,
        x1: Complex64,
        x2: Complex64,
        x3: Complex64,
    ) -> Result<RootFindingResult<Complex64>, RootFindingError>
    where
        F: Evaluator + ?Sized,
    {
        self.config.validate()?;
        if !(x1.is_finite() && x2.is_finite() && x3.is_finite()) {
            return Err(RootFindingError::InvalidInput(format!(
                "Muller seeds must be finite, got {}, {}, {}",
                x1, x2, x3
            )));
        }
        let tolerance = self.config.tolerance;
        let method = RootFindingMethod::Muller;
        debug!(
            "Muller method for function: {}, seeds {}, {}, {}",
            function.name(),
            x1,
            x2,
            x3
        );

        let mut x = [x1, x2, x3];
        let mut f = [
            function.evaluate_complex(x1)?,
            function.evaluate_complex(x2)?,
            function.evaluate_complex(x3)?,
        ];
        let (mut best, mut f_best) = (x[2], f[2]);
        let mut trace = Vec::new();

        for iteration in 1..=self.config.max_iterations {
            // a shift can create a new coincidence, repeat until all three are distinct
            loop {
                let mut moved = false;
                for (older, newer) in [(0, 1), (1, 2), (0, 2)] {
                    let anchor = x[newer];
                    if separate(&mut x[older], anchor) {
                        debug!("coincident Muller points, {} moved to {}", anchor, x[older]);
                        f[older] = function.evaluate_complex(x[older])?;
                        moved = true;
                    }
                }
                if !moved {
                    break;
                }
            }

            let x_next = muller_step(x, f).inspect_err(|_| {
                warn!("Muller step degenerated at {}", x[2]);
            })?;
            let f_next = function.evaluate_complex(x_next)?;
            let error = (x_next - x[2]).norm();
            trace.push(IterationRecord::Muller {
                iteration,
                x1: x[0],
                x2: x[1],
                x3: x[2],
                x_next,
                f_next,
                error,
            });
            debug!(
                "iteration {}: x = {:.10}, |f(x)| = {:.2e}",
                iteration,
                x_next,
                f_next.norm()
            );
            if f_next.norm() < f_best.norm() {
                (best, f_best) = (x_next, f_next);
            }
            if error < tolerance || f_next.norm() < tolerance {
                info!("Muller converged to {} in {} iterations", x_next, iteration);
                return Ok(RootFindingResult::new(x_next, f_next, method, trace));
            }
            x = [x[1], x[2], x_next];
            f = [f[1], f[2], f_next];
        }

        warn!(
            "Muller stopped after {} iterations, best point {} with |f| = {:e}",
            self.config.max_iterations,
            best,
            f_best.norm()
        );
        Err(RootFindingError::NonConvergence {
            method,
            iterations: self.config.max_iterations,
            best,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::scalar_roots::config::SolverConfig;
    use crate::numerical::scalar_roots::evaluator::{ComplexClosureFunction, SymbolicFunction};
    use approx::assert_relative_eq;

    fn finder(tolerance: f64, max_iterations: usize) -> ScalarRootFinder {
        ScalarRootFinder::with_config(SolverConfig {
            tolerance,
            max_iterations,
        })
    }

    fn real(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    #[test]
    fn test_muller_real_root_of_cubic() {
        let solver = finder(1e-10, 100);
        let func = ComplexClosureFunction::new(|z| z * z * z - z - 1.0, "x^3 - x - 1".to_string());
        let result = solver.muller(&func, real(0.0), real(1.0), real(2.0)).unwrap();
        assert_relative_eq!(result.root.re, 1.324717957244746, epsilon = 1e-6);
        assert!(result.root.im.abs() < 1e-6);
        assert_eq!(result.method, RootFindingMethod::Muller);
    }

    #[test]
    fn test_muller_reaches_complex_root_from_real_seeds() {
        let solver = finder(1e-12, 100);
        let func = SymbolicFunction::from_string("x^2 + 1", "x").unwrap();
        let result = solver.muller(&func, real(-1.0), real(0.5), real(2.0)).unwrap();
        assert_relative_eq!(result.root.re, 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.root.im.abs(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_muller_step_picks_larger_denominator() {
        // f = x^2 - 4 through 0, 1, 3: the fitted parabola is exact, the step lands on 2
        let x = [real(0.0), real(1.0), real(3.0)];
        let f = x.map(|z| z * z - 4.0);
        let next = muller_step(x, f).unwrap();
        assert_relative_eq!(next.re, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_muller_linear_function_uses_secant_step() {
        let solver = finder(1e-12, 10);
        let func = ComplexClosureFunction::new(|z| 2.0 * z - 3.0, "2x - 3".to_string());
        let result = solver.muller(&func, real(0.0), real(1.0), real(5.0)).unwrap();
        assert_relative_eq!(result.root.re, 1.5, epsilon = 1e-12);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_muller_coincident_points_are_perturbed() {
        let solver = finder(1e-10, 100);
        let func = ComplexClosureFunction::new(|z| z * z - 2.0, "x^2 - 2".to_string());
        let result = solver.muller(&func, real(1.0), real(1.0), real(1.0)).unwrap();
        assert_relative_eq!(result.root.re.abs(), std::f64::consts::SQRT_2, epsilon = 1e-8);
        match &result.trace[0] {
            IterationRecord::Muller { x1, x2, x3, .. } => {
                assert_ne!(x1, x2);
                assert_ne!(x2, x3);
                assert_ne!(x1, x3);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_muller_degenerate_on_constant() {
        let solver = finder(1e-10, 100);
        let func = ComplexClosureFunction::new(|_| Complex64::new(1.0, 0.0), "1".to_string());
        let err = solver.muller(&func, real(0.0), real(1.0), real(2.0)).unwrap_err();
        assert_eq!(err, RootFindingError::DegenerateMuller { x: real(2.0) });
    }

    #[test]
    fn test_muller_max_iterations_keeps_complex_best_point() {
        // exp(z) + z^2 + 3 has no real root; after three steps the iterate is near
        // -0.2295 - 1.7143i but |f| is still about 2e-3
        let solver = finder(1e-14, 3);
        let func = ComplexClosureFunction::new(|z| z.exp() + z * z + 3.0, "exp(x) + x^2 + 3".to_string());
        let err = solver.muller(&func, real(-1.0), real(0.0), real(1.0)).unwrap_err();
        assert!(matches!(
            err,
            RootFindingError::NonConvergence {
                method: RootFindingMethod::Muller,
                iterations: 3,
                ..
            }
        ));
        let best = err.best_point().unwrap();
        assert!(best.is_finite());
        assert!((best - Complex64::new(-0.2295, -1.7143)).norm() < 1e-2);
        assert!(best.im.abs() > 1.0);
    }

    #[test]
    fn test_muller_degenerate_denominator() {
        // through (-1, 1), (1, 1), (0, 0) the parabola of x^2 has b = c = 0: both
        // candidate denominators b ± sqrt(b^2 - 4ac) vanish
        let x = [real(-1.0), real(1.0), real(0.0)];
        let f = x.map(|z| z * z);
        assert_eq!(
            muller_step(x, f),
            Err(RootFindingError::DegenerateMuller { x: real(0.0) })
        );
        let solver = finder(1e-10, 100);
        let func = ComplexClosureFunction::new(|z| z * z, "x^2".to_string());
        let err = solver.muller(&func, x[0], x[1], x[2]).unwrap_err();
        assert_eq!(err, RootFindingError::DegenerateMuller { x: real(0.0) });
    }

    #[test]
    fn test_muller_rejects_real_only_evaluator() {
        use crate::numerical::scalar_roots::evaluator::ClosureFunction;
        let solver = finder(1e-10, 100);
        let func = ClosureFunction::new(|x| x - 1.0, "x - 1".to_string());
        assert!(matches!(
            solver.muller(&func, real(0.0), real(1.0), real(2.0)),
            Err(RootFindingError::InvalidInput(_))
        ));
    }
}
