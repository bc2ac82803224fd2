#[cfg(test)]
mod tests {
    use crate::numerical::scalar_roots::companion::{deflate, find_all_roots};
    use crate::numerical::scalar_roots::config::SolverConfig;
    use crate::numerical::scalar_roots::errors::RootFindingError;
    use crate::numerical::scalar_roots::evaluator::{
        ClosureFunction, ComplexClosureFunction, Evaluator, FunctionWithDerivative,
        SymbolicFunction,
    };
    use crate::numerical::scalar_roots::iteration::IterationRecord;
    use crate::numerical::scalar_roots::polynomial::Polynomial;
    use crate::numerical::scalar_roots::root_finder_api::{
        InitialGuess, RootFindingMethod, ScalarRootFinder, SolverOutcome,
    };
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use strum::IntoEnumIterator;

    const PLASTIC_NUMBER: f64 = 1.3247179572;

    fn finder(tolerance: f64, max_iterations: usize) -> ScalarRootFinder {
        let mut finder = ScalarRootFinder::with_config(SolverConfig {
            tolerance,
            max_iterations,
        });
        finder.set_loglevel(Some("off".to_string()));
        finder
    }

    fn real(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    #[test]
    fn test_bisection_finds_sqrt_2() {
        let f = ClosureFunction::new(|x| x * x - 2.0, "x^2 - 2".to_string());
        let result = finder(1e-8, 100).bisection(&f, 0.0, 2.0).unwrap();
        assert_relative_eq!(result.root, 1.41421356, epsilon = 1e-8);
    }

    #[test]
    fn test_newton_finds_real_root_of_cubic() {
        let f = SymbolicFunction::from_string("x^3 - x - 1", "x").unwrap();
        let result = finder(1e-10, 100).newton_raphson(&f, 1.5).unwrap();
        assert_relative_eq!(result.root, PLASTIC_NUMBER, epsilon = 1e-10);
        assert!(result.derivative.is_some());
    }

    #[test]
    fn test_muller_agrees_with_newton() {
        let f = SymbolicFunction::from_string("x^3 - x - 1", "x").unwrap();
        let solver = finder(1e-10, 100);
        let newton = solver.newton_raphson(&f, 1.5).unwrap().root;
        let muller = solver.muller(&f, real(0.0), real(1.0), real(2.0)).unwrap().root;
        assert!((muller - real(newton)).norm() < 1e-6);
    }

    #[test]
    fn test_secant_finds_dottie_number() {
        let f = ClosureFunction::new(|x: f64| x.cos() - x, "cos(x) - x".to_string());
        let result = finder(1e-10, 100).secant(&f, 0.0, 1.0).unwrap();
        assert_relative_eq!(result.root, 0.7390851332, epsilon = 1e-9);
    }

    #[test]
    fn test_deflation_of_cubic_with_integer_roots() {
        let mut roots: Vec<f64> = find_all_roots(&[1.0, -6.0, 11.0, -6.0])
            .unwrap()
            .iter()
            .map(|r| {
                assert!(r.im.abs() < 1e-6);
                r.re
            })
            .collect();
        roots.sort_by(f64::total_cmp);
        for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert_relative_eq!(*root, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_deflation_round_trip_reproduces_coefficients() {
        let cases: [&[f64]; 4] = [
            &[1.0, -6.0, 11.0, -6.0],
            &[2.0, 0.0, -3.0, 1.0, 5.0],
            &[1.0, 0.0, 0.0, 0.0, 0.0, -1.0],
            &[-3.0, 1.5, 2.0],
        ];
        for coefficients in cases {
            let polynomial = Polynomial::new(coefficients.to_vec()).unwrap();
            let report = deflate(&polynomial).unwrap();
            assert_eq!(report.roots.len(), coefficients.len() - 1);
            let expanded = Polynomial::from_roots(&report.roots);
            for (c, expected) in expanded.iter().zip(polynomial.normalized().coefficients()) {
                assert!(
                    (c - real(*expected)).norm() < 1e-8,
                    "{:?}: {} vs {}",
                    coefficients,
                    c,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_deflated_roots_are_roots() {
        let polynomial = Polynomial::new(vec![1.0, -2.0, 3.0, -4.0, 5.0, -6.0]).unwrap();
        for root in find_all_roots(polynomial.coefficients()).unwrap() {
            assert!(polynomial.eval_complex(root).norm() < 1e-7, "{}", root);
        }
    }

    #[test]
    fn test_bisection_without_sign_change_performs_no_iterations() {
        let counter = std::cell::Cell::new(0usize);
        let f = ClosureFunction::new(
            |x| {
                counter.set(counter.get() + 1);
                x * x + 1.0
            },
            "x^2 + 1".to_string(),
        );
        let err = finder(1e-8, 100).bisection(&f, -1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            RootFindingError::NoSignChange {
                a: -1.0,
                b: 1.0,
                fa: 2.0,
                fb: 2.0
            }
        );
        // only the two endpoints were evaluated
        assert_eq!(counter.get(), 2);
    }

    /// |f(root)| <= tolerance or the method's own step/width criterion held at termination
    #[test]
    fn test_converged_results_satisfy_their_stopping_rule() {
        let tolerance = 1e-9;
        let solver = finder(tolerance, 500);
        let f = SymbolicFunction::from_string("exp(x) - 3", "x").unwrap();
        let g = SymbolicFunction::from_string("x - (exp(x) - 3)/3", "x").unwrap();
        let seeds = [0.0, 0.5, 2.0].map(real);
        for method in RootFindingMethod::iter() {
            let (function, guess) = match method {
                m if m.is_bracketing() => (&f, InitialGuess::Bracket(0.0, 2.0)),
                RootFindingMethod::Secant | RootFindingMethod::SecantAitken => {
                    (&f, InitialGuess::Pair(0.5, 1.5))
                }
                RootFindingMethod::Muller => (&f, InitialGuess::ComplexTriple(seeds)),
                RootFindingMethod::FixedPoint => (&g, InitialGuess::Point(1.0)),
                _ => (&f, InitialGuess::Point(1.0)),
            };
            let outcome = solver.solve_with_method(function, method, guess).unwrap();
            let last_error = outcome.trace().last().map(IterationRecord::error);
            let residual = match &outcome {
                SolverOutcome::Real(result) => {
                    if method == RootFindingMethod::FixedPoint {
                        result.function_value.abs()
                    } else {
                        f.evaluate_real(result.root).unwrap().abs()
                    }
                }
                SolverOutcome::Complex(result) => f.evaluate_complex(result.root).unwrap().norm(),
            };
            assert!(
                residual <= tolerance || last_error.is_some_and(|e| e <= tolerance),
                "{}: residual {:e}, last error {:?}",
                method,
                residual,
                last_error
            );
            assert_relative_eq!(outcome.root().re, 3f64.ln(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_numerical_breakdowns_are_reported() {
        let solver = finder(1e-10, 100);
        let f = FunctionWithDerivative::new(|x| x * x - 1.0, |x| 2.0 * x, "x^2 - 1".to_string());
        assert!(matches!(
            solver.newton_raphson(&f, 0.0),
            Err(RootFindingError::DerivativeZero { .. })
        ));
        let f = ClosureFunction::new(|x: f64| x.cos(), "cos(x)".to_string());
        assert!(matches!(
            solver.secant(&f, -1.0, 1.0),
            Err(RootFindingError::StagnantSecant { .. })
        ));
        let f = ComplexClosureFunction::new(|_| Complex64::new(4.0, 0.0), "4".to_string());
        assert!(matches!(
            solver.muller(&f, real(0.0), real(1.0), real(2.0)),
            Err(RootFindingError::DegenerateMuller { .. })
        ));
        assert_eq!(
            find_all_roots(&[0.0, 1.0]),
            Err(RootFindingError::SingularPolynomial)
        );
    }

    #[test]
    fn test_fixed_point_of_cosine() {
        let g = ClosureFunction::new(|x: f64| x.cos(), "cos(x)".to_string());
        let result = finder(1e-10, 200).fixed_point(&g, 1.0).unwrap();
        assert_relative_eq!(result.root, 0.7390851332, epsilon = 1e-9);
        assert!(result.iterations < 200);
    }

    #[test]
    fn test_non_convergence_reports_best_point() {
        let f = ClosureFunction::new(|x: f64| x.cos() - x, "cos(x) - x".to_string());
        let err = finder(1e-14, 3).bisection(&f, 0.0, 1.0).unwrap_err();
        let best = err.best_point().unwrap();
        assert!((best.re - 0.7390851332).abs() < 0.25);
        assert!(matches!(
            err,
            RootFindingError::NonConvergence {
                method: RootFindingMethod::Bisection,
                iterations: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_configuration_is_rejected_before_evaluation() {
        let f = ClosureFunction::new(
            |_| panic!("must not be evaluated"),
            "never".to_string(),
        );
        for solver in [finder(0.0, 10), finder(1e-8, 0)] {
            assert!(matches!(
                solver.bisection(&f, 0.0, 1.0),
                Err(RootFindingError::InvalidInput(_))
            ));
            assert!(matches!(
                solver.steffensen(&f, 0.0),
                Err(RootFindingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_polynomial_drives_newton_and_muller() {
        // x^2 + 4 has no real root; Muller still finds 2i
        let p = Polynomial::new(vec![1.0, 0.0, 4.0]).unwrap();
        let result = finder(1e-12, 100)
            .muller(&p, real(-1.0), real(0.0), real(1.0))
            .unwrap();
        assert_relative_eq!(result.root.im.abs(), 2.0, epsilon = 1e-9);
        let quadratic = Polynomial::new(vec![1.0, -1.0, -1.0]).unwrap();
        let result = finder(1e-12, 100).newton_raphson(&quadratic, 2.0).unwrap();
        // golden ratio
        assert_relative_eq!(result.root, (1.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-10);
    }
}
