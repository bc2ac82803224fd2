/// Iterative solvers of scalar equations f(x) = 0 and polynomial root finding
/// # Example
/// ```
/// use RustedRoots::numerical::scalar_roots::evaluator::ClosureFunction;
/// use RustedRoots::numerical::scalar_roots::root_finder_api::ScalarRootFinder;
/// let f = ClosureFunction::new(|x: f64| x * x - 2.0, "x^2 - 2".to_string());
/// let mut finder = ScalarRootFinder::new();
/// finder.set_tolerance(1e-8);
/// let result = finder.bisection(&f, 0.0, 2.0).unwrap();
/// println!("{}", result.trace_table());
/// assert!((result.root - 2f64.sqrt()).abs() < 1e-8);
/// ```
pub mod scalar_roots;
