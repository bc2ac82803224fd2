/// named numerical floors shared by the solvers
pub mod constants;
/// error type of all root finders
pub mod errors;
/// tolerance, iteration cap and their TOML form
pub mod config;
/// the function handed to the solvers: closures, closures with derivative, symbolic expressions
pub mod evaluator;
/// per-iteration records, results, trace tables
pub mod iteration;
/// Aitken Δ² extrapolation
pub mod aitken;
/// bisection, false position, bisection with Aitken extrapolation
pub mod bracketing;
/// Newton-Raphson, secant, secant-Aitken, Steffensen, fixed point
pub mod open_methods;
/// Muller's method in the complex plane
pub mod muller;
/// real polynomials: Horner evaluation, synthetic division
pub mod polynomial;
/// all roots of a polynomial from the companion matrix, with deflation
pub mod companion;
/// ScalarRootFinder front end: method catalogue, dispatch, logging wrapper
/// # Example
/// ```
/// use RustedRoots::numerical::scalar_roots::root_finder_api::find_all_roots;
/// // (x - 1)(x - 2)(x - 3)
/// let roots = find_all_roots(&[1.0, -6.0, 11.0, -6.0]).unwrap();
/// assert_eq!(roots.len(), 3);
/// ```
pub mod root_finder_api;
mod scalar_roots_tests;
