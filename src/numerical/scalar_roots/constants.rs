//! Numerical floors shared by the solvers.
//!
//! Two kinds of thresholds live here. Noise floors separate a legitimately small quantity
//! from floating-point round-off (differences of nearly equal function values, Aitken
//! second differences). Degeneracy floors detect a genuinely singular step (a vanishing
//! derivative, a Muller quadratic that collapsed). Both are absolute and tuned for
//! problems scaled around unity.

/// |f'(x)| below this value makes a Newton-Raphson step meaningless.
pub const DERIVATIVE_FLOOR: f64 = 1e-10;

/// Step of the central difference used when an evaluator supplies no derivative.
pub const CENTRAL_DIFFERENCE_STEP: f64 = 1e-8;

/// |f(x1) - f(x0)| below this value stalls the secant recurrence.
pub const SECANT_STAGNATION_FLOOR: f64 = 1e-15;

/// Magnitude the Steffensen denominator `f(x + f(x)) - f(x)` is clamped to.
/// Keeps the step finite; it does not make the step meaningful.
pub const STEFFENSEN_DENOMINATOR_FLOOR: f64 = 1e-12;

/// Aitken extrapolation is applied only when |x2 - 2x1 + x0| exceeds this value.
pub const AITKEN_DENOMINATOR_FLOOR: f64 = 1e-14;

/// Two Muller abscissas closer than this are treated as coincident.
pub const MULLER_COINCIDENCE_FLOOR: f64 = 1e-14;

/// Shift `(eps, eps)` applied to one of two coincident Muller abscissas.
pub const MULLER_PERTURBATION: f64 = 1e-8;

/// Muller quadratic coefficients and the chosen denominator below this magnitude are zero.
pub const MULLER_DEGENERACY_FLOOR: f64 = 1e-14;

/// Relative size of the imaginary part under which a companion eigenvalue is taken as real.
pub const DEFLATION_IMAGINARY_FLOOR: f64 = 1e-10;

/// Relative size of the imaginary part under which a complex evaluator's value on the real
/// axis counts as real. Round-off in complex arithmetic leaves residues of this order.
pub const REAL_AXIS_IMAGINARY_FLOOR: f64 = 1e-12;
