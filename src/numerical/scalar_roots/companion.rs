//! All roots of a real polynomial: companion-matrix eigenvalues plus deflation.
//!
//! For the monic polynomial `x^n + a1 x^(n-1) + ... + an` the companion matrix is
//! ```text
//! M = [ -a1 -a2 ... -a(n-1) -an ]
//!     [  1   0  ...   0      0  ]
//!     [  0   1  ...   0      0  ]
//!     [  .   .  ...   .      .  ]
//!     [  0   0  ...   1      0  ]
//! ```
//! and its eigenvalues are the roots. The deflation engine takes one eigenvalue at a time,
//! divides it out of the polynomial and repeats on the quotient until a linear factor is
//! left. Each division adds rounding error to the quotient, so for high degrees the later
//! roots are less accurate than a single eigen-decomposition would give; the engine
//! accepts that in exchange for a simple, inspectable step sequence.
use log::{debug, info};
use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::numerical::scalar_roots::constants::DEFLATION_IMAGINARY_FLOOR;
use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::polynomial::Polynomial;

/// Companion matrix of the normalized polynomial; a 0x0 matrix for a constant.
pub fn companion_matrix(polynomial: &Polynomial) -> DMatrix<f64> {
    let monic = polynomial.normalized();
    let n = monic.degree();
    let coefficients = monic.coefficients();
    DMatrix::from_fn(n, n, |i, j| {
        if i == 0 {
            -coefficients[j + 1]
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    })
}

/// Eigenvalues of the companion matrix, i.e. all roots at once (no particular order).
pub fn companion_roots(polynomial: &Polynomial) -> Result<Vec<Complex64>, RootFindingError> {
    if polynomial.degree() == 0 {
        return Ok(Vec::new());
    }
    let eigenvalues: Vec<Complex64> = companion_matrix(polynomial)
        .complex_eigenvalues()
        .iter()
        .copied()
        .collect();
    if let Some(bad) = eigenvalues.iter().find(|z| !z.is_finite()) {
        return Err(RootFindingError::InvalidInput(format!(
            "companion matrix of a degree {} polynomial exceeds the floating-point range: \
             eigen-decomposition produced {}",
            polynomial.degree(),
            bad
        )));
    }
    Ok(eigenvalues)
}

/// One deflation step: the root(s) divided out of a polynomial of the given degree and the
/// quotient that remains.
#[derive(Debug, Clone, PartialEq)]
pub struct DeflationStep {
    pub degree: usize,
    pub extracted: Vec<Complex64>,
    pub quotient: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeflationReport {
    /// as many roots as the degree, in extraction order
    pub roots: Vec<Complex64>,
    pub steps: Vec<DeflationStep>,
}

fn is_real(root: Complex64) -> bool {
    root.im.abs() <= DEFLATION_IMAGINARY_FLOOR * root.norm().max(1.0)
}

/// Extracts all roots by repeated companion-matrix root finding and synthetic division.
///
/// Each step takes the eigenvalue of smallest modulus. A real one is divided out by
/// `(x - r)`; a complex one is divided out together with its conjugate through the real
/// factor `x² - 2 Re(r) x + |r|²`, so the quotients stay real. The last linear factor
/// `c0 x + c1` gives the root `-c1 / c0` directly.
pub fn deflate(polynomial: &Polynomial) -> Result<DeflationReport, RootFindingError> {
    let mut current = polynomial.normalized();
    let mut roots = Vec::with_capacity(polynomial.degree());
    let mut steps = Vec::new();
    debug!("deflating {}", polynomial);

    while current.degree() > 1 {
        let degree = current.degree();
        let root = companion_roots(&current)?
            .into_iter()
            .min_by(|a, b| a.norm().total_cmp(&b.norm()))
            .ok_or(RootFindingError::SingularPolynomial)?;

        let (extracted, quotient) = if is_real(root) {
            let (quotient, remainder) = current.synthetic_division(root.re);
            debug!("degree {}: real root {}, remainder {:e}", degree, root.re, remainder);
            (vec![Complex64::new(root.re, 0.0)], quotient)
        } else {
            let (quotient, remainder) =
                current.divide_quadratic(-2.0 * root.re, root.norm_sqr())?;
            debug!(
                "degree {}: complex pair {} and conjugate, remainder {:?}",
                degree, root, remainder
            );
            (vec![root, root.conj()], quotient)
        };
        roots.extend(extracted.iter().copied());
        steps.push(DeflationStep {
            degree,
            extracted,
            quotient: quotient.clone(),
        });
        current = Polynomial::new(quotient)?;
    }

    if current.degree() == 1 {
        let c = current.coefficients();
        let root = Complex64::new(-c[1] / c[0], 0.0);
        roots.push(root);
        steps.push(DeflationStep {
            degree: 1,
            extracted: vec![root],
            quotient: vec![c[0]],
        });
    }
    info!("found {} roots of {}", roots.len(), polynomial);
    Ok(DeflationReport { roots, steps })
}

/// All roots of the polynomial with the given coefficients (highest degree first).
/// The result has `coefficients.len() - 1` entries.
pub fn find_all_roots(coefficients: &[f64]) -> Result<Vec<Complex64>, RootFindingError> {
    let polynomial = Polynomial::new(coefficients.to_vec())?;
    Ok(deflate(&polynomial)?.roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sorted_by_re(mut roots: Vec<Complex64>) -> Vec<Complex64> {
        roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
        roots
    }

    #[test]
    fn test_companion_matrix_layout() {
        let p = Polynomial::new(vec![2.0, -12.0, 22.0, -12.0]).unwrap();
        let m = companion_matrix(&p);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.row(0).iter().copied().collect::<Vec<_>>(), vec![6.0, -11.0, 6.0]);
        assert_eq!(m[(1, 0)], 1.0);
        assert_eq!(m[(2, 1)], 1.0);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m[(2, 2)], 0.0);
    }

    #[test]
    fn test_companion_roots() {
        let p = Polynomial::new(vec![1.0, -6.0, 11.0, -6.0]).unwrap();
        let roots = sorted_by_re(companion_roots(&p).unwrap());
        for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert_relative_eq!(root.re, expected, epsilon = 1e-9);
            assert!(root.im.abs() < 1e-9);
        }
        let constant = Polynomial::new(vec![3.0]).unwrap();
        assert!(companion_roots(&constant).unwrap().is_empty());
    }

    #[test]
    fn test_deflate_cubic() {
        let p = Polynomial::new(vec![1.0, -6.0, 11.0, -6.0]).unwrap();
        let report = deflate(&p).unwrap();
        assert_eq!(report.roots.len(), 3);
        // smallest modulus first
        assert_relative_eq!(report.roots[0].re, 1.0, epsilon = 1e-9);
        assert_eq!(report.steps[0].degree, 3);
        assert_eq!(report.steps[0].quotient.len(), 3);
        let last = report.steps.last().unwrap();
        assert_eq!(last.degree, 1);
    }

    #[test]
    fn test_deflate_complex_pairs() {
        // x^4 + 1: two conjugate pairs on the unit circle
        let report = deflate(&Polynomial::new(vec![1.0, 0.0, 0.0, 0.0, 1.0]).unwrap()).unwrap();
        assert_eq!(report.roots.len(), 4);
        assert_eq!(report.steps.len(), 2);
        for root in &report.roots {
            assert_relative_eq!(root.norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(root.re.abs(), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-9);
        }
        assert_eq!(report.roots[1], report.roots[0].conj());
    }

    #[test]
    fn test_deflate_mixed_roots() {
        // x^3 - 1 = (x - 1)(x^2 + x + 1)
        let roots = sorted_by_re(find_all_roots(&[1.0, 0.0, 0.0, -1.0]).unwrap());
        assert_relative_eq!(roots[0].re, -0.5, epsilon = 1e-9);
        assert_relative_eq!(roots[0].im, -(3.0f64).sqrt() / 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1].im, (3.0f64).sqrt() / 2.0, epsilon = 1e-9);
        assert_relative_eq!(roots[2].re, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_find_all_roots_low_degrees() {
        assert!(find_all_roots(&[5.0]).unwrap().is_empty());
        let roots = find_all_roots(&[2.0, -3.0]).unwrap();
        assert_eq!(roots, vec![Complex64::new(1.5, 0.0)]);
        assert_eq!(
            find_all_roots(&[0.0, 1.0, 2.0]),
            Err(RootFindingError::SingularPolynomial)
        );
        assert!(matches!(
            find_all_roots(&[]),
            Err(RootFindingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_out_of_range_companion_matrix_is_invalid_input() {
        // normalizing by 1e-300 puts 1e300 entries into the first row
        let polynomial = Polynomial::new(vec![1e-300, 1.0, 1.0, 1.0]).unwrap();
        match companion_roots(&polynomial) {
            Err(RootFindingError::InvalidInput(message)) => {
                assert!(message.contains("floating-point range"));
                assert!(message.len() < 200);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            find_all_roots(&[1e-300, 1.0, 1.0, 1.0]),
            Err(RootFindingError::InvalidInput(_))
        ));
    }
}
