//! Real polynomials with coefficients stored from the highest degree down.
//!
//! Evaluation uses Horner's scheme in real or complex arithmetic, so any polynomial can be
//! handed to Muller's method. Synthetic division by a linear or a real quadratic factor
//! is what the deflation engine builds on.
use std::fmt;

use num_complex::Complex64;

use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::evaluator::{
    Evaluator, finite_or_error, finite_or_error_complex,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// `coefficients[0]` multiplies the highest power and must not be zero.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, RootFindingError> {
        if coefficients.is_empty() {
            return Err(RootFindingError::InvalidInput(
                "polynomial needs at least one coefficient".to_string(),
            ));
        }
        if let Some(bad) = coefficients.iter().find(|c| !c.is_finite()) {
            return Err(RootFindingError::InvalidInput(format!(
                "polynomial coefficient {} is not finite",
                bad
            )));
        }
        if coefficients[0] == 0.0 {
            return Err(RootFindingError::SingularPolynomial);
        }
        Ok(Self { coefficients })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[0]
    }

    /// Monic copy: every coefficient divided by the leading one.
    pub fn normalized(&self) -> Polynomial {
        let leading = self.leading_coefficient();
        Polynomial {
            coefficients: self.coefficients.iter().map(|c| c / leading).collect(),
        }
    }

    /// Horner's scheme
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        self.coefficients
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }

    /// p'(x), computed together with p(x) in one Horner pass
    pub fn eval_derivative(&self, x: f64) -> f64 {
        let mut value = 0.0;
        let mut derivative = 0.0;
        for &c in &self.coefficients {
            derivative = derivative * x + value;
            value = value * x + c;
        }
        derivative
    }

    /// Coefficients of p', highest degree first; `[0.0]` for a constant.
    pub fn derivative_coefficients(&self) -> Vec<f64> {
        let n = self.degree();
        if n == 0 {
            return vec![0.0];
        }
        self.coefficients[..n]
            .iter()
            .enumerate()
            .map(|(i, c)| c * (n - i) as f64)
            .collect()
    }

    /// Divides by `(x - root)`: returns the quotient coefficients and the remainder `p(root)`.
    pub fn synthetic_division(&self, root: f64) -> (Vec<f64>, f64) {
        let mut quotient = Vec::with_capacity(self.degree());
        let mut carry = 0.0;
        for (i, &c) in self.coefficients.iter().enumerate() {
            carry = carry * root + c;
            if i < self.degree() {
                quotient.push(carry);
            }
        }
        (quotient, carry)
    }

    /// Divides by `x² + p x + q`: returns the quotient coefficients and the remainder
    /// `[r1, r0]` of `r1 x + r0`. The degree must be at least two.
    pub fn divide_quadratic(&self, p: f64, q: f64) -> Result<(Vec<f64>, [f64; 2]), RootFindingError> {
        let n = self.degree();
        if n < 2 {
            return Err(RootFindingError::InvalidInput(format!(
                "cannot divide a polynomial of degree {} by a quadratic",
                n
            )));
        }
        let mut work = self.coefficients.clone();
        for i in 0..=n - 2 {
            let lead = work[i];
            work[i + 1] -= p * lead;
            work[i + 2] -= q * lead;
        }
        let remainder = [work[n - 1], work[n]];
        work.truncate(n - 1);
        Ok((work, remainder))
    }

    /// Monic coefficients of `Π (x - r_i)`, highest degree first.
    pub fn from_roots(roots: &[Complex64]) -> Vec<Complex64> {
        let mut coefficients = vec![Complex64::new(1.0, 0.0)];
        for &root in roots {
            let mut next = coefficients.clone();
            next.push(Complex64::new(0.0, 0.0));
            for (i, c) in coefficients.iter().enumerate() {
                next[i + 1] -= root * c;
            }
            coefficients = next;
        }
        coefficients
    }
}

fn format_terms(coefficients: &[f64]) -> String {
    let degree = coefficients.len().saturating_sub(1);
    let mut out = String::new();
    for (i, &c) in coefficients.iter().enumerate() {
        let power = degree - i;
        if c == 0.0 && !(power == 0 && out.is_empty()) {
            continue;
        }
        let magnitude = c.abs();
        if out.is_empty() {
            if c < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if c < 0.0 { " - " } else { " + " });
        }
        if magnitude != 1.0 || power == 0 {
            out.push_str(&magnitude.to_string());
        }
        match power {
            0 => {}
            1 => out.push('x'),
            _ => out.push_str(&format!("x^{}", power)),
        }
    }
    out
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_terms(&self.coefficients))
    }
}

impl Evaluator for Polynomial {
    fn evaluate_real(&self, x: f64) -> Result<f64, RootFindingError> {
        finite_or_error(x, self.eval(x), "polynomial")
    }

    fn evaluate_complex(&self, z: Complex64) -> Result<Complex64, RootFindingError> {
        finite_or_error_complex(z, self.eval_complex(z), "polynomial")
    }

    fn derivative(&self, x: f64) -> Result<Option<f64>, RootFindingError> {
        finite_or_error(x, self.eval_derivative(x), "polynomial derivative").map(Some)
    }

    fn derivative_expression(&self) -> Option<String> {
        Some(format_terms(&self.derivative_coefficients()))
    }

    fn name(&self) -> &str {
        "polynomial"
    }
}
