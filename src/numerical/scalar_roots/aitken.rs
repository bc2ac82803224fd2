//! Aitken Δ² extrapolation.
//!
//! For three consecutive terms of a linearly convergent sequence the limit is estimated as
//! `x0 - (x1 - x0)² / (x2 - 2 x1 + x0)`. When the second difference is within round-off
//! the newest term is returned unchanged.
use crate::numerical::scalar_roots::constants::AITKEN_DENOMINATOR_FLOOR;

pub fn aitken_delta2(x0: f64, x1: f64, x2: f64) -> f64 {
    let denominator = x2 - 2.0 * x1 + x0;
    if denominator.abs() > AITKEN_DENOMINATOR_FLOOR {
        x0 - (x1 - x0).powi(2) / denominator
    } else {
        x2
    }
}

/// Sliding window over the last three terms of a sequence.
#[derive(Debug, Clone, Default)]
pub struct AitkenWindow {
    terms: [f64; 3],
    len: usize,
}

impl AitkenWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a term; once three terms are present returns the extrapolated limit.
    pub fn push(&mut self, term: f64) -> Option<f64> {
        if self.len < 3 {
            self.terms[self.len] = term;
            self.len += 1;
        } else {
            self.terms = [self.terms[1], self.terms[2], term];
        }
        (self.len == 3).then(|| aitken_delta2(self.terms[0], self.terms[1], self.terms[2]))
    }
}
