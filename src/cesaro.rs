//! Estimating π from pairwise coprimality.
//!
//! Cesàro's theorem: two independently uniform positive integers are coprime with
//! probability 6/π². Counting coprime pairs among consecutive elements gives an
//! empirical rate r, and sqrt(6 / r) estimates π. How close the estimate lands
//! depends on how uniform the sequence's pair statistics are, which is what makes
//! it useful for comparing a generator against a reference source.

use crate::modular::gcd;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// The value every estimate is compared against.
pub const THEORETICAL_PI: f64 = core::f64::consts::PI;

/// Outcome of the estimator on one sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CesaroReport {
    /// sqrt(6 / r), or `None` when no pair was coprime and the estimate is undefined.
    pub pi_estimate: Option<f64>,
    pub coprime_pairs: usize,
    pub total_pairs: usize,
}

impl CesaroReport {
    /// Empirical coprimality rate r; 0 when there are no pairs.
    pub fn ratio(&self) -> f64 {
        if self.total_pairs == 0 {
            0.0
        } else {
            self.coprime_pairs as f64 / self.total_pairs as f64
        }
    }

    /// Whether the estimate is the undefined sentinel.
    pub fn is_undefined(&self) -> bool {
        self.pi_estimate.is_none()
    }

    /// Absolute distance from π, when the estimate is defined.
    pub fn deviation(&self) -> Option<f64> {
        self.pi_estimate.map(|pi| (pi - THEORETICAL_PI).abs())
    }
}

/// Pairs are consecutive elements; gcd(0, 0) = 0, so a pair of zeros is never coprime.
#[inline]
fn coprime(x: u64, y: u64) -> bool {
    gcd(x, y) == 1
}

/// Estimates π from the coprimality rate of consecutive pairs.
pub fn estimate_pi(sequence: &[u64]) -> CesaroReport {
    let total_pairs = sequence.len().saturating_sub(1);
    let coprime_pairs = sequence.windows(2).filter(|pair| coprime(pair[0], pair[1])).count();
    let pi_estimate = if coprime_pairs == 0 {
        None
    } else {
        let r = coprime_pairs as f64 / total_pairs as f64;
        Some((6.0 / r).sqrt())
    };
    CesaroReport { pi_estimate, coprime_pairs, total_pairs }
}
