//! Request records.
//!
//! [`LcgParams`] mirrors the wire request (`m`, `a`, `c`, `x0`, `n`) with signed,
//! wide fields so that out-of-range input can be rejected instead of truncated.
//! [`GenerationRequest`] is the validated form the generators consume.

use crate::error::{AnalysisError, Result};
use crate::modular::Modulus;
use tracing::debug;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Unvalidated LCG parameters as received from a caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LcgParams {
    /// Modulus, must be at least 1.
    pub m: i128,
    /// Multiplier, must be non-negative.
    pub a: i128,
    /// Increment, must be non-negative.
    pub c: i128,
    /// Seed, reduced modulo `m`.
    pub x0: i128,
    /// Sequence length, must be at least 2.
    pub n: i128,
}

/// A validated request. Immutable once constructed.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GenerationRequest {
    modulus: Modulus,
    multiplier: u64,
    increment: u64,
    seed: u64,
    length: usize,
}

/// Shortest sequence that still yields one pair for the estimator.
pub const MIN_LENGTH: usize = 2;

fn non_negative_u64(field: &'static str, value: i128) -> Result<u64> {
    if value < 0 {
        return Err(AnalysisError::invalid(field, "must be non-negative"));
    }
    u64::try_from(value).map_err(|_| AnalysisError::invalid(field, "must fit in 64 bits"))
}

impl GenerationRequest {
    /// Validates every field before anything is generated.
    /// The seed is reduced modulo the modulus.
    pub fn new(modulus: u64, multiplier: u64, increment: u64, seed: u64, length: usize) -> Result<Self> {
        let modulus = Modulus::new(modulus).map_err(|_| AnalysisError::invalid("m", "must be at least 1"))?;
        if length < MIN_LENGTH {
            return Err(AnalysisError::invalid("n", "must be at least 2"));
        }
        Ok(GenerationRequest { modulus, multiplier, increment, seed: modulus.reduce(seed), length })
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Seed, already in [0, modulus).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl TryFrom<LcgParams> for GenerationRequest {
    type Error = AnalysisError;

    fn try_from(params: LcgParams) -> Result<Self> {
        if params.m < 1 {
            return Err(AnalysisError::invalid("m", "must be at least 1"));
        }
        let modulus = u64::try_from(params.m).map_err(|_| AnalysisError::invalid("m", "must fit in 64 bits"))?;
        let multiplier = non_negative_u64("a", params.a)?;
        let increment = non_negative_u64("c", params.c)?;
        if params.n < MIN_LENGTH as i128 {
            return Err(AnalysisError::invalid("n", "must be at least 2"));
        }
        let length = usize::try_from(params.n).map_err(|_| AnalysisError::invalid("n", "is too large"))?;
        // rem_euclid keeps negative seeds in [0, m); the result fits in u64 because m does.
        let seed = params.x0.rem_euclid(params.m) as u64;
        debug!(m = modulus, a = multiplier, c = increment, x0 = seed, n = length, "validated request");
        GenerationRequest::new(modulus, multiplier, increment, seed, length)
    }
}

impl From<GenerationRequest> for LcgParams {
    fn from(request: GenerationRequest) -> Self {
        LcgParams {
            m: request.modulus.get() as i128,
            a: request.multiplier as i128,
            c: request.increment as i128,
            x0: request.seed as i128,
            n: request.length as i128,
        }
    }
}
