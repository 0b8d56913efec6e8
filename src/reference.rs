//! Reference sequences drawn from an independent uniform source.
//!
//! The reference sequence is a statistical control: same length and range as the
//! LCG sequence, but never derived from the LCG recurrence. Any uniform integer
//! source qualifies, so the source is a capability ([`UniformSource`]) rather than
//! a fixed generator. Every [`rand_core::RngCore`] is a source.

use crate::modular::Modulus;
use crate::sequence::Sequence;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// A source of independent integers, uniform over a half-open range.
pub trait UniformSource {
    /// Returns an integer drawn uniformly from [0, bound).
    fn below(&mut self, bound: Modulus) -> u64;
}

impl<R: RngCore> UniformSource for R {
    #[inline]
    fn below(&mut self, bound: Modulus) -> u64 {
        // Unbiased: rand rejects the partial top interval.
        self.gen_range(0 .. bound.get())
    }
}

/// Generates `length` values drawn independently from [0, modulus).
pub fn generate_reference<S: UniformSource + ?Sized>(modulus: Modulus, length: usize, source: &mut S) -> Sequence {
    (0 .. length).map(|_| source.below(modulus)).collect()
}

/// Creates a fresh reference generator.
/// With a seed the draws are reproducible per (seed, stream) pair, and distinct
/// streams under one seed never overlap. Without a seed the generator is seeded
/// from OS entropy, so every call yields an independent stream.
pub fn reference_rng(seed: Option<u64>, stream: u64) -> ChaCha8Rng {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    rng.set_stream(stream);
    rng
}
