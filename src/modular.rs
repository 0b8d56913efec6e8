use crate::error::{AnalysisError, Result};
use core::num::NonZeroU64;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// Exact arithmetic modulo m for 64-bit operands.
// Products are formed in 128 bits: (2**64 - 1)**2 + (2**64 - 1) < 2**128,
// so a*x + c never wraps before the reduction.

/// A validated, non-zero modulus.
/// Once constructed, every operation on it is total.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Modulus(NonZeroU64);

impl Modulus {
    /// Fails with `InvalidModulus` when `m = 0`.
    pub fn new(m: u64) -> Result<Self> {
        NonZeroU64::new(m).map(Modulus).ok_or(AnalysisError::InvalidModulus)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Reduces x into [0, m).
    #[inline]
    pub fn reduce(self, x: u64) -> u64 {
        x % self.get()
    }

    /// Returns (a * b) mod m.
    #[inline]
    pub fn mul(self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.get() as u128) as u64
    }

    /// Returns (a + b) mod m.
    #[inline]
    pub fn add(self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.get() as u128) as u64
    }

    /// One LCG step: returns (a * x + c) mod m.
    #[inline]
    pub fn step(self, x: u64, a: u64, c: u64) -> u64 {
        ((a as u128 * x as u128 + c as u128) % self.get() as u128) as u64
    }
}

impl TryFrom<u64> for Modulus {
    type Error = AnalysisError;

    fn try_from(m: u64) -> Result<Self> {
        Modulus::new(m)
    }
}

impl From<Modulus> for u64 {
    fn from(m: Modulus) -> u64 {
        m.get()
    }
}

/// Returns (a * x + c) mod m, or `InvalidModulus` when m = 0.
/// Generators validate the modulus once through [`Modulus`] instead of calling this per step.
pub fn step(x: u64, a: u64, c: u64, m: u64) -> Result<u64> {
    Ok(Modulus::new(m)?.step(x, a, c))
}

/// Returns (a * b) mod m, or `InvalidModulus` when m = 0.
pub fn mul_mod(a: u64, b: u64, m: u64) -> Result<u64> {
    Ok(Modulus::new(m)?.mul(a, b))
}

/// Greatest common divisor with gcd(0, 0) = 0 and gcd(0, x) = x.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn zero_modulus_is_rejected() {
        assert_eq!(Err(AnalysisError::InvalidModulus), Modulus::new(0));
        assert_eq!(Err(AnalysisError::InvalidModulus), step(1, 1, 1, 0));
        assert_eq!(Err(AnalysisError::InvalidModulus), mul_mod(1, 1, 0));
    }

    #[test] fn small_steps() {
        assert_eq!(Ok(25), step(5, 23, 7, 97));
        assert_eq!(Ok(0), step(3, 1, 1, 4));
        assert_eq!(Ok(0), step(123, 456, 789, 1));
    }

    #[test] fn no_overflow_at_u64_extremes() {
        let max = u64::MAX;
        // (max * max + max) mod max = 0.
        assert_eq!(Ok(0), step(max, max, max, max));
        // max = 1 mod (max - 1).
        assert_eq!(Ok(1), step(max, max, 0, max - 1));
        assert_eq!(Ok(1), mul_mod(max - 1, max - 1, max));
        // 2**63 * 2 = 2**64 = 1 mod (2**64 - 1).
        assert_eq!(Ok(1), mul_mod(1 << 63, 2, max));
    }

    #[test] fn matches_wide_reference() {
        let mut r: u64 = 1;
        let mut rnd = || -> u64 { r = r.wrapping_mul(0xd1342543de82ef95).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<10 {
            let m = rnd() | 1;
            let (x, a, c) = (rnd(), rnd(), rnd());
            let expected = ((a as u128 * x as u128 + c as u128) % m as u128) as u64;
            let got = step(x, a, c, m).unwrap();
            assert_eq!(expected, got);
            assert!(got < m);
        }
    }

    #[test] fn gcd_conventions() {
        assert_eq!(0, gcd(0, 0));
        assert_eq!(7, gcd(0, 7));
        assert_eq!(7, gcd(7, 0));
        assert_eq!(1, gcd(0, 1));
        assert_eq!(4, gcd(4, 4));
        assert_eq!(6, gcd(54, 24));
        assert_eq!(1, gcd(17, 5));
    }
}
