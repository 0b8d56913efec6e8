//! Linear congruential sequences and their quality.
//!
//! A request `(m, a, c, x0, n)` produces the deterministic sequence
//! `x_{i+1} = (a * x_i + c) mod m` together with an independent uniform reference
//! sequence of the same range and length. Both are scored by the smallest cycle
//! observable within them and by a Cesàro estimate of π from the rate of coprime
//! consecutive pairs.
//!
//! ```
//! use rand_cesaro::{analyze, LcgParams};
//!
//! let result = analyze(LcgParams { m: 4, a: 1, c: 1, x0: 0, n: 10 }).unwrap();
//! assert_eq!(&[0, 1, 2, 3, 0, 1, 2, 3, 0, 1], result.sequence.as_slice());
//! assert_eq!(4, result.lcg.period.period);
//! ```

pub mod analysis;
pub mod cesaro;
pub mod error;
pub mod export;
pub mod lcg;
pub mod modular;
pub mod period;
pub mod reference;
pub mod request;
pub mod response;
pub mod sequence;

pub use analysis::*;
pub use cesaro::{estimate_pi, CesaroReport, THEORETICAL_PI};
pub use error::{AnalysisError, Result};
pub use lcg::{generate, Lcg};
pub use modular::{gcd, step, Modulus};
pub use period::{detect_period, Cycle, PeriodReport};
pub use reference::{generate_reference, UniformSource};
pub use request::{GenerationRequest, LcgParams};
pub use response::{AnalysisResponse, Outcome};
pub use sequence::Sequence;

// Classic LCG parameter sets as (m, a, c), good and bad.

/// MINSTD, Park and Miller (1993 revision).
pub const LCG_MINSTD: (u64, u64, u64) = (0x7fffffff, 48271, 0);
/// ANSI C rand() example.
pub const LCG_ANSI_C: (u64, u64, u64) = (1 << 31, 1103515245, 12345);
/// Numerical Recipes.
pub const LCG_NUMERICAL_RECIPES: (u64, u64, u64) = (1 << 32, 1664525, 1013904223);
/// RANDU. Notoriously poor: consecutive triples fall on 15 planes.
pub const LCG_RANDU: (u64, u64, u64) = (1 << 31, 65539, 0);
