//! Sequence analysis: validate a request, generate the LCG and reference
//! sequences, and run period detection and the π estimator on both.

use crate::cesaro::{estimate_pi, CesaroReport};
use crate::error::Result;
use crate::lcg::generate;
use crate::period::{detect_period, PeriodReport};
use crate::reference::{generate_reference, reference_rng, UniformSource};
use crate::request::{GenerationRequest, LcgParams};
use crate::sequence::Sequence;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Analyzer settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnalyzerConfig {
    /// Seed for the reference generator. `None` draws a fresh entropy seed per request.
    /// With a seed, each request an analyzer handles reads its own ChaCha stream,
    /// so runs are reproducible while requests stay independent.
    pub reference_seed: Option<u64>,
    /// Run independent stages concurrently. Only effective with the `parallel` feature.
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig { reference_seed: None, parallel: true }
    }
}

/// Period and π estimate of one sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceStats {
    pub period: PeriodReport,
    pub cesaro: CesaroReport,
}

/// Complete, immutable outcome of one request.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub request: GenerationRequest,
    /// The LCG sequence, randomly indexable for external paging.
    pub sequence: Sequence,
    pub lcg: SequenceStats,
    pub reference: SequenceStats,
}

fn join<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    if parallel {
        return rayon::join(a, b);
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    (a(), b())
}

/// Runs the detector and the estimator on one sequence.
pub fn sequence_stats(sequence: &[u64], parallel: bool) -> SequenceStats {
    let (period, cesaro) = join(parallel, || detect_period(sequence), || estimate_pi(sequence));
    SequenceStats { period, cesaro }
}

/// Drives generation and analysis for validated requests.
#[derive(Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    /// Requests handled so far; selects the reference stream of the next one.
    requests: AtomicU64,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Analyzer { config, requests: AtomicU64::new(0) }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Validates the parameters, then analyzes them.
    /// Nothing is generated when validation fails.
    pub fn analyze(&self, params: LcgParams) -> Result<AnalysisResult> {
        let request = GenerationRequest::try_from(params)?;
        Ok(self.analyze_request(&request))
    }

    /// Analyzes a validated request with a reference generator created for it alone.
    /// Safe to call concurrently; no two calls share reference draws.
    pub fn analyze_request(&self, request: &GenerationRequest) -> AnalysisResult {
        let stream = self.requests.fetch_add(1, Ordering::Relaxed);
        let mut source = reference_rng(self.config.reference_seed, stream);
        self.analyze_with(request, &mut source)
    }

    /// Analyzes a validated request, drawing the reference sequence from `source`.
    pub fn analyze_with<S: UniformSource + Send>(&self, request: &GenerationRequest, source: &mut S) -> AnalysisResult {
        let parallel = self.config.parallel;
        let ((sequence, lcg), reference) = join(
            parallel,
            || {
                let sequence = generate(request);
                let stats = sequence_stats(&sequence, parallel);
                (sequence, stats)
            },
            || {
                let sequence = generate_reference(request.modulus(), request.length(), source);
                sequence_stats(&sequence, parallel)
            },
        );
        debug!(
            period = lcg.period.period,
            confirmed = lcg.period.is_confirmed(),
            pi = ?lcg.cesaro.pi_estimate,
            reference_period = reference.period.period,
            reference_pi = ?reference.cesaro.pi_estimate,
            "analyzed sequence"
        );
        AnalysisResult { request: *request, sequence, lcg, reference }
    }
}

/// Analyzes a request with the default configuration.
pub fn analyze(params: LcgParams) -> Result<AnalysisResult> {
    Analyzer::default().analyze(params)
}
