//! Wire shape of an analysis outcome.
//!
//! Success and failure are distinct variants of [`Outcome`], so a consumer never
//! has to guess which fields are present.

use crate::analysis::AnalysisResult;
use crate::error::{AnalysisError, Result};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Flat response record: `seq`, `period`, `cesaroRatio`, `periodRandom`, `cesaroRandomRatio`.
/// An undefined estimate is `None` (`null` on the wire).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResponse {
    pub seq: Vec<u64>,
    pub period: usize,
    pub cesaro_ratio: Option<f64>,
    pub period_random: usize,
    pub cesaro_random_ratio: Option<f64>,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        AnalysisResponse {
            seq: result.sequence.into_vec(),
            period: result.lcg.period.period,
            cesaro_ratio: result.lcg.cesaro.pi_estimate,
            period_random: result.reference.period.period,
            cesaro_random_ratio: result.reference.cesaro.pi_estimate,
        }
    }
}

/// Success with data, or failure with a reason. Never both.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Ok(AnalysisResponse),
    Error { message: String },
}

impl From<Result<AnalysisResult>> for Outcome {
    fn from(result: Result<AnalysisResult>) -> Self {
        match result {
            Ok(result) => Outcome::Ok(result.into()),
            Err(err) => Outcome::from(err),
        }
    }
}

impl From<AnalysisError> for Outcome {
    fn from(err: AnalysisError) -> Self {
        Outcome::Error { message: err.to_string() }
    }
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::analysis::{Analyzer, AnalyzerConfig};
    use crate::request::LcgParams;

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalyzerConfig { reference_seed: Some(5), parallel: false })
    }

    #[test] fn success_fields() {
        let params = LcgParams { m: 4, a: 1, c: 1, x0: 0, n: 10 };
        match Outcome::from(analyzer().analyze(params)) {
            Outcome::Ok(response) => {
                assert_eq!(vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1], response.seq);
                assert_eq!(4, response.period);
                assert!(response.cesaro_ratio.is_some());
            }
            Outcome::Error { message } => panic!("unexpected failure: {}", message),
        }
    }

    #[test] fn failure_has_no_data() {
        let params = LcgParams { m: 10, a: 1, c: 1, x0: 0, n: 1 };
        assert_eq!(
            Outcome::Error { message: "invalid request: n must be at least 2".into() },
            Outcome::from(analyzer().analyze(params))
        );
    }

    #[cfg(feature = "serde")]
    #[test] fn wire_names() {
        let response = AnalysisResponse {
            seq: vec![4, 4],
            period: 1,
            cesaro_ratio: None,
            period_random: 2,
            cesaro_random_ratio: Some(2.5),
        };
        let json = serde_json::to_value(Outcome::Ok(response)).unwrap();
        assert_eq!(
            serde_json::json!({
                "status": "ok",
                "seq": [4, 4],
                "period": 1,
                "cesaroRatio": null,
                "periodRandom": 2,
                "cesaroRandomRatio": 2.5,
            }),
            json
        );
        let json = serde_json::to_value(Outcome::Error { message: "bad".into() }).unwrap();
        assert_eq!(serde_json::json!({ "status": "error", "message": "bad" }), json);
    }
}
