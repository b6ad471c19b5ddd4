use thiserror::Error;

/// Errors produced while preparing an observation for scoring.
///
/// The scoring boundary never propagates these to callers: `assess_value`
/// converts them into a degraded [`RiskAssessment`](crate::RiskAssessment)
/// carrying the message in its `error` field.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A reading was present but could not be coerced to a number.
    #[error("risk computation failed: {0}")]
    ComputationFailure(String),
}
