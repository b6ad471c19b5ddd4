//! Compound disaster risk assessment engine.
//!
//! Scores weather and infrastructure readings into a composite risk score,
//! classifies the score into a risk level, flags anomalous conditions and
//! produces emergency response recommendations. The scorer is a pure,
//! stateless function of its input; batch callers can map over observations
//! with no coordination.

pub mod error;
pub mod report;
pub mod scorer;
pub mod thresholds;
pub mod types;


pub use error::AssessmentError;
pub use scorer::RiskScorer;
pub use thresholds::{
    AnomalyThresholds, ImpactLadder, ResponseTriggers, ScorerConfig, ScoringThresholds,
};
pub use types::{InfrastructureImpact, Observation, RiskAssessment, RiskLevel};
