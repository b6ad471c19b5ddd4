use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::AssessmentError;

/// A single set of weather and infrastructure readings.
///
/// Fields absent from raw input fall back to seasonal baseline values;
/// readings themselves are unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Temperature in degrees Fahrenheit.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Precipitation in inches per day.
    #[serde(default = "default_precipitation")]
    pub precipitation: f64,
    /// Relative humidity percentage.
    #[serde(default = "default_humidity")]
    pub humidity: f64,
    /// Power demand in megawatts.
    #[serde(default = "default_power_demand")]
    pub power_demand: f64,
    /// Soil moisture percentage.
    #[serde(default = "default_soil_moisture")]
    pub soil_moisture: f64,
}

fn default_temperature() -> f64 {
    75.0
}

fn default_precipitation() -> f64 {
    0.1
}

fn default_humidity() -> f64 {
    50.0
}

fn default_power_demand() -> f64 {
    1500.0
}

fn default_soil_moisture() -> f64 {
    30.0
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            precipitation: default_precipitation(),
            humidity: default_humidity(),
            power_demand: default_power_demand(),
            soil_moisture: default_soil_moisture(),
        }
    }
}

impl Observation {
    /// Coerces a raw JSON payload into an observation.
    ///
    /// Missing fields take their baseline defaults. A field that is present
    /// but not a number (including an explicit `null`) fails coercion, as
    /// does a payload that is not an object.
    pub fn from_value(input: &Value) -> Result<Self, AssessmentError> {
        if !input.is_object() {
            return Err(AssessmentError::ComputationFailure(
                "observation must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(input.clone())
            .map_err(|e| AssessmentError::ComputationFailure(e.to_string()))
    }
}

/// Ordinal risk category derived from the composite score.
///
/// `Unknown` is a sentinel produced only when input coercion fails; the
/// classifier never returns it, so callers can distinguish a degraded
/// result from a genuine `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
    Unknown,
}

impl RiskLevel {
    /// Classifies a score into its half-open bucket: Low [0, 0.3),
    /// Moderate [0.3, 0.6), High [0.6, 0.8), Extreme [0.8, 1.0).
    /// Anything that matches no bucket (a clamped 1.0) is Extreme.
    pub fn from_score(score: f64) -> Self {
        const BANDS: [(RiskLevel, f64, f64); 4] = [
            (RiskLevel::Low, 0.0, 0.3),
            (RiskLevel::Moderate, 0.3, 0.6),
            (RiskLevel::High, 0.6, 0.8),
            (RiskLevel::Extreme, 0.8, 1.0),
        ];

        for (level, min_score, max_score) in BANDS {
            if score >= min_score && score < max_score {
                return level;
            }
        }
        RiskLevel::Extreme
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
            RiskLevel::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Infrastructure impact category, derived from power demand alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfrastructureImpact {
    Low,
    Moderate,
    High,
    Critical,
    Unknown,
}

impl fmt::Display for InfrastructureImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InfrastructureImpact::Low => "Low",
            InfrastructureImpact::Moderate => "Moderate",
            InfrastructureImpact::High => "High",
            InfrastructureImpact::Critical => "Critical",
            InfrastructureImpact::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// The outcome of assessing one observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Composite risk score, clamped to [0, 1] and rounded to 3 decimals.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Whether any hard-coded extreme-condition rule fired.
    pub is_anomaly: bool,
    /// Response actions, ordered severity tier first then specific triggers.
    pub recommendations: Vec<String>,
    /// `min(0.95, 0.7 + risk_score * 0.25)`, rounded to 3 decimals.
    pub confidence: f64,
    pub infrastructure_impact: InfrastructureImpact,
    /// Informational timestamp, excluded from equality.
    pub assessed_at: DateTime<Utc>,
    /// Set only when input coercion failed and the result is degraded.
    pub error: Option<String>,
}

impl RiskAssessment {
    /// Builds the degraded sentinel result for a failed coercion.
    pub(crate) fn degraded(message: String) -> Self {
        Self {
            risk_score: 0.0,
            risk_level: RiskLevel::Unknown,
            is_anomaly: false,
            recommendations: Vec::new(),
            confidence: 0.0,
            infrastructure_impact: InfrastructureImpact::Unknown,
            assessed_at: Utc::now(),
            error: Some(message),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

// `assessed_at` is informational only; two assessments of the same input
// compare equal regardless of when they ran.
impl PartialEq for RiskAssessment {
    fn eq(&self, other: &Self) -> bool {
        self.risk_score == other.risk_score
            && self.risk_level == other.risk_level
            && self.is_anomaly == other.is_anomaly
            && self.recommendations == other.recommendations
            && self.confidence == other.confidence
            && self.infrastructure_impact == other.infrastructure_impact
            && self.error == other.error
    }
}
