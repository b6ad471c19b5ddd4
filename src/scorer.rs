//! The risk scorer: sub-score composition, classification, anomaly
//! detection and recommendation generation for a single observation.

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use crate::thresholds::ScorerConfig;
use crate::types::{InfrastructureImpact, Observation, RiskAssessment, RiskLevel};

const EXTREME_ACTIONS: [&str; 6] = [
    "EMERGENCY: Activate all cooling centers immediately",
    "CRITICAL: Monitor power grid for imminent failures",
    "URGENT: Issue emergency heat warnings to all residents",
    "ALERT: Pre-position ambulances and medical teams",
    "DEPLOY: Emergency water distribution teams",
    "ACTIVATE: Emergency response coordination center",
];

const HIGH_ACTIONS: [&str; 5] = [
    "Open additional cooling centers",
    "Monitor power grid stress levels",
    "Issue heat advisory to vulnerable populations",
    "Increase emergency medical readiness",
    "Ensure adequate water supplies",
];

const MODERATE_ACTIONS: [&str; 4] = [
    "Monitor heat conditions closely",
    "Check vulnerable population welfare",
    "Review power grid status",
    "Remind public about heat safety",
];

const CANCEL_OUTDOOR: &str = "EXTREME HEAT: Cancel outdoor activities";
const ROLLING_BLACKOUTS: &str = "GRID STRESS: Prepare for potential rolling blackouts";
const DRAINAGE_WATCH: &str = "FLOOD RISK: Monitor drainage systems";

/// Scores observations against an immutable threshold configuration.
///
/// Stateless across calls: each assessment reads only its own input, so a
/// single scorer is safe to share between threads and batch callers can map
/// over observations freely.
pub struct RiskScorer {
    config: ScorerConfig,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self {
            config: ScorerConfig::default(),
        }
    }

    pub fn with_config(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Assesses one observation. Total: every input produces an assessment.
    pub fn assess(&self, observation: &Observation) -> RiskAssessment {
        let risk_score = round3(self.risk_score(observation));
        let risk_level = RiskLevel::from_score(risk_score);
        let is_anomaly = self.detect_anomaly(observation);
        let recommendations = self.recommendations(risk_level, observation);
        let confidence = round3((0.7 + risk_score * 0.25).min(0.95));
        let infrastructure_impact = self.infrastructure_impact(observation.power_demand);

        if is_anomaly {
            warn!(
                temperature = observation.temperature,
                precipitation = observation.precipitation,
                power_demand = observation.power_demand,
                "anomalous conditions detected"
            );
        }
        debug!(
            risk_score,
            risk_level = %risk_level,
            infrastructure_impact = %infrastructure_impact,
            "observation assessed"
        );

        RiskAssessment {
            risk_score,
            risk_level,
            is_anomaly,
            recommendations,
            confidence,
            infrastructure_impact,
            assessed_at: Utc::now(),
            error: None,
        }
    }

    /// Assesses a raw JSON payload.
    ///
    /// Coercion failures never escape: they produce a degraded assessment
    /// with `risk_level: Unknown` and the failure message in `error`.
    pub fn assess_value(&self, input: &Value) -> RiskAssessment {
        match Observation::from_value(input) {
            Ok(observation) => self.assess(&observation),
            Err(err) => {
                warn!(%err, "observation rejected, returning degraded assessment");
                RiskAssessment::degraded(err.to_string())
            }
        }
    }

    /// Composite score, clamped to [0, 1].
    fn risk_score(&self, obs: &Observation) -> f64 {
        let t = &self.config.scoring;

        let mut heat_risk = 0.0;
        if obs.temperature >= t.heat_onset_temp {
            heat_risk = ((obs.temperature - t.heat_onset_temp) / t.heat_scale_span).min(1.0);
        }
        if obs.temperature >= t.severe_heat_temp {
            heat_risk = (heat_risk + t.severe_heat_bump).min(1.0);
        }
        if obs.temperature >= t.extreme_heat_temp {
            heat_risk = (heat_risk + t.extreme_heat_bump).min(1.0);
        }

        let mut infra_risk = 0.0;
        if obs.power_demand >= t.grid_stress_onset_mw {
            infra_risk = ((obs.power_demand - t.grid_stress_onset_mw) / t.grid_scale_span_mw).min(1.0);
        }

        // Co-occurring heat and grid stress compound each other.
        let compound_multiplier = if heat_risk > t.compound_trigger && infra_risk > t.compound_trigger
        {
            t.compound_multiplier
        } else {
            1.0
        };

        let mut flood_risk = 0.0;
        if obs.precipitation >= t.flood_onset_precip {
            flood_risk = (obs.precipitation / t.flood_scale_cap).min(1.0);
        }

        let drought_stress =
            if obs.temperature > t.drought_temp && obs.precipitation < t.drought_precip {
                t.drought_stress
            } else {
                0.0
            };

        let humidity_factor =
            if obs.temperature > t.humid_heat_temp && obs.humidity > t.humid_heat_humidity {
                t.humidity_penalty
            } else {
                1.0
            };

        let soil_factor = if obs.soil_moisture < t.dry_soil_moisture {
            t.dry_soil_penalty
        } else {
            1.0
        };

        let primary_risk = heat_risk.max(flood_risk);
        let infrastructure_contribution = infra_risk * t.infra_weight;
        let environmental_stress =
            (drought_stress + (humidity_factor - 1.0) + (soil_factor - 1.0)) * t.env_weight;

        let total = (primary_risk + infrastructure_contribution + environmental_stress)
            * compound_multiplier;

        total.min(1.0)
    }

    /// True iff any of the five extreme-condition rules fires.
    fn detect_anomaly(&self, obs: &Observation) -> bool {
        let a = &self.config.anomaly;

        obs.temperature > a.extreme_heat_temp
            || obs.precipitation > a.extreme_precip
            || obs.power_demand > a.grid_capacity_mw
            || (obs.temperature > a.heat_index_temp && obs.humidity > a.heat_index_humidity)
            || (obs.temperature > a.heat_rain_temp && obs.precipitation > a.heat_rain_precip)
    }

    /// Tier block for the risk level, then conditional appends in fixed
    /// order: outdoor-activity cancellation, grid stress, flood drainage.
    fn recommendations(&self, level: RiskLevel, obs: &Observation) -> Vec<String> {
        let mut actions: Vec<String> = match level {
            RiskLevel::Extreme => EXTREME_ACTIONS.iter().map(|s| s.to_string()).collect(),
            RiskLevel::High => HIGH_ACTIONS.iter().map(|s| s.to_string()).collect(),
            RiskLevel::Moderate => MODERATE_ACTIONS.iter().map(|s| s.to_string()).collect(),
            RiskLevel::Low | RiskLevel::Unknown => Vec::new(),
        };

        let r = &self.config.response;
        if obs.temperature > r.cancel_outdoor_temp {
            actions.push(CANCEL_OUTDOOR.to_string());
        }
        if obs.power_demand > r.rolling_blackout_mw {
            actions.push(ROLLING_BLACKOUTS.to_string());
        }
        if obs.precipitation > r.drainage_watch_precip {
            actions.push(DRAINAGE_WATCH.to_string());
        }

        actions
    }

    fn infrastructure_impact(&self, power_demand: f64) -> InfrastructureImpact {
        let ladder = &self.config.impact;

        if power_demand > ladder.critical_mw {
            InfrastructureImpact::Critical
        } else if power_demand > ladder.high_mw {
            InfrastructureImpact::High
        } else if power_demand > ladder.moderate_mw {
            InfrastructureImpact::Moderate
        } else {
            InfrastructureImpact::Low
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
