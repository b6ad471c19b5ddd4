//! Threshold configuration for the risk scorer.
//!
//! Every process-wide constant lives here as a field of an immutable config
//! value owned by the scorer, so tests can override thresholds without
//! global side effects.

use serde::{Deserialize, Serialize};

/// Constants feeding the sub-score formulas and the composite weighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Temperature at which heat risk starts accruing (°F).
    pub heat_onset_temp: f64,
    /// Degrees over onset that saturate heat risk at 1.0.
    pub heat_scale_span: f64,
    /// Temperature adding the severe-heat bump (°F).
    pub severe_heat_temp: f64,
    pub severe_heat_bump: f64,
    /// Temperature adding the extreme-heat bump (°F).
    pub extreme_heat_temp: f64,
    pub extreme_heat_bump: f64,
    /// Power demand at which grid stress starts accruing (MW).
    pub grid_stress_onset_mw: f64,
    /// Megawatts over onset that saturate infrastructure risk at 1.0.
    pub grid_scale_span_mw: f64,
    /// Precipitation at which flood risk starts accruing (in/day).
    pub flood_onset_precip: f64,
    /// Precipitation that saturates flood risk at 1.0 (in/day).
    pub flood_scale_cap: f64,
    pub drought_temp: f64,
    pub drought_precip: f64,
    pub drought_stress: f64,
    pub humid_heat_temp: f64,
    pub humid_heat_humidity: f64,
    pub humidity_penalty: f64,
    pub dry_soil_moisture: f64,
    pub dry_soil_penalty: f64,
    /// Sub-score level both heat and infrastructure risk must exceed for a
    /// compound event.
    pub compound_trigger: f64,
    pub compound_multiplier: f64,
    pub infra_weight: f64,
    pub env_weight: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            heat_onset_temp: 95.0,
            heat_scale_span: 15.0,
            severe_heat_temp: 100.0,
            severe_heat_bump: 0.2,
            extreme_heat_temp: 105.0,
            extreme_heat_bump: 0.3,
            grid_stress_onset_mw: 1800.0,
            grid_scale_span_mw: 400.0,
            flood_onset_precip: 2.0,
            flood_scale_cap: 5.0,
            drought_temp: 95.0,
            drought_precip: 0.5,
            drought_stress: 0.3,
            humid_heat_temp: 90.0,
            humid_heat_humidity: 70.0,
            humidity_penalty: 1.3,
            dry_soil_moisture: 20.0,
            dry_soil_penalty: 1.2,
            compound_trigger: 0.5,
            compound_multiplier: 1.5,
            infra_weight: 0.6,
            env_weight: 0.3,
        }
    }
}

/// Cutoffs for the five anomaly rules. All comparisons are strict.
///
/// Note the extreme-heat cutoff is `103.0` with a strict comparison, so a
/// reading of exactly 103 °F does not flag on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyThresholds {
    pub extreme_heat_temp: f64,
    pub extreme_precip: f64,
    pub grid_capacity_mw: f64,
    pub heat_index_temp: f64,
    pub heat_index_humidity: f64,
    pub heat_rain_temp: f64,
    pub heat_rain_precip: f64,
}

impl Default for AnomalyThresholds {
    fn default() -> Self {
        Self {
            extreme_heat_temp: 103.0,
            extreme_precip: 4.0,
            grid_capacity_mw: 1900.0,
            heat_index_temp: 100.0,
            heat_index_humidity: 80.0,
            heat_rain_temp: 95.0,
            heat_rain_precip: 3.0,
        }
    }
}

/// Cutoffs for the conditional recommendation appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTriggers {
    pub cancel_outdoor_temp: f64,
    pub rolling_blackout_mw: f64,
    pub drainage_watch_precip: f64,
}

impl Default for ResponseTriggers {
    fn default() -> Self {
        Self {
            cancel_outdoor_temp: 100.0,
            rolling_blackout_mw: 1850.0,
            drainage_watch_precip: 3.0,
        }
    }
}

/// Power-demand ladder for the infrastructure impact category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactLadder {
    pub critical_mw: f64,
    pub high_mw: f64,
    pub moderate_mw: f64,
}

impl Default for ImpactLadder {
    fn default() -> Self {
        Self {
            critical_mw: 1900.0,
            high_mw: 1800.0,
            moderate_mw: 1600.0,
        }
    }
}

/// Complete threshold configuration for a [`RiskScorer`](crate::RiskScorer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    pub scoring: ScoringThresholds,
    pub anomaly: AnomalyThresholds,
    pub response: ResponseTriggers,
    pub impact: ImpactLadder,
}
