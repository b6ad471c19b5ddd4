use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stormgauge::report::{heat_dome_sample, run_monthly_analysis};
use stormgauge::{Observation, RiskScorer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scorer = RiskScorer::new();

    // Current heat dome conditions.
    let conditions = Observation {
        temperature: 103.0,
        precipitation: 0.1,
        humidity: 65.0,
        power_demand: 1850.0,
        ..Observation::default()
    };

    let assessment = scorer.assess(&conditions);

    println!("Temperature:           {} F", conditions.temperature);
    println!("Precipitation:         {} in", conditions.precipitation);
    println!("Humidity:              {} %", conditions.humidity);
    println!("Power demand:          {} MW", conditions.power_demand);
    println!();
    println!("Risk level:            {}", assessment.risk_level);
    println!("Risk score:            {}", assessment.risk_score);
    println!("Confidence:            {}", assessment.confidence);
    println!("Infrastructure impact: {}", assessment.infrastructure_impact);
    println!("Anomalous conditions:  {}", assessment.is_anomaly);
    println!();
    println!("Recommendations:");
    for (i, action) in assessment.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, action);
    }

    let analysis = run_monthly_analysis(&scorer, &heat_dome_sample());
    let summary = &analysis.summary;

    println!();
    println!("Monthly analysis ({} days):", summary.days_analyzed);
    if let Some(date) = summary.peak_risk_date {
        println!("  Peak risk {} on {}", summary.peak_risk_score, date);
    }
    println!(
        "  Days by level: {} extreme / {} high / {} moderate / {} low",
        summary.extreme_days, summary.high_days, summary.moderate_days, summary.low_days
    );
    println!("  Anomalous days: {}", summary.anomaly_days);

    Ok(())
}
