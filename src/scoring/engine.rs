use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use super::factors::{match_bucket, Bucket, LevelTable, LinearFactor};
use crate::profile::{Level, ProfileMetrics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Experience", "Runway", "Competition"
    pub description: String, // e.g. "4 years", "18 months, matched '>=18'"
    pub before: f64,         // Score before this factor
    pub after: f64,          // Score after this factor
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Rounded and clamped success probability
    pub score: u8,
    /// Sum of base and contributions before rounding and clamping
    pub raw: f64,
    pub breakdown: ScoreBreakdown,
}

struct Accumulator {
    score: f64,
    factors: Vec<FactorContribution>,
}

impl Accumulator {
    fn add(&mut self, label: &str, description: String, bonus: f64) {
        let before = self.score;
        self.score += bonus;
        self.factors.push(FactorContribution {
            label: label.to_string(),
            description,
            before,
            after: self.score,
        });
    }

    fn linear(&mut self, label: &str, value: f64, unit: &str, factor: &LinearFactor) {
        let description = format!("{} {}", format_number(value), unit);
        self.add(label, description, factor.apply(value));
    }

    fn buckets(&mut self, label: &str, value: f64, unit: &str, buckets: &[Bucket]) {
        let matched = match_bucket(value, buckets);
        let description = match matched.matched_range {
            Some(range) => format!("{} {}, matched '{}'", format_number(value), unit, range),
            None => format!("{} {}, no bucket matched", format_number(value), unit),
        };
        self.add(label, description, matched.bonus);
    }

    fn level(&mut self, label: &str, level: Option<Level>, table: &LevelTable) {
        match level {
            Some(level) => self.add(label, level.to_string(), table.get(level)),
            None => self.add(label, "not provided".to_string(), 0.0),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Additive score: start from the baseline, add every factor's bonus, round,
/// then clamp to the configured floor and ceiling.
///
/// Never fails. An unrecognized or missing label contributes nothing.
pub fn calculate_score(metrics: &ProfileMetrics, config: &ScoringConfig) -> ScoreResult {
    let mut acc = Accumulator {
        score: config.base_score,
        factors: Vec::new(),
    };

    acc.linear("Experience", metrics.experience_years, "years", &config.experience);
    acc.linear("Team diversity", metrics.diversity, "/ 10", &config.team_diversity);
    acc.linear("Innovation", metrics.innovation, "/ 100", &config.innovation);
    acc.linear(
        "Social presence",
        metrics.social_presence,
        "/ 10",
        &config.social_presence,
    );
    acc.buckets("Market size", metrics.market_size, "$B", &config.market_size);

    match metrics.stage {
        Some(stage) => acc.add("Readiness", stage.to_string(), config.readiness.get(stage)),
        None => acc.add("Readiness", "not provided".to_string(), 0.0),
    }

    let runway_unit = if metrics.runway_derived {
        "months (derived)"
    } else {
        "months"
    };
    acc.buckets("Runway", metrics.runway_months, runway_unit, &config.runway);

    match metrics.funding_stage {
        Some(stage) => acc.add(
            "Funding stage",
            stage.to_string(),
            config.funding_stage.get(stage),
        ),
        None => acc.add("Funding stage", "not provided".to_string(), 0.0),
    }

    acc.level("Competition", metrics.competition, &config.competition);
    acc.level("Market growth", metrics.market_growth, &config.market_growth);
    acc.level("Regulatory risk", metrics.regulatory_risk, &config.regulatory_risk);

    if metrics.previous_startup {
        acc.add(
            "Previous startup",
            "founder has started a company before".to_string(),
            config.previous_startup,
        );
    }

    let raw = acc.score;
    // max/min rather than clamp: a misconfigured floor above the ceiling must not panic
    let bounded = raw
        .round()
        .max(config.floor)
        .min(config.ceiling)
        .max(0.0)
        .min(100.0);

    ScoreResult {
        score: bounded as u8,
        raw,
        breakdown: ScoreBreakdown {
            base_score: config.base_score,
            factors: acc.factors,
        },
    }
}
