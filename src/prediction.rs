use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::insights::{
    market, projection, risks, verdict, CompetitiveLandscape, FinancialProjection, MarketAnalysis,
    ProjectionConfig, Recommendation, RiskFactor, Verdict,
};
use crate::profile::{ProfileMetrics, StartupProfile};
use crate::scoring::{calculate_score, Assessment, ScoreBreakdown, ScoringConfig, SubScores};

/// Everything derived from one profile submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub success_probability: u8,
    pub assessment: Assessment,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
    pub market_analysis: MarketAnalysis,
    pub competitive_landscape: CompetitiveLandscape,
    pub financial_projection: FinancialProjection,
    pub verdict: Verdict,
    pub breakdown: ScoreBreakdown,
}

/// Stateless prediction engine. Holds only read-only policy, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    scoring: ScoringConfig,
    projection: ProjectionConfig,
}

impl Predictor {
    pub fn new(scoring: ScoringConfig, projection: ProjectionConfig) -> Self {
        Self {
            scoring,
            projection,
        }
    }

    /// Predict with the thread-local generator and the system clock.
    pub fn predict(&self, profile: &StartupProfile) -> PredictionResult {
        self.predict_with(profile, &mut rand::thread_rng(), Utc::now())
    }

    /// Same as [`Predictor::predict`] with the randomness and clock supplied.
    /// Only the verdict confidence and market position draw from `rng`.
    pub fn predict_with<R: Rng + ?Sized>(
        &self,
        profile: &StartupProfile,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> PredictionResult {
        let metrics = ProfileMetrics::from_profile(profile);
        if metrics.runway_derived {
            tracing::warn!(
                months = metrics.runway_months,
                "runway not supplied, derived from funding and net burn"
            );
        }

        let scored = calculate_score(&metrics, &self.scoring);
        let scores = SubScores::from_metrics(&metrics);
        let industry = profile.industry_name();

        let result = PredictionResult {
            success_probability: scored.score,
            assessment: scores.assessment(),
            risk_factors: risks::risk_factors(&metrics, &scores),
            recommendations: risks::recommendations(&metrics, &scores),
            market_analysis: market::market_analysis(industry, metrics.market_size),
            competitive_landscape: market::competitive_landscape(industry, rng),
            financial_projection: projection::financial_projection(
                scored.score,
                &metrics,
                &self.projection,
            ),
            verdict: verdict::build_verdict(scored.score, &scores, industry, rng, now),
            breakdown: scored.breakdown,
        };

        tracing::debug!(
            startup = profile.startup_name.as_deref().unwrap_or(""),
            industry,
            score = result.success_probability,
            raw = scored.raw,
            risks = result.risk_factors.len(),
            "computed prediction"
        );
        result
    }
}
