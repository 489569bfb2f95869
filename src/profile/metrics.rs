use super::labels::{FundingStage, Level, ProductStage};
use super::types::{FieldValue, StartupProfile};

pub const MAX_TEAM_SIZE: f64 = 1000.0;
pub const MAX_EXPERIENCE_YEARS: f64 = 50.0;
pub const MAX_MARKET_SIZE: f64 = 100_000.0;
pub const MAX_RUNWAY_MONTHS: f64 = 240.0;
/// Ceiling for monthly revenue, burn and acquisition cost, in dollars.
pub const MAX_MONTHLY_AMOUNT: f64 = 1.0e9;

pub const NEUTRAL_INNOVATION: f64 = 50.0;
pub const NEUTRAL_DIVERSITY: f64 = 5.0;
pub const NEUTRAL_SOCIAL_PRESENCE: f64 = 5.0;

/// Profile fields after parsing and clamping to their domains.
///
/// Every numeric value here is finite and inside its documented range, so
/// downstream calculators never have to re-check.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMetrics {
    /// None when the funding amount was absent or malformed.
    pub funding_amount: Option<f64>,
    pub team_size: f64,
    pub experience_years: f64,
    pub innovation: f64,
    pub diversity: f64,
    pub market_size: f64,
    pub runway_months: f64,
    /// True when runway was computed from funding and net burn.
    pub runway_derived: bool,
    pub social_presence: f64,
    pub acquisition_cost: f64,
    pub monthly_revenue: f64,
    pub monthly_burn: f64,
    pub stage: Option<ProductStage>,
    pub competition: Option<Level>,
    pub market_growth: Option<Level>,
    pub funding_stage: Option<FundingStage>,
    pub regulatory_risk: Option<Level>,
    pub previous_startup: bool,
}

fn read(field: &Option<FieldValue>) -> Option<f64> {
    field.as_ref().and_then(FieldValue::value)
}

fn clamped(field: &Option<FieldValue>, min: f64, max: f64, default: f64) -> f64 {
    read(field).map(|v| v.clamp(min, max)).unwrap_or(default)
}

fn label<T>(field: &Option<String>, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    field.as_deref().and_then(parse)
}

impl ProfileMetrics {
    pub fn from_profile(profile: &StartupProfile) -> Self {
        let funding_amount = read(&profile.funding_amount).map(|v| v.max(0.0));
        let monthly_revenue = clamped(&profile.revenue, 0.0, MAX_MONTHLY_AMOUNT, 0.0);
        let monthly_burn = clamped(&profile.monthly_burn_rate, 0.0, MAX_MONTHLY_AMOUNT, 0.0);

        let (runway_months, runway_derived) = match read(&profile.runway) {
            Some(months) => (months.clamp(0.0, MAX_RUNWAY_MONTHS), false),
            None => match derive_runway(funding_amount, monthly_revenue, monthly_burn) {
                Some(months) => (months, true),
                None => (0.0, false),
            },
        };

        Self {
            funding_amount,
            team_size: clamped(&profile.team_size, 0.0, MAX_TEAM_SIZE, 0.0),
            experience_years: clamped(&profile.founder_experience, 0.0, MAX_EXPERIENCE_YEARS, 0.0),
            innovation: clamped(&profile.innovation_score, 1.0, 100.0, NEUTRAL_INNOVATION),
            diversity: clamped(&profile.team_skill_diversity, 1.0, 10.0, NEUTRAL_DIVERSITY),
            market_size: clamped(&profile.target_market_size, 0.0, MAX_MARKET_SIZE, 0.0),
            runway_months,
            runway_derived,
            social_presence: clamped(
                &profile.social_media_presence,
                1.0,
                10.0,
                NEUTRAL_SOCIAL_PRESENCE,
            ),
            acquisition_cost: clamped(
                &profile.customer_acquisition_cost,
                0.0,
                MAX_MONTHLY_AMOUNT,
                0.0,
            ),
            monthly_revenue,
            monthly_burn,
            stage: label(&profile.product_readiness, ProductStage::from_label),
            competition: label(&profile.competition_level, Level::from_label),
            market_growth: label(&profile.market_maturity, Level::from_growth_label),
            funding_stage: label(&profile.funding_stage, FundingStage::from_label),
            regulatory_risk: label(&profile.regulatory_risk, Level::from_label),
            previous_startup: profile.previous_startup_experience,
        }
    }
}

/// Months of runway implied by cash on hand and net monthly burn.
///
/// Needs both funding and a burn rate. Revenue covering the burn means the
/// company is cash-flow positive, which counts as the longest runway.
fn derive_runway(funding: Option<f64>, revenue: f64, burn: f64) -> Option<f64> {
    let funding = funding?;
    if burn <= 0.0 {
        return None;
    }
    let net_burn = burn - revenue;
    if net_burn <= 0.0 {
        return Some(MAX_RUNWAY_MONTHS);
    }
    Some((funding / net_burn).floor().clamp(0.0, MAX_RUNWAY_MONTHS))
}
