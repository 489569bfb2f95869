use serde::{Deserialize, Serialize};

use crate::profile::ProfileMetrics;

/// Growth assumptions for the ARR projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Starting ARR when the profile has no monthly revenue
    pub default_base_arr: f64,
    /// Half-year growth rate for a score of 10; scales linearly with score
    pub base_growth_rate: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_base_arr: 50_000.0,
            base_growth_rate: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjection {
    pub six_months: String,
    pub one_year: String,
    pub three_years: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedArr {
    pub six_months: f64,
    pub one_year: f64,
    pub three_years: f64,
}

pub fn validate_projection(config: &ProjectionConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    if !config.default_base_arr.is_finite() || config.default_base_arr <= 0.0 {
        errors.push("projection.default_base_arr: must be a positive number".to_string());
    }
    if !config.base_growth_rate.is_finite() || config.base_growth_rate <= 0.0 {
        errors.push("projection.base_growth_rate: must be a positive number".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Revenue annualized when there is any, otherwise the configured default.
pub fn base_arr(metrics: &ProfileMetrics, config: &ProjectionConfig) -> f64 {
    let annualized = metrics.monthly_revenue * 12.0;
    if annualized >= 1.0 {
        annualized
    } else {
        config.default_base_arr
    }
}

/// Compound half-year growth at `rate * score / 10` over 1, 2 and 6 periods.
pub fn project_arr(score: u8, base: f64, rate: f64) -> ProjectedArr {
    let r = rate * score as f64 / 10.0;
    ProjectedArr {
        six_months: base * (1.0 + r),
        one_year: base * (1.0 + r).powi(2),
        three_years: base * (1.0 + r).powi(6),
    }
}

/// Whole dollars with thousands separators, e.g. `$1,234,567`.
pub fn format_currency(amount: f64) -> String {
    let whole = amount.max(0.0).round();
    let whole = if whole.is_finite() { whole } else { f64::MAX };
    let digits = format!("{:.0}", whole);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

pub fn financial_projection(
    score: u8,
    metrics: &ProfileMetrics,
    config: &ProjectionConfig,
) -> FinancialProjection {
    let arr = project_arr(score, base_arr(metrics, config), config.base_growth_rate);
    FinancialProjection {
        six_months: format!("{} ARR", format_currency(arr.six_months)),
        one_year: format!("{} ARR", format_currency(arr.one_year)),
        three_years: format!("{} ARR", format_currency(arr.three_years)),
    }
}
