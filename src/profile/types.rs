use serde::{Deserialize, Serialize};

/// A numeric form field as submitted: either a real number or the raw text
/// the user typed ("$250,000", "18 months", "abc").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric value of the field, or None when blank or malformed.
    pub fn value(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => parse_lenient(s),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(_) => false,
            FieldValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Parse the leading number out of a form string.
///
/// Leading `$`, thousands separators and surrounding whitespace are ignored.
/// Trailing text after the number is dropped ("18 months" -> 18). Returns
/// None when no digits lead the string.
pub fn parse_lenient(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let cleaned = cleaned.trim();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    cleaned[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Startup profile as collected by the prediction form.
///
/// Every field is optional; the engine substitutes documented defaults for
/// anything absent or malformed. Required-field checks belong to
/// [`validate_profile`](super::validate_profile), not to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartupProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(alias = "productStage", alias = "stage", skip_serializing_if = "Option::is_none")]
    pub product_readiness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition_level: Option<String>,
    #[serde(alias = "marketGrowth", skip_serializing_if = "Option::is_none")]
    pub market_maturity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulatory_risk: Option<String>,
    pub previous_startup_experience: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_amount: Option<FieldValue>,
    #[serde(alias = "numberOfFounders", skip_serializing_if = "Option::is_none")]
    pub team_size: Option<FieldValue>,
    #[serde(alias = "founderExperienceYears", skip_serializing_if = "Option::is_none")]
    pub founder_experience: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub innovation_score: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_skill_diversity: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_market_size: Option<FieldValue>,
    #[serde(alias = "runwayMonths", skip_serializing_if = "Option::is_none")]
    pub runway: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media_presence: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_acquisition_cost: Option<FieldValue>,
    #[serde(alias = "monthlyRevenue", skip_serializing_if = "Option::is_none")]
    pub revenue: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_burn_rate: Option<FieldValue>,

    /// Free text, kept with the record but never scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_description: Option<String>,
}

impl StartupProfile {
    /// Display name for the industry, "Unspecified" when blank.
    pub fn industry_name(&self) -> &str {
        match self.industry.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Unspecified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_plain() {
        assert_eq!(parse_lenient("42"), Some(42.0));
        assert_eq!(parse_lenient("  2.5 "), Some(2.5));
    }

    #[test]
    fn test_parse_lenient_currency() {
        assert_eq!(parse_lenient("$250,000"), Some(250_000.0));
    }

    #[test]
    fn test_parse_lenient_trailing_text() {
        assert_eq!(parse_lenient("18 months"), Some(18.0));
        assert_eq!(parse_lenient("3.5B"), Some(3.5));
    }

    #[test]
    fn test_parse_lenient_malformed() {
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("$"), None);
        assert_eq!(parse_lenient("-"), None);
    }

    #[test]
    fn test_parse_lenient_negative() {
        assert_eq!(parse_lenient("-3"), Some(-3.0));
    }

    #[test]
    fn test_field_value_rejects_non_finite() {
        assert_eq!(FieldValue::Number(f64::NAN).value(), None);
        assert_eq!(FieldValue::Number(f64::INFINITY).value(), None);
    }

    #[test]
    fn test_profile_yaml_with_mixed_numeric_forms() {
        let yaml = r#"
startupName: Acme
industry: Technology
fundingAmount: "$500,000"
founderExperience: 4
runwayMonths: 18
productStage: MVP
"#;
        let profile: StartupProfile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(profile.startup_name.as_deref(), Some("Acme"));
        assert_eq!(profile.funding_amount.unwrap().value(), Some(500_000.0));
        assert_eq!(profile.founder_experience.unwrap().value(), Some(4.0));
        assert_eq!(profile.runway.unwrap().value(), Some(18.0));
        assert_eq!(profile.product_readiness.as_deref(), Some("MVP"));
    }

    #[test]
    fn test_profile_json_aliases() {
        let json = r#"{"numberOfFounders": "3", "marketGrowth": "High", "monthlyRevenue": 1200}"#;
        let profile: StartupProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.team_size.unwrap().value(), Some(3.0));
        assert_eq!(profile.market_maturity.as_deref(), Some("High"));
        assert_eq!(profile.revenue.unwrap().value(), Some(1200.0));
    }

    #[test]
    fn test_empty_profile_parses() {
        let profile: StartupProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, StartupProfile::default());
        assert_eq!(profile.industry_name(), "Unspecified");
    }
}
