use super::types::{FieldValue, StartupProfile};

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

fn blank_number(value: &Option<FieldValue>) -> bool {
    value.as_ref().map(FieldValue::is_blank).unwrap_or(true)
}

/// Check the fields the prediction form marks as required.
/// Returns all missing fields at once (not just the first).
///
/// The engine itself accepts any profile; this is the form layer's gate.
pub fn validate_profile(profile: &StartupProfile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let required_text = [
        ("startupName", &profile.startup_name, "Startup name is required"),
        ("industry", &profile.industry, "Industry is required"),
        ("country", &profile.country, "Country is required"),
        ("businessModel", &profile.business_model, "Business model is required"),
        ("productReadiness", &profile.product_readiness, "Product readiness is required"),
        ("competitionLevel", &profile.competition_level, "Competition level is required"),
        ("marketMaturity", &profile.market_maturity, "Market maturity is required"),
        ("regulatoryRisk", &profile.regulatory_risk, "Regulatory risk is required"),
    ];

    for (field, value, message) in required_text {
        if blank(value) {
            errors.push(format!("{}: {}", field, message));
        }
    }

    if blank_number(&profile.founder_experience) {
        errors.push("founderExperience: Founder experience is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_profile() -> StartupProfile {
        StartupProfile {
            startup_name: Some("Acme".to_string()),
            industry: Some("Technology".to_string()),
            country: Some("Germany".to_string()),
            business_model: Some("SaaS".to_string()),
            product_readiness: Some("MVP".to_string()),
            competition_level: Some("Medium".to_string()),
            market_maturity: Some("Developing".to_string()),
            regulatory_risk: Some("Low".to_string()),
            founder_experience: Some(FieldValue::Number(4.0)),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_profile_passes() {
        assert!(validate_profile(&complete_profile()).is_ok());
    }

    #[test]
    fn test_empty_profile_lists_every_field() {
        let errors = validate_profile(&StartupProfile::default()).unwrap_err();
        assert_eq!(errors.len(), 9);
        assert!(errors.iter().any(|e| e.starts_with("industry:")));
        assert!(errors.iter().any(|e| e.starts_with("founderExperience:")));
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut profile = complete_profile();
        profile.startup_name = Some("   ".to_string());
        profile.founder_experience = Some(FieldValue::Text(" ".to_string()));
        let errors = validate_profile(&profile).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("startupName"));
        assert!(errors[1].contains("founderExperience"));
    }

    #[test]
    fn test_malformed_experience_is_not_blank() {
        // Malformed numbers are the engine's problem (treated as zero), not the form's.
        let mut profile = complete_profile();
        profile.founder_experience = Some(FieldValue::Text("a few".to_string()));
        assert!(validate_profile(&profile).is_ok());
    }
}
