use anyhow::Result;

use super::types::{FieldValue, StartupProfile};
use crate::prompt::{prompt, prompt_choice, prompt_with_default, prompt_yes_no};

const INDUSTRIES: &[&str] = &[
    "Agriculture / AgriTech",
    "Artificial Intelligence",
    "Biotechnology",
    "Cybersecurity",
    "E-Commerce",
    "Education / EdTech",
    "Finance / FinTech",
    "FoodTech",
    "Gaming",
    "Green Energy",
    "Healthcare",
    "Logistics / Transport",
    "Real Estate",
    "Technology",
    "Other",
];
const BUSINESS_MODELS: &[&str] = &["B2B", "B2C", "SaaS", "Marketplace", "E-commerce", "Other"];
const EDUCATION_LEVELS: &[&str] = &["Bachelor's", "Master's", "PhD"];
const FUNDING_STAGES: &[&str] = &["Pre-seed", "Seed", "Series A", "Series B", "Series C+"];
const PRODUCT_READINESS: &[&str] = &[
    "Idea",
    "Prototype",
    "MVP",
    "Beta",
    "Launched",
    "Scaling",
    "Established",
];
const LEVELS: &[&str] = &["Low", "Medium", "High"];
const MARKET_MATURITY: &[&str] = &["Emerging", "Developing", "Mature"];

fn text(message: &str) -> Result<Option<String>> {
    let input = prompt(&format!("{}: ", message))?;
    Ok(if input.is_empty() { None } else { Some(input) })
}

fn number(message: &str) -> Result<Option<FieldValue>> {
    Ok(text(message)?.map(FieldValue::Text))
}

fn number_with_default(message: &str, default: &str) -> Result<Option<FieldValue>> {
    Ok(Some(FieldValue::Text(prompt_with_default(message, default)?)))
}

/// Walk the user through the prediction form on stdin.
///
/// Numeric answers are kept as typed; the engine parses them leniently.
/// Blank answers leave the field absent.
pub fn prompt_for_profile() -> Result<StartupProfile> {
    eprintln!();
    eprintln!("Startup profile");
    eprintln!("===============");
    eprintln!("Leave a field blank to skip it. Required fields are marked with *.");
    eprintln!();

    let startup_name = text("Startup name *")?;
    let industry = prompt_choice("Industry *", INDUSTRIES)?;
    let country = text("Country *")?;
    let region = text("Region")?;

    eprintln!();
    let founder_experience = number("Founder experience in years *")?;
    let team_size = number_with_default("Number of founders", "1")?;
    let education_level = prompt_choice("Education level", EDUCATION_LEVELS)?;
    let previous_startup_experience = prompt_yes_no("Previous startup experience?", false)?;
    let team_skill_diversity = number_with_default("Team skill diversity (1-10)", "5")?;

    eprintln!();
    let business_model = prompt_choice("Business model *", BUSINESS_MODELS)?;
    let target_market_size = number("Target market size ($B)")?;
    let customer_acquisition_cost = number("Customer acquisition cost ($)")?;
    let product_readiness = prompt_choice("Product readiness *", PRODUCT_READINESS)?;
    let competition_level = prompt_choice("Competition level *", LEVELS)?;
    let innovation_score = number("Innovation score (1-100)")?;

    eprintln!();
    let revenue = number("Monthly revenue ($)")?;
    let monthly_burn_rate = number("Monthly burn rate ($)")?;
    let runway = number("Runway (months)")?;
    let funding_stage = prompt_choice("Funding stage", FUNDING_STAGES)?;
    let funding_amount = number("Funding amount ($)")?;

    eprintln!();
    let market_maturity = prompt_choice("Market maturity *", MARKET_MATURITY)?;
    let regulatory_risk = prompt_choice("Regulatory risk *", LEVELS)?;
    let social_media_presence = number_with_default("Social media presence (1-10)", "5")?;
    let idea_description = text("Describe your idea")?;

    Ok(StartupProfile {
        startup_name,
        industry,
        region,
        country,
        product_readiness,
        competition_level,
        market_maturity,
        business_model,
        funding_stage,
        education_level,
        regulatory_risk,
        previous_startup_experience,
        funding_amount,
        team_size,
        founder_experience,
        innovation_score,
        team_skill_diversity,
        target_market_size,
        runway,
        social_media_presence,
        customer_acquisition_cost,
        revenue,
        monthly_burn_rate,
        idea_description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FundingStage, Level, ProductStage};

    #[test]
    fn test_offered_choices_are_all_recognized() {
        for label in PRODUCT_READINESS {
            assert!(ProductStage::from_label(label).is_some(), "{}", label);
        }
        for label in FUNDING_STAGES {
            assert!(FundingStage::from_label(label).is_some(), "{}", label);
        }
        for label in LEVELS {
            assert!(Level::from_label(label).is_some(), "{}", label);
        }
        for label in MARKET_MATURITY {
            assert!(Level::from_growth_label(label).is_some(), "{}", label);
        }
    }
}
