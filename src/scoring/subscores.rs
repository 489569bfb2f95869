use serde::{Deserialize, Serialize};

use crate::profile::{Level, ProfileMetrics};

/// Bounded [0, 100] partial scores, one per input dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    pub funding: u32,
    /// False when no usable funding amount was supplied.
    pub funding_assessed: bool,
    pub team: u32,
    pub experience: u32,
    pub competition: u32,
    pub market_growth: u32,
    pub market_fit: u32,
}

/// Logarithmic: rises quickly for small amounts and flattens for large ones.
/// Amounts at or below zero count as 1 to keep the log defined.
pub fn funding_score(amount: f64) -> u32 {
    let amount = if amount <= 0.0 { 1.0 } else { amount };
    ((amount / 1000.0 + 1.0).log10() * 33.0).floor().clamp(0.0, 100.0) as u32
}

pub fn team_score(team_size: f64) -> u32 {
    (team_size * 5.0).floor().clamp(0.0, 100.0) as u32
}

pub fn experience_score(years: f64) -> u32 {
    (years * 10.0).floor().clamp(0.0, 100.0) as u32
}

pub fn competition_score(level: Option<Level>) -> u32 {
    match level {
        Some(Level::Low) => 80,
        Some(Level::Medium) => 50,
        Some(Level::High) => 20,
        None => 50,
    }
}

pub fn market_growth_score(level: Option<Level>) -> u32 {
    match level {
        Some(Level::Low) => 30,
        Some(Level::Medium) => 60,
        Some(Level::High) => 90,
        None => 50,
    }
}

impl SubScores {
    pub fn from_metrics(metrics: &ProfileMetrics) -> Self {
        let competition = competition_score(metrics.competition);
        let market_growth = market_growth_score(metrics.market_growth);
        Self {
            funding: funding_score(metrics.funding_amount.unwrap_or(0.0)),
            funding_assessed: metrics.funding_amount.is_some(),
            team: team_score(metrics.team_size),
            experience: experience_score(metrics.experience_years),
            competition,
            market_growth,
            market_fit: ((competition + market_growth) as f64 / 2.0).round() as u32,
        }
    }

    pub fn assessment(&self) -> Assessment {
        let risk = self.competition as f64 * 0.4
            + self.market_growth as f64 * 0.3
            + self.experience as f64 * 0.3;
        let collaboration = (self.team as f64 * 0.8 + self.experience as f64 * 0.2).min(100.0);

        Assessment {
            risk_level: 100u32.saturating_sub(risk.round() as u32),
            market_fit: self.market_fit,
            funding_adequacy: self.funding,
            team_strength: self.team,
            experience_level: ExperienceLevel::from_score(self.experience),
            collaboration: collaboration.round() as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Low,
    Medium,
    High,
}

impl ExperienceLevel {
    pub fn from_score(experience: u32) -> Self {
        if experience > 70 {
            ExperienceLevel::High
        } else if experience > 40 {
            ExperienceLevel::Medium
        } else {
            ExperienceLevel::Low
        }
    }
}

/// Headline percentages derived from the sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// 0-100, higher is riskier
    pub risk_level: u32,
    pub market_fit: u32,
    pub funding_adequacy: u32,
    pub team_strength: u32,
    pub experience_level: ExperienceLevel,
    pub collaboration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FieldValue, StartupProfile};

    #[test]
    fn test_funding_score_curve() {
        assert_eq!(funding_score(0.0), 0);
        assert_eq!(funding_score(-500.0), 0);
        // log10(101) * 33 = 66.1
        assert_eq!(funding_score(100_000.0), 66);
        // log10(1001) * 33 = 99.0
        assert_eq!(funding_score(1_000_000.0), 99);
        assert_eq!(funding_score(1e12), 100);
    }

    #[test]
    fn test_team_score_caps_at_twenty_members() {
        assert_eq!(team_score(4.0), 20);
        assert_eq!(team_score(20.0), 100);
        assert_eq!(team_score(300.0), 100);
    }

    #[test]
    fn test_experience_score_caps_at_ten_years() {
        assert_eq!(experience_score(3.0), 30);
        assert_eq!(experience_score(10.0), 100);
        assert_eq!(experience_score(25.0), 100);
    }

    #[test]
    fn test_lookup_defaults() {
        assert_eq!(competition_score(None), 50);
        assert_eq!(competition_score(Some(Level::Low)), 80);
        assert_eq!(market_growth_score(None), 50);
        assert_eq!(market_growth_score(Some(Level::High)), 90);
    }

    #[test]
    fn test_market_fit_is_average() {
        let profile = StartupProfile {
            competition_level: Some("Low".to_string()),
            market_maturity: Some("High".to_string()),
            ..Default::default()
        };
        let scores = SubScores::from_metrics(&ProfileMetrics::from_profile(&profile));
        assert_eq!(scores.market_fit, 85);
    }

    #[test]
    fn test_funding_assessed_only_when_supplied() {
        let scores = SubScores::from_metrics(&ProfileMetrics::from_profile(&StartupProfile::default()));
        assert!(!scores.funding_assessed);

        let profile = StartupProfile {
            funding_amount: Some(FieldValue::Number(0.0)),
            ..Default::default()
        };
        let scores = SubScores::from_metrics(&ProfileMetrics::from_profile(&profile));
        assert!(scores.funding_assessed);
        assert_eq!(scores.funding, 0);
    }

    #[test]
    fn test_assessment_values() {
        let scores = SubScores {
            funding: 66,
            funding_assessed: true,
            team: 20,
            experience: 30,
            competition: 20,
            market_growth: 60,
            market_fit: 40,
        };
        let assessment = scores.assessment();
        // 100 - round(8 + 18 + 9)
        assert_eq!(assessment.risk_level, 65);
        assert_eq!(assessment.experience_level, ExperienceLevel::Low);
        // 16 + 6
        assert_eq!(assessment.collaboration, 22);
        assert_eq!(assessment.funding_adequacy, 66);
    }

    #[test]
    fn test_experience_level_brackets() {
        assert_eq!(ExperienceLevel::from_score(100), ExperienceLevel::High);
        assert_eq!(ExperienceLevel::from_score(50), ExperienceLevel::Medium);
        assert_eq!(ExperienceLevel::from_score(40), ExperienceLevel::Low);
    }
}
