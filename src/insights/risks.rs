use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::{Level, ProfileMetrics};
use crate::scoring::SubScores;

pub const LIMITED_EXPERIENCE_YEARS: f64 = 3.0;
pub const SHORT_RUNWAY_MONTHS: f64 = 6.0;
pub const LOW_DIVERSITY: f64 = 5.0;
pub const LOW_FUNDING_SCORE: u32 = 30;
pub const CRITICAL_FUNDING_SCORE: u32 = 15;

pub const NO_RISKS: &str = "No significant risks identified";
pub const DEFAULT_ACTION: &str = "Maintain current strategy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: Severity,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub priority: Severity,
    pub impact: String,
}

/// One fired rule: the risk and the action that answers it share a severity.
struct Finding {
    severity: Severity,
    factor: &'static str,
    impact: String,
    action: &'static str,
    benefit: &'static str,
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn findings(metrics: &ProfileMetrics, scores: &SubScores) -> Vec<Finding> {
    let mut out = Vec::new();

    if metrics.experience_years < LIMITED_EXPERIENCE_YEARS {
        let (severity, impact) = if metrics.experience_years == 0.0 {
            (
                Severity::High,
                "No prior founder experience may affect decision making and industry connections"
                    .to_string(),
            )
        } else {
            (
                Severity::Medium,
                format!(
                    "{} years of founder experience may affect decision making and industry connections",
                    format_amount(metrics.experience_years)
                ),
            )
        };
        out.push(Finding {
            severity,
            factor: "Limited founder experience",
            impact,
            action: "Consider adding advisors with industry experience",
            benefit: "Improves decision making and industry connections",
        });
    }

    if metrics.competition == Some(Level::High) {
        out.push(Finding {
            severity: Severity::High,
            factor: "High competition in the target market",
            impact: "Higher customer acquisition costs".to_string(),
            action: "Develop a strong unique value proposition",
            benefit: "Helps stand out in a competitive market",
        });
    }

    if metrics.runway_months < SHORT_RUNWAY_MONTHS {
        out.push(Finding {
            severity: Severity::High,
            factor: "Limited financial runway",
            impact: format!(
                "Only {} months of runway; urgent need for additional funding",
                format_amount(metrics.runway_months)
            ),
            action: "Focus on extending runway or securing additional funding",
            benefit: "Ensures business continuity and growth opportunities",
        });
    }

    if metrics.regulatory_risk == Some(Level::High) {
        out.push(Finding {
            severity: Severity::High,
            factor: "High regulatory risk",
            impact: "Compliance work can delay launch and raise costs".to_string(),
            action: "Engage regulatory counsel and plan compliance early",
            benefit: "Reduces the chance of costly launch delays",
        });
    }

    if metrics.diversity < LOW_DIVERSITY {
        out.push(Finding {
            severity: Severity::Medium,
            factor: "Limited team skill diversity",
            impact: format!(
                "Skill diversity of {}/10 leaves gaps in execution",
                format_amount(metrics.diversity)
            ),
            action: "Consider adding team members with complementary skills",
            benefit: "Broadens the team's execution capacity",
        });
    }

    if metrics.market_growth == Some(Level::Low) {
        out.push(Finding {
            severity: Severity::Medium,
            factor: "Limited market growth",
            impact: "A slow-growing market caps how fast revenue can scale".to_string(),
            action: "Explore adjacent segments with stronger growth",
            benefit: "Opens room for faster expansion",
        });
    }

    if scores.funding_assessed && scores.funding < LOW_FUNDING_SCORE {
        let severity = if scores.funding < CRITICAL_FUNDING_SCORE {
            Severity::Medium
        } else {
            Severity::Low
        };
        out.push(Finding {
            severity,
            factor: "Limited funding",
            impact: format!(
                "Funding adequacy of {}/100 limits hiring and runway",
                scores.funding
            ),
            action: "Prepare a focused fundraising plan",
            benefit: "Secures resources for the next stage",
        });
    }

    out
}

/// Risk factors in rule order. Never empty.
pub fn risk_factors(metrics: &ProfileMetrics, scores: &SubScores) -> Vec<RiskFactor> {
    let risks: Vec<RiskFactor> = findings(metrics, scores)
        .into_iter()
        .map(|f| RiskFactor {
            factor: f.factor.to_string(),
            severity: f.severity,
            impact: f.impact,
        })
        .collect();

    if risks.is_empty() {
        return vec![RiskFactor {
            factor: NO_RISKS.to_string(),
            severity: Severity::Low,
            impact: "Current inputs show no red flags".to_string(),
        }];
    }
    risks
}

/// Recommendations paired with the fired risk rules. Never empty.
pub fn recommendations(metrics: &ProfileMetrics, scores: &SubScores) -> Vec<Recommendation> {
    let recs: Vec<Recommendation> = findings(metrics, scores)
        .into_iter()
        .map(|f| Recommendation {
            action: f.action.to_string(),
            priority: f.severity,
            impact: f.benefit.to_string(),
        })
        .collect();

    if recs.is_empty() {
        return vec![Recommendation {
            action: DEFAULT_ACTION.to_string(),
            priority: Severity::Low,
            impact: "Current fundamentals support steady progress".to_string(),
        }];
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FieldValue, StartupProfile};

    fn evaluate(profile: &StartupProfile) -> (Vec<RiskFactor>, Vec<Recommendation>) {
        let metrics = ProfileMetrics::from_profile(profile);
        let scores = SubScores::from_metrics(&metrics);
        (
            risk_factors(&metrics, &scores),
            recommendations(&metrics, &scores),
        )
    }

    fn healthy() -> StartupProfile {
        StartupProfile {
            founder_experience: Some(FieldValue::Number(8.0)),
            runway: Some(FieldValue::Number(18.0)),
            team_skill_diversity: Some(FieldValue::Number(7.0)),
            competition_level: Some("Medium".to_string()),
            market_maturity: Some("High".to_string()),
            regulatory_risk: Some("Low".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_healthy_profile_gets_placeholders() {
        let (risks, recs) = evaluate(&healthy());
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].factor, NO_RISKS);
        assert_eq!(risks[0].severity, Severity::Low);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].action, DEFAULT_ACTION);
    }

    #[test]
    fn test_zero_experience_is_high_severity() {
        let profile = StartupProfile {
            founder_experience: Some(FieldValue::Number(0.0)),
            ..healthy()
        };
        let (risks, recs) = evaluate(&profile);
        assert_eq!(risks[0].factor, "Limited founder experience");
        assert_eq!(risks[0].severity, Severity::High);
        assert_eq!(recs[0].priority, Severity::High);
    }

    #[test]
    fn test_some_experience_is_medium_severity() {
        let profile = StartupProfile {
            founder_experience: Some(FieldValue::Number(2.0)),
            ..healthy()
        };
        let (risks, _) = evaluate(&profile);
        assert_eq!(risks[0].severity, Severity::Medium);
        assert!(risks[0].impact.starts_with("2 years"));
    }

    #[test]
    fn test_rules_fire_in_order() {
        let profile = StartupProfile {
            founder_experience: Some(FieldValue::Number(0.0)),
            competition_level: Some("High".to_string()),
            runway: Some(FieldValue::Number(2.0)),
            regulatory_risk: Some("High".to_string()),
            team_skill_diversity: Some(FieldValue::Number(3.0)),
            market_maturity: Some("Low".to_string()),
            funding_amount: Some(FieldValue::Number(5_000.0)),
            ..Default::default()
        };
        let (risks, recs) = evaluate(&profile);
        let factors: Vec<&str> = risks.iter().map(|r| r.factor.as_str()).collect();
        assert_eq!(
            factors,
            vec![
                "Limited founder experience",
                "High competition in the target market",
                "Limited financial runway",
                "High regulatory risk",
                "Limited team skill diversity",
                "Limited market growth",
                "Limited funding",
            ]
        );
        assert_eq!(recs.len(), risks.len());
        for (risk, rec) in risks.iter().zip(&recs) {
            assert_eq!(risk.severity, rec.priority);
        }
    }

    #[test]
    fn test_funding_rule_needs_supplied_amount() {
        let (risks, _) = evaluate(&healthy());
        assert!(!risks.iter().any(|r| r.factor == "Limited funding"));

        let profile = StartupProfile {
            // log10(3) * 33 = 15.7
            funding_amount: Some(FieldValue::Number(2_000.0)),
            ..healthy()
        };
        let (risks, _) = evaluate(&profile);
        let funding = risks.iter().find(|r| r.factor == "Limited funding").unwrap();
        assert_eq!(funding.severity, Severity::Low);

        let profile = StartupProfile {
            funding_amount: Some(FieldValue::Number(100.0)),
            ..healthy()
        };
        let (risks, _) = evaluate(&profile);
        let funding = risks.iter().find(|r| r.factor == "Limited funding").unwrap();
        assert_eq!(funding.severity, Severity::Medium);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
