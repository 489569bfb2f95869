use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::industry::insight_for;
use crate::scoring::SubScores;

pub const STRONG_SUBSCORE: u32 = 70;
pub const WEAK_SUBSCORE: u32 = 30;
pub const MAX_CONFIDENCE: u32 = 99;

pub const NO_STRENGTHS: &str = "No significant strengths identified";
pub const NO_WEAKNESSES: &str = "No significant weaknesses identified";

/// Score range mapped to a verdict message and a confidence window.
#[derive(Debug)]
pub struct Bracket {
    pub min_score: u8,
    pub message: &'static str,
    pub confidence_floor: u32,
    /// Width of the jitter window added to the floor (exclusive)
    pub confidence_spread: u32,
}

// Highest first; the last entry catches everything.
const BRACKETS: [Bracket; 4] = [
    Bracket {
        min_score: 80,
        message: "Exceptional potential! Your startup shows strong indicators of success with solid funding, team, and market position.",
        confidence_floor: 85,
        confidence_spread: 10,
    },
    Bracket {
        min_score: 60,
        message: "Good potential! Your startup has several strengths but could benefit from improvements in certain areas.",
        confidence_floor: 65,
        confidence_spread: 15,
    },
    Bracket {
        min_score: 40,
        message: "Promising but needs work. Consider strengthening your team, securing more funding, or refining your market approach.",
        confidence_floor: 50,
        confidence_spread: 15,
    },
    Bracket {
        min_score: 0,
        message: "High risk. Significant improvements needed in funding, team, or market strategy to increase chances of success.",
        confidence_floor: 30,
        confidence_spread: 20,
    },
];

pub fn bracket_for(score: u8) -> &'static Bracket {
    BRACKETS
        .iter()
        .find(|b| score >= b.min_score)
        .unwrap_or(&BRACKETS[BRACKETS.len() - 1])
}

/// Confidence jitters inside the bracket's window and is not reproducible
/// unless the caller passes a seeded generator.
pub fn confidence<R: Rng + ?Sized>(bracket: &Bracket, rng: &mut R) -> u32 {
    let jitter = if bracket.confidence_spread == 0 {
        0
    } else {
        rng.gen_range(0..bracket.confidence_spread)
    };
    (bracket.confidence_floor + jitter).min(MAX_CONFIDENCE)
}

pub fn strengths(scores: &SubScores) -> Vec<String> {
    let mut out = Vec::new();
    if scores.funding_assessed && scores.funding > STRONG_SUBSCORE {
        out.push("Strong funding position".to_string());
    }
    if scores.team > STRONG_SUBSCORE {
        out.push("Strong team composition".to_string());
    }
    if scores.experience > STRONG_SUBSCORE {
        out.push("Experienced founders".to_string());
    }
    if scores.market_fit > STRONG_SUBSCORE {
        out.push("Excellent market fit".to_string());
    }
    if out.is_empty() {
        out.push(NO_STRENGTHS.to_string());
    }
    out
}

pub fn weaknesses(scores: &SubScores) -> Vec<String> {
    let mut out = Vec::new();
    if scores.competition < WEAK_SUBSCORE {
        out.push("High competition".to_string());
    }
    if scores.market_growth < WEAK_SUBSCORE {
        out.push("Limited market growth".to_string());
    }
    if scores.experience < WEAK_SUBSCORE {
        out.push("Limited experience in the field".to_string());
    }
    if scores.funding_assessed && scores.funding < WEAK_SUBSCORE {
        out.push("Limited funding".to_string());
    }
    if out.is_empty() {
        out.push(NO_WEAKNESSES.to_string());
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score: u8,
    pub message: String,
    pub confidence: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

pub fn build_verdict<R: Rng + ?Sized>(
    score: u8,
    scores: &SubScores,
    industry: &str,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Verdict {
    let bracket = bracket_for(score);
    Verdict {
        score,
        message: format!("{} {}", bracket.message, insight_for(industry)),
        confidence: confidence(bracket, rng),
        strengths: strengths(scores),
        weaknesses: weaknesses(scores),
        timestamp: now,
    }
}
