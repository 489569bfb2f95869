use rand::Rng;
use serde::{Deserialize, Serialize};

use super::industry::{lookup, GENERIC_GROWTH, GENERIC_TRENDS};

/// Market size thresholds in billions, largest first.
const SIZE_BUCKETS: [(f64, &str); 3] = [(100.0, "Very Large"), (30.0, "Large"), (5.0, "Medium")];
const SMALL_MARKET: &str = "Small";

pub const MAX_POSITION_RANK: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub size: String,
    pub growth: String,
    pub trends: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub strength: String,
    pub weakness: String,
    pub market_share: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveLandscape {
    pub competitors: Vec<Competitor>,
    pub market_position: String,
}

pub fn size_label(market_size: f64) -> &'static str {
    SIZE_BUCKETS
        .iter()
        .find(|(threshold, _)| market_size > *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(SMALL_MARKET)
}

pub fn market_analysis(industry: &str, market_size: f64) -> MarketAnalysis {
    let (growth, trends) = match lookup(industry) {
        Some(entry) => (entry.growth, entry.trends),
        None => (GENERIC_GROWTH, GENERIC_TRENDS),
    };
    MarketAnalysis {
        size: size_label(market_size).to_string(),
        growth: growth.to_string(),
        trends: trends.iter().map(|t| t.to_string()).collect(),
    }
}

fn generic_competitors(industry: &str) -> Vec<Competitor> {
    vec![
        Competitor {
            name: format!("{} Leader 1", industry),
            strength: "Strong brand recognition".to_string(),
            weakness: "Slower to innovate".to_string(),
            market_share: "25%".to_string(),
        },
        Competitor {
            name: format!("{} Innovator", industry),
            strength: "Cutting-edge technology".to_string(),
            weakness: "Limited market presence".to_string(),
            market_share: "15%".to_string(),
        },
    ]
}

pub fn competitors(industry: &str) -> Vec<Competitor> {
    match lookup(industry) {
        Some(entry) => entry
            .competitors
            .iter()
            .map(|seed| Competitor {
                name: seed.name.to_string(),
                strength: seed.strength.to_string(),
                weakness: seed.weakness.to_string(),
                market_share: seed.market_share.to_string(),
            })
            .collect(),
        None => generic_competitors(industry),
    }
}

/// The rank is drawn uniformly from 1..=5; only the format is stable.
pub fn market_position<R: Rng + ?Sized>(industry: &str, rng: &mut R) -> String {
    let rank = rng.gen_range(1..=MAX_POSITION_RANK);
    format!("Projected #{} challenger in the {} market", rank, industry)
}

pub fn competitive_landscape<R: Rng + ?Sized>(industry: &str, rng: &mut R) -> CompetitiveLandscape {
    CompetitiveLandscape {
        competitors: competitors(industry),
        market_position: market_position(industry, rng),
    }
}
