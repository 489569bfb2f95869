use serde::{Deserialize, Serialize};

use super::factors::{Bucket, LevelTable, LinearFactor};
use crate::profile::{FundingStage, ProductStage};

/// Scoring policy table.
///
/// The score starts at `base_score`, every factor adds its bonus (or
/// penalty), and the rounded sum is clamped to `[floor, ceiling]`. Fields
/// left out of the YAML keep their defaults.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   base_score: 50
///   experience: { per_unit: 1.5, max: 15 }
///   runway:
///     - { range: ">=18", bonus: 10 }
///     - { range: ">=6", bonus: 3 }
///   competition: { low: 6, medium: 0, high: -8 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Starting score before factors are applied (default: 50)
    pub base_score: f64,

    /// Lowest score ever reported (default: 10)
    pub floor: f64,

    /// Highest score ever reported (default: 95)
    pub ceiling: f64,

    /// Founder experience in years
    pub experience: LinearFactor,

    /// Team skill diversity on a 1-10 scale
    pub team_diversity: LinearFactor,

    /// Innovation score on a 1-100 scale
    pub innovation: LinearFactor,

    /// Social media presence on a 1-10 scale
    pub social_presence: LinearFactor,

    /// Target market size in $B, first matching bucket wins
    pub market_size: Vec<Bucket>,

    /// Months of runway, first matching bucket wins
    pub runway: Vec<Bucket>,

    pub readiness: ReadinessTable,

    pub funding_stage: FundingStageTable,

    pub competition: LevelTable,

    pub market_growth: LevelTable,

    pub regulatory_risk: LevelTable,

    /// Flat bonus when a founder has started a company before
    pub previous_startup: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50.0,
            floor: 10.0,
            ceiling: 95.0,
            experience: LinearFactor {
                per_unit: 1.5,
                neutral: 0.0,
                min: None,
                max: Some(15.0),
            },
            team_diversity: LinearFactor {
                per_unit: 2.0,
                neutral: 5.0,
                min: None,
                max: None,
            },
            innovation: LinearFactor {
                per_unit: 0.1,
                neutral: 50.0,
                min: None,
                max: None,
            },
            social_presence: LinearFactor {
                per_unit: 0.5,
                neutral: 5.0,
                min: None,
                max: None,
            },
            market_size: vec![
                Bucket::new(">100", 12.0),
                Bucket::new(">10", 10.0),
                Bucket::new(">1", 5.0),
            ],
            runway: vec![
                Bucket::new(">=24", 12.0),
                Bucket::new(">=18", 10.0),
                Bucket::new(">=12", 7.0),
                Bucket::new(">=6", 3.0),
            ],
            readiness: ReadinessTable::default(),
            funding_stage: FundingStageTable::default(),
            competition: LevelTable {
                low: 6.0,
                medium: 0.0,
                high: -8.0,
            },
            market_growth: LevelTable {
                low: -3.0,
                medium: 0.0,
                high: 5.0,
            },
            regulatory_risk: LevelTable {
                low: 0.0,
                medium: -6.0,
                high: -12.0,
            },
            previous_startup: 3.0,
        }
    }
}

/// Bonus per product readiness stage. Must not decrease with maturity.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReadinessTable {
    pub idea: f64,
    pub prototype: f64,
    pub mvp: f64,
    pub beta: f64,
    pub launched: f64,
    pub scaling: f64,
    pub established: f64,
}

impl Default for ReadinessTable {
    fn default() -> Self {
        Self {
            idea: 0.0,
            prototype: 5.0,
            mvp: 10.0,
            beta: 13.0,
            launched: 15.0,
            scaling: 18.0,
            established: 20.0,
        }
    }
}

impl ReadinessTable {
    pub fn get(&self, stage: ProductStage) -> f64 {
        match stage {
            ProductStage::Idea => self.idea,
            ProductStage::Prototype => self.prototype,
            ProductStage::Mvp => self.mvp,
            ProductStage::Beta => self.beta,
            ProductStage::Launched => self.launched,
            ProductStage::Scaling => self.scaling,
            ProductStage::Established => self.established,
        }
    }
}

/// Bonus per funding stage. Must not decrease with later rounds.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FundingStageTable {
    pub pre_seed: f64,
    pub seed: f64,
    pub series_a: f64,
    pub series_b: f64,
    pub series_c_plus: f64,
}

impl Default for FundingStageTable {
    fn default() -> Self {
        Self {
            pre_seed: 2.0,
            seed: 4.0,
            series_a: 6.0,
            series_b: 8.0,
            series_c_plus: 10.0,
        }
    }
}

impl FundingStageTable {
    pub fn get(&self, stage: FundingStage) -> f64 {
        match stage {
            FundingStage::PreSeed => self.pre_seed,
            FundingStage::Seed => self.seed,
            FundingStage::SeriesA => self.series_a,
            FundingStage::SeriesB => self.series_b,
            FundingStage::SeriesCPlus => self.series_c_plus,
        }
    }
}
