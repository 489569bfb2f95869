use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::profile::Level;

#[derive(Debug, Clone, PartialEq)]
pub enum RangeOp {
    LessThan(f64),
    LessEqual(f64),
    GreaterThan(f64),
    GreaterEqual(f64),
    Equal(f64),
    Between(f64, f64), // Inclusive range: N-M
}

impl RangeOp {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(val) = s.strip_prefix(">=") {
            Ok(RangeOp::GreaterEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(RangeOp::LessEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(RangeOp::GreaterThan(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(RangeOp::LessThan(val.trim().parse()?))
        } else if s.contains('-') && !s.starts_with('-') {
            // Range format: "12-18"
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() == 2 {
                let low: f64 = parts[0].trim().parse()?;
                let high: f64 = parts[1].trim().parse()?;
                if low > high {
                    bail!("Range start exceeds end: {}", s)
                }
                Ok(RangeOp::Between(low, high))
            } else {
                bail!("Invalid range format: {}", s)
            }
        } else {
            Ok(RangeOp::Equal(s.parse()?))
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match self {
            RangeOp::LessThan(n) => value < *n,
            RangeOp::LessEqual(n) => value <= *n,
            RangeOp::GreaterThan(n) => value > *n,
            RangeOp::GreaterEqual(n) => value >= *n,
            RangeOp::Equal(n) => value == *n,
            RangeOp::Between(low, high) => value >= *low && value <= *high,
        }
    }

    /// Boundary values of the range, used to probe bucket tables.
    pub fn edges(&self) -> Vec<f64> {
        match self {
            RangeOp::LessThan(n)
            | RangeOp::LessEqual(n)
            | RangeOp::GreaterThan(n)
            | RangeOp::GreaterEqual(n)
            | RangeOp::Equal(n) => vec![*n],
            RangeOp::Between(low, high) => vec![*low, *high],
        }
    }
}

/// Staircase step: the first bucket whose range matches adds its bonus.
///
/// Range format: "<N", "<=N", ">N", ">=N", "N-M" (inclusive range), "N"
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Bucket {
    pub range: String,
    pub bonus: f64,
}

impl Bucket {
    pub fn new(range: &str, bonus: f64) -> Self {
        Self {
            range: range.to_string(),
            bonus,
        }
    }
}

/// Result of evaluating a staircase against a value.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketMatch {
    pub bonus: f64,
    pub matched_range: Option<String>,
}

/// First-match-wins lookup over `buckets`. Buckets with unparseable ranges
/// are skipped, and no match means a bonus of zero.
pub fn match_bucket(value: f64, buckets: &[Bucket]) -> BucketMatch {
    for bucket in buckets {
        if let Ok(range) = RangeOp::parse(&bucket.range) {
            if range.matches(value) {
                return BucketMatch {
                    bonus: bucket.bonus,
                    matched_range: Some(bucket.range.clone()),
                };
            }
        }
    }
    BucketMatch {
        bonus: 0.0,
        matched_range: None,
    }
}

/// Linear contribution around a neutral point, optionally capped.
///
/// `(value - neutral) * per_unit`, then bounded by `min`/`max` when set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LinearFactor {
    pub per_unit: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl LinearFactor {
    pub fn apply(&self, value: f64) -> f64 {
        let mut bonus = (value - self.neutral) * self.per_unit;
        if let Some(max) = self.max {
            bonus = bonus.min(max);
        }
        if let Some(min) = self.min {
            bonus = bonus.max(min);
        }
        bonus
    }
}

/// Bonus per Low/Medium/High label.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LevelTable {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl LevelTable {
    pub fn get(&self, level: Level) -> f64 {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }
}
