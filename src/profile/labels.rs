use serde::{Deserialize, Serialize};
use std::fmt;

fn normalize(label: &str) -> String {
    label
        .trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Three-step level used by competition, regulatory risk and market growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "low" => Some(Level::Low),
            "medium" | "moderate" => Some(Level::Medium),
            "high" => Some(Level::High),
            _ => None,
        }
    }

    /// Market growth also accepts the maturity wording used by the form:
    /// Emerging, Developing, Mature.
    pub fn from_growth_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "emerging" => Some(Level::Low),
            "developing" => Some(Level::Medium),
            "mature" => Some(Level::High),
            _ => Self::from_label(label),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        };
        f.write_str(s)
    }
}

/// Product readiness, ordered by maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductStage {
    Idea,
    Prototype,
    Mvp,
    Beta,
    Launched,
    Scaling,
    Established,
}

impl ProductStage {
    pub const ALL: [ProductStage; 7] = [
        ProductStage::Idea,
        ProductStage::Prototype,
        ProductStage::Mvp,
        ProductStage::Beta,
        ProductStage::Launched,
        ProductStage::Scaling,
        ProductStage::Established,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "idea" => Some(ProductStage::Idea),
            "prototype" => Some(ProductStage::Prototype),
            "mvp" => Some(ProductStage::Mvp),
            "beta" | "early customers" | "beta/early customers" => Some(ProductStage::Beta),
            "launched" | "growth" | "growth/launched" => Some(ProductStage::Launched),
            "scaling" => Some(ProductStage::Scaling),
            "established" => Some(ProductStage::Established),
            _ => None,
        }
    }
}

impl fmt::Display for ProductStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductStage::Idea => "Idea",
            ProductStage::Prototype => "Prototype",
            ProductStage::Mvp => "MVP",
            ProductStage::Beta => "Beta",
            ProductStage::Launched => "Launched",
            ProductStage::Scaling => "Scaling",
            ProductStage::Established => "Established",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FundingStage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesCPlus,
}

impl FundingStage {
    pub const ALL: [FundingStage; 5] = [
        FundingStage::PreSeed,
        FundingStage::Seed,
        FundingStage::SeriesA,
        FundingStage::SeriesB,
        FundingStage::SeriesCPlus,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "pre seed" | "preseed" => Some(FundingStage::PreSeed),
            "seed" => Some(FundingStage::Seed),
            "series a" => Some(FundingStage::SeriesA),
            "series b" => Some(FundingStage::SeriesB),
            "series c+" | "series c" | "series c plus" => Some(FundingStage::SeriesCPlus),
            _ => None,
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FundingStage::PreSeed => "Pre-seed",
            FundingStage::Seed => "Seed",
            FundingStage::SeriesA => "Series A",
            FundingStage::SeriesB => "Series B",
            FundingStage::SeriesCPlus => "Series C+",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_case_insensitive() {
        assert_eq!(Level::from_label("HIGH"), Some(Level::High));
        assert_eq!(Level::from_label("  low "), Some(Level::Low));
        assert_eq!(Level::from_label("extreme"), None);
    }

    #[test]
    fn test_growth_accepts_maturity_words() {
        assert_eq!(Level::from_growth_label("Emerging"), Some(Level::Low));
        assert_eq!(Level::from_growth_label("Developing"), Some(Level::Medium));
        assert_eq!(Level::from_growth_label("Mature"), Some(Level::High));
        assert_eq!(Level::from_growth_label("High"), Some(Level::High));
    }

    #[test]
    fn test_stage_aliases() {
        assert_eq!(ProductStage::from_label("Early Customers"), Some(ProductStage::Beta));
        assert_eq!(ProductStage::from_label("Growth"), Some(ProductStage::Launched));
        assert_eq!(ProductStage::from_label("mvp"), Some(ProductStage::Mvp));
        assert_eq!(ProductStage::from_label("Series A"), None);
    }

    #[test]
    fn test_stage_ordering_follows_maturity() {
        let mut sorted = ProductStage::ALL;
        sorted.sort();
        assert_eq!(sorted, ProductStage::ALL);
        assert!(ProductStage::Idea < ProductStage::Established);
    }

    #[test]
    fn test_funding_stage_labels() {
        assert_eq!(FundingStage::from_label("Pre-seed"), Some(FundingStage::PreSeed));
        assert_eq!(FundingStage::from_label("series_b"), Some(FundingStage::SeriesB));
        assert_eq!(FundingStage::from_label("Series C+"), Some(FundingStage::SeriesCPlus));
        assert_eq!(FundingStage::from_label("IPO"), None);
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        for stage in ProductStage::ALL {
            assert_eq!(ProductStage::from_label(&stage.to_string()), Some(stage));
        }
        for stage in FundingStage::ALL {
            assert_eq!(FundingStage::from_label(&stage.to_string()), Some(stage));
        }
    }
}
