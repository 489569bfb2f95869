/// Static seed data for a known industry.
#[derive(Debug)]
pub struct IndustryProfile {
    /// Lowercase names and aliases this entry answers to
    pub names: &'static [&'static str],
    pub insight: &'static str,
    pub growth: &'static str,
    pub trends: &'static [&'static str],
    pub competitors: &'static [CompetitorSeed],
}

#[derive(Debug)]
pub struct CompetitorSeed {
    pub name: &'static str,
    pub strength: &'static str,
    pub weakness: &'static str,
    pub market_share: &'static str,
}

pub const GENERIC_GROWTH: &str = "Steady growth";

pub const GENERIC_TRENDS: &[&str] = &[
    "Increasing adoption of digital solutions",
    "Growing demand for sustainable products",
    "Shift towards remote work solutions",
];

static INDUSTRIES: &[IndustryProfile] = &[
    IndustryProfile {
        names: &["technology", "tech", "software"],
        insight: "Focus on rapid iteration and user feedback.",
        growth: "Rapidly growing",
        trends: &[
            "Consolidation of point tools into platforms",
            "Usage-based pricing replacing seat licenses",
            "AI features becoming table stakes",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Established platform vendors",
                strength: "Large installed base and distribution",
                weakness: "Slow release cycles",
                market_share: "40%",
            },
            CompetitorSeed {
                name: "Venture-backed challengers",
                strength: "Modern product and fast iteration",
                weakness: "High burn and thin moats",
                market_share: "15%",
            },
        ],
    },
    IndustryProfile {
        names: &["artificial intelligence", "ai", "machine learning"],
        insight: "Ensure you have access to quality training data and compute resources.",
        growth: "Explosive growth",
        trends: &[
            "Foundation models commoditizing core capabilities",
            "Demand for domain-specific fine-tuning",
            "Rising scrutiny of model governance",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Frontier model labs",
                strength: "State-of-the-art models and capital",
                weakness: "Generic offerings for niche verticals",
                market_share: "45%",
            },
            CompetitorSeed {
                name: "Vertical AI startups",
                strength: "Deep domain workflows",
                weakness: "Dependence on third-party models",
                market_share: "10%",
            },
        ],
    },
    IndustryProfile {
        names: &["healthcare", "health", "healthtech"],
        insight: "Consider regulatory requirements and long sales cycles.",
        growth: "Steady growth",
        trends: &[
            "Shift to value-based care",
            "Remote patient monitoring",
            "Interoperability mandates",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Incumbent health IT suites",
                strength: "Entrenched hospital relationships",
                weakness: "Dated user experience",
                market_share: "35%",
            },
            CompetitorSeed {
                name: "Digital health startups",
                strength: "Patient-centric design",
                weakness: "Reimbursement uncertainty",
                market_share: "12%",
            },
        ],
    },
    IndustryProfile {
        names: &["finance / fintech", "finance", "fintech"],
        insight: "Security and compliance should be top priorities.",
        growth: "Rapidly growing",
        trends: &[
            "Embedded finance in non-financial products",
            "Real-time payments adoption",
            "Open banking regulation",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Traditional banks",
                strength: "Trust and regulatory licenses",
                weakness: "Legacy infrastructure",
                market_share: "50%",
            },
            CompetitorSeed {
                name: "Neobanks and payment apps",
                strength: "Low-cost digital onboarding",
                weakness: "Path to profitability",
                market_share: "18%",
            },
        ],
    },
    IndustryProfile {
        names: &["e-commerce", "ecommerce", "e commerce"],
        insight: "Customer experience and logistics are key differentiators.",
        growth: "Steady growth",
        trends: &[
            "Social commerce",
            "Same-day fulfillment expectations",
            "Direct-to-consumer brands",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Global marketplaces",
                strength: "Unmatched selection and logistics",
                weakness: "Commoditized brand experience",
                market_share: "45%",
            },
            CompetitorSeed {
                name: "Niche DTC storefronts",
                strength: "Loyal communities",
                weakness: "Rising acquisition costs",
                market_share: "8%",
            },
        ],
    },
    IndustryProfile {
        names: &["education / edtech", "education", "edtech"],
        insight: "Prove learning outcomes; buyers and users are often different people.",
        growth: "Moderate growth",
        trends: &[
            "Hybrid and self-paced learning",
            "Skills-based credentials",
            "AI tutoring assistants",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Learning management incumbents",
                strength: "Institutional contracts",
                weakness: "Poor learner engagement",
                market_share: "30%",
            },
            CompetitorSeed {
                name: "Consumer learning apps",
                strength: "Engaging mobile experience",
                weakness: "Low retention after trials",
                market_share: "15%",
            },
        ],
    },
    IndustryProfile {
        names: &["green energy", "cleantech", "renewable energy"],
        insight: "Plan for capital intensity and policy-driven demand swings.",
        growth: "Rapidly growing",
        trends: &[
            "Grid-scale storage",
            "Electrification of transport and heating",
            "Carbon accounting requirements",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Utility-scale developers",
                strength: "Access to project finance",
                weakness: "Slow to adopt new technology",
                market_share: "38%",
            },
            CompetitorSeed {
                name: "Distributed energy startups",
                strength: "Modular, fast deployment",
                weakness: "Hardware supply risk",
                market_share: "9%",
            },
        ],
    },
    IndustryProfile {
        names: &["cybersecurity", "security", "infosec"],
        insight: "Trust is the product; invest early in certifications and references.",
        growth: "Rapidly growing",
        trends: &[
            "Zero-trust architectures",
            "Security tooling consolidation",
            "Regulatory breach disclosure rules",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Security platform vendors",
                strength: "Broad suites and channel reach",
                weakness: "Alert fatigue and complexity",
                market_share: "42%",
            },
            CompetitorSeed {
                name: "Specialist security startups",
                strength: "Best-in-class detection",
                weakness: "Single-product risk",
                market_share: "11%",
            },
        ],
    },
    IndustryProfile {
        names: &["gaming", "games"],
        insight: "Hits are rare; budget for several iterations and live operations.",
        growth: "Moderate growth",
        trends: &[
            "Live-service and free-to-play models",
            "Cross-platform play",
            "User-generated content economies",
        ],
        competitors: &[
            CompetitorSeed {
                name: "Major publishers",
                strength: "Franchise IP and marketing budgets",
                weakness: "Risk-averse portfolios",
                market_share: "55%",
            },
            CompetitorSeed {
                name: "Independent studios",
                strength: "Creative risk-taking",
                weakness: "Limited discovery",
                market_share: "12%",
            },
        ],
    },
];

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Find the seed entry for an industry name, ignoring case and spacing.
pub fn lookup(industry: &str) -> Option<&'static IndustryProfile> {
    let key = normalize(industry);
    INDUSTRIES
        .iter()
        .find(|entry| entry.names.iter().any(|name| *name == key))
}

/// Industry-specific advice, or a generic sentence naming the industry.
pub fn insight_for(industry: &str) -> String {
    match lookup(industry) {
        Some(entry) => entry.insight.to_string(),
        None => format!(
            "The {} industry has unique challenges and opportunities.",
            industry
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_alias() {
        assert!(lookup("AI").is_some());
        assert!(lookup("  Finance  /  FinTech ").is_some());
        assert!(lookup("e-commerce").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("Space Mining").is_none());
    }

    #[test]
    fn test_insight_fallback_names_industry() {
        assert_eq!(
            insight_for("Space Mining"),
            "The Space Mining industry has unique challenges and opportunities."
        );
        assert_eq!(
            insight_for("Technology"),
            "Focus on rapid iteration and user feedback."
        );
    }

    #[test]
    fn test_every_entry_is_complete() {
        for entry in INDUSTRIES {
            assert!(!entry.names.is_empty());
            assert!(!entry.trends.is_empty());
            assert!(!entry.competitors.is_empty());
            for name in entry.names {
                assert_eq!(*name, normalize(name), "alias must be pre-normalized");
            }
        }
    }
}
