pub mod industry;
pub mod market;
pub mod projection;
pub mod risks;
pub mod verdict;

pub use market::{CompetitiveLandscape, Competitor, MarketAnalysis};
pub use projection::{FinancialProjection, ProjectionConfig};
pub use risks::{Recommendation, RiskFactor, Severity};
pub use verdict::Verdict;
