pub mod config;
pub mod engine;
pub mod factors;
pub mod subscores;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreResult};
pub use factors::{match_bucket, Bucket, LevelTable, LinearFactor, RangeOp};
pub use subscores::{Assessment, ExperienceLevel, SubScores};
pub use validation::validate_scoring;
