pub mod auth;
pub mod config;
pub mod insights;
pub mod logging;
pub mod output;
pub mod prediction;
pub mod profile;
pub mod prompt;
pub mod scoring;
pub mod store;

pub use prediction::{PredictionResult, Predictor};
pub use profile::StartupProfile;
