pub mod labels;
pub mod metrics;
pub mod prompt;
pub mod types;
pub mod validation;

pub use labels::{FundingStage, Level, ProductStage};
pub use metrics::ProfileMetrics;
pub use prompt::prompt_for_profile;
pub use types::{parse_lenient, FieldValue, StartupProfile};
pub use validation::validate_profile;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a startup profile from a YAML or JSON file (JSON when the extension is `.json`).
pub fn load_profile(path: &Path) -> Result<StartupProfile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile at {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let profile = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile: invalid JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse profile: invalid YAML in {}", path.display()))?
    };

    Ok(profile)
}
