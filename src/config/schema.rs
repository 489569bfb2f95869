use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::insights::projection::{validate_projection, ProjectionConfig};
use crate::scoring::{validate_scoring, ScoringConfig};

pub const DEFAULT_SESSION_TTL: &str = "24h";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How long a login stays valid, e.g. "24h", "7d"
    pub session_ttl: String,
    /// Where saved predictions live. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub scoring: ScoringConfig,
    pub projection: ProjectionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_ttl: DEFAULT_SESSION_TTL.to_string(),
            data_dir: None,
            scoring: ScoringConfig::default(),
            projection: ProjectionConfig::default(),
        }
    }
}

impl Config {
    pub fn session_ttl(&self) -> Result<Duration, humantime::DurationError> {
        humantime::parse_duration(&self.session_ttl)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(super::get_data_dir)
    }
}

/// Validate the whole config at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    match config.session_ttl() {
        Ok(ttl) if ttl.is_zero() => {
            errors.push("session_ttl: must be greater than zero".to_string());
        }
        Ok(_) => {}
        Err(e) => errors.push(format!(
            "session_ttl: invalid duration '{}' - {}",
            config.session_ttl, e
        )),
    }

    if let Err(scoring_errors) = validate_scoring(&config.scoring) {
        errors.extend(scoring_errors);
    }
    if let Err(projection_errors) = validate_projection(&config.projection) {
        errors.extend(projection_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session_ttl().unwrap(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
session_ttl: "7d"
data_dir: /tmp/venture
scoring:
  base_score: 40
projection:
  base_growth_rate: 0.2
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.session_ttl().unwrap(), Duration::from_secs(7 * 86_400));
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/venture"));
        assert_eq!(config.scoring.base_score, 40.0);
        assert_eq!(config.scoring.floor, ScoringConfig::default().floor);
        assert_eq!(config.projection.base_growth_rate, 0.2);
        assert_eq!(config.projection.default_base_arr, 50_000.0);
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        assert!(serde_saphyr::from_str::<Config>("queries: []\n").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let back: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate_collects_every_section() {
        let mut config = Config {
            session_ttl: "soon".to_string(),
            ..Default::default()
        };
        config.scoring.base_score = 200.0;
        config.projection.default_base_arr = -1.0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("session_ttl"));
        assert!(errors[1].starts_with("scoring.base_score"));
        assert!(errors[2].starts_with("projection.default_base_arr"));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = Config {
            session_ttl: "0s".to_string(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
        assert!(validate_config(&Config::default()).is_ok());
    }
}
