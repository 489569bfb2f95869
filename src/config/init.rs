use anyhow::{Context, Result};
use std::path::Path;

use super::Config;

const HEADER: &str = "\
# venture-ai configuration
# Every field is optional; remove a line to fall back to its built-in default.
";

/// Write the built-in defaults to `path` as YAML.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, format!("{}{}", HEADER, yaml))
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote default config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_written_defaults_load_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.yaml");
        write_default_config(&path, false).unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "session_ttl: 1h\n").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "session_ttl: 1h\n");

        write_default_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("# venture-ai configuration"));
    }
}
