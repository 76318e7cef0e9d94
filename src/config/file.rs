//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::error::{GlycanToolsError, Result};
use std::path::{Path, PathBuf};

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".glycan-tools.yaml",
    ".glycan-tools.yml",
    "glycan-tools.yaml",
    "glycan-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (`~/.config/glycan-tools/`)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("glycan-tools")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Check a directory for any of the standard config file names.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load and validate a configuration file.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|e| GlycanToolsError::io(path, e))?;
    let config: AppConfig = serde_yaml::from_str(&content).map_err(|e| {
        GlycanToolsError::config(format!("{}: {e}", path.display()))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load the discovered config file, or fall back to defaults.
///
/// Returns the config and, when one was loaded, the path it came from.
pub fn load_or_default(explicit_path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    match discover_config_file(explicit_path) {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".glycan-tools.yaml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            "search:\n  text_score_threshold: 60\ncatalog:\n  database_dir: /data/glycoshape"
        )
        .expect("write config");

        let config = load_config_file(&path).expect("config loads");
        assert_eq!(config.search.text_score_threshold, 60.0);
        assert_eq!(
            config.catalog.database_dir,
            PathBuf::from("/data/glycoshape")
        );
        // Unspecified sections keep their defaults
        assert_eq!(config.search.text_result_limit, 20);
    }

    #[test]
    fn test_load_config_file_rejects_bad_yaml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "search: [not a map").expect("write config");
        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "{}").expect("write config");
        let found = discover_config_file(Some(&path));
        assert_eq!(found, Some(path));
    }

    #[test]
    fn test_missing_explicit_path_falls_through() {
        let found = discover_config_file(Some(Path::new("/definitely/not/here.yaml")));
        // May still discover a user-level config; just must not return the bogus path
        assert_ne!(found, Some(PathBuf::from("/definitely/not/here.yaml")));
    }
}
