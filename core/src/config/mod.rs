use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const SKILLDOCK_DIR: &str = ".skilldock";

/// Resolved settings for one invocation.
///
/// Paths are plain values threaded into the components that need them;
/// nothing reads the environment after load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root searched for local skills.
    pub local_root: PathBuf,
    /// Directory installed skills live in.
    pub store_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            local_root: PathBuf::from("."),
            store_root: skilldock_dir().join("skills"),
        }
    }
}

impl Config {
    /// Load the per-user config file, or defaults when none exists.
    pub fn load_or_default() -> Result<Self> {
        load_from(&config_path())
    }
}

pub fn skilldock_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SKILLDOCK_DIR)
}

pub fn config_path() -> PathBuf {
    skilldock_dir().join("config.toml")
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.local_root, PathBuf::from("."));
        assert!(config.store_root.ends_with("skills"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "local_root = \"/srv/skill-repo\"\n").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.local_root, PathBuf::from("/srv/skill-repo"));
        assert!(config.store_root.ends_with("skills"));
    }

    #[test]
    fn both_paths_can_be_overridden() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "local_root = \"/srv/skill-repo\"\nstore_root = \"/srv/store\"\n",
        )
        .unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.store_root, PathBuf::from("/srv/store"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "local_root = [not toml").unwrap();

        assert!(load_from(&path).is_err());
    }
}
