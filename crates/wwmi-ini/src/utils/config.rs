//! Application configuration management utilities.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;

/// Application-wide configuration stored in config.toml.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Keep explanatory comments in generated mod.ini files unless overridden per build.
    pub comment_ini: bool,
    /// Output directory used when `build` is run without `--output-dir`.
    pub output_dir: Option<String>,
}

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Returns a config file path located next to the executable.
pub fn config_path(file_name: &str) -> Option<Utf8PathBuf> {
    install_dir().map(|dir| dir.join(file_name))
}

/// Returns the default configuration file path (config.toml).
pub fn default_config_path() -> Option<Utf8PathBuf> {
    config_path("config.toml")
}

/// Loads the application configuration from config.toml.
/// Returns default configuration if file doesn't exist or cannot be parsed.
pub fn load_config() -> AppConfig {
    default_config_path()
        .map(|path| load_config_from(&path))
        .unwrap_or_default()
}

/// Loads configuration from `path`, falling back to defaults on any failure.
pub fn load_config_from(path: &Utf8Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config {}: {}", path, e);
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!("Failed to read config {}: {}", path, e);
            AppConfig::default()
        }
    }
}

/// Saves the application configuration to config.toml.
pub fn save_config(cfg: &AppConfig) -> io::Result<()> {
    match default_config_path() {
        Some(path) => save_config_to(&path, cfg),
        None => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config path",
        )),
    }
}

pub fn save_config_to(path: &Utf8Path, cfg: &AppConfig) -> io::Result<()> {
    let content = toml::to_string_pretty(cfg).map_err(io::Error::other)?;
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.toml")).unwrap();

        assert_eq!(load_config_from(&path), AppConfig::default());
        assert!(!AppConfig::default().comment_ini);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.toml")).unwrap();
        let cfg = AppConfig {
            comment_ini: true,
            output_dir: Some("Mods/MyMod".to_string()),
        };

        save_config_to(&path, &cfg).unwrap();
        assert_eq!(load_config_from(&path), cfg);
    }

    #[test]
    fn test_garbage_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("config.toml")).unwrap();
        fs::write(&path, "comment_ini = [").unwrap();

        assert_eq!(load_config_from(&path), AppConfig::default());
    }
}
