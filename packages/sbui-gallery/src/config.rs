//! Gallery configuration
//!
//! Loaded from `SBUI_GALLERY_CONFIG` if set, otherwise from
//! `gallery.toml` in the platform config directory. A missing file yields
//! the defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SBUI_GALLERY_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Theme id to render with
    pub theme: String,
    /// Directory of extra `.toml` / `.json` theme files
    pub theme_dir: Option<PathBuf>,
    /// Where the HTML page is written
    pub output: PathBuf,
    /// Page heading
    pub title: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            theme: sbui_core::theme::DEFAULT_THEME_ID.to_string(),
            theme_dir: None,
            output: PathBuf::from("sbui-gallery.html"),
            title: "sbui buttons".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Resolve the config path from the environment or platform dirs.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        directories::ProjectDirs::from("dev", "sbui", "sbui")
            .map(|dirs| dirs.config_dir().join("gallery.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, using defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No gallery config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GalleryConfig::load_from(&dir.path().join("gallery.toml")).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "theme = \"utility\"\ntheme_dir = \"themes\"\n").unwrap();

        let config = GalleryConfig::load_from(&path).unwrap();
        assert_eq!(config.theme, "utility");
        assert_eq!(config.theme_dir, Some(PathBuf::from("themes")));
        assert_eq!(config.output, PathBuf::from("sbui-gallery.html"));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = GalleryConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("gallery.toml"));
    }
}
