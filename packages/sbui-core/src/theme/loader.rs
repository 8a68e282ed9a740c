//! Loading themes from TOML or JSON files.

use super::Theme;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a single theme file. The format is chosen by extension.
pub fn load_theme(path: &Path) -> Result<Theme> {
    let content = fs::read_to_string(path)?;
    match extension(path) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(Error::UnsupportedThemeFormat(path.display().to_string())),
    }
}

/// Load every `.toml` / `.json` theme in `dir`, sorted by file name.
///
/// Other files are ignored. A directory that does not exist yields no themes.
pub fn load_dir(dir: &Path) -> Result<Vec<Theme>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && matches!(extension(path), Some("toml" | "json")))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_theme(path)).collect()
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
