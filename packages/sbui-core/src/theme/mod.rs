//! Theme system for sbui components
//!
//! A theme maps component keys (such as `"button"`) to a [`TokenSet`] of
//! class tokens. Components look tokens up through [`StyleTokenSource`], so
//! alternate themes can be swapped in without touching composition logic.

mod loader;
mod themes;

pub use loader::{load_dir, load_theme};
pub use themes::*;

use crate::types::{ButtonSize, ButtonType};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

/// An opaque class identifier supplied by a theme.
pub type Token = String;

// ============================================================================
// Token Set
// ============================================================================

/// Class tokens for one component.
///
/// Every field is optional; lookups for missing entries produce absent tokens
/// rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<Token>,
    /// Per-variant tokens
    #[serde(rename = "type")]
    pub variant: HashMap<ButtonType, Token>,
    /// Per-variant tokens applied when `danger` is set
    pub danger: HashMap<ButtonType, Token>,
    /// Per-size tokens
    pub size: HashMap<ButtonSize, Token>,
}

impl TokenSet {
    pub fn variant_token(&self, variant: ButtonType) -> Option<&str> {
        self.variant.get(&variant).map(String::as_str)
    }

    pub fn danger_token(&self, variant: ButtonType) -> Option<&str> {
        self.danger.get(&variant).map(String::as_str)
    }

    pub fn size_token(&self, size: ButtonSize) -> Option<&str> {
        self.size.get(&size).map(String::as_str)
    }
}

/// Supplies token sets by component key.
pub trait StyleTokenSource {
    /// Tokens for `component`. Unknown keys yield an empty set.
    fn resolve(&self, component: &str) -> Cow<'_, TokenSet>;
}

// ============================================================================
// Theme Structure
// ============================================================================

/// A named collection of component token sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub components: HashMap<String, TokenSet>,
}

impl Theme {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            components: HashMap::new(),
        }
    }

    /// Add or replace the token set for a component.
    pub fn with_component(mut self, key: impl Into<String>, tokens: TokenSet) -> Self {
        self.components.insert(key.into(), tokens);
        self
    }

    pub fn info(&self) -> ThemeInfo {
        ThemeInfo {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl StyleTokenSource for Theme {
    fn resolve(&self, component: &str) -> Cow<'_, TokenSet> {
        match self.components.get(component) {
            Some(tokens) => Cow::Borrowed(tokens),
            None => {
                tracing::debug!("Theme {} has no tokens for {}", self.id, component);
                Cow::Owned(TokenSet::default())
            }
        }
    }
}

// ============================================================================
// Theme Registry
// ============================================================================

/// Basic theme information for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeInfo {
    pub id: String,
    pub name: String,
}

/// Registry of all available themes plus the active one.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    theme_list: Vec<ThemeInfo>,
    active: Theme,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            theme_list: Vec::new(),
            active: themes::sbui(),
        };

        // Register all built-in themes
        registry.register(themes::sbui());
        registry.register(themes::utility());

        registry
    }

    /// Register a theme, replacing any theme with the same id.
    pub fn register(&mut self, theme: Theme) {
        let info = theme.info();
        match self.theme_list.iter_mut().find(|t| t.id == info.id) {
            Some(existing) => *existing = info,
            None => self.theme_list.push(info),
        }
        if self.active.id == theme.id {
            self.active = theme.clone();
        }
        self.themes.insert(theme.id.clone(), theme);
    }

    /// Register every theme file found in `dir`. Returns how many were added.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let themes = load_dir(dir)?;
        let count = themes.len();
        for theme in themes {
            tracing::debug!("Registered theme {} from {}", theme.id, dir.display());
            self.register(theme);
        }
        Ok(count)
    }

    /// Get a theme by ID
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// Get list of all available themes
    pub fn list(&self) -> &[ThemeInfo] {
        &self.theme_list
    }

    /// The theme components currently resolve against.
    pub fn active(&self) -> &Theme {
        &self.active
    }

    /// Switch the active theme by ID
    pub fn set_active(&mut self, id: &str) -> Result<()> {
        match self.themes.get(id) {
            Some(theme) => {
                self.active = theme.clone();
                tracing::info!("Theme changed to: {}", id);
                Ok(())
            }
            None => {
                tracing::warn!("Theme not found: {}", id);
                Err(Error::ThemeNotFound(id.to_string()))
            }
        }
    }
}

impl StyleTokenSource for ThemeRegistry {
    fn resolve(&self, component: &str) -> Cow<'_, TokenSet> {
        self.active.resolve(component)
    }
}
