//! Core configuration types shared by the button, theme and CLI layers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Visual variant of a button.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Primary,
    Default,
    Secondary,
    Outline,
    Dashed,
    Link,
    Text,
}

impl ButtonType {
    /// Parse a button type from its lowercase name.
    pub fn parse(value: &str) -> Result<Self> {
        value.parse().map_err(|_| Error::UnknownVariant {
            kind: "button type",
            value: value.to_string(),
        })
    }

    /// Whether the theme's drop shadow applies to this variant.
    ///
    /// Link and text buttons have no surface to cast a shadow from.
    pub fn supports_shadow(&self) -> bool {
        !matches!(self, ButtonType::Link | ButtonType::Text)
    }
}

/// Size scale shared by buttons and the icons they host.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ButtonSize {
    #[default]
    Tiny,
    Small,
    Medium,
    Large,
    Xlarge,
}

impl ButtonSize {
    /// Parse a size from its lowercase name.
    pub fn parse(value: &str) -> Result<Self> {
        value.parse().map_err(|_| Error::UnknownVariant {
            kind: "button size",
            value: value.to_string(),
        })
    }

    /// Icon edge length in pixels for this size.
    pub fn icon_pixels(&self) -> u32 {
        match self {
            ButtonSize::Tiny => 14,
            ButtonSize::Small => 18,
            ButtonSize::Medium => 20,
            ButtonSize::Large => 20,
            ButtonSize::Xlarge => 24,
        }
    }
}

/// Value of the native `type` attribute.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HtmlType {
    Button,
    Submit,
    Reset,
}

impl HtmlType {
    /// Parse an html type from its attribute value.
    pub fn parse(value: &str) -> Result<Self> {
        value.parse().map_err(|_| Error::UnknownVariant {
            kind: "html type",
            value: value.to_string(),
        })
    }
}

/// Tab order participation of the native control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// `tabindex="0"`: reachable in document order
    Focusable,
    /// `tabindex="-1"`: focusable only programmatically
    Skipped,
}

impl TabIndex {
    /// Parse from `"0"` or `"-1"`.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "0" => Ok(TabIndex::Focusable),
            "-1" => Ok(TabIndex::Skipped),
            other => Err(Error::UnknownVariant {
                kind: "tab index",
                value: other.to_string(),
            }),
        }
    }

    /// Attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabIndex::Focusable => "0",
            TabIndex::Skipped => "-1",
        }
    }
}

/// API response wrapper used by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonType::default(), ButtonType::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Tiny);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(ButtonType::parse("dashed").unwrap(), ButtonType::Dashed);
        assert_eq!(ButtonSize::parse("xlarge").unwrap(), ButtonSize::Xlarge);
        assert_eq!(HtmlType::parse("submit").unwrap(), HtmlType::Submit);
        assert_eq!(TabIndex::parse("-1").unwrap(), TabIndex::Skipped);
    }

    #[test]
    fn test_parse_unknown() {
        let result = ButtonType::parse("ghost");
        assert!(matches!(
            result,
            Err(Error::UnknownVariant { kind: "button type", .. })
        ));
        assert!(ButtonSize::parse("huge").is_err());
        assert!(TabIndex::parse("1").is_err());
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for variant in ButtonType::iter() {
            assert_eq!(ButtonType::parse(&variant.to_string()).unwrap(), variant);
        }
        for size in ButtonSize::iter() {
            assert_eq!(ButtonSize::parse(size.as_ref()).unwrap(), size);
        }
    }

    #[test]
    fn test_shadow_support() {
        let shadowless: Vec<_> = ButtonType::iter().filter(|t| !t.supports_shadow()).collect();
        assert_eq!(shadowless, vec![ButtonType::Link, ButtonType::Text]);
    }

    #[test]
    fn test_api_response() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.ok);
        assert_eq!(response.data, Some("test".to_string()));

        let err_response: ApiResponse<String> = ApiResponse::err("error");
        assert!(!err_response.ok);
        assert_eq!(err_response.error, Some("error".to_string()));
    }
}
