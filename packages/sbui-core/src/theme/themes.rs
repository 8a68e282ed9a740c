//! Built-in theme definitions

use super::{Theme, TokenSet};
use crate::types::{ButtonSize, ButtonType};
use std::collections::HashMap;

/// Component key the button resolves its tokens under.
pub const BUTTON_COMPONENT: &str = "button";

pub const DEFAULT_THEME_ID: &str = "sbui";
pub const UTILITY_THEME_ID: &str = "utility";

fn variant_map(entries: &[(ButtonType, &str)]) -> HashMap<ButtonType, String> {
    entries.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

fn size_map(entries: &[(ButtonSize, &str)]) -> HashMap<ButtonSize, String> {
    entries.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

// ============================================================================
// sbui Theme (Default)
// ============================================================================

pub fn sbui() -> Theme {
    let button = TokenSet {
        base: Some("sbui-btn".into()),
        container: Some("sbui-btn-container".into()),
        block: Some("sbui-btn--w-full".into()),
        shadow: Some("sbui-btn--shadow".into()),
        disabled: Some("sbui-btn--disabled".into()),
        loading: Some("sbui-btn--anim--spin".into()),
        variant: variant_map(&[
            (ButtonType::Primary, "sbui-btn-primary"),
            (ButtonType::Default, "sbui-btn-default"),
            (ButtonType::Secondary, "sbui-btn-secondary"),
            (ButtonType::Outline, "sbui-btn-outline"),
            (ButtonType::Dashed, "sbui-btn-dashed"),
            (ButtonType::Link, "sbui-btn-link"),
            (ButtonType::Text, "sbui-btn-text"),
        ]),
        danger: variant_map(&[
            (ButtonType::Primary, "sbui-btn--danger"),
            (ButtonType::Default, "sbui-btn--danger"),
            (ButtonType::Secondary, "sbui-btn--danger"),
            (ButtonType::Outline, "sbui-btn--danger-outline"),
            (ButtonType::Dashed, "sbui-btn--danger-outline"),
            (ButtonType::Link, "sbui-btn--danger-text"),
            (ButtonType::Text, "sbui-btn--danger-text"),
        ]),
        size: size_map(&[
            (ButtonSize::Tiny, "sbui-btn--tiny"),
            (ButtonSize::Small, "sbui-btn--small"),
            (ButtonSize::Medium, "sbui-btn--medium"),
            (ButtonSize::Large, "sbui-btn--large"),
            (ButtonSize::Xlarge, "sbui-btn--xlarge"),
        ]),
    };

    Theme::new(DEFAULT_THEME_ID, "sbui").with_component(BUTTON_COMPONENT, button)
}

// ============================================================================
// Utility-class Theme
// ============================================================================

pub fn utility() -> Theme {
    let button = TokenSet {
        base: Some("inline-flex items-center justify-center gap-2 rounded font-medium transition".into()),
        container: Some("inline-flex".into()),
        block: Some("w-full".into()),
        shadow: Some("shadow-sm".into()),
        disabled: Some("opacity-50 cursor-not-allowed".into()),
        loading: Some("animate-spin".into()),
        variant: variant_map(&[
            (ButtonType::Primary, "bg-brand-600 text-white hover:bg-brand-500"),
            (ButtonType::Default, "bg-white text-scale-1200 border border-scale-600"),
            (ButtonType::Secondary, "bg-scale-1200 text-scale-100"),
            (ButtonType::Outline, "bg-transparent border border-scale-600"),
            (ButtonType::Dashed, "bg-transparent border border-dashed border-scale-600"),
            (ButtonType::Link, "text-brand-600 underline-offset-4 hover:underline"),
            (ButtonType::Text, "text-scale-1200 hover:bg-scale-300"),
        ]),
        danger: variant_map(&[
            (ButtonType::Primary, "bg-red-600 hover:bg-red-500"),
            (ButtonType::Default, "text-red-600 border-red-600"),
            (ButtonType::Secondary, "bg-red-900"),
            (ButtonType::Outline, "text-red-600 border-red-600"),
            (ButtonType::Dashed, "text-red-600 border-red-600"),
            (ButtonType::Link, "text-red-600"),
            (ButtonType::Text, "text-red-600"),
        ]),
        size: size_map(&[
            (ButtonSize::Tiny, "px-2.5 py-1 text-xs"),
            (ButtonSize::Small, "px-3 py-2 text-sm"),
            (ButtonSize::Medium, "px-4 py-2 text-sm"),
            (ButtonSize::Large, "px-4 py-2 text-base"),
            (ButtonSize::Xlarge, "px-6 py-3 text-base"),
        ]),
    };

    Theme::new(UTILITY_THEME_ID, "Utility Classes").with_component(BUTTON_COMPONENT, button)
}
