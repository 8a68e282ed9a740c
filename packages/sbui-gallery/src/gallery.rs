//! Gallery page rendering
//!
//! Mounts one button per showcase entry into a [`Document`] and lays the
//! results out in sections.

use crate::config::GalleryConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use maud::{html, PreEscaped, DOCTYPE};
use sbui_core::{
    Button, ButtonProps, ButtonSize, ButtonType, Document, HandleRef, HtmlType, Icon,
    ThemeRegistry,
};
use strum::IntoEnumIterator;

/// A titled group of showcase buttons.
pub struct Section {
    pub title: &'static str,
    pub buttons: Vec<ButtonProps>,
}

/// A section after rendering.
pub struct RenderedSection {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// Showcase entries, in page order.
pub fn sections() -> Vec<Section> {
    let types: Vec<ButtonType> = ButtonType::iter().collect();

    vec![
        Section {
            title: "Types",
            buttons: types
                .iter()
                .map(|t| ButtonProps::new().variant_type(*t).children(t.to_string()))
                .collect(),
        },
        Section {
            title: "Sizes",
            buttons: ButtonSize::iter()
                .map(|s| ButtonProps::new().size(s).children(s.to_string()))
                .collect(),
        },
        Section {
            title: "Danger",
            buttons: types
                .iter()
                .map(|t| {
                    ButtonProps::new()
                        .variant_type(*t)
                        .danger(true)
                        .children(format!("{t} danger"))
                })
                .collect(),
        },
        Section {
            title: "States",
            buttons: vec![
                ButtonProps::new().disabled(true).children("Disabled"),
                ButtonProps::new().loading(true).children("Loading"),
                ButtonProps::new()
                    .loading(true)
                    .icon(Icon::new("upload"))
                    .icon_right(Icon::new("chevron-right"))
                    .children("Loading hides icons"),
                ButtonProps::new().shadow(false).children("No shadow"),
                ButtonProps::new()
                    .block(true)
                    .html_type(HtmlType::Submit)
                    .children("Block submit"),
            ],
        },
        Section {
            title: "Icons",
            buttons: vec![
                ButtonProps::new()
                    .size(ButtonSize::Medium)
                    .icon(Icon::new("plus"))
                    .children("Leading"),
                ButtonProps::new()
                    .size(ButtonSize::Medium)
                    .icon_right(Icon::new("arrow-right"))
                    .children("Trailing"),
                ButtonProps::new()
                    .variant_type(ButtonType::Outline)
                    .size(ButtonSize::Large)
                    .icon(Icon::new("download"))
                    .icon_right(Icon::new("chevron-down")),
            ],
        },
        Section {
            title: "Custom tags",
            buttons: vec![
                ButtonProps::new()
                    .as_tag("a")
                    .variant_type(ButtonType::Link)
                    .attr("href", "#types")
                    .children("Anchor"),
                ButtonProps::new()
                    .as_tag("div")
                    .variant_type(ButtonType::Default)
                    .role("button")
                    .children("Div"),
            ],
        },
    ]
}

/// Mount every showcase button and collect its markup.
pub fn render_sections(registry: &ThemeRegistry) -> Result<Vec<RenderedSection>> {
    let mut document = Document::new();
    let mut rendered = Vec::new();

    for section in sections() {
        let mut items = Vec::with_capacity(section.buttons.len());
        for props in section.buttons {
            let handle_ref = HandleRef::new();
            let button = Button::new(props.handle_ref(handle_ref.clone()));
            let mount = document
                .mount(&button, registry)
                .with_context(|| format!("mounting {} entry", section.title))?;

            if let Some(handle) = handle_ref.current() {
                tracing::debug!(
                    "{}: container {:?}, button {:?}",
                    section.title,
                    handle.container(),
                    handle.button()
                );
            }

            items.push(
                document
                    .to_html(mount)
                    .with_context(|| format!("serializing {} entry", section.title))?,
            );
        }
        rendered.push(RenderedSection {
            title: section.title,
            items,
        });
    }

    Ok(rendered)
}

/// Full HTML page for the active theme.
pub fn render_page(
    config: &GalleryConfig,
    registry: &ThemeRegistry,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let sections = render_sections(registry)?;
    let theme = registry.active();
    let generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (config.title) }
            }
            body {
                header {
                    h1 { (config.title) }
                    p.meta { "Theme: " (theme.name) " (" (theme.id) "), generated " (generated) }
                }
                @for group in &sections {
                    section id=(group.title.to_lowercase().replace(' ', "-")) {
                        h2 { (group.title) }
                        div.row {
                            @for item in &group.items {
                                (PreEscaped(item.as_str()))
                            }
                        }
                    }
                }
            }
        }
    };

    Ok(page.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_every_type_and_size_is_showcased() {
        let sections = sections();
        assert_eq!(sections[0].buttons.len(), 7);
        assert_eq!(sections[1].buttons.len(), 5);
        assert_eq!(sections[2].buttons.len(), 7);
        assert!(sections[2].buttons.iter().all(|b| b.danger));
    }

    #[test]
    fn test_render_sections_produces_markup() {
        let registry = ThemeRegistry::new();
        let rendered = render_sections(&registry).unwrap();

        let types = &rendered[0];
        assert_eq!(types.title, "Types");
        assert!(types.items[0].contains("sbui-btn-primary"));

        let custom = rendered.iter().find(|s| s.title == "Custom tags").unwrap();
        assert!(custom.items[0].contains("<a class="));
        assert!(!custom.items[0].contains("href"));
    }

    #[test]
    fn test_page_uses_active_theme() {
        let mut registry = ThemeRegistry::new();
        registry.set_active("utility").unwrap();
        let config = GalleryConfig::default();

        let page = render_page(&config, &registry, fixed_time()).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(
            "Theme: Utility Classes (utility), generated 2024-05-01 12:00:00 UTC"
        ));
        assert!(page.contains("bg-brand-600"));
        assert!(!page.contains("sbui-btn-primary"));
        assert!(page.contains("<section id=\"custom-tags\">"));
    }
}
