//! sbui CLI - Render buttons from the command line.
//!
//! Prints HTML by default, or a JSON envelope with `--json`.

use clap::{Parser, Subcommand};
use maud::Render;
use sbui_core::button::compose;
use sbui_core::theme::{load_theme, BUTTON_COMPONENT};
use sbui_core::{
    ApiResponse, Button, ButtonProps, ButtonSize, ButtonType, Component, HtmlType, Icon,
    StyleTokenSource, TabIndex, ThemeRegistry,
};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "sbui")]
#[command(about = "sbui button renderer - class composition and markup preview")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a button
    Render(RenderArgs),
    /// List available themes
    Themes {
        /// Extra theme file to register first
        #[arg(long)]
        theme_file: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Button type (primary, default, secondary, outline, dashed, link, text)
    #[arg(short = 't', long = "type", default_value = "primary")]
    variant_type: String,
    /// Size (tiny, small, medium, large, xlarge)
    #[arg(short, long, default_value = "tiny")]
    size: String,
    /// Stretch to the container width
    #[arg(long)]
    block: bool,
    /// Use the danger palette
    #[arg(long)]
    danger: bool,
    /// Disable the drop shadow
    #[arg(long)]
    no_shadow: bool,
    #[arg(long)]
    disabled: bool,
    #[arg(long)]
    loading: bool,
    /// Leading icon name
    #[arg(long)]
    icon: Option<String>,
    /// Trailing icon name
    #[arg(long)]
    icon_right: Option<String>,
    /// Label text
    #[arg(short, long)]
    label: Option<String>,
    /// Extra class token
    #[arg(long)]
    class_name: Option<String>,
    /// Render this tag instead of a native button
    #[arg(long = "as")]
    as_tag: Option<String>,
    /// Native type attribute (button, submit, reset)
    #[arg(long)]
    html_type: Option<String>,
    #[arg(long)]
    aria_selected: Option<bool>,
    #[arg(long)]
    aria_controls: Option<String>,
    /// 0 or -1
    #[arg(long, allow_hyphen_values = true)]
    tab_index: Option<String>,
    #[arg(long)]
    role: Option<String>,
    /// Passthrough attribute as name=value (repeatable)
    #[arg(long = "attr")]
    attrs: Vec<String>,
    /// Theme id to render with
    #[arg(long)]
    theme: Option<String>,
    /// Theme file (.toml or .json) to register and use
    #[arg(long)]
    theme_file: Option<PathBuf>,
    /// Print class lists and markup as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Render(args) => handle_render(args),
        Commands::Themes { theme_file } => handle_themes(theme_file),
    };

    println!("{}", output);
}

fn error_json(message: impl Into<String>) -> String {
    serde_json::to_string_pretty(&ApiResponse::<()>::err(message))
        .unwrap_or_else(|_| "{\"ok\":false}".to_string())
}

fn registry_with(
    theme_file: Option<PathBuf>,
) -> sbui_core::Result<(ThemeRegistry, Option<String>)> {
    let mut registry = ThemeRegistry::new();
    let loaded = match theme_file {
        Some(path) => {
            let theme = load_theme(&path)?;
            let id = theme.id.clone();
            registry.register(theme);
            Some(id)
        }
        None => None,
    };
    Ok((registry, loaded))
}

fn build_props(args: &RenderArgs) -> sbui_core::Result<ButtonProps> {
    let mut props = ButtonProps::new()
        .variant_type(ButtonType::parse(&args.variant_type)?)
        .size(ButtonSize::parse(&args.size)?)
        .block(args.block)
        .danger(args.danger)
        .shadow(!args.no_shadow)
        .disabled(args.disabled)
        .loading(args.loading);

    if let Some(icon) = &args.icon {
        props = props.icon(Icon::new(icon));
    }
    if let Some(icon) = &args.icon_right {
        props = props.icon_right(Icon::new(icon));
    }
    if let Some(label) = &args.label {
        props = props.children(label.as_str());
    }
    if let Some(class_name) = &args.class_name {
        props = props.class_name(class_name);
    }
    if let Some(tag) = &args.as_tag {
        props = props.as_tag(tag);
    }
    if let Some(html_type) = &args.html_type {
        props = props.html_type(HtmlType::parse(html_type)?);
    }
    if let Some(selected) = args.aria_selected {
        props = props.aria_selected(selected);
    }
    if let Some(controls) = &args.aria_controls {
        props = props.aria_controls(controls);
    }
    if let Some(tab_index) = &args.tab_index {
        props = props.tab_index(TabIndex::parse(tab_index)?);
    }
    if let Some(role) = &args.role {
        props = props.role(role);
    }
    for attr in &args.attrs {
        let (name, value) = attr.split_once('=').unwrap_or((attr.as_str(), ""));
        props = props.attr(name.trim(), value);
    }

    Ok(props)
}

fn handle_render(args: RenderArgs) -> String {
    let props = match build_props(&args) {
        Ok(props) => props,
        Err(e) => return error_json(e.to_string()),
    };

    let (mut registry, loaded) = match registry_with(args.theme_file.clone()) {
        Ok(result) => result,
        Err(e) => return error_json(e.to_string()),
    };
    if let Some(id) = args.theme.as_deref().or(loaded.as_deref()) {
        if let Err(e) = registry.set_active(id) {
            let available: Vec<_> = registry.list().iter().map(|t| &t.id).collect();
            return error_json(format!("{}. Available: {:?}", e, available));
        }
    }

    let button = Button::new(props);
    let html = button.render(&registry).render().into_string();

    if !args.json {
        return html;
    }

    let tokens = registry.resolve(BUTTON_COMPONENT);
    let classes = compose(button.props(), &tokens);
    serde_json::to_string_pretty(&ApiResponse::ok(json!({
        "theme": registry.active().id,
        "native": button.props().as_tag.is_none(),
        "button_classes": classes.button.tokens(),
        "container_classes": classes.container.tokens(),
        "html": html,
    })))
    .unwrap_or_else(|e| error_json(e.to_string()))
}

fn handle_themes(theme_file: Option<PathBuf>) -> String {
    match registry_with(theme_file) {
        Ok((registry, _)) => serde_json::to_string_pretty(&ApiResponse::ok(json!({
            "themes": registry.list(),
            "active": registry.active().id,
        })))
        .unwrap_or_else(|e| error_json(e.to_string())),
        Err(e) => error_json(e.to_string()),
    }
}
