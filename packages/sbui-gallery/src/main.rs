//! sbui gallery - writes an HTML page showing every button variant for a theme.

mod config;
mod gallery;

use anyhow::{Context, Result};
use clap::Parser;
use config::GalleryConfig;
use sbui_core::ThemeRegistry;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "sbui-gallery")]
#[command(version, about = "Write an HTML gallery of every sbui button variant")]
struct Args {
    /// Output file; overrides `output` from the gallery config
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = GalleryConfig::load()?;
    if let Some(output) = args.output {
        config.output = output;
    }

    let mut registry = ThemeRegistry::new();
    if let Some(dir) = &config.theme_dir {
        let loaded = registry
            .load_dir(dir)
            .with_context(|| format!("loading themes from {}", dir.display()))?;
        tracing::info!("Loaded {} theme(s) from {}", loaded, dir.display());
    }
    registry
        .set_active(&config.theme)
        .with_context(|| format!("selecting theme {:?}", config.theme))?;

    let page = gallery::render_page(&config, &registry, chrono::Utc::now())?;
    fs::write(&config.output, page)
        .with_context(|| format!("writing {}", config.output.display()))?;

    tracing::info!(
        "Wrote {} gallery to {}",
        registry.active().name,
        config.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_help_is_not_an_output_path() {
        let err = Args::try_parse_from(["sbui-gallery", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["sbui-gallery", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_output_argument() {
        let args = Args::try_parse_from(["sbui-gallery", "out/page.html"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out/page.html")));

        let args = Args::try_parse_from(["sbui-gallery"]).unwrap();
        assert!(args.output.is_none());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["sbui-gallery", "--bogus"]).is_err());
    }
}
