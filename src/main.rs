#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;
mod viewport;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use harborline_core::SiteConfig;

/// Global site configuration, set from command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (loaded at startup or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Harborline Charters - boat charter landing page
#[derive(Parser, Debug)]
#[command(name = "harborline-site")]
#[command(about = "Harborline Charters - boat charter landing page")]
struct Args {
    /// JSON config file (defaults apply to missing keys)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the action URL of the contact and newsletter forms
    #[arg(long)]
    form_action: Option<String>,

    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    harborline_core::logging::init(args.log_filter.as_deref())?;

    let mut site_config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(action) = args.form_action {
        site_config.contact_form_action = action;
    }
    site_config.validate().context("invalid site config")?;

    tracing::info!(
        action = %site_config.contact_form_action,
        wired = site_config.forms_wired(),
        "Starting Harborline site"
    );

    let _ = SITE_CONFIG.set(site_config);

    let window_width = 1280.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Harborline Charters")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
