#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{DataProvider, FolioConfig};

use crate::context::Resources;

/// Folio - portfolio desktop viewer
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - photography, projects and writing")]
struct Args {
    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL; overrides the config file and FOLIO_API_BASE_URL
    #[arg(long)]
    api_base_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match FolioConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config, using defaults: {}", e);
            FolioConfig::default()
        }
    };
    if let Some(url) = args.api_base_url {
        config.api_base_url = Some(url);
    }

    let provider = match DataProvider::from_config(&config) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("Failed to create data provider: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(base_url = ?provider.base_url(), "Starting Folio");
    let resources = Resources::new(config, provider);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(resources)
        .launch(app::App);
}
