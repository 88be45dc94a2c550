#![allow(non_snake_case)]

mod app;
pub mod context;
mod navigation;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::AppConfig;

/// Global app configuration, set from command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Recipe Finder - find something to cook from what's in the fridge
#[derive(Parser, Debug)]
#[command(name = "recipefinder-desktop")]
#[command(about = "Recipe Finder - search recipes by the ingredients you have")]
struct Args {
    /// Recipe catalog JSON file (defaults to the bundled sample catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for the explore grid shuffle (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = AppConfig {
        catalog_path: args.catalog,
        seed: args.seed,
    };

    tracing::info!(
        catalog = ?config.catalog_path,
        seed = ?config.seed,
        "Starting Recipe Finder"
    );

    let _ = APP_CONFIG.set(config);

    let window_width = 1100.0;
    let window_height = 900.0;

    // Configure desktop window
    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title("มีอะไรกิน? - Recipe Finder")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);
}
