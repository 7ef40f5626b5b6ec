mod app;
mod app_types;
mod client;
mod download;
mod enhance_thread;
mod error;
mod session;
mod settings;
mod slider;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::{AppSettings, DEFAULT_SETTINGS_PATH};

#[derive(Parser, Debug)]
#[command(name = "imagelift")]
#[command(version)]
#[command(about = "Enhance images through a remote service and compare before/after")]
struct Args {
    /// Enhancement service base URL for this run (overrides the settings file)
    #[arg(short, long)]
    server: Option<String>,

    /// Settings file to load and save
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,
}

fn main() -> eframe::Result<()> {
    // RUST_LOG overrides, info otherwise
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut settings = AppSettings::load(&args.settings);
    if let Some(server) = args.server {
        settings.server_url = server;
    }

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "ImageLift",
        native_options,
        Box::new(move |cc| {
            Ok::<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>>(
                Box::new(crate::app::ImageLiftApp::new(cc, settings, args.settings))
            )
        }),
    )
}
