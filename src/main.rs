#![allow(non_snake_case)]

mod app;
mod components;
mod content;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Anuncia - AI-generated ad campaigns, landing experience
#[derive(Parser, Debug)]
#[command(name = "anuncia-desktop")]
#[command(about = "Anuncia - anúncios profissionais gerados por IA")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Override the window title
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let title = args.title.unwrap_or_else(|| "Anuncia".to_string());

    tracing::info!(
        "Starting '{}' with window {}x{}",
        title,
        args.width,
        args.height
    );

    // Configure desktop window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true)
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
