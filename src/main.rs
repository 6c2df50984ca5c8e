// HookLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. HTTP page source construction
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use hooklog::app;

pub use hooklog::core;
pub use hooklog::platform;
pub use hooklog::ui;
pub use hooklog::util;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// HookLog - Paginated viewer for payment gateway webhook logs.
///
/// Reads webhook records page by page from the backend API and shows
/// them with gateway filtering and per-record payload inspection.
#[derive(Parser, Debug)]
#[command(name = "HookLog", version, about)]
struct Cli {
    /// API base URL (overrides config.toml).
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Initial gateway filter (e.g. razorpay).
    #[arg(short = 'g', long = "gateway")]
    gateway: Option<String>,

    /// Bearer token sent with every request.
    #[arg(long = "token", env = util::constants::TOKEN_ENV_VAR, hide_env_values = true)]
    token: Option<String>,

    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are replayed below.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "HookLog starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let base_url = cli.base_url.as_deref().unwrap_or(&config.base_url);
    let source = match app::client::HttpPageSource::new(
        base_url,
        &config.endpoint,
        Duration::from_secs(config.timeout_secs),
        cli.token.clone(),
    ) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let source_url = source.url().to_string();

    let filter = cli
        .gateway
        .as_deref()
        .map(hooklog::core::filter::FilterState::gateway_only)
        .unwrap_or_default();

    let mut state = app::state::BrowserState::new(
        config.per_page,
        config.gateways.clone(),
        filter,
        cli.debug,
    );
    state.dark_mode = config.dark_mode;

    let fetch = app::fetch::FetchManager::new(Arc::new(source));

    tracing::info!(url = %source_url, per_page = config.per_page, "Ready to launch GUI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(gui::HookLogApp::new(
                &cc.egui_ctx,
                state,
                fetch,
                source_url,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch HookLog GUI: {e}");
        std::process::exit(1);
    }
}
