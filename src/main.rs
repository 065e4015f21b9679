//! Brewguide
//!
//! Coffee recipe showcase with a pointer-following sign-in page.
//!
//! This is the main entry point for the Dioxus desktop application.

use brewguide_core::Settings;
use brewguide_core::config::settings_path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let path = settings_path();
    let settings = Settings::load_or_default(&path);
    tracing::info!(
        "Settings: {} markers, {}ms tick, assets from {}",
        settings.follow.chain_length,
        settings.follow.tick_interval_ms,
        settings.assets.root.display()
    );

    // Launch the Dioxus desktop application
    brewguide_ui::launch(settings);
}
