//! # Brewguide UI
//!
//! Dioxus Desktop UI for Brewguide.
//!
//! Two views:
//!
//! - Sign-in form with coffee beans trailing the pointer
//! - Recipe listing with staggered entrance animations
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use brewguide_core;

pub use app::App;
pub use components::{AssetImage, MarkerTrail, RecipeCard, TextInput};
pub use hooks::{PointerFollow, run_ticks, use_pointer_follow};
pub use pages::{AuthPage, RecipesPage};
pub use state::{
    APP_STATE, AppState, AuthMode, CredentialForm, NavigationEvent, View, init_app_state,
};

use brewguide_core::Settings;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Brewguide";

/// Stylesheet embedded into the window head
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Brewguide desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     brewguide_ui::launch(brewguide_core::Settings::default());
/// }
/// ```
pub fn launch(settings: Settings) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let window = settings.window.clone();
    init_app_state(settings);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================
