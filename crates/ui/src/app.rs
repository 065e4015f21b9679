//! Main Application Component for Brewguide
//!
//! The root component shows whichever view the global state points at.

use dioxus::prelude::*;

use crate::pages::{AuthPage, RecipesPage};
use crate::state::{View, use_current_view};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Brewguide UI initialized");
    });

    let page = match use_current_view() {
        View::Auth => rsx! { AuthPage {} },
        View::Recipes => rsx! { RecipesPage {} },
    };

    rsx! {
        div {
            class: "app-container",
            {page}
        }
    }
}
