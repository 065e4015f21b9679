//! # UI Components
//!
//! Reusable Dioxus components for the Brewguide views.
//!
//! - **AssetImage**: image with placeholder fallback
//! - **MarkerTrail**: beans trailing the pointer on the sign-in page
//! - **RecipeCard**: one brewing guide with staggered steps
//! - **Inputs**: form text input
//!
//! ## Component Hierarchy
//!
//! ```text
//! AuthPage
//! ├── MarkerTrail
//! │   └── AssetImage (multiple)
//! └── TextInput (multiple)
//!
//! RecipesPage
//! └── RecipeCard (multiple)
//!     └── AssetImage
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod asset_image;
pub mod inputs;
pub mod marker_trail;
pub mod recipe_card;

// ============================================================================
// Re-exports
// ============================================================================

pub use asset_image::{AssetImage, background_style};
pub use inputs::TextInput;
pub use marker_trail::{MARKER_SIZE, MarkerTrail, marker_style};
pub use recipe_card::RecipeCard;
