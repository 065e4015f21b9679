//! # Brewguide Core
//!
//! Everything in Brewguide that does not need a window:
//!
//! - **Follow**: the marker chain that trails the pointer on the sign-in page
//! - **Recipes**: the compiled-in brewing guides
//! - **Motion**: staggered entrance timing
//! - **Assets**: image lookup with placeholder fallback
//! - **Config**: settings loaded from `brewguide.toml`
//! - **Errors**: `BrewError` and `BrewResult`
//!

pub mod assets;
pub mod config;
pub mod error;
pub mod follow;
pub mod motion;
pub mod recipe;
pub mod types;

// Re-export commonly used items at crate root
pub use assets::AssetRoot;
pub use config::{FollowConfig, Settings};
pub use error::{BrewError, BrewResult};
pub use follow::{FollowSession, MarkerChain, follow_speed, step_toward};
pub use motion::{FillMode, Stagger};
pub use recipe::{BrewIcon, Recipe, catalog};
pub use types::Position;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
