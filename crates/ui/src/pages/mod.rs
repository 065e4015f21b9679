//! Page Components for Brewguide
//!
//! - **AuthPage**: sign-in / sign-up form with the bean trail
//! - **RecipesPage**: the brewing guides
//!

pub mod auth;
pub mod recipes;

// Re-export page components for convenience
pub use auth::AuthPage;
pub use recipes::RecipesPage;
