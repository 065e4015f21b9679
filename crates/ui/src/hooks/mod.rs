//! # UI Hooks
//!
//! Custom Dioxus hooks for the Brewguide UI.
//!
//! - Pointer follow (the marker chain on the sign-in page)

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_pointer_follow;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_pointer_follow::{
    PointerFollow, TickOutcome, advance, position_from_mouse_event, run_ticks,
    use_pointer_follow,
};
