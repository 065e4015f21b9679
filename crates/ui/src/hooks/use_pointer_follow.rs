//! # Pointer Follow Hook
//!
//! Drives a [`FollowSession`] from Dioxus:
//! - pointer moves update the session's target
//! - a spawned task ticks the chain every `tick_interval_ms`
//! - on unmount the session is stopped and the task cancelled

use brewguide_core::{FollowConfig, FollowSession, Position};
use dioxus::prelude::*;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

// ============================================================================
// Tick Loop
// ============================================================================

/// Call `on_tick` every `period` until it returns `false`
///
/// Late ticks are skipped rather than replayed in a burst.
pub async fn run_ticks<F>(period: Duration, mut on_tick: F)
where
    F: FnMut() -> bool,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if !on_tick() {
            break;
        }
    }
}

/// What one tick of the follow loop decided
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The session is stopped or gone; the loop should end
    Stopped,
    /// Nothing moved; keep ticking without writing
    Settled,
    /// The chain moved; this is the session to store
    Moved(FollowSession),
}

impl TickOutcome {
    /// Hand a moved session to `store`. Returns whether the loop continues.
    pub fn commit(self, store: impl FnOnce(FollowSession)) -> bool {
        match self {
            TickOutcome::Stopped => false,
            TickOutcome::Settled => true,
            TickOutcome::Moved(next) => {
                store(next);
                true
            }
        }
    }
}

/// Advance a copy of `current` by one tick
///
/// `None` means the session's storage has been dropped.
pub fn advance(current: Option<&FollowSession>) -> TickOutcome {
    let Some(current) = current.filter(|s| s.is_active()) else {
        return TickOutcome::Stopped;
    };

    let mut next = current.clone();
    if next.tick() {
        TickOutcome::Moved(next)
    } else {
        TickOutcome::Settled
    }
}

// ============================================================================
// Pointer Follow
// ============================================================================

/// Handle returned by [`use_pointer_follow`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFollow {
    /// The follow session; written by the move handler and the tick task only
    pub session: Signal<FollowSession>,
}

impl PointerFollow {
    /// Feed a pointer position in client coordinates
    pub fn on_pointer_move(&self, position: Position) {
        let mut session = self.session;
        session.write().set_pointer(position);
    }

    /// Current marker positions, head first
    pub fn markers(&self) -> Vec<Position> {
        self.session.read().chain().positions().to_vec()
    }
}

/// Hook for the marker chain that trails the pointer
///
/// # Example
///
/// ```rust,ignore
/// fn Trail() -> Element {
///     let follow = use_pointer_follow(FollowConfig::default());
///
///     rsx! {
///         div {
///             onmousemove: move |e| follow.on_pointer_move(position_from_mouse_event(&e)),
///             for marker in follow.markers() {
///                 div { style: "left: {marker.x}px; top: {marker.y}px;" }
///             }
///         }
///     }
/// }
/// ```
pub fn use_pointer_follow(config: FollowConfig) -> PointerFollow {
    let mut session = use_signal(move || FollowSession::new(config));

    let task = use_hook(move || {
        tracing::debug!(
            "Starting follow loop: {} markers every {}ms",
            config.chain_length,
            config.tick_interval_ms
        );
        spawn(async move {
            run_ticks(config.tick_interval(), move || {
                let outcome = match session.try_peek() {
                    Ok(current) => advance(Some(&*current)),
                    Err(_) => advance(None),
                };
                // Only write when something moved, so a settled chain does not re-render.
                outcome.commit(|next| session.set(next))
            })
            .await;
            tracing::debug!("Follow loop finished");
        })
    });

    use_drop(move || {
        if let Ok(mut current) = session.try_write() {
            current.stop();
        }
        task.cancel();
        tracing::debug!("Follow loop cancelled");
    });

    PointerFollow { session }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Extract position from mouse event (converts f64 to f32)
pub fn position_from_mouse_event(e: &MouseEvent) -> Position {
    let coords = e.client_coordinates();
    Position::new(coords.x as f32, coords.y as f32)
}

// ============================================================================
// Tests
// ============================================================================
