//! # Pointer Follow
//!
//! A chain of markers that trails the pointer. Marker 0 chases the pointer;
//! every other marker chases where its predecessor was on the previous tick.
//!
//! Each tick a marker closes `distance / scale_factor` of the gap, capped at
//! `max_speed`. A marker closer than `caught_epsilon` to its target does not
//! move, which keeps the unit-vector division away from zero distances.

use crate::config::FollowConfig;
use crate::types::Position;

// ============================================================================
// Step Functions
// ============================================================================

/// Per-tick speed for a marker `distance` away from its target
pub fn follow_speed(distance: f32, config: &FollowConfig) -> f32 {
    (distance / config.scale_factor).clamp(0.0, config.max_speed)
}

/// Move `position` one tick toward `target`
///
/// Returns `position` unchanged when the target is already caught. A NaN
/// distance (from a non-finite target) also counts as caught.
pub fn step_toward(position: Position, target: Position, config: &FollowConfig) -> Position {
    let delta = target - position;
    let distance = delta.length();

    if distance.is_nan() || distance < config.caught_epsilon {
        return position;
    }

    let speed = follow_speed(distance, config);
    position + delta.scale(speed / distance)
}

// ============================================================================
// Marker Chain
// ============================================================================

/// Fixed-length chain of marker positions
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerChain {
    positions: Vec<Position>,
}

impl MarkerChain {
    /// Create a chain of `len` markers at the origin
    pub fn new(len: usize) -> Self {
        Self::at(len, Position::zero())
    }

    /// Create a chain of `len` markers stacked on `origin`
    pub fn at(len: usize, origin: Position) -> Self {
        Self {
            positions: vec![origin; len],
        }
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the chain has no markers
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Current marker positions, head first
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Advance every marker by one tick. Returns `true` if any marker moved.
    pub fn tick(&mut self, pointer: Position, config: &FollowConfig) -> bool {
        let mut moved = false;

        // Back to front, so `positions[i - 1]` still holds last tick's value.
        for i in (0..self.positions.len()).rev() {
            let target = if i == 0 {
                pointer
            } else {
                self.positions[i - 1]
            };

            let current = self.positions[i];
            let next = step_toward(current, target, config);
            if next != current {
                self.positions[i] = next;
                moved = true;
            }
        }

        moved
    }
}

// ============================================================================
// Follow Session
// ============================================================================

/// A marker chain together with the pointer it follows
///
/// The session is active while its view is mounted. Once stopped, ticks are
/// ignored, so a tick already queued when the view goes away changes nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowSession {
    config: FollowConfig,
    chain: MarkerChain,
    pointer: Position,
    active: bool,
}

impl FollowSession {
    /// Start a session with every marker at the origin
    pub fn new(config: FollowConfig) -> Self {
        Self {
            config,
            chain: MarkerChain::new(config.chain_length),
            pointer: Position::zero(),
            active: true,
        }
    }

    /// Record the latest pointer position. Non-finite positions are dropped.
    pub fn set_pointer(&mut self, pointer: Position) -> bool {
        if !pointer.is_finite() {
            return false;
        }
        self.pointer = pointer;
        true
    }

    /// Advance the chain one tick. Returns `true` if any marker moved.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.chain.tick(self.pointer, &self.config)
    }

    /// Stop the session; later ticks are no-ops
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn chain(&self) -> &MarkerChain {
        &self.chain
    }

    pub fn pointer(&self) -> Position {
        self.pointer
    }
}

// ============================================================================
// Tests
// ============================================================================
