//! Entrance animation timing
//!
//! Items in a list enter one after another: item `i` starts `i * step_secs`
//! after the first. The keyframes themselves live in the stylesheet; this
//! module only produces the inline `animation` declarations.

/// Which end states of the keyframes stay applied outside the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Hold the first frame during the delay and the last frame afterwards
    Both,
    /// Hold the first frame during the delay only
    ///
    /// Needed when a stylesheet rule (such as a hover transform) must win
    /// once the entrance has finished.
    Backwards,
}

impl FillMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            FillMode::Both => "both",
            FillMode::Backwards => "backwards",
        }
    }
}

/// Staggered entrance timing for a list of items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Length of each item's animation in seconds
    pub duration_secs: f32,
    /// Extra delay per index in seconds
    pub step_secs: f32,
    pub fill: FillMode,
}

/// Recipe cards: 0.5s each, 0.2s apart. Cards scale on hover, so the final
/// frame is not held.
pub const CARD_STAGGER: Stagger = Stagger::new(0.5, 0.2).with_fill(FillMode::Backwards);

/// Steps within a card: 0.3s each, 0.1s apart
pub const STEP_STAGGER: Stagger = Stagger::new(0.3, 0.1);

/// Trailing markers fade in 0.1s apart
pub const MARKER_STAGGER: Stagger = Stagger::new(0.3, 0.1);

/// Page heading, no stagger
pub const HEADING_ENTRANCE: Stagger = Stagger::new(0.5, 0.0);

impl Stagger {
    pub const fn new(duration_secs: f32, step_secs: f32) -> Self {
        Self {
            duration_secs,
            step_secs,
            fill: FillMode::Both,
        }
    }

    pub const fn with_fill(self, fill: FillMode) -> Self {
        Self { fill, ..self }
    }

    /// Start delay for the item at `index`
    pub fn delay_secs(&self, index: usize) -> f32 {
        index as f32 * self.step_secs
    }

    /// Inline style running keyframes `name` for the item at `index`
    pub fn animation_style(&self, name: &str, index: usize) -> String {
        format!(
            "animation: {} {:.2}s ease-out {:.2}s {};",
            name,
            self.duration_secs,
            self.delay_secs(index),
            self.fill.as_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delay_is_proportional_to_index() {
        assert_eq!(CARD_STAGGER.delay_secs(0), 0.0);
        assert!((CARD_STAGGER.delay_secs(3) - 0.6).abs() < 1e-6);
        assert!((STEP_STAGGER.delay_secs(2) - 0.2).abs() < 1e-6);
        assert_eq!(HEADING_ENTRANCE.delay_secs(5), 0.0);
    }

    #[test]
    fn test_animation_style() {
        assert_eq!(
            CARD_STAGGER.animation_style("card-enter", 2),
            "animation: card-enter 0.50s ease-out 0.40s backwards;"
        );
        assert_eq!(
            STEP_STAGGER.animation_style("step-enter", 0),
            "animation: step-enter 0.30s ease-out 0.00s both;"
        );
    }

    #[test]
    fn test_card_entrance_releases_final_frame() {
        // A held `transform` from the last keyframe would mask the hover scale.
        assert_eq!(CARD_STAGGER.fill, FillMode::Backwards);
        assert!(!CARD_STAGGER.animation_style("card-enter", 0).contains("both"));
        assert_eq!(STEP_STAGGER.fill, FillMode::Both);
    }
}
