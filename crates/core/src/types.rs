//! Geometry types shared by the follow animation and the UI

use serde::{Deserialize, Serialize};

// ============================================================================
// Position
// ============================================================================

/// Point in viewport coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a position at the origin (0, 0)
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean length of this position taken as a vector
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Calculate the Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        (*other - *self).length()
    }

    /// Multiply both components by `factor`
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Whether both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(4.0, 6.0);
        assert_eq!(b - a, Position::new(3.0, 4.0));
        assert_eq!(a + b, Position::new(5.0, 8.0));
        assert_eq!(a.scale(2.0), Position::new(2.0, 4.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Position::new(1.0, 2.0).is_finite());
        assert!(!Position::new(f32::NAN, 2.0).is_finite());
        assert!(!Position::new(0.0, f32::INFINITY).is_finite());
    }
}
