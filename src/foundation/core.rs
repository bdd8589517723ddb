use rand::Rng;

use crate::foundation::error::{FragError, FragResult};
use crate::foundation::math::uniform;

pub use kurbo::{Point, Rect, Vec2};

/// Pixel size of the element hosting the effect.
///
/// Owned by the host and snapshotted on every call into the engine; nothing derived from it is
/// cached across resizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Dimensions {
    /// Build dimensions from a width/height pair.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when either axis has no area.
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// The container as a rectangle anchored at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Closed numeric interval `{min, max}` used for every configurable range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Build an interval. Bounds are not checked here; see [`Interval::validate`].
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Reject non-finite bounds and inverted ranges.
    pub fn validate(self, what: &str) -> FragResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(FragError::config(format!("{what} bounds must be finite")));
        }
        if self.min > self.max {
            return Err(FragError::config(format!(
                "{what} min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Inclusive containment test.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Uniform draw from the interval.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        uniform(rng, self.min, self.max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
