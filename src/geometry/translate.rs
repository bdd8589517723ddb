//! Bounded random translation of clipped pieces.

use rand::Rng;

use crate::config::model::{AreaSpec, Boundaries};
use crate::foundation::core::{Dimensions, Interval, Vec2};
use crate::foundation::math::pct_of;

/// Allowed translation ranges for one clipped piece.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TranslationBounds {
    /// Horizontal range in pixels.
    pub x: Interval,
    /// Vertical range in pixels.
    pub y: Interval,
}

impl TranslationBounds {
    /// Inclusive containment on both axes.
    pub fn contains(&self, v: Vec2) -> bool {
        self.x.contains(v.x) && self.y.contains(v.y)
    }
}

/// Translation ranges that keep the visible piece inside the boundary-expanded container.
///
/// The lower bound pushes the piece flush against the left (top) margin, the upper bound flush
/// against the right (bottom) margin, so every position across the expanded container is
/// reachable no matter where the clip sits within the source image.
pub fn translation_bounds(
    area: &AreaSpec,
    dims: Dimensions,
    boundaries: &Boundaries,
) -> TranslationBounds {
    TranslationBounds {
        x: axis_bounds(
            area.left,
            area.width,
            dims.width,
            boundaries.x1,
            boundaries.x2,
        ),
        y: axis_bounds(
            area.top,
            area.height,
            dims.height,
            boundaries.y1,
            boundaries.y2,
        ),
    }
}

fn axis_bounds(offset_pct: f64, size_pct: f64, total: f64, before: f64, after: f64) -> Interval {
    let offset = pct_of(offset_pct, total);
    let size = pct_of(size_pct, total);
    Interval::new(-offset - before, total - offset + after - size)
}

/// Fresh random translation within [`translation_bounds`]. Callers wanting a stable layout keep
/// the result.
pub fn compute_translation<R: Rng + ?Sized>(
    area: &AreaSpec,
    dims: Dimensions,
    boundaries: &Boundaries,
    rng: &mut R,
) -> Vec2 {
    let bounds = translation_bounds(area, dims, boundaries);
    let x = bounds.x.sample(rng);
    let y = bounds.y.sample(rng);
    Vec2::new(x, y)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/translate.rs"]
mod tests;
