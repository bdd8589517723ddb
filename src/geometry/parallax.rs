//! Pointer-driven parallax offsets.

use rand::Rng;

use crate::foundation::core::{Dimensions, Interval, Point, Vec2};

/// Draw the per-fragment parallax coefficient. Done once per fragment, at creation.
pub fn draw_parallax_coefficient<R: Rng + ?Sized>(range: Interval, rng: &mut R) -> f64 {
    range.sample(rng)
}

/// Parallax translation target for a fragment with `coefficient`, given the pointer position
/// relative to the container's top-left corner.
///
/// The pointer at the container's center maps to no movement; the corners map to
/// `±coefficient/2` on each axis. An axis with zero extent contributes only the `-c/2` term.
pub fn compute_parallax(coefficient: f64, dims: Dimensions, pointer: Point) -> Vec2 {
    Vec2::new(
        axis(coefficient, dims.width, pointer.x),
        axis(coefficient, dims.height, pointer.y),
    )
}

fn axis(c: f64, extent: f64, p: f64) -> f64 {
    let half = c / 2.0;
    if extent > 0.0 { c / extent * p - half } else { -half }
}

/// Target once the pointer has left the container.
pub fn parallax_reset() -> Vec2 {
    Vec2::ZERO
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/parallax.rs"]
mod tests;
