//! Clip descriptors for fragment areas.

use crate::config::model::AreaSpec;
use crate::foundation::core::{Dimensions, Point, Rect};
use crate::foundation::math::pct_of;

/// Clipping mechanism the host can render.
///
/// Resolved once per effect instance by the host's feature detection, never per fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipStyle {
    /// Percentage polygon (`clip-path: polygon(...)`).
    #[default]
    Polygon,
    /// Legacy pixel rectangle (`clip: rect(...)`).
    Rect,
}

/// Visible region of one fragment's image layer.
///
/// Both variants describe the same rectangle for a given container size; the host matches on
/// the tag to pick its rendering path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClipDescriptor {
    /// Corners in percentages, clockwise from top-left.
    Polygon {
        /// `(left,top) (right,top) (right,bottom) (left,bottom)`.
        points: [Point; 4],
    },
    /// Edges in pixels, CSS `rect()` order.
    Rect {
        /// Top edge.
        top: f64,
        /// Right edge.
        right: f64,
        /// Bottom edge.
        bottom: f64,
        /// Left edge.
        left: f64,
    },
}

/// Build the clip descriptor of `area` for the given container and clip mechanism.
pub fn compute_clip(area: &AreaSpec, dims: Dimensions, style: ClipStyle) -> ClipDescriptor {
    match style {
        ClipStyle::Polygon => {
            let (l, t) = (area.left, area.top);
            let (r, b) = (area.left + area.width, area.top + area.height);
            ClipDescriptor::Polygon {
                points: [
                    Point::new(l, t),
                    Point::new(r, t),
                    Point::new(r, b),
                    Point::new(l, b),
                ],
            }
        }
        ClipStyle::Rect => {
            let top = pct_of(area.top, dims.height);
            let left = pct_of(area.left, dims.width);
            ClipDescriptor::Rect {
                top,
                right: pct_of(area.width, dims.width) + left,
                bottom: pct_of(area.height, dims.height) + top,
                left,
            }
        }
    }
}

impl ClipDescriptor {
    /// The clip mechanism this descriptor targets.
    pub fn style(&self) -> ClipStyle {
        match self {
            Self::Polygon { .. } => ClipStyle::Polygon,
            Self::Rect { .. } => ClipStyle::Rect,
        }
    }

    /// The clipped region in container pixels.
    pub fn to_pixel_rect(&self, dims: Dimensions) -> Rect {
        match *self {
            Self::Polygon { points } => {
                let [tl, _, br, _] = points;
                Rect::new(
                    pct_of(tl.x, dims.width),
                    pct_of(tl.y, dims.height),
                    pct_of(br.x, dims.width),
                    pct_of(br.y, dims.height),
                )
            }
            Self::Rect {
                top,
                right,
                bottom,
                left,
            } => Rect::new(left, top, right, bottom),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/clip.rs"]
mod tests;
