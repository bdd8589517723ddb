//! CSS rendering of engine output for web hosts.

use crate::foundation::core::Vec2;
use crate::geometry::clip::ClipDescriptor;

impl ClipDescriptor {
    /// CSS property the value of [`ClipDescriptor::to_css`] belongs to.
    pub fn css_property(&self) -> &'static str {
        match self {
            Self::Polygon { .. } => "clip-path",
            Self::Rect { .. } => "clip",
        }
    }

    /// CSS value: `polygon(l% t%, r% t%, r% b%, l% b%)` or `rect(Tpx,Rpx,Bpx,Lpx)`.
    pub fn to_css(&self) -> String {
        match self {
            Self::Polygon { points } => {
                let corners = points
                    .iter()
                    .map(|p| format!("{}% {}%", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("polygon({corners})")
            }
            Self::Rect {
                top,
                right,
                bottom,
                left,
            } => format!("rect({top}px,{right}px,{bottom}px,{left}px)"),
        }
    }
}

/// `translate3d(Xpx,Ypx,0)`; kept on the GPU-friendly 3D transform path.
pub fn translate3d_css(v: Vec2) -> String {
    if v == Vec2::ZERO {
        return "translate3d(0,0,0)".to_string();
    }
    format!("translate3d({}px,{}px,0)", v.x, v.y)
}

/// Image reference from a CSS `background-image` value: strips `url(`, `)` and double quotes.
pub fn parse_background_image(css: &str) -> String {
    css.replacen("url(", "", 1)
        .replacen(')', "", 1)
        .replace('"', "")
}

#[cfg(test)]
#[path = "../../tests/unit/effect/style.rs"]
mod tests;
