use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use image::imageops::FilterType;

use crate::effect::fragment::Fragment;
use crate::foundation::core::{Dimensions, Rect, Vec2};
use crate::foundation::error::{FragError, FragResult};
use crate::preview::composite::{over, premultiply, unpremultiply};

/// Largest preview canvas side, in pixels.
pub const MAX_PREVIEW_SIDE: f64 = 16_384.0;

/// Decode an image file into straight RGBA8.
pub fn load_image(path: &Path) -> FragResult<RgbaImage> {
    let img = image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// Composite `fragments` of `source` onto a transparent canvas of the container size.
///
/// The source is stretched to the container (it is the element's background). Each fragment
/// copies the pixels inside its clip rectangle, shifted by its translation plus the matching
/// entry of `parallax` (pass an empty slice for none), source-over in index order. Pixels that
/// land outside the canvas are dropped.
#[tracing::instrument(level = "debug", skip(source, fragments, parallax), fields(n = fragments.len()))]
pub fn render_preview(
    source: &RgbaImage,
    fragments: &[Fragment],
    dims: Dimensions,
    parallax: &[Vec2],
) -> FragResult<RgbaImage> {
    if dims.is_empty() {
        return Err(FragError::render(format!(
            "container must have a non-zero size (got {}x{})",
            dims.width, dims.height
        )));
    }
    if !(dims.width <= MAX_PREVIEW_SIDE && dims.height <= MAX_PREVIEW_SIDE) {
        return Err(FragError::render(format!(
            "container {}x{} exceeds the {MAX_PREVIEW_SIDE}px preview limit",
            dims.width, dims.height
        )));
    }
    if source.width() == 0 || source.height() == 0 {
        return Err(FragError::render("source image is empty"));
    }
    if !parallax.is_empty() && parallax.len() != fragments.len() {
        return Err(FragError::render(format!(
            "{} parallax offsets for {} fragments",
            parallax.len(),
            fragments.len()
        )));
    }

    let w = dims.width.round().max(1.0) as u32;
    let h = dims.height.round().max(1.0) as u32;
    let backdrop = if source.dimensions() == (w, h) {
        source.clone()
    } else {
        image::imageops::resize(source, w, h, FilterType::Triangle)
    };
    let src: Vec<[u8; 4]> = backdrop.pixels().map(|p| premultiply(p.0)).collect();
    let mut canvas = vec![[0u8; 4]; src.len()];

    for (i, frag) in fragments.iter().enumerate() {
        let offset = frag.layout.translation + parallax.get(i).copied().unwrap_or(Vec2::ZERO);
        let piece = frag.layout.clip.to_pixel_rect(dims);
        blit_piece(&mut canvas, &src, w, h, piece, offset);
    }

    let mut out = RgbaImage::new(w, h);
    for (dst, px) in out.pixels_mut().zip(canvas) {
        dst.0 = unpremultiply(px);
    }
    Ok(out)
}

fn blit_piece(
    canvas: &mut [[u8; 4]],
    src: &[[u8; 4]],
    w: u32,
    h: u32,
    piece: Rect,
    offset: Vec2,
) {
    let moved = piece + offset;
    let x0 = moved.x0.floor().max(0.0) as u32;
    let y0 = moved.y0.floor().max(0.0) as u32;
    let x1 = (moved.x1.ceil().min(f64::from(w))).max(0.0) as u32;
    let y1 = (moved.y1.ceil().min(f64::from(h))).max(0.0) as u32;

    for y in y0..y1 {
        // Sample at pixel centers, mapped back into source space.
        let sy = f64::from(y) + 0.5 - offset.y;
        if sy < piece.y0 || sy >= piece.y1 {
            continue;
        }
        let row = (sy.floor().max(0.0) as u32).min(h - 1);
        for x in x0..x1 {
            let sx = f64::from(x) + 0.5 - offset.x;
            if sx < piece.x0 || sx >= piece.x1 {
                continue;
            }
            let col = (sx.floor().max(0.0) as u32).min(w - 1);
            let s = src[(row * w + col) as usize];
            let d = &mut canvas[(y * w + x) as usize];
            *d = over(*d, s);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/raster.rs"]
mod tests;
