use rand::Rng;

use crate::config::model::{AreaSpec, EffectConfig};
use crate::foundation::core::{Dimensions, Vec2};
use crate::foundation::error::FragResult;
use crate::geometry::area::compute_area;
use crate::geometry::clip::{ClipDescriptor, ClipStyle, compute_clip};
use crate::geometry::parallax::draw_parallax_coefficient;
use crate::geometry::translate::compute_translation;

/// Geometry of one fragment for the current container size.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FragmentLayout {
    /// Clip area in percentages.
    pub area: AreaSpec,
    /// Clip in the host's mechanism.
    pub clip: ClipDescriptor,
    /// Pixel offset of the clipped piece.
    pub translation: Vec2,
}

/// One fragment as held by the host.
///
/// `index` and `parallax` are fixed at creation. `layout` is replaced wholesale on every
/// recomputation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Fragment {
    /// Stable identity, `0..fragment_count`.
    pub index: usize,
    /// Parallax coefficient, present only when parallax is enabled.
    pub parallax: Option<f64>,
    /// Current geometry.
    pub layout: FragmentLayout,
}

impl Fragment {
    /// Create fragment `index`: draws its parallax coefficient (if enabled), then its layout.
    pub fn create<R: Rng + ?Sized>(
        index: usize,
        config: &EffectConfig,
        dims: Dimensions,
        style: ClipStyle,
        rng: &mut R,
    ) -> FragResult<Self> {
        let parallax = config
            .parallax
            .then(|| draw_parallax_coefficient(config.parallax_range, rng));
        let layout = compute_layout(index, config, dims, style, rng)?;
        Ok(Self {
            index,
            parallax,
            layout,
        })
    }
}

/// Area, clip and translation of fragment `index`, freshly drawn.
pub fn compute_layout<R: Rng + ?Sized>(
    index: usize,
    config: &EffectConfig,
    dims: Dimensions,
    style: ClipStyle,
    rng: &mut R,
) -> FragResult<FragmentLayout> {
    let area = compute_area(index, config, rng)?;
    let clip = compute_clip(&area, dims, style);
    let translation = compute_translation(&area, dims, &config.boundaries, rng);
    Ok(FragmentLayout {
        area,
        clip,
        translation,
    })
}

/// Create all `config.fragment_count` fragments in index order.
#[tracing::instrument(level = "debug", skip(config, rng), fields(n = config.fragment_count))]
pub fn create_all<R: Rng + ?Sized>(
    config: &EffectConfig,
    dims: Dimensions,
    style: ClipStyle,
    rng: &mut R,
) -> FragResult<Vec<Fragment>> {
    (0..config.fragment_count)
        .map(|i| Fragment::create(i, config, dims, style, rng))
        .collect()
}

/// Recompute every fragment's layout for `dims`, in index order. Parallax coefficients are kept.
#[tracing::instrument(level = "debug", skip(fragments, config, rng), fields(n = fragments.len()))]
pub fn recompute_all<R: Rng + ?Sized>(
    fragments: &mut [Fragment],
    config: &EffectConfig,
    dims: Dimensions,
    style: ClipStyle,
    rng: &mut R,
) -> FragResult<()> {
    for frag in fragments.iter_mut() {
        frag.layout = compute_layout(frag.index, config, dims, style, rng)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effect/fragment.rs"]
mod tests;
