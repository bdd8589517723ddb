use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::model::EffectConfig;
use crate::config::options::EffectOptions;
use crate::config::resolve::resolve;
use crate::effect::fragment::{Fragment, create_all, recompute_all};
use crate::effect::style::parse_background_image;
use crate::foundation::core::{Dimensions, Point, Vec2};
use crate::foundation::error::FragResult;
use crate::geometry::clip::ClipStyle;
use crate::geometry::parallax::{compute_parallax, parallax_reset};

/// Host-side state of one effect instance.
///
/// Owns the resolved config, the current container size, the clip mechanism, the random source
/// and the fragment records. Event handlers of the host map onto [`FragmentsEffect::resize`],
/// [`FragmentsEffect::pointer_move`] and [`FragmentsEffect::pointer_leave`].
#[derive(Debug)]
pub struct FragmentsEffect<R = SmallRng> {
    config: EffectConfig,
    dims: Dimensions,
    background: String,
    style: ClipStyle,
    fragments: Vec<Fragment>,
    rng: R,
}

impl FragmentsEffect<SmallRng> {
    /// Effect whose random draws are reproducible for `seed`.
    pub fn with_seed(
        options: &EffectOptions,
        dims: Dimensions,
        background: &str,
        style: ClipStyle,
        seed: u64,
    ) -> FragResult<Self> {
        Self::new(
            options,
            dims,
            background,
            style,
            SmallRng::seed_from_u64(seed),
        )
    }

    /// Effect seeded from operating-system entropy.
    pub fn from_entropy(
        options: &EffectOptions,
        dims: Dimensions,
        background: &str,
        style: ClipStyle,
    ) -> FragResult<Self> {
        Self::new(options, dims, background, style, SmallRng::from_os_rng())
    }
}

impl<R: Rng> FragmentsEffect<R> {
    /// Resolve `options` and lay out every fragment.
    ///
    /// Fails with [`crate::FragError::Config`] before any fragment is created when the options
    /// are inconsistent. `background` may be a raw reference or a CSS `url(...)` value.
    #[tracing::instrument(level = "debug", skip(options, rng))]
    pub fn new(
        options: &EffectOptions,
        dims: Dimensions,
        background: &str,
        style: ClipStyle,
        mut rng: R,
    ) -> FragResult<Self> {
        let config = resolve(options)?;
        let fragments = create_all(&config, dims, style, &mut rng)?;
        Ok(Self {
            config,
            dims,
            background: parse_background_image(background),
            style,
            fragments,
            rng,
        })
    }

    /// Snapshot new container dimensions and recompute every fragment's clip and translation.
    pub fn resize(&mut self, dims: Dimensions) -> FragResult<()> {
        self.dims = dims;
        recompute_all(
            &mut self.fragments,
            &self.config,
            dims,
            self.style,
            &mut self.rng,
        )
    }
}

impl<R> FragmentsEffect<R> {
    /// Per-fragment parallax targets for a pointer at `pointer` (container-relative pixels).
    ///
    /// Empty when parallax is disabled.
    pub fn pointer_move(&self, pointer: Point) -> Vec<Vec2> {
        self.fragments
            .iter()
            .filter_map(|f| f.parallax)
            .map(|c| compute_parallax(c, self.dims, pointer))
            .collect()
    }

    /// Per-fragment targets once the pointer leaves the container: all zero.
    pub fn pointer_leave(&self) -> Vec<Vec2> {
        self.fragments
            .iter()
            .filter(|f| f.parallax.is_some())
            .map(|_| parallax_reset())
            .collect()
    }

    /// Fragment records in index order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Resolved configuration.
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Container size used by the last layout pass.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Image reference every fragment displays.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Clip mechanism chosen for this instance.
    pub fn clip_style(&self) -> ClipStyle {
        self.style
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/session.rs"]
mod tests;
