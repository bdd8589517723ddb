//! Random and fixed clip-area selection.

use rand::Rng;

use crate::config::model::{AreaMode, AreaSpec, EffectConfig, HeightSampling, RandomIntervals};
use crate::foundation::core::Interval;
use crate::foundation::error::{FragError, FragResult};
use crate::foundation::math::uniform;

/// Jitter applied around the fixed (non-free) dimension of a random sliver.
pub const FIXED_JITTER: f64 = 0.1;
/// Floor for the lower end of the jitter window.
pub const FIXED_FLOOR: f64 = 0.1;

/// Clip area for fragment `index`.
///
/// Fixed sequences are returned verbatim and do not touch `rng`. Random mode draws a new sliver
/// on every call: either a wide strip (free width, near-fixed height) or a tall one.
pub fn compute_area<R: Rng + ?Sized>(
    index: usize,
    config: &EffectConfig,
    rng: &mut R,
) -> FragResult<AreaSpec> {
    match &config.area {
        AreaMode::Fixed(areas) => areas.get(index).copied().ok_or_else(|| {
            FragError::config(format!(
                "fragment index {index} out of range for {} fixed areas",
                areas.len()
            ))
        }),
        AreaMode::Random => Ok(random_area(
            &config.random_intervals,
            config.height_sampling,
            rng,
        )),
    }
}

/// One random sliver. Draw order is top, left, coin, free axis, fixed axis.
pub fn random_area<R: Rng + ?Sized>(
    intervals: &RandomIntervals,
    sampling: HeightSampling,
    rng: &mut R,
) -> AreaSpec {
    let top = intervals.top.sample(rng);
    let left = intervals.left.sample(rng);

    // A coin landing on exactly 0.5 rounds up: width is free.
    let width_free = uniform(rng, 0.0, 1.0).round() >= 1.0;

    let dim = &intervals.dimension;
    let (width, height) = if width_free {
        let width = dim.width.range().sample(rng);
        let height = jitter_window(dim.width.fixed_height).sample(rng);
        (width, height)
    } else {
        let free = match sampling {
            HeightSampling::Faithful => dim.width.range(),
            HeightSampling::Corrected => dim.height.range(),
        };
        let height = free.sample(rng);
        let width = jitter_window(dim.height.fixed_width).sample(rng);
        (width, height)
    };

    AreaSpec {
        top,
        left,
        width,
        height,
    }
}

/// `[max(v - 0.1, 0.1), v + 0.1]`.
pub fn jitter_window(fixed: f64) -> Interval {
    Interval::new((fixed - FIXED_JITTER).max(FIXED_FLOOR), fixed + FIXED_JITTER)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/area.rs"]
mod tests;
