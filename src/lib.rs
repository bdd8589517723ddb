//! fragfx is the geometry engine behind a "shattered image" effect.
//!
//! A single image is shown as a number of overlapping fragments. Each fragment is clipped to a
//! thin sub-rectangle of the image and displaced by a bounded random offset; optionally every
//! fragment also follows the pointer with its own parallax strength.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `EffectOptions -> EffectConfig` ([`resolve`]): defaults merged, validated.
//! 2. **Lay out**: `(index, Dimensions, EffectConfig) -> FragmentLayout` ([`compute_layout`]):
//!    area ([`compute_area`]), clip ([`compute_clip`]) and translation
//!    ([`compute_translation`]).
//! 3. **React**: pointer position -> per-fragment offset ([`compute_parallax`]).
//!
//! [`FragmentsEffect`] bundles these steps behind host-event shaped methods, and
//! [`render_preview`] composites a layout onto a CPU canvas.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit randomness**: every draw goes through a caller-supplied [`rand::Rng`]; a seed
//!   reproduces a layout exactly.
//! - **No host state in the engine**: the engine is a set of pure functions; timers, DOM nodes
//!   and feature detection stay with the host.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod effect;
mod foundation;
mod geometry;
mod preview;

pub use config::model::{
    AreaMode, AreaSpec, Boundaries, DimensionIntervals, EffectConfig, FreeHeight, FreeWidth,
    HeightSampling, RandomIntervals,
};
pub use config::options::{
    BoundariesOptions, DimensionOptions, EffectOptions, FreeHeightOptions, FreeWidthOptions,
    IntervalOptions, RandomIntervalsOptions,
};
pub use config::resolve::resolve;
pub use effect::debounce::ResizeDebouncer;
pub use effect::fragment::{Fragment, FragmentLayout, compute_layout, create_all, recompute_all};
pub use effect::session::FragmentsEffect;
pub use effect::style::{parse_background_image, translate3d_css};
pub use foundation::core::{Dimensions, Interval, Point, Rect, Vec2};
pub use foundation::error::{FragError, FragResult};
pub use geometry::area::{FIXED_FLOOR, FIXED_JITTER, compute_area, jitter_window, random_area};
pub use geometry::clip::{ClipDescriptor, ClipStyle, compute_clip};
pub use geometry::parallax::{compute_parallax, draw_parallax_coefficient, parallax_reset};
pub use geometry::translate::{TranslationBounds, compute_translation, translation_bounds};
pub use preview::raster::{MAX_PREVIEW_SIDE, load_image, render_preview};

pub use rand;
