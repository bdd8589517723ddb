use crate::foundation::core::{Dimensions, Interval, Rect};
use crate::foundation::error::{FragError, FragResult};
use crate::geometry::area::FIXED_JITTER;

/// Fully resolved effect configuration.
///
/// Produced by [`crate::resolve`] (defaults merged with user options, then validated) and never
/// mutated afterwards. Fields are public for inspection; hand-built values should go through
/// [`EffectConfig::validate`] before use.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectConfig {
    /// Number of fragments. Fixed for the lifetime of the effect.
    pub fragment_count: usize,
    /// Overscan margins a fragment may be translated into.
    pub boundaries: Boundaries,
    /// Per-fragment clip areas, or random draws.
    pub area: AreaMode,
    /// Ranges used when `area` is [`AreaMode::Random`].
    pub random_intervals: RandomIntervals,
    /// Whether fragments react to pointer movement.
    pub parallax: bool,
    /// Pixel magnitude range the per-fragment parallax coefficient is drawn from.
    pub parallax_range: Interval,
    /// Which range the height-free random branch samples from.
    pub height_sampling: HeightSampling,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            fragment_count: 25,
            boundaries: Boundaries::default(),
            area: AreaMode::Random,
            random_intervals: RandomIntervals::default(),
            parallax: false,
            parallax_range: Interval::new(10.0, 150.0),
            height_sampling: HeightSampling::Faithful,
        }
    }
}

impl EffectConfig {
    /// Check every cross-field and range constraint.
    pub fn validate(&self) -> FragResult<()> {
        if self.fragment_count == 0 {
            return Err(FragError::config("fragmentCount must be > 0"));
        }
        self.boundaries.validate()?;

        match &self.area {
            AreaMode::Fixed(areas) if areas.len() != self.fragment_count => {
                return Err(FragError::config(format!(
                    "area sequence has {} entries but fragmentCount is {}",
                    areas.len(),
                    self.fragment_count
                )));
            }
            AreaMode::Fixed(areas) => {
                for (i, a) in areas.iter().enumerate() {
                    a.validate()
                        .map_err(|e| FragError::config(format!("area[{i}]: {e}")))?;
                }
            }
            AreaMode::Random => self.random_intervals.validate()?,
        }

        self.parallax_range.validate("parallaxRange")?;
        Ok(())
    }
}

/// Pixel overscan allowance beyond each container edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Boundaries {
    /// Left margin.
    pub x1: f64,
    /// Right margin.
    pub x2: f64,
    /// Top margin.
    pub y1: f64,
    /// Bottom margin.
    pub y2: f64,
}

impl Default for Boundaries {
    fn default() -> Self {
        Self {
            x1: 100.0,
            x2: 100.0,
            y1: 50.0,
            y2: 50.0,
        }
    }
}

impl Boundaries {
    fn validate(self) -> FragResult<()> {
        for (name, v) in [("x1", self.x1), ("x2", self.x2), ("y1", self.y1), ("y2", self.y2)] {
            if !v.is_finite() || v < 0.0 {
                return Err(FragError::config(format!(
                    "boundaries.{name} must be a finite, non-negative pixel value (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// The container grown by the margins: the region translated pieces must stay inside.
    pub fn expand(self, dims: Dimensions) -> Rect {
        Rect::new(
            -self.x1,
            -self.y1,
            dims.width + self.x2,
            dims.height + self.y2,
        )
    }
}

/// Clip area of one fragment, in percentages of the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AreaSpec {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl AreaSpec {
    /// Build an area from `top, left, width, height` percentages.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    // `left + width <= 100` is recommended but not required; pieces may overhang the image.
    fn validate(self) -> FragResult<()> {
        for (name, v) in [
            ("top", self.top),
            ("left", self.left),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !(0.0..=100.0).contains(&v) {
                return Err(FragError::config(format!(
                    "{name} must be a percentage in [0, 100] (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Where fragment clip areas come from.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "AreaModeRepr", into = "AreaModeRepr")]
pub enum AreaMode {
    /// Fresh random sliver per fragment, per recomputation. Serialized as `"random"`.
    #[default]
    Random,
    /// One area per fragment index.
    Fixed(Vec<AreaSpec>),
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum AreaModeRepr {
    Keyword(AreaKeyword),
    Fixed(Vec<AreaSpec>),
}

#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum AreaKeyword {
    Random,
}

impl From<AreaModeRepr> for AreaMode {
    fn from(r: AreaModeRepr) -> Self {
        match r {
            AreaModeRepr::Keyword(AreaKeyword::Random) => Self::Random,
            AreaModeRepr::Fixed(v) => Self::Fixed(v),
        }
    }
}

impl From<AreaMode> for AreaModeRepr {
    fn from(m: AreaMode) -> Self {
        match m {
            AreaMode::Random => Self::Keyword(AreaKeyword::Random),
            AreaMode::Fixed(v) => Self::Fixed(v),
        }
    }
}

/// Ranges for random area draws (percentages).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RandomIntervals {
    /// Range of the top edge.
    pub top: Interval,
    /// Range of the left edge.
    pub left: Interval,
    /// Free/fixed dimension pairs.
    pub dimension: DimensionIntervals,
}

impl Default for RandomIntervals {
    fn default() -> Self {
        Self {
            top: Interval::new(0.0, 90.0),
            left: Interval::new(0.0, 90.0),
            dimension: DimensionIntervals::default(),
        }
    }
}

impl RandomIntervals {
    fn validate(&self) -> FragResult<()> {
        check_range("randomIntervals.top", self.top)?;
        check_range("randomIntervals.left", self.left)?;
        check_range(
            "randomIntervals.dimension.width",
            self.dimension.width.range(),
        )?;
        check_range(
            "randomIntervals.dimension.height",
            self.dimension.height.range(),
        )?;
        check_fixed(
            "randomIntervals.dimension.width.fixedHeight",
            self.dimension.width.fixed_height,
        )?;
        check_fixed(
            "randomIntervals.dimension.height.fixedWidth",
            self.dimension.height.fixed_width,
        )
    }
}

fn check_range(what: &str, range: Interval) -> FragResult<()> {
    range.validate(what)?;
    if range.min < 0.0 || range.max > 100.0 {
        return Err(FragError::config(format!(
            "{what} must lie within [0, 100] percent (got {}..{})",
            range.min, range.max
        )));
    }
    Ok(())
}

// The jittered draw reaches `v + FIXED_JITTER`, which must stay a percentage.
fn check_fixed(what: &str, v: f64) -> FragResult<()> {
    if !(0.0..=100.0 - FIXED_JITTER).contains(&v) {
        return Err(FragError::config(format!(
            "{what} must be a percentage in [0, {}] (got {v})",
            100.0 - FIXED_JITTER
        )));
    }
    Ok(())
}

/// Either the width or the height is drawn from a range; the other axis gets a fixed
/// value with a small jitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DimensionIntervals {
    /// Used when width is the free axis.
    pub width: FreeWidth,
    /// Used when height is the free axis.
    pub height: FreeHeight,
}

/// Width range plus the fixed height paired with it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeWidth {
    /// Smallest width.
    pub min: f64,
    /// Largest width.
    pub max: f64,
    /// Height assigned (±0.1) when width is free.
    pub fixed_height: f64,
}

impl Default for FreeWidth {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 60.0,
            fixed_height: 1.1,
        }
    }
}

impl FreeWidth {
    /// The free `{min, max}` range.
    pub fn range(self) -> Interval {
        Interval::new(self.min, self.max)
    }
}

/// Height range plus the fixed width paired with it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeHeight {
    /// Smallest height.
    pub min: f64,
    /// Largest height.
    pub max: f64,
    /// Width assigned (±0.1) when height is free.
    pub fixed_width: f64,
}

impl Default for FreeHeight {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 60.0,
            fixed_width: 1.1,
        }
    }
}

impl FreeHeight {
    /// The free `{min, max}` range.
    pub fn range(self) -> Interval {
        Interval::new(self.min, self.max)
    }
}

/// Range the height-free branch of a random draw samples its height from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightSampling {
    /// Sample from the *width* range, matching the effect's established look.
    #[default]
    Faithful,
    /// Sample from the height range.
    Corrected,
}
