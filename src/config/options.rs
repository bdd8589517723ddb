use crate::config::model::{
    AreaMode, AreaSpec, Boundaries, DimensionIntervals, EffectConfig, FreeHeight, FreeWidth,
    HeightSampling, RandomIntervals,
};
use crate::foundation::core::Interval;
use crate::foundation::error::{FragError, FragResult};

/// User-supplied, partial effect options.
///
/// Every field (including fields of nested groups) is optional; missing values fall back to the
/// defaults of [`EffectConfig`] when passed through [`crate::resolve`]. JSON keys are camelCase;
/// the option names of the original browser effect (`frags`, `randomParallax`) are accepted as
/// aliases.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EffectOptions {
    /// Number of fragments.
    #[serde(alias = "frags")]
    pub fragment_count: Option<usize>,
    /// Translation overscan margins.
    pub boundaries: Option<BoundariesOptions>,
    /// `"random"` or a list of areas.
    #[serde(alias = "areaMode")]
    pub area: Option<AreaMode>,
    /// Random draw ranges.
    pub random_intervals: Option<RandomIntervalsOptions>,
    /// Enable pointer parallax.
    pub parallax: Option<bool>,
    /// Parallax coefficient range.
    #[serde(alias = "randomParallax")]
    pub parallax_range: Option<IntervalOptions>,
    /// Height-free branch sampling mode.
    pub height_sampling: Option<HeightSampling>,
}

/// Partial [`Boundaries`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct BoundariesOptions {
    pub x1: Option<f64>,
    pub x2: Option<f64>,
    pub y1: Option<f64>,
    pub y2: Option<f64>,
}

/// Partial [`Interval`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct IntervalOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Partial [`RandomIntervals`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct RandomIntervalsOptions {
    pub top: Option<IntervalOptions>,
    pub left: Option<IntervalOptions>,
    pub dimension: Option<DimensionOptions>,
}

/// Partial [`DimensionIntervals`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct DimensionOptions {
    pub width: Option<FreeWidthOptions>,
    pub height: Option<FreeHeightOptions>,
}

/// Partial [`FreeWidth`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[allow(missing_docs)]
pub struct FreeWidthOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub fixed_height: Option<f64>,
}

/// Partial [`FreeHeight`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[allow(missing_docs)]
pub struct FreeHeightOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub fixed_width: Option<f64>,
}

impl EffectOptions {
    /// Empty options: resolves to the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an options document.
    pub fn from_json(s: &str) -> FragResult<Self> {
        serde_json::from_str(s).map_err(|e| FragError::serde(e.to_string()))
    }

    /// Parse an options document from a JSON value.
    pub fn from_value(v: serde_json::Value) -> FragResult<Self> {
        serde_json::from_value(v).map_err(|e| FragError::serde(e.to_string()))
    }

    /// Set the fragment count.
    pub fn fragment_count(mut self, n: usize) -> Self {
        self.fragment_count = Some(n);
        self
    }

    /// Set all four boundary margins.
    pub fn boundaries(mut self, b: Boundaries) -> Self {
        self.boundaries = Some(BoundariesOptions {
            x1: Some(b.x1),
            x2: Some(b.x2),
            y1: Some(b.y1),
            y2: Some(b.y2),
        });
        self
    }

    /// Use one fixed area per fragment.
    pub fn areas(mut self, areas: Vec<AreaSpec>) -> Self {
        self.area = Some(AreaMode::Fixed(areas));
        self
    }

    /// Use random areas.
    pub fn random_areas(mut self) -> Self {
        self.area = Some(AreaMode::Random);
        self
    }

    /// Enable or disable pointer parallax.
    pub fn parallax(mut self, enabled: bool) -> Self {
        self.parallax = Some(enabled);
        self
    }

    /// Set the parallax coefficient range.
    pub fn parallax_range(mut self, min: f64, max: f64) -> Self {
        self.parallax_range = Some(IntervalOptions {
            min: Some(min),
            max: Some(max),
        });
        self
    }

    /// Select the height-free sampling mode.
    pub fn height_sampling(mut self, mode: HeightSampling) -> Self {
        self.height_sampling = Some(mode);
        self
    }
}

/// Field-by-field overlay of partial options onto a resolved base value.
pub(crate) trait MergeOver<T> {
    fn merge_over(&self, base: T) -> T;
}

impl<T, O: MergeOver<T>> MergeOver<T> for Option<O> {
    fn merge_over(&self, base: T) -> T {
        match self {
            Some(o) => o.merge_over(base),
            None => base,
        }
    }
}

impl MergeOver<EffectConfig> for EffectOptions {
    fn merge_over(&self, base: EffectConfig) -> EffectConfig {
        EffectConfig {
            fragment_count: self.fragment_count.unwrap_or(base.fragment_count),
            boundaries: self.boundaries.merge_over(base.boundaries),
            area: self.area.clone().unwrap_or(base.area),
            random_intervals: self.random_intervals.merge_over(base.random_intervals),
            parallax: self.parallax.unwrap_or(base.parallax),
            parallax_range: self.parallax_range.merge_over(base.parallax_range),
            height_sampling: self.height_sampling.unwrap_or(base.height_sampling),
        }
    }
}

impl MergeOver<Boundaries> for BoundariesOptions {
    fn merge_over(&self, base: Boundaries) -> Boundaries {
        Boundaries {
            x1: self.x1.unwrap_or(base.x1),
            x2: self.x2.unwrap_or(base.x2),
            y1: self.y1.unwrap_or(base.y1),
            y2: self.y2.unwrap_or(base.y2),
        }
    }
}

impl MergeOver<Interval> for IntervalOptions {
    fn merge_over(&self, base: Interval) -> Interval {
        Interval::new(self.min.unwrap_or(base.min), self.max.unwrap_or(base.max))
    }
}

impl MergeOver<RandomIntervals> for RandomIntervalsOptions {
    fn merge_over(&self, base: RandomIntervals) -> RandomIntervals {
        RandomIntervals {
            top: self.top.merge_over(base.top),
            left: self.left.merge_over(base.left),
            dimension: self.dimension.merge_over(base.dimension),
        }
    }
}

impl MergeOver<DimensionIntervals> for DimensionOptions {
    fn merge_over(&self, base: DimensionIntervals) -> DimensionIntervals {
        DimensionIntervals {
            width: self.width.merge_over(base.width),
            height: self.height.merge_over(base.height),
        }
    }
}

impl MergeOver<FreeWidth> for FreeWidthOptions {
    fn merge_over(&self, base: FreeWidth) -> FreeWidth {
        FreeWidth {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            fixed_height: self.fixed_height.unwrap_or(base.fixed_height),
        }
    }
}

impl MergeOver<FreeHeight> for FreeHeightOptions {
    fn merge_over(&self, base: FreeHeight) -> FreeHeight {
        FreeHeight {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            fixed_width: self.fixed_width.unwrap_or(base.fixed_width),
        }
    }
}
