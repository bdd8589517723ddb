use crate::config::model::{AreaMode, EffectConfig};
use crate::config::options::{EffectOptions, MergeOver};
use crate::foundation::error::FragResult;

/// Merge `options` over the defaults and validate the result.
///
/// Pure: the same options always resolve to the same config. Fails with
/// [`crate::FragError::Config`] when a fixed area sequence does not have exactly
/// `fragmentCount` entries, when the count is zero, when a margin is negative, or when any
/// `{min, max}` range is inverted or non-finite.
#[tracing::instrument(level = "debug", skip(options))]
pub fn resolve(options: &EffectOptions) -> FragResult<EffectConfig> {
    let config = options.merge_over(EffectConfig::default());
    config.validate()?;

    tracing::debug!(
        fragments = config.fragment_count,
        random = matches!(config.area, AreaMode::Random),
        parallax = config.parallax,
        "resolved effect config"
    );
    Ok(config)
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolve.rs"]
mod tests;
