use rand::Rng;

/// Uniform draw over `[min, max)`: `min + (max - min) * u` with `u` in `[0, 1)`.
///
/// A degenerate range (`min == max`) returns `min` exactly. Never panics, unlike
/// `Rng::random_range`, so callers that skipped validation still get a value.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    let u: f64 = rng.random();
    min + (max - min) * u
}

/// Percentage of `total`.
pub(crate) fn pct_of(pct: f64, total: f64) -> f64 {
    pct / 100.0 * total
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
