/// Draw a random `f64` uniformly from `[low, high)`.
///
/// Consumes exactly one value from `rng`. When `low == high` the result is
/// `low`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Draw a perturbation uniformly from `[-radius, radius)`.
#[inline]
pub(crate) fn symmetric(rng: &mut fastrand::Rng, radius: f64) -> f64 {
    (rng.f64() * 2.0 - 1.0) * radius
}
