//! Range remapping helpers used to turn raw host inputs into simulation scalars.
//!
//! Input ranges may be inverted (`in_min > in_max`), which is how the pointer's
//! vertical position maps "top of the canvas" to "high intensity". An empty
//! input range maps everything to `out_min` so a zero-sized canvas never
//! produces NaN.

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
/// without clamping.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 || !span.is_finite() {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Like [`map_range`], but the result is held within the output range
/// (whichever way round it is given).
#[inline]
pub fn map_range_clamped(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let mapped = map_range(value, in_min, in_max, out_min, out_max);
    let (lo, hi) = if out_min <= out_max {
        (out_min, out_max)
    } else {
        (out_max, out_min)
    };
    mapped.clamp(lo, hi)
}
