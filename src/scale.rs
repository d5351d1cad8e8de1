//! Linear mapping between a handle's pixel offset and its integer value.
//!
//! Pure functions; the live container range comes in as an argument so the
//! mapping stays independent of DOM layout and runs host-side in tests.

/// Integer value displayed for a pixel `offset` within `[0, range]`.
///
/// `None` means the container has no usable range yet (layout not ready);
/// callers skip the update. Half-way cases round away from zero
/// (`f64::round`), and the result is clamped into `[min_value, max_value]`
/// so an overshooting offset still lands on a rail.
pub fn to_value(offset: f64, range: f64, min_value: i32, max_value: i32) -> Option<i32> {
    if range <= 0.0 {
        return None;
    }
    let span = (max_value - min_value) as f64;
    let value = min_value as f64 + (offset / range) * span;
    Some((value.round() as i32).clamp(min_value, max_value))
}

/// Pixel offset that displays `value`. Unclamped: out-of-range values map
/// past the rails and callers clamp against the live range.
pub fn to_offset(value: i32, range: f64, min_value: i32, max_value: i32) -> f64 {
    let span = (max_value - min_value) as f64;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - min_value) as f64 / span) * range
}

/// Restrict an offset to the travel of the handle, `[0, range]`.
pub fn clamp_offset(offset: f64, range: f64) -> f64 {
    offset.clamp(0.0, range.max(0.0))
}
