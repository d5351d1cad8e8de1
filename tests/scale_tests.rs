// Host-side tests for the pure offset<->value mapping.
// The panel crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
#[path = "../src/scale.rs"]
mod scale;

use scale::*;

#[test]
fn centered_offset_maps_to_zero_for_symmetric_range() {
    // carve: 200px of travel, [-5, 5], handle dead centre
    assert_eq!(to_value(100.0, 200.0, -5, 5), Some(0));
}

#[test]
fn rail_offsets_map_to_the_extremes() {
    assert_eq!(to_value(0.0, 200.0, -5, 5), Some(-5));
    assert_eq!(to_value(200.0, 200.0, -5, 5), Some(5));
    assert_eq!(to_value(0.0, 200.0, 0, 13), Some(0));
    assert_eq!(to_value(200.0, 200.0, 0, 13), Some(13));
}

#[test]
fn max_value_parks_the_handle_at_the_right_rail() {
    // stance=10 over a 200px range
    let offset = to_offset(10, 200.0, -10, 10);
    assert!((offset - 200.0).abs() < 1e-9);
}

#[test]
fn round_trip_is_identity_for_every_value() {
    for &range in &[37.0, 200.0, 463.0, 1000.0] {
        for (min_value, max_value) in [(-5, 5), (-10, 10), (0, 13)] {
            for value in min_value..=max_value {
                let offset = to_offset(value, range, min_value, max_value);
                assert_eq!(
                    to_value(offset, range, min_value, max_value),
                    Some(value),
                    "range={} min={} max={} value={}",
                    range,
                    min_value,
                    max_value,
                    value
                );
            }
        }
    }
}

#[test]
fn clamped_offsets_keep_values_in_bounds() {
    // sweep pointer deltas well past both rails
    for step in 0..=400 {
        let offset = clamp_offset(step as f64 - 100.0, 200.0);
        assert!((0.0..=200.0).contains(&offset));
        let value = to_value(offset, 200.0, -5, 5).unwrap();
        assert!((-5..=5).contains(&value));
    }
}

#[test]
fn zero_range_is_layout_not_ready() {
    assert_eq!(to_value(10.0, 0.0, -5, 5), None);
    assert_eq!(to_value(10.0, -3.0, -5, 5), None);
}

#[test]
fn halfway_rounds_away_from_zero() {
    // +0.5 on a [0, 1] slider and -0.5 on a [-1, 0] slider
    assert_eq!(to_value(100.0, 200.0, 0, 1), Some(1));
    assert_eq!(to_value(100.0, 200.0, -1, 0), Some(-1));
}

#[test]
fn out_of_range_value_clamps_at_the_rail() {
    // an out-of-range url value maps past the rail; clamping pins the value
    let offset = to_offset(42, 200.0, -5, 5);
    assert!(offset > 200.0);
    let clamped = clamp_offset(offset, 200.0);
    assert_eq!(to_value(clamped, 200.0, -5, 5), Some(5));
}

#[test]
fn degenerate_span_yields_the_leftmost_offset() {
    assert_eq!(to_offset(3, 200.0, 3, 3), 0.0);
}

#[test]
fn clamp_offset_tolerates_a_collapsed_range() {
    assert_eq!(clamp_offset(12.0, 0.0), 0.0);
    assert_eq!(clamp_offset(-12.0, -1.0), 0.0);
}
