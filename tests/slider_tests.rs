// Host-side tests for the slider spec table and the url -> offset path.
// The panel crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
#[path = "../src/scale.rs"]
mod scale;
#[path = "../src/settings.rs"]
mod settings;

use settings::*;

#[test]
fn spec_table_covers_the_six_documented_ranges() {
    let expected = [
        ("carve", -5, 5),
        ("stance", -10, 10),
        ("aggressive", 0, 13),
        ("dynamic", -5, 5),
        ("roll", -5, 5),
        ("yaw", -5, 5),
    ];
    assert_eq!(SLIDERS.len(), expected.len());
    for (s, (key, min_value, max_value)) in SLIDERS.iter().zip(expected) {
        assert_eq!(s.key, key);
        assert_eq!((s.min_value, s.max_value), (min_value, max_value));
        assert!(s.min_value < s.max_value);
    }
}

#[test]
fn keys_and_selectors_are_unique() {
    for (i, a) in SLIDERS.iter().enumerate() {
        for b in SLIDERS.iter().skip(i + 1) {
            assert_ne!(a.key, b.key);
            assert_ne!(a.handle_selector, b.handle_selector);
        }
    }
}

#[test]
fn spec_lookup_matches_table_order() {
    for (i, s) in SLIDERS.iter().enumerate() {
        assert_eq!(s.id as usize, i);
        assert_eq!(spec(s.id).key, s.key);
    }
}

#[test]
fn url_value_lands_exactly_as_a_drag_would() {
    // stance=10 over a 200px range parks the handle at the right rail
    let update = deserialize("stance=10");
    let (id, value) = update.values[0];
    let s = spec(id);
    let offset = scale::clamp_offset(scale::to_offset(value, 200.0, s.min_value, s.max_value), 200.0);
    assert_eq!(offset, 200.0);
    assert_eq!(scale::to_value(offset, 200.0, s.min_value, s.max_value), Some(10));
}

#[test]
fn out_of_range_url_value_clamps_visually() {
    let update = deserialize("aggressive=99");
    let (id, value) = update.values[0];
    let s = spec(id);
    let offset = scale::clamp_offset(scale::to_offset(value, 300.0, s.min_value, s.max_value), 300.0);
    assert_eq!(scale::to_value(offset, 300.0, s.min_value, s.max_value), Some(13));
}

#[test]
fn every_slider_value_round_trips_through_its_own_spec() {
    for s in SLIDERS.iter() {
        for value in s.min_value..=s.max_value {
            let offset = scale::to_offset(value, 240.0, s.min_value, s.max_value);
            assert_eq!(
                scale::to_value(offset, 240.0, s.min_value, s.max_value),
                Some(value),
                "{} value={}",
                s.key,
                value
            );
        }
    }
}
