//! Wiring and refresh path for the six slider handles.
//!
//! One generic path instantiated per `SliderSpec`; a URL load drives the
//! same refresh as a live drag.

use crate::constants::{PIVOT_LINE_SELECTOR, PIVOT_SKEW_MAX_DEG};
use crate::dom;
use crate::drag;
use crate::scale;
use crate::settings::{self, SliderId, SliderSpec};
use web_sys as web;

/// Attach a drag controller to every handle in the spec table and seed each
/// label from the handle's current position.
pub fn wire_all(document: &web::Document) -> anyhow::Result<()> {
    for spec in settings::SLIDERS.iter() {
        let handle = dom::html_by_selector(document, spec.handle_selector)
            .ok_or_else(|| anyhow::anyhow!("missing slider handle {}", spec.handle_selector))?;
        let doc = document.clone();
        drag::attach(document, &handle, move |h, offset| {
            refresh_handle(&doc, spec, h, offset);
        });
        refresh_handle(document, spec, &handle, handle.offset_left() as f64);
    }
    Ok(())
}

/// Recompute and render the value a handle displays at `offset`.
/// Skipped silently while the container has no usable range.
pub fn refresh_handle(
    document: &web::Document,
    spec: &SliderSpec,
    handle: &web::HtmlElement,
    offset: f64,
) {
    let range = match dom::usable_range(handle) {
        Some(r) => r,
        None => return,
    };
    let value = match scale::to_value(offset, range, spec.min_value, spec.max_value) {
        Some(v) => v,
        None => return,
    };
    handle.set_text_content(Some(&value.to_string()));
    if spec.id == SliderId::Stance {
        skew_pivot_line(document, spec, value);
    }
}

// Stance tilts the pivot line: nose-high for positive values, tail-high
// for negative, PIVOT_SKEW_MAX_DEG at full deflection.
fn skew_pivot_line(document: &web::Document, spec: &SliderSpec, value: i32) {
    if let Some(line) = dom::html_by_selector(document, PIVOT_LINE_SELECTOR) {
        let skew_deg = value as f64 / spec.max_value as f64 * PIVOT_SKEW_MAX_DEG;
        let style = line.style();
        let _ = style.set_property("transform-origin", "center");
        let _ = style.set_property("transform", &format!("skewY({}deg)", skew_deg));
    }
}

/// Apply a decoded URL update to the handles, exactly as if each slider had
/// been dragged to its value. Sliders not present in the update keep their
/// current position; a not-yet-laid-out container skips its slider.
pub fn apply_update(document: &web::Document, update: &settings::Update) {
    for (id, value) in &update.values {
        let spec = settings::spec(*id);
        let handle = match dom::html_by_selector(document, spec.handle_selector) {
            Some(h) => h,
            None => continue,
        };
        let range = match dom::usable_range(&handle) {
            Some(r) => r,
            None => continue,
        };
        let offset = scale::clamp_offset(
            scale::to_offset(*value, range, spec.min_value, spec.max_value),
            range,
        );
        dom::set_offset_px(&handle, offset);
        refresh_handle(document, spec, &handle, offset);
    }
}
