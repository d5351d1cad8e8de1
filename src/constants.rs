/// DOM ids, selectors, and visual tuning constants for the panel.
///
/// These keep magic strings and numbers out of the wiring code.

// Zone engagement selector
pub const DUAL_ZONE_ID: &str = "dual-zone";
pub const SINGLE_ZONE_ID: &str = "single-zone";
pub const ZONE_SELECTED_CLASS: &str = "zone-selected";

// Share action
pub const SHARE_BUTTON_ID: &str = "share-button";

// Stance feedback line
pub const PIVOT_LINE_SELECTOR: &str = ".pivot-line";
// Tilt at full stance deflection (degrees); nose-high positive
pub const PIVOT_SKEW_MAX_DEG: f64 = 5.0;

// Carve wave canvas (matches the .carve-line box)
pub const CARVE_LINE_SELECTOR: &str = ".carve-line";
pub const CARVE_CANVAS_ID: &str = "carve-canvas";
pub const CARVE_CANVAS_WIDTH: u32 = 400;
pub const CARVE_CANVAS_HEIGHT: u32 = 50;
pub const CARVE_WAVE_AMPLITUDE: f64 = 14.0;
pub const CARVE_WAVE_CYCLES: f64 = 3.0;
pub const CARVE_WAVE_STEP_PX: f64 = 2.0;
pub const CARVE_WAVE_LINE_WIDTH: f64 = 2.0;
pub const CARVE_WAVE_STROKE: &str = "#4a90d9";
