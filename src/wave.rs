//! Static wavy line inside the carve slider, purely cosmetic.

use crate::constants::{
    CARVE_CANVAS_HEIGHT, CARVE_CANVAS_ID, CARVE_CANVAS_WIDTH, CARVE_LINE_SELECTOR,
    CARVE_WAVE_AMPLITUDE, CARVE_WAVE_CYCLES, CARVE_WAVE_LINE_WIDTH, CARVE_WAVE_STEP_PX,
    CARVE_WAVE_STROKE,
};
use crate::dom;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the carve canvas inside `.carve-line` and draw the wave once.
/// Every failure path is a silent no-op; the panel works without the wave.
pub fn install_carve_wave(document: &web::Document) {
    let host = match dom::html_by_selector(document, CARVE_LINE_SELECTOR) {
        Some(h) => h,
        None => return,
    };
    let canvas = match document.create_element("canvas") {
        Ok(el) => match el.dyn_into::<web::HtmlCanvasElement>() {
            Ok(c) => c,
            Err(_) => return,
        },
        Err(_) => return,
    };
    canvas.set_id(CARVE_CANVAS_ID);
    canvas.set_width(CARVE_CANVAS_WIDTH);
    canvas.set_height(CARVE_CANVAS_HEIGHT);
    if host.append_child(&canvas).is_err() {
        return;
    }
    draw_wave(&canvas);
}

fn draw_wave(canvas: &web::HtmlCanvasElement) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(c) => c,
            Err(_) => return,
        },
        _ => return,
    };
    let width = canvas.width() as f64;
    let mid = canvas.height() as f64 / 2.0;

    ctx.begin_path();
    ctx.move_to(0.0, mid);
    let mut x = 0.0;
    while x <= width {
        let y = mid + CARVE_WAVE_AMPLITUDE * (x / width * CARVE_WAVE_CYCLES * TAU).sin();
        ctx.line_to(x, y);
        x += CARVE_WAVE_STEP_PX;
    }
    ctx.set_line_width(CARVE_WAVE_LINE_WIDTH);
    ctx.set_stroke_style_str(CARVE_WAVE_STROKE);
    ctx.stroke();
}
