#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod drag;
mod scale;
mod settings;
mod share;
mod sliders;
mod wave;
mod zone;

use settings::Zone;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tune-panel starting");

    let document =
        dom::window_document().ok_or_else(|| JsValue::from_str("no window/document"))?;

    // Handle geometry is meaningless before layout; defer until the page
    // has finished loading unless it already has.
    if document.ready_state() == "complete" {
        run_init();
    } else {
        let closure = Closure::wrap(Box::new(run_init) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            let _ =
                window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let zone_state = Rc::new(RefCell::new(Zone::default()));
    zone::select(&document, *zone_state.borrow());
    zone::wire(&document, zone_state.clone());

    sliders::wire_all(&document)?;
    wave::install_carve_wave(&document);
    share::wire(&document, zone_state.clone());

    apply_url_settings(&document, &zone_state);
    Ok(())
}

/// Re-render handles and zone from the page URL, as if the user had dragged
/// and clicked them there.
fn apply_url_settings(document: &web::Document, zone_state: &Rc<RefCell<Zone>>) {
    let window = match web::window() {
        Some(w) => w,
        None => return,
    };
    let search = window.location().search().unwrap_or_default();
    if search.is_empty() {
        return;
    }
    let update = settings::deserialize(&search);
    if update.is_empty() {
        return;
    }
    log::info!(
        "[settings] applying {} slider value(s) from url",
        update.values.len()
    );
    sliders::apply_update(document, &update);
    if let Some(zone) = update.zone {
        *zone_state.borrow_mut() = zone;
        zone::select(document, zone);
    }
}
