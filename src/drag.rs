//! Generic drag controller for slider handles.
//!
//! One controller is attached per handle; the per-gesture session lives
//! behind `Rc<RefCell<_>>` and is shared by the three closures below.

use crate::dom;
use crate::scale;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Transient per-gesture state. Idle between gestures.
#[derive(Default, Clone, Copy)]
pub struct DragSession {
    pub active: bool,
    pub origin_client_x: f64,
    pub origin_offset: f64,
}

/// Horizontal client coordinate, from whichever source the event carries.
/// Touch events report the first touch point.
fn gesture_client_x(ev: &web::Event) -> Option<f64> {
    if let Some(touch_ev) = ev.dyn_ref::<web::TouchEvent>() {
        return touch_ev.touches().get(0).map(|t| t.client_x() as f64);
    }
    ev.dyn_ref::<web::MouseEvent>().map(|m| m.client_x() as f64)
}

/// Wire mouse and touch drag handling to `handle`.
///
/// Start listens on the handle itself; move/end listen at document scope so
/// a gesture keeps tracking after the pointer leaves the handle. Move and
/// end are no-op guards while no session is active, which also keeps
/// concurrent gestures on different handles independent.
pub fn attach(
    document: &web::Document,
    handle: &web::HtmlElement,
    on_update: impl Fn(&web::HtmlElement, f64) + 'static,
) {
    let session = Rc::new(RefCell::new(DragSession::default()));

    // gesture start
    {
        let session = session.clone();
        let handle_start = handle.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            if let Some(client_x) = gesture_client_x(&ev) {
                let mut s = session.borrow_mut();
                s.active = true;
                s.origin_client_x = client_x;
                s.origin_offset = handle_start.offset_left() as f64;
                log::info!("[drag] begin at offset {:.0}", s.origin_offset);
            }
        }) as Box<dyn FnMut(_)>);
        for kind in ["mousedown", "touchstart"] {
            let _ = handle.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // gesture move
    {
        let session = session.clone();
        let handle_move = handle.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if !session.borrow().active {
                return;
            }
            let client_x = match gesture_client_x(&ev) {
                Some(x) => x,
                None => return,
            };
            // Skipped silently until the container has a usable range.
            let range = match dom::usable_range(&handle_move) {
                Some(r) => r,
                None => return,
            };
            let (origin_client_x, origin_offset) = {
                let s = session.borrow();
                (s.origin_client_x, s.origin_offset)
            };
            let offset = scale::clamp_offset(origin_offset + client_x - origin_client_x, range);
            dom::set_offset_px(&handle_move, offset);
            on_update(&handle_move, offset);
        }) as Box<dyn FnMut(_)>);
        for kind in ["mousemove", "touchmove"] {
            let _ =
                document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // gesture end, anywhere in the document
    {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            session.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        for kind in ["mouseup", "touchend"] {
            let _ =
                document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
