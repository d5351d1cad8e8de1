//! Exclusive two-option zone engagement selector.

use crate::constants::{DUAL_ZONE_ID, SINGLE_ZONE_ID, ZONE_SELECTED_CLASS};
use crate::dom;
use crate::settings::Zone;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mark `zone` as selected and the other option as deselected.
pub fn select(document: &web::Document, zone: Zone) {
    set_selected(document, DUAL_ZONE_ID, zone == Zone::Dual);
    set_selected(document, SINGLE_ZONE_ID, zone == Zone::Single);
}

fn set_selected(document: &web::Document, element_id: &str, selected: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let classes = el.class_list();
        if selected {
            let _ = classes.add_1(ZONE_SELECTED_CLASS);
        } else {
            let _ = classes.remove_1(ZONE_SELECTED_CLASS);
        }
    }
}

/// Click wiring for both options; updates the shared state and the visuals.
pub fn wire(document: &web::Document, state: Rc<RefCell<Zone>>) {
    for (element_id, zone) in [(DUAL_ZONE_ID, Zone::Dual), (SINGLE_ZONE_ID, Zone::Single)] {
        let doc = document.clone();
        let state = state.clone();
        dom::add_click_listener(document, element_id, move || {
            *state.borrow_mut() = zone;
            select(&doc, zone);
            log::info!("[zone] {} selected", zone.as_token());
        });
    }
}
