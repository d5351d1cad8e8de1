//! Share action: current settings as a full page URL on the clipboard.

use crate::constants::SHARE_BUTTON_ID;
use crate::dom;
use crate::settings::{self, Snapshot, Zone};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire(document: &web::Document, zone: Rc<RefCell<Zone>>) {
    let doc = document.clone();
    dom::add_click_listener(document, SHARE_BUTTON_ID, move || {
        let snapshot = snapshot_from_dom(&doc, *zone.borrow());
        match share_url(&snapshot) {
            Some(url) => spawn_local(copy_share_url(url)),
            None => log::warn!("[share] window location unavailable"),
        }
    });
}

/// Rebuild the snapshot from what the handles currently display.
pub fn snapshot_from_dom(document: &web::Document, zone: Zone) -> Snapshot {
    let values = settings::SLIDERS
        .iter()
        .map(|spec| {
            let value = dom::html_by_selector(document, spec.handle_selector)
                .and_then(|h| h.text_content())
                .and_then(|t| t.trim().parse().ok())
                .unwrap_or(0);
            (spec.id, value)
        })
        .collect();
    Snapshot { values, zone }
}

fn share_url(snapshot: &Snapshot) -> Option<String> {
    let location = web::window()?.location();
    let origin = location.origin().ok()?;
    let pathname = location.pathname().ok()?;
    Some(format!(
        "{}{}?{}",
        origin,
        pathname,
        settings::serialize(snapshot)
    ))
}

/// Clipboard write with a synchronous manual-copy fallback; never fatal.
async fn copy_share_url(url: String) {
    let window = match web::window() {
        Some(w) => w,
        None => return,
    };
    match clipboard_write(&window, &url) {
        Some(promise) => match JsFuture::from(promise).await {
            Ok(_) => {
                log::info!("[share] settings URL copied to clipboard");
                let _ = window
                    .alert_with_message(&format!("Settings URL copied to clipboard: {}", url));
            }
            Err(e) => {
                log::warn!("[share] clipboard write failed: {:?}", e);
                prompt_fallback(&window, &url);
            }
        },
        None => prompt_fallback(&window, &url),
    }
}

// The async clipboard only exists in secure contexts.
fn clipboard_write(window: &web::Window, url: &str) -> Option<js_sys::Promise> {
    if !window.is_secure_context() {
        return None;
    }
    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        return None;
    }
    Some(clipboard.write_text(url))
}

fn prompt_fallback(window: &web::Window, url: &str) {
    let _ = window.prompt_with_message_and_default("Copy this URL:", url);
}
