use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn html_by_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Travel available to a handle: parent width minus handle width.
/// `None` while the container has no usable range (layout not ready).
#[inline]
pub fn usable_range(handle: &web::HtmlElement) -> Option<f64> {
    let parent = handle
        .parent_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())?;
    let range = (parent.offset_width() - handle.offset_width()) as f64;
    (range > 0.0).then_some(range)
}

/// Position a handle by its raw pixel offset from the container edge.
#[inline]
pub fn set_offset_px(handle: &web::HtmlElement, offset: f64) {
    let _ = handle
        .style()
        .set_property("left", &format!("{}px", offset));
}
