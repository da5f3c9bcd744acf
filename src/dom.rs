use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Seconds on the page's performance clock (same base as rAF timestamps).
#[inline]
pub fn now_sec() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong type: {:?}", id, e))
}

/// Click listener on an element by id; dropping the guard removes it.
#[inline]
pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(&web::Event) + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(EventListener::new(&el, "click", move |ev| handler(ev)))
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            _ = el.remove_attribute("style");
        } else {
            _ = cl.add_1("hidden");
            // fallback for environments without the CSS class
            _ = el.set_attribute("style", "display:none");
        }
    }
}

/// Walk up from an event target to the first element carrying `attr`.
pub fn closest_with_attr(target: Option<web::EventTarget>, attr: &str) -> Option<(web::Element, String)> {
    let mut el = target?.dyn_into::<web::Element>().ok();
    while let Some(e) = el {
        if let Some(v) = e.get_attribute(attr) {
            return Some((e, v));
        }
        el = e.parent_element();
    }
    None
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
