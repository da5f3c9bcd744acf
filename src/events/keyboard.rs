use crate::core::{Key, Routed};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window keydown for one input owner (the home carousel, or the menu while
/// open). The owner holds the returned listener; dropping it detaches.
/// Handled keys don't scroll the page.
pub fn wire_keydown(mut handle: impl FnMut(Key) -> Routed + 'static) -> Option<EventListener> {
    let window = web::window()?;
    Some(EventListener::new_with_options(
        &window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
                return;
            };
            if typing_in_field(ev) {
                return;
            }
            let key = Key::from_dom(&ev.key());
            if key == Key::Other {
                return;
            }
            if handle(key).prevents_default() {
                ev.prevent_default();
            }
        },
    ))
}

/// Arrow keys and space belong to form fields while one has focus.
fn typing_in_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
        .unwrap_or(false)
}
