use crate::constants::*;
use crate::core::content::INSTRUCTIONS;
use crate::core::{CursorState, HomeOverlay, MenuState, MENU_GRID_SIZE, MENU_ROUTES};
use crate::dom;
use web_sys as web;

/// Reflect the home page overlay state into the DOM.
pub fn apply_home(document: &web::Document, overlay: &HomeOverlay) {
    set_fade(document, overlay.fade_opacity);
    dom::set_visible(document, INSTRUCTIONS_ID, overlay.instructions_visible());
    dom::set_visible(document, DESTINATION_LABEL_ID, overlay.destination_visible());
    dom::set_text(document, DESTINATION_LABEL_ID, overlay.destination_label());
}

#[inline]
pub fn set_fade(document: &web::Document, opacity: f32) {
    if let Some(el) = document.get_element_by_id(FADE_OVERLAY_ID) {
        let o = opacity.clamp(0.0, 1.0);
        // never intercept clicks while transparent
        let events = if o > 0.0 { "auto" } else { "none" };
        _ = el.set_attribute(
            "style",
            &format!("opacity:{:.3};pointer-events:{}", o, events),
        );
    }
}

pub fn show_home_layer(document: &web::Document, visible: bool) {
    dom::set_visible(document, HOME_LAYER_ID, visible);
    if visible {
        dom::set_text(document, INSTRUCTIONS_TEXT_ID, INSTRUCTIONS);
    } else {
        set_fade(document, 0.0);
    }
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: CursorState) {
    _ = canvas.style().set_property("cursor", cursor.css());
}

/// Build the fixed menu grid once; cells past the routes are placeholders.
pub fn build_menu(document: &web::Document) {
    let Some(grid) = document.get_element_by_id(MENU_GRID_ID) else {
        log::warn!("[menu] missing #{}", MENU_GRID_ID);
        return;
    };
    let mut html = String::new();
    for cell in 0..MENU_GRID_SIZE {
        let label = MENU_ROUTES.get(cell).map(|r| r.label()).unwrap_or("");
        let class = if label.is_empty() {
            "menu-cell placeholder"
        } else {
            "menu-cell"
        };
        html.push_str(&format!(
            "<button class='{}' {}='{}'>{}</button>",
            class, MENU_CELL_ATTR, cell, label
        ));
    }
    grid.set_inner_html(&html);
}

pub fn render_menu(document: &web::Document, menu: &MenuState) {
    dom::set_visible(document, MENU_GRID_ID, menu.is_open);
    if let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) {
        _ = toggle.set_attribute("aria-expanded", if menu.is_open { "true" } else { "false" });
    }
    let Some(grid) = document.get_element_by_id(MENU_GRID_ID) else {
        return;
    };
    let cells = grid.children();
    for i in 0..cells.length() {
        if let Some(cell) = cells.item(i) {
            let cl = cell.class_list();
            _ = if i as usize == menu.selected {
                cl.add_1("selected")
            } else {
                cl.remove_1("selected")
            };
        }
    }
}

pub fn update_clock(document: &web::Document) {
    let now = js_sys::Date::new_0();
    let text = crate::core::format_clock(now.get_hours(), now.get_minutes());
    dom::set_text(document, MENU_CLOCK_ID, &text);
}
