use crate::constants::*;
use crate::core::{cell_route, route_menu_key, Key, ListenerSlot, MenuState, Routed};
use crate::{dom, navigate, overlay, App, HistoryMode};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Menu state plus the window/document listeners that only exist while the
/// menu is open (grid keys and click-outside).
#[derive(Clone)]
pub struct MenuControl {
    document: web::Document,
    state: Rc<RefCell<MenuState>>,
    open_listeners: Rc<RefCell<ListenerSlot<[EventListener; 2]>>>,
    app: Weak<RefCell<App>>,
}

impl MenuControl {
    pub fn state(&self) -> &Rc<RefCell<MenuState>> {
        &self.state
    }

    pub fn toggle(&self) {
        self.state.borrow_mut().toggle();
        self.sync();
    }

    pub fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }

    /// Render the grid and attach or drop the open-menu listeners to match.
    fn sync(&self) {
        let open = {
            let m = self.state.borrow();
            overlay::render_menu(&self.document, &m);
            m.is_open
        };
        // listeners hold a clone; dropping them on close breaks the cycle
        let control = self.clone();
        self.open_listeners
            .borrow_mut()
            .sync(open, move || control.wire_open_listeners());
    }

    fn handle_key(&self, key: Key) -> Routed {
        let routed = route_menu_key(key, &mut self.state.borrow_mut());
        match routed {
            Routed::MenuActivate(cell) => {
                self.sync();
                if let Some(route) = cell_route(cell) {
                    navigate(&self.app, route, HistoryMode::Push);
                }
            }
            Routed::MenuMoved(_) | Routed::MenuClosed => self.sync(),
            _ => {}
        }
        routed
    }

    fn wire_open_listeners(self) -> Option<[EventListener; 2]> {
        let keys = self.clone();
        let keydown = super::keyboard::wire_keydown(move |key| keys.handle_key(key))?;

        // click outside the menu closes it
        let document = self.document.clone();
        let outside = EventListener::new(&document, "pointerdown", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .zip(self.document.get_element_by_id(MENU_ROOT_ID))
                .map(|(node, root)| root.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                self.close();
            }
        });
        Some([keydown, outside])
    }
}

/// Navbar listeners that live as long as the app: toggle, grid clicks, clock.
pub struct MenuWiring {
    control: MenuControl,
    _listeners: Vec<EventListener>,
    _clock: Interval,
}

impl MenuWiring {
    pub fn control(&self) -> &MenuControl {
        &self.control
    }
}

pub fn wire_menu(document: &web::Document, app: Weak<RefCell<App>>) -> MenuWiring {
    let control = MenuControl {
        document: document.clone(),
        state: Rc::new(RefCell::new(MenuState::default())),
        open_listeners: Rc::new(RefCell::new(ListenerSlot::default())),
        app: app.clone(),
    };
    overlay::build_menu(document);
    overlay::render_menu(document, &control.state.borrow());
    overlay::update_clock(document);

    let mut listeners = Vec::new();

    let toggle = control.clone();
    if let Some(l) = dom::on_click(document, MENU_TOGGLE_ID, move |_| toggle.toggle()) {
        listeners.push(l);
    }

    let cells = control.clone();
    if let Some(l) = dom::on_click(document, MENU_GRID_ID, move |ev| {
        let Some((_, cell)) = dom::closest_with_attr(ev.target(), MENU_CELL_ATTR) else {
            return;
        };
        let Some(route) = cell.parse::<usize>().ok().and_then(cell_route) else {
            return;
        };
        cells.close();
        navigate(&app, route, HistoryMode::Push);
    }) {
        listeners.push(l);
    }

    let doc = document.clone();
    let clock = Interval::new(CLOCK_REFRESH_MS, move || overlay::update_clock(&doc));

    MenuWiring {
        control,
        _listeners: listeners,
        _clock: clock,
    }
}
