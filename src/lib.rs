#![cfg(target_arch = "wasm32")]
use crate::core::{Route, Router};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod pages;
mod render;

use constants::APP_CANVAS_ID;

/// Whether showing a route adds a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HistoryMode {
    Push,
    /// The browser is already on this entry (initial load, back/forward).
    Current,
}

/// Route change from anywhere in the app.
///
/// Mounting happens on a fresh task: the caller is often a frame callback or
/// listener that belongs to the page being replaced.
pub(crate) fn navigate(app: &Weak<RefCell<App>>, route: Route, mode: HistoryMode) {
    let app = app.clone();
    spawn_local(async move {
        if let Some(app) = app.upgrade() {
            app.borrow_mut().show(route, mode);
        }
    });
}

/// History-API router handed to the home scene.
pub(crate) struct WebRouter {
    app: Weak<RefCell<App>>,
}

impl Router for WebRouter {
    fn navigate(&mut self, route: Route) {
        navigate(&self.app, route, HistoryMode::Push);
    }
}

enum Page {
    Home(frame::HomePage),
    Content(pages::ContentPage),
}

impl Page {
    fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::Content(p) => p.route(),
        }
    }
}

pub(crate) struct App {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    gpu: Option<Rc<RefCell<render::GpuState>>>,
    page: Option<Page>,
    this: Weak<RefCell<App>>,
    _listeners: Vec<EventListener>,
    menu: events::MenuWiring,
}

impl App {
    /// Unmount the current page, then mount `route`.
    fn show(&mut self, route: Route, mode: HistoryMode) {
        if self.page.as_ref().map(Page::route) == Some(route) {
            return;
        }
        if mode == HistoryMode::Push {
            push_history(route);
        }
        self.page = None;
        self.menu.control().close();
        self.page = match route {
            Route::Home => Some(Page::Home(frame::HomePage::mount(
                &self.document,
                &self.canvas,
                self.gpu.clone(),
                WebRouter {
                    app: self.this.clone(),
                },
                self.menu.control().state().clone(),
            ))),
            other => match pages::ContentPage::mount(&self.document, other, self.this.clone()) {
                Ok(p) => Some(Page::Content(p)),
                Err(e) => {
                    log::error!("[router] mount {} failed: {:?}", other.path(), e);
                    None
                }
            },
        };
        log::info!("[router] now at {}", route.path());
    }
}

fn push_history(route: Route) {
    let Some(history) = web::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        log::warn!("[router] pushState failed: {:?}", e);
    }
}

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> EventListener {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    EventListener::new(window, "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

fn wire_popstate(window: &web::Window, app: Weak<RefCell<App>>) -> EventListener {
    EventListener::new(window, "popstate", move |_| {
        let path = web::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        navigate(&app, Route::from_path(&path), HistoryMode::Current);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, APP_CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let resize = wire_canvas_resize(&window, &canvas);

    // Without WebGPU the overlays and navigation still work
    let gpu = frame::init_gpu(&canvas)
        .await
        .map(|g| Rc::new(RefCell::new(g)));

    let app = Rc::new_cyclic(|this: &Weak<RefCell<App>>| {
        RefCell::new(App {
            document: document.clone(),
            canvas: canvas.clone(),
            gpu,
            page: None,
            this: this.clone(),
            _listeners: vec![resize, wire_popstate(&window, this.clone())],
            menu: events::wire_menu(&document, this.clone()),
        })
    });

    let path = window
        .location()
        .pathname()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    app.borrow_mut()
        .show(Route::from_path(&path), HistoryMode::Current);

    // The app lives as long as the page; listeners only hold weak handles.
    std::mem::forget(app);
    Ok(())
}
