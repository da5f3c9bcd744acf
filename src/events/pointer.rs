use crate::constants::{CLICK_SLOP_PX, INSTRUCTIONS_DISMISS_ID};
use crate::core::{MenuState, PointerInput, Routed};
use crate::frame::HomeContext;
use crate::{dom, render};
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press bookkeeping used to tell a click from the end of a drag.
#[derive(Default, Clone, Copy)]
struct PressState {
    last_x: Option<f32>,
    travel: f32,
}

/// Listeners owned by a mounted home page. The document-level move/up pair
/// only exists between a press on the carousel and its release.
pub struct HomePointer {
    _listeners: Vec<EventListener>,
    drag: Rc<RefCell<Option<[EventListener; 2]>>>,
}

impl Drop for HomePointer {
    fn drop(&mut self) {
        // a drag still in progress holds the wiring alive through its closures
        self.drag.borrow_mut().take();
    }
}

#[derive(Clone)]
struct PointerWiring {
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<HomeContext>>,
    menu: Rc<RefCell<MenuState>>,
    press: Rc<RefCell<PressState>>,
    drag: Rc<RefCell<Option<[EventListener; 2]>>>,
}

impl PointerWiring {
    fn route(&self, input: PointerInput) -> Routed {
        let menu_open = self.menu.borrow().is_open;
        self.ctx
            .borrow_mut()
            .scene
            .handle_pointer(input, menu_open, dom::now_sec())
    }

    /// Pick the item under the pointer, plus whether the carousel group was hit.
    fn pick(&self, ev: &web::MouseEvent) -> (Option<usize>, bool) {
        let css = render::pointer_canvas_css(ev, &self.canvas);
        let ctx = self.ctx.borrow();
        let (ro, rd) = render::screen_to_world_ray(&self.canvas, css, &ctx.scene.camera);
        let item = ctx.scene.carousel.pick(ro, rd).map(|(i, _)| i);
        let group = item.is_some() || ctx.scene.carousel.hits_group(ro, rd);
        (item, group)
    }
}

pub fn wire_home_pointer(
    canvas: &web::HtmlCanvasElement,
    ctx: Rc<RefCell<HomeContext>>,
    menu: Rc<RefCell<MenuState>>,
) -> HomePointer {
    let w = PointerWiring {
        canvas: canvas.clone(),
        ctx,
        menu,
        press: Rc::new(RefCell::new(PressState::default())),
        drag: Rc::new(RefCell::new(None)),
    };
    let mut listeners = vec![
        wire_pointerdown(&w),
        wire_hover(&w),
        wire_leave(&w),
        wire_click(&w),
    ];
    if let Some(doc) = dom::window_document() {
        let ctx = w.ctx.clone();
        if let Some(l) = dom::on_click(&doc, INSTRUCTIONS_DISMISS_ID, move |_| {
            ctx.borrow_mut().scene.navigator.dismiss_instructions();
        }) {
            listeners.push(l);
        }
    }
    HomePointer {
        _listeners: listeners,
        drag: w.drag,
    }
}

fn wire_pointerdown(w: &PointerWiring) -> EventListener {
    let w = w.clone();
    let canvas = w.canvas.clone();
    EventListener::new_with_options(
        &canvas,
        "pointerdown",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let x = ev.client_x() as f32;
            *w.press.borrow_mut() = PressState {
                last_x: Some(x),
                travel: 0.0,
            };
            let (_, group) = w.pick(ev);
            if !group {
                return;
            }
            if w.route(PointerInput::Down { x }) == Routed::Consumed {
                begin_drag(&w);
                ev.prevent_default();
            }
        },
    )
}

/// Track the drag on the document so it survives leaving the canvas.
fn begin_drag(w: &PointerWiring) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    let wm = w.clone();
    let on_move = EventListener::new(&doc, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let x = ev.client_x() as f32;
        {
            let mut press = wm.press.borrow_mut();
            if let Some(last) = press.last_x {
                press.travel += (x - last).abs();
            }
            press.last_x = Some(x);
        }
        wm.route(PointerInput::Move { x });
    });
    let wu = w.clone();
    let on_up = EventListener::new(&doc, "pointerup", move |_ev| {
        if let Routed::SelectionChanged(index) = wu.route(PointerInput::Up) {
            log::debug!("[carousel] drag released on {}", index);
        }
        // removes both document listeners, this one included
        wu.drag.borrow_mut().take();
    });
    *w.drag.borrow_mut() = Some([on_move, on_up]);
}

fn wire_hover(w: &PointerWiring) -> EventListener {
    let w = w.clone();
    let canvas = w.canvas.clone();
    EventListener::new(&canvas, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if w.drag.borrow().is_some() {
            return;
        }
        let (item, _) = w.pick(ev);
        w.ctx.borrow_mut().hovered = item;
        w.route(PointerInput::Hover(item));
    })
}

fn wire_leave(w: &PointerWiring) -> EventListener {
    let w = w.clone();
    let canvas = w.canvas.clone();
    EventListener::new(&canvas, "pointerleave", move |_ev| {
        w.ctx.borrow_mut().hovered = None;
        w.route(PointerInput::Hover(None));
    })
}

fn wire_click(w: &PointerWiring) -> EventListener {
    let w = w.clone();
    let canvas = w.canvas.clone();
    EventListener::new(&canvas, "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if w.press.borrow().travel > CLICK_SLOP_PX {
            return;
        }
        let (item, _) = w.pick(ev);
        if let Some(index) = item {
            if let Routed::Activated(a) = w.route(PointerInput::Click(index)) {
                log::info!("[carousel] clicked front item {}", a.index);
            }
        }
    })
}
