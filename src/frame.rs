use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{
    CancelHandle, Carousel, FlyInParams, FrameScheduler, FrameToken, HomeOverlay, HomeScene,
    IntroParams, Key, MenuState, Navigator, Routed, SceneCamera,
};
use gloo::events::EventListener;
use crate::render::{self, BallInstance};
use crate::{dom, events, overlay, WebRouter};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind the core [`FrameScheduler`] seam.
#[derive(Clone)]
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let id = match (web::window(), self.callback.borrow().as_ref()) {
            (Some(w), Some(cb)) => w
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .unwrap_or_else(|e| {
                    log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                    0
                }),
            _ => 0,
        };
        FrameToken(id as u64)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(token.0 as i32);
        }
    }
}

pub type WebHomeScene = HomeScene<SceneCamera, RafScheduler>;

/// Everything the home page touches once per animation frame.
pub struct HomeContext {
    pub scene: WebHomeScene,
    pub hovered: Option<usize>,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    gpu: Option<Rc<RefCell<render::GpuState>>>,
    router: WebRouter,
    last_instant: Instant,
    shown_overlay: Option<HomeOverlay>,
}

impl HomeContext {
    pub fn frame(&mut self, now: f64) {
        if !self.scene.on_frame(now, &mut self.router) {
            return;
        }
        self.draw(now);
    }

    fn draw(&mut self, now: f64) {
        let instant = Instant::now();
        let dt_sec = (instant - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = instant;

        let current = self.scene.navigator.overlay();
        if self.shown_overlay.as_ref() != Some(current) {
            overlay::apply_home(&self.document, current);
            self.shown_overlay = Some(current.clone());
        }
        overlay::set_cursor(&self.canvas, self.scene.carousel.cursor());

        let w = self.canvas.width();
        let h = self.canvas.height();
        if w > 0 && h > 0 {
            self.scene.camera.aspect = w as f32 / h as f32;
        }
        let Some(gpu) = &self.gpu else {
            return;
        };
        let balls = ball_instances(&self.scene.carousel, self.hovered, now);
        let mut g = gpu.borrow_mut();
        g.resize_if_needed(w, h);
        g.set_camera(&self.scene.camera);
        g.set_balls(&balls);
        if let Err(e) = g.render(dt_sec) {
            log::error!("render error: {:?}", e);
        }
    }

    pub fn handle_key(&mut self, key: Key, menu: &mut MenuState) -> Routed {
        self.scene.handle_key(key, menu)
    }
}

fn ball_instances(carousel: &Carousel, hovered: Option<usize>, now: f64) -> Vec<BallInstance> {
    let radius = carousel.config().item_radius;
    carousel
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| BallInstance {
            center: carousel.item_world_position(i),
            radius,
            selected: i == carousel.selected_index(),
            hovered: hovered == Some(i),
            bounce: item.animation_amount(now),
        })
        .collect()
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// A mounted home page. Dropping it cancels the frame loop and removes its
/// listeners.
pub struct HomePage {
    ctx: Rc<RefCell<HomeContext>>,
    callback: FrameCallback,
    cancel: CancelHandle<RafScheduler>,
    _pointer: events::HomePointer,
    _keydown: Option<EventListener>,
}

impl HomePage {
    pub fn mount(
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
        gpu: Option<Rc<RefCell<render::GpuState>>>,
        router: WebRouter,
        menu: Rc<RefCell<MenuState>>,
    ) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler {
            callback: callback.clone(),
        };
        let scene = HomeScene::new(
            SceneCamera::default(),
            Carousel::with_default_items(),
            Navigator::new(IntroParams::default(), FlyInParams::default()),
            scheduler,
        );
        let ctx = Rc::new(RefCell::new(HomeContext {
            scene,
            hovered: None,
            document: document.clone(),
            canvas: canvas.clone(),
            gpu,
            router,
            last_instant: Instant::now(),
            shown_overlay: None,
        }));

        let ctx_tick = ctx.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts_ms: f64| {
            ctx_tick.borrow_mut().frame(ts_ms / 1000.0);
        }) as Box<dyn FnMut(f64)>));

        overlay::show_home_layer(document, true);
        let keydown = wire_carousel_keys(ctx.clone(), menu.clone());
        let pointer = events::wire_home_pointer(canvas, ctx.clone(), menu);
        let cancel = ctx.borrow().scene.frames().cancel_handle();
        ctx.borrow_mut().scene.mount(dom::now_sec());
        log::info!("[nav] home mounted");

        Self {
            ctx,
            callback,
            cancel,
            _pointer: pointer,
            _keydown: keydown,
        }
    }

    pub fn context(&self) -> &Rc<RefCell<HomeContext>> {
        &self.ctx
    }
}

/// Arrow keys for the carousel. An open menu has its own keydown listener
/// and takes every key while it is open.
fn wire_carousel_keys(
    ctx: Rc<RefCell<HomeContext>>,
    menu: Rc<RefCell<MenuState>>,
) -> Option<EventListener> {
    events::wire_keydown(move |key| {
        let Ok(mut menu) = menu.try_borrow_mut() else {
            return Routed::Ignored;
        };
        if menu.is_open {
            return Routed::Ignored;
        }
        let Ok(mut ctx) = ctx.try_borrow_mut() else {
            return Routed::Ignored;
        };
        ctx.handle_key(key, &mut menu)
    })
}

impl Drop for HomePage {
    fn drop(&mut self) {
        // no frame may arrive once the closure below is gone
        self.cancel.cancel();
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.scene.unmount();
            overlay::show_home_layer(&ctx.document, false);
        }
        // break the closure -> context -> scheduler -> closure cycle
        self.callback.borrow_mut().take();
    }
}
