//! Home page state machine: intro → idle carousel → fly-in → route change.

use super::camera::{CameraRig, FlyInParams, FlyInTransition, IntroParams, IntroTransition, TickOutcome};
use super::carousel::{Activation, Carousel};
use super::constants::DESTINATION_LABELS;
use super::input::{InputRouter, Key, PointerInput, Routed};
use super::menu::MenuState;
use super::routes::Route;
use super::schedule::{FrameLoop, FrameScheduler};

/// Page navigation provided by the host (history API in the browser).
pub trait Router {
    fn navigate(&mut self, route: Route);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    IntroPlaying,
    Idle,
    FlyingIn,
    /// Terminal for this page instance.
    Navigated,
}

/// DOM-facing state of the home page overlays.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeOverlay {
    pub intro_complete: bool,
    pub show_instructions: bool,
    pub show_destination: bool,
    pub selected: usize,
    pub fade_opacity: f32,
}

impl Default for HomeOverlay {
    fn default() -> Self {
        Self {
            intro_complete: false,
            show_instructions: true,
            show_destination: true,
            selected: 0,
            fade_opacity: 0.0,
        }
    }
}

impl HomeOverlay {
    pub fn instructions_visible(&self) -> bool {
        self.intro_complete && self.show_instructions
    }

    pub fn destination_visible(&self) -> bool {
        self.intro_complete && self.show_destination
    }

    pub fn destination_label(&self) -> &'static str {
        DESTINATION_LABELS.get(self.selected).copied().unwrap_or("")
    }
}

pub struct Navigator {
    phase: NavPhase,
    intro: IntroTransition,
    fly_params: FlyInParams,
    fly_in: Option<(FlyInTransition, usize)>,
    overlay: HomeOverlay,
}

impl Navigator {
    pub fn new(intro: IntroParams, fly_params: FlyInParams) -> Self {
        Self {
            phase: NavPhase::IntroPlaying,
            intro: IntroTransition::new(intro),
            fly_params,
            fly_in: None,
            overlay: HomeOverlay::default(),
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn overlay(&self) -> &HomeOverlay {
        &self.overlay
    }

    pub fn fly_in(&self) -> Option<&FlyInTransition> {
        self.fly_in.as_ref().map(|(fly, _)| fly)
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == NavPhase::Idle
    }

    pub fn mount(&mut self, camera: &mut impl CameraRig, now: f64) {
        self.phase = NavPhase::IntroPlaying;
        self.intro.begin(camera, now);
    }

    pub fn select(&mut self, index: usize) {
        self.overlay.selected = index;
    }

    pub fn dismiss_instructions(&mut self) {
        self.overlay.show_instructions = false;
    }

    /// Start flying toward an activated item. Only honoured while idle.
    pub fn activate(&mut self, activation: Activation, camera: &impl CameraRig) -> bool {
        if self.phase != NavPhase::Idle {
            return false;
        }
        let fly = FlyInTransition::new(
            camera.position(),
            activation.world_position,
            self.fly_params.clone(),
        );
        log::info!(
            "[nav] fly-in to index={} target=({:.2},{:.2},{:.2})",
            activation.index,
            activation.world_position.x,
            activation.world_position.y,
            activation.world_position.z
        );
        self.fly_in = Some((fly, activation.index));
        self.overlay.show_destination = false;
        self.phase = NavPhase::FlyingIn;
        true
    }

    /// Advance whichever transition owns the camera this frame.
    pub fn frame(
        &mut self,
        now: f64,
        camera: &mut impl CameraRig,
        router: &mut impl Router,
    ) -> NavPhase {
        match self.phase {
            NavPhase::IntroPlaying => {
                if self.intro.tick(now, camera) == TickOutcome::Completed {
                    self.overlay.intro_complete = true;
                    self.phase = NavPhase::Idle;
                }
            }
            NavPhase::FlyingIn => {
                if let Some((fly, index)) = self.fly_in.as_mut() {
                    let outcome = fly.tick(now, camera);
                    self.overlay.fade_opacity = fly.fade();
                    if outcome == TickOutcome::Completed {
                        let index = *index;
                        self.phase = NavPhase::Navigated;
                        match Route::for_carousel_index(index) {
                            Some(route) => {
                                log::info!("[nav] navigate {}", route.path());
                                router.navigate(route);
                            }
                            None => log::warn!("[nav] no route bound to index {}", index),
                        }
                    }
                }
            }
            NavPhase::Idle | NavPhase::Navigated => {}
        }
        self.phase
    }
}

/// A mounted home page: camera, carousel, navigator and its frame loop.
pub struct HomeScene<C: CameraRig, S: FrameScheduler> {
    pub camera: C,
    pub carousel: Carousel,
    pub navigator: Navigator,
    input: InputRouter,
    frames: FrameLoop<S>,
    mounted: bool,
}

impl<C: CameraRig, S: FrameScheduler> HomeScene<C, S> {
    pub fn new(camera: C, carousel: Carousel, navigator: Navigator, scheduler: S) -> Self {
        Self {
            camera,
            carousel,
            navigator,
            input: InputRouter::default(),
            frames: FrameLoop::new(scheduler),
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn frames(&self) -> &FrameLoop<S> {
        &self.frames
    }

    pub fn mount(&mut self, now: f64) {
        self.navigator.mount(&mut self.camera, now);
        self.mounted = true;
        self.frames.schedule();
    }

    /// Cancel the pending frame; late callbacks become no-ops.
    pub fn unmount(&mut self) {
        self.frames.cancel();
        self.mounted = false;
        log::debug!("[nav] home unmounted");
    }

    /// Run one frame. Returns false when the frame was stale and ignored.
    pub fn on_frame(&mut self, now: f64, router: &mut impl Router) -> bool {
        if !self.mounted || !self.frames.resume() {
            return false;
        }
        self.carousel.tick(now);
        let phase = self.navigator.frame(now, &mut self.camera, router);
        if phase != NavPhase::Navigated {
            self.frames.schedule();
        }
        true
    }

    pub fn handle_key(&mut self, key: Key, menu: &mut MenuState) -> Routed {
        self.input
            .update_owner(menu.is_open, self.navigator.is_interactive());
        let routed = self.input.route_key(key, &mut self.carousel, menu);
        if let Routed::SelectionChanged(index) = routed {
            self.navigator.select(index);
        }
        routed
    }

    pub fn handle_pointer(&mut self, input: PointerInput, menu_open: bool, now: f64) -> Routed {
        self.input
            .update_owner(menu_open, self.navigator.is_interactive());
        let routed = self.input.route_pointer(input, &mut self.carousel, now);
        match routed {
            Routed::SelectionChanged(index) => self.navigator.select(index),
            Routed::Activated(activation) => {
                self.navigator.activate(activation, &self.camera);
            }
            _ => {}
        }
        routed
    }
}
