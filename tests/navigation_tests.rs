// Host-side tests for the home page state machine and its frame loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use glam::Vec3;
use scene_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct MockCamera {
    position: Vec3,
    writes: usize,
}

impl CameraRig for MockCamera {
    fn position(&self) -> Vec3 {
        self.position
    }
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.writes += 1;
    }
    fn set_rotation(&mut self, _euler: Vec3) {
        self.writes += 1;
    }
    fn look_at(&mut self, _target: Vec3) {
        self.writes += 1;
    }
    fn far(&self) -> f32 {
        CAMERA_FAR
    }
    fn set_far(&mut self, _far: f32) {
        self.writes += 1;
    }
}

#[derive(Default)]
struct SchedulerLog {
    requested: u64,
    cancelled: Vec<FrameToken>,
}

/// Hands out sequential tokens and records cancellations.
#[derive(Clone, Default)]
struct MockScheduler(Rc<RefCell<SchedulerLog>>);

impl FrameScheduler for MockScheduler {
    fn request_frame(&mut self) -> FrameToken {
        let mut log = self.0.borrow_mut();
        log.requested += 1;
        FrameToken(log.requested)
    }
    fn cancel_frame(&mut self, token: FrameToken) {
        self.0.borrow_mut().cancelled.push(token);
    }
}

#[derive(Default)]
struct MockRouter {
    routes: Vec<Route>,
}

impl Router for MockRouter {
    fn navigate(&mut self, route: Route) {
        self.routes.push(route);
    }
}

type TestScene = HomeScene<MockCamera, MockScheduler>;

fn scene(scheduler: MockScheduler) -> TestScene {
    HomeScene::new(
        MockCamera::default(),
        Carousel::with_default_items(),
        Navigator::new(IntroParams::default(), FlyInParams::default()),
        scheduler,
    )
}

/// Deliver frames every 100ms from `*now` until `until` holds or `limit` seconds pass.
fn run_frames(
    s: &mut TestScene,
    router: &mut MockRouter,
    now: &mut f64,
    limit: f64,
    until: impl Fn(&TestScene) -> bool,
) {
    let end = *now + limit;
    while *now < end && !until(s) {
        *now += 0.1;
        s.on_frame(*now, router);
    }
}

fn play_intro(s: &mut TestScene, router: &mut MockRouter, now: &mut f64) {
    run_frames(s, router, now, 5.0, |s| s.navigator.phase() == NavPhase::Idle);
    assert_eq!(s.navigator.phase(), NavPhase::Idle);
}

#[test]
fn mount_starts_intro_and_schedules_one_frame() {
    let sched = MockScheduler::default();
    let mut s = scene(sched.clone());
    s.mount(0.0);
    assert_eq!(s.navigator.phase(), NavPhase::IntroPlaying);
    assert_eq!(s.camera.position, INTRO_START_POSITION);
    assert!(s.frames().is_pending());
    assert_eq!(sched.0.borrow().requested, 1);
    assert!(!s.navigator.overlay().instructions_visible());
    assert!(!s.navigator.overlay().destination_visible());
}

#[test]
fn intro_completion_enables_overlays_and_interaction() {
    let mut s = scene(MockScheduler::default());
    let mut router = MockRouter::default();
    let mut now = 0.0;
    s.mount(now);
    play_intro(&mut s, &mut router, &mut now);

    assert!(s.navigator.is_interactive());
    assert!(s.navigator.overlay().instructions_visible());
    assert!(s.navigator.overlay().destination_visible());
    assert_eq!(s.navigator.overlay().destination_label(), "About");
    assert_eq!(s.camera.position, INTRO_END_POSITION);

    s.navigator.dismiss_instructions();
    assert!(!s.navigator.overlay().instructions_visible());
}

#[test]
fn activation_ignored_while_intro_plays() {
    let mut s = scene(MockScheduler::default());
    let mut router = MockRouter::default();
    let mut menu = MenuState::default();
    s.mount(0.0);
    s.on_frame(0.5, &mut router);

    assert_eq!(s.handle_pointer(PointerInput::Click(0), false, 0.5), Routed::Ignored);
    assert_eq!(s.handle_key(Key::ArrowRight, &mut menu), Routed::Ignored);
    assert_eq!(s.navigator.phase(), NavPhase::IntroPlaying);
    assert!(s.navigator.fly_in().is_none());
}

#[test]
fn key_selection_updates_destination_label() {
    let mut s = scene(MockScheduler::default());
    let mut router = MockRouter::default();
    let mut menu = MenuState::default();
    let mut now = 0.0;
    s.mount(now);
    play_intro(&mut s, &mut router, &mut now);

    assert_eq!(s.handle_key(Key::ArrowRight, &mut menu), Routed::SelectionChanged(1));
    assert_eq!(s.navigator.overlay().destination_label(), "Projects");
    assert_eq!(s.handle_key(Key::ArrowRight, &mut menu), Routed::SelectionChanged(2));
    assert_eq!(s.navigator.overlay().destination_label(), "Contact");
}

#[test]
fn fly_in_navigates_exactly_once() {
    let mut s = scene(MockScheduler::default());
    let mut router = MockRouter::default();
    let mut now = 0.0;
    s.mount(now);
    play_intro(&mut s, &mut router, &mut now);

    let front = s.carousel.front_world_position();
    assert!(matches!(
        s.handle_pointer(PointerInput::Click(0), false, now),
        Routed::Activated(_)
    ));
    assert_eq!(s.navigator.phase(), NavPhase::FlyingIn);
    assert!(!s.navigator.overlay().destination_visible());
    assert_eq!(s.navigator.fly_in().map(|f| f.target()), Some(front));

    // a second activation mid-flight is refused
    assert!(!s.navigator.activate(
        Activation {
            world_position: Vec3::ZERO,
            index: 2
        },
        &s.camera
    ));

    run_frames(&mut s, &mut router, &mut now, 10.0, |s| {
        s.navigator.phase() == NavPhase::Navigated
    });
    assert_eq!(s.navigator.phase(), NavPhase::Navigated);
    assert_eq!(router.routes, vec![Route::About]);
    assert_eq!(router.routes[0].path(), "/about");
    assert_eq!(s.navigator.overlay().fade_opacity, 1.0);

    // the loop stops rescheduling once navigated
    assert!(!s.frames().is_pending());
    assert!(!s.on_frame(now + 0.1, &mut router));
    assert_eq!(router.routes.len(), 1);
}

#[test]
fn fade_stays_clear_during_fly_in_delay() {
    let mut s = scene(MockScheduler::default());
    let mut router = MockRouter::default();
    let mut menu = MenuState::default();
    let mut now = 0.0;
    s.mount(now);
    play_intro(&mut s, &mut router, &mut now);
    s.handle_key(Key::ArrowRight, &mut menu);
    run_frames(&mut s, &mut router, &mut now, 1.0, |_| false);

    s.handle_pointer(PointerInput::Click(1), false, now);
    let held = s.camera.position;
    run_frames(&mut s, &mut router, &mut now, 1.0, |_| false);
    assert_eq!(s.camera.position, held);
    assert_eq!(s.navigator.overlay().fade_opacity, 0.0);

    run_frames(&mut s, &mut router, &mut now, 10.0, |s| {
        s.navigator.phase() == NavPhase::Navigated
    });
    assert_eq!(router.routes, vec![Route::Projects]);
}

#[test]
fn unmount_cancels_frame_and_rejects_stale_callbacks() {
    let sched = MockScheduler::default();
    let mut s = scene(sched.clone());
    let mut router = MockRouter::default();
    s.mount(0.0);
    s.on_frame(0.5, &mut router);
    assert!(s.frames().is_pending());

    s.unmount();
    assert!(!s.is_mounted());
    assert!(!s.frames().is_pending());
    assert_eq!(sched.0.borrow().cancelled, vec![FrameToken(2)]);

    let writes = s.camera.writes;
    assert!(!s.on_frame(0.6, &mut router));
    assert!(!s.on_frame(5.0, &mut router));
    assert_eq!(s.camera.writes, writes);
    assert!(router.routes.is_empty());
}

#[test]
fn dropping_scene_cancels_pending_frame() {
    let sched = MockScheduler::default();
    let mut s = scene(sched.clone());
    s.mount(0.0);
    drop(s);
    assert_eq!(sched.0.borrow().cancelled, vec![FrameToken(1)]);
}

#[test]
fn frame_loop_keeps_a_single_pending_request() {
    let sched = MockScheduler::default();
    let mut frames = FrameLoop::new(sched.clone());
    frames.schedule();
    frames.schedule();
    assert_eq!(sched.0.borrow().requested, 1);
    assert!(frames.resume());
    assert!(!frames.resume());
    frames.cancel();
    assert!(sched.0.borrow().cancelled.is_empty());
}

#[test]
fn remount_replays_intro() {
    let mut s = scene(MockScheduler::default());
    let mut router = MockRouter::default();
    let mut now = 0.0;
    s.mount(now);
    play_intro(&mut s, &mut router, &mut now);
    s.unmount();

    s.mount(now);
    assert_eq!(s.navigator.phase(), NavPhase::IntroPlaying);
    assert_eq!(s.camera.position, INTRO_START_POSITION);
    assert!(s.on_frame(now + 0.1, &mut router));
}

#[test]
fn routes_parse_from_paths() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path(""), Route::Home);
    assert_eq!(Route::from_path("/about"), Route::About);
    assert_eq!(Route::from_path("/projects/"), Route::Projects);
    assert_eq!(Route::from_path("/contact"), Route::Contact);
    assert_eq!(Route::from_path("/missing"), Route::Home);

    assert_eq!(Route::for_carousel_index(0), Some(Route::About));
    assert_eq!(Route::for_carousel_index(2), Some(Route::Contact));
    assert_eq!(Route::for_carousel_index(3), None);
}

#[test]
fn cancel_handle_cancels_pending_frame_without_the_scene() {
    let sched = MockScheduler::default();
    let mut s = scene(sched.clone());
    let mut router = MockRouter::default();
    s.mount(0.0);
    let mut cancel = s.frames().cancel_handle();

    cancel.cancel();
    assert_eq!(sched.0.borrow().cancelled, vec![FrameToken(1)]);
    assert!(!s.frames().is_pending());
    // the late callback for the cancelled token is rejected
    let writes = s.camera.writes;
    assert!(!s.on_frame(0.1, &mut router));
    assert_eq!(s.camera.writes, writes);

    // nothing left to cancel on unmount or drop
    cancel.cancel();
    s.unmount();
    drop(s);
    assert_eq!(sched.0.borrow().cancelled.len(), 1);
}
