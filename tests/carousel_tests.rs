// Host-side tests for the Poké Ball carousel: layout, drag/settle, stepping and activation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use glam::Vec3;
use scene_core::*;
use std::f32::consts::{PI, TAU};

fn plain_carousel(n: usize) -> Carousel {
    let items = (0..n)
        .map(|_| CarouselItem::new("ball", None))
        .collect();
    Carousel::new(items, CarouselConfig::default())
}

/// Drive a settle to completion with frame ticks.
fn finish_settle(c: &mut Carousel, from: f64) {
    c.tick(from);
    c.tick(from + SETTLE_DURATION_SEC as f64 + 0.01);
    assert!(!c.is_settling());
}

#[test]
fn front_index_at_rest_is_first_item() {
    let c = plain_carousel(3);
    assert_eq!(c.front_index(), 0);
    assert_eq!(c.selected_index(), 0);
    let front = c.front_world_position();
    assert!((front - (CAROUSEL_BASE_POSITION + Vec3::new(0.0, 0.0, CAROUSEL_RADIUS))).length() < 1e-5);
}

#[test]
fn rotating_one_segment_cycles_front_by_one() {
    let mut c = plain_carousel(3);
    c.pointer_down(0.0);
    // -segment in pixels brings item 1 to the front
    let px = -c.segment() / ROTATION_SPEED_RAD_PER_PX;
    c.pointer_move(px);
    assert_eq!(c.front_index(), 1);
    c.pointer_move(2.0 * px);
    assert_eq!(c.front_index(), 2);
    c.pointer_move(3.0 * px);
    assert_eq!(c.front_index(), 0);
}

#[test]
fn items_are_evenly_spaced_on_circle() {
    let c = plain_carousel(3);
    for i in 0..3 {
        let offset = c.item_offset(i);
        assert!((offset.length() - CAROUSEL_RADIUS).abs() < 1e-5);
        assert_eq!(offset.y, 0.0);
    }
    assert!((c.item_angle(1) - TAU / 3.0).abs() < 1e-6);
}

#[test]
fn settle_target_stays_within_one_turn_after_many_spins() {
    assert!((nearest_turn(10.0 * PI + 0.01, 0.0, SETTLE_TURN_SEARCH) - 10.0 * PI).abs() < 1e-3);

    let mut c = plain_carousel(3);
    c.pointer_down(0.0);
    let rotation = 10.0 * PI + 0.01;
    c.pointer_move(rotation / ROTATION_SPEED_RAD_PER_PX);
    assert_eq!(c.pointer_up(), Some(0));

    let target = c.settle_target().expect("settle after drag");
    assert!((target - c.rotation()).abs() < TAU);
    assert!((target - 10.0 * PI).abs() < 1e-3);
}

#[test]
fn nearest_turn_picks_closest_equivalent_angle() {
    let seg = TAU / 3.0;
    assert!((nearest_turn(0.1, -seg, 3) - (-seg)).abs() < 1e-6);
    // just past half a turn away prefers the next turn
    let near = nearest_turn(-seg + PI + 0.1, -seg, 3);
    assert!((near - (-seg + TAU)).abs() < 1e-5);
    assert!((nearest_turn(-40.0, 0.0, 3) - (-6.0 * TAU)).abs() < 1e-3);
}

#[test]
fn drag_release_settles_with_front_selected() {
    let mut c = plain_carousel(3);
    c.pointer_down(100.0);
    assert!(c.is_dragging());
    // a bit more than one segment to the left
    c.pointer_move(100.0 - 230.0);
    assert_eq!(c.pointer_up(), Some(1));
    assert_eq!(c.selected_index(), 1);
    assert!(!c.is_dragging());
    assert!(c.is_settling());

    assert!(c.tick(1.0));
    assert!(c.tick(1.1));
    assert!(!c.tick(1.0 + SETTLE_DURATION_SEC as f64));
    assert!((c.rotation() - (-c.segment())).abs() < 1e-5);
    assert_eq!(c.front_index(), 1);
}

#[test]
fn pointer_up_without_drag_does_nothing() {
    let mut c = plain_carousel(3);
    assert_eq!(c.pointer_up(), None);
    assert!(!c.is_settling());
    c.pointer_move(50.0);
    assert_eq!(c.rotation(), 0.0);
}

#[test]
fn step_wraps_in_both_directions() {
    let mut c = plain_carousel(3);
    assert_eq!(c.step(StepDirection::Left), 2);
    finish_settle(&mut c, 0.0);
    assert_eq!(c.front_index(), 2);

    assert_eq!(c.step(StepDirection::Right), 0);
    assert_eq!(c.step(StepDirection::Right), 1);
    assert_eq!(c.step(StepDirection::Right), 2);
    assert_eq!(c.step(StepDirection::Right), 0);
    finish_settle(&mut c, 1.0);
    assert_eq!(c.front_index(), 0);
    assert_eq!(c.selected_index(), 0);
}

#[test]
fn step_during_settle_builds_on_in_flight_target() {
    let mut c = plain_carousel(3);
    c.step(StepDirection::Right);
    c.tick(0.0);
    c.tick(0.1);
    c.step(StepDirection::Right);
    let target = c.settle_target().expect("settling");
    assert!((target - (-2.0 * c.segment())).abs() < 1e-5);
}

#[test]
fn drag_interrupts_settle() {
    let mut c = plain_carousel(3);
    c.step(StepDirection::Right);
    c.tick(0.0);
    c.pointer_down(0.0);
    c.pointer_move(5.0);
    assert!(!c.is_settling());
}

#[test]
fn cursor_reflects_hover_and_drag() {
    let mut c = plain_carousel(3);
    assert_eq!(c.cursor(), CursorState::Default);
    c.set_hovering(true);
    assert_eq!(c.cursor(), CursorState::Grab);
    c.pointer_down(0.0);
    assert_eq!(c.cursor(), CursorState::Grabbing);
    c.pointer_up();
    assert_eq!(c.cursor(), CursorState::Grab);
    c.set_hovering(false);
    assert_eq!(c.cursor(), CursorState::Default);
    assert_eq!(CursorState::Grabbing.css(), "grabbing");
}

#[test]
fn click_only_activates_selected_item() {
    let mut c = plain_carousel(3);
    assert_eq!(c.click(1, 0.0), None);
    assert!(!c.items()[1].is_animating(0.0));

    let activation = c.click(0, 0.0).expect("front item activates");
    assert_eq!(activation.index, 0);
    assert_eq!(activation.world_position, c.front_world_position());
}

#[test]
fn click_without_animation_sets_fallback_flag() {
    let mut c = plain_carousel(3);
    c.click(0, 0.0);
    assert!(c.items()[0].is_animating(0.0));
    assert_eq!(c.items()[0].animation_amount(0.0), 1.0);
    assert_eq!(c.items()[1].animation_amount(0.0), 0.0);
}

#[test]
fn fallback_flag_rests_after_spring_duration() {
    let mut c = plain_carousel(3);
    c.click(0, 0.0);
    assert_eq!(c.items()[0].animation_amount(SPRING_DURATION_SEC as f64 * 0.5), 1.0);
    assert!(!c.items()[0].is_animating(SPRING_DURATION_SEC as f64));
    assert_eq!(c.items()[0].animation_amount(100.0), 0.0);

    // a second activation raises it again
    c.click(0, 200.0);
    assert!(c.items()[0].is_animating(200.5));
}

#[test]
fn default_items_play_their_animations() {
    let mut c = Carousel::with_default_items();
    assert_eq!(c.len(), DESTINATION_LABELS.len());
    assert_eq!(c.items()[0].label, "About");

    c.click(0, 2.0);
    assert!(!c.items()[0].is_animating(2.0));
    let mid = c.items()[0].animation_amount(2.0 + CLIP_DURATION_SEC as f64 * 0.5);
    assert!((mid - 0.5).abs() < 1e-4);
    // clip holds its last frame
    assert_eq!(c.items()[0].animation_amount(100.0), 1.0);

    c.step(StepDirection::Right);
    c.click(1, 3.0);
    let peak = c.items()[1].animation_amount(3.0 + SPRING_DURATION_SEC as f64 * 0.5);
    assert!((peak - 1.0).abs() < 1e-4);
    assert!(c.items()[1].animation_amount(3.0 + SPRING_DURATION_SEC as f64) < 1e-4);
}

#[test]
fn ray_sphere_hits_and_misses() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, center, 2.0).expect("hit");
    assert!((t - 3.0).abs() < 1e-5);

    assert_eq!(ray_sphere(Vec3::ZERO, Vec3::Y, center, 2.0), None);
    // sphere behind the ray
    assert_eq!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, center, 2.0), None);
    // origin inside the sphere hits the far side
    let t = ray_sphere(center, Vec3::Z, center, 2.0).expect("inside hit");
    assert!((t - 2.0).abs() < 1e-5);
}

#[test]
fn pick_returns_nearest_item_along_ray() {
    let c = plain_carousel(3);
    let front = c.item_world_position(0);
    let origin = front + Vec3::new(0.0, 0.0, 3.0);
    let (index, t) = c.pick(origin, Vec3::NEG_Z).expect("front ball hit");
    assert_eq!(index, 0);
    assert!((t - (3.0 - CAROUSEL_ITEM_RADIUS)).abs() < 1e-4);

    assert!(c.hits_group(origin, Vec3::NEG_Z));
    assert!(!c.hits_group(origin, Vec3::Y));
    assert_eq!(c.pick(origin, Vec3::Y), None);
}
