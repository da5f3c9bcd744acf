//! Poké Ball carousel: N items evenly spaced on a circle, rotated by drag or
//! arrow keys, always settling with one item facing the viewer.

use super::constants::*;
use super::easing::{self, ease_out_cubic};
use glam::Vec3;
use std::f32::consts::TAU;

/// Per-item animation played when the item is activated.
pub trait ItemAnimation {
    fn trigger(&mut self, now: f64);
    /// Animation amount in `[0, 1]` at `now`; 0 when at rest.
    fn amount(&self, now: f64) -> f32;
}

/// Plays a fixed-length baked clip once and holds the last frame.
#[derive(Clone, Debug)]
pub struct ClipAnimation {
    pub clip_name: String,
    pub duration: f32,
    started_at: Option<f64>,
}

impl ClipAnimation {
    pub fn new(clip_name: impl Into<String>, duration: f32) -> Self {
        Self {
            clip_name: clip_name.into(),
            duration,
            started_at: None,
        }
    }
}

impl ItemAnimation for ClipAnimation {
    fn trigger(&mut self, now: f64) {
        log::debug!("[carousel] play clip '{}'", self.clip_name);
        self.started_at = Some(now);
    }

    fn amount(&self, now: f64) -> f32 {
        match self.started_at {
            // clamped when finished
            Some(t0) => easing::progress((now - t0) as f32, self.duration),
            None => 0.0,
        }
    }
}

/// Programmatic spin that rises and falls back to rest.
#[derive(Clone, Debug, Default)]
pub struct SpringAnimation {
    started_at: Option<f64>,
}

impl ItemAnimation for SpringAnimation {
    fn trigger(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    fn amount(&self, now: f64) -> f32 {
        let Some(t0) = self.started_at else {
            return 0.0;
        };
        let p = easing::progress((now - t0) as f32, SPRING_DURATION_SEC);
        (p * std::f32::consts::PI).sin()
    }
}

pub struct CarouselItem {
    pub label: &'static str,
    animation: Option<Box<dyn ItemAnimation>>,
    /// Activation time of an item without an animation hook; it reads as
    /// animating for one spring duration, then rests.
    fallback_started: Option<f64>,
}

impl CarouselItem {
    pub fn new(label: &'static str, animation: Option<Box<dyn ItemAnimation>>) -> Self {
        Self {
            label,
            animation,
            fallback_started: None,
        }
    }

    /// Whether the fallback animation flag is raised at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        self.fallback_started
            .is_some_and(|t0| now - t0 < SPRING_DURATION_SEC as f64)
    }

    pub fn animation_amount(&self, now: f64) -> f32 {
        match &self.animation {
            Some(anim) => anim.amount(now),
            None if self.is_animating(now) => 1.0,
            None => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub radius: f32,
    pub item_radius: f32,
    pub base_position: Vec3,
    pub rotation_speed: f32,
    pub settle_duration: f32,
    pub turn_search: i32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            radius: CAROUSEL_RADIUS,
            item_radius: CAROUSEL_ITEM_RADIUS,
            base_position: CAROUSEL_BASE_POSITION,
            rotation_speed: ROTATION_SPEED_RAD_PER_PX,
            settle_duration: SETTLE_DURATION_SEC,
            turn_search: SETTLE_TURN_SEARCH,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last_x: f32,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorState {
    #[default]
    Default,
    Grab,
    Grabbing,
}

impl CursorState {
    pub fn css(&self) -> &'static str {
        match self {
            CursorState::Default => "default",
            CursorState::Grab => "grab",
            CursorState::Grabbing => "grabbing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    Left,
    Right,
}

/// An activated front item: where it sits in the world and which one it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    pub world_position: Vec3,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SettleAnimation {
    from: f32,
    to: f32,
    started_at: Option<f64>,
}

pub struct Carousel {
    config: CarouselConfig,
    items: Vec<CarouselItem>,
    rotation: f32,
    selected: usize,
    drag: DragState,
    hovering: bool,
    settle: Option<SettleAnimation>,
}

impl Carousel {
    pub fn new(items: Vec<CarouselItem>, config: CarouselConfig) -> Self {
        debug_assert!(!items.is_empty(), "carousel needs at least one item");
        Self {
            config,
            items,
            rotation: 0.0,
            selected: 0,
            drag: DragState::Idle,
            hovering: false,
            settle: None,
        }
    }

    /// The home scene's three balls, alternating clip and spring animations.
    pub fn with_default_items() -> Self {
        let items = DESTINATION_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let anim: Box<dyn ItemAnimation> = if i % 2 == 0 {
                    Box::new(ClipAnimation::new("open", CLIP_DURATION_SEC))
                } else {
                    Box::new(SpringAnimation::default())
                };
                CarouselItem::new(label, Some(anim))
            })
            .collect();
        Self::new(items, CarouselConfig::default())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Target rotation of the in-flight settle, if any.
    pub fn settle_target(&self) -> Option<f32> {
        self.settle.map(|s| s.to)
    }

    pub fn segment(&self) -> f32 {
        TAU / self.items.len() as f32
    }

    pub fn item_angle(&self, index: usize) -> f32 {
        index as f32 * self.segment() + self.rotation
    }

    /// Offset of an item from the carousel centre.
    pub fn item_offset(&self, index: usize) -> Vec3 {
        let angle = self.item_angle(index);
        Vec3::new(angle.sin(), 0.0, angle.cos()) * self.config.radius
    }

    pub fn item_world_position(&self, index: usize) -> Vec3 {
        self.item_offset(index) + self.config.base_position
    }

    /// Index of the item nearest the viewer (largest z offset).
    pub fn front_index(&self) -> usize {
        let mut best = 0;
        let mut max_z = f32::NEG_INFINITY;
        for i in 0..self.items.len() {
            let z = self.item_angle(i).cos();
            if z > max_z {
                max_z = z;
                best = i;
            }
        }
        best
    }

    pub fn front_world_position(&self) -> Vec3 {
        self.item_world_position(self.front_index())
    }

    /// Nearest item hit by a world-space ray, as `(index, distance)`.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for i in 0..self.items.len() {
            let center = self.item_world_position(i);
            if let Some(t) = ray_sphere(ray_origin, ray_dir, center, self.config.item_radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best
    }

    /// Whether a ray passes through the carousel's bounding sphere, which is
    /// what a drag can start from.
    pub fn hits_group(&self, ray_origin: Vec3, ray_dir: Vec3) -> bool {
        let radius = self.config.radius + self.config.item_radius;
        ray_sphere(ray_origin, ray_dir, self.config.base_position, radius).is_some()
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn cursor(&self) -> CursorState {
        if self.is_dragging() {
            CursorState::Grabbing
        } else if self.hovering {
            CursorState::Grab
        } else {
            CursorState::Default
        }
    }

    pub fn pointer_down(&mut self, x: f32) {
        self.drag = DragState::Dragging { last_x: x };
    }

    pub fn pointer_move(&mut self, x: f32) {
        if let DragState::Dragging { last_x } = self.drag {
            // dragging takes over from any settle still in flight
            self.settle = None;
            self.rotation += (x - last_x) * self.config.rotation_speed;
            self.drag = DragState::Dragging { last_x: x };
        }
    }

    /// End a drag and settle on the front item. Returns the new selection.
    pub fn pointer_up(&mut self) -> Option<usize> {
        if !self.is_dragging() {
            return None;
        }
        self.drag = DragState::Idle;
        let front = self.front_index();
        let base = -(front as f32) * self.segment();
        let target = nearest_turn(self.rotation, base, self.config.turn_search);
        self.animate_to(target);
        self.selected = front;
        log::debug!("[carousel] settle -> index={} target={:.3}", front, target);
        Some(front)
    }

    /// Move the selection one item left or right. Returns the new selection.
    pub fn step(&mut self, direction: StepDirection) -> usize {
        let n = self.items.len();
        // keep stepping from the aligned target when a settle is in flight
        let base = self.settle_target().unwrap_or(self.rotation);
        let (target, index) = match direction {
            StepDirection::Left => (base + self.segment(), (self.selected + n - 1) % n),
            StepDirection::Right => (base - self.segment(), (self.selected + 1) % n),
        };
        self.animate_to(target);
        self.selected = index;
        log::debug!("[carousel] step {:?} -> index={}", direction, index);
        index
    }

    /// Activate `index` if it is the selected (front) item.
    pub fn click(&mut self, index: usize, now: f64) -> Option<Activation> {
        if index != self.selected {
            return None;
        }
        let item = self.items.get_mut(index)?;
        match item.animation.as_mut() {
            Some(anim) => anim.trigger(now),
            None => item.fallback_started = Some(now),
        }
        log::info!("[carousel] activate index={} ({})", index, item.label);
        Some(Activation {
            world_position: self.front_world_position(),
            index,
        })
    }

    /// Advance the settle animation. Returns true while it is still running.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(settle) = self.settle.as_mut() else {
            return false;
        };
        let started_at = *settle.started_at.get_or_insert(now);
        let p = easing::progress((now - started_at) as f32, self.config.settle_duration);
        if p >= 1.0 {
            self.rotation = settle.to;
            self.settle = None;
            return false;
        }
        self.rotation = settle.from + (settle.to - settle.from) * ease_out_cubic(p);
        true
    }

    /// Replace any running settle with one from the current rotation.
    fn animate_to(&mut self, target: f32) {
        self.settle = Some(SettleAnimation {
            from: self.rotation,
            to: target,
            started_at: None,
        });
    }
}

/// Among `base + k * TAU` for `k` in a window of `turns` either side of the
/// current turn, pick the candidate closest to `current`.
pub fn nearest_turn(current: f32, base: f32, turns: i32) -> f32 {
    let center = ((current - base) / TAU).round() as i32;
    let mut best = base;
    let mut min_distance = (current - base).abs();
    for k in (center - turns)..=(center + turns) {
        let candidate = base + k as f32 * TAU;
        let distance = (current - candidate).abs();
        if distance < min_distance {
            min_distance = distance;
            best = candidate;
        }
    }
    best
}

/// Distance along a normalized ray to the first sphere intersection in front
/// of the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere
    let t = -b + sq;
    (t >= 0.0).then_some(t)
}
