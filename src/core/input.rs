//! Translation of raw pointer/keyboard input into carousel and menu actions.
//!
//! The router keeps no state of its own beyond which UI currently owns input;
//! everything it changes lives in [`Carousel`] or [`MenuState`].

use super::carousel::{Activation, Carousel, StepDirection};
use super::menu::{GridMove, MenuState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Key {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Pointer input already resolved against the scene (which item, if any).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Press on the carousel group.
    Down { x: f32 },
    Move { x: f32 },
    Up,
    /// Pointer now over this item, or over none.
    Hover(Option<usize>),
    Click(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputOwner {
    /// Nothing interactive (intro or fly-in playing, or a content page).
    #[default]
    Inactive,
    Carousel,
    Menu,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Routed {
    /// Not for the current owner.
    Ignored,
    /// Handled with no outward effect; the event must not bubble further.
    Consumed,
    SelectionChanged(usize),
    Activated(Activation),
    MenuMoved(usize),
    MenuActivate(usize),
    MenuClosed,
}

impl Routed {
    /// Whether the DOM default action (scrolling, etc.) should be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Routed::Ignored)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter {
    owner: InputOwner,
}

impl InputRouter {
    pub fn owner(&self) -> InputOwner {
        self.owner
    }

    /// The menu takes precedence over the carousel while open.
    pub fn update_owner(&mut self, menu_open: bool, carousel_interactive: bool) {
        self.owner = if menu_open {
            InputOwner::Menu
        } else if carousel_interactive {
            InputOwner::Carousel
        } else {
            InputOwner::Inactive
        };
    }

    pub fn route_key(&self, key: Key, carousel: &mut Carousel, menu: &mut MenuState) -> Routed {
        match self.owner {
            InputOwner::Menu => route_menu_key(key, menu),
            InputOwner::Carousel => match key {
                Key::ArrowLeft => Routed::SelectionChanged(carousel.step(StepDirection::Left)),
                Key::ArrowRight => Routed::SelectionChanged(carousel.step(StepDirection::Right)),
                _ => Routed::Ignored,
            },
            InputOwner::Inactive => Routed::Ignored,
        }
    }

    pub fn route_pointer(&self, input: PointerInput, carousel: &mut Carousel, now: f64) -> Routed {
        if self.owner != InputOwner::Carousel {
            // a drag in progress still has to end cleanly
            if input == PointerInput::Up {
                return carousel
                    .pointer_up()
                    .map_or(Routed::Ignored, Routed::SelectionChanged);
            }
            return Routed::Ignored;
        }
        match input {
            PointerInput::Down { x } => {
                carousel.pointer_down(x);
                Routed::Consumed
            }
            PointerInput::Move { x } => {
                carousel.pointer_move(x);
                Routed::Consumed
            }
            PointerInput::Up => match carousel.pointer_up() {
                Some(index) => Routed::SelectionChanged(index),
                None => Routed::Ignored,
            },
            PointerInput::Hover(item) => {
                carousel.set_hovering(item.is_some());
                Routed::Consumed
            }
            PointerInput::Click(index) => match carousel.click(index, now) {
                Some(activation) => Routed::Activated(activation),
                None => Routed::Consumed,
            },
        }
    }
}

/// Menu grid keys, usable without a carousel (content pages).
pub fn route_menu_key(key: Key, menu: &mut MenuState) -> Routed {
    let mv = match key {
        Key::ArrowRight => GridMove::Right,
        Key::ArrowLeft => GridMove::Left,
        Key::ArrowDown => GridMove::Down,
        Key::ArrowUp => GridMove::Up,
        Key::Enter | Key::Space => {
            // following a link always closes the menu, even onto the current page
            menu.close();
            return Routed::MenuActivate(menu.selected);
        }
        Key::Escape => {
            menu.close();
            return Routed::MenuClosed;
        }
        Key::Other => return Routed::Ignored,
    };
    Routed::MenuMoved(menu.move_selection(mv))
}

/// Listeners that must exist exactly while their owner is active (the open
/// menu, a drag). Attach and drop always happen as a pair.
#[derive(Debug)]
pub struct ListenerSlot<L> {
    attached: Option<L>,
}

impl<L> Default for ListenerSlot<L> {
    fn default() -> Self {
        Self { attached: None }
    }
}

impl<L> ListenerSlot<L> {
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Attach via `attach` when the owner became active, drop when it went
    /// inactive; otherwise leave the current listeners alone.
    pub fn sync(&mut self, active: bool, attach: impl FnOnce() -> Option<L>) {
        match (active, self.attached.is_some()) {
            (true, false) => self.attached = attach(),
            (false, true) => self.attached = None,
            _ => {}
        }
    }
}
