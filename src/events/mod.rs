pub mod keyboard;
pub mod menu;
pub mod pointer;

pub use keyboard::wire_keydown;
pub use menu::{wire_menu, MenuControl, MenuWiring};
pub use pointer::{wire_home_pointer, HomePointer};
