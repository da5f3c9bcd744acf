pub mod camera;
pub mod carousel;
pub mod constants;
pub mod contact;
pub mod content;
pub mod easing;
pub mod input;
pub mod menu;
pub mod navigation;
pub mod projects;
pub mod routes;
pub mod schedule;

pub use camera::*;
pub use carousel::*;
pub use constants::*;
pub use input::*;
pub use menu::*;
pub use navigation::*;
pub use routes::*;
pub use schedule::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
