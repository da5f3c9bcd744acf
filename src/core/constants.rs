use glam::Vec3;

// Shared scene/interaction tuning constants used by the core and the web frontend.

// Carousel layout
pub const CAROUSEL_ITEM_COUNT: usize = 3;
pub const CAROUSEL_RADIUS: f32 = 0.5; // world units from the carousel centre
pub const CAROUSEL_BASE_POSITION: Vec3 = Vec3::new(0.0, -0.5, -3.0);
pub const CAROUSEL_ITEM_RADIUS: f32 = 0.12; // rendered ball radius

// Carousel interaction
pub const ROTATION_SPEED_RAD_PER_PX: f32 = 0.01;
pub const SETTLE_DURATION_SEC: f32 = 0.3;
pub const SETTLE_TURN_SEARCH: i32 = 3; // candidate window is +/- this many full turns

// Item animations
pub const CLIP_DURATION_SEC: f32 = 1.2;
pub const SPRING_DURATION_SEC: f32 = 1.0;

// Intro camera move
pub const INTRO_START_POSITION: Vec3 = Vec3::new(0.0, 130.0, 200.0);
pub const INTRO_END_POSITION: Vec3 = Vec3::new(0.0, -0.3, -2.0);
pub const INTRO_START_ROTATION: Vec3 = Vec3::new(-0.6, 0.0, 0.0);
pub const INTRO_END_ROTATION: Vec3 = Vec3::new(-0.4, 0.0, 0.0);
pub const INTRO_DURATION_SEC: f32 = 3.0;
pub const INTRO_Y_DECAY: f32 = 2.0; // exponent rate of the vertical drop curve
pub const INTRO_Z_POWER: f32 = 2.5;

// Fly-in camera move (shared with the fade overlay)
pub const FLY_IN_DURATION_SEC: f32 = 3.0;
pub const FLY_IN_DELAY_SEC: f32 = 1.5;
pub const FLY_IN_OFFSET: f32 = 10.0;

// Camera defaults
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const CAMERA_START_ROTATION: Vec3 = Vec3::new(-0.4, 0.0, 0.0);
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.001;
pub const CAMERA_FAR: f32 = 20000.0;

// Menu grid
pub const MENU_GRID_SIZE: usize = 8;
pub const MENU_ROW_STRIDE: usize = 2;

// Contact status auto-clear
pub const CONTACT_STATUS_CLEAR_MS: u32 = 3000;

// Projects box
pub const PROJECT_BOX_SLOTS: usize = 30;

// Destination labels shown under the carousel, by item index
pub const DESTINATION_LABELS: [&str; CAROUSEL_ITEM_COUNT] = ["About", "Projects", "Contact"];
