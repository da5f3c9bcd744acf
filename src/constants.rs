// DOM element ids and browser-side interaction tuning.
//
// The page shell (`index.html`) provides these elements; everything else is
// created at mount time.

// Scene
pub const APP_CANVAS_ID: &str = "app-canvas";
pub const HOME_LAYER_ID: &str = "home-layer";
pub const FADE_OVERLAY_ID: &str = "fade-overlay";
pub const INSTRUCTIONS_ID: &str = "instructions";
pub const INSTRUCTIONS_TEXT_ID: &str = "instructions-text";
pub const INSTRUCTIONS_DISMISS_ID: &str = "instructions-dismiss";
pub const DESTINATION_LABEL_ID: &str = "destination-label";

// Navbar menu
pub const MENU_ROOT_ID: &str = "menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MENU_GRID_ID: &str = "menu-grid";
pub const MENU_CLOCK_ID: &str = "menu-clock";
pub const MENU_CELL_ATTR: &str = "data-cell";
pub const CLOCK_REFRESH_MS: u32 = 60_000;

// Content pages
pub const PAGE_ROOT_ID: &str = "page-root";
pub const PAGE_EXIT_ID: &str = "page-exit";
pub const PAGE_LINK_ATTR: &str = "data-route";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";

// Projects box
pub const PROJECT_SLOT_ATTR: &str = "data-slot";
pub const PROJECT_POPUP_ID: &str = "project-popup";
pub const PAGE_ACTION_ATTR: &str = "data-action";

// Pointer travel (CSS px) after which a press counts as a drag, not a click
pub const CLICK_SLOP_PX: f32 = 4.0;

// Frame delta clamp so a backgrounded tab doesn't jump the shader clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Contact form fields (the `name` attribute matches `Field::from_name`)
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
