// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Durations should be positive
    assert!(INTRO_DURATION_SEC > 0.0);
    assert!(FLY_IN_DURATION_SEC > 0.0);
    assert!(FLY_IN_DELAY_SEC >= 0.0);
    assert!(SETTLE_DURATION_SEC > 0.0);
    assert!(CLIP_DURATION_SEC > 0.0);
    assert!(SPRING_DURATION_SEC > 0.0);

    // Interaction tuning
    assert!(ROTATION_SPEED_RAD_PER_PX > 0.0);
    assert!(SETTLE_TURN_SEARCH >= 1);
    assert!(CLICK_SLOP_PX > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);

    // Camera frustum
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn carousel_layout_is_consistent() {
    assert_eq!(DESTINATION_LABELS.len(), CAROUSEL_ITEM_COUNT);
    assert!(CAROUSEL_ITEM_COUNT > 0);
    // neighbouring balls must not overlap on the circle
    let chord = 2.0 * CAROUSEL_RADIUS * (std::f32::consts::PI / CAROUSEL_ITEM_COUNT as f32).sin();
    assert!(chord > 2.0 * CAROUSEL_ITEM_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn intro_start_fits_in_default_far_plane() {
    let reach = INTRO_START_POSITION.abs().max_element() * 2.0;
    assert!(reach <= CAMERA_FAR);
    // the intro descends and moves forward
    assert!(INTRO_START_POSITION.y > INTRO_END_POSITION.y);
    assert!(INTRO_START_POSITION.z > INTRO_END_POSITION.z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn menu_grid_rows_divide_evenly() {
    assert_eq!(MENU_GRID_SIZE % MENU_ROW_STRIDE, 0);
    assert!(MENU_GRID_SIZE >= 4);
    assert!(PROJECT_BOX_SLOTS > 0);
    assert!(CONTACT_STATUS_CLEAR_MS > 0);
    assert!(CLOCK_REFRESH_MS >= 1000);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        APP_CANVAS_ID,
        HOME_LAYER_ID,
        FADE_OVERLAY_ID,
        INSTRUCTIONS_ID,
        INSTRUCTIONS_TEXT_ID,
        INSTRUCTIONS_DISMISS_ID,
        DESTINATION_LABEL_ID,
        MENU_ROOT_ID,
        MENU_TOGGLE_ID,
        MENU_GRID_ID,
        MENU_CLOCK_ID,
        PAGE_ROOT_ID,
        PAGE_EXIT_ID,
        CONTACT_FORM_ID,
        CONTACT_STATUS_ID,
        CONTACT_SUBMIT_ID,
        CONTACT_NAME_ID,
        CONTACT_EMAIL_ID,
        CONTACT_MESSAGE_ID,
        PROJECT_POPUP_ID,
    ];
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}
