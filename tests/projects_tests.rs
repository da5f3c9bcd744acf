// Host-side tests for the projects box and static page content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene_core;

use scene_core::content::*;
use scene_core::projects::*;
use scene_core::PROJECT_BOX_SLOTS;

#[test]
fn slots_past_the_catalogue_are_empty() {
    assert_eq!(slot(0).map(|p| p.name), Some("Portfolio Website"));
    assert_eq!(slot(1).map(|p| p.name), Some("Stock Prediction Model"));
    assert!(slot(PROJECTS.len()).is_none());
    assert!(slot(PROJECT_BOX_SLOTS).is_none());
    assert!(PROJECTS.len() <= PROJECT_BOX_SLOTS);
}

#[test]
fn opening_empty_slot_is_a_no_op() {
    let mut pc = ProjectBox::default();
    assert!(!pc.open(12));
    assert!(pc.selected().is_none());
    assert!(pc.current_image().is_none());
}

#[test]
fn open_resets_viewer_state() {
    let mut pc = ProjectBox::default();
    assert!(pc.open(0));
    pc.next_image();
    pc.open_skills();
    assert!(pc.skills_open());

    assert!(pc.open(1));
    assert_eq!(pc.image_index(), 0);
    assert!(!pc.skills_open());
    assert_eq!(pc.selected().map(|p| p.id), Some(2));
}

#[test]
fn image_cycling_wraps() {
    let mut pc = ProjectBox::default();
    pc.open(0);
    let n = PROJECTS[0].images.len();
    assert_eq!(pc.current_image(), Some(PROJECTS[0].images[0]));
    pc.prev_image();
    assert_eq!(pc.image_index(), n - 1);
    pc.next_image();
    assert_eq!(pc.image_index(), 0);
}

#[test]
fn skills_need_a_selected_project() {
    let mut pc = ProjectBox::default();
    pc.open_skills();
    assert!(!pc.skills_open());

    pc.open(0);
    pc.open_skills();
    assert!(pc.skills_open());
    pc.close_skills();
    assert!(!pc.skills_open());

    pc.open_skills();
    pc.close();
    assert!(pc.selected().is_none());
    assert!(!pc.skills_open());
}

#[test]
fn content_is_populated() {
    assert!(!INSTRUCTIONS.is_empty());
    assert_eq!(ABOUT_PARAGRAPHS.len(), 4);
    assert!(CONTACT_METHODS.iter().any(|m| m.kind == "Email"));
    assert!(PROJECTS.iter().all(|p| !p.skills.is_empty() && !p.images.is_empty()));
}
