//! Navbar menu grid state.

use super::constants::{MENU_GRID_SIZE, MENU_ROW_STRIDE};
use super::routes::Route;

/// Grid entries in display order; cells past the end are inert placeholders.
pub const MENU_ROUTES: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
    pub selected: usize,
}

impl MenuState {
    pub fn open(&mut self) {
        self.is_open = true;
        log::debug!("[menu] open");
    }

    pub fn close(&mut self) {
        self.is_open = false;
        log::debug!("[menu] close");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the highlighted cell, wrapping around the fixed-size grid.
    pub fn move_selection(&mut self, mv: GridMove) -> usize {
        let n = MENU_GRID_SIZE;
        self.selected = match mv {
            GridMove::Right => (self.selected + 1) % n,
            GridMove::Left => (self.selected + n - 1) % n,
            GridMove::Down => (self.selected + MENU_ROW_STRIDE) % n,
            GridMove::Up => (self.selected + n - MENU_ROW_STRIDE) % n,
        };
        self.selected
    }

    pub fn selected_route(&self) -> Option<Route> {
        cell_route(self.selected)
    }
}

pub fn cell_route(cell: usize) -> Option<Route> {
    MENU_ROUTES.get(cell).copied()
}

/// `HH:MM` for the menu clock.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}
