//! Projects "PC box": a fixed grid of slots and a detail viewer.

use super::constants::PROJECT_BOX_SLOTS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub time_frame: &'static str,
    pub skills: &'static [&'static str],
    pub status: &'static str,
    pub images: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Portfolio Website",
        description: "My 3D Pokémon-inspired portfolio, rendered with WebGPU from Rust.",
        category: "Web Application",
        time_frame: "2025",
        skills: &["Rust", "WebGPU", "WebAssembly", "Blender"],
        status: "Completed",
        images: &[
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/25.png",
        ],
        link: "https://your-portfolio-link.com",
    },
    Project {
        id: 2,
        name: "Stock Prediction Model",
        description: "Exploring neural networks and brain-computer interaction.",
        category: "Machine Learning",
        time_frame: "2023",
        skills: &["Python", "TensorFlow", "Neuroscience"],
        status: "Completed",
        images: &[
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/150.png",
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/back/150.png",
        ],
        link: "https://your-research-link.com",
    },
];

/// Project shown in a box slot, if the slot is occupied.
pub fn slot(index: usize) -> Option<&'static Project> {
    if index >= PROJECT_BOX_SLOTS {
        return None;
    }
    PROJECTS.get(index)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectBox {
    selected: Option<usize>,
    image_index: usize,
    show_skills: bool,
}

impl ProjectBox {
    pub fn selected(&self) -> Option<&'static Project> {
        self.selected.and_then(slot)
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn skills_open(&self) -> bool {
        self.show_skills
    }

    pub fn current_image(&self) -> Option<&'static str> {
        self.selected()
            .and_then(|p| p.images.get(self.image_index).copied())
    }

    /// Open the project in `slot_index`; empty slots do nothing.
    pub fn open(&mut self, slot_index: usize) -> bool {
        if slot(slot_index).is_none() {
            return false;
        }
        self.selected = Some(slot_index);
        self.image_index = 0;
        self.show_skills = false;
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.show_skills = false;
    }

    pub fn next_image(&mut self) {
        if let Some(p) = self.selected() {
            if !p.images.is_empty() {
                self.image_index = (self.image_index + 1) % p.images.len();
            }
        }
    }

    pub fn prev_image(&mut self) {
        if let Some(p) = self.selected() {
            let n = p.images.len();
            if n > 0 {
                self.image_index = (self.image_index + n - 1) % n;
            }
        }
    }

    pub fn open_skills(&mut self) {
        if self.selected.is_some() {
            self.show_skills = true;
        }
    }

    pub fn close_skills(&mut self) {
        self.show_skills = false;
    }
}
