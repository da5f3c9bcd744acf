/// Pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "HOME",
            Route::About => "ABOUT",
            Route::Projects => "PROJECTS",
            Route::Contact => "CONTACT",
        }
    }

    /// Unknown paths render the home scene.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|r| r.path() == trimmed)
            .unwrap_or(Route::Home)
    }

    /// Destination bound to a carousel item.
    pub fn for_carousel_index(index: usize) -> Option<Route> {
        match index {
            0 => Some(Route::About),
            1 => Some(Route::Projects),
            2 => Some(Route::Contact),
            _ => None,
        }
    }
}
