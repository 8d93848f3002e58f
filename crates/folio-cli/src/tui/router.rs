//! Route table and history

use folio_core::Router;

/// Views the terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Resume,
}

impl Route {
    /// Resolve a path. Unknown paths fall back to home.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/resume" => Route::Resume,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Resume => "/resume",
        }
    }
}

/// In-memory router. Navigations are recorded and applied by the app loop.
#[derive(Debug)]
pub struct AppRouter {
    path: String,
    history: Vec<String>,
}

impl AppRouter {
    pub fn new(initial: &str) -> Self {
        let path = Route::from_path(initial).path().to_string();
        Self {
            path,
            history: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// Return to the previous path. Returns false with no history.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        tracing::debug!(from = %self.path, to = %previous, "Route back");
        self.path = previous;
        true
    }
}

impl Router for AppRouter {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: &str) {
        let resolved = Route::from_path(path).path();
        if resolved == self.path {
            return;
        }
        tracing::debug!(from = %self.path, to = %resolved, "Route change");
        let previous = std::mem::replace(&mut self.path, resolved.to_string());
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_paths_fall_back_home() {
        assert_eq!(Route::from_path("/resume/"), Route::Resume);
        assert_eq!(Route::from_path("/nowhere"), Route::Home);
        assert_eq!(AppRouter::new("/nowhere").current_path(), "/");
    }

    #[test]
    fn test_navigate_and_back() {
        let mut router = AppRouter::new("/");
        router.navigate("/resume");
        assert_eq!(router.route(), Route::Resume);

        // Same path is not a new history entry
        router.navigate("/resume");
        assert!(router.back());
        assert_eq!(router.route(), Route::Home);
        assert!(!router.back());
    }
}
