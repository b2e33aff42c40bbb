// Navigation state - displayed directory and the one being loaded
use std::path::{Path, PathBuf};

pub struct NavigationState {
    /// Directory of the most recently applied listing.
    pub current_dir: Option<PathBuf>,
    /// Directory whose listing is in flight.
    pub loading_dir: Option<PathBuf>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            current_dir: None,
            loading_dir: None,
        }
    }

    pub fn parent(&self) -> Option<&Path> {
        self.current_dir.as_deref().and_then(Path::parent)
    }

    pub fn finish_loading(&mut self, dir: PathBuf) {
        self.loading_dir = None;
        self.current_dir = Some(dir);
    }
}
