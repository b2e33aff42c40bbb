use crate::config::{DisplayConfig, SelectorConfig};
use crate::entry::FileEntry;
use crate::error::SelectorError;
use crate::io::{DirectoryLoader, Listing};
use crate::model::{SavedState, SelectionType};
use crate::state::{NavigationState, SelectionState, UIState};
use log::{debug, info, warn};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::time::Duration;

/// Message shown when a directory cannot be listed.
pub const DIR_ACCESS_ERROR: &str = "Cannot access this directory";

/// Receives the entry the user picked.
pub trait SelectionListener {
    fn on_file_selected(&mut self, selector: &FileSelector, path: &Path);
}

impl<F> SelectionListener for F
where
    F: FnMut(&FileSelector, &Path),
{
    fn on_file_selected(&mut self, selector: &FileSelector, path: &Path) {
        self(selector, path)
    }
}

/// What activating a row did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A listing of this directory was started.
    Entered(PathBuf),
    /// The listener was handed this path.
    Selected(PathBuf),
    /// Nothing happened (no such row, or the directory was not accessible).
    Ignored,
}

/// A list-based file or directory chooser.
///
/// The selector lists one directory at a time on a background thread.
/// Results are applied by [`poll`](Self::poll) on the thread that owns the
/// selector; a listing superseded by a newer request is never applied.
pub struct FileSelector {
    options: SelectorConfig,
    display: DisplayConfig,
    navigation: NavigationState,
    entries: Vec<FileEntry>,
    selection: SelectionState,
    ui: UIState,
    loader: DirectoryLoader,
}

impl FileSelector {
    /// Creates a selector and starts listing its first directory.
    ///
    /// The first directory is the saved one if there is any, then
    /// `options.start_dir`, then the user's home directory.
    pub fn new<W>(
        options: SelectorConfig,
        display: DisplayConfig,
        saved: Option<SavedState>,
        waker: W,
    ) -> Self
    where
        W: Fn() + Send + 'static,
    {
        let start = saved
            .and_then(|state| state.dir)
            .or_else(|| options.start_dir.clone())
            .unwrap_or_else(default_start_dir);

        let mut selector = Self {
            options,
            display,
            navigation: NavigationState::new(),
            entries: Vec::new(),
            selection: SelectionState::new(),
            ui: UIState::new(),
            loader: DirectoryLoader::spawn(waker),
        };
        // Failure is already surfaced as the error message.
        let _ = selector.set_dir(start);
        selector
    }

    /// Creates a selector that repaints `ctx` whenever a listing completes.
    pub fn for_egui(
        options: SelectorConfig,
        display: DisplayConfig,
        saved: Option<SavedState>,
        ctx: &eframe::egui::Context,
    ) -> Self {
        let ctx = ctx.clone();
        Self::new(options, display, saved, move || ctx.request_repaint())
    }

    /// Directory currently on screen, `None` until a listing has completed.
    pub fn dir(&self) -> Option<&Path> {
        self.navigation.current_dir.as_deref()
    }

    /// Directory whose listing is in flight.
    pub fn loading_dir(&self) -> Option<&Path> {
        self.navigation.loading_dir.as_deref()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn selection_type(&self) -> SelectionType {
        self.options.selection_type
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn is_loading(&self) -> bool {
        self.ui.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.ui.error_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.selection.cursor
    }

    pub(crate) fn focus_was_elsewhere(&self) -> bool {
        self.ui.focus_elsewhere
    }

    pub(crate) fn set_focus_elsewhere(&mut self, focused: bool) {
        self.ui.focus_elsewhere = focused;
    }

    pub fn move_cursor(&mut self, delta: i32) {
        self.selection.move_by(delta, self.entries.len());
    }

    /// Starts listing `dir`. Any listing still in flight is cancelled first.
    ///
    /// A path that is missing or not a directory keeps the current listing
    /// and raises the access error message.
    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) -> Result<(), SelectorError> {
        let dir = dir.into();
        self.loader.cancel();
        self.navigation.loading_dir = None;
        self.ui.is_loading = false;

        if !dir.is_dir() {
            let err = SelectorError::NotADirectory { path: dir };
            self.report(&err);
            return Err(err);
        }

        match self.loader.request(dir.clone(), self.options.selection_type) {
            Ok(_) => {
                self.navigation.loading_dir = Some(dir);
                self.ui.is_loading = true;
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Lists the parent of the displayed directory.
    ///
    /// Returns `false` when nothing is displayed yet or there is no parent.
    pub fn move_to_parent_dir(&mut self) -> bool {
        let Some(parent) = self.navigation.parent().map(Path::to_path_buf) else {
            return false;
        };
        let _ = self.set_dir(parent);
        true
    }

    /// Handles the back action; `true` when it was consumed.
    ///
    /// With back interception disabled this always returns `false`, leaving
    /// the host to close itself.
    pub fn handle_back(&mut self) -> bool {
        self.options.back_key_interruption && self.move_to_parent_dir()
    }

    /// Activates the row at `index`.
    ///
    /// In file mode a directory row is browsed into. Any other row is
    /// handed to `listener`, once.
    pub fn activate(&mut self, index: usize, listener: &mut dyn SelectionListener) -> Activation {
        let Some(entry) = self.entries.get(index) else {
            return Activation::Ignored;
        };
        let path = entry.path.clone();

        if self.options.selection_type == SelectionType::File && entry.is_dir {
            return match self.set_dir(path.clone()) {
                Ok(()) => Activation::Entered(path),
                Err(_) => Activation::Ignored,
            };
        }

        info!("selected {}", path.display());
        listener.on_file_selected(self, &path);
        Activation::Selected(path)
    }

    pub fn activate_cursor(&mut self, listener: &mut dyn SelectionListener) -> Activation {
        match self.selection.cursor {
            Some(index) => self.activate(index, listener),
            None => Activation::Ignored,
        }
    }

    /// Browses into the directory row at `index` regardless of the mode.
    pub fn open(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) if entry.is_dir => {
                let path = entry.path.clone();
                self.set_dir(path).is_ok()
            }
            _ => false,
        }
    }

    /// Applies a completed listing, if any. Returns whether one was applied.
    pub fn poll(&mut self) -> bool {
        self.ui.clear_expired_messages(self.display.message_timeout_secs);
        match self.loader.try_recv() {
            Some(listing) => {
                self.apply(listing);
                true
            }
            None => false,
        }
    }

    /// Blocks up to `timeout` for the pending listing and applies it.
    pub fn wait_for_listing(&mut self, timeout: Duration) -> bool {
        if !self.loader.is_pending() {
            return false;
        }
        match self.loader.recv_timeout(timeout) {
            Some(listing) => {
                self.apply(listing);
                true
            }
            None => false,
        }
    }

    pub fn save_state(&self) -> SavedState {
        SavedState {
            dir: self.navigation.current_dir.clone(),
        }
    }

    fn apply(&mut self, listing: Listing) {
        self.ui.is_loading = false;
        match listing.result {
            Ok(entries) => {
                debug!(
                    "showing {} ({} entries)",
                    listing.dir.display(),
                    entries.len()
                );
                self.navigation.finish_loading(listing.dir);
                self.entries = entries;
                self.selection.reset(self.entries.len());
            }
            Err(err) => {
                self.navigation.loading_dir = None;
                self.report(&err);
            }
        }
    }

    fn report(&mut self, err: &SelectorError) {
        warn!("{}", err);
        self.ui.set_error(DIR_ACCESS_ERROR.to_string());
    }
}

/// Home directory, or the filesystem root when there is none.
pub fn default_start_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .filter(|home| home.is_dir())
        .unwrap_or_else(|| PathBuf::from(MAIN_SEPARATOR_STR))
}
