use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What kind of entry completes a selection.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    /// Directories are browsed into; a file row completes the selection.
    #[default]
    File,
    /// Only directories are listed and any row completes the selection.
    Dir,
}

/// Restorable state of a selector.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedState {
    /// Directory that was on screen, if any listing had completed.
    pub dir: Option<PathBuf>,
}
