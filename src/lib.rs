//! A list-based file and directory selector for egui hosts.
//!
//! [`FileSelector`] shows one directory at a time, lets the user browse
//! into subdirectories and back up, and hands the chosen entry to a
//! [`SelectionListener`]. Directory listings run on a background thread;
//! a newer request always supersedes an older one.

pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod model;
pub mod selector;
pub mod state;
pub mod style;
pub mod view;

pub use config::{Config, DisplayConfig, SelectorConfig};
pub use entry::FileEntry;
pub use error::{ConfigError, SelectorError};
pub use model::{SavedState, SelectionType};
pub use selector::{Activation, FileSelector, SelectionListener};
pub use view::SelectorResponse;
