mod directory;
mod worker;

pub use directory::{list_directory, list_directory_with};
pub use worker::{DirectoryLoader, IoCommand, Listing};
