use std::path::PathBuf;
use thiserror::Error;

/// Failures while choosing or listing a directory.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("{} does not exist or is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read directory {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("listing of {} was cancelled", .path.display())]
    Cancelled { path: PathBuf },

    #[error("directory loader is not running")]
    WorkerGone,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}
