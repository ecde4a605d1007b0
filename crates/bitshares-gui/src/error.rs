//! Error types for building the mode tree.
//!
//! Only construction can fail. Once a tree exists, the model answers every
//! query; out-of-range requests get empty answers instead of errors.

use std::path::PathBuf;

use crate::domain::ModeKind;

/// Result type alias for mode tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating a tree layout.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read tree layout '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout is not valid TOML or doesn't match the expected shape.
    #[error("Invalid tree layout: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// The layout could not be written back out.
    #[error("Failed to serialize tree layout: {source}")]
    Serialize {
        #[from]
        source: toml::ser::Error,
    },

    /// A mode kind was listed more than once.
    #[error("Mode '{kind}' appears more than once in the layout")]
    DuplicateMode { kind: ModeKind },

    /// A mode label override was empty.
    #[error("Mode '{kind}' has an empty label")]
    EmptyLabel { kind: ModeKind },

    /// An item under a mode had an empty name.
    #[error("Mode '{kind}' has an empty item name at position {position}")]
    EmptyItemName { kind: ModeKind, position: usize },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
