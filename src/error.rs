//! Error types for project lookups.
//!
//! Every variant of [`FinderError`] is a *domain* condition: it is rendered
//! to the caller as plain text rather than raised to the transport. The
//! `Display` implementation therefore doubles as the user-facing message.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures produced by the four project operations.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The configured projects root could not be listed.
    #[error("Error reading projects directory {}: {source}", root.display())]
    RootUnreadable {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stat or listing call on a specific path failed.
    #[error("Error reading {}: {source}", path.display())]
    StatFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `project_info` was asked about a project that does not exist.
    #[error("Project \"{name}\" not found")]
    ProjectNotFound { name: String },

    /// `find_project` found neither an exact nor a fuzzy match.
    #[error("No project found matching \"{name}\"")]
    NoMatch { name: String },

    /// Tool arguments were missing or of the wrong type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A result could not be encoded as JSON.
    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FinderError {
    pub(crate) fn root_unreadable(root: &std::path::Path, source: io::Error) -> Self {
        Self::RootUnreadable {
            root: root.to_path_buf(),
            source,
        }
    }

    pub(crate) fn stat_failed(path: &std::path::Path, source: io::Error) -> Self {
        Self::StatFailed {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used by the project operations.
pub type Result<T> = std::result::Result<T, FinderError>;
