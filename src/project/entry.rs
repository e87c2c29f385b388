//! Project entries as produced by directory enumeration.

use std::{
    fs::Metadata,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde::Serialize;
use walkdir::DirEntry;

use crate::utils::to_iso8601;

/// An immediate, non-hidden subdirectory of the projects root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Directory name for display and matching. Names that are not valid
    /// UTF-8 are rendered lossily.
    pub name: String,

    /// Path of the directory as listed
    pub path: PathBuf,
}

impl ProjectEntry {
    /// Build an entry for `name` under `root`.
    #[must_use]
    pub fn new(root: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = root.join(&name);

        Self { name, path }
    }

    /// Build an entry from a directory listing, keeping the listed path
    /// rather than rebuilding it from the display name.
    #[must_use]
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path().to_path_buf(),
        }
    }
}

/// The subset of `stat` output the operations care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryStats {
    pub modified: SystemTime,

    /// Birth time, or the modification time where the filesystem has none
    pub created: SystemTime,

    pub size: u64,
}

impl EntryStats {
    /// Extract the timestamps and size from filesystem metadata.
    ///
    /// Returns the underlying error if the platform cannot report a
    /// modification time at all.
    pub fn from_metadata(metadata: &Metadata) -> std::io::Result<Self> {
        let modified = metadata.modified()?;
        let created = metadata.created().unwrap_or(modified);

        Ok(Self {
            modified,
            created,
            size: metadata.len(),
        })
    }
}

/// A project entry together with its stat data.
#[derive(Clone, Debug)]
pub struct StatedEntry {
    pub entry: ProjectEntry,
    pub stats: EntryStats,
}

/// One row of the detailed `list_projects` output.
#[derive(Debug, Serialize)]
pub struct ListedProject {
    pub name: String,
    pub path: String,
    pub modified: String,
    pub created: String,
}

impl From<&StatedEntry> for ListedProject {
    fn from(stated: &StatedEntry) -> Self {
        Self {
            name: stated.entry.name.clone(),
            path: stated.entry.path.display().to_string(),
            modified: to_iso8601(stated.stats.modified),
            created: to_iso8601(stated.stats.created),
        }
    }
}

/// One row of the `recent_projects` output.
#[derive(Debug, Serialize)]
pub struct RecentProject {
    pub name: String,
    pub path: String,
    pub modified: String,

    /// Relative age such as `"3 days ago"`
    pub ago: String,
}
