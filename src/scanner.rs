//! Project enumeration under the configured root.
//!
//! This module lists the immediate, non-hidden subdirectories of the projects
//! root and resolves their stat data. Enumeration is one level deep only;
//! stat calls for the listed entries are issued concurrently on the rayon
//! pool and joined before returning, so callers always see results in
//! directory-listing order.

use std::{fs, io, path::Path};

use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::{
    error::{FinderError, Result},
    project::{EntryStats, ListedProject, ProjectEntry, StatedEntry},
};

/// Directory scanner for the projects root.
pub struct Scanner<'a> {
    root: &'a Path,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `root`.
    #[must_use]
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// List every project entry under the root, in directory-listing order.
    ///
    /// Hidden directories (names starting with `.`) and non-directories are
    /// skipped. Symlinks are not followed.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::RootUnreadable`] if the root itself cannot be
    /// read (missing, not a directory, permission denied). Unreadable
    /// individual entries are skipped.
    pub fn entries(&self) -> Result<Vec<ProjectEntry>> {
        let metadata =
            fs::metadata(self.root).map_err(|e| FinderError::root_unreadable(self.root, e))?;
        if !metadata.is_dir() {
            return Err(FinderError::root_unreadable(
                self.root,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        let mut entries = Vec::new();

        for item in WalkDir::new(self.root).min_depth(1).max_depth(1) {
            let entry = match item {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(FinderError::root_unreadable(self.root, e.into()));
                }
                Err(e) => {
                    debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let project = ProjectEntry::from_dir_entry(&entry);
            if Self::is_hidden_name(&project.name) {
                continue;
            }

            entries.push(project);
        }

        Ok(entries)
    }

    /// List the entries whose name contains `filter`, ignoring case.
    ///
    /// `None` or an empty filter matches every entry.
    ///
    /// # Errors
    ///
    /// Propagates [`Scanner::entries`] failures.
    pub fn matching(&self, filter: Option<&str>) -> Result<Vec<ProjectEntry>> {
        let entries = self.entries()?;

        let Some(filter) = filter.filter(|f| !f.is_empty()) else {
            return Ok(entries);
        };

        Ok(entries
            .into_iter()
            .filter(|entry| contains_ignore_case(&entry.name, filter))
            .collect())
    }

    /// Names of the matching entries, in directory-listing order.
    ///
    /// # Errors
    ///
    /// Propagates [`Scanner::entries`] failures.
    pub fn list_names(&self, filter: Option<&str>) -> Result<Vec<String>> {
        Ok(self
            .matching(filter)?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    /// Matching entries with their timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed or any entry cannot be
    /// stat'ed.
    pub fn list_detailed(&self, filter: Option<&str>) -> Result<Vec<ListedProject>> {
        let stated = stat_entries(self.matching(filter)?)?;

        Ok(stated.iter().map(ListedProject::from).collect())
    }

    /// Check whether a directory name is hidden.
    fn is_hidden_name(name: &str) -> bool {
        name.starts_with('.')
    }
}

/// Stat every entry concurrently and join the results.
///
/// The output keeps the input order regardless of completion order.
///
/// # Errors
///
/// Returns [`FinderError::StatFailed`] if any entry cannot be stat'ed.
pub fn stat_entries(entries: Vec<ProjectEntry>) -> Result<Vec<StatedEntry>> {
    entries
        .into_par_iter()
        .map(|entry| {
            let stats = stat_path(&entry.path)?;
            Ok(StatedEntry { entry, stats })
        })
        .collect()
}

/// Stat a single path.
///
/// # Errors
///
/// Returns [`FinderError::StatFailed`] if the metadata cannot be read.
pub fn stat_path(path: &Path) -> Result<EntryStats> {
    fs::metadata(path)
        .and_then(|metadata| EntryStats::from_metadata(&metadata))
        .map_err(|e| FinderError::stat_failed(path, e))
}

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
