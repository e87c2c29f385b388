//! Per-project metadata collection.
//!
//! Inspecting a project means: stat the project directory, probe the fixed
//! marker files, count its immediate children, classify it, and, for
//! version-controlled projects, ask the [`VcsProbe`] for a status summary.
//! A failing status query never fails the inspection; the summary is simply
//! left out.

use std::{
    fs,
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::{FinderError, Result},
    project::{GitSummary, MARKER_FILES, ProjectDetail, ProjectType, detail::VCS_MARKER},
    scanner::stat_path,
    utils::to_iso8601,
    vcs::VcsProbe,
};

/// Collects [`ProjectDetail`] records for projects under a root.
pub struct Inspector<'a> {
    root: &'a Path,
    vcs: &'a dyn VcsProbe,
}

impl<'a> Inspector<'a> {
    #[must_use]
    pub fn new(root: &'a Path, vcs: &'a dyn VcsProbe) -> Self {
        Self { root, vcs }
    }

    /// Gather the full detail record for the project called `name`.
    ///
    /// # Errors
    ///
    /// - [`FinderError::ProjectNotFound`] if `name` is not a directory
    ///   directly under the root
    /// - [`FinderError::StatFailed`] if the project directory exists but
    ///   cannot be stat'ed or listed
    pub fn inspect(&self, name: &str) -> Result<ProjectDetail> {
        let path = self.resolve(name)?;

        let stats = match fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => stat_path(&path)?,
            Ok(_) => return Err(not_found(name)),
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found(name)),
            Err(e) => return Err(FinderError::stat_failed(&path, e)),
        };

        let project_files = Self::probe_markers(&path);
        let (file_count, dir_count) = Self::count_children(&path)?;
        let project_type = ProjectType::detect(project_files.as_slice());

        let git = if project_files.iter().any(|f| f == VCS_MARKER) {
            self.git_summary(&path)
        } else {
            None
        };

        Ok(ProjectDetail {
            name: name.to_string(),
            path: path.display().to_string(),
            created: to_iso8601(stats.created),
            modified: to_iso8601(stats.modified),
            size: stats.size,
            file_count,
            dir_count,
            project_type,
            project_files,
            git,
        })
    }

    /// Join `name` onto the root, accepting only a single plain component.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(name)),
            _ => Err(not_found(name)),
        }
    }

    /// Marker files present in `dir`, in probe order.
    fn probe_markers(dir: &Path) -> Vec<String> {
        MARKER_FILES
            .iter()
            .filter(|marker| dir.join(marker).exists())
            .map(|marker| (*marker).to_string())
            .collect()
    }

    /// Count the immediate children of `dir` that are regular files and
    /// directories. Symlinks count as neither.
    fn count_children(dir: &Path) -> Result<(usize, usize)> {
        let read_dir = fs::read_dir(dir).map_err(|e| FinderError::stat_failed(dir, e))?;

        let mut files = 0;
        let mut dirs = 0;

        for entry in read_dir.flatten() {
            match entry.file_type() {
                Ok(ft) if ft.is_file() => files += 1,
                Ok(ft) if ft.is_dir() => dirs += 1,
                Ok(_) => {}
                Err(e) => debug!("cannot get file type for {}: {e}", entry.path().display()),
            }
        }

        Ok((files, dirs))
    }

    fn git_summary(&self, dir: &Path) -> Option<GitSummary> {
        match self.vcs.status(dir) {
            Ok(output) => Some(GitSummary::from_status_output(&output)),
            Err(e) => {
                debug!("omitting git status for {}: {e}", dir.display());
                None
            }
        }
    }
}

fn not_found(name: &str) -> FinderError {
    FinderError::ProjectNotFound {
        name: name.to_string(),
    }
}
