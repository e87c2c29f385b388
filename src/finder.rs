//! The project directory service.
//!
//! [`ProjectFinder`] ties the enumerator, matcher, inspector and recency
//! ranker to one [`FinderConfig`]. Every call reads the filesystem afresh;
//! nothing is cached between calls.

use std::{path::Path, time::SystemTime};

use crate::{
    config::FinderConfig,
    error::{FinderError, Result},
    help,
    inspector::Inspector,
    matcher::{self, FindResult},
    project::{ListedProject, ProjectDetail, RecentProject},
    recency,
    scanner::Scanner,
    vcs::{GitCli, VcsProbe},
};

/// Read-only queries over the projects under a single root.
pub struct ProjectFinder {
    config: FinderConfig,
    vcs: Box<dyn VcsProbe>,
}

impl ProjectFinder {
    /// Create a finder that queries `git` for version-control status.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let vcs = GitCli::new(config.git_timeout);
        Self::with_vcs(config, Box::new(vcs))
    }

    /// Create a finder with a custom version-control probe.
    #[must_use]
    pub fn with_vcs(config: FinderConfig, vcs: Box<dyn VcsProbe>) -> Self {
        Self { config, vcs }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.config.root)
    }

    /// Names of the projects matching `filter`, in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::RootUnreadable`] if the root cannot be listed.
    pub fn list_names(&self, filter: Option<&str>) -> Result<Vec<String>> {
        self.scanner().list_names(filter)
    }

    /// Projects matching `filter` with their timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed or an entry cannot be
    /// stat'ed.
    pub fn list_detailed(&self, filter: Option<&str>) -> Result<Vec<ListedProject>> {
        self.scanner().list_detailed(filter)
    }

    /// Look a project up by exact or partial name.
    ///
    /// # Errors
    ///
    /// - [`FinderError::InvalidArguments`] for an empty name
    /// - [`FinderError::RootUnreadable`] if the root cannot be listed
    /// - [`FinderError::NoMatch`] if nothing matches
    pub fn find_project(&self, name: &str) -> Result<FindResult> {
        if name.is_empty() {
            return Err(FinderError::InvalidArguments(
                "name must not be empty".to_string(),
            ));
        }

        matcher::find(self.scanner().entries()?, name)
    }

    /// Detailed metadata for the project called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::ProjectNotFound`] or
    /// [`FinderError::StatFailed`]; version-control failures are not errors.
    pub fn project_info(&self, name: &str) -> Result<ProjectDetail> {
        Inspector::new(&self.config.root, self.vcs.as_ref()).inspect(name)
    }

    /// The `count` most recently modified projects, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed or an entry cannot be
    /// stat'ed.
    pub fn recent_projects(&self, count: usize) -> Result<Vec<RecentProject>> {
        recency::most_recent(self.scanner().entries()?, count, SystemTime::now())
    }

    /// Help text for `command`, or the overview.
    #[must_use]
    pub fn help(&self, command: Option<&str>) -> String {
        help::render(command, &self.config.root)
    }
}
