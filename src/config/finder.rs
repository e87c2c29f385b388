//! Resolved runtime configuration.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Default bound on the `git status` subprocess.
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration shared by every project operation.
///
/// Built once at startup and passed by value into
/// [`ProjectFinder`](crate::finder::ProjectFinder); nothing reads the
/// environment after that point.
#[derive(Clone, Debug)]
pub struct FinderConfig {
    /// Directory whose immediate subdirectories are the projects
    pub root: PathBuf,

    /// Threads for the concurrent stat batch (0 = rayon default)
    pub threads: usize,

    /// Upper bound for the VCS status subprocess
    pub git_timeout: Duration,
}

impl FinderConfig {
    /// Configuration for `root` with default tuning.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            threads: 0,
            git_timeout: DEFAULT_GIT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn with_git_timeout(mut self, git_timeout: Duration) -> Self {
        self.git_timeout = git_timeout;
        self
    }

    /// Fallback root: the parent of the directory holding the running
    /// executable, or the current directory if that cannot be determined.
    #[must_use]
    pub fn default_root() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| Self::install_parent(&exe))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Parent of the directory containing `exe`.
    fn install_parent(exe: &Path) -> Option<PathBuf> {
        exe.parent()?.parent().map(Path::to_path_buf)
    }
}
