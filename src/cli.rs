//! Command-line interface definition.
//!
//! Every option can also come from the configuration file; values given on
//! the command line (or through `PROJECTS_DIR`) take precedence.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::config::{
    FileConfig, FinderConfig,
    file::expand_tilde,
    finder::DEFAULT_GIT_TIMEOUT,
};

/// Default log filter when neither `--log-level` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "project-finder", version)]
#[command(about = "MCP server for listing, finding and inspecting the projects in a directory")]
pub struct Cli {
    /// Directory containing the projects [default: parent of the install directory]
    #[arg(short = 'r', long, env = "PROJECTS_DIR")]
    root: Option<PathBuf>,

    /// Number of threads used to stat projects (0 = one per core)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Seconds to wait for `git status` before giving up
    #[arg(long)]
    git_timeout_secs: Option<u64>,

    /// Log filter written to stderr, e.g. `debug` or `project_finder=trace`
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    /// Resolve the projects root: CLI/env > config file > install location.
    #[must_use]
    pub fn root(&self, file_config: &FileConfig) -> PathBuf {
        self.root
            .as_ref()
            .or(file_config.root.as_ref())
            .map(|p| expand_tilde(p))
            .unwrap_or_else(FinderConfig::default_root)
    }

    /// Build the runtime configuration from arguments and the config file.
    #[must_use]
    pub fn finder_config(&self, file_config: &FileConfig) -> FinderConfig {
        let threads = self.threads.or(file_config.threads).unwrap_or(0);
        let git_timeout = self
            .git_timeout_secs
            .or(file_config.git_timeout_secs)
            .map_or(DEFAULT_GIT_TIMEOUT, Duration::from_secs);

        FinderConfig::new(self.root(file_config))
            .with_threads(threads)
            .with_git_timeout(git_timeout)
    }

    /// Log filter: CLI > config file > [`DEFAULT_LOG_LEVEL`].
    #[must_use]
    pub fn log_level(&self, file_config: &FileConfig) -> String {
        self.log_level
            .clone()
            .or_else(|| file_config.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }
}
