//! Detailed project metadata and project type detection.
//!
//! This module defines the record returned by `project_info` and the fixed
//! marker table used to classify a project directory.

use std::fmt::{Display, Formatter, Result};

use serde::{Serialize, Serializer};

/// Marker files probed in every project, in probe order.
///
/// Only existence is checked; contents are never read.
pub const MARKER_FILES: [&str; 6] = [
    "README.md",
    "package.json",
    ".git",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
];

/// Version-control marker. Used as the fallback classification and to
/// decide whether to query VCS status.
pub const VCS_MARKER: &str = ".git";

/// Enumeration of detectable project types.
///
/// Variants are listed in detection precedence: a directory holding both a
/// `package.json` and a `.git` directory is a Node.js project, not a plain
/// Git repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    /// `package.json` present
    Node,

    /// `Cargo.toml` present
    Rust,

    /// `requirements.txt` present
    Python,

    /// `go.mod` present
    Go,

    /// Only a `.git` directory, no known manifest
    GitRepository,

    Unknown,
}

impl ProjectType {
    /// Manifest-to-type table, checked top to bottom.
    const MANIFESTS: [(&'static str, Self); 4] = [
        ("package.json", Self::Node),
        ("Cargo.toml", Self::Rust),
        ("requirements.txt", Self::Python),
        ("go.mod", Self::Go),
    ];

    /// Classify a project from the marker files found in it.
    ///
    /// The first manifest in precedence order wins; the VCS marker is only
    /// consulted when no manifest is present.
    #[must_use]
    pub fn detect<S: AsRef<str>>(found: &[S]) -> Self {
        let has = |marker: &str| found.iter().any(|f| f.as_ref() == marker);

        Self::MANIFESTS
            .iter()
            .find(|(manifest, _)| has(manifest))
            .map(|&(_, kind)| kind)
            .unwrap_or_else(|| {
                if has(VCS_MARKER) {
                    Self::GitRepository
                } else {
                    Self::Unknown
                }
            })
    }

    /// Label used in tool output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Node => "Node.js",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::GitRepository => "Git repository",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Summary of `git status` for a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSummary {
    /// Number of non-blank status lines (staged, unstaged and untracked alike)
    pub modified_files: usize,

    pub has_changes: bool,
}

impl GitSummary {
    /// Build a summary from raw `git status --porcelain` output.
    #[must_use]
    pub fn from_status_output(output: &str) -> Self {
        let modified_files = output.lines().filter(|l| !l.trim().is_empty()).count();

        Self {
            modified_files,
            has_changes: modified_files > 0,
        }
    }
}

/// Full metadata for one project, as returned by `project_info`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub name: String,
    pub path: String,
    pub created: String,
    pub modified: String,

    /// Size reported by `stat` for the project directory itself
    pub size: u64,

    /// Immediate children that are regular files
    pub file_count: usize,

    /// Immediate children that are directories
    pub dir_count: usize,

    pub project_type: ProjectType,

    /// Marker files found, in probe order
    pub project_files: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<GitSummary>,
}
