//! Project data structures.
//!
//! This module contains the types that describe the projects living under the
//! configured root: the lightweight [`ProjectEntry`] produced by enumeration,
//! its stat data, and the richer [`ProjectDetail`] built by the inspector.
//!
//! ## Main Parts
//!
//! - [`ProjectEntry`] - An immediate, non-hidden subdirectory of the root
//! - [`EntryStats`] - Timestamps and size from one stat call
//! - [`ProjectDetail`] - Full metadata for a single project
//! - [`ProjectType`] - Detected ecosystem, in precedence order

pub mod detail;
pub mod entry;

pub use detail::{GitSummary, MARKER_FILES, ProjectDetail, ProjectType};
pub use entry::{EntryStats, ListedProject, ProjectEntry, RecentProject, StatedEntry};
