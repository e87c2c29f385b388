//! Configuration types and options for the application.
//!
//! This module contains the persistent configuration file format and the
//! resolved [`FinderConfig`] value that is handed to every component.

pub mod file;
pub mod finder;

pub use file::FileConfig;
pub use finder::FinderConfig;
