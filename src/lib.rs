//! # project-finder
//!
//! A small MCP server for browsing a directory of code projects.
//!
//! This library provides the operations behind the server's tools: listing
//! the projects under a root, finding one by exact or partial name,
//! inspecting a single project, and ranking projects by recency. The
//! [`server`] module exposes them over JSON-RPC on stdio.

pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod help;
pub mod inspector;
pub mod matcher;
pub mod project;
pub mod recency;
pub mod scanner;
pub mod server;
pub mod utils;
pub mod vcs;
