//! # project-finder
//!
//! An MCP server that lets an assistant browse a directory of code projects.
//!
//! The server speaks JSON-RPC over stdio and offers five tools:
//!
//! - `list_projects` - list project directories, optionally filtered
//! - `find_project` - exact or fuzzy lookup by name
//! - `project_info` - type, marker files, counts and git status of one project
//! - `recent_projects` - projects sorted by modification time
//! - `project_finder_help` - usage help
//!
//! ## Usage
//!
//! ```bash
//! # Browse ~/Projects
//! PROJECTS_DIR=~/Projects project-finder
//!
//! # Same, with verbose logging on stderr
//! project-finder --root ~/Projects --log-level debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use project_finder::{cli::Cli, config::FileConfig, finder::ProjectFinder, server::Server};
use std::process::exit;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Entry point for the project-finder server.
///
/// Errors are reported on stderr and turn into a non-zero exit status;
/// stdout is reserved for protocol messages.
#[tokio::main]
async fn main() {
    if let Err(err) = inner_main().await {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Initializes logging on stderr
/// 4. Configures the thread pool used for stat batches
/// 5. Serves MCP requests on stdio until the client disconnects
///
/// # Errors
///
/// This function can return errors from:
/// - Thread pool configuration
/// - The MCP handshake or the stdio transport
async fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let (file_config, config_error) = match FileConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (FileConfig::default(), Some(e)),
    };

    init_logging(&args.log_level(&file_config));

    if let Some(e) = config_error {
        warn!("Failed to load config file, using defaults: {e}");
    }

    let config = args.finder_config(&file_config);

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        root = %config.root.display(),
        "starting project-finder"
    );

    Server::new(ProjectFinder::new(config)).serve_stdio().await
}

/// Install the stderr subscriber. `RUST_LOG` wins over `default_filter`.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(project_finder::cli::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
}
