//! MCP server over stdio.
//!
//! Framing, the `initialize` handshake and request ids are handled by
//! `rmcp`. This module declares the tools and hands every `tools/call` to
//! the [`ProjectFinder`] on a blocking thread; calls share no state.

pub mod tools;

use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParams, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    transport::stdio,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::finder::ProjectFinder;

pub const SERVER_NAME: &str = "project-finder";

const INSTRUCTIONS: &str = "Browse the projects in one directory. Use list_projects to see what exists, find_project to locate a project by (partial) name, project_info for details on one project and recent_projects for what was worked on lately.";

/// MCP server backed by a [`ProjectFinder`].
#[derive(Clone)]
pub struct Server {
    finder: Arc<ProjectFinder>,
}

impl Server {
    #[must_use]
    pub fn new(finder: ProjectFinder) -> Self {
        Self {
            finder: Arc::new(finder),
        }
    }

    /// Serve requests on stdin/stdout until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns an error if the MCP handshake fails or the service task dies.
    pub async fn serve_stdio(self) -> Result<()> {
        info!(root = %self.finder.root().display(), "MCP server ready");

        let service = self
            .serve(stdio())
            .await
            .inspect_err(|e| error!("serving error: {e:?}"))
            .context("MCP handshake failed")?;

        let reason = service.waiting().await.context("MCP service task failed")?;
        info!(?reason, "MCP server stopped");

        Ok(())
    }

    /// Run the tool called `name`.
    ///
    /// Domain failures come back as a result with `is_error` set; only an
    /// unknown tool name is an [`McpError`] (invalid params).
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown tool, or if the worker thread running
    /// the tool panicked.
    pub async fn run_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let finder = Arc::clone(&self.finder);
        let tool = name.to_string();
        let arguments = arguments.map_or(Value::Null, Value::Object);

        let outcome = tokio::task::spawn_blocking(move || tools::call(&finder, &tool, arguments))
            .await
            .map_err(|e| McpError::internal_error(format!("Tool {name} failed: {e}"), None))?;

        match outcome {
            Ok(outcome) => {
                debug!(tool = name, is_error = outcome.is_error(), "tool call");
                Ok(outcome.into_call_result())
            }
            Err(unknown) => {
                warn!(tool = name, "unknown tool");
                Err(McpError::invalid_params(unknown.to_string(), None))
            }
        }
    }
}

impl ServerHandler for Server {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::default())
            .with_server_info(
                Implementation::new(SERVER_NAME, env!("CARGO_PKG_VERSION"))
                    .with_title("Project Finder"),
            )
            .with_instructions(INSTRUCTIONS)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(tools::definitions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.run_tool(&request.name, request.arguments).await
    }
}
