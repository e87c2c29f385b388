//! Tool declarations and dispatch.
//!
//! Every tool call produces a [`ToolOutcome`]: domain failures (missing
//! root, unknown project, bad arguments) are rendered as message text, never
//! as protocol errors. Only a call to a tool that does not exist is reported
//! as [`UnknownTool`].

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;

use crate::{
    error::FinderError,
    finder::ProjectFinder,
    recency::DEFAULT_RECENT_COUNT,
};

/// Result of a tool call, rendered as a single text content item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The operation produced its payload
    Success(String),

    /// The operation failed; the text explains why
    Message(String),
}

impl ToolOutcome {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Message(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// The MCP `tools/call` result: one text item, flagged as an error for
    /// [`ToolOutcome::Message`].
    #[must_use]
    pub fn into_call_result(self) -> CallToolResult {
        match self {
            Self::Success(text) => CallToolResult::success(vec![Content::text(text)]),
            Self::Message(text) => CallToolResult::error(vec![Content::text(text)]),
        }
    }
}

impl From<FinderError> for ToolOutcome {
    fn from(err: FinderError) -> Self {
        Self::Message(err.to_string())
    }
}

/// The requested tool does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

#[derive(Deserialize, Default)]
struct ListArgs {
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    details: Option<bool>,
}

#[derive(Deserialize)]
struct NameArgs {
    name: String,
}

#[derive(Deserialize, Default)]
struct RecentArgs {
    #[serde(default)]
    count: Option<f64>,
}

#[derive(Deserialize, Default)]
struct HelpArgs {
    #[serde(default)]
    command: Option<String>,
}

/// Declarations returned by `tools/list`.
#[must_use]
pub fn definitions() -> Vec<Tool> {
    let declared = json!([
        {
            "name": "list_projects",
            "description": "List the projects (immediate subdirectories) in the projects directory. Hidden directories are skipped.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "filter": { "type": "string", "description": "Only include projects whose name contains this text (case-insensitive)" },
                    "details": { "type": "boolean", "description": "Return a JSON array with path, modified and created timestamps. Default: false" }
                }
            }
        },
        {
            "name": "find_project",
            "description": "Find a project by name. An exact (case-insensitive) match returns its path; otherwise up to 5 projects containing the name are returned, those starting with it first.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Project name or part of it" }
                },
                "required": ["name"]
            }
        },
        {
            "name": "project_info",
            "description": "Detailed information about one project: timestamps, size, file and directory counts, detected project type, marker files and git status.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Exact project directory name" }
                },
                "required": ["name"]
            }
        },
        {
            "name": "recent_projects",
            "description": "The most recently modified projects, newest first, with a relative age such as '3 days ago'.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "count": { "type": "number", "description": "Number of projects to return. Default: 10" }
                }
            }
        },
        {
            "name": "project_finder_help",
            "description": "Help for the project finder tools.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "command": { "type": "string", "description": "Tool name to get help for" }
                }
            }
        }
    ]);

    let Value::Array(declared) = declared else {
        return Vec::new();
    };

    declared.into_iter().filter_map(to_tool).collect()
}

fn to_tool(declared: Value) -> Option<Tool> {
    let Value::Object(mut fields) = declared else {
        return None;
    };

    let name = fields.get("name")?.as_str()?.to_string();
    let description = fields.get("description")?.as_str()?.to_string();
    let input_schema = match fields.remove("inputSchema") {
        Some(Value::Object(schema)) => schema,
        _ => JsonObject::new(),
    };

    Some(Tool::new(name, description, Arc::new(input_schema)))
}

/// Run the tool called `name` with `arguments`.
///
/// # Errors
///
/// Returns [`UnknownTool`] if `name` is not one of the declared tools.
pub fn call(finder: &ProjectFinder, name: &str, arguments: Value) -> Result<ToolOutcome, UnknownTool> {
    let outcome = match name {
        "list_projects" => list_projects(finder, arguments),
        "find_project" => find_project(finder, arguments),
        "project_info" => project_info(finder, arguments),
        "recent_projects" => recent_projects(finder, arguments),
        "project_finder_help" => project_finder_help(finder, arguments),
        _ => return Err(UnknownTool(name.to_string())),
    };

    Ok(outcome.unwrap_or_else(ToolOutcome::from))
}

/// Decode tool arguments; an absent or null value counts as `{}`.
fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, FinderError> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };

    serde_json::from_value(arguments)
        .map_err(|e| FinderError::InvalidArguments(format!("{tool}: {e}")))
}

fn list_projects(finder: &ProjectFinder, arguments: Value) -> Result<ToolOutcome, FinderError> {
    let args: ListArgs = parse_args("list_projects", arguments)?;
    let filter = args.filter.as_deref();

    if args.details.unwrap_or(false) {
        let projects = finder.list_detailed(filter)?;
        return Ok(ToolOutcome::Success(serde_json::to_string_pretty(&projects)?));
    }

    let names = finder.list_names(filter)?;
    if names.is_empty() {
        let text = match filter.filter(|f| !f.is_empty()) {
            Some(f) => format!("No projects found matching \"{f}\""),
            None => "No projects found".to_string(),
        };
        return Ok(ToolOutcome::Success(text));
    }

    Ok(ToolOutcome::Success(names.join("\n")))
}

fn find_project(finder: &ProjectFinder, arguments: Value) -> Result<ToolOutcome, FinderError> {
    let args: NameArgs = parse_args("find_project", arguments)?;

    Ok(ToolOutcome::Success(finder.find_project(&args.name)?.render()))
}

fn project_info(finder: &ProjectFinder, arguments: Value) -> Result<ToolOutcome, FinderError> {
    let args: NameArgs = parse_args("project_info", arguments)?;
    let detail = finder.project_info(&args.name)?;

    Ok(ToolOutcome::Success(serde_json::to_string_pretty(&detail)?))
}

fn recent_projects(finder: &ProjectFinder, arguments: Value) -> Result<ToolOutcome, FinderError> {
    let args: RecentArgs = parse_args("recent_projects", arguments)?;
    let recent = finder.recent_projects(recent_count(args.count))?;

    Ok(ToolOutcome::Success(serde_json::to_string_pretty(&recent)?))
}

fn project_finder_help(finder: &ProjectFinder, arguments: Value) -> Result<ToolOutcome, FinderError> {
    let args: HelpArgs = parse_args("project_finder_help", arguments)?;

    Ok(ToolOutcome::Success(finder.help(args.command.as_deref())))
}

/// Floor a requested count; negatives become zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn recent_count(requested: Option<f64>) -> usize {
    match requested {
        None => DEFAULT_RECENT_COUNT,
        Some(n) if n <= 0.0 => 0,
        Some(n) => n.floor() as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FinderConfig, vcs::{VcsError, VcsProbe}};
    use std::{fs, path::Path};
    use tempfile::TempDir;

    struct NoVcs;

    impl VcsProbe for NoVcs {
        fn status(&self, _dir: &Path) -> Result<String, VcsError> {
            Err(VcsError::Spawn {
                program: "git".to_string(),
                source: std::io::Error::other("not installed"),
            })
        }
    }

    fn finder_with(dirs: &[&str]) -> (TempDir, ProjectFinder) {
        let tmp = TempDir::new().unwrap();
        for dir in dirs {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        let finder = ProjectFinder::with_vcs(FinderConfig::new(tmp.path()), Box::new(NoVcs));
        (tmp, finder)
    }

    #[test]
    fn test_recent_count() {
        assert_eq!(recent_count(None), 10);
        assert_eq!(recent_count(Some(3.0)), 3);
        assert_eq!(recent_count(Some(2.9)), 2);
        assert_eq!(recent_count(Some(-4.0)), 0);
        assert_eq!(recent_count(Some(0.0)), 0);
    }

    #[test]
    fn test_definitions_cover_every_tool() {
        let defs = definitions();
        let names: Vec<&str> = defs.iter().map(|t| &*t.name).collect();

        assert_eq!(names, crate::help::command_names());
        for tool in &defs {
            assert_eq!(tool.input_schema.get("type"), Some(&json!("object")));
        }
    }

    #[test]
    fn test_unknown_tool_is_an_error() {
        let (_tmp, finder) = finder_with(&[]);

        assert_eq!(
            call(&finder, "rm_rf", Value::Null),
            Err(UnknownTool("rm_rf".to_string()))
        );
    }

    #[test]
    fn test_list_projects_names_with_filter() {
        let (_tmp, finder) = finder_with(&["api-server", "web", ".cache"]);

        let outcome = call(&finder, "list_projects", json!({"filter": "API"})).unwrap();

        assert_eq!(outcome, ToolOutcome::Success("api-server".to_string()));
    }

    #[test]
    fn test_list_projects_no_match_message() {
        let (_tmp, finder) = finder_with(&["web"]);

        let outcome = call(&finder, "list_projects", json!({"filter": "zzz"})).unwrap();

        assert_eq!(
            outcome,
            ToolOutcome::Success("No projects found matching \"zzz\"".to_string())
        );
    }

    #[test]
    fn test_list_projects_details_is_json() {
        let (tmp, finder) = finder_with(&["web"]);

        let outcome = call(&finder, "list_projects", json!({"details": true})).unwrap();
        let parsed: Value = serde_json::from_str(outcome.text()).unwrap();

        assert_eq!(parsed[0]["name"], "web");
        assert_eq!(
            parsed[0]["path"],
            tmp.path().join("web").display().to_string()
        );
        assert!(parsed[0]["modified"].is_string());
        assert!(parsed[0]["created"].is_string());
    }

    #[test]
    fn test_wrong_argument_type_is_message() {
        let (_tmp, finder) = finder_with(&["web"]);

        let outcome = call(&finder, "list_projects", json!({"details": "yes"})).unwrap();

        assert!(outcome.is_error());
        assert!(outcome.text().starts_with("Invalid arguments: list_projects"));
    }

    #[test]
    fn test_missing_name_is_message() {
        let (_tmp, finder) = finder_with(&["web"]);

        let outcome = call(&finder, "find_project", json!({})).unwrap();

        assert!(outcome.is_error());
        assert!(outcome.text().contains("name"));
    }

    #[test]
    fn test_find_project_not_found_message() {
        let (_tmp, finder) = finder_with(&["web"]);

        let outcome = call(&finder, "find_project", json!({"name": "mobile"})).unwrap();

        assert_eq!(
            outcome,
            ToolOutcome::Message("No project found matching \"mobile\"".to_string())
        );
    }

    #[test]
    fn test_project_info_json_shape() {
        let (tmp, finder) = finder_with(&["shop"]);
        fs::write(tmp.path().join("shop/package.json"), "{}").unwrap();

        let outcome = call(&finder, "project_info", json!({"name": "shop"})).unwrap();
        let parsed: Value = serde_json::from_str(outcome.text()).unwrap();

        assert_eq!(parsed["projectType"], "Node.js");
        assert_eq!(parsed["projectFiles"], json!(["package.json"]));
        assert!(parsed.get("git").is_none());
    }

    #[test]
    fn test_recent_projects_default_count() {
        let names: Vec<String> = (0..12).map(|i| format!("p{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (_tmp, finder) = finder_with(&refs);

        let outcome = call(&finder, "recent_projects", Value::Null).unwrap();
        let parsed: Value = serde_json::from_str(outcome.text()).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 10);
        assert!(parsed[0]["ago"].is_string());
    }

    #[test]
    fn test_help_fallback() {
        let (_tmp, finder) = finder_with(&[]);

        let outcome = call(&finder, "project_finder_help", json!({"command": "nope"})).unwrap();

        assert!(!outcome.is_error());
        assert!(outcome.text().starts_with("Command \"nope\" not found."));
    }

    #[test]
    fn test_call_result_shape() {
        let failed = serde_json::to_value(
            ToolOutcome::Message("boom".to_string()).into_call_result(),
        )
        .unwrap();
        let succeeded = serde_json::to_value(
            ToolOutcome::Success("done".to_string()).into_call_result(),
        )
        .unwrap();

        assert_eq!(failed["content"], json!([{"type": "text", "text": "boom"}]));
        assert_eq!(failed["isError"], true);
        assert_eq!(succeeded["content"][0]["text"], "done");
        assert_eq!(succeeded["isError"], false);
    }
}
