//! Help text for the `project_finder_help` tool.

use std::path::Path;

/// A documented tool: name, summary, parameter lines and an example call.
struct ToolHelp {
    name: &'static str,
    summary: &'static str,
    params: &'static [&'static str],
    example: &'static str,
}

const TOOLS: [ToolHelp; 5] = [
    ToolHelp {
        name: "list_projects",
        summary: "List the projects in the projects directory",
        params: &[
            "filter (string, optional): only names containing this text, case-insensitive",
            "details (boolean, optional, default false): include modified/created timestamps as JSON",
        ],
        example: r#"{"filter": "api", "details": true}"#,
    },
    ToolHelp {
        name: "find_project",
        summary: "Find a project by exact or partial name",
        params: &[
            "name (string, required): project name; an exact match returns its path, otherwise up to 5 similar projects",
        ],
        example: r#"{"name": "web"}"#,
    },
    ToolHelp {
        name: "project_info",
        summary: "Show details for one project: type, marker files, counts and git status",
        params: &["name (string, required): exact project directory name"],
        example: r#"{"name": "my-app"}"#,
    },
    ToolHelp {
        name: "recent_projects",
        summary: "List the most recently modified projects",
        params: &["count (number, optional, default 10): how many projects to return"],
        example: r#"{"count": 5}"#,
    },
    ToolHelp {
        name: "project_finder_help",
        summary: "Show this help, or help for one command",
        params: &["command (string, optional): a command name from the list above"],
        example: r#"{"command": "find_project"}"#,
    },
];

/// Names of every tool, in declaration order.
#[must_use]
pub fn command_names() -> Vec<&'static str> {
    TOOLS.iter().map(|t| t.name).collect()
}

/// Render help for `command`, or the overview when `command` is `None`.
///
/// Unknown commands produce a "not found" message listing the valid names.
#[must_use]
pub fn render(command: Option<&str>, root: &Path) -> String {
    match command.filter(|c| !c.trim().is_empty()) {
        None => overview(root),
        Some(name) => match TOOLS.iter().find(|t| t.name == name) {
            Some(tool) => detail(tool),
            None => format!(
                "Command \"{name}\" not found. Available commands: {}",
                command_names().join(", ")
            ),
        },
    }
}

fn overview(root: &Path) -> String {
    let mut out = format!(
        "Project Finder\n\nBrowses the projects in {}\n\nCommands:\n",
        root.display()
    );

    for tool in &TOOLS {
        out.push_str(&format!("  {:<20} {}\n", tool.name, tool.summary));
    }

    out.push_str("\nUse project_finder_help with {\"command\": \"<name>\"} for details.");
    out
}

fn detail(tool: &ToolHelp) -> String {
    let mut out = format!("{}\n\n{}\n\nParameters:\n", tool.name, tool.summary);

    for param in tool.params {
        out.push_str(&format!("  - {param}\n"));
    }

    out.push_str(&format!("\nExample:\n  {}", tool.example));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_lists_every_command_and_root() {
        let text = render(None, Path::new("/home/dev/projects"));

        assert!(text.contains("/home/dev/projects"));
        for name in command_names() {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_blank_command_is_overview() {
        let root = Path::new("/p");
        assert_eq!(render(Some("  "), root), render(None, root));
    }

    #[test]
    fn test_command_detail() {
        let text = render(Some("recent_projects"), Path::new("/p"));

        assert!(text.starts_with("recent_projects"));
        assert!(text.contains("count (number, optional, default 10)"));
        assert!(text.contains("Example:"));
    }

    #[test]
    fn test_fallback_echoes_command_as_sent() {
        let text = render(Some("  deploy "), Path::new("/p"));

        assert!(text.starts_with("Command \"  deploy \" not found."));
    }

    #[test]
    fn test_unknown_command_fallback() {
        let text = render(Some("delete_everything"), Path::new("/p"));

        assert_eq!(
            text,
            "Command \"delete_everything\" not found. Available commands: list_projects, find_project, project_info, recent_projects, project_finder_help"
        );
    }
}
