//! CrewAI Script Export
//!
//! Deterministic serialization of a team into a CrewAI Python script.
//! Declaration order, variable naming, the tool helper table, and the
//! trailing kickoff call are reproduced exactly for compatibility with
//! existing consumers of the export feature; unknown tool ids and
//! unresolvable agent references are omitted from the text (matching the
//! original behavior) but surfaced through the warnings list.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crewcanvas_core::{Task, Team};

/// Number of description characters contributing to a task's variable name
const TASK_SLUG_PREFIX_LEN: usize = 20;

/// A generated CrewAI script plus anything the generator had to drop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewScript {
    /// The full Python source text
    pub source: String,
    /// Omissions and naming hazards encountered while generating
    pub warnings: Vec<ExportWarning>,
}

/// A non-fatal condition encountered during export. The emitted text is
/// unaffected; these make the silent omissions observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportWarning {
    /// An agent references a tool id with no helper mapping; it was skipped
    UnknownTool {
        /// The referencing agent
        agent_id: Uuid,
        /// The unmapped tool id
        tool_id: String,
    },
    /// A task's assigned agent no longer resolves; the `agent=` line was
    /// omitted
    MissingAgent {
        /// The orphaned task
        task_id: Uuid,
    },
    /// Two tasks produced the same variable name; the script redefines it
    SlugCollision {
        /// The shared variable name
        slug: String,
    },
}

/// Convert free text to a Python variable name: lowercase, whitespace runs
/// collapsed to single underscores, everything outside `[a-z0-9_]` stripped
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut prev_ws = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !prev_ws {
                out.push('_');
            }
            prev_ws = true;
        } else {
            prev_ws = false;
            if c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit() {
                out.push(c);
            }
        }
    }
    out
}

/// Variable name for a task: `task_` plus the first 20 description
/// characters, slugified. Tasks sharing a description prefix collide.
#[must_use]
pub fn task_slug(task: &Task) -> String {
    let prefix: String = task.description.chars().take(TASK_SLUG_PREFIX_LEN).collect();
    slugify(&format!("task_{prefix}"))
}

/// Helper constructor lines for a catalog tool id, indented for a
/// `tools=[...]` list. Ids outside the table have no mapping.
fn tool_helper_lines(tool_id: &str) -> Option<&'static [&'static str]> {
    match tool_id {
        "web-search" => Some(&["        WebSearchTool(),\n"]),
        "file-manager" => Some(&["        FileReadTool(),\n", "        FileWriteTool(),\n"]),
        "code-interpreter" => Some(&["        # Add your code interpreter tool here\n"]),
        _ => None,
    }
}

/// Serialize a team into a CrewAI Python script
#[must_use]
pub fn export_team(team: &Team) -> CrewScript {
    let mut warnings = Vec::new();
    let mut code = String::from("from crewai import Agent, Task, Crew, Process\n\n");

    if team.agents.iter().any(|a| !a.tools.is_empty()) {
        code.push_str("# Import tools based on your needs\n");
        code.push_str("from crewai.tools import WebSearchTool, FileReadTool, FileWriteTool\n\n");
    }

    code.push_str("# Define agents\n");
    for agent in &team.agents {
        code.push_str(&format!("{} = Agent(\n", slugify(&agent.name)));
        code.push_str(&format!("    role=\"{}\",\n", agent.role));
        code.push_str(&format!("    goal=\"{}\",\n", agent.goal));
        code.push_str(&format!("    backstory=\"{}\",\n", agent.backstory));

        if !agent.tools.is_empty() {
            code.push_str("    tools=[\n");
            for tool in &agent.tools {
                match tool_helper_lines(&tool.id) {
                    Some(lines) => {
                        for line in lines {
                            code.push_str(line);
                        }
                    }
                    None => {
                        warn!(agent_id = %agent.id, tool_id = %tool.id, "No helper for tool, skipping");
                        warnings.push(ExportWarning::UnknownTool {
                            agent_id: agent.id,
                            tool_id: tool.id.clone(),
                        });
                    }
                }
            }
            code.push_str("    ],\n");
        }

        code.push_str(&format!("    allow_delegation={},\n", agent.allow_delegation));
        code.push_str(&format!("    verbose={}\n", agent.verbose));
        code.push_str(")\n\n");
    }

    code.push_str("# Define tasks\n");
    for task in &team.tasks {
        code.push_str(&format!("{} = Task(\n", task_slug(task)));
        code.push_str(&format!("    description=\"{}\",\n", task.description));

        match team.agent(task.agent_id) {
            Some(agent) => {
                code.push_str(&format!("    agent={},\n", slugify(&agent.name)));
            }
            None => {
                warn!(task_id = %task.id, "Assigned agent not found, omitting reference");
                warnings.push(ExportWarning::MissingAgent { task_id: task.id });
            }
        }

        code.push_str(&format!("    expected_output=\"{}\",\n", task.expected_output));

        if !task.dependencies.is_empty() {
            code.push_str("    dependencies=[\n");
            for dep_id in &task.dependencies {
                if let Some(dep) = team.task(*dep_id) {
                    code.push_str(&format!("        {},\n", task_slug(dep)));
                }
            }
            code.push_str("    ],\n");
        }
        code.push_str(")\n\n");
    }

    // Redefinitions from truncated-description collisions are preserved in
    // the text; report them so callers can surface the hazard.
    let slugs: Vec<String> = team.tasks.iter().map(task_slug).collect();
    for (i, slug) in slugs.iter().enumerate() {
        let seen_before = slugs[..i].contains(slug);
        let already_reported = warnings
            .iter()
            .any(|w| matches!(w, ExportWarning::SlugCollision { slug: s } if s == slug));
        if seen_before && !already_reported {
            warn!(slug = %slug, "Task variable name collision");
            warnings.push(ExportWarning::SlugCollision { slug: slug.clone() });
        }
    }

    code.push_str("# Create the crew\n");
    code.push_str(&format!("{} = Crew(\n", slugify(&team.name)));
    code.push_str("    agents=[\n");
    for agent in &team.agents {
        code.push_str(&format!("        {},\n", slugify(&agent.name)));
    }
    code.push_str("    ],\n");
    code.push_str("    tasks=[\n");
    for slug in &slugs {
        code.push_str(&format!("        {},\n", slug));
    }
    code.push_str("    ],\n");
    code.push_str("    process=Process.sequential,  # or Process.hierarchical\n");
    code.push_str("    verbose=True\n");
    code.push_str(")\n\n");

    code.push_str("# Run the crew\n");
    code.push_str(&format!("result = {}.kickoff()\n", slugify(&team.name)));

    CrewScript {
        source: code,
        warnings,
    }
}
