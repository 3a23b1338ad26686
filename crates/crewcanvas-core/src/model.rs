//! Entity Model
//!
//! This module defines the team aggregate for CrewCanvas.
//! A team owns an ordered sequence of agents and an ordered sequence of
//! tasks; tasks reference their assigned agent and their dependency tasks
//! by id within the same team.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Tool;

/// An agent role definition, owned by exactly one team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier
    pub id: Uuid,

    /// Display name (source of the exported variable slug)
    pub name: String,

    /// Role label
    pub role: String,

    /// What the agent is trying to achieve
    pub goal: String,

    /// Background context given to the agent
    pub backstory: String,

    /// Whether the agent may delegate work to other agents
    pub allow_delegation: bool,

    /// Whether the agent runs with verbose output
    pub verbose: bool,

    /// Catalog tools the agent may use, in selection order
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// An agent draft as submitted by a form; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDraft {
    /// Display name
    pub name: String,
    /// Role label
    pub role: String,
    /// What the agent is trying to achieve
    pub goal: String,
    /// Background context given to the agent
    pub backstory: String,
    /// Whether the agent may delegate work to other agents
    pub allow_delegation: bool,
    /// Whether the agent runs with verbose output
    pub verbose: bool,
    /// Catalog tools the agent may use, in selection order
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl Agent {
    /// Materialize a draft with a fresh id
    #[must_use]
    pub fn from_draft(draft: AgentDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            role: draft.role,
            goal: draft.goal,
            backstory: draft.backstory,
            allow_delegation: draft.allow_delegation,
            verbose: draft.verbose,
            tools: draft.tools,
        }
    }

    /// Check whether the agent references a tool by catalog id
    #[must_use]
    pub fn has_tool(&self, tool_id: &str) -> bool {
        self.tools.iter().any(|t| t.id == tool_id)
    }
}

/// A unit of work assigned to one agent, owned by exactly one team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,

    /// What the task is about (source of the exported variable slug)
    pub description: String,

    /// Agent within the same team that carries out the task
    pub agent_id: Uuid,

    /// What the task should produce
    pub expected_output: String,

    /// Ids of tasks within the same team that must complete first,
    /// in declaration order. Never contains the task's own id.
    #[serde(default)]
    pub dependencies: Vec<Uuid>,
}

/// A task draft as submitted by a form; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    /// What the task is about
    pub description: String,
    /// Agent within the same team that carries out the task
    pub agent_id: Uuid,
    /// What the task should produce
    pub expected_output: String,
    /// Ids of tasks within the same team that must complete first
    #[serde(default)]
    pub dependencies: Vec<Uuid>,
}

impl Task {
    /// Materialize a draft with a fresh id
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            agent_id: draft.agent_id,
            expected_output: draft.expected_output,
            dependencies: draft.dependencies,
        }
    }
}

/// The root aggregate: a named crew of agents and tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    pub id: Uuid,

    /// Team name (source of the exported crew variable slug)
    pub name: String,

    /// What the team does (minimum 10 characters)
    pub description: String,

    /// Agents in creation order
    pub agents: Vec<Agent>,

    /// Tasks in creation order
    pub tasks: Vec<Task>,

    /// When the team was created
    pub created_at: DateTime<Utc>,

    /// When the team or any of its agents/tasks was last modified
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new empty team
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            agents: Vec::new(),
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Get an agent by id
    #[must_use]
    pub fn agent(&self, agent_id: Uuid) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    /// Get a task by id
    #[must_use]
    pub fn task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Position of an agent in team order
    #[must_use]
    pub fn agent_index(&self, agent_id: Uuid) -> Option<usize> {
        self.agents.iter().position(|a| a.id == agent_id)
    }

    /// Position of a task in team order
    #[must_use]
    pub fn task_index(&self, task_id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn draft(name: &str) -> AgentDraft {
        AgentDraft {
            name: name.to_string(),
            role: "Researcher".to_string(),
            goal: "Find information".to_string(),
            backstory: "An expert researcher".to_string(),
            allow_delegation: false,
            verbose: false,
            tools: Vec::new(),
        }
    }

    #[test]
    fn test_team_starts_empty() {
        let team = Team::new("Test Team", "A team for unit tests");
        assert!(team.agents.is_empty());
        assert!(team.tasks.is_empty());
        assert_eq!(team.created_at, team.updated_at);
    }

    #[test]
    fn test_touch_advances_updated_at() {
        let mut team = Team::new("Test Team", "A team for unit tests");
        let before = team.updated_at;
        team.touch();
        assert!(team.updated_at >= before);
        assert_eq!(team.created_at, before);
    }

    #[test]
    fn test_agent_from_draft_assigns_fresh_id() {
        let a = Agent::from_draft(draft("One"));
        let b = Agent::from_draft(draft("Two"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "One");
    }

    #[test]
    fn test_agent_has_tool() {
        let catalog = builtin_catalog();
        let mut d = draft("Toolish");
        d.tools.push(catalog[0].clone());
        let agent = Agent::from_draft(d);
        assert!(agent.has_tool(&catalog[0].id));
        assert!(!agent.has_tool("no-such-tool"));
    }

    #[test]
    fn test_team_lookups() {
        let mut team = Team::new("Test Team", "A team for unit tests");
        let agent = Agent::from_draft(draft("Solo"));
        let agent_id = agent.id;
        team.agents.push(agent);

        assert_eq!(team.agent(agent_id).unwrap().name, "Solo");
        assert_eq!(team.agent_index(agent_id), Some(0));
        assert!(team.agent(Uuid::new_v4()).is_none());
        assert!(team.task(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_task_serialization_defaults_dependencies() {
        let json = format!(
            r#"{{"id":"{}","description":"Do it","agent_id":"{}","expected_output":"Done"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let task: Task = serde_json::from_str(&json).unwrap();
        assert!(task.dependencies.is_empty());
    }
}
