//! Team Store
//!
//! This module provides the in-memory container for all teams. The store is
//! explicitly owned by its caller and injected into consumers; there is no
//! ambient global state and no "current team" mirror. All mutations are
//! synchronous, validate before touching the snapshot, and signal not-found
//! explicitly instead of silently succeeding.

use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, FieldError, Result};
use crate::model::{Agent, AgentDraft, Task, TaskDraft, Team};
use crate::seed;

/// Minimum length of a team description
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// In-memory store of all teams
#[derive(Debug, Default)]
pub struct TeamStore {
    teams: Vec<Team>,
}

impl TeamStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self { teams: Vec::new() }
    }

    /// Create a store pre-populated with the seed dataset
    #[must_use]
    pub fn with_seed() -> Self {
        Self {
            teams: vec![seed::sample_team()],
        }
    }

    /// All teams in creation order
    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Get a team by id
    #[must_use]
    pub fn team(&self, team_id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Get an agent by id within a team
    #[must_use]
    pub fn agent(&self, team_id: Uuid, agent_id: Uuid) -> Option<&Agent> {
        self.team(team_id).and_then(|t| t.agent(agent_id))
    }

    /// Get a task by id within a team
    #[must_use]
    pub fn task(&self, team_id: Uuid, task_id: Uuid) -> Option<&Task> {
        self.team(team_id).and_then(|t| t.task(task_id))
    }

    fn team_mut(&mut self, team_id: Uuid) -> Result<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or(Error::TeamNotFound(team_id))
    }

    /// Create a new empty team
    pub fn create_team(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&Team> {
        let name = name.into();
        let description = description.into();
        validate_team_fields(&name, &description)?;

        let team = Team::new(name, description);
        debug!(team_id = %team.id, name = %team.name, "Creating team");
        self.teams.push(team);
        let idx = self.teams.len() - 1;
        Ok(&self.teams[idx])
    }

    /// Replace a stored team wholesale, refreshing `updated_at`
    pub fn update_team(&mut self, team: Team) -> Result<&Team> {
        validate_team_fields(&team.name, &team.description)?;

        let slot = self.team_mut(team.id)?;
        debug!(team_id = %team.id, "Updating team");
        *slot = team;
        slot.touch();
        Ok(slot)
    }

    /// Remove a team; other teams are unaffected
    pub fn delete_team(&mut self, team_id: Uuid) -> Result<Team> {
        let pos = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(Error::TeamNotFound(team_id))?;
        debug!(team_id = %team_id, "Deleting team");
        Ok(self.teams.remove(pos))
    }

    /// Append a new agent to a team
    pub fn add_agent(&mut self, team_id: Uuid, draft: AgentDraft) -> Result<&Agent> {
        validate_agent_fields(
            &draft.name,
            &draft.role,
            &draft.goal,
            &draft.backstory,
            &draft.tools,
        )?;

        let team = self.team_mut(team_id)?;
        let agent = Agent::from_draft(draft);
        debug!(team_id = %team_id, agent_id = %agent.id, "Adding agent");
        team.agents.push(agent);
        team.touch();
        let idx = team.agents.len() - 1;
        Ok(&team.agents[idx])
    }

    /// Replace an agent within a team
    pub fn update_agent(&mut self, team_id: Uuid, agent: Agent) -> Result<&Agent> {
        validate_agent_fields(
            &agent.name,
            &agent.role,
            &agent.goal,
            &agent.backstory,
            &agent.tools,
        )?;

        let team = self.team_mut(team_id)?;
        let pos = team
            .agents
            .iter()
            .position(|a| a.id == agent.id)
            .ok_or(Error::AgentNotFound(agent.id))?;
        debug!(team_id = %team_id, agent_id = %agent.id, "Updating agent");
        team.agents[pos] = agent;
        team.touch();
        Ok(&team.agents[pos])
    }

    /// Remove an agent, cascading to every task assigned to it
    pub fn delete_agent(&mut self, team_id: Uuid, agent_id: Uuid) -> Result<Agent> {
        let team = self.team_mut(team_id)?;
        let pos = team
            .agents
            .iter()
            .position(|a| a.id == agent_id)
            .ok_or(Error::AgentNotFound(agent_id))?;
        debug!(team_id = %team_id, agent_id = %agent_id, "Deleting agent and assigned tasks");
        let agent = team.agents.remove(pos);
        team.tasks.retain(|t| t.agent_id != agent_id);
        team.touch();
        Ok(agent)
    }

    /// Append a new task to a team
    pub fn add_task(&mut self, team_id: Uuid, draft: TaskDraft) -> Result<&Task> {
        let team = self.team_mut(team_id)?;
        validate_task_fields(
            team,
            &draft.description,
            &draft.expected_output,
            draft.agent_id,
            &draft.dependencies,
            None,
        )?;

        let task = Task::from_draft(draft);
        debug!(team_id = %team_id, task_id = %task.id, "Adding task");
        team.tasks.push(task);
        team.touch();
        let idx = team.tasks.len() - 1;
        Ok(&team.tasks[idx])
    }

    /// Replace a task within a team
    pub fn update_task(&mut self, team_id: Uuid, task: Task) -> Result<&Task> {
        let team = self.team_mut(team_id)?;
        validate_task_fields(
            team,
            &task.description,
            &task.expected_output,
            task.agent_id,
            &task.dependencies,
            Some(task.id),
        )?;

        let pos = team
            .tasks
            .iter()
            .position(|t| t.id == task.id)
            .ok_or(Error::TaskNotFound(task.id))?;
        debug!(team_id = %team_id, task_id = %task.id, "Updating task");
        team.tasks[pos] = task;
        team.touch();
        Ok(&team.tasks[pos])
    }

    /// Remove a task, stripping its id from every other task's dependencies
    pub fn delete_task(&mut self, team_id: Uuid, task_id: Uuid) -> Result<Task> {
        let team = self.team_mut(team_id)?;
        let pos = team
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(Error::TaskNotFound(task_id))?;
        debug!(team_id = %team_id, task_id = %task_id, "Deleting task");
        for task in &mut team.tasks {
            task.dependencies.retain(|dep| *dep != task_id);
        }
        let task = team.tasks.remove(pos);
        team.touch();
        Ok(task)
    }
}

fn validate_team_fields(name: &str, description: &str) -> Result<()> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be blank"));
    }
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.push(FieldError::new(
            "description",
            format!("must be at least {MIN_DESCRIPTION_LEN} characters"),
        ));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}

fn validate_agent_fields(
    name: &str,
    role: &str,
    goal: &str,
    backstory: &str,
    tools: &[crate::catalog::Tool],
) -> Result<()> {
    let mut errors = Vec::new();
    for (field, value) in [
        ("name", name),
        ("role", role),
        ("goal", goal),
        ("backstory", backstory),
    ] {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, "must not be blank"));
        }
    }
    // Duplicate selection is prevented by the form in the UI; enforce the
    // same rule here for callers that bypass it.
    for (i, tool) in tools.iter().enumerate() {
        if tools[..i].iter().any(|t| t.id == tool.id) {
            errors.push(FieldError::new("tools", format!("duplicate tool: {}", tool.id)));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}

fn validate_task_fields(
    team: &Team,
    description: &str,
    expected_output: &str,
    agent_id: Uuid,
    dependencies: &[Uuid],
    own_id: Option<Uuid>,
) -> Result<()> {
    let mut errors = Vec::new();
    if description.trim().is_empty() {
        errors.push(FieldError::new("description", "must not be blank"));
    }
    if expected_output.trim().is_empty() {
        errors.push(FieldError::new("expected_output", "must not be blank"));
    }
    if team.agent(agent_id).is_none() {
        errors.push(FieldError::new("agent_id", "must reference an agent in the team"));
    }
    for dep in dependencies {
        if own_id == Some(*dep) {
            errors.push(FieldError::new("dependencies", "task cannot depend on itself"));
        } else if team.task(*dep).is_none() {
            errors.push(FieldError::new(
                "dependencies",
                format!("unknown task: {dep}"),
            ));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}
