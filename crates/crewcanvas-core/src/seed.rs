//! Seed Dataset
//!
//! The fixture team loaded once at process start. Ids are freshly
//! generated each run; there is no persistence, so a restart resets the
//! store to exactly this dataset.

use crate::catalog::{builtin_catalog, Tool};
use crate::model::{Agent, AgentDraft, Task, TaskDraft, Team};

fn tool(catalog: &[Tool], id: &str) -> Tool {
    catalog
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .unwrap_or_else(|| Tool::new(id, id, ""))
}

/// Build the sample "AI Development Team" fixture
#[must_use]
pub fn sample_team() -> Team {
    let catalog = builtin_catalog();

    let researcher = Agent::from_draft(AgentDraft {
        name: "Research Specialist".to_string(),
        role: "Researcher".to_string(),
        goal: "Find and analyze information from various sources".to_string(),
        backstory: "An expert at gathering and synthesizing information from multiple sources"
            .to_string(),
        allow_delegation: true,
        verbose: false,
        tools: vec![tool(&catalog, "web-search"), tool(&catalog, "file-manager")],
    });

    let developer = Agent::from_draft(AgentDraft {
        name: "Code Expert".to_string(),
        role: "Developer".to_string(),
        goal: "Write efficient, clean code to solve problems".to_string(),
        backstory: "A seasoned software engineer with expertise in multiple programming languages"
            .to_string(),
        allow_delegation: false,
        verbose: true,
        tools: vec![
            tool(&catalog, "code-interpreter"),
            tool(&catalog, "file-manager"),
        ],
    });

    let research_task = Task::from_draft(TaskDraft {
        description: "Research the latest trends in AI development".to_string(),
        agent_id: researcher.id,
        expected_output: "A comprehensive report on AI trends".to_string(),
        dependencies: Vec::new(),
    });

    let code_task = Task::from_draft(TaskDraft {
        description: "Develop a simple prototype based on research findings".to_string(),
        agent_id: developer.id,
        expected_output: "A working prototype with documentation".to_string(),
        dependencies: vec![research_task.id],
    });

    let mut team = Team::new(
        "AI Development Team",
        "A team focused on researching and developing AI solutions",
    );
    team.agents = vec![researcher, developer];
    team.tasks = vec![research_task, code_task];
    team
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_team_shape() {
        let team = sample_team();
        assert_eq!(team.name, "AI Development Team");
        assert_eq!(team.agents.len(), 2);
        assert_eq!(team.tasks.len(), 2);
        assert_eq!(team.tasks[1].dependencies, vec![team.tasks[0].id]);
    }

    #[test]
    fn test_sample_team_references_resolve() {
        let team = sample_team();
        for task in &team.tasks {
            assert!(team.agent(task.agent_id).is_some());
            for dep in &task.dependencies {
                assert!(team.task(*dep).is_some());
            }
        }
    }

    #[test]
    fn test_sample_agent_tools() {
        let team = sample_team();
        assert!(team.agents[0].has_tool("web-search"));
        assert!(team.agents[0].has_tool("file-manager"));
        assert!(team.agents[1].has_tool("code-interpreter"));
    }

    #[test]
    fn test_sample_team_ids_fresh_per_call() {
        assert_ne!(sample_team().id, sample_team().id);
    }
}
