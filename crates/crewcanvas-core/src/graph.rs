//! Dependency Graph Utility
//!
//! Pure derivation of the edge sets among a team's tasks and agents,
//! consumed by the layout engine and the script exporter. Edges whose
//! target no longer resolves are omitted. No cycle detection or
//! topological sort is performed; consumers take the raw edges.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Team;

/// A task-to-assigned-agent edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEdge {
    /// The task
    pub task_id: Uuid,
    /// The agent it is assigned to
    pub agent_id: Uuid,
}

/// A task-to-depended-upon-task edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The depending task
    pub task_id: Uuid,
    /// The task it depends on
    pub depends_on: Uuid,
}

/// Edge sets derived from a team snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamGraph {
    /// One edge per task whose assigned agent resolves, in team order
    pub assignments: Vec<AssignmentEdge>,
    /// One edge per resolvable (task, dependency) pair, in team order
    /// then each task's own dependency order
    pub dependencies: Vec<DependencyEdge>,
}

/// Derive the edge sets for a team
#[must_use]
pub fn team_graph(team: &Team) -> TeamGraph {
    let mut graph = TeamGraph::default();
    for task in &team.tasks {
        if team.agent(task.agent_id).is_some() {
            graph.assignments.push(AssignmentEdge {
                task_id: task.id,
                agent_id: task.agent_id,
            });
        }
        for dep in &task.dependencies {
            if team.task(*dep).is_some() {
                graph.dependencies.push(DependencyEdge {
                    task_id: task.id,
                    depends_on: *dep,
                });
            }
        }
    }
    graph
}
