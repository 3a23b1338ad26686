//! CrewCanvas Core - Team Entity Model and Store
//!
//! This crate provides the core data layer for CrewCanvas:
//! - Model: Team, Agent, and Task aggregate types
//! - Catalog: The fixed tool catalog agents draw from
//! - Store: In-memory team container with validated mutations
//! - Graph: Task/agent edge derivation for layout and export
//! - Seed: The startup fixture dataset
//! - Error: Validation and not-found error types
//!
//! ## Usage
//!
//! ```
//! use crewcanvas_core::{team_graph, TeamStore};
//!
//! let mut store = TeamStore::with_seed();
//! let team = store.create_team("Docs Crew", "Writes the documentation").unwrap();
//! let team_id = team.id;
//!
//! let snapshot = store.team(team_id).unwrap();
//! let graph = team_graph(snapshot);
//! assert!(graph.assignments.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod graph;
pub mod model;
pub mod seed;
pub mod store;

// Re-export main types
pub use catalog::{builtin_catalog, find_tool, Tool};
pub use error::{Error, FieldError, Result};
pub use graph::{team_graph, AssignmentEdge, DependencyEdge, TeamGraph};
pub use model::{Agent, AgentDraft, Task, TaskDraft, Team};
pub use store::{TeamStore, MIN_DESCRIPTION_LEN};
