//! CrewCanvas Canvas - Layout Geometry and Script Export
//!
//! This crate provides the derived views over a team snapshot:
//! - Layout: Radial placement of agents and tasks with connector curves
//! - Export: Deterministic CrewAI Python script generation
//!
//! Both are pure functions of a `crewcanvas_core::Team`; they hold no state
//! and are recomputed fresh on every call. Painting the geometry and
//! displaying the script are left to UI collaborators.
//!
//! ## Usage
//!
//! ```
//! use crewcanvas_canvas::{export_team, layout_team, CanvasSize};
//! use crewcanvas_core::seed;
//!
//! let team = seed::sample_team();
//! let layout = layout_team(&team, CanvasSize::new(1200.0, 800.0));
//! assert_eq!(layout.agents.len(), 2);
//!
//! let script = export_team(&team);
//! assert!(script.source.contains("research_specialist = Agent("));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod export;
pub mod layout;

// Re-export main types
pub use export::{export_team, slugify, task_slug, CrewScript, ExportWarning};
pub use layout::{
    layout_team, AgentNode, Arrowhead, AssignmentCurve, CanvasSize, DependencyCurve, Point,
    QuadCurve, TaskNode, TeamLayout,
};
