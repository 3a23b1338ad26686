//! Radial Team Layout
//!
//! Deterministic, pure geometry computation for rendering a team: agents on
//! an inner ring, tasks on an outer ring, quadratic connector curves bowed
//! toward the canvas center, and arrowheads on dependency edges. The output
//! is structured geometry in logical units; pixel painting (colors,
//! gradients, fonts, device scaling) is the consumer's concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crewcanvas_core::{team_graph, Team};

/// Fraction of the half-canvas used for the agent ring radius
const RADIUS_FACTOR: f64 = 0.4;

/// Task ring radius as a multiple of the agent ring radius
const TASK_RING_FACTOR: f64 = 1.8;

/// How far assignment-curve control points are pulled toward center
const ASSIGNMENT_PULL: f64 = 0.2;

/// How far dependency-curve control points are pulled toward center
const DEPENDENCY_PULL: f64 = 0.3;

/// Arrowhead wing length
const ARROW_SIZE: f64 = 10.0;

/// Arrowhead wing angle off the terminal tangent
const ARROW_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// Task card width
const CARD_WIDTH: f64 = 160.0;

/// Horizontal margin subtracted from the card width for label text
const LABEL_MARGIN: f64 = 30.0;

/// Fixed per-character advance used for label wrapping. Real font metrics
/// live in the painting layer; this approximates 13px Inter.
const CHAR_ADVANCE: f64 = 7.0;

/// Maximum wrapped label lines before truncation
const MAX_LABEL_LINES: usize = 2;

/// Canvas dimensions in logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Logical width
    pub width: f64,
    /// Logical height
    pub height: f64,
}

impl CanvasSize {
    /// Create a new canvas size
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canvas center point
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A 2D point in logical canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Move this point `fraction` of the way toward `target`
    #[must_use]
    pub fn toward(self, target: Point, fraction: f64) -> Point {
        Point::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

/// A quadratic Bezier curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadCurve {
    /// Start point
    pub from: Point,
    /// Control point
    pub control: Point,
    /// End point
    pub to: Point,
}

impl QuadCurve {
    /// Build a connector curve bowed `pull` of the way toward `center`
    #[must_use]
    pub fn bowed(from: Point, to: Point, center: Point, pull: f64) -> Self {
        let control = from.midpoint(to).toward(center, pull);
        Self { from, control, to }
    }
}

/// A filled arrowhead triangle at the end of a dependency curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrowhead {
    /// Triangle tip, at the curve's end point
    pub tip: Point,
    /// Wing point at -30 degrees off the terminal tangent
    pub left: Point,
    /// Wing point at +30 degrees off the terminal tangent
    pub right: Point,
}

impl Arrowhead {
    /// Arrowhead for a curve, pointing into its end point
    #[must_use]
    pub fn at_end(curve: &QuadCurve) -> Self {
        let angle = (curve.to.y - curve.control.y).atan2(curve.to.x - curve.control.x);
        let wing = |offset: f64| {
            Point::new(
                curve.to.x - ARROW_SIZE * (angle + offset).cos(),
                curve.to.y - ARROW_SIZE * (angle + offset).sin(),
            )
        };
        Self {
            tip: curve.to,
            left: wing(-ARROW_ANGLE),
            right: wing(ARROW_ANGLE),
        }
    }
}

/// A placed agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentNode {
    /// The agent
    pub agent_id: Uuid,
    /// Circle center on the inner ring
    pub position: Point,
}

/// A placed task card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    /// The task
    pub task_id: Uuid,
    /// Card center on the outer ring
    pub position: Point,
    /// Wrapped description, at most two lines with a trailing ellipsis
    pub label_lines: Vec<String>,
}

/// A task-to-assigned-agent connector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCurve {
    /// The task
    pub task_id: Uuid,
    /// Its assigned agent
    pub agent_id: Uuid,
    /// Curve from the agent position to the task position
    pub curve: QuadCurve,
}

/// A task-to-dependency connector with an arrowhead at the dependency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DependencyCurve {
    /// The depending task
    pub task_id: Uuid,
    /// The task it depends on
    pub depends_on: Uuid,
    /// Curve from the task position to the dependency position
    pub curve: QuadCurve,
    /// Arrowhead pointing into the dependency position
    pub arrowhead: Arrowhead,
}

/// Complete layout geometry for one team
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamLayout {
    /// Placed agents, in team order
    pub agents: Vec<AgentNode>,
    /// Placed tasks, in team order
    pub tasks: Vec<TaskNode>,
    /// Task-to-agent connectors, in team task order
    pub assignments: Vec<AssignmentCurve>,
    /// Task-to-dependency connectors, in team task order then each task's
    /// own dependency order
    pub dependencies: Vec<DependencyCurve>,
}

/// Position of item `index` of `count` on a ring around `center`
fn ring_position(center: Point, radius: f64, index: usize, count: usize) -> Point {
    let angle = (index as f64 / count as f64) * std::f64::consts::TAU;
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Compute the layout for a team. Pure and deterministic; an empty team
/// yields empty geometry. Recomputed fresh on every call.
#[must_use]
pub fn layout_team(team: &Team, size: CanvasSize) -> TeamLayout {
    let center = size.center();
    let radius = RADIUS_FACTOR * size.width.min(size.height) / 2.0;
    let task_radius = radius * TASK_RING_FACTOR;

    let agents: Vec<AgentNode> = team
        .agents
        .iter()
        .enumerate()
        .map(|(i, agent)| AgentNode {
            agent_id: agent.id,
            position: ring_position(center, radius, i, team.agents.len()),
        })
        .collect();

    let tasks: Vec<TaskNode> = team
        .tasks
        .iter()
        .enumerate()
        .map(|(j, task)| TaskNode {
            task_id: task.id,
            position: ring_position(center, task_radius, j, team.tasks.len()),
            label_lines: wrap_label(&task.description),
        })
        .collect();

    let graph = team_graph(team);

    let assignments = graph
        .assignments
        .iter()
        .filter_map(|edge| {
            let task_pos = team.task_index(edge.task_id).map(|j| tasks[j].position)?;
            let agent_pos = team.agent_index(edge.agent_id).map(|i| agents[i].position)?;
            Some(AssignmentCurve {
                task_id: edge.task_id,
                agent_id: edge.agent_id,
                curve: QuadCurve::bowed(agent_pos, task_pos, center, ASSIGNMENT_PULL),
            })
        })
        .collect();

    let dependencies = graph
        .dependencies
        .iter()
        .filter_map(|edge| {
            let task_pos = team.task_index(edge.task_id).map(|j| tasks[j].position)?;
            let dep_pos = team.task_index(edge.depends_on).map(|j| tasks[j].position)?;
            let curve = QuadCurve::bowed(task_pos, dep_pos, center, DEPENDENCY_PULL);
            Some(DependencyCurve {
                task_id: edge.task_id,
                depends_on: edge.depends_on,
                arrowhead: Arrowhead::at_end(&curve),
                curve,
            })
        })
        .collect();

    TeamLayout {
        agents,
        tasks,
        assignments,
        dependencies,
    }
}

/// Greedy word wrap at the card content width, truncated to two lines with
/// the second line's last three characters replaced by an ellipsis.
fn wrap_label(text: &str) -> Vec<String> {
    let max_chars = ((CARD_WIDTH - LABEL_MARGIN) / CHAR_ADVANCE) as usize;

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if candidate.chars().count() > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    lines.push(line);

    if lines.len() > MAX_LABEL_LINES {
        lines.truncate(MAX_LABEL_LINES);
        let last = &lines[MAX_LABEL_LINES - 1];
        let keep = last.chars().count().saturating_sub(3);
        let mut truncated: String = last.chars().take(keep).collect();
        truncated.push_str("...");
        lines[MAX_LABEL_LINES - 1] = truncated;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewcanvas_core::seed;

    const SIZE: CanvasSize = CanvasSize {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_layout_is_deterministic() {
        let team = seed::sample_team();
        let a = layout_team(&team, SIZE);
        let b = layout_team(&team, SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_team_yields_empty_geometry() {
        let team = Team::new("Empty", "A team with nothing in it");
        let layout = layout_team(&team, SIZE);
        assert!(layout.agents.is_empty());
        assert!(layout.tasks.is_empty());
        assert!(layout.assignments.is_empty());
        assert!(layout.dependencies.is_empty());
    }

    #[test]
    fn test_agent_ring_radius() {
        let team = seed::sample_team();
        let layout = layout_team(&team, SIZE);
        let center = SIZE.center();
        let radius = 0.4 * 800.0 / 2.0;

        // First agent sits at angle 0: directly right of center.
        let first = layout.agents[0].position;
        assert!((first.x - (center.x + radius)).abs() < 1e-9);
        assert!((first.y - center.y).abs() < 1e-9);

        // Second of two agents sits at angle pi: directly left.
        let second = layout.agents[1].position;
        assert!((second.x - (center.x - radius)).abs() < 1e-9);
        assert!((second.y - center.y).abs() < 1e-6);
    }

    #[test]
    fn test_task_ring_is_outer() {
        let team = seed::sample_team();
        let layout = layout_team(&team, SIZE);
        let center = SIZE.center();
        for task in &layout.tasks {
            let dx = task.position.x - center.x;
            let dy = task.position.y - center.y;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 0.4 * 400.0 * 1.8).abs() < 1e-6);
        }
    }

    #[test]
    fn test_assignment_curve_bows_toward_center() {
        let team = seed::sample_team();
        let layout = layout_team(&team, SIZE);
        let center = SIZE.center();

        let curve = layout.assignments[0].curve;
        let mid = curve.from.midpoint(curve.to);
        let expected = mid.toward(center, 0.2);
        assert!((curve.control.x - expected.x).abs() < 1e-9);
        assert!((curve.control.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn test_dependency_arrowhead_points_into_target() {
        let team = seed::sample_team();
        let layout = layout_team(&team, SIZE);

        assert_eq!(layout.dependencies.len(), 1);
        let dep = &layout.dependencies[0];
        assert_eq!(dep.arrowhead.tip, dep.curve.to);

        // Wings are exactly the arrow length away from the tip.
        for wing in [dep.arrowhead.left, dep.arrowhead.right] {
            let dx = wing.x - dep.arrowhead.tip.x;
            let dy = wing.y - dep.arrowhead.tip.y;
            assert!(((dx * dx + dy * dy).sqrt() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unassigned_task_has_no_connector() {
        let mut team = seed::sample_team();
        team.tasks[0].agent_id = Uuid::new_v4();
        let layout = layout_team(&team, SIZE);
        assert_eq!(layout.tasks.len(), 2);
        assert_eq!(layout.assignments.len(), 1);
    }

    #[test]
    fn test_label_wraps_to_two_lines_with_ellipsis() {
        let lines = wrap_label("Research the latest trends in AI development");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Research the");
        assert_eq!(lines[1], "latest trends...");
    }

    #[test]
    fn test_short_label_single_line() {
        assert_eq!(wrap_label("Review the PR"), vec!["Review the PR"]);
    }

    #[test]
    fn test_layout_serializes_for_ui_consumers() {
        let team = seed::sample_team();
        let layout = layout_team(&team, SIZE);
        let json = serde_json::to_string(&layout).unwrap();
        assert!(json.contains("\"agents\""));

        let parsed: TeamLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, layout);
    }

    #[test]
    fn test_cyclic_dependencies_still_lay_out() {
        // A->B->A produces two dependency curves; no cycle handling exists.
        let mut team = seed::sample_team();
        let second = team.tasks[1].id;
        team.tasks[0].dependencies = vec![second];
        let layout = layout_team(&team, SIZE);
        assert_eq!(layout.dependencies.len(), 2);
    }
}
