//! Handles the per-level work behind each command.
//!
//! This module loads level files, runs the connectivity check, validates
//! start/end markers and energy, counts solutions and replays routes, writing
//! progress to the verbose log as it goes.

use std::fmt::Write;
use std::path::Path;

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::{Direction, LevelGraph, PointId};
use crate::level_loader;
use crate::path::{self, CheckError, PlaySession, ReplayError};

/// Loads one level file after validating its path.
///
/// # Returns
/// The level's display name and its graph, or an `AppError` if the path is
/// invalid or the file cannot be decoded.
pub fn load_level(
    level_file_path: &Path,
    quiet_mode: bool,
) -> Result<(String, LevelGraph), AppError> {
    let level_name = file_handler::validate_level_file(level_file_path, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n------------------------------------------------------------"
    );
    verbose_println!(quiet_mode, "Level: {}", level_name);
    verbose_println!(
        quiet_mode,
        "------------------------------------------------------------"
    );
    verbose_println!(quiet_mode, "[STEP 1] Loading level file...");

    let graph = level_loader::load_level_from_file(level_file_path).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   => {}", e);
        AppError::LevelLoad(e)
    })?;
    verbose_println!(
        quiet_mode,
        "   => {} point(s), {} edge(s).",
        graph.len(),
        graph.edges().len()
    );
    Ok((level_name, graph))
}

/// Runs the connectivity check on a loaded level.
pub fn process_connectivity(graph: &LevelGraph, quiet_mode: bool) -> bool {
    verbose_println!(quiet_mode, "[STEP 2] Checking connectivity...");
    let connected = path::is_connected(graph);
    verbose_println!(
        quiet_mode,
        "   => {}",
        if connected {
            "Connected (ignoring direction)."
        } else {
            "Not connected (ignoring direction)."
        }
    );
    connected
}

/// Validates a level and counts its solutions.
///
/// Validation and counting are run as separate steps so the log records the
/// derived start, end and walk length before the search begins.
pub fn process_count(graph: &LevelGraph, quiet_mode: bool) -> Result<u64, CheckError> {
    process_connectivity(graph, quiet_mode);

    verbose_println!(quiet_mode, "[STEP 3] Validating markers and energy...");
    let preconditions = path::validate(graph).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   => Rejected [{}]: {}", e.code(), e);
        e
    })?;
    verbose_println!(
        quiet_mode,
        "   => start: {}, end: {}, walk length: {}, total energy: {}",
        format_point(preconditions.start),
        format_point(preconditions.end),
        preconditions.total_depth,
        preconditions.total_energy
    );

    verbose_println!(quiet_mode, "[STEP 4] Counting walks...");
    let count = path::count_valid_walks(graph, &preconditions);
    verbose_println!(quiet_mode, "   => Found {} walk(s).", count);
    Ok(count)
}

/// Replays a route and logs each accepted move.
pub fn process_replay(
    graph: &LevelGraph,
    route: &[PointId],
    quiet_mode: bool,
) -> Result<PlaySession, ReplayError> {
    verbose_println!(quiet_mode, "[STEP 2] Replaying route {:?}...", route);
    match path::replay_route(graph, route) {
        Ok(session) => {
            verbose_println!(
                quiet_mode,
                "   => Route {:?}, energy {}, {} visit(s) left.",
                session.route(),
                session.energy(),
                session.remaining_steps()
            );
            Ok(session)
        }
        Err(e) => {
            verbose_eprintln!(quiet_mode, "   => {}", e);
            Err(e)
        }
    }
}

/// Renders a human-readable summary of a level.
pub fn describe_level(level_name: &str, graph: &LevelGraph) -> String {
    let mut out = String::with_capacity(64 + graph.len() * 48 + graph.edges().len() * 24);
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Level {}: {} point(s), {} edge(s), walk length {}",
        level_name,
        graph.len(),
        graph.edges().len(),
        graph.total_visits()
    );
    for (index, point) in graph.points().iter().enumerate() {
        let mut marks = Vec::new();
        if point.is_start {
            marks.push("start");
        }
        if point.is_end {
            marks.push("end");
        }
        if point.is_twice {
            marks.push("twice");
        }
        let _ = writeln!(
            out,
            "  point {:>3} at ({}, {}) energy {:+} {}",
            index,
            point.x,
            point.y,
            point.after,
            marks.join(" ")
        );
    }
    for edge in graph.edges() {
        let arrow = match edge.direction {
            Direction::None => "<->",
            Direction::AToB => "->",
            Direction::BToA => "<-",
        };
        let _ = writeln!(out, "  edge  {:>3} {} {}", edge.a, arrow, edge.b);
    }
    out
}

fn format_point(point: Option<PointId>) -> String {
    point.map_or_else(|| "none".to_string(), |p| p.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_points_and_edges() {
        let mut graph = LevelGraph::new();
        graph.add_point(1, 2);
        graph.add_point(3, 4);
        graph.add_directed_edge(0, 1, Direction::AToB).unwrap();
        graph.point_mut(0).unwrap().is_start = true;
        graph.point_mut(1).unwrap().after = -2;

        let text = describe_level("demo", &graph);
        assert!(text.starts_with("Level demo: 2 point(s), 1 edge(s), walk length 2"));
        assert!(text.contains("point   0 at (1, 2) energy +0 start"));
        assert!(text.contains("energy -2"));
        assert!(text.contains("edge    0 -> 1"));
    }

    #[test]
    fn count_reports_rejection_reason() {
        let mut graph = LevelGraph::new();
        graph.add_point(0, 0);
        graph.add_point(1, 0);
        assert_eq!(process_count(&graph, true), Err(CheckError::Disconnected));
        graph.add_edge(0, 1).unwrap();
        assert_eq!(process_count(&graph, true), Ok(2));
    }
}
