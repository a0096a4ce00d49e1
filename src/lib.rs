//! Connectivity checks and solution counting for "visit every point" puzzle
//! levels.
//!
//! A level is a small graph whose points carry visit quotas, start/end
//! markers and energy deltas. [`path::count_walks`] counts the walks that
//! solve a level; [`path::is_connected`] reports whether the level is a
//! single piece.

pub mod app;
pub mod graph;
pub mod level_loader;
pub mod path;
