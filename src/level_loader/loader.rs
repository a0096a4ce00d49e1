//! Binary level files, as written by the level editor and read by the game.
//!
//! # Format
//!
//! All integers are little-endian.
//!
//! ```text
//! [point_count: u8][edge_count: u8]
//! point_count × [x: i32][y: i32][after: i8][flags: u8]
//! edge_count  × [a: i8][b: i8][direction: i8]
//! ```
//!
//! `flags` packs start (bit 2), end (bit 1) and twice (bit 0). `direction` is
//! 0 for none, 1 for a→b and 2 for b→a.

use std::fs;
use std::path::Path;

use super::error::LevelLoaderError;
use crate::graph::{Direction, GraphError, LevelGraph};

const HEADER_LEN: usize = 2;
const POINT_RECORD_LEN: usize = 10;
const EDGE_RECORD_LEN: usize = 3;

const FLAG_START: u8 = 0b100;
const FLAG_END: u8 = 0b010;
const FLAG_TWICE: u8 = 0b001;

//─────────────────────────────────────────────────────────────────────────────

/// Loads a level from a file.
pub fn load_level_from_file(file_path: &Path) -> Result<LevelGraph, LevelLoaderError> {
    let data = fs::read(file_path)
        .map_err(|e| LevelLoaderError::ReadFile(file_path.display().to_string(), e))?;
    decode_level(&data)
}

/// Saves a level to a file, creating or truncating it.
pub fn save_level_to_file(file_path: &Path, graph: &LevelGraph) -> Result<(), LevelLoaderError> {
    let data = encode_level(graph)?;
    fs::write(file_path, data)
        .map_err(|e| LevelLoaderError::WriteFile(file_path.display().to_string(), e))
}

/// Decodes a level from its binary form.
///
/// Edges stored with `a > b` are normalized and their direction flipped, so
/// the decoded graph always satisfies the `a < b` convention.
///
/// # Errors
/// Fails if the data is truncated or has trailing bytes, or if an edge has an
/// unknown direction, an endpoint out of range, identical endpoints, or
/// repeats an already connected pair.
pub fn decode_level(data: &[u8]) -> Result<LevelGraph, LevelLoaderError> {
    if data.len() < HEADER_LEN {
        return Err(LevelLoaderError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    let point_count = data[0] as usize;
    let edge_count = data[1] as usize;

    let expected_len =
        HEADER_LEN + point_count * POINT_RECORD_LEN + edge_count * EDGE_RECORD_LEN;
    if data.len() < expected_len {
        return Err(LevelLoaderError::Truncated {
            expected: expected_len,
            actual: data.len(),
        });
    }
    if data.len() > expected_len {
        return Err(LevelLoaderError::TrailingBytes(data.len() - expected_len));
    }

    let mut graph = LevelGraph::new();
    let mut offset = HEADER_LEN;

    for _ in 0..point_count {
        let record = &data[offset..offset + POINT_RECORD_LEN];
        let x = i32::from_le_bytes([record[0], record[1], record[2], record[3]]);
        let y = i32::from_le_bytes([record[4], record[5], record[6], record[7]]);
        let after = record[8] as i8;
        let flags = record[9];

        let index = graph.add_point(x, y);
        if let Some(point) = graph.point_mut(index) {
            point.after = i32::from(after);
            point.is_start = flags & FLAG_START != 0;
            point.is_end = flags & FLAG_END != 0;
            point.is_twice = flags & FLAG_TWICE != 0;
        }
        offset += POINT_RECORD_LEN;
    }

    for edge in 0..edge_count {
        let record = &data[offset..offset + EDGE_RECORD_LEN];
        let a = endpoint(record[0] as i8, edge)?;
        let b = endpoint(record[1] as i8, edge)?;
        let code = record[2] as i8;
        let direction = match code {
            0 => Direction::None,
            1 => Direction::AToB,
            2 => Direction::BToA,
            _ => return Err(LevelLoaderError::InvalidDirection { edge, code }),
        };

        graph
            .add_directed_edge(a, b, direction)
            .map_err(|e| invalid_edge(edge, e))?;
        offset += EDGE_RECORD_LEN;
    }

    Ok(graph)
}

/// Encodes a level into its binary form.
///
/// # Errors
/// Fails if the level has more than 255 points or edges, an edge endpoint
/// above 127, or an energy delta outside the signed byte range.
pub fn encode_level(graph: &LevelGraph) -> Result<Vec<u8>, LevelLoaderError> {
    let point_count = u8::try_from(graph.len()).map_err(|_| {
        LevelLoaderError::TooLarge(format!("{} points, at most 255", graph.len()))
    })?;
    let edge_count = u8::try_from(graph.edges().len()).map_err(|_| {
        LevelLoaderError::TooLarge(format!("{} edges, at most 255", graph.edges().len()))
    })?;

    let mut buffer = Vec::with_capacity(
        HEADER_LEN
            + graph.len() * POINT_RECORD_LEN
            + graph.edges().len() * EDGE_RECORD_LEN,
    );
    buffer.push(point_count);
    buffer.push(edge_count);

    for (index, point) in graph.points().iter().enumerate() {
        let after = i8::try_from(point.after).map_err(|_| LevelLoaderError::EnergyOutOfRange {
            point: index,
            after: point.after,
        })?;
        let mut flags = 0u8;
        if point.is_start {
            flags |= FLAG_START;
        }
        if point.is_end {
            flags |= FLAG_END;
        }
        if point.is_twice {
            flags |= FLAG_TWICE;
        }

        buffer.extend_from_slice(&point.x.to_le_bytes());
        buffer.extend_from_slice(&point.y.to_le_bytes());
        buffer.push(after as u8);
        buffer.push(flags);
    }

    for edge in graph.edges() {
        let a = i8::try_from(edge.a)
            .map_err(|_| LevelLoaderError::TooLarge(format!("edge endpoint {}", edge.a)))?;
        let b = i8::try_from(edge.b)
            .map_err(|_| LevelLoaderError::TooLarge(format!("edge endpoint {}", edge.b)))?;
        let code: i8 = match edge.direction {
            Direction::None => 0,
            Direction::AToB => 1,
            Direction::BToA => 2,
        };
        buffer.push(a as u8);
        buffer.push(b as u8);
        buffer.push(code as u8);
    }

    Ok(buffer)
}

fn endpoint(raw: i8, edge: usize) -> Result<usize, LevelLoaderError> {
    usize::try_from(raw).map_err(|_| LevelLoaderError::InvalidEdge {
        edge,
        reason: format!("negative endpoint {}", raw),
    })
}

fn invalid_edge(edge: usize, error: GraphError) -> LevelLoaderError {
    LevelLoaderError::InvalidEdge {
        edge,
        reason: error.to_string(),
    }
}
