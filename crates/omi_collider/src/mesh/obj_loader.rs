//! OBJ file loader for collider meshes
//!
//! Reads positions and polygon faces only. Faces keep their original corner
//! loops and index the shared position list, so edge adjacency survives for
//! hull validation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::MeshData;
use crate::foundation::math::Vec3;

/// Errors raised while reading an OBJ file
#[derive(Error, Debug)]
pub enum ObjError {
    /// Underlying read failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A line could not be parsed
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// The file parsed but does not describe a usable mesh
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// OBJ reader producing [`MeshData`]
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file from disk
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData, ObjError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse OBJ text from any buffered reader
    pub fn parse<R: BufRead>(reader: R) -> Result<MeshData, ObjError> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let line_number = line_idx + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "v" => {
                    if parts.len() < 4 {
                        return Err(parse_error(line_number, "vertex needs three coordinates"));
                    }
                    let coord = |i: usize| {
                        parts[i]
                            .parse::<f32>()
                            .map_err(|_| parse_error(line_number, &format!("invalid coordinate '{}'", parts[i])))
                    };
                    vertices.push(Vec3::new(coord(1)?, coord(2)?, coord(3)?));
                }
                "f" => {
                    if parts.len() < 4 {
                        return Err(parse_error(line_number, "face needs at least three corners"));
                    }
                    let face = parts[1..]
                        .iter()
                        .map(|corner| resolve_index(corner, vertices.len(), line_number))
                        .collect::<Result<Vec<u32>, ObjError>>()?;
                    faces.push(face);
                }
                _ => {
                    // Normals, texture coordinates, groups and materials are irrelevant here
                }
            }
        }

        if vertices.is_empty() {
            return Err(ObjError::InvalidFormat("No vertices found in OBJ file".to_string()));
        }

        Ok(MeshData::new(vertices, faces))
    }
}

fn parse_error(line: usize, message: &str) -> ObjError {
    ObjError::ParseError {
        line,
        message: message.to_string(),
    }
}

/// Resolve a `v`, `v/vt`, `v//vn` or `v/vt/vn` corner to a 0-based position index
///
/// Negative indices count back from the most recent vertex.
fn resolve_index(corner: &str, vertex_count: usize, line: usize) -> Result<u32, ObjError> {
    let position = corner.split('/').next().unwrap_or_default();
    let raw: i64 = position
        .parse()
        .map_err(|_| parse_error(line, &format!("invalid face index '{corner}'")))?;

    let resolved = match raw {
        0 => None,
        r if r > 0 => Some(r - 1),
        r => Some(vertex_count as i64 + r),
    };

    match resolved {
        Some(index) if index >= 0 && (index as usize) < vertex_count => {
            u32::try_from(index).map_err(|_| parse_error(line, "face index exceeds u32"))
        }
        _ => Err(ObjError::InvalidFormat(format!(
            "face index {raw} out of bounds on line {line}"
        ))),
    }
}
