//! Mesh geometry consumed by the collider core
//!
//! - [`bounds`] - axis-aligned extrema and the box/sphere/capsule dimensions
//!   derived from them
//! - [`hull`] - half-edge convex hull validation
//! - [`obj_loader`] - OBJ reader used by standalone tooling

pub mod bounds;
pub mod hull;
pub mod obj_loader;

pub use bounds::Aabb;
pub use hull::{EdgeKey, HullReport};
pub use obj_loader::{ObjError, ObjLoader};

use crate::error::Result;
use crate::foundation::math::Vec3;

/// Vertex positions and polygon faces of one object
///
/// Faces are vertex index loops wound counter-clockwise when seen from
/// outside. Polygons may have more than three corners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions in object space
    pub vertices: Vec<Vec3>,
    /// Polygon faces as vertex index loops
    pub faces: Vec<Vec<u32>>,
}

impl MeshData {
    /// Create mesh data from vertices and polygon faces
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Vec<u32>>) -> Self {
        Self { vertices, faces }
    }

    /// Create mesh data from a triangle list
    pub fn from_triangles(vertices: Vec<Vec3>, triangles: &[[u32; 3]]) -> Self {
        Self {
            vertices,
            faces: triangles.iter().map(|t| t.to_vec()).collect(),
        }
    }

    /// Whether the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Object-space bounding box corners, computed from the vertices
    pub fn bounding_box(&self) -> Result<[Vec3; 8]> {
        Ok(bounds::axis_extrema(&self.vertices, None)?.corners())
    }
}
