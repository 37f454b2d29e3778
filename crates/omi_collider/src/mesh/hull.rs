//! Convex hull validation
//!
//! A hull collider is only exported when its mesh already is a closed convex
//! solid. The check runs on a half-edge view of the polygons: every edge has
//! to be manifold (exactly two faces), contiguous (the two faces walk it in
//! opposite directions) and convex (each face lies behind the other's plane).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::bounds::axis_extrema;
use super::MeshData;
use crate::foundation::math::Vec3;

/// Relative tolerance for the convexity plane test
const CONVEXITY_TOLERANCE: f32 = 1e-5;

/// Undirected edge identifier with the smaller vertex index first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey(pub u32, pub u32);

impl EdgeKey {
    /// Normalize edge direction so the first index is the smaller one
    pub fn new(a: u32, b: u32) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// Outcome of the three predicates for one edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeStatus {
    /// Exactly two incident faces
    pub manifold: bool,
    /// The two faces traverse the edge in opposite directions
    pub contiguous: bool,
    /// The dihedral angle does not fold inward
    pub convex: bool,
}

impl EdgeStatus {
    /// All three predicates hold
    pub fn is_valid(&self) -> bool {
        self.manifold && self.contiguous && self.convex
    }
}

#[derive(Debug, Clone, Copy)]
struct HalfEdge {
    face: usize,
    from: u32,
    to: u32,
}

/// Half-edge view of a polygon mesh
#[derive(Debug)]
pub struct HalfEdgeMesh<'a> {
    mesh: &'a MeshData,
    edges: BTreeMap<EdgeKey, Vec<HalfEdge>>,
    normals: Vec<Vec3>,
    centroids: Vec<Vec3>,
    origin: Vec3,
    tolerance: f32,
}

impl<'a> HalfEdgeMesh<'a> {
    /// Build the half-edge map, face normals and face centroids
    ///
    /// Faces with fewer than three corners contribute no edges. Geometry is
    /// measured relative to the bounding box minimum, and the convexity
    /// tolerance scales with the bounding box diagonal.
    pub fn build(mesh: &'a MeshData) -> Self {
        let (origin, diagonal) = match axis_extrema(&mesh.vertices, None) {
            Ok(bounds) => (bounds.min, (bounds.max - bounds.min).norm()),
            Err(_) => (Vec3::zeros(), 0.0),
        };

        let mut edges: BTreeMap<EdgeKey, Vec<HalfEdge>> = BTreeMap::new();
        let mut normals = Vec::with_capacity(mesh.faces.len());
        let mut centroids = Vec::with_capacity(mesh.faces.len());

        for (face_idx, face) in mesh.faces.iter().enumerate() {
            let points: Vec<Vec3> = face
                .iter()
                .filter_map(|&v| mesh.vertices.get(v as usize).map(|p| p - origin))
                .collect();
            normals.push(newell_normal(&points));
            centroids.push(centroid(&points));

            if face.len() < 3 {
                continue;
            }
            for (corner, &from) in face.iter().enumerate() {
                let to = face[(corner + 1) % face.len()];
                edges
                    .entry(EdgeKey::new(from, to))
                    .or_default()
                    .push(HalfEdge { face: face_idx, from, to });
            }
        }

        Self {
            mesh,
            edges,
            normals,
            centroids,
            origin,
            tolerance: CONVEXITY_TOLERANCE * diagonal.max(1.0),
        }
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.mesh.faces.len()
    }

    /// Predicate results for every edge, in edge order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, EdgeStatus)> + '_ {
        self.edges
            .iter()
            .map(|(&key, half_edges)| (key, self.classify(key, half_edges)))
    }

    /// Predicate results for one edge, `None` if the mesh has no such edge
    pub fn edge_status(&self, a: u32, b: u32) -> Option<EdgeStatus> {
        let key = EdgeKey::new(a, b);
        self.edges.get(&key).map(|half_edges| self.classify(key, half_edges))
    }

    fn classify(&self, key: EdgeKey, half_edges: &[HalfEdge]) -> EdgeStatus {
        let [first, second] = half_edges else {
            return EdgeStatus::default();
        };

        let contiguous = first.from == second.to && first.to == second.from;
        let convex = self.is_convex(key, first.face, second.face);

        EdgeStatus {
            manifold: true,
            contiguous,
            convex,
        }
    }

    fn is_convex(&self, key: EdgeKey, face_a: usize, face_b: usize) -> bool {
        let Some(anchor) = self.mesh.vertices.get(key.0 as usize).map(|p| p - self.origin) else {
            return false;
        };

        // Each face's centroid must sit on or behind the other face's plane
        let behind_a = self.normals[face_a].dot(&(self.centroids[face_b] - anchor));
        let behind_b = self.normals[face_b].dot(&(self.centroids[face_a] - anchor));
        behind_a <= self.tolerance && behind_b <= self.tolerance
    }
}

/// Hull validation summary for one mesh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HullReport {
    /// Total number of faces
    pub face_count: usize,
    /// Total number of edges
    pub edge_count: usize,
    /// Edges without exactly two incident faces
    pub non_manifold_edge_count: usize,
    /// Manifold edges whose faces disagree on winding
    pub non_contiguous_edge_count: usize,
    /// Manifold edges that fold inward
    pub concave_edge_count: usize,
    /// Every edge failing at least one predicate
    pub invalid_edges: BTreeSet<EdgeKey>,
}

impl HullReport {
    /// The mesh is usable as a hull collider
    pub fn is_valid(&self) -> bool {
        self.face_count > 0 && self.invalid_edges.is_empty()
    }
}

impl fmt::Display for HullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hull Report:")?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Valid: {}", if self.is_valid() { "Yes" } else { "No" })?;

        if !self.invalid_edges.is_empty() {
            writeln!(f)?;
            writeln!(f, "  Issues:")?;
            if self.non_manifold_edge_count > 0 {
                writeln!(f, "    Non-manifold edges: {}", self.non_manifold_edge_count)?;
            }
            if self.non_contiguous_edge_count > 0 {
                writeln!(f, "    Non-contiguous edges: {}", self.non_contiguous_edge_count)?;
            }
            if self.concave_edge_count > 0 {
                writeln!(f, "    Concave edges: {}", self.concave_edge_count)?;
            }
        }

        Ok(())
    }
}

/// Run all three predicates over every edge
pub fn validate_hull(mesh: &MeshData) -> HullReport {
    let half_edges = HalfEdgeMesh::build(mesh);
    let mut report = HullReport {
        face_count: half_edges.face_count(),
        edge_count: half_edges.edge_count(),
        ..Default::default()
    };

    for (key, status) in half_edges.edges() {
        if !status.manifold {
            report.non_manifold_edge_count += 1;
        } else {
            if !status.contiguous {
                report.non_contiguous_edge_count += 1;
            }
            if !status.convex {
                report.concave_edge_count += 1;
            }
        }
        if !status.is_valid() {
            report.invalid_edges.insert(key);
        }
    }

    report
}

/// True only if every edge is convex, contiguous and manifold
pub fn is_valid_hull(mesh: &MeshData) -> bool {
    validate_hull(mesh).is_valid()
}

/// Union of the edges failing any predicate
pub fn invalid_edges(mesh: &MeshData) -> BTreeSet<EdgeKey> {
    validate_hull(mesh).invalid_edges
}

/// Polygon normal by Newell's method, oriented by winding
fn newell_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::zeros();
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros)
}

fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::zeros();
    }
    points.iter().fold(Vec3::zeros(), |sum, p| sum + p) / points.len() as f32
}
