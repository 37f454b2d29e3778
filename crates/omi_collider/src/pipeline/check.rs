//! Interactive hull check

use log::{info, warn};

use crate::mesh::hull::{validate_hull, HullReport};
use crate::mesh::MeshData;

/// Validate a mesh as a hull collider without failing
///
/// Findings are logged as a warning. The returned report lists the edges
/// the host should highlight.
pub fn check_hull(object: &str, mesh: &MeshData) -> HullReport {
    let report = validate_hull(mesh);
    if report.is_valid() {
        info!("'{object}' is a valid convex hull ({} faces)", report.face_count);
    } else {
        warn!(
            "'{object}' is not a valid convex hull: {} invalid edges ({} non-manifold, {} non-contiguous, {} concave)",
            report.invalid_edges.len(),
            report.non_manifold_edge_count,
            report.non_contiguous_edge_count,
            report.concave_edge_count
        );
    }
    report
}
