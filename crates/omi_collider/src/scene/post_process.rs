//! Scene graph post-processing
//!
//! Runs once per export after every node exists. Consumes the pending table
//! so a second run changes nothing.

use std::fmt;

use log::{debug, info, warn};

use super::graph::{NodeIndex, SceneGraph, SceneNode};
use super::pending::{PendingFlags, PendingNodes};
use crate::collider::ColliderKind;
use crate::error::{ColliderError, Result};
use crate::foundation::math::{Transform, Vec3};

/// Suffix of nodes created by the display-mesh split
pub const DISPLAY_MESH_SUFFIX: &str = "_DisplayMesh";

/// Counts of the actions one pass performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostProcessSummary {
    /// Display-mesh nodes created
    pub display_meshes: usize,
    /// Nodes moved to their mesh center
    pub mesh_centers: usize,
    /// Nodes that received an offset
    pub offsets: usize,
    /// Pending entries whose node index was outside the graph
    pub discarded: usize,
}

impl PostProcessSummary {
    /// Whether the pass changed nothing
    pub fn is_empty(&self) -> bool {
        self.display_meshes == 0 && self.mesh_centers == 0 && self.offsets == 0
    }
}

impl fmt::Display for PostProcessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} display meshes, {} mesh centers, {} offsets",
            self.display_meshes, self.mesh_centers, self.offsets
        )?;
        if self.discarded > 0 {
            write!(f, ", {} discarded", self.discarded)?;
        }
        Ok(())
    }
}

/// Consume every pending entry against the graph
///
/// Only nodes that existed when the pass started are visited. Per node the
/// order is display-mesh split, mesh center, offsets.
pub fn post_process(graph: &mut SceneGraph, pending: &mut PendingNodes) -> Result<PostProcessSummary> {
    let mut summary = PostProcessSummary::default();
    let snapshot = graph.len();

    for index in 0..snapshot {
        let Some(entry) = pending.take(index) else {
            continue;
        };

        if entry.flags.contains(PendingFlags::DISPLAY_MESH) {
            match entry.original_mesh {
                Some(mesh) => {
                    split_display_mesh(graph, index, mesh)?;
                    summary.display_meshes += 1;
                }
                None => warn!(
                    "'{}': display mesh requested but no mesh was saved, not splitting",
                    graph.node(index)?.name
                ),
            }
        }

        if entry.flags.contains(PendingFlags::MESH_CENTER) {
            if let Some(center) = entry.mesh_center {
                if apply_mesh_center(graph.node_mut(index)?, entry.kind, center) {
                    summary.mesh_centers += 1;
                }
            }
        }

        if entry.flags.contains(PendingFlags::OFFSETS) {
            if let Some(offset) = &entry.offset {
                apply_offset(graph.node_mut(index)?, offset);
                summary.offsets += 1;
            }
        }
    }

    for (index, _) in pending.drain() {
        warn!("pending collider actions for node {index} discarded, node does not exist");
        summary.discarded += 1;
    }

    info!("collider post-processing: {summary}");
    Ok(summary)
}

/// Move the visual mesh and transform of a collider node into a new parent
///
/// The new `<name>_DisplayMesh` node takes the collider's place under its
/// parent and in every scene root list, and holds the collider as its only
/// child. Returns the index of the new node.
pub fn split_display_mesh(graph: &mut SceneGraph, collider: NodeIndex, mesh: u32) -> Result<NodeIndex> {
    let parent = match graph.find_parent(collider) {
        Ok(parent) => Some(parent),
        Err(err @ ColliderError::MissingParent { .. }) => {
            debug!("{err}, only scene roots are re-pointed");
            None
        }
        Err(err) => return Err(err),
    };

    let node = graph.node_mut(collider)?;
    let display = SceneNode {
        name: format!("{}{DISPLAY_MESH_SUFFIX}", node.name),
        mesh: Some(mesh),
        translation: node.translation.take(),
        rotation: node.rotation.take(),
        scale: node.scale.take(),
        matrix: node.matrix.take(),
        children: vec![collider],
        ..Default::default()
    };
    let display_index = graph.add_node(display);

    if let Some(parent) = parent {
        repoint(&mut graph.node_mut(parent)?.children, collider, display_index);
    }
    for scene in &mut graph.scenes {
        repoint(&mut scene.nodes, collider, display_index);
    }

    debug!(
        "node {collider}: display mesh split into node {display_index} '{}'",
        graph.node(display_index)?.name
    );
    Ok(display_index)
}

fn repoint(indices: &mut [NodeIndex], from: NodeIndex, to: NodeIndex) {
    for index in indices.iter_mut().filter(|index| **index == from) {
        *index = to;
    }
}

/// Add the mesh center to the node translation
///
/// Skipped for kinds that keep their real geometry. Returns whether the
/// node changed.
pub fn apply_mesh_center(node: &mut SceneNode, kind: ColliderKind, center: Vec3) -> bool {
    if !kind.uses_mesh_center() {
        debug!("'{}': mesh center skipped for {kind} collider", node.name);
        return false;
    }

    node.expand_matrix();
    let translation = node.translation.unwrap_or_else(Vec3::zeros);
    node.translation = Some(translation + center);
    true
}

/// Compose an offset onto the node transform
///
/// A matrix is decomposed into TRS first and cleared.
pub fn apply_offset(node: &mut SceneNode, offset: &Transform) {
    node.expand_matrix();
    let composed = node.local_transform().compose(offset);
    node.set_local_transform(composed);
}
