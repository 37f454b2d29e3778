//! Deferred per-node work recorded during the node hook
//!
//! The node hook runs before the full graph exists, so actions that need
//! parents or scene roots are queued here and consumed by the post-processor.

use std::collections::BTreeMap;

use bitflags::bitflags;

use super::graph::NodeIndex;
use crate::collider::ColliderKind;
use crate::foundation::math::{Transform, Vec3};

bitflags! {
    /// Actions queued for one node
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PendingFlags: u8 {
        /// Split the visual mesh into a `_DisplayMesh` node
        const DISPLAY_MESH = 1 << 0;
        /// Move the collider to its mesh center
        const MESH_CENTER = 1 << 1;
        /// Compose the collider offset onto the node transform
        const OFFSETS = 1 << 2;
    }
}

/// Queued actions and the data they need
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingNode {
    /// Which actions to run
    pub flags: PendingFlags,
    /// Collider kind of the node
    pub kind: ColliderKind,
    /// Mesh index cleared from the collider node, used by the display split
    pub original_mesh: Option<u32>,
    /// Mesh center in file convention
    pub mesh_center: Option<Vec3>,
    /// Offset in file convention
    pub offset: Option<Transform>,
}

impl PendingNode {
    /// Empty entry for a collider of `kind`
    pub fn new(kind: ColliderKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Whether no action is queued
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Side table of pending entries keyed by node index
#[derive(Debug, Clone, Default)]
pub struct PendingNodes {
    entries: BTreeMap<NodeIndex, PendingNode>,
}

impl PendingNodes {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an entry, replacing any previous one for the node
    pub fn insert(&mut self, node: NodeIndex, pending: PendingNode) {
        self.entries.insert(node, pending);
    }

    /// Remove and return the entry for a node
    pub fn take(&mut self, node: NodeIndex) -> Option<PendingNode> {
        self.entries.remove(&node)
    }

    /// Peek at the entry for a node
    pub fn get(&self, node: NodeIndex) -> Option<&PendingNode> {
        self.entries.get(&node)
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and yield every remaining entry in index order
    pub fn drain(&mut self) -> impl Iterator<Item = (NodeIndex, PendingNode)> {
        std::mem::take(&mut self.entries).into_iter()
    }
}
