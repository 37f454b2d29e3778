//! Error types for collider extraction and scene post-processing

use thiserror::Error;

use crate::mesh::hull::EdgeKey;
use crate::scene::NodeIndex;

/// Errors raised while building collider descriptors or rewriting the scene
#[derive(Error, Debug)]
pub enum ColliderError {
    /// Bounds were requested for a mesh without vertices
    #[error("mesh has no vertices, bounds are undefined")]
    EmptyMesh,

    /// A hull collider failed the convexity, contiguity or manifold test
    #[error("'{object}' is not a valid convex hull ({} invalid edges)", .invalid_edges.len())]
    InvalidHull {
        /// Name of the offending object
        object: String,
        /// Edges that failed at least one predicate
        invalid_edges: Vec<EdgeKey>,
    },

    /// A hull or mesh collider sits on a node without a mesh to reference
    #[error("'{object}' is a mesh-referencing collider but its node has no mesh")]
    MissingMesh {
        /// Name of the offending object
        object: String,
    },

    /// No node lists the given node as a child. Expected for root nodes.
    #[error("node {node} has no parent")]
    MissingParent {
        /// Index of the orphan node
        node: NodeIndex,
    },

    /// A hook referenced a node the graph does not contain
    #[error("node index {index} is out of range")]
    NodeOutOfRange {
        /// The requested index
        index: NodeIndex,
    },

    /// An extension block could not be read back
    #[error("malformed OMI_collider extension: {0}")]
    MalformedExtension(String),

    /// Descriptor could not be turned into JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for collider operations
pub type Result<T> = std::result::Result<T, ColliderError>;
