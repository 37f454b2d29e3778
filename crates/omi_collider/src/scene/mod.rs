//! Scene graph and the deferred rewrite pass
//!
//! - [`graph`] - nodes, scenes and glTF node records
//! - [`pending`] - per-node actions queued by the exporter
//! - [`post_process`] - display-mesh split, mesh center and offsets

pub mod graph;
pub mod pending;
pub mod post_process;

pub use graph::{NodeIndex, Scene, SceneGraph, SceneNode};
pub use pending::{PendingFlags, PendingNode, PendingNodes};
pub use post_process::{post_process, PostProcessSummary};
