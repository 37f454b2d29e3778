//! # OMI Collider
//!
//! Core of the `OMI_collider` glTF 2.0 extension: derives collider
//! descriptors from object meshes, validates convex hulls, and rewrites the
//! exported scene graph around collider nodes.
//!
//! ## Features
//!
//! - **Descriptors**: box, sphere, capsule, hull, mesh and compound shapes
//! - **Hull Validation**: half-edge convexity, contiguity and manifold checks
//! - **Axis Conventions**: Z-up host to Y-up glTF and back
//! - **Post-Processing**: display-mesh split, mesh centering, offsets
//! - **Import**: extension blocks back to host settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use omi_collider::prelude::*;
//!
//! fn export(mesh: MeshData) -> Result<Vec<serde_json::Value>, ColliderError> {
//!     let mut graph = SceneGraph::new();
//!     let node = graph.add_node(SceneNode::new("Crate").with_mesh(0));
//!     graph.add_scene(Scene::new("Scene", vec![node]));
//!
//!     let mut exporter = ColliderExporter::new(ExportConfig::default());
//!     let settings = ColliderSettings::collider(ColliderKind::Box).with_display_mesh(true);
//!     exporter.gather_node(&mut graph, node, &SceneObject::new("Crate", settings).with_mesh(mesh))?;
//!     exporter.finish(&mut graph)?;
//!
//!     let mut records = graph.to_records();
//!     exporter.patch_records(&mut records);
//!     Ok(records)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod collider;
pub mod config;
pub mod error;
pub mod foundation;
pub mod mesh;
pub mod pipeline;
pub mod scene;

pub use error::{ColliderError, Result};

/// Common imports for extension users
pub mod prelude {
    pub use crate::{
        collider::{
            build_descriptor, patch_serialized_node, patch_serialized_nodes, ColliderDescriptor, ColliderKind,
            ColliderOffset, ColliderSettings, ColliderShape, EXTENSION_NAME,
        },
        config::{Config, ExportConfig, ExtensionConfig, ImportConfig},
        error::ColliderError,
        foundation::{
            coordinates::{CoordinateConverter, CoordinateSystem},
            math::{Mat4, Quat, Transform, Vec3},
        },
        mesh::{Aabb, EdgeKey, HullReport, MeshData, ObjLoader},
        pipeline::{check_hull, ColliderExporter, ColliderImporter, ImportedCollider, SceneObject},
        scene::{NodeIndex, Scene, SceneGraph, SceneNode},
    };
}
