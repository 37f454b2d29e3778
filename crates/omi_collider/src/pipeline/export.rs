//! Export hook
//!
//! One [`ColliderExporter`] lives for one export invocation. The host calls
//! [`ColliderExporter::gather_node`] per object, [`ColliderExporter::finish`]
//! once the graph is complete, and [`ColliderExporter::patch_records`] on the
//! serialized node list.

use log::{debug, error};
use serde_json::Value;

use crate::collider::{self, build_descriptor, ColliderSettings, EXTENSION_NAME};
use crate::config::ExportConfig;
use crate::error::{ColliderError, Result};
use crate::foundation::coordinates::CoordinateConverter;
use crate::foundation::math::{Mat4, Vec3};
use crate::mesh::bounds::mesh_center;
use crate::mesh::MeshData;
use crate::scene::{post_process, NodeIndex, PendingFlags, PendingNode, PendingNodes, PostProcessSummary, SceneGraph};

/// What the host knows about one object being exported
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Object name, used in node names and error messages
    pub name: String,
    /// Collider settings
    pub settings: ColliderSettings,
    /// Object-space geometry, absent for empties
    pub mesh: Option<MeshData>,
    /// Object-space bounding box corners
    pub bounding_box: [Vec3; 8],
    /// Object to world matrix
    pub world_matrix: Mat4,
}

impl SceneObject {
    /// Object without geometry at the world origin
    pub fn new(name: impl Into<String>, settings: ColliderSettings) -> Self {
        Self {
            name: name.into(),
            settings,
            mesh: None,
            bounding_box: [Vec3::zeros(); 8],
            world_matrix: Mat4::identity(),
        }
    }

    /// Attach geometry, deriving the bounding box from it
    pub fn with_mesh(mut self, mesh: MeshData) -> Self {
        if let Ok(corners) = mesh.bounding_box() {
            self.bounding_box = corners;
        }
        self.mesh = Some(mesh);
        self
    }

    /// Override the bounding box
    pub fn with_bounding_box(mut self, corners: [Vec3; 8]) -> Self {
        self.bounding_box = corners;
        self
    }

    /// Set the object to world matrix
    pub fn with_world_matrix(mut self, world_matrix: Mat4) -> Self {
        self.world_matrix = world_matrix;
        self
    }
}

/// Export-side driver for the collider extension
#[derive(Debug)]
pub struct ColliderExporter {
    config: ExportConfig,
    converter: CoordinateConverter,
    pending: PendingNodes,
}

impl ColliderExporter {
    /// Create an exporter for one export invocation
    pub fn new(config: ExportConfig) -> Self {
        let converter = config.converter();
        Self {
            config,
            converter,
            pending: PendingNodes::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Actions queued for the post-processing pass
    pub fn pending(&self) -> &PendingNodes {
        &self.pending
    }

    /// Attach the collider extension to `node_index` and queue its actions
    ///
    /// Objects that are not colliders are left untouched.
    pub fn gather_node(&mut self, graph: &mut SceneGraph, node_index: NodeIndex, object: &SceneObject) -> Result<()> {
        let settings = &object.settings;
        if !self.config.enabled || !settings.is_collider {
            return Ok(());
        }

        let kind = settings.collider_type;
        let node = graph.node_mut(node_index)?;
        if kind.references_mesh() && node.mesh.is_none() {
            return Err(ColliderError::MissingMesh {
                object: object.name.clone(),
            });
        }

        let empty = MeshData::default();
        let mesh = object.mesh.as_ref().unwrap_or(&empty);
        let descriptor = build_descriptor(&object.name, kind, settings.is_trigger, mesh, &self.converter)
            .inspect_err(|err| error!("'{}': collider export failed: {err}", object.name))?;
        node.extensions
            .insert(EXTENSION_NAME.to_string(), descriptor.to_extension()?);

        let mut pending = PendingNode::new(kind);
        if kind.is_analytic() {
            pending.original_mesh = node.mesh.take();
        } else if kind.references_mesh() {
            // The collider keeps its mesh for the extension block
            pending.original_mesh = node.mesh;
        }
        if settings.is_display_mesh {
            pending.flags |= PendingFlags::DISPLAY_MESH;
        }
        if settings.use_mesh_center && kind.uses_mesh_center() {
            let world = self.config.world_space_mesh_center.then_some(&object.world_matrix);
            pending.mesh_center = Some(mesh_center(&object.bounding_box, world, Some(&self.converter)));
            pending.flags |= PendingFlags::MESH_CENTER;
        }
        if settings.use_offsets {
            pending.offset = Some(self.converter.convert_transform(&settings.offset.to_transform()));
            pending.flags |= PendingFlags::OFFSETS;
        }

        debug!(
            "'{}': {kind} collider on node {node_index}, pending {:?}",
            object.name, pending.flags
        );
        if !pending.is_empty() {
            self.pending.insert(node_index, pending);
        }
        Ok(())
    }

    /// Run the post-processing pass over the finished graph
    pub fn finish(&mut self, graph: &mut SceneGraph) -> Result<PostProcessSummary> {
        if !self.config.enabled {
            return Ok(PostProcessSummary::default());
        }
        post_process(graph, &mut self.pending)
    }

    /// Move hull and mesh references into the extension on serialized nodes
    pub fn patch_records(&self, records: &mut [Value]) -> usize {
        if !self.config.enabled {
            return 0;
        }
        collider::patch_serialized_nodes(records)
    }
}
