//! In-memory scene graph the exporter writes into
//!
//! Mirrors the node and scene arrays of a glTF document closely enough that
//! [`SceneNode::to_record`] yields the node JSON the host serializes.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{ColliderError, Result};
use crate::foundation::math::{Mat4, Quat, Transform, Vec3};

/// Index into [`SceneGraph::nodes`]
pub type NodeIndex = usize;

/// One node of the scene graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    /// Node name
    pub name: String,
    /// Index of the rendered mesh
    pub mesh: Option<u32>,
    /// Local translation
    pub translation: Option<Vec3>,
    /// Local rotation
    pub rotation: Option<Quat>,
    /// Local scale
    pub scale: Option<Vec3>,
    /// Local matrix, exclusive with the TRS fields
    pub matrix: Option<Mat4>,
    /// Child node indices
    pub children: Vec<NodeIndex>,
    /// Extension payloads keyed by extension name
    pub extensions: BTreeMap<String, Value>,
}

impl SceneNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the mesh index
    pub fn with_mesh(mut self, mesh: u32) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Set the translation
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = Some(translation);
        self
    }

    /// Set the rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set the scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the local matrix
    pub fn with_matrix(mut self, matrix: Mat4) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Set the children
    pub fn with_children(mut self, children: Vec<NodeIndex>) -> Self {
        self.children = children;
        self
    }

    /// Whether any of translation, rotation, scale or matrix is set
    pub fn has_transform(&self) -> bool {
        self.translation.is_some() || self.rotation.is_some() || self.scale.is_some() || self.matrix.is_some()
    }

    /// Local transform with identity substituted for absent fields
    ///
    /// A matrix, when present, takes precedence over the TRS fields.
    pub fn local_transform(&self) -> Transform {
        match &self.matrix {
            Some(matrix) => Transform::from_matrix(matrix),
            None => Transform::from_parts(self.translation, self.rotation, self.scale),
        }
    }

    /// Replace the local transform with explicit TRS fields
    pub fn set_local_transform(&mut self, transform: Transform) {
        self.translation = Some(transform.position);
        self.rotation = Some(transform.rotation);
        self.scale = Some(transform.scale);
        self.matrix = None;
    }

    /// Decompose a matrix into TRS fields, no-op without a matrix
    pub fn expand_matrix(&mut self) {
        if let Some(matrix) = self.matrix.take() {
            self.set_local_transform(Transform::from_matrix(&matrix));
        }
    }

    /// Render as a glTF node object, absent fields omitted
    ///
    /// Rotation is written `[x, y, z, w]` and the matrix column-major.
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();

        if !self.name.is_empty() {
            record.insert("name".to_string(), Value::from(self.name.as_str()));
        }
        if let Some(mesh) = self.mesh {
            record.insert("mesh".to_string(), Value::from(mesh));
        }
        if let Some(translation) = &self.translation {
            record.insert("translation".to_string(), floats(translation.as_slice()));
        }
        if let Some(rotation) = &self.rotation {
            record.insert("rotation".to_string(), floats(rotation.coords.as_slice()));
        }
        if let Some(scale) = &self.scale {
            record.insert("scale".to_string(), floats(scale.as_slice()));
        }
        if let Some(matrix) = &self.matrix {
            record.insert("matrix".to_string(), floats(matrix.as_slice()));
        }
        if !self.children.is_empty() {
            record.insert("children".to_string(), Value::from(self.children.clone()));
        }
        if !self.extensions.is_empty() {
            let extensions: Map<String, Value> = self.extensions.clone().into_iter().collect();
            record.insert("extensions".to_string(), Value::Object(extensions));
        }

        Value::Object(record)
    }
}

fn floats(values: &[f32]) -> Value {
    Value::Array(values.iter().map(|v| Value::from(*v)).collect())
}

/// A scene and its root nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    /// Scene name
    pub name: String,
    /// Root node indices
    pub nodes: Vec<NodeIndex>,
}

impl Scene {
    /// Create a scene with the given roots
    pub fn new(name: impl Into<String>, nodes: Vec<NodeIndex>) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }
}

/// Node list plus scenes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGraph {
    /// All nodes; indices are stable, nodes are only ever appended
    pub nodes: Vec<SceneNode>,
    /// Scenes referencing root nodes
    pub scenes: Vec<Scene>,
}

impl SceneGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its index
    pub fn add_node(&mut self, node: SceneNode) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Append a scene
    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node
    pub fn node(&self, index: NodeIndex) -> Result<&SceneNode> {
        self.nodes.get(index).ok_or(ColliderError::NodeOutOfRange { index })
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, index: NodeIndex) -> Result<&mut SceneNode> {
        self.nodes.get_mut(index).ok_or(ColliderError::NodeOutOfRange { index })
    }

    /// First node listing `child` among its children
    pub fn find_parent(&self, child: NodeIndex) -> Result<NodeIndex> {
        self.nodes
            .iter()
            .position(|node| node.children.contains(&child))
            .ok_or(ColliderError::MissingParent { node: child })
    }

    /// Serialized node records, in index order
    pub fn to_records(&self) -> Vec<Value> {
        self.nodes.iter().map(SceneNode::to_record).collect()
    }
}
