//! Collider descriptors attached to scene nodes

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::settings::ColliderKind;
use crate::error::{ColliderError, Result};
use crate::foundation::math::Vec3;

/// Shape-specific part of a descriptor
///
/// One variant per kind, each carrying exactly the fields that kind needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColliderShape {
    /// Half extents along each axis
    Box {
        /// Half extents in file convention
        extents: Vec3,
    },
    /// Sphere radius
    Sphere {
        /// Radius
        radius: f32,
    },
    /// Capsule radius and total height
    Capsule {
        /// Radius
        radius: f32,
        /// Height along the up axis
        height: f32,
    },
    /// Convex hull mesh reference, resolved after node serialization
    Hull {
        /// Mesh index, `None` until patched
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mesh: Option<u32>,
    },
    /// Triangle mesh reference, resolved after node serialization
    Mesh {
        /// Mesh index, `None` until patched
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mesh: Option<u32>,
    },
    /// Aggregate of child colliders
    Compound,
}

impl ColliderShape {
    /// Kind tag of this shape
    pub fn kind(&self) -> ColliderKind {
        match self {
            Self::Box { .. } => ColliderKind::Box,
            Self::Sphere { .. } => ColliderKind::Sphere,
            Self::Capsule { .. } => ColliderKind::Capsule,
            Self::Hull { .. } => ColliderKind::Hull,
            Self::Mesh { .. } => ColliderKind::Mesh,
            Self::Compound => ColliderKind::Compound,
        }
    }

    /// Referenced mesh index for hull and mesh shapes
    pub fn mesh(&self) -> Option<u32> {
        match self {
            Self::Hull { mesh } | Self::Mesh { mesh } => *mesh,
            _ => None,
        }
    }
}

/// `OMI_collider` payload of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderDescriptor {
    /// Shape and its dimensions
    #[serde(flatten)]
    pub shape: ColliderShape,
    /// Trigger volume flag
    #[serde(rename = "isTrigger", default)]
    pub is_trigger: bool,
}

impl ColliderDescriptor {
    /// Wrap a shape
    pub fn new(shape: ColliderShape, is_trigger: bool) -> Self {
        Self { shape, is_trigger }
    }

    /// Kind tag of the shape
    pub fn kind(&self) -> ColliderKind {
        self.shape.kind()
    }

    /// Render as the JSON object stored under the extension name
    pub fn to_extension(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Parse an extension block read from a node record
    pub fn from_extension(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| ColliderError::MalformedExtension(e.to_string()))
    }
}
