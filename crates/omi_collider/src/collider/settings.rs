//! Per-object collider settings supplied by the host
//!
//! Statically typed replacements for the property groups a host attaches to
//! its objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Quat, Transform, Vec3};

/// Collider shape kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderKind {
    /// Axis-aligned box described by half extents
    #[default]
    Box,
    /// Sphere described by a radius
    Sphere,
    /// Capsule described by radius and height
    Capsule,
    /// Convex hull referencing a validated mesh
    Hull,
    /// Arbitrary triangle mesh reference
    Mesh,
    /// Aggregate of child colliders
    Compound,
}

impl ColliderKind {
    /// All kinds, in declaration order
    pub const ALL: [ColliderKind; 6] = [
        Self::Box,
        Self::Sphere,
        Self::Capsule,
        Self::Hull,
        Self::Mesh,
        Self::Compound,
    ];

    /// Name used in the extension payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Capsule => "capsule",
            Self::Hull => "hull",
            Self::Mesh => "mesh",
            Self::Compound => "compound",
        }
    }

    /// Fully described by dimensions, no mesh in the output
    pub fn is_analytic(&self) -> bool {
        matches!(self, Self::Box | Self::Sphere | Self::Capsule)
    }

    /// Carries a mesh index inside the descriptor
    pub fn references_mesh(&self) -> bool {
        matches!(self, Self::Hull | Self::Mesh)
    }

    /// Mesh-center correction applies to this kind
    ///
    /// Hull and mesh colliders keep their real geometry. Compound colliders
    /// are skipped as well until their children are assembled here.
    pub fn uses_mesh_center(&self) -> bool {
        self.is_analytic()
    }
}

impl fmt::Display for ColliderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColliderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown collider kind '{s}'"))
    }
}

/// Extra transform applied on top of a collider node's own transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderOffset {
    /// Translation offset
    pub translation: Vec3,
    /// Rotation offset
    pub rotation: Quat,
    /// Scale factors
    pub scale: Vec3,
}

impl Default for ColliderOffset {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl ColliderOffset {
    /// Offset as a transform in host convention
    pub fn to_transform(&self) -> Transform {
        Transform {
            position: self.translation,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
}

/// Collider settings of one host object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderSettings {
    /// Export this object as a collider
    pub is_collider: bool,
    /// Shape to derive
    pub collider_type: ColliderKind,
    /// Trigger volume (events only, no physical response)
    pub is_trigger: bool,
    /// Keep the visual mesh as a separate display node
    pub is_display_mesh: bool,
    /// Move the collider to the center of the mesh bounds
    pub use_mesh_center: bool,
    /// Apply [`ColliderSettings::offset`]
    pub use_offsets: bool,
    /// Offset applied when `use_offsets` is set
    pub offset: ColliderOffset,
}

impl ColliderSettings {
    /// Settings for a collider of the given kind
    pub fn collider(kind: ColliderKind) -> Self {
        Self {
            is_collider: true,
            collider_type: kind,
            ..Default::default()
        }
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Keep a display mesh next to the collider
    pub fn with_display_mesh(mut self, enabled: bool) -> Self {
        self.is_display_mesh = enabled;
        self
    }

    /// Center the collider on its mesh bounds
    pub fn with_mesh_center(mut self, enabled: bool) -> Self {
        self.use_mesh_center = enabled;
        self
    }

    /// Apply an offset transform
    pub fn with_offset(mut self, offset: ColliderOffset) -> Self {
        self.use_offsets = true;
        self.offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert!(ColliderKind::Box.is_analytic());
        assert!(ColliderKind::Capsule.uses_mesh_center());
        assert!(ColliderKind::Hull.references_mesh());
        assert!(!ColliderKind::Hull.uses_mesh_center());
        assert!(!ColliderKind::Mesh.uses_mesh_center());
        assert!(!ColliderKind::Compound.uses_mesh_center());
        assert!(!ColliderKind::Compound.references_mesh());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Capsule".parse::<ColliderKind>(), Ok(ColliderKind::Capsule));
        assert_eq!("hull".parse::<ColliderKind>(), Ok(ColliderKind::Hull));
        assert!("cylinder".parse::<ColliderKind>().is_err());
    }

    #[test]
    fn test_settings_builder() {
        let settings = ColliderSettings::collider(ColliderKind::Sphere)
            .as_trigger()
            .with_display_mesh(true);

        assert!(settings.is_collider);
        assert!(settings.is_trigger);
        assert!(settings.is_display_mesh);
        assert!(!settings.use_offsets);
        assert_eq!(settings.offset.to_transform(), Transform::identity());
    }
}
