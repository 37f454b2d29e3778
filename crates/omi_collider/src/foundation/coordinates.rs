//! Coordinate system conversion utilities
//!
//! The host scene is authored Z-up right-handed while glTF is Y-up
//! right-handed. Export converts host vectors into the file convention,
//! import converts them back. Conversions are explicit values handed to the
//! analyzer and the post-processor rather than being hardcoded in them.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Quat, Quaternion, Transform, Vec3};

/// Coordinate system conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// Y-up, right-handed (glTF)
    YUpRightHanded,
    /// Z-up, right-handed (the authoring host)
    ZUpRightHanded,
}

/// Swap the second and third components and negate the new third one
///
/// For scale vectors (`is_scale`) the negation is applied a second time and
/// cancels out, so a scale never changes sign.
pub fn convert_axis_convention(vector: Vec3, is_scale: bool) -> Vec3 {
    let mut converted = Vec3::new(vector.x, vector.z, -vector.y);
    if is_scale {
        converted.z = -converted.z;
    }
    converted
}

/// Inverse of [`convert_axis_convention`]: Y-up back to Z-up
pub fn revert_axis_convention(vector: Vec3, is_scale: bool) -> Vec3 {
    if is_scale {
        Vec3::new(vector.x, vector.z, vector.y)
    } else {
        Vec3::new(vector.x, -vector.z, vector.y)
    }
}

/// Apply the axis swap to the vector part of a quaternion
pub fn convert_rotation_convention(rotation: Quat) -> Quat {
    let q = rotation.quaternion();
    Quat::new_unchecked(Quaternion::new(q.w, q.i, q.k, -q.j))
}

/// Inverse of [`convert_rotation_convention`]
pub fn revert_rotation_convention(rotation: Quat) -> Quat {
    let q = rotation.quaternion();
    Quat::new_unchecked(Quaternion::new(q.w, q.i, -q.k, q.j))
}

/// Coordinate system converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateConverter {
    from: CoordinateSystem,
    to: CoordinateSystem,
}

impl CoordinateConverter {
    /// Create a new coordinate converter
    pub fn new(from: CoordinateSystem, to: CoordinateSystem) -> Self {
        Self { from, to }
    }

    /// Converter that leaves everything untouched
    pub fn identity() -> Self {
        Self::new(CoordinateSystem::ZUpRightHanded, CoordinateSystem::ZUpRightHanded)
    }

    /// Host (Z-up) to file, converting only when the file is Y-up
    pub fn for_export(y_up: bool) -> Self {
        let to = if y_up { CoordinateSystem::YUpRightHanded } else { CoordinateSystem::ZUpRightHanded };
        Self::new(CoordinateSystem::ZUpRightHanded, to)
    }

    /// File back to host (Z-up), converting only when the file is Y-up
    pub fn for_import(y_up: bool) -> Self {
        let from = if y_up { CoordinateSystem::YUpRightHanded } else { CoordinateSystem::ZUpRightHanded };
        Self::new(from, CoordinateSystem::ZUpRightHanded)
    }

    /// Source convention
    pub fn from(&self) -> CoordinateSystem {
        self.from
    }

    /// Target convention
    pub fn to(&self) -> CoordinateSystem {
        self.to
    }

    /// Whether this converter is a no-op
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Convert a position or direction
    pub fn convert_vector(&self, vector: Vec3) -> Vec3 {
        match (self.from, self.to) {
            (CoordinateSystem::ZUpRightHanded, CoordinateSystem::YUpRightHanded) => {
                convert_axis_convention(vector, false)
            }
            (CoordinateSystem::YUpRightHanded, CoordinateSystem::ZUpRightHanded) => {
                revert_axis_convention(vector, false)
            }
            _ => vector,
        }
    }

    /// Convert a scale vector (component magnitudes, never sign-flipped)
    pub fn convert_scale(&self, scale: Vec3) -> Vec3 {
        match (self.from, self.to) {
            (CoordinateSystem::ZUpRightHanded, CoordinateSystem::YUpRightHanded) => {
                convert_axis_convention(scale, true)
            }
            (CoordinateSystem::YUpRightHanded, CoordinateSystem::ZUpRightHanded) => {
                revert_axis_convention(scale, true)
            }
            _ => scale,
        }
    }

    /// Convert a rotation
    pub fn convert_rotation(&self, rotation: Quat) -> Quat {
        match (self.from, self.to) {
            (CoordinateSystem::ZUpRightHanded, CoordinateSystem::YUpRightHanded) => {
                convert_rotation_convention(rotation)
            }
            (CoordinateSystem::YUpRightHanded, CoordinateSystem::ZUpRightHanded) => {
                revert_rotation_convention(rotation)
            }
            _ => rotation,
        }
    }

    /// Convert every component of a transform
    pub fn convert_transform(&self, transform: &Transform) -> Transform {
        Transform {
            position: self.convert_vector(transform.position),
            rotation: self.convert_rotation(transform.rotation),
            scale: self.convert_scale(transform.scale),
        }
    }
}

impl Default for CoordinateConverter {
    /// Default converter: host Z-up to glTF Y-up
    fn default() -> Self {
        Self::for_export(true)
    }
}
