//! Math utilities and types
//!
//! Provides the vector, quaternion and transform types shared by the bounds
//! analyzer, the descriptor builder and the scene graph post-processor.

pub use nalgebra::{
    Vector3,
    Matrix3, Matrix4,
    Quaternion,
    Rotation3,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from individually optional components
    ///
    /// Missing components fall back to identity: zero translation,
    /// identity rotation and unit scale.
    pub fn from_parts(position: Option<Vec3>, rotation: Option<Quat>, scale: Option<Vec3>) -> Self {
        Self {
            position: position.unwrap_or_else(Vec3::zeros),
            rotation: rotation.unwrap_or_else(Quat::identity),
            scale: scale.unwrap_or_else(|| Vec3::new(1.0, 1.0, 1.0)),
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Create a transform from a transformation matrix
    ///
    /// Assumes a TRS matrix without shear. A zero-length basis column keeps
    /// its zero scale and leaves the rotation column untouched.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let position = Vec3::new(matrix[(0, 3)], matrix[(1, 3)], matrix[(2, 3)]);

        let columns = [
            Vec3::new(matrix[(0, 0)], matrix[(1, 0)], matrix[(2, 0)]),
            Vec3::new(matrix[(0, 1)], matrix[(1, 1)], matrix[(2, 1)]),
            Vec3::new(matrix[(0, 2)], matrix[(1, 2)], matrix[(2, 2)]),
        ];
        let scale = Vec3::new(columns[0].magnitude(), columns[1].magnitude(), columns[2].magnitude());

        // Remove scale from the basis to recover the rotation
        let unscale = |column: Vec3, length: f32| if length > 0.0 { column / length } else { column };
        let rotation_matrix = Mat3::from_columns(&[
            unscale(columns[0], scale.x),
            unscale(columns[1], scale.y),
            unscale(columns[2], scale.z),
        ]);
        let rotation = Quat::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation_matrix));

        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Compose an offset on top of this transform
    ///
    /// Translation adds component-wise, rotation multiplies as `self * offset`
    /// (the offset rotates in this transform's local frame), scale multiplies
    /// component-wise.
    pub fn compose(&self, offset: &Transform) -> Transform {
        Transform {
            position: self.position + offset.position,
            rotation: self.rotation * offset.rotation,
            scale: self.scale.component_mul(&offset.scale),
        }
    }
}

/// Compose `offset` onto `base`, see [`Transform::compose`]
pub fn compose_transform(base: &Transform, offset: &Transform) -> Transform {
    base.compose(offset)
}
