//! Descriptor derivation from mesh geometry

use log::debug;

use super::settings::ColliderKind;
use super::shape::{ColliderDescriptor, ColliderShape};
use crate::error::{ColliderError, Result};
use crate::foundation::coordinates::CoordinateConverter;
use crate::mesh::bounds::{self, axis_extrema};
use crate::mesh::hull;
use crate::mesh::MeshData;

/// Build the descriptor for one object
///
/// Box extents are measured after axis conversion. Sphere and capsule
/// dimensions are measured in the host convention, where z is up.
pub fn build_descriptor(
    object: &str,
    kind: ColliderKind,
    is_trigger: bool,
    mesh: &MeshData,
    converter: &CoordinateConverter,
) -> Result<ColliderDescriptor> {
    let shape = match kind {
        ColliderKind::Box => {
            let extents = bounds::half_extents(&axis_extrema(&mesh.vertices, Some(converter))?);
            ColliderShape::Box { extents }
        }
        ColliderKind::Sphere => {
            let extents = axis_extrema(&mesh.vertices, None)?.half_extents();
            ColliderShape::Sphere {
                radius: bounds::radius(&extents),
            }
        }
        ColliderKind::Capsule => {
            let host_bounds = axis_extrema(&mesh.vertices, None)?;
            ColliderShape::Capsule {
                radius: bounds::radius(&host_bounds.half_extents()),
                height: bounds::height(&host_bounds),
            }
        }
        ColliderKind::Hull => {
            if mesh.is_empty() {
                return Err(ColliderError::EmptyMesh);
            }
            let report = hull::validate_hull(mesh);
            if !report.is_valid() {
                return Err(ColliderError::InvalidHull {
                    object: object.to_string(),
                    invalid_edges: report.invalid_edges.into_iter().collect(),
                });
            }
            ColliderShape::Hull { mesh: None }
        }
        ColliderKind::Mesh => ColliderShape::Mesh { mesh: None },
        ColliderKind::Compound => ColliderShape::Compound,
    };

    debug!("'{object}': built {kind} descriptor");
    Ok(ColliderDescriptor::new(shape, is_trigger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn unit_cube() -> MeshData {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        let faces = vec![
            vec![0, 3, 2, 1],
            vec![4, 5, 6, 7],
            vec![0, 1, 5, 4],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![3, 0, 4, 7],
        ];
        MeshData::new(vertices, faces)
    }

    /// 1 x 2 x 4 block sitting on the origin, z up
    fn tall_block() -> MeshData {
        MeshData::new(
            vec![Vec3::new(-0.5, -1.0, 0.0), Vec3::new(0.5, 1.0, 4.0)],
            Vec::new(),
        )
    }

    #[test]
    fn test_unit_cube_box() {
        let descriptor = build_descriptor(
            "Cube",
            ColliderKind::Box,
            false,
            &unit_cube(),
            &CoordinateConverter::default(),
        )
        .unwrap();

        match descriptor.shape {
            ColliderShape::Box { extents } => {
                assert_relative_eq!(extents, Vec3::new(0.5, 0.5, 0.5), epsilon = EPSILON);
            }
            other => panic!("expected box, got {other:?}"),
        }
    }

    #[test]
    fn test_box_extents_follow_axis_conversion() {
        let descriptor = build_descriptor(
            "Block",
            ColliderKind::Box,
            false,
            &tall_block(),
            &CoordinateConverter::default(),
        )
        .unwrap();

        let ColliderShape::Box { extents } = descriptor.shape else {
            panic!("expected box");
        };
        // Host z (up) becomes file y
        assert_relative_eq!(extents, Vec3::new(0.5, 2.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_capsule_dimensions_use_host_up_axis() {
        let descriptor = build_descriptor(
            "Pill",
            ColliderKind::Capsule,
            true,
            &tall_block(),
            &CoordinateConverter::default(),
        )
        .unwrap();

        assert!(descriptor.is_trigger);
        let ColliderShape::Capsule { radius, height } = descriptor.shape else {
            panic!("expected capsule");
        };
        assert_relative_eq!(radius, 1.0, epsilon = EPSILON);
        assert_relative_eq!(height, 4.0, epsilon = EPSILON);
    }

    #[test]
    fn test_sphere_radius_ignores_up_extent() {
        let descriptor = build_descriptor(
            "Ball",
            ColliderKind::Sphere,
            false,
            &tall_block(),
            &CoordinateConverter::identity(),
        )
        .unwrap();

        assert_eq!(descriptor.shape, ColliderShape::Sphere { radius: 1.0 });
    }

    #[test]
    fn test_valid_hull_is_unresolved() {
        let descriptor = build_descriptor(
            "Cube",
            ColliderKind::Hull,
            false,
            &unit_cube(),
            &CoordinateConverter::default(),
        )
        .unwrap();
        assert_eq!(descriptor.shape, ColliderShape::Hull { mesh: None });
    }

    #[test]
    fn test_invalid_hull_names_object() {
        let mut open = unit_cube();
        open.faces.pop();

        let result = build_descriptor(
            "Crate",
            ColliderKind::Hull,
            false,
            &open,
            &CoordinateConverter::default(),
        );
        match result {
            Err(ColliderError::InvalidHull { object, invalid_edges }) => {
                assert_eq!(object, "Crate");
                assert_eq!(invalid_edges.len(), 4);
            }
            other => panic!("expected InvalidHull, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_mesh() {
        let empty = MeshData::default();
        let converter = CoordinateConverter::default();

        for kind in [ColliderKind::Box, ColliderKind::Sphere, ColliderKind::Capsule, ColliderKind::Hull] {
            let result = build_descriptor("Empty", kind, false, &empty, &converter);
            assert!(matches!(result, Err(ColliderError::EmptyMesh)), "{kind}");
        }

        let compound = build_descriptor("Empty", ColliderKind::Compound, false, &empty, &converter).unwrap();
        assert_eq!(compound.shape, ColliderShape::Compound);
    }
}
