//! Mesh bounds analysis
//!
//! Computes axis-aligned extrema of a vertex set and the collider dimensions
//! derived from them. Nothing here is cached; every call walks the vertices.

use crate::error::{ColliderError, Result};
use crate::foundation::coordinates::CoordinateConverter;
use crate::foundation::math::{Mat4, Point3, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Get the half-size of the AABB along each axis
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min).abs() * 0.5
    }

    /// Distance between the lowest and highest z
    pub fn height(&self) -> f32 {
        (self.max.z - self.min.z).abs()
    }

    /// The eight corner points
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
        ]
    }
}

/// Single-pass running min/max over all vertices
///
/// With a converter that changes conventions, both corners are converted
/// and re-ordered per axis so `min <= max` keeps holding.
pub fn axis_extrema(vertices: &[Vec3], converter: Option<&CoordinateConverter>) -> Result<Aabb> {
    let (first, rest) = vertices.split_first().ok_or(ColliderError::EmptyMesh)?;

    let mut min = *first;
    let mut max = *first;
    for vertex in rest {
        min = min.inf(vertex);
        max = max.sup(vertex);
    }

    match converter {
        Some(converter) if !converter.is_identity() => {
            let a = converter.convert_vector(min);
            let b = converter.convert_vector(max);
            Ok(Aabb::new(a.inf(&b), a.sup(&b)))
        }
        _ => Ok(Aabb::new(min, max)),
    }
}

/// `0.5 * |max - min|` per axis
pub fn half_extents(bounds: &Aabb) -> Vec3 {
    bounds.half_extents()
}

/// Horizontal footprint radius: `max(x, y)`
///
/// The z (up) extent is ignored, so this is not a bounding sphere radius.
/// Exported sphere and capsule sizes depend on this exact formula.
pub fn radius(half_extents: &Vec3) -> f32 {
    half_extents.x.max(half_extents.y)
}

/// `|z_max - z_min|`
pub fn height(bounds: &Aabb) -> f32 {
    bounds.height()
}

/// Average of the eight bounding box corners
///
/// `world` moves the center into world space first; `converter` then
/// applies the axis convention.
pub fn mesh_center(
    corners: &[Vec3; 8],
    world: Option<&Mat4>,
    converter: Option<&CoordinateConverter>,
) -> Vec3 {
    let mut center = corners.iter().fold(Vec3::zeros(), |sum, corner| sum + corner) / 8.0;

    if let Some(world) = world {
        center = world.transform_point(&Point3::from(center)).coords;
    }
    if let Some(converter) = converter {
        center = converter.convert_vector(center);
    }
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn sample_vertices() -> Vec<Vec3> {
        vec![
            Vec3::new(-1.0, 2.0, -2.0),
            Vec3::new(3.0, -4.0, 4.0),
            Vec3::new(0.5, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_axis_extrema() {
        let bounds = axis_extrema(&sample_vertices(), None).unwrap();
        assert_relative_eq!(bounds.min, Vec3::new(-1.0, -4.0, -2.0), epsilon = EPSILON);
        assert_relative_eq!(bounds.max, Vec3::new(3.0, 2.0, 4.0), epsilon = EPSILON);
    }

    #[test]
    fn test_axis_extrema_empty_mesh() {
        let result = axis_extrema(&[], None);
        assert!(matches!(result, Err(ColliderError::EmptyMesh)));
    }

    #[test]
    fn test_axis_extrema_single_vertex() {
        let bounds = axis_extrema(&[Vec3::new(1.0, 2.0, 3.0)], None).unwrap();
        assert_eq!(bounds.min, bounds.max);
        assert_relative_eq!(half_extents(&bounds), Vec3::zeros(), epsilon = EPSILON);
    }

    #[test]
    fn test_converted_extrema_stay_ordered() {
        let converter = CoordinateConverter::for_export(true);
        let bounds = axis_extrema(&sample_vertices(), Some(&converter)).unwrap();

        assert!(bounds.min.x <= bounds.max.x);
        assert!(bounds.min.y <= bounds.max.y);
        assert!(bounds.min.z <= bounds.max.z);
        // Host z becomes file y, host y becomes file -z
        assert_relative_eq!(bounds.min, Vec3::new(-1.0, -2.0, -2.0), epsilon = EPSILON);
        assert_relative_eq!(bounds.max, Vec3::new(3.0, 4.0, 4.0), epsilon = EPSILON);
    }

    #[test]
    fn test_half_extents_non_negative() {
        let bounds = axis_extrema(&sample_vertices(), None).unwrap();
        let half = half_extents(&bounds);
        assert_relative_eq!(half, Vec3::new(2.0, 3.0, 3.0), epsilon = EPSILON);

        // Reversed corners still give magnitudes
        let reversed = Aabb::new(bounds.max, bounds.min);
        assert_relative_eq!(half_extents(&reversed), half, epsilon = EPSILON);
    }

    #[test]
    fn test_radius_ignores_up_extent() {
        assert_relative_eq!(radius(&Vec3::new(3.0, 1.0, 9.0)), 3.0);
        assert_relative_eq!(radius(&Vec3::new(1.0, 5.0, 9.0)), 5.0);
    }

    #[test]
    fn test_height() {
        let bounds = Aabb::new(Vec3::new(0.0, 0.0, -2.0), Vec3::new(1.0, 1.0, 4.0));
        assert_relative_eq!(height(&bounds), 6.0);
    }

    #[test]
    fn test_mesh_center() {
        let bounds = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        let corners = bounds.corners();

        let local = mesh_center(&corners, None, None);
        assert_relative_eq!(local, Vec3::new(1.0, 2.0, 3.0), epsilon = EPSILON);

        let world = Mat4::new_translation(&Vec3::new(10.0, 0.0, 0.0));
        let moved = mesh_center(&corners, Some(&world), None);
        assert_relative_eq!(moved, Vec3::new(11.0, 2.0, 3.0), epsilon = EPSILON);

        let converter = CoordinateConverter::for_export(true);
        let converted = mesh_center(&corners, None, Some(&converter));
        assert_relative_eq!(converted, Vec3::new(1.0, 3.0, -2.0), epsilon = EPSILON);
    }
}
