//! Signed distance oracle over a triangle mesh.

use meshfx_types::TriangleMesh;
use nalgebra::{Point3, Vector3};

use crate::error::{OracleError, OracleResult};
use crate::query::{closest_point_on_triangle, point_in_mesh};

/// Signed distance queries against a fixed triangle mesh.
///
/// Construction precomputes per-face unit normals; each query scans every
/// face for the closest surface point and takes its sign from the closest
/// face's normal. Queries are therefore O(face count) — callers issuing
/// many queries against large meshes should hand the oracle a simplified
/// stand-in surface.
///
/// # Sign convention
///
/// [`DistanceOracle::evaluate`] returns a **negative** distance for points
/// inside the mesh and a positive distance outside. The convention assumes
/// outward-facing normals (counter-clockwise winding seen from outside).
/// [`DistanceOracle::is_inside`] offers an independent ray-parity check of
/// the same question.
#[derive(Debug, Clone)]
pub struct DistanceOracle {
    mesh: TriangleMesh,
    /// Unit normals, index-aligned with `mesh.faces`.
    face_normals: Vec<Vector3<f64>>,
}

impl DistanceOracle {
    /// Builds an oracle over `mesh`, taking ownership for the oracle's
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::EmptyMesh`] if the mesh has no faces.
    pub fn new(mesh: TriangleMesh) -> OracleResult<Self> {
        if mesh.faces.is_empty() {
            return Err(OracleError::EmptyMesh);
        }

        let face_normals = face_normals(&mesh);
        Ok(Self { mesh, face_normals })
    }

    /// Signed distance from `point` to the mesh surface.
    ///
    /// The magnitude is the Euclidean distance to the nearest face feature
    /// (interior, edge or corner). Negative means inside, positive outside;
    /// points exactly on the surface evaluate to zero.
    #[must_use]
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        let (distance, face_index) = self.closest_face(point);
        self.sign_from_face(point, face_index) * distance
    }

    /// Ray-parity inside test: casts a +X ray and counts crossings.
    ///
    /// Independent of the normal-based sign used by
    /// [`DistanceOracle::evaluate`]; on a watertight mesh with outward
    /// winding both agree.
    #[must_use]
    pub fn is_inside(&self, point: Point3<f64>) -> bool {
        point_in_mesh(point, &self.mesh)
    }

    /// The mesh this oracle measures against.
    #[must_use]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Finds the closest face: returns the distance and the face index.
    fn closest_face(&self, point: Point3<f64>) -> (f64, usize) {
        let mut min_dist_sq = f64::MAX;
        let mut closest = 0;

        for index in 0..self.mesh.face_count() {
            let Some(triangle) = self.mesh.triangle(index) else {
                continue;
            };
            let candidate =
                closest_point_on_triangle(point, triangle.v0, triangle.v1, triangle.v2);
            let dist_sq = (candidate - point).norm_squared();
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
                closest = index;
            }
        }

        (min_dist_sq.sqrt(), closest)
    }

    /// Sign of the query point relative to one face: +1 on the outward
    /// normal's side, -1 behind it.
    fn sign_from_face(&self, point: Point3<f64>, face_index: usize) -> f64 {
        let Some(triangle) = self.mesh.triangle(face_index) else {
            return 1.0;
        };
        let to_point = point - triangle.v0;
        if to_point.dot(&self.face_normals[face_index]) >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Unit normals per face; degenerate faces fall back to +Z so the vector
/// stays index-aligned with the face list.
fn face_normals(mesh: &TriangleMesh) -> Vec<Vector3<f64>> {
    (0..mesh.face_count())
        .map(|index| {
            mesh.triangle(index).map_or_else(Vector3::z, |t| {
                t.normal_unnormalized()
                    .try_normalize(f64::EPSILON)
                    .unwrap_or_else(Vector3::z)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meshfx_types::{unit_cube, unit_sphere};

    /// Regular-ish tetrahedron sitting on z = 0 with outward winding.
    fn unit_tetrahedron() -> TriangleMesh {
        TriangleMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 0.866, 0.0),
                Point3::new(0.5, 0.289, 0.816),
            ],
            vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
        )
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let result = DistanceOracle::new(TriangleMesh::new());
        assert!(matches!(result, Err(OracleError::EmptyMesh)));
    }

    #[test]
    fn tetrahedron_sign() {
        let oracle = DistanceOracle::new(unit_tetrahedron()).expect("oracle should build");
        // Rough centroid is inside; far point is outside.
        assert!(oracle.evaluate(Point3::new(0.5, 0.29, 0.2)) < 0.0);
        assert!(oracle.evaluate(Point3::new(5.0, 5.0, 5.0)) > 0.0);
    }

    #[test]
    fn cube_center_distance() {
        let oracle = DistanceOracle::new(unit_cube()).expect("oracle should build");
        let d = oracle.evaluate(Point3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(d, -0.5, epsilon = 1e-10);
    }

    #[test]
    fn cube_outside_distance() {
        let oracle = DistanceOracle::new(unit_cube()).expect("oracle should build");
        let d = oracle.evaluate(Point3::new(2.0, 0.5, 0.5));
        assert_relative_eq!(d, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn surface_point_is_not_negative() {
        let oracle = DistanceOracle::new(unit_cube()).expect("oracle should build");
        let d = oracle.evaluate(Point3::new(0.5, 0.5, 0.0));
        assert_relative_eq!(d.abs(), 0.0, epsilon = 1e-12);
        assert!(d >= 0.0);
    }

    #[test]
    fn sign_agrees_with_parity_on_cube() {
        let oracle = DistanceOracle::new(unit_cube()).expect("oracle should build");
        let probes = [
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(0.1, 0.9, 0.2),
            Point3::new(-0.5, 0.5, 0.5),
            Point3::new(0.5, 0.5, 1.5),
            Point3::new(1.2, -0.1, 0.3),
        ];
        for p in probes {
            assert_eq!(
                oracle.evaluate(p) < 0.0,
                oracle.is_inside(p),
                "sign disagreement at {p}"
            );
        }
    }

    #[test]
    fn sign_agrees_with_parity_on_sphere() {
        let oracle = DistanceOracle::new(unit_sphere(2)).expect("oracle should build");
        let probes = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.3, -0.2),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(1.5, 1.5, 1.5),
        ];
        for p in probes {
            assert_eq!(
                oracle.evaluate(p) < 0.0,
                oracle.is_inside(p),
                "sign disagreement at {p}"
            );
        }
    }

    #[test]
    fn sphere_outside_distance_brackets_the_radius() {
        // The faceted sphere lies just inside the unit ball, so an outside
        // point at twice the radius sits between 1.0 and 1.0 + sag.
        let oracle = DistanceOracle::new(unit_sphere(2)).expect("oracle should build");
        let d = oracle.evaluate(Point3::new(2.0, 0.0, 0.0));
        assert!(d > 0.99 && d < 1.1, "distance was {d}");
    }
}
