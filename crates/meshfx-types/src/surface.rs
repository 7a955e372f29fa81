//! Polygonal surface mesh as exchanged with host applications.

use nalgebra::Point3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::mesh::TriangleMesh;
use crate::traits::MeshBounds;

/// A polygonal surface mesh: point positions plus faces of arbitrary arity.
///
/// This is the shape meshes arrive in from a host application. Faces are
/// index sequences of three or more corners, wound counter-clockwise when
/// viewed from outside. The geometry kernels in this workspace operate on
/// [`TriangleMesh`]; [`SurfaceMesh::triangulate`] converts by fanning each
/// polygon around its first corner.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Point positions.
    pub positions: Vec<Point3<f64>>,
    /// Faces as index sequences into `positions`.
    pub faces: Vec<Vec<u32>>,
}

impl SurfaceMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh from existing positions and faces.
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<Vec<u32>>) -> Self {
        Self { positions, faces }
    }

    /// Number of points.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of polygonal faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the mesh has no points or no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Appends a face.
    ///
    /// Faces with fewer than three corners are legal to store but are
    /// dropped by [`SurfaceMesh::triangulate`].
    pub fn push_face(&mut self, face: Vec<u32>) {
        self.faces.push(face);
    }

    /// Returns `true` if every face is a triangle.
    #[must_use]
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(|face| face.len() == 3)
    }

    /// Fan-triangulates every polygon around its first corner.
    ///
    /// A face `[v0, v1, .., vk]` becomes the triangles `(v0, vi, vi+1)`.
    /// Convex polygons keep their coverage and winding; faces with fewer
    /// than three corners are dropped. Positions are copied unchanged, so
    /// the result has the same bounds as the input.
    #[must_use]
    pub fn triangulate(&self) -> TriangleMesh {
        let mut faces = Vec::with_capacity(self.faces.len());
        for face in &self.faces {
            for i in 1..face.len().saturating_sub(1) {
                faces.push([face[0], face[i], face[i + 1]]);
            }
        }
        TriangleMesh::from_parts(self.positions.clone(), faces)
    }
}

impl From<TriangleMesh> for SurfaceMesh {
    fn from(mesh: TriangleMesh) -> Self {
        let faces = mesh.faces.iter().map(|face| face.to_vec()).collect();
        Self {
            positions: mesh.vertices,
            faces,
        }
    }
}

impl MeshBounds for SurfaceMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> SurfaceMesh {
        SurfaceMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        )
    }

    #[test]
    fn quad_triangulates_to_two_faces() {
        let tri = quad().triangulate();
        assert_eq!(tri.face_count(), 2);
        assert_eq!(tri.faces[0], [0, 1, 2]);
        assert_eq!(tri.faces[1], [0, 2, 3]);
    }

    #[test]
    fn pentagon_triangulates_to_three_faces() {
        let mut mesh = quad();
        mesh.positions.push(Point3::new(-0.5, 0.5, 0.0));
        mesh.faces[0] = vec![0, 1, 2, 3, 4];
        let tri = mesh.triangulate();
        assert_eq!(tri.face_count(), 3);
        assert_eq!(tri.faces[2], [0, 3, 4]);
    }

    #[test]
    fn short_faces_are_dropped() {
        let mut mesh = quad();
        mesh.push_face(vec![0, 1]);
        mesh.push_face(vec![2]);
        assert_eq!(mesh.face_count(), 3);
        assert_eq!(mesh.triangulate().face_count(), 2);
    }

    #[test]
    fn triangulated_mesh_round_trips() {
        let tri = quad().triangulate();
        let surface = SurfaceMesh::from(tri.clone());
        assert!(surface.is_triangulated());
        assert_eq!(surface.face_count(), tri.face_count());
        assert_eq!(surface.triangulate().faces, tri.faces);
    }

    #[test]
    fn winding_is_preserved() {
        // The quad lies in z = 0 with CCW winding seen from +Z; both fan
        // triangles must keep a +Z normal.
        let tri = quad().triangulate();
        for t in tri.triangles() {
            assert!(t.normal_unnormalized().z > 0.0);
        }
    }

    #[test]
    fn bounds_match_triangulation() {
        let mesh = quad();
        let a = mesh.bounds();
        let b = mesh.triangulate().bounds();
        assert!((a.min - b.min).norm() < 1e-15);
        assert!((a.max - b.max).norm() < 1e-15);
    }

    #[test]
    fn empty_mesh_is_empty() {
        let mesh = SurfaceMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.is_triangulated());
        assert!(mesh.bounds().is_empty());
        assert_eq!(mesh.triangulate().face_count(), 0);
    }
}
