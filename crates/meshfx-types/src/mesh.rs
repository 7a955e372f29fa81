//! Indexed triangle mesh storage.

use nalgebra::{Point3, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::traits::MeshBounds;
use crate::triangle::Triangle;

/// An indexed triangle mesh: vertex positions plus index triples.
///
/// Faces are wound counter-clockwise when viewed from outside and must
/// reference valid entries in `vertices`. This is the working representation
/// of the geometry kernels; polygonal input arrives as
/// [`SurfaceMesh`](crate::SurfaceMesh) and is triangulated into this type.
///
/// # Example
///
/// ```
/// use meshfx_types::{unit_cube, MeshBounds};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// assert!((cube.volume() - 1.0).abs() < 1e-10);
/// assert!((cube.bounds().size().x - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Triangular faces as index triples into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates an empty mesh with preallocated capacity.
    #[must_use]
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Creates a mesh from existing vertices and faces.
    #[must_use]
    pub const fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangular faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the mesh has no vertices or no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Returns the triangle at `index`, or `None` if the index is out of
    /// range or the face references missing vertices.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let face = self.faces.get(index)?;
        let v0 = self.vertices.get(face[0] as usize)?;
        let v1 = self.vertices.get(face[1] as usize)?;
        let v2 = self.vertices.get(face[2] as usize)?;
        Some(Triangle::new(*v0, *v1, *v2))
    }

    /// Iterates over all valid triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.faces.len()).filter_map(|i| self.triangle(i))
    }

    /// Signed enclosed volume via the divergence theorem.
    ///
    /// Positive for a closed mesh with outward normals, negative for an
    /// inside-out mesh, and meaningless for open meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|t| t.v0.coords.cross(&t.v1.coords).dot(&t.v2.coords))
            .sum::<f64>()
            / 6.0
    }

    /// Absolute enclosed volume of a closed mesh.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Total area of all faces.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|t| t.area()).sum()
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Scales every vertex about the origin.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.vertices {
            v.coords *= factor;
        }
    }
}

impl MeshBounds for TriangleMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::unit_cube;
    use approx::assert_relative_eq;

    #[test]
    fn empty_mesh() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn triangle_accessor_checks_indices() {
        let mesh = TriangleMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 1, 9]],
        );
        assert!(mesh.triangle(0).is_some());
        assert!(mesh.triangle(1).is_none());
        assert!(mesh.triangle(2).is_none());
        assert_eq!(mesh.triangles().count(), 1);
    }

    #[test]
    fn cube_volume_and_area() {
        let cube = unit_cube();
        assert_relative_eq!(cube.signed_volume(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(cube.surface_area(), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn flipped_cube_has_negative_volume() {
        let mut cube = unit_cube();
        for face in &mut cube.faces {
            face.swap(1, 2);
        }
        assert_relative_eq!(cube.signed_volume(), -1.0, epsilon = 1e-10);
    }

    #[test]
    fn translate_moves_bounds() {
        let mut cube = unit_cube();
        cube.translate(Vector3::new(2.0, 0.0, -1.0));
        let bounds = cube.bounds();
        assert_relative_eq!(bounds.min.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.min.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_scales_volume() {
        let mut cube = unit_cube();
        cube.scale(2.0);
        assert_relative_eq!(cube.volume(), 8.0, epsilon = 1e-10);
    }
}
