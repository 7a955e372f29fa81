//! Procedural closed test meshes.

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::mesh::TriangleMesh;

/// Builds the axis-aligned unit cube `[0, 1]^3` as 12 triangles.
///
/// Faces are wound counter-clockwise seen from outside, so the signed
/// volume is `+1`.
///
/// # Example
///
/// ```
/// use meshfx_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(8, 12);

    mesh.vertices.push(Point3::new(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Point3::new(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Point3::new(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Point3::new(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Point3::new(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Point3::new(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Point3::new(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Point3::new(0.0, 1.0, 1.0)); // 7

    // Bottom (z = 0), normal -Z
    mesh.faces.push([0, 2, 1]);
    mesh.faces.push([0, 3, 2]);
    // Top (z = 1), normal +Z
    mesh.faces.push([4, 5, 6]);
    mesh.faces.push([4, 6, 7]);
    // Front (y = 0), normal -Y
    mesh.faces.push([0, 1, 5]);
    mesh.faces.push([0, 5, 4]);
    // Back (y = 1), normal +Y
    mesh.faces.push([3, 7, 6]);
    mesh.faces.push([3, 6, 2]);
    // Left (x = 0), normal -X
    mesh.faces.push([0, 4, 7]);
    mesh.faces.push([0, 7, 3]);
    // Right (x = 1), normal +X
    mesh.faces.push([1, 2, 6]);
    mesh.faces.push([1, 6, 5]);

    mesh
}

/// Builds an icosphere of radius 1 centered at the origin.
///
/// `subdivisions = 0` gives the 20-face icosahedron; every level splits
/// each triangle in four and re-projects new vertices onto the sphere, so
/// the face count is `20 * 4^subdivisions`. Winding is outward.
///
/// # Example
///
/// ```
/// use meshfx_types::unit_sphere;
///
/// let sphere = unit_sphere(2);
/// assert_eq!(sphere.face_count(), 320);
/// ```
#[must_use]
pub fn unit_sphere(subdivisions: u32) -> TriangleMesh {
    let phi = f64::midpoint(1.0, 5.0_f64.sqrt());
    let a = 1.0;
    let b = 1.0 / phi;

    let corners: [[f64; 3]; 12] = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    let faces: [[u32; 3]; 20] = [
        [0, 2, 1],
        [3, 1, 2],
        [3, 5, 4],
        [3, 4, 8],
        [0, 7, 6],
        [0, 6, 9],
        [4, 11, 10],
        [6, 10, 11],
        [2, 9, 5],
        [11, 5, 9],
        [1, 8, 7],
        [10, 7, 8],
        [3, 2, 5],
        [3, 8, 1],
        [0, 9, 2],
        [0, 1, 7],
        [6, 11, 9],
        [6, 7, 10],
        [4, 5, 11],
        [4, 10, 8],
    ];

    let mut mesh = TriangleMesh::with_capacity(12, 20);
    for corner in &corners {
        let dir = Vector3::new(corner[0], corner[1], corner[2]).normalize();
        mesh.vertices.push(Point3::from(dir));
    }
    mesh.faces.extend_from_slice(&faces);

    for _ in 0..subdivisions {
        mesh = subdivide_onto_sphere(&mesh);
    }

    mesh
}

/// Splits every triangle in four, caching edge midpoints so shared edges
/// produce a single shared vertex, and re-projects midpoints onto the unit
/// sphere.
fn subdivide_onto_sphere(mesh: &TriangleMesh) -> TriangleMesh {
    let mut out = TriangleMesh::with_capacity(mesh.vertex_count(), mesh.face_count() * 4);
    out.vertices = mesh.vertices.clone();

    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for face in &mesh.faces {
        let [v0, v1, v2] = *face;
        let m01 = sphere_midpoint(v0, v1, &mut out.vertices, &mut midpoints);
        let m12 = sphere_midpoint(v1, v2, &mut out.vertices, &mut midpoints);
        let m20 = sphere_midpoint(v2, v0, &mut out.vertices, &mut midpoints);

        out.faces.push([v0, m01, m20]);
        out.faces.push([v1, m12, m01]);
        out.faces.push([v2, m20, m12]);
        out.faces.push([m01, m12, m20]);
    }

    out
}

fn sphere_midpoint(
    i: u32,
    j: u32,
    vertices: &mut Vec<Point3<f64>>,
    cache: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if i < j { (i, j) } else { (j, i) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }

    let mid = nalgebra::center(&vertices[i as usize], &vertices[j as usize]);
    #[allow(clippy::cast_possible_truncation)] // Vertex counts stay far below u32::MAX
    let index = vertices.len() as u32;
    vertices.push(Point3::from(mid.coords.normalize()));
    cache.insert(key, index);
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MeshBounds;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn cube_spans_the_unit_box() {
        let bounds = unit_cube().bounds();
        assert_relative_eq!(bounds.min.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(bounds.max.z, 1.0, epsilon = 1e-15);
        assert_relative_eq!(bounds.volume(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn cube_winding_is_outward() {
        assert!(unit_cube().signed_volume() > 0.0);
    }

    #[test]
    fn sphere_face_counts_per_level() {
        assert_eq!(unit_sphere(0).face_count(), 20);
        assert_eq!(unit_sphere(1).face_count(), 80);
        assert_eq!(unit_sphere(3).face_count(), 1280);
    }

    #[test]
    fn sphere_vertices_lie_on_the_sphere() {
        let sphere = unit_sphere(2);
        for v in &sphere.vertices {
            assert_relative_eq!(v.coords.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn sphere_winding_is_outward() {
        let volume = unit_sphere(3).signed_volume();
        // The inscribed polyhedron slightly underestimates the ball.
        let ball = 4.0 / 3.0 * PI;
        assert!(volume > 0.0);
        assert!(volume < ball);
        assert_relative_eq!(volume, ball, max_relative = 0.02);
    }

    #[test]
    fn sphere_subdivision_shares_edge_midpoints() {
        // Closed 2-manifold: V - E + F = 2 and E = 3F / 2.
        let sphere = unit_sphere(2);
        let f = sphere.face_count();
        let e = 3 * f / 2;
        assert_eq!(sphere.vertex_count() + f, e + 2);
    }
}
