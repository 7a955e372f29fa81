//! Geometric queries used by the distance oracle.

use meshfx_types::TriangleMesh;
use nalgebra::{Point3, Vector3};

/// Computes the closest point on a triangle to a query point.
///
/// Implements the Voronoi-region case analysis from "Real-Time Collision
/// Detection" by Christer Ericson: the query point is classified against
/// the vertex, edge and face regions of the triangle and projected onto
/// whichever feature is nearest.
#[must_use]
pub fn closest_point_on_triangle(
    point: Point3<f64>,
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
) -> Point3<f64> {
    let ab = v1 - v0;
    let ac = v2 - v0;
    let ap = point - v0;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);

    // Vertex region outside v0
    if d1 <= 0.0 && d2 <= 0.0 {
        return v0;
    }

    let bp = point - v1;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);

    // Vertex region outside v1
    if d3 >= 0.0 && d4 <= d3 {
        return v1;
    }

    // Edge region v0-v1
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let t = d1 / (d1 - d3);
        return v0 + ab * t;
    }

    let cp = point - v2;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);

    // Vertex region outside v2
    if d6 >= 0.0 && d5 <= d6 {
        return v2;
    }

    // Edge region v0-v2
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let t = d2 / (d2 - d6);
        return v0 + ac * t;
    }

    // Edge region v1-v2
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let t = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return v1 + (v2 - v1) * t;
    }

    // Interior of the face
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    v0 + ab * v + ac * w
}

/// Intersects a ray with a triangle (Möller–Trumbore).
///
/// Returns `Some(t)` with the ray parameter at the hit, or `None` when the
/// ray misses or runs parallel to the triangle plane. The direction does
/// not need to be normalized; `t` is in units of its length.
#[must_use]
pub fn ray_triangle_intersect(
    ray_origin: Point3<f64>,
    ray_dir: Vector3<f64>,
    v0: Point3<f64>,
    v1: Point3<f64>,
    v2: Point3<f64>,
) -> Option<f64> {
    const EPSILON: f64 = 1e-10;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray_dir.cross(&edge2);
    let det = edge1.dot(&h);

    // Parallel to the triangle plane
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray_origin - v0;
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * ray_dir.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Tests whether a point is inside a closed mesh by ray parity.
///
/// Casts a ray in +X and counts crossings; an odd count means inside.
/// Meaningful only for watertight meshes.
#[must_use]
pub fn point_in_mesh(point: Point3<f64>, mesh: &TriangleMesh) -> bool {
    let ray_dir = Vector3::new(1.0, 0.0, 0.0);
    let mut crossings = 0;

    for triangle in mesh.triangles() {
        if ray_triangle_intersect(point, ray_dir, triangle.v0, triangle.v1, triangle.v2).is_some() {
            crossings += 1;
        }
    }

    crossings % 2 == 1
}
