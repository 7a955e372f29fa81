//! Quadric error metric.
//!
//! A quadric accumulates squared distances to a set of planes. During edge
//! collapse it tells us both the best position for the merged vertex and
//! the geometric error that collapse would introduce.

use std::ops::AddAssign;

use nalgebra::{Matrix3, Point3, Vector3};

/// Error quadric for one vertex: `q(v) = v^T A v + 2 b.v + c` over the
/// planes accumulated so far.
///
/// Stored in block form (`A` symmetric 3x3, `b` 3-vector, `c` scalar)
/// rather than as a 4x4 homogeneous matrix; the blocks are what the solve
/// and evaluation actually use.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Quadric {
    a: Matrix3<f64>,
    b: Vector3<f64>,
    c: f64,
}

impl Quadric {
    /// Quadric of a single plane `n.x + d = 0` with unit normal `n`.
    pub fn from_plane(normal: Vector3<f64>, d: f64) -> Self {
        Self {
            a: normal * normal.transpose(),
            b: normal * d,
            c: d * d,
        }
    }

    /// Sum of squared plane distances at `point`.
    pub fn evaluate(&self, point: Point3<f64>) -> f64 {
        let v = point.coords;
        (self.a * v).dot(&v) + 2.0 * self.b.dot(&v) + self.c
    }

    /// Position minimizing the error, or `None` when the planes do not pin
    /// down a unique point (near-singular system, e.g. all planes parallel
    /// or sharing a line).
    pub fn optimal_point(&self) -> Option<Point3<f64>> {
        if self.a.determinant().abs() < 1e-10 {
            return None;
        }
        self.a.try_inverse().map(|inv| Point3::from(inv * -self.b))
    }
}

impl AddAssign for Quadric {
    fn add_assign(&mut self, rhs: Self) {
        self.a += rhs.a;
        self.b += rhs.b;
        self.c += rhs.c;
    }
}
