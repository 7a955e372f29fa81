//! Traits implemented by the mesh types.

use nalgebra::Point3;

use crate::bounds::Aabb;

/// Bounds extraction for mesh-like types.
///
/// One pass over the positions, tracking the minimum and maximum per axis.
/// Empty inputs yield [`Aabb::empty`]; fully coplanar inputs yield a
/// degenerate (zero-volume) box, which is valid output rather than an
/// error.
pub trait MeshBounds {
    /// Returns the axis-aligned bounding box of all positions.
    fn bounds(&self) -> Aabb;

    /// Returns the center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
