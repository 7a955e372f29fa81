//! Sampling proxy construction.
//!
//! Rejection sampling evaluates one signed distance per candidate, and each
//! query scans every proxy face. Dense input is therefore simplified to a
//! bounded-size stand-in before the loop starts; coarse input is used as-is.

use meshfx_decimate::{decimate_mesh, DecimateParams};
use meshfx_types::{SurfaceMesh, TriangleMesh};
use tracing::{debug, info};

/// Polygonal face count at or below which input is never simplified.
pub const SIMPLIFY_FACE_THRESHOLD: usize = 100;

/// Base face count of a simplified proxy; the target grows with the square
/// root of the triangulated input size.
pub const PROXY_BASE_FACES: usize = 1000;

/// How the proxy relates to the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyStats {
    /// Polygonal face count of the input surface.
    pub input_faces: usize,
    /// Triangle count of the proxy actually used for distance queries.
    pub proxy_faces: usize,
    /// Whether decimation ran.
    pub decimated: bool,
}

/// Proxy face target for a triangulated input of `triangle_count` faces.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)] // sqrt of a count is non-negative and small
pub fn proxy_target_faces(triangle_count: usize) -> usize {
    PROXY_BASE_FACES + (triangle_count as f64).sqrt() as usize
}

/// Builds the triangle mesh the distance oracle will query.
///
/// Coarse or opt-out input is fan-triangulated and used unchanged; dense
/// input is triangulated and decimated toward [`proxy_target_faces`]. The
/// returned mesh is consulted for distances only; sampled points are never
/// snapped to it.
#[must_use]
pub fn build_proxy(surface: &SurfaceMesh, auto_simplify: bool) -> (TriangleMesh, ProxyStats) {
    let input_faces = surface.face_count();
    let triangulated = surface.triangulate();

    if !auto_simplify || input_faces <= SIMPLIFY_FACE_THRESHOLD {
        let stats = ProxyStats {
            input_faces,
            proxy_faces: triangulated.face_count(),
            decimated: false,
        };
        debug!(
            input_faces,
            proxy_faces = stats.proxy_faces,
            "Using triangulated input as sampling proxy"
        );
        return (triangulated, stats);
    }

    let triangle_count = triangulated.face_count();
    let target = proxy_target_faces(triangle_count);

    // Meshes just over the threshold triangulate to fewer faces than the
    // target; simplifying would coarsen nothing
    if target >= triangle_count {
        let stats = ProxyStats {
            input_faces,
            proxy_faces: triangle_count,
            decimated: false,
        };
        debug!(
            input_faces,
            proxy_faces = triangle_count,
            "Proxy target is no reduction; keeping triangulated input"
        );
        return (triangulated, stats);
    }

    let result = decimate_mesh(&triangulated, &DecimateParams::with_target_triangles(target));
    let stats = ProxyStats {
        input_faces,
        proxy_faces: result.mesh.face_count(),
        decimated: result.was_decimated(),
    };

    info!(
        input_faces,
        triangle_count,
        target,
        proxy_faces = stats.proxy_faces,
        "Simplified input to sampling proxy"
    );

    (result.mesh, stats)
}
