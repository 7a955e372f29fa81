//! Monte-Carlo rejection sampling of a surface's interior volume.

use meshfx_sdf::DistanceOracle;
use meshfx_types::{MeshBounds, Point3, SurfaceMesh};
use tracing::{debug, info};

use crate::candidate::CandidateSource;
use crate::error::{SampleError, SampleResult};
use crate::params::{SampleParams, MAX_POINT_COUNT};
use crate::proxy::build_proxy;
use crate::result::{SampleCloud, SampleReport, VolumeSampling};

/// Attempt budget per requested point.
pub const ATTEMPT_FACTOR: usize = 10;

/// Fills the volume enclosed by `surface` with up to
/// `params.number_of_points` interior points.
///
/// Candidates are drawn inside the surface's bounding box (axis order x, y,
/// z) and kept when their signed distance to the sampling proxy is strictly
/// negative; points on the surface are rejected. The attempt budget is
/// [`ATTEMPT_FACTOR`] times the requested count, so thin or degenerate
/// volumes terminate with a shortfall instead of spinning. The report
/// carries the actual counts either way; deciding whether a shortfall is
/// worth surfacing is the caller's call.
///
/// A surface with no faces (or none with three corners) yields an empty
/// result with zero attempts.
///
/// # Errors
///
/// Returns [`SampleError::InvalidPointCount`] when
/// `params.number_of_points` is zero.
pub fn sample_volume(
    surface: &SurfaceMesh,
    params: &SampleParams,
) -> SampleResult<VolumeSampling> {
    if params.number_of_points == 0 {
        return Err(SampleError::InvalidPointCount);
    }

    let mut requested = params.number_of_points;
    if requested > MAX_POINT_COUNT {
        debug!(
            requested,
            clamped = MAX_POINT_COUNT,
            "Clamping requested point count"
        );
        requested = MAX_POINT_COUNT;
    }

    // No faces means no enclosed volume: report the full shortfall without
    // building an oracle
    if surface.face_count() == 0 {
        info!(requested, "Surface has no faces; returning empty sampling");
        return Ok(empty_sampling(requested));
    }

    info!(
        requested,
        faces = surface.face_count(),
        uniform = params.distribute_uniformly,
        "Starting volume sampling"
    );

    let (proxy, proxy_stats) = build_proxy(surface, params.auto_simplify);

    // The only construction failure is a proxy with no triangles, which
    // happens when every input face had fewer than three corners
    let Ok(oracle) = DistanceOracle::new(proxy) else {
        info!(
            requested,
            "Surface triangulates to no faces; returning empty sampling"
        );
        return Ok(empty_sampling(requested));
    };

    // Candidate box comes from the input mesh; the proxy is only an
    // approximation for distance queries
    let bounds = surface.bounds();
    let mut source = CandidateSource::for_params(params);

    let max_attempts = ATTEMPT_FACTOR * requested;
    let mut cloud = SampleCloud::default();
    let mut attempts = 0;

    while cloud.len() < requested && attempts < max_attempts {
        let x = source.draw(0, bounds.min.x, bounds.max.x);
        let y = source.draw(1, bounds.min.y, bounds.max.y);
        let z = source.draw(2, bounds.min.z, bounds.max.z);
        attempts += 1;

        let candidate = Point3::new(x, y, z);
        let distance = oracle.evaluate(candidate);
        if distance < 0.0 {
            cloud.positions.push(candidate);
            cloud.distances.push(distance);
        }
    }

    let report = SampleReport {
        requested,
        accepted: cloud.len(),
        attempts,
    };

    info!(
        accepted = report.accepted,
        requested,
        attempts,
        proxy_faces = proxy_stats.proxy_faces,
        "Volume sampling complete"
    );

    Ok(VolumeSampling { cloud, report })
}

const fn empty_sampling(requested: usize) -> VolumeSampling {
    VolumeSampling {
        cloud: SampleCloud {
            positions: Vec::new(),
            distances: Vec::new(),
        },
        report: SampleReport {
            requested,
            accepted: 0,
            attempts: 0,
        },
    }
}
