//! Volumetric point sampling for closed surface meshes.
//!
//! Fills the interior of a closed surface with up to a requested number of
//! points by Monte-Carlo rejection against a signed-distance oracle:
//! candidates are drawn inside the surface's bounding box and kept when
//! their signed distance is strictly negative. Candidates come from a
//! deterministic Weyl sequence by default, or from a seedable pseudorandom
//! generator.
//!
//! Dense input is first simplified to a sampling proxy so each candidate's
//! distance query stays cheap. The proxy is consulted for distances only;
//! accepted points are never snapped to it.
//!
//! # Example
//!
//! ```
//! use meshfx_sample::{sample_volume, SampleParams};
//! use meshfx_types::{unit_sphere, SurfaceMesh};
//!
//! let sphere = SurfaceMesh::from(unit_sphere(2));
//! let params = SampleParams::with_number_of_points(500);
//! let sampling = sample_volume(&sphere, &params)?;
//!
//! assert!(sampling.cloud.len() <= 500);
//! for distance in &sampling.cloud.distances {
//!     assert!(*distance < 0.0);
//! }
//! # Ok::<(), meshfx_sample::SampleError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod candidate;
mod error;
mod params;
mod proxy;
mod result;
mod sampler;
mod weyl;

pub use error::{SampleError, SampleResult};
pub use params::{SampleParams, MAX_POINT_COUNT};
pub use proxy::{
    build_proxy, proxy_target_faces, ProxyStats, PROXY_BASE_FACES, SIMPLIFY_FACE_THRESHOLD,
};
pub use result::{SampleCloud, SampleReport, VolumeSampling, DISTANCE_ATTRIBUTE};
pub use sampler::{sample_volume, ATTEMPT_FACTOR};
pub use weyl::AdditiveRecurrence;
