//! Signed distance queries against closed triangle meshes.
//!
//! The central type is [`DistanceOracle`]: build it once per mesh, then ask
//! it for the signed distance at arbitrary points. The magnitude is the
//! distance to the nearest point on any face; the sign tells inside from
//! outside. **Negative means inside** — volumetric consumers accept a
//! candidate point exactly when its distance is strictly negative.
//!
//! Each query scans every face, so the per-query cost is linear in the face
//! count. Callers that query many points against a large mesh should build
//! the oracle over a simplified stand-in of the surface.
//!
//! # Example
//!
//! ```
//! use meshfx_sdf::DistanceOracle;
//! use meshfx_types::{unit_cube, Point3};
//!
//! let oracle = DistanceOracle::new(unit_cube()).unwrap();
//!
//! // Inside points are negative, outside points positive.
//! assert!(oracle.evaluate(Point3::new(0.5, 0.5, 0.5)) < 0.0);
//! assert!(oracle.evaluate(Point3::new(2.0, 0.5, 0.5)) > 0.0);
//! ```

mod error;
mod oracle;
mod query;

pub use error::{OracleError, OracleResult};
pub use oracle::DistanceOracle;
pub use query::{closest_point_on_triangle, point_in_mesh, ray_triangle_intersect};
