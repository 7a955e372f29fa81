//! Mesh simplification using quadric error metrics.
//!
//! This crate reduces the triangle count of a mesh by iteratively collapsing
//! edges while minimizing geometric error, following the Quadric Error
//! Metrics (QEM) approach.
//!
//! # Features
//!
//! - **Edge collapse**: always the cheapest remaining edge first
//! - **Quadric error metrics**: collapse cost is squared distance to the
//!   merged vertex's supporting planes
//! - **Boundary preservation**: boundary edges of open meshes are kept (or
//!   penalized) so rims do not cave in
//! - **Target control**: absolute triangle count or keep-ratio
//!
//! # Example
//!
//! ```
//! use meshfx_types::unit_sphere;
//! use meshfx_decimate::{decimate_mesh, DecimateParams};
//!
//! let sphere = unit_sphere(3);
//! let result = decimate_mesh(&sphere, &DecimateParams::with_target_triangles(300));
//! assert!(result.final_triangles <= 302);
//! println!("{result}");
//! ```
//!
//! # Algorithm
//!
//! 1. For each vertex, accumulate a quadric for the planes of its faces
//! 2. For each edge, find the position minimizing the combined quadric and
//!    queue the collapse at that cost
//! 3. Repeatedly apply the cheapest valid collapse, re-queuing affected
//!    edges, until the live face count reaches the target
//! 4. Compact the surviving vertices and faces into a fresh mesh

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod decimate;
mod params;
mod quadric;
mod result;

// Re-export main types and functions
pub use decimate::decimate_mesh;
pub use params::DecimateParams;
pub use result::DecimationResult;
