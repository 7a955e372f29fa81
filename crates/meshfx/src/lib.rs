//! Mesh effects toolkit: volumetric point sampling, decimation, and a
//! name-keyed effect registry.
//!
//! This umbrella crate re-exports the `meshfx-*` workspace crates behind a
//! single API. The flagship operation fills the interior of a closed surface
//! with points ([`sample::sample_volume`]); the effect layer wraps it, and
//! the rest of the catalogue, for hosts that drive effects by name.
//!
//! # Quick Start
//!
//! ```
//! use meshfx::prelude::*;
//!
//! // A closed surface to fill.
//! let sphere = SurfaceMesh::from(unit_sphere(2));
//!
//! // Request up to 500 interior points.
//! let params = SampleParams::with_number_of_points(500);
//! let sampling = sample_volume(&sphere, &params).unwrap();
//!
//! assert_eq!(sampling.cloud.len(), 500);
//! assert!(!sampling.report.is_shortfall());
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Core data structures: `SurfaceMesh`, `TriangleMesh`, `Aabb`, `Triangle`
//!
//! ## Engines
//! - [`sdf`] - Signed distance queries against triangle meshes
//! - [`decimate`] - Mesh simplification via quadric error metrics
//! - [`sample`] - Volumetric point sampling by rejection against a signed
//!   distance oracle
//!
//! ## Host Integration
//! - [`effects`] - Named, parameterized mesh effects and the constructor
//!   registry hosts instantiate them from
//!
//! # Feature Flags
//!
//! - `serde` - Serialization derives on the foundation types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/meshfx/0.3.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `SurfaceMesh`, `TriangleMesh`, `Aabb`, `Triangle`.
pub use meshfx_types as types;

/// Signed distance queries against triangle meshes.
pub use meshfx_sdf as sdf;

/// Mesh simplification via quadric error metrics.
pub use meshfx_decimate as decimate;

/// Volumetric point sampling.
pub use meshfx_sample as sample;

/// Named, parameterized mesh effects and the constructor registry.
pub use meshfx_effects as effects;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for working with the effect toolkit.
///
/// # Usage
///
/// ```
/// use meshfx::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use meshfx_types::{
        unit_cube, unit_sphere, Aabb, MeshBounds, Point3, SurfaceMesh, Triangle, TriangleMesh,
        Vector3,
    };

    // Distance queries
    pub use meshfx_sdf::DistanceOracle;

    // Decimation
    pub use meshfx_decimate::{decimate_mesh, DecimateParams};

    // Sampling (main use case)
    pub use meshfx_sample::{sample_volume, SampleParams, VolumeSampling};

    // Effects
    pub use meshfx_effects::{EffectRegistry, MeshEffect, ParamSet};
}

// =============================================================================
// Tests
// =============================================================================
