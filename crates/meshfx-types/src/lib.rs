//! Core geometry types shared across the meshfx workspace.
//!
//! This crate defines the vocabulary every other meshfx crate speaks:
//!
//! - [`SurfaceMesh`]: polygonal mesh as exchanged with a host application
//! - [`TriangleMesh`]: indexed triangle mesh used by the geometry kernels
//! - [`Aabb`]: axis-aligned bounding box
//! - [`Triangle`]: triangle primitive with basic measures
//! - [`MeshBounds`]: bounds queries implemented by both mesh types
//!
//! The procedural constructors [`unit_cube`] and [`unit_sphere`] provide
//! small closed meshes for tests, benches and examples.
//!
//! # Foundation Crate
//!
//! This is a foundation crate: no engine, no I/O, no GUI — only `nalgebra`
//! (and optionally `serde`). That keeps it usable from:
//! - CLI tools
//! - Servers
//! - WASM modules
//! - Host-application plugins
//!
//! # Units
//!
//! All coordinates are `f64` and unit-agnostic. Callers pick a unit system
//! and must use it consistently across an operation.
//!
//! # Coordinate System
//!
//! Right-handed, Z-up. Faces are wound counter-clockwise when viewed from
//! outside, so face normals of a closed mesh point outward and its signed
//! volume is positive.
//!
//! # Example
//!
//! ```
//! use meshfx_types::{MeshBounds, SurfaceMesh};
//!
//! let mut mesh = SurfaceMesh::new();
//! mesh.positions.push([0.0, 0.0, 0.0].into());
//! mesh.positions.push([1.0, 0.0, 0.0].into());
//! mesh.positions.push([1.0, 1.0, 0.0].into());
//! mesh.positions.push([0.0, 1.0, 0.0].into());
//! mesh.push_face(vec![0, 1, 2, 3]);
//!
//! let tri = mesh.triangulate();
//! assert_eq!(tri.face_count(), 2);
//! assert!((mesh.bounds().size().x - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod shapes;
mod surface;
mod traits;
mod triangle;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
pub use shapes::{unit_cube, unit_sphere};
pub use surface::SurfaceMesh;
pub use traits::MeshBounds;
pub use triangle::Triangle;

// Re-export core types
pub use nalgebra::{Point3, Vector3};
