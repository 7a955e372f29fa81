//! Named, parameterized mesh effects with a constructor registry.
//!
//! An *effect* is a mesh operation a host application can look up by name,
//! configure through a typed [`ParamSet`], and run with
//! [`MeshEffect::cook`]. The registry maps stable effect names to
//! constructors; [`EffectRegistry::default`] carries the built-in
//! catalogue.
//!
//! Two catalogue entries ship with working engines: volume sampling
//! (backed by `meshfx-sample`) and quadric decimation (backed by
//! `meshfx-decimate`). The rest declare their full parameter surfaces so
//! hosts can render and persist settings, but cooking them reports that
//! their engine is not included.
//!
//! # Example
//!
//! ```
//! use meshfx_effects::{EffectRegistry, MeshEffect, ParamSet};
//! use meshfx_types::{unit_cube, SurfaceMesh};
//!
//! let registry = EffectRegistry::default();
//! let effect: Box<dyn MeshEffect> = registry.create("Volume sampling").unwrap();
//!
//! let mut params = ParamSet::new();
//! effect.declare_parameters(&mut params);
//! params.set("NumberOfPoints", 64_i64)?;
//!
//! let cube = SurfaceMesh::from(unit_cube());
//! let output = effect.cook(&cube, &params)?;
//!
//! assert_eq!(output.mesh.positions.len(), 64);
//! assert_eq!(output.attributes[0].name, "distance");
//! # Ok::<(), meshfx_effects::EffectError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod catalog;
mod decimate;
mod effect;
mod error;
mod params;
mod registry;
mod volume;

pub use decimate::DecimateQuadricEffect;
pub use effect::{is_positive, EffectOutput, MeshEffect, ScalarAttribute};
pub use error::{EffectError, EffectResult};
pub use params::{Param, ParamBuilder, ParamSet, ParamValue};
pub use registry::{EffectConstructor, EffectRegistry};
pub use volume::VolumeSamplingEffect;
