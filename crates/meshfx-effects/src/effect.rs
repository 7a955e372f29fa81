//! The mesh effect abstraction.

use meshfx_types::SurfaceMesh;

use crate::error::EffectResult;
use crate::params::ParamSet;

/// Whether a host-supplied factor counts as positive.
///
/// Identity checks treat anything below machine epsilon as zero, so a
/// slider parked at 0.0 (or a hair above) disables the effect.
#[must_use]
pub const fn is_positive(value: f64) -> bool {
    value >= f64::EPSILON
}

/// A scalar attribute attached to output points.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarAttribute {
    /// Attribute name, for example `"distance"`.
    pub name: &'static str,
    /// One value per output point.
    pub values: Vec<f64>,
}

/// What cooking an effect produces: a surface (possibly a bare point set)
/// plus any per-point scalar attributes.
#[derive(Debug, Clone, Default)]
pub struct EffectOutput {
    /// The produced surface; point-cloud outputs carry no faces.
    pub mesh: SurfaceMesh,
    /// Per-point scalars, index-aligned with `mesh.positions`.
    pub attributes: Vec<ScalarAttribute>,
}

impl EffectOutput {
    /// Wraps a mesh with no attributes.
    #[must_use]
    pub const fn mesh_only(mesh: SurfaceMesh) -> Self {
        Self {
            mesh,
            attributes: Vec::new(),
        }
    }
}

/// A named, parameterized mesh operation.
///
/// Implementations declare their parameter surface up front; the host owns
/// the [`ParamSet`], edits values, and hands it back when cooking. Effects
/// whose engines are not shipped still declare parameters (so hosts can
/// render them) and fail at cook time.
pub trait MeshEffect {
    /// Stable name used for registry lookup and display.
    fn name(&self) -> &'static str;

    /// Declares the effect's parameters — defaults, ranges, labels — in
    /// presentation order.
    fn declare_parameters(&self, params: &mut ParamSet);

    /// `true` when cooking with these parameter values would return the
    /// input unchanged, letting the host skip the cook.
    fn is_identity(&self, _params: &ParamSet) -> bool {
        false
    }

    /// Runs the effect on `input`.
    ///
    /// # Errors
    ///
    /// Effect-specific; declaration-only effects return
    /// [`EffectError::BackendRequired`](crate::EffectError::BackendRequired).
    fn cook(&self, input: &SurfaceMesh, params: &ParamSet) -> EffectResult<EffectOutput>;
}
