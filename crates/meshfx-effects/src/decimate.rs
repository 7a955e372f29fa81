//! The quadric decimation effect.

use meshfx_decimate::{decimate_mesh, DecimateParams};
use meshfx_types::SurfaceMesh;
use tracing::debug;

use crate::effect::{is_positive, EffectOutput, MeshEffect};
use crate::error::EffectResult;
use crate::params::ParamSet;

/// Reduces a mesh's face count with quadric error metrics.
///
/// Backed by the in-workspace decimator. The host-facing parameter is a
/// reduction fraction (0.8 removes 80% of the faces); a reduction of zero
/// makes the effect an identity.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimateQuadricEffect;

impl MeshEffect for DecimateQuadricEffect {
    fn name(&self) -> &'static str {
        "Decimate (quadric)"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_float("TargetReduction", 0.8)
            .range(0.0, 1.0 - 1e-6)
            .label("Target reduction");
        params.declare_bool("PreserveVolume", false);
    }

    fn is_identity(&self, params: &ParamSet) -> bool {
        params
            .get_float("TargetReduction")
            .is_ok_and(|reduction| !is_positive(reduction))
    }

    fn cook(&self, input: &SurfaceMesh, params: &ParamSet) -> EffectResult<EffectOutput> {
        let reduction = params.get_float("TargetReduction")?;

        if !is_positive(reduction) {
            return Ok(EffectOutput::mesh_only(input.clone()));
        }

        let triangulated = input.triangulate();
        let ratio = (1.0 - reduction).clamp(0.0, 1.0);
        let result = decimate_mesh(&triangulated, &DecimateParams::with_target_ratio(ratio));

        debug!(
            original = result.original_triangles,
            remaining = result.final_triangles,
            "Cooked quadric decimation"
        );

        Ok(EffectOutput::mesh_only(SurfaceMesh::from(result.mesh)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meshfx_types::unit_sphere;

    fn declared_params() -> ParamSet {
        let mut params = ParamSet::new();
        DecimateQuadricEffect.declare_parameters(&mut params);
        params
    }

    #[test]
    fn test_parameter_declarations() {
        let params = declared_params();

        assert_relative_eq!(params.get_float("TargetReduction").unwrap(), 0.8);
        assert!(!params.get_bool("PreserveVolume").unwrap());
        assert_eq!(
            params.get("TargetReduction").unwrap().label,
            Some("Target reduction")
        );
    }

    #[test]
    fn test_identity_below_epsilon() {
        let mut params = declared_params();

        assert!(!DecimateQuadricEffect.is_identity(&params));

        params.set("TargetReduction", 0.0).unwrap();
        assert!(DecimateQuadricEffect.is_identity(&params));
    }

    #[test]
    fn test_identity_cook_clones_the_input() {
        let mut params = declared_params();
        params.set("TargetReduction", 0.0).unwrap();

        let sphere = SurfaceMesh::from(unit_sphere(2));
        let output = DecimateQuadricEffect.cook(&sphere, &params).unwrap();

        assert_eq!(output.mesh.face_count(), sphere.face_count());
    }

    #[test]
    fn test_cook_reduces_face_count() {
        let mut params = declared_params();
        params.set("TargetReduction", 0.5).unwrap();

        let sphere = SurfaceMesh::from(unit_sphere(2));
        let output = DecimateQuadricEffect.cook(&sphere, &params).unwrap();

        // 320 faces reduced by half, within the collapse granularity
        assert!(output.mesh.face_count() <= 162);
        assert!(output.mesh.face_count() >= 100);
    }
}
