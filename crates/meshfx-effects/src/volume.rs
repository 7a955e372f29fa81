//! The volume sampling effect.

use meshfx_sample::{sample_volume, SampleParams, DISTANCE_ATTRIBUTE};
use meshfx_types::SurfaceMesh;
use tracing::warn;

use crate::effect::{EffectOutput, MeshEffect, ScalarAttribute};
use crate::error::EffectResult;
use crate::params::ParamSet;

/// Fills a closed surface's interior with points.
///
/// The one effect in the catalogue whose engine ships in this workspace:
/// cooking runs [`sample_volume`] and emits the accepted positions as a
/// point cloud with a `"distance"` scalar per point.
#[derive(Debug, Default, Clone, Copy)]
pub struct VolumeSamplingEffect;

impl MeshEffect for VolumeSamplingEffect {
    fn name(&self) -> &'static str {
        "Volume sampling"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_int("NumberOfPoints", 200)
            .range(1, 1_000_000)
            .label("Number of points");
        params
            .declare_bool("DistributeUniformly", true)
            .label("Distribute points uniformly");
        params
            .declare_bool("AutoSimplify", true)
            .label("Auto simplify input mesh");
    }

    fn cook(&self, input: &SurfaceMesh, params: &ParamSet) -> EffectResult<EffectOutput> {
        let number_of_points = params.get_int("NumberOfPoints")?;
        let distribute_uniformly = params.get_bool("DistributeUniformly")?;
        let auto_simplify = params.get_bool("AutoSimplify")?;

        let sample_params = SampleParams {
            // Out-of-range host values fold to zero and fail validation
            number_of_points: usize::try_from(number_of_points).unwrap_or(0),
            distribute_uniformly,
            auto_simplify,
            seed: None,
        };

        let sampling = sample_volume(input, &sample_params)?;

        if sampling.report.is_shortfall() {
            warn!(
                requested = sampling.report.requested,
                accepted = sampling.report.accepted,
                attempts = sampling.report.attempts,
                "Volume sampling fell short of the requested count"
            );
        }

        Ok(EffectOutput {
            mesh: SurfaceMesh::from_parts(sampling.cloud.positions, Vec::new()),
            attributes: vec![ScalarAttribute {
                name: DISTANCE_ATTRIBUTE,
                values: sampling.cloud.distances,
            }],
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::EffectError;
    use meshfx_sample::SampleError;
    use meshfx_types::{unit_cube, unit_sphere};

    fn declared_params() -> ParamSet {
        let mut params = ParamSet::new();
        VolumeSamplingEffect.declare_parameters(&mut params);
        params
    }

    #[test]
    fn test_parameter_declarations() {
        let params = declared_params();
        let names: Vec<_> = params.params().iter().map(|p| p.name).collect();

        assert_eq!(
            names,
            ["NumberOfPoints", "DistributeUniformly", "AutoSimplify"]
        );
        assert_eq!(params.get_int("NumberOfPoints").unwrap(), 200);
        assert!(params.get_bool("DistributeUniformly").unwrap());
        assert!(params.get_bool("AutoSimplify").unwrap());
        assert_eq!(
            params.get("NumberOfPoints").unwrap().label,
            Some("Number of points")
        );
    }

    #[test]
    fn test_cook_emits_points_and_distances() {
        let mut params = declared_params();
        params.set("NumberOfPoints", 64_i64).unwrap();

        let cube = SurfaceMesh::from(unit_cube());
        let output = VolumeSamplingEffect.cook(&cube, &params).unwrap();

        assert_eq!(output.mesh.positions.len(), 64);
        assert!(output.mesh.faces.is_empty());
        assert_eq!(output.attributes.len(), 1);
        assert_eq!(output.attributes[0].name, "distance");
        assert_eq!(output.attributes[0].values.len(), 64);
        assert!(output.attributes[0].values.iter().all(|d| *d < 0.0));
    }

    #[test]
    fn test_cook_on_sphere_respects_the_request() {
        let params = declared_params();
        let sphere = SurfaceMesh::from(unit_sphere(2));
        let output = VolumeSamplingEffect.cook(&sphere, &params).unwrap();

        assert_eq!(output.mesh.positions.len(), 200);
    }

    #[test]
    fn test_cook_maps_zero_count_to_sampling_error() {
        let mut params = declared_params();
        params.set("NumberOfPoints", 0_i64).unwrap();

        let cube = SurfaceMesh::from(unit_cube());
        let error = VolumeSamplingEffect.cook(&cube, &params).unwrap_err();

        assert_eq!(error, EffectError::Sample(SampleError::InvalidPointCount));
    }

    #[test]
    fn test_cook_never_reports_identity() {
        let params = declared_params();
        assert!(!VolumeSamplingEffect.is_identity(&params));
    }
}
