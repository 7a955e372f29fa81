//! API Regression Tests for the meshfx Crate Family
//!
//! These tests pin the public API surface of the workspace so accidental
//! breaking changes are caught at compile time. They are organized in 5
//! tiers of increasing complexity:
//!
//! - Tier 1: Foundation (types, primitives, bounds)
//! - Tier 2: Distance queries (signed distance oracle)
//! - Tier 3: Decimation (quadric edge collapse)
//! - Tier 4: Volume sampling (candidate streams, reports)
//! - Tier 5: Effects (registry, parameter sets, cooking)
//!
//! If any of these tests fail after API changes, it indicates a breaking
//! change that needs documentation in CHANGELOG.md and a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use meshfx::{decimate, effects, sample, sdf, types};

// =============================================================================
// TIER 1: Foundation - Types, Primitives, Bounds
// =============================================================================

mod tier1_foundation {
    use super::*;
    use meshfx::types::MeshBounds;

    #[test]
    fn surface_mesh_construction() {
        let surface = types::SurfaceMesh::new();
        assert!(surface.is_empty());

        let surface = types::SurfaceMesh::from_parts(
            vec![
                types::Point3::new(0.0, 0.0, 0.0),
                types::Point3::new(1.0, 0.0, 0.0),
                types::Point3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2]],
        );
        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.face_count(), 1);
        assert!(surface.is_triangulated());
    }

    #[test]
    fn fan_triangulation() {
        let quad = types::SurfaceMesh::from_parts(
            vec![
                types::Point3::new(0.0, 0.0, 0.0),
                types::Point3::new(1.0, 0.0, 0.0),
                types::Point3::new(1.0, 1.0, 0.0),
                types::Point3::new(0.0, 1.0, 0.0),
            ],
            vec![vec![0, 1, 2, 3]],
        );
        let triangulated = quad.triangulate();
        assert_eq!(triangulated.face_count(), 2);
        assert_eq!(triangulated.faces[0], [0, 1, 2]);
        assert_eq!(triangulated.faces[1], [0, 2, 3]);
    }

    #[test]
    fn primitive_unit_cube() {
        let cube = types::unit_cube();
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.face_count(), 12);
        assert!((cube.signed_volume() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn primitive_unit_sphere() {
        // 20 * 4^s faces per subdivision level
        assert_eq!(types::unit_sphere(0).face_count(), 20);
        assert_eq!(types::unit_sphere(2).face_count(), 320);
    }

    #[test]
    fn mesh_bounds_calculation() {
        let cube = types::unit_cube();
        let bounds = cube.bounds();
        assert!((bounds.min.x - 0.0).abs() < f64::EPSILON);
        assert!((bounds.max.x - 1.0).abs() < f64::EPSILON);
        assert!(!bounds.is_empty());
        assert!(bounds.contains(&types::Point3::new(0.5, 0.5, 0.5)));

        let empty = types::Aabb::empty();
        assert!(empty.is_empty());
    }
}

// =============================================================================
// TIER 2: Distance Queries - Signed Distance Oracle
// =============================================================================

mod tier2_distance {
    use super::*;

    #[test]
    fn oracle_rejects_empty_mesh() {
        let result = sdf::DistanceOracle::new(types::TriangleMesh::new());
        assert!(result.is_err());
    }

    #[test]
    fn oracle_sign_convention() {
        let oracle = sdf::DistanceOracle::new(types::unit_cube()).unwrap();
        assert!(oracle.evaluate(types::Point3::new(0.5, 0.5, 0.5)) < 0.0);
        assert!(oracle.evaluate(types::Point3::new(2.0, 0.5, 0.5)) > 0.0);
        assert!(oracle.is_inside(types::Point3::new(0.5, 0.5, 0.5)));
        assert!(!oracle.is_inside(types::Point3::new(2.0, 0.5, 0.5)));
    }
}

// =============================================================================
// TIER 3: Decimation - Quadric Edge Collapse
// =============================================================================

mod tier3_decimation {
    use super::*;

    #[test]
    fn decimate_params_builder_pattern() {
        let params = decimate::DecimateParams::default();
        assert!(params.target_triangles.is_none());
        assert!(params.preserve_boundary);

        let params = decimate::DecimateParams::with_target_triangles(100)
            .with_preserve_boundary(false)
            .with_boundary_penalty(5.0);
        assert_eq!(params.target_triangles, Some(100));
        assert!(!params.preserve_boundary);
    }

    #[test]
    fn decimate_sphere_to_target() {
        let sphere = types::unit_sphere(3);
        let params = decimate::DecimateParams::with_target_triangles(400);
        let result = decimate::decimate_mesh(&sphere, &params);

        assert_eq!(result.original_triangles, 1280);
        assert!(result.final_triangles <= 402);
        assert!(result.was_decimated());
        assert!(result.reduction_ratio() > 0.5);

        let display = result.to_string();
        assert!(display.contains("triangles"));
    }
}

// =============================================================================
// TIER 4: Volume Sampling - Candidate Streams and Reports
// =============================================================================

mod tier4_sampling {
    use super::*;

    #[test]
    fn sample_params_builder_pattern() {
        let params = sample::SampleParams::default();
        assert_eq!(params.number_of_points, 200);
        assert!(params.distribute_uniformly);
        assert!(params.auto_simplify);
        assert!(params.seed.is_none());

        let params = sample::SampleParams::with_number_of_points(50)
            .with_distribute_uniformly(false)
            .with_seed(7);
        assert_eq!(params.number_of_points, 50);
        assert_eq!(params.seed, Some(7));
    }

    #[test]
    fn volume_sampling_end_to_end() {
        let surface = types::SurfaceMesh::from(types::unit_sphere(2));
        let params = sample::SampleParams::with_number_of_points(300);
        let sampling = sample::sample_volume(&surface, &params).unwrap();

        assert_eq!(sampling.cloud.positions.len(), sampling.cloud.distances.len());
        assert_eq!(sampling.cloud.len(), sampling.report.accepted);
        assert_eq!(sampling.report.requested, 300);
        assert!(sampling.report.attempts <= 300 * sample::ATTEMPT_FACTOR);
    }

    #[test]
    fn sampling_constants() {
        assert_eq!(sample::MAX_POINT_COUNT, 1_000_000);
        assert_eq!(sample::ATTEMPT_FACTOR, 10);
        assert_eq!(sample::DISTANCE_ATTRIBUTE, "distance");
        assert_eq!(sample::SIMPLIFY_FACE_THRESHOLD, 100);
        assert_eq!(sample::PROXY_BASE_FACES, 1000);
    }

    #[test]
    fn weyl_sequence_is_deterministic() {
        let mut a = sample::AdditiveRecurrence::new();
        let mut b = sample::AdditiveRecurrence::new();
        a.advance();
        b.advance();
        assert_eq!(a.range_value(0, 0.0, 1.0), b.range_value(0, 0.0, 1.0));
        assert_eq!(a.step(), 1);
    }
}

// =============================================================================
// TIER 5: Effects - Registry, Parameter Sets, Cooking
// =============================================================================

mod tier5_effects {
    use super::*;
    use meshfx::effects::MeshEffect;

    #[test]
    fn registry_stocks_the_catalogue() {
        let registry = effects::EffectRegistry::default();
        assert_eq!(registry.len(), 13);
        assert!(registry.create("Volume sampling").is_some());
        assert!(registry.create("Decimate (quadric)").is_some());
        assert!(registry.create("No such effect").is_none());
    }

    #[test]
    fn param_set_round_trip() {
        let mut params = effects::ParamSet::new();
        params
            .declare_int("NumberOfPoints", 200)
            .range(1, 1_000_000)
            .label("Number of points");
        params.set("NumberOfPoints", 64_i64).unwrap();
        assert_eq!(params.get_int("NumberOfPoints").unwrap(), 64);

        let err = params.set("NumberOfPoints", 0.5_f64).unwrap_err();
        assert!(matches!(err, effects::EffectError::ParamKind { .. }));
    }

    #[test]
    fn volume_effect_cook() {
        let registry = effects::EffectRegistry::default();
        let effect: Box<dyn MeshEffect> = registry.create("Volume sampling").unwrap();

        let mut params = effects::ParamSet::new();
        effect.declare_parameters(&mut params);
        params.set("NumberOfPoints", 32_i64).unwrap();

        let cube = types::SurfaceMesh::from(types::unit_cube());
        let output = effect.cook(&cube, &params).unwrap();
        assert_eq!(output.mesh.positions.len(), 32);
        assert_eq!(output.attributes[0].name, sample::DISTANCE_ATTRIBUTE);
    }

    #[test]
    fn stub_effects_refuse_to_cook() {
        let registry = effects::EffectRegistry::default();
        let effect = registry.create("Tube filter").unwrap();

        let mut params = effects::ParamSet::new();
        effect.declare_parameters(&mut params);

        let cube = types::SurfaceMesh::from(types::unit_cube());
        let err = effect.cook(&cube, &params).unwrap_err();
        assert!(matches!(err, effects::EffectError::BackendRequired(_)));
    }

    #[test]
    fn identity_effect_passes_mesh_through() {
        let registry = effects::EffectRegistry::default();
        let effect = registry.create("Identity").unwrap();

        let mut params = effects::ParamSet::new();
        effect.declare_parameters(&mut params);

        let cube = types::SurfaceMesh::from(types::unit_cube());
        let output = effect.cook(&cube, &params).unwrap();
        assert_eq!(output.mesh.face_count(), cube.face_count());
        assert!(output.attributes.is_empty());
    }
}
