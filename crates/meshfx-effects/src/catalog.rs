//! The built-in effect catalogue.
//!
//! Most of these effects are declaration-only: they carry the full
//! host-facing parameter surface (names, defaults, ranges, labels) so a
//! host can render and persist their settings, but their mesh engines are
//! not shipped in this workspace and cooking fails with
//! [`EffectError::BackendRequired`]. The two engines that do ship live in
//! [`crate::volume`] and [`crate::decimate`].

use meshfx_types::SurfaceMesh;

use crate::effect::{is_positive, EffectOutput, MeshEffect};
use crate::error::{EffectError, EffectResult};
use crate::params::ParamSet;

/// Laplacian smoothing (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct SmoothLaplacian;

impl MeshEffect for SmoothLaplacian {
    fn name(&self) -> &'static str {
        "Smooth (Laplacian)"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_int("NumberOfIterations", 20)
            .range(1, 1000)
            .label("Iterations");
        params
            .declare_float("RelaxationFactor", 0.1)
            .range(0.0, 1000.0)
            .label("Relaxation factor");
        params.declare_bool("BoundarySmoothing", true);
        params.declare_bool("FeatureEdgeSmoothing", false);
        params.declare_float("FeatureAngle", 45.0).range(0.001, 180.0);
        params.declare_float("EdgeAngle", 15.0).range(0.001, 180.0);
        params.declare_float("Convergence", 0.0).range(0.0, 1000.0);
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Windowed-sinc smoothing (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct SmoothWindowedSinc;

impl MeshEffect for SmoothWindowedSinc {
    fn name(&self) -> &'static str {
        "Smooth (windowed sinc)"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_int("NumberOfIterations", 20)
            .range(1, 1000)
            .label("Iterations");
        params
            .declare_float("PassBand", 0.1)
            .range(0.001, 2.0)
            .label("Passband");
        params.declare_bool("BoundarySmoothing", true);
        params.declare_bool("NonManifoldSmoothing", false);
        params.declare_bool("FeatureEdgeSmoothing", false);
        params.declare_float("FeatureAngle", 45.0);
        params.declare_float("EdgeAngle", 15.0);
        params.declare_bool("NormalizeCoordinates", true);
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Surface point sampling (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct PointSampling;

impl MeshEffect for PointSampling {
    fn name(&self) -> &'static str {
        "Point sampling"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params.declare_float("Distance", 0.1).range(1e-6, 1e6);
        params.declare_bool("GenerateEdgePoints", true);
        params.declare_bool("GenerateInteriorPoints", true);
        params.declare_bool("InterpolatePointData", false);
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Point thinning (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct MaskPoints;

impl MeshEffect for MaskPoints {
    fn name(&self) -> &'static str {
        "Mask points"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_bool("RandomMode", true)
            .label("Use point selection");
        params.declare_int("RandomModeType", 0).range(0, 3);
        params
            .declare_int("OnRatio", 2)
            .range(1, 10_000)
            .label("Take every n-th point");
        params
            .declare_int("MaximumNumberOfPoints", 10_000)
            .range(0, 10_000_000);
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Feature edge extraction (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureEdges;

impl MeshEffect for FeatureEdges {
    fn name(&self) -> &'static str {
        "Feature edges"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params.declare_float("FeatureAngle", 30.0).range(1e-6, 180.0);
        params
            .declare_bool("FeatureEdges", true)
            .label("Extract feature edges");
        params.declare_bool("BoundaryEdges", false);
        params.declare_bool("NonManifoldEdges", false);
        params.declare_bool("ManifoldEdges", false);
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Tetrahedralization (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct Delaunay3D;

impl MeshEffect for Delaunay3D {
    fn name(&self) -> &'static str {
        "Delaunay 3D"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_bool("ExtractSurface", false)
            .label("Extract boundary faces (convex hull)");
        params
            .declare_bool("ExtractWireframe", true)
            .label("Extract tetrahedral edges");
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Hole filling (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct FillHoles;

impl MeshEffect for FillHoles {
    fn name(&self) -> &'static str {
        "Fill holes"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_float("HoleSize", 1.0)
            .range(0.0, 1e6)
            .label("Maximum hole size");
    }

    fn is_identity(&self, params: &ParamSet) -> bool {
        params
            .get_float("HoleSize")
            .is_ok_and(|size| !is_positive(size))
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Tube generation around edges (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct TubeFilter;

impl MeshEffect for TubeFilter {
    fn name(&self) -> &'static str {
        "Tube filter"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params.declare_float("Radius", 0.05).range(1e-6, 1e6);
        params.declare_int("NumberOfSides", 6).range(3, 1000);
        params.declare_bool("Capping", true).label("Cap ends");
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Progressive decimation (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimatePro;

impl MeshEffect for DecimatePro {
    fn name(&self) -> &'static str {
        "Decimate (pro)"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_float("TargetReduction", 0.8)
            .label("Target reduction");
        params.declare_bool("PreserveTopology", false);
        params.declare_float("FeatureAngle", 15.0);
        params.declare_bool("Splitting", true);
        params.declare_float("SplitAngle", 45.0);
        params.declare_float("MaximumError", 0.01).range(0.0, 1e6);
        params.declare_bool("AbsoluteError", false);
        params.declare_bool("BoundaryVertexDeletion", true);
        params
            .declare_float("InflectionPointRatio", 10.0)
            .range(1.001, 1e6);
        params.declare_int("Degree", 25).range(3, 1000);
    }

    fn is_identity(&self, params: &ParamSet) -> bool {
        params
            .get_float("TargetReduction")
            .is_ok_and(|reduction| !is_positive(reduction))
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Clustering decimation (declaration only).
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimateQuadraticClustering;

impl MeshEffect for DecimateQuadraticClustering {
    fn name(&self) -> &'static str {
        "Decimate (quadratic clustering)"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params
            .declare_int3("NumberOfDivisions", [256, 256, 256])
            .range([2, 2, 2], [65535, 65535, 65535]);
        params.declare_bool("AutoAdjustNumberOfDivisions", true);
    }

    fn cook(&self, _input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Err(EffectError::BackendRequired(self.name()))
    }
}

/// Pass-through effect, useful when wiring hosts up.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl MeshEffect for Identity {
    fn name(&self) -> &'static str {
        "Identity"
    }

    fn declare_parameters(&self, params: &mut ParamSet) {
        params.declare_bool("ActionIsIdentity", false);
    }

    fn is_identity(&self, params: &ParamSet) -> bool {
        params.get_bool("ActionIsIdentity").unwrap_or(false)
    }

    fn cook(&self, input: &SurfaceMesh, _params: &ParamSet) -> EffectResult<EffectOutput> {
        Ok(EffectOutput::mesh_only(input.clone()))
    }
}
