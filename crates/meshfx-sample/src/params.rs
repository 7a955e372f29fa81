//! Sampling parameters.

/// Hard cap on the number of points a single call will produce.
///
/// Requests above this are clamped down, mirroring the host-side range on
/// the point-count parameter.
pub const MAX_POINT_COUNT: usize = 1_000_000;

/// Parameters for volumetric point sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleParams {
    /// How many interior points to generate. Zero is rejected; values
    /// above [`MAX_POINT_COUNT`] are clamped. Default: 200.
    pub number_of_points: usize,
    /// Draw candidates from the deterministic low-discrepancy sequence
    /// (`true`) or from a pseudorandom generator (`false`). Default: `true`.
    pub distribute_uniformly: bool,
    /// Simplify dense input to a sampling proxy before distance queries.
    /// Default: `true`.
    pub auto_simplify: bool,
    /// Seed for the pseudorandom generator; `None` seeds from entropy.
    /// Ignored when `distribute_uniformly` is set. Default: `None`.
    pub seed: Option<u64>,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            number_of_points: 200,
            distribute_uniformly: true,
            auto_simplify: true,
            seed: None,
        }
    }
}

impl SampleParams {
    /// Creates parameters requesting `count` points, all else default.
    #[must_use]
    pub fn with_number_of_points(count: usize) -> Self {
        Self {
            number_of_points: count,
            ..Self::default()
        }
    }

    /// Selects quasirandom (`true`) or pseudorandom (`false`) candidates.
    #[must_use]
    pub const fn with_distribute_uniformly(mut self, uniformly: bool) -> Self {
        self.distribute_uniformly = uniformly;
        self
    }

    /// Enables or disables proxy simplification of dense input.
    #[must_use]
    pub const fn with_auto_simplify(mut self, auto_simplify: bool) -> Self {
        self.auto_simplify = auto_simplify;
        self
    }

    /// Seeds the pseudorandom generator for reproducible runs.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
