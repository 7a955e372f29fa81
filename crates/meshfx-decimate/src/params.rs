//! Parameters for mesh decimation.

/// Parameters for mesh decimation.
#[derive(Debug, Clone)]
pub struct DecimateParams {
    /// Target number of triangles. If `None`, uses `target_ratio` instead.
    pub target_triangles: Option<usize>,

    /// Fraction of triangles to keep (0.0 to 1.0) when no absolute target
    /// is set. Default: 0.5
    pub target_ratio: f64,

    /// Whether boundary edges (edges with a single adjacent face) may never
    /// collapse. Default: true
    pub preserve_boundary: bool,

    /// Cost multiplier for boundary edges when `preserve_boundary` is
    /// false. Higher values make boundary edges less likely to collapse.
    /// Default: 10.0
    pub boundary_penalty: f64,
}

impl Default for DecimateParams {
    fn default() -> Self {
        Self {
            target_triangles: None,
            target_ratio: 0.5,
            preserve_boundary: true,
            boundary_penalty: 10.0,
        }
    }
}

impl DecimateParams {
    /// Creates params targeting a specific triangle count.
    #[must_use]
    pub fn with_target_triangles(count: usize) -> Self {
        Self {
            target_triangles: Some(count),
            ..Default::default()
        }
    }

    /// Creates params targeting a fraction of the original triangles.
    /// The ratio is clamped to `[0, 1]`.
    #[must_use]
    pub fn with_target_ratio(ratio: f64) -> Self {
        Self {
            target_ratio: ratio.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Sets whether boundary edges may collapse.
    #[must_use]
    pub const fn with_preserve_boundary(mut self, preserve: bool) -> Self {
        self.preserve_boundary = preserve;
        self
    }

    /// Sets the boundary edge cost multiplier.
    #[must_use]
    pub const fn with_boundary_penalty(mut self, penalty: f64) -> Self {
        self.boundary_penalty = penalty;
        self
    }
}
