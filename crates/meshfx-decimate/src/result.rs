//! Decimation result type.

// Triangle counts don't overflow f64 in practice
#![allow(clippy::cast_precision_loss)]

use std::fmt;

use meshfx_types::TriangleMesh;

/// The outcome of a decimation run: the simplified mesh plus statistics.
#[derive(Debug, Clone)]
pub struct DecimationResult {
    /// The decimated mesh.
    pub mesh: TriangleMesh,
    /// Triangle count before decimation.
    pub original_triangles: usize,
    /// Triangle count after decimation.
    pub final_triangles: usize,
    /// Number of edge collapses applied.
    pub collapses_performed: usize,
    /// Number of collapse candidates rejected (boundary or validity).
    pub collapses_rejected: usize,
}

impl DecimationResult {
    /// Fraction of triangles removed; 0.0 for an empty input.
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        if self.original_triangles == 0 {
            return 0.0;
        }
        1.0 - (self.final_triangles as f64) / (self.original_triangles as f64)
    }

    /// Reduction as a percentage.
    #[must_use]
    pub fn reduction_percent(&self) -> f64 {
        self.reduction_ratio() * 100.0
    }

    /// Returns `true` if any collapse was applied.
    #[must_use]
    pub const fn was_decimated(&self) -> bool {
        self.collapses_performed > 0
    }
}

impl fmt::Display for DecimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimation: {} -> {} triangles ({:.1}% reduction, {} collapses)",
            self.original_triangles,
            self.final_triangles,
            self.reduction_percent(),
            self.collapses_performed
        )
    }
}
