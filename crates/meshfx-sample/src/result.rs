//! Sampling results and run reporting.

use std::fmt;

use meshfx_types::Point3;

/// Name of the per-point scalar attribute carrying signed distances.
pub const DISTANCE_ATTRIBUTE: &str = "distance";

/// Accepted interior points with their signed distances, as parallel
/// arrays.
///
/// `positions[i]` lies strictly inside the sampled volume and
/// `distances[i]` is its (negative) signed distance to the proxy surface.
/// Both arrays hold exactly the accepted count; a shortfall shortens them,
/// it never leaves placeholder entries.
#[derive(Debug, Clone, Default)]
pub struct SampleCloud {
    /// Accepted sample positions.
    pub positions: Vec<Point3<f64>>,
    /// Signed distance per position, index-aligned with `positions`.
    pub distances: Vec<f64>,
}

impl SampleCloud {
    /// Number of accepted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` when no candidate was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Counters describing one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleReport {
    /// Points the caller asked for (after clamping).
    pub requested: usize,
    /// Points actually accepted.
    pub accepted: usize,
    /// Candidates drawn, accepted or not.
    pub attempts: usize,
}

impl SampleReport {
    /// `true` when fewer points were accepted than requested.
    #[must_use]
    pub const fn is_shortfall(&self) -> bool {
        self.accepted < self.requested
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Volume sampling: {}/{} points accepted in {} attempts",
            self.accepted, self.requested, self.attempts
        )
    }
}

/// Everything one sampling call produces.
#[derive(Debug, Clone)]
pub struct VolumeSampling {
    /// The accepted points and their distances.
    pub cloud: SampleCloud,
    /// Counters for logging and shortfall detection.
    pub report: SampleReport,
}
