//! Candidate coordinate generation for rejection sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::SampleParams;
use crate::weyl::AdditiveRecurrence;

/// Where candidate coordinates come from.
///
/// Either the deterministic Weyl sequence (uniform distribution mode) or a
/// pseudorandom generator, seeded when the caller wants reproducible runs.
/// State is owned by one sampling call; nothing is shared or global.
#[derive(Debug)]
pub(crate) enum CandidateSource {
    Quasirandom(AdditiveRecurrence),
    Pseudorandom(StdRng),
}

impl CandidateSource {
    /// Picks the source `params` ask for.
    pub(crate) fn for_params(params: &SampleParams) -> Self {
        if params.distribute_uniformly {
            Self::Quasirandom(AdditiveRecurrence::new())
        } else {
            Self::Pseudorandom(
                params
                    .seed
                    .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            )
        }
    }

    /// Draws one coordinate for `axis` inside `[lo, hi)`.
    pub(crate) fn draw(&mut self, axis: usize, lo: f64, hi: f64) -> f64 {
        match self {
            Self::Quasirandom(sequence) => {
                sequence.advance();
                sequence.range_value(axis, lo, hi)
            }
            Self::Pseudorandom(rng) => (hi - lo).mul_add(rng.gen::<f64>(), lo),
        }
    }
}
