//! Sampler
//!
//! Strategies for picking the next pruning candidate in random-order pruning.
use rand::rngs::StdRng;
use rand::Rng;

// A sampler picks which of the remaining candidates is tried next.
pub trait CandidateSampler {
    /// Position, in `0..n_remaining`, of the next candidate to try.
    /// Only called with `n_remaining > 0`.
    fn draw(&mut self, rng: &mut StdRng, n_remaining: usize) -> usize;
}

/// Every remaining candidate is equally likely.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformSampler;

impl CandidateSampler for UniformSampler {
    fn draw(&mut self, rng: &mut StdRng, n_remaining: usize) -> usize {
        rng.gen_range(0..n_remaining)
    }
}
