//! Sources of randomness.
//!
//! Analyses which diversify the models found by an oracle take some source of randomness from the caller.
//! Any [Rng](rand::Rng) will do, and [MinimalPCG32] is provided as a small, seedable, default.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
