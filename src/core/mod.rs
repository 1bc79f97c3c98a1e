//! Game-agnostic building blocks; currently the deterministic RNG used
//! for shuffling.

pub mod rng;

pub use rng::{DeckRng, DeckRngState};
