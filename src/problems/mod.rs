//! Concrete coupling problems for the engine.
//!
//! - [`frechet`] : discrete Fréchet distance between two point sequences.

pub mod frechet;
