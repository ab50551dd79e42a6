//! Simplex gradient noise in one to four dimensions.
//!
//! Output is a pure function of the input coordinates and the fixed tables
//! in [`tables`]: there is no seed and no state, so the same coordinates
//! always give bit-identical results.

/// Per-dimension gradient selection from a lattice hash.
pub mod gradient;
/// Skewed-lattice evaluation and block renderers.
pub mod simplex;
/// Permutation, gradient-index and 4D traversal tables.
pub mod tables;

pub use simplex::{
    fill_noise1d, fill_noise2d, signed_noise1d, signed_noise2d, signed_noise3d, signed_noise4d,
    simplex_noise1d, simplex_noise2d, simplex_noise3d, simplex_noise4d,
};
