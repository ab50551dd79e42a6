pub mod constants;
pub mod noise; // Simplex gradient noise in 1-4 dimensions
pub mod sequence; // Integer-sequence lookup seam
pub mod special; // Digamma family and friends
pub mod util;
pub mod waveshape; // Digamma-based square shaper

pub use noise::{
    signed_noise1d, signed_noise2d, signed_noise3d, signed_noise4d, simplex_noise1d,
    simplex_noise2d, simplex_noise3d, simplex_noise4d,
};
pub use special::digamma::{
    digamma, digamma12, digamma_fast, digamma_precise, digamma_ultra, digamma_with, Accuracy,
};
pub use special::harmonic::{harmonic, harmonic12};
pub use waveshape::{square, square12};
