//! Small scalar helpers used around the numeric kernels.
//!
//! Nothing here is algorithmically interesting. The noise engine depends on
//! [`integer::floor32`]; the rest is the everyday arithmetic that callers of
//! the kernels tend to need next to them.

/// Distances between points in the plane.
pub mod geometry;
/// Truncation, floors, signs and bit fields.
pub mod integer;
/// Lerp, clamp and range remapping.
pub mod interpolate;
/// Uniform sampling helpers over any `rand::Rng`.
#[cfg(feature = "rand")]
pub mod random;
/// Step, delta, sinc and other elementary signal shapes.
pub mod signal;
/// Reciprocal trig functions and fixed-point sine/cosine.
pub mod trig;

pub use integer::floor32;
pub use interpolate::{clamp, lerp, map, normalize};
