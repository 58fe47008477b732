//! Data cube type used throughout the library.

use ndarray::Array4;
use num_complex::Complex64;

/// A decoded radar capture.
///
/// Axis order depends on the decoder that produced it:
/// - pairwise interleave: (frames, complex channels, chirps, samples)
/// - grouped blocks: (frames, complex channels x chirp configs, samples, chirps)
pub type RadarCube = Array4<Complex64>;
