//! Raw ADC stream to complex data cube decoding.
//!
//! The DCA1000 streams 16-bit I/Q words in two different orderings depending
//! on how the capture session was set up, so there are two decoders. They are
//! deliberately separate entry points rather than one parameterized function:
//! the bit-level interleaving assumptions differ and are not numerically
//! equivalent.

use ndarray::{s, Array, Zip};
use num_complex::Complex64;

use crate::cube::RadarCube;
use crate::errors::DecodeError;
use crate::params::RadarParams;

/// Decode a capture where consecutive word pairs alternate between antennas
/// before samples advance (per-chirp pairwise interleaving).
///
/// The flat stream is reshaped row-major to
/// `(frames, chirps, channels, 2 x samples)` and each complex sample `l` of a
/// chirp row is assembled as:
///
/// - `l` even: `re = raw[2l]`, `im = raw[2l + 2]`
/// - `l` odd:  `re = raw[2l - 1]`, `im = raw[2l + 1]`
///
/// This index map, including the asymmetry between the two branches, matches
/// the vendor capture tooling word for word and is kept as-is. The even
/// branch reads two words ahead, so an odd sample count would run past the
/// end of the chirp row on its last sample; such captures are rejected.
///
/// Returns the cube as `(frames, channels, chirps, samples)`.
pub fn decode_interleaved(samples: &[i16], params: &RadarParams) -> Result<RadarCube, DecodeError> {
    let frames = params.num_frames;
    let chirps = params.chirps_per_frame;
    let channels = params.complex_channels();
    let n = params.samples_per_chirp;

    if n % 2 != 0 {
        return Err(DecodeError::OddSampleCount { samples: n });
    }

    let expected = frames * chirps * channels * 2 * n;
    if samples.len() != expected {
        return Err(DecodeError::ShapeMismatch {
            expected,
            actual: samples.len(),
        });
    }

    log::trace!(
        "Decoding pairwise-interleaved capture: {} frames, {} chirps, {} channels, {} samples",
        frames,
        chirps,
        channels,
        n
    );

    let raw = Array::from_shape_vec((frames, chirps, channels, 2 * n), samples.to_vec())
        .map_err(|_| DecodeError::ShapeMismatch {
            expected,
            actual: samples.len(),
        })?;

    let mut cube = RadarCube::zeros((frames, chirps, channels, n));
    for i in 0..frames {
        for j in 0..chirps {
            for k in 0..channels {
                let row = raw.slice(s![i, j, k, ..]);
                for l in 0..n {
                    let (re, im) = if l % 2 == 0 {
                        (row[2 * l], row[2 * l + 2])
                    } else {
                        (row[2 * l - 1], row[2 * l + 1])
                    };
                    cube[(i, j, k, l)] = Complex64::new(re as f64, im as f64);
                }
            }
        }
    }

    // Swap the chirp and channel axes, materialized so the result is laid
    // out exactly as an explicit element-wise permutation would be.
    Ok(cube.permuted_axes([0, 2, 1, 3]).as_standard_layout().into_owned())
}

/// Decode a capture delivered as fixed 4-word groups interleaved across the
/// channel and chirp dimensions.
///
/// The card emits each group in native `I0 I1 Q0 Q1` order. Decoding:
///
/// 1. swap the middle pair of every 4-word group (`I0 Q0 I1 Q1`),
/// 2. reshape row-major to `(frames, 2 x samples, channels x chirp configs,
///    chirps)`,
/// 3. split the `2 x samples` axis by parity into real and imaginary parts,
/// 4. swap the sample and lane axes.
///
/// Returns the cube as `(frames, channels x chirp configs, samples, chirps)`.
pub fn decode_grouped(samples: &[i16], params: &RadarParams) -> Result<RadarCube, DecodeError> {
    let frames = params.num_frames;
    let chirps = params.chirps_per_frame;
    let lanes = params.complex_channels() * params.chirp_configs_per_chirp;
    let n = params.samples_per_chirp;
    let per_frame = params.total_samples_per_frame;

    if per_frame % 4 != 0 {
        return Err(DecodeError::UngroupedFrame { per_frame });
    }

    let expected = frames * per_frame;
    if samples.len() != expected {
        return Err(DecodeError::ShapeMismatch {
            expected,
            actual: samples.len(),
        });
    }

    log::trace!(
        "Decoding grouped capture: {} frames, {} chirps, {} lanes, {} samples",
        frames,
        chirps,
        lanes,
        n
    );

    let mut words = samples.to_vec();
    for group in words.chunks_exact_mut(4) {
        group.swap(1, 2);
    }

    let rearranged = Array::from_shape_vec((frames, 2 * n, lanes, chirps), words).map_err(|_| {
        DecodeError::ShapeMismatch {
            expected,
            actual: samples.len(),
        }
    })?;

    // Even word rows carry the real parts, odd word rows the imaginary parts.
    let re = rearranged.slice(s![.., ..;2, .., ..]);
    let im = rearranged.slice(s![.., 1..;2, .., ..]);

    let mut cube = RadarCube::zeros((frames, n, lanes, chirps));
    Zip::from(&mut cube)
        .and(&re)
        .and(&im)
        .for_each(|out, &r, &q| *out = Complex64::new(r as f64, q as f64));

    Ok(cube.permuted_axes([0, 2, 1, 3]).as_standard_layout().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        num_frames: usize,
        chirps_per_frame: usize,
        samples_per_chirp: usize,
        real_channels: usize,
        chirp_configs_per_chirp: usize,
    ) -> RadarParams {
        RadarParams {
            num_frames,
            chirps_per_frame,
            samples_per_chirp,
            range_bins: samples_per_chirp,
            virtual_antennas: (real_channels / 2) * chirp_configs_per_chirp,
            chirp_configs_per_chirp,
            real_channels,
            total_samples_per_frame: real_channels
                * samples_per_chirp
                * chirp_configs_per_chirp
                * chirps_per_frame,
        }
    }

    fn c(re: i32, im: i32) -> Complex64 {
        Complex64::new(re as f64, im as f64)
    }

    /// Deterministic i16 test pattern, avoids an RNG dependency.
    fn pattern(len: usize) -> Vec<i16> {
        (0..len).map(|t| ((t * 37 + 11) % 4001) as i16 - 2000).collect()
    }

    /// Inverse of `decode_interleaved`: lay a `(frames, channels, chirps,
    /// samples)` cube back out as the pairwise-interleaved word stream.
    fn encode_interleaved(cube: &RadarCube) -> Vec<i16> {
        let (frames, channels, chirps, n) = cube.dim();
        let mut raw = vec![0i16; frames * chirps * channels * 2 * n];
        for i in 0..frames {
            for j in 0..chirps {
                for k in 0..channels {
                    let base = ((i * chirps + j) * channels + k) * 2 * n;
                    for m in 0..n / 2 {
                        let even = cube[(i, k, j, 2 * m)];
                        let odd = cube[(i, k, j, 2 * m + 1)];
                        raw[base + 4 * m] = even.re as i16;
                        raw[base + 4 * m + 1] = odd.re as i16;
                        raw[base + 4 * m + 2] = even.im as i16;
                        raw[base + 4 * m + 3] = odd.im as i16;
                    }
                }
            }
        }
        raw
    }

    /// Inverse of `decode_grouped`: lay a `(frames, lanes, samples, chirps)`
    /// cube back out as the native 4-word-group stream.
    fn encode_grouped(cube: &RadarCube, params: &RadarParams) -> Vec<i16> {
        let (frames, lanes, n, chirps) = cube.dim();
        let per_frame = params.total_samples_per_frame;
        let mut raw = vec![0i16; frames * per_frame];
        for i in 0..frames {
            for b in 0..lanes {
                for l in 0..n {
                    for chirp in 0..chirps {
                        let value = cube[(i, b, l, chirp)];
                        let re_at = (2 * l) * lanes * chirps + b * chirps + chirp;
                        let im_at = (2 * l + 1) * lanes * chirps + b * chirps + chirp;
                        raw[i * per_frame + re_at] = value.re as i16;
                        raw[i * per_frame + im_at] = value.im as i16;
                    }
                }
            }
        }
        // Undo the middle-pair swap (it is its own inverse) to recover the
        // native I0 I1 Q0 Q1 group order.
        for group in raw.chunks_exact_mut(4) {
            group.swap(1, 2);
        }
        raw
    }

    #[test]
    fn interleaved_single_chirp_single_channel() {
        // One chirp row of four words [0, 1, 2, 3] pairs up as I0 I1 Q0 Q1.
        let params = params(1, 1, 2, 2, 1);
        let cube = decode_interleaved(&[0, 1, 2, 3], &params).unwrap();
        assert_eq!(cube.dim(), (1, 1, 1, 2));
        assert_eq!(cube[(0, 0, 0, 0)], c(0, 2));
        assert_eq!(cube[(0, 0, 0, 1)], c(1, 3));
    }

    #[test]
    fn interleaved_swaps_chirp_and_channel_axes() {
        let params = params(1, 2, 2, 4, 1);
        let raw: Vec<i16> = (0i16..16).collect();
        let cube = decode_interleaved(&raw, &params).unwrap();
        assert_eq!(cube.dim(), (1, 2, 2, 2));

        let expected = Array::from_shape_vec(
            (1, 2, 2, 2),
            vec![
                // channel 0: chirp 0, chirp 1
                c(0, 2),
                c(1, 3),
                c(8, 10),
                c(9, 11),
                // channel 1: chirp 0, chirp 1
                c(4, 6),
                c(5, 7),
                c(12, 14),
                c(13, 15),
            ],
        )
        .unwrap();
        assert_eq!(cube, expected);
    }

    #[test]
    fn interleaved_rejects_odd_sample_count() {
        let params = params(1, 1, 3, 2, 1);
        let err = decode_interleaved(&[0; 6], &params).unwrap_err();
        assert!(matches!(err, DecodeError::OddSampleCount { samples: 3 }));
    }

    #[test]
    fn interleaved_rejects_wrong_stream_length() {
        let params = params(1, 2, 4, 4, 1);
        let err = decode_interleaved(&[0; 31], &params).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ShapeMismatch {
                expected: 32,
                actual: 31
            }
        ));
    }

    #[test]
    fn interleaved_round_trip() {
        let params = params(2, 3, 6, 8, 1);
        let raw = pattern(2 * 3 * 4 * 12);
        let cube = decode_interleaved(&raw, &params).unwrap();
        assert_eq!(cube.dim(), (2, 4, 3, 6));
        assert_eq!(cube.len(), raw.len() / 2);
        assert_eq!(encode_interleaved(&cube), raw);
    }

    #[test]
    fn grouped_regression_vector() {
        // 1 frame, 2 chirps, 4 samples, 2 Rx (4 real channels), 1 chirp
        // config; 32 sequential words must decode to this exact cube.
        let params = params(1, 2, 4, 4, 1);
        let raw: Vec<i16> = (0i16..32).collect();
        let cube = decode_grouped(&raw, &params).unwrap();
        assert_eq!(cube.dim(), (1, 2, 4, 2));

        let expected = Array::from_shape_vec(
            (1, 2, 4, 2),
            vec![
                // lane 0: samples 0..4, chirps 0..2
                c(0, 4),
                c(2, 6),
                c(8, 12),
                c(10, 14),
                c(16, 20),
                c(18, 22),
                c(24, 28),
                c(26, 30),
                // lane 1
                c(1, 5),
                c(3, 7),
                c(9, 13),
                c(11, 15),
                c(17, 21),
                c(19, 23),
                c(25, 29),
                c(27, 31),
            ],
        )
        .unwrap();
        assert_eq!(cube, expected);
    }

    #[test]
    fn grouped_rejects_wrong_stream_length() {
        let params = params(1, 2, 4, 4, 1);
        let err = decode_grouped(&[0; 30], &params).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ShapeMismatch {
                expected: 32,
                actual: 30
            }
        ));
    }

    #[test]
    fn grouped_rejects_frame_size_without_whole_word_groups() {
        // 2 real channels x 3 samples x 1 config x 1 chirp = 6 words per
        // frame: the stream length matches, but 6 words do not split into
        // 4-word I/Q groups.
        let params = params(1, 1, 3, 2, 1);
        let err = decode_grouped(&[0; 6], &params).unwrap_err();
        assert!(matches!(err, DecodeError::UngroupedFrame { per_frame: 6 }));
    }

    #[test]
    fn grouped_round_trip() {
        let params = params(2, 3, 4, 8, 2);
        let raw = pattern(2 * params.total_samples_per_frame);
        let cube = decode_grouped(&raw, &params).unwrap();
        assert_eq!(cube.dim(), (2, 8, 4, 3));
        assert_eq!(cube.len(), raw.len() / 2);
        assert_eq!(encode_grouped(&cube, &params), raw);
    }
}
