//! Error types used by this lib.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Radar parameter file is missing required key: {key:?}")]
    MissingField { key: &'static str },
    #[error("Radar parameter {key:?} is not an unsigned integer: {value}")]
    InvalidField { key: &'static str, value: String },
    #[error("Real channel count {real_channels} is odd; complex capture needs I/Q pairs")]
    OddRealChannels { real_channels: usize },
    #[error("Radar parameter file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error reading radar parameter file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Raw stream holds {actual} samples but the capture shape needs {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("ADC sample count per chirp {samples} is odd; pairwise decoding would read past the chirp row")]
    OddSampleCount { samples: usize },
    #[error("Frame word count {per_frame} does not split into 4-word I/Q groups")]
    UngroupedFrame { per_frame: usize },
    #[error("Capture file length {bytes} bytes is not a whole number of 16-bit words")]
    TruncatedFile { bytes: usize },
    #[error("IO error reading capture file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Error writing npy file: {0}")]
    Npy(#[from] ndarray_npy::WriteNpyError),
    #[error("IO error in file persistence: {0}")]
    Io(#[from] std::io::Error),
}

/// Umbrella error for a whole conversion run (resolve params, read, decode, save).
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
