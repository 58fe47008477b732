//! Raw ADC capture file reading.

use std::path::Path;

use crate::errors::DecodeError;

/// Read a whole capture file into a flat sequence of little-endian i16 words.
///
/// The capture card writes no header; the file is nothing but samples. The
/// handle is opened, drained and closed here, before any decoding starts.
pub fn read_adc_samples(path: impl AsRef<Path>) -> Result<Vec<i16>, DecodeError> {
    let path = path.as_ref();
    log::debug!("Reading ADC capture from {}", path.display());

    let bytes = std::fs::read(path)?;
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::TruncatedFile { bytes: bytes.len() });
    }

    let samples: Vec<i16> = bytes
        .chunks_exact(2)
        .map(|word| i16::from_le_bytes([word[0], word[1]]))
        .collect();

    log::debug!("Read {} raw samples", samples.len());
    Ok(samples)
}
