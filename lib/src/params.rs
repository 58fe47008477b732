//! Radar capture parameters resolved from the recorder's JSON side file.
//!
//! The DCA1000 recording GUI writes a flat JSON object of integers. The key
//! strings are matched verbatim, including the trailing space the recorder
//! puts after "Number of real channels"; normalizing them would break
//! compatibility with existing capture sessions.

use std::path::Path;

use serde_json::Value;

use crate::errors::ConfigError;

const NUM_FRAMES: &str = "Number of frames";
const CHIRPS_PER_FRAME: &str = "Number of chirps per frame";
const SAMPLES_PER_CHIRP: &str = "Number of ADC samples per chirp";
const RANGE_BINS: &str = "Number of range bins";
const VIRTUAL_ANTENNAS: &str = "Number of virtual antenna";
const CHIRP_CONFIGS: &str = "ChirpConfigs per chirp";
// Trailing space is deliberate, see module docs.
const REAL_CHANNELS: &str = "Number of real channels ";

/// Capture geometry of one recording session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarParams {
    /// Frames in the recording (one frame = one measurement cycle).
    pub num_frames: usize,
    /// Chirps transmitted per frame.
    pub chirps_per_frame: usize,
    /// ADC samples digitized per chirp per channel.
    pub samples_per_chirp: usize,
    /// Range bins; always equals `samples_per_chirp`.
    pub range_bins: usize,
    /// Tx count times Rx count.
    pub virtual_antennas: usize,
    /// Chirp configurations per chirp, i.e. the Tx antenna count.
    pub chirp_configs_per_chirp: usize,
    /// Real-valued channels; 2x Rx for complex capture.
    pub real_channels: usize,
    /// Derived: 16-bit words the capture card emits per frame.
    pub total_samples_per_frame: usize,
}

impl RadarParams {
    /// Resolve parameters from an already-parsed JSON document.
    pub fn from_json_value(doc: &Value) -> Result<Self, ConfigError> {
        let num_frames = get_field(doc, NUM_FRAMES)?;
        let chirps_per_frame = get_field(doc, CHIRPS_PER_FRAME)?;
        let samples_per_chirp = get_field(doc, SAMPLES_PER_CHIRP)?;
        let range_bins = get_field(doc, RANGE_BINS)?;
        let virtual_antennas = get_field(doc, VIRTUAL_ANTENNAS)?;
        let chirp_configs_per_chirp = get_field(doc, CHIRP_CONFIGS)?;
        let real_channels = get_field(doc, REAL_CHANNELS)?;

        if real_channels % 2 != 0 {
            return Err(ConfigError::OddRealChannels { real_channels });
        }

        // Words per frame, per the DCA1000 raw data format.
        let total_samples_per_frame =
            real_channels * samples_per_chirp * chirp_configs_per_chirp * chirps_per_frame;

        Ok(Self {
            num_frames,
            chirps_per_frame,
            samples_per_chirp,
            range_bins,
            virtual_antennas,
            chirp_configs_per_chirp,
            real_channels,
            total_samples_per_frame,
        })
    }

    /// Load and resolve parameters from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading radar parameters from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let doc: Value = serde_json::from_str(&contents)?;
        Self::from_json_value(&doc)
    }

    /// Complex channel count (Rx antennas) of the capture.
    pub fn complex_channels(&self) -> usize {
        self.real_channels / 2
    }
}

fn get_field(doc: &Value, key: &'static str) -> Result<usize, ConfigError> {
    let value = doc.get(key).ok_or(ConfigError::MissingField { key })?;
    let n = value.as_u64().ok_or_else(|| ConfigError::InvalidField {
        key,
        value: value.to_string(),
    })?;
    Ok(n as usize)
}
