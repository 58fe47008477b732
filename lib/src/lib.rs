mod adc;
mod cube;
mod decode;
mod errors;
mod params;
mod persistence;

// Public re-export
pub use crate::adc::read_adc_samples;
pub use crate::cube::RadarCube;
pub use crate::decode::{decode_grouped, decode_interleaved};
pub use crate::errors::{ConfigError, ConversionError, DecodeError, PersistenceError};
pub use crate::params::RadarParams;
pub use crate::persistence::{save, CubeFile, FileType};
