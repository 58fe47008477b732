//! Saving decoded cubes to disk.

use std::fs::File;
use std::path::PathBuf;

use ndarray_npy::WriteNpyExt;

use crate::cube::RadarCube;
use crate::errors::PersistenceError;

/// File formats supported for writing
#[derive(Debug, Clone, Copy)]
pub enum FileType {
    /// NumPy `.npy`, complex128, readable with `np.load`
    Npy,
}

/// Struct specifying a file to write a decoded cube to
#[derive(Debug, Clone)]
pub struct CubeFile {
    /// Path to file
    pub file_path: PathBuf,
    /// Type of file
    pub file_type: FileType,
}

/// Write a decoded cube to the given file.
///
/// The file is only created here, after decoding has fully succeeded, so a
/// failed conversion never leaves partial output behind.
pub fn save(file: &CubeFile, cube: &RadarCube) -> Result<(), PersistenceError> {
    match file.file_type {
        FileType::Npy => save_npy(&file.file_path, cube),
    }
}

fn save_npy(path: &PathBuf, cube: &RadarCube) -> Result<(), PersistenceError> {
    log::debug!(
        "Writing cube of shape {:?} to {}",
        cube.dim(),
        path.display()
    );
    let file = File::create(path)?;
    cube.write_npy(file)?;
    Ok(())
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npy" => Ok(FileType::Npy),
            _ => Err(format!("Invalid file type: {}", s)),
        }
    }
}
