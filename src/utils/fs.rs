use std::fs;
use std::path::Path;

use crate::utils::error::Result;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file into memory without assuming any encoding
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Ok(fs::read(path.as_ref())?)
}

/// Write bytes to a file, creating parent directories if they don't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}
