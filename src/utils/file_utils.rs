use std::path::Path;

use crate::core::error::ConvertError;

/// Reads a whole file, tagging failures with the path.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })
}
