use std::fs;
use std::io;
use std::path::Path;

use crate::{LineMultiset, LoadError};

/// Loads a file into a [`LineMultiset`].
///
/// Bytes are decoded best-effort: undecodable sequences are replaced
/// rather than failing the load, so only a missing path or an
/// unreadable stream produces an error.
///
/// ```
/// # use std::path::Path;
/// use ldiff_core::LoadError;
///
/// let err = ldiff_core::load(Path::new("no/such/file")).unwrap_err();
/// assert!(matches!(err, LoadError::PathNotFound { .. }));
/// ```
pub fn load(path: &Path) -> Result<LineMultiset, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::PathNotFound { path: path.to_path_buf() },
        _ => LoadError::Read { path: path.to_path_buf(), source },
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(LineMultiset::from_text(&text))
}
