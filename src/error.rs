use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum CryptoError {
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    InvalidFormat(String),
    Other(io::Error),
}

impl CryptoError {
    /// Classifies an I/O error against the path it occurred on.
    pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CryptoError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => CryptoError::PermissionDenied(path.to_path_buf()),
            _ => CryptoError::Other(err),
        }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::NotFound(p) => write!(f, "file not found: {}", p.display()),
            CryptoError::PermissionDenied(p) => write!(f, "permission denied: {}", p.display()),
            CryptoError::InvalidFormat(msg) => write!(f, "{msg}"),
            CryptoError::Other(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for CryptoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CryptoError::Other(e) => Some(e),
            _ => None,
        }
    }
}
