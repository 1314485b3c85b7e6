mod crypto;
mod error;
mod stream;

pub use crate::crypto::{CHUNK_SIZE, ITERATIONS, KEY_LEN, SALT_LEN};
pub use crate::error::CryptoError;
pub use crate::stream::{ENC_SUFFIX, decrypt_file, encrypt_file};

use std::path::{Path, PathBuf};
use tracing::error;

/// Which way to run the file transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Runs one file operation to completion and returns the output path.
///
/// This is the whole surface a front-end needs: it never sees the salt or
/// the derived key. Errors are logged here and returned unchanged; the
/// caller decides how to present them.
pub fn process_file(
    path: &Path,
    password: &str,
    direction: Direction,
) -> Result<PathBuf, CryptoError> {
    let result = match direction {
        Direction::Encrypt => stream::encrypt_file(path, password),
        Direction::Decrypt => stream::decrypt_file(path, password),
    };

    if let Err(e) = &result {
        error!(path = %path.display(), error = %e, "file operation failed");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn round_trip_restores_original_bytes() {
        let dir = tempdir().unwrap();
        let original: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let path = write_file(dir.path(), "data.bin", &original);

        let enc = encrypt_file(&path, "hunter2").unwrap();
        fs::remove_file(&path).unwrap();

        let dec = decrypt_file(&enc, "hunter2").unwrap();

        assert_eq!(dec, path);
        assert_eq!(fs::read(&dec).unwrap(), original);
    }

    #[test]
    fn repeated_encryption_differs() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "data.bin", b"same input");

        let enc = encrypt_file(&path, "pw").unwrap();
        let first = fs::read(&enc).unwrap();

        let enc = encrypt_file(&path, "pw").unwrap();
        let second = fs::read(&enc).unwrap();

        // fresh salt per encryption, so both prefix and ciphertext differ
        assert_ne!(first[..SALT_LEN], second[..SALT_LEN]);
        assert_ne!(first, second);
    }

    #[test]
    fn empty_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "empty", b"");

        let enc = encrypt_file(&path, "pw").unwrap();
        assert_eq!(fs::read(&enc).unwrap().len(), SALT_LEN);

        fs::remove_file(&path).unwrap();
        let dec = decrypt_file(&enc, "pw").unwrap();

        assert_eq!(fs::read(&dec).unwrap().len(), 0);
    }

    #[test]
    fn chunk_boundary_sizes_round_trip() {
        let dir = tempdir().unwrap();

        for size in [CHUNK_SIZE - 1, CHUNK_SIZE, CHUNK_SIZE + 1, CHUNK_SIZE * 2] {
            let original: Vec<u8> = (0..size).map(|i| (i % 241) as u8).collect();
            let path = write_file(dir.path(), &format!("f{size}.bin"), &original);

            let enc = encrypt_file(&path, "pw").unwrap();
            assert_eq!(fs::metadata(&enc).unwrap().len() as usize, size + SALT_LEN);

            fs::remove_file(&path).unwrap();
            let dec = decrypt_file(&enc, "pw").unwrap();

            assert_eq!(fs::read(&dec).unwrap(), original, "size {size}");
        }
    }

    #[test]
    fn hello_scenario() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "hello.txt", b"hello");

        let enc = encrypt_file(&path, "pw").unwrap();
        assert_eq!(fs::metadata(&enc).unwrap().len(), 21);

        // wrong password: no authentication exists, so this succeeds but
        // produces garbage
        let dec = decrypt_file(&enc, "wrong").unwrap();
        let garbage = fs::read(&dec).unwrap();
        assert_eq!(garbage.len(), 5);
        assert_ne!(garbage, b"hello");

        let dec = decrypt_file(&enc, "pw").unwrap();
        assert_eq!(fs::read(&dec).unwrap(), b"hello");
    }

    #[test]
    fn decrypt_rejects_missing_suffix_before_any_io() {
        // the path does not exist, so getting InvalidFormat instead of
        // NotFound proves the name check runs first
        let err = decrypt_file(Path::new("/nonexistent/report.pdf"), "pw").unwrap_err();

        assert!(matches!(err, CryptoError::InvalidFormat(_)));
    }

    #[test]
    fn encrypt_missing_source_is_not_found() {
        let err = encrypt_file(Path::new("/nonexistent/data.bin"), "pw").unwrap_err();

        assert!(matches!(err, CryptoError::NotFound(_)));
    }

    #[test]
    fn decrypt_truncated_salt_is_invalid_format() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "short.enc", &[0u8; 8]);

        let err = decrypt_file(&path, "pw").unwrap_err();

        assert!(matches!(err, CryptoError::InvalidFormat(_)));
    }

    #[test]
    fn process_file_dispatches_both_directions() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "doc.txt", b"contents");

        let enc = process_file(&path, "pw", Direction::Encrypt).unwrap();
        assert_eq!(enc, dir.path().join("doc.txt.enc"));

        fs::remove_file(&path).unwrap();
        let dec = process_file(&enc, "pw", Direction::Decrypt).unwrap();

        assert_eq!(dec, path);
        assert_eq!(fs::read(&dec).unwrap(), b"contents");
    }
}
