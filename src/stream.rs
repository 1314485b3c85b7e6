//! Chunked file transform and the salt-prefix on-disk format.
//!
//! Encrypted files carry the 16-byte salt as a raw prefix followed by the
//! transformed bytes. There is no magic number, no version field and no
//! authentication tag: decrypting with a wrong password yields garbage
//! bytes rather than an error. The format is `name.ext` <-> `name.ext.enc`.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::crypto::{self, CHUNK_SIZE, KEY_LEN, SALT_LEN};
use crate::error::CryptoError;

/// Extension appended to encrypted output files.
pub const ENC_SUFFIX: &str = "enc";

/// Encrypts `path` into `path.enc`, returning the output path.
///
/// Streams the source in 64 KiB chunks so memory stays bounded regardless
/// of file size. On failure partway through, the partially written output
/// is left on disk; there is no atomic rename or cleanup.
pub fn encrypt_file(path: &Path, password: &str) -> Result<PathBuf, CryptoError> {
    let salt = crypto::generate_salt()?;
    let key = Zeroizing::new(crypto::derive_key(password, &salt));
    let output = encrypted_path(path);

    info!(path = %path.display(), "encrypting file");

    let mut src = File::open(path).map_err(|e| CryptoError::from_io(e, path))?;
    let mut dst = File::create(&output).map_err(|e| CryptoError::from_io(e, &output))?;

    // salt prefix lets decryption rederive the same key
    dst.write_all(&salt)
        .map_err(|e| CryptoError::from_io(e, &output))?;

    transform_stream(&mut src, &mut dst, &key, path, &output)?;

    info!(output = %output.display(), "encryption finished");
    Ok(output)
}

/// Decrypts `path` (which must end in `.enc`) back to the original name.
///
/// The suffix is validated before any file content is read. The salt is
/// read from the first 16 bytes of the source; the rest of the stream is
/// transformed exactly like encryption, since XOR is self-inverse.
pub fn decrypt_file(path: &Path, password: &str) -> Result<PathBuf, CryptoError> {
    let output = decrypted_path(path)?;

    info!(path = %path.display(), "decrypting file");

    let mut src = File::open(path).map_err(|e| CryptoError::from_io(e, path))?;

    let mut salt = [0u8; SALT_LEN];
    src.read_exact(&mut salt).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => CryptoError::InvalidFormat(format!(
            "{} is shorter than the {SALT_LEN}-byte salt prefix",
            path.display()
        )),
        _ => CryptoError::from_io(e, path),
    })?;

    let key = Zeroizing::new(crypto::derive_key(password, &salt));

    let mut dst = File::create(&output).map_err(|e| CryptoError::from_io(e, &output))?;
    transform_stream(&mut src, &mut dst, &key, path, &output)?;

    info!(output = %output.display(), "decryption finished");
    Ok(output)
}

/// Applies the keystream chunk by chunk, writing each chunk immediately.
fn transform_stream(
    src: &mut File,
    dst: &mut File,
    key: &[u8; KEY_LEN],
    src_path: &Path,
    dst_path: &Path,
) -> Result<(), CryptoError> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = read_chunk(src, &mut buf).map_err(|e| CryptoError::from_io(e, src_path))?;
        if n == 0 {
            break;
        }

        crypto::apply_keystream(&mut buf[..n], key);
        dst.write_all(&buf[..n])
            .map_err(|e| CryptoError::from_io(e, dst_path))?;

        debug!(bytes = n, "chunk transformed");
    }
    Ok(())
}

/// Fills `buf` completely unless the stream ends first.
///
/// The key index restarts per chunk, so every chunk except the last must
/// be exactly `CHUNK_SIZE` bytes or the schedule would drift between the
/// file's writer and its reader. A plain `read` may return short counts,
/// hence the loop.
fn read_chunk(src: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// `name.ext` -> `name.ext.enc`
fn encrypted_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ENC_SUFFIX);
    PathBuf::from(name)
}

/// `name.ext.enc` -> `name.ext`, rejecting paths without the suffix.
fn decrypted_path(path: &Path) -> Result<PathBuf, CryptoError> {
    match path.extension() {
        Some(ext) if ext == ENC_SUFFIX => Ok(path.with_extension("")),
        _ => Err(CryptoError::InvalidFormat(format!(
            "{} is not a supported encrypted file (.{ENC_SUFFIX})",
            path.display()
        ))),
    }
}
