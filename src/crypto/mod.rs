//! Cryptographic primitives for the file transform.
//!
//! Provides key derivation, salt generation, and the keystream transform.

pub mod kdf;
pub mod xor;

pub use kdf::derive_key;
pub use xor::apply_keystream;

use crate::error::CryptoError;
use getrandom::fill;

/// PBKDF2 iteration count.
pub const ITERATIONS: u32 = 100_000;
/// Length of the salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the derived key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Size of one streaming chunk (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Generate a fresh random salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN], CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    fill(&mut salt)
        .map_err(|_| CryptoError::Other(std::io::Error::other("OS random generator unavailable")))?;
    Ok(salt)
}
