use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use super::{ITERATIONS, KEY_LEN, SALT_LEN};

/// Derives a 32-byte key from a password and salt via PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same (password, salt) pair always yields the same
/// key, which is what lets decryption rederive the key from the salt
/// stored in the file. The fixed-size salt parameter rejects malformed
/// salt lengths at compile time.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut key);
    key
}
