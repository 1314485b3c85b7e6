use super::KEY_LEN;

/// XORs a chunk against the derived key in place.
///
/// The key index restarts at zero for every chunk rather than carrying a
/// running offset across the whole stream. Existing `.enc` files were
/// written with the per-chunk schedule, so both sides must keep it even
/// though it repeats the keystream within every chunk.
///
/// XOR with the same keystream is its own inverse, so this single
/// function serves both encryption and decryption.
pub fn apply_keystream(chunk: &mut [u8], key: &[u8; KEY_LEN]) {
    for (i, byte) in chunk.iter_mut().enumerate() {
        *byte ^= key[i % KEY_LEN];
    }
}
