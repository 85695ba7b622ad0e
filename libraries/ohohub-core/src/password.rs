//! Delete-password encoding
//!
//! Uploaders choose a password that later authorizes deleting their post.
//! It is stored in a single column as `salt:hash`, where `hash` is the
//! lowercase hex SHA-256 of the salt followed by the password.

use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Default salt length in characters
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// Separator between salt and hash in the stored form
const SEPARATOR: char = ':';

/// Generate a random salt of `length` characters from `[A-Za-z0-9]`
pub fn generate_salt(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Hex-encoded SHA-256 of `salt + password`
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Encode `password` with a fresh salt as `salt:hash`
pub fn prepare_for_storage(password: &str) -> String {
    let salt = generate_salt(DEFAULT_SALT_LENGTH);
    let hash = hash_password(password, &salt);
    format!("{salt}{SEPARATOR}{hash}")
}

/// Check `password` against a stored `salt:hash` string
///
/// Malformed stored values never match.
pub fn verify(password: &str, stored: &str) -> bool {
    match stored.split_once(SEPARATOR) {
        Some((salt, hash)) if !hash.is_empty() => hash_password(password, salt) == hash,
        _ => false,
    }
}
