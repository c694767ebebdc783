//! Credential engine: server-generated passwords and bcrypt hashing.
//!
//! Generated passwords are drawn from the characters of the caller's own
//! identity fields. That keeps them easy to read out of a mail but bounds
//! their entropy by public-ish data (name, phone) — a known weakness carried
//! deliberately; do not mistake this for a cryptographic generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::GENERATED_PASSWORD_LENGTH;
use crate::error::AppError;

/// Derive a random password from the identity fields supplied at
/// registration.
///
/// The pool is the concatenation of the three inputs, shuffled in place,
/// then sampled with replacement for a fixed-length string (repeated
/// characters are expected). Identity validation runs before this, so the
/// pool is non-empty in practice; an empty pool yields an empty string.
pub fn generate_password(first_name: &str, last_name: &str, phone_number: &str) -> String {
    let mut pool: Vec<char> = format!("{first_name}{last_name}{phone_number}")
        .chars()
        .collect();
    if pool.is_empty() {
        return String::new();
    }

    let mut rng = rand::rng();
    pool.shuffle(&mut rng);

    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}

/// Hash a plaintext password with bcrypt at the given cost factor.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, AppError> {
    Ok(bcrypt::hash(plaintext, cost)?)
}

/// Check a presented password against a stored hash.
///
/// A wrong password is `Ok(false)`; only primitive failure (e.g. a malformed
/// hash) is an error.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(plaintext, hash)?)
}
