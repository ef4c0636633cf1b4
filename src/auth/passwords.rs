/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. The salt is embedded in the digest, so
 * verification needs no separate salt storage, and comparison is
 * delegated to bcrypt rather than done with a naive equality check.
 *
 * Plaintext passwords are never stored or logged anywhere in this crate.
 */

use bcrypt::BcryptError;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Compute a salted one-way hash of a plaintext password
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Verify a plaintext password against a stored digest
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, digest)
}
