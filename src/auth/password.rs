/**
 * Password Hashing
 *
 * This module wraps bcrypt hashing and verification for user passwords.
 *
 * The cost factor is fixed at 10 rounds. Hashes are computed once at
 * registration and never recomputed; there is no password-change flow.
 */

use bcrypt::BcryptError;

/// bcrypt work factor used for all password hashes
const HASH_COST: u32 = 10;

/// Hash a plaintext password with bcrypt
///
/// # Arguments
/// * `password` - The plaintext password
///
/// # Returns
/// The salted bcrypt hash, or an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Verify a plaintext password against a stored hash
///
/// bcrypt performs the comparison in constant time.
///
/// # Arguments
/// * `password` - The plaintext password from the login request
/// * `password_hash` - The stored bcrypt hash
///
/// # Returns
/// `true` if the password matches the hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, password_hash)
}
