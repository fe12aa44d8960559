/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 *
 * Tokens are signed with HS256 using a process-wide secret supplied through
 * configuration. Verification is purely cryptographic: signature plus the
 * expiry embedded at issuance, no database lookup. Any process holding the
 * secret can validate a token issued by any other process.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime in seconds (one hour)
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the authenticated user
    pub email: String,
    /// Role of the authenticated user, carried verbatim from the store
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from the shared secret
///
/// Both keys are derived once at startup and injected through `AppState`;
/// handlers and middleware never read the secret themselves.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Derive encoding and decoding keys from the shared secret
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Current Unix timestamp in seconds
fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs()
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `keys` - Signing keys
/// * `email` - User email, embedded as a claim
/// * `role` - User role, embedded as a claim
///
/// # Returns
/// Signed token string, valid for one hour
pub fn create_token(
    keys: &TokenKeys,
    email: &str,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = now_unix();

    let claims = Claims {
        email: email.to_string(),
        role: role.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify and decode a JWT token
///
/// Fails on a bad signature, a malformed token, or an expired `exp` claim.
///
/// # Arguments
/// * `keys` - Verification keys
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(keys: &TokenKeys, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> TokenKeys {
        TokenKeys::from_secret(b"test-secret")
    }

    #[test]
    fn test_create_token() {
        let keys = test_keys();
        let token = create_token(&keys, "a@b.com", "user").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_round_trip() {
        let keys = test_keys();
        let token = create_token(&keys, "a@b.com", "admin").unwrap();

        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.email, "a@b.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = test_keys();

        // Correctly signed but already expired, well past the default leeway
        let now = now_unix();
        let claims = Claims {
            email: "a@b.com".to_string(),
            role: "user".to_string(),
            exp: now - 2 * TOKEN_TTL_SECS,
            iat: now - 3 * TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(verify_token(&keys, &token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = test_keys();
        let token = create_token(&keys, "a@b.com", "user").unwrap();

        // Alter one byte of the payload segment
        let mut bytes = token.into_bytes();
        let payload_pos = bytes.iter().position(|&b| b == b'.').unwrap() + 1;
        bytes[payload_pos] = if bytes[payload_pos] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(verify_token(&keys, &tampered).is_err());
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let keys = test_keys();
        let other = TokenKeys::from_secret(b"some-other-secret");

        let token = create_token(&other, "a@b.com", "user").unwrap();
        assert!(verify_token(&keys, &token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let keys = test_keys();
        assert!(verify_token(&keys, "invalid.token.here").is_err());
    }
}
