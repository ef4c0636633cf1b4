/**
 * Session Tokens
 *
 * JWT issuance and verification for stateless sessions. Tokens are
 * signed with HS256 using the server's configured secret and carry the
 * user id, an issued-at timestamp, and an expiry claim.
 *
 * The signing keys are built once at startup from `ServerConfig` and
 * live in `AppState`; nothing here reads the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the user id carried in the token
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Signing and verification keys plus the token lifetime
///
/// Built once from the configured secret and shared through `AppState`.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl SessionKeys {
    /// Build keys from the configured signing secret
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a signed token for a user
    ///
    /// # Returns
    ///
    /// Compact JWT string carrying the user id, valid for the configured
    /// lifetime.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Fails on signature mismatch, malformed structure, or expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> SessionKeys {
        SessionKeys::new(b"test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = keys().issue(user_id).unwrap();

        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = keys().issue(Uuid::new_v4()).unwrap();
        let other = SessionKeys::new(b"other-secret", 3600);
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_truncated_token_rejected() {
        let token = keys().issue(Uuid::new_v4()).unwrap();
        let truncated = &token[..token.len() - 10];
        assert!(keys().verify(truncated).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(keys().verify("not.a.token").is_err());
        assert!(keys().verify("").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let signing = keys();
        let now = unix_now();
        // Expired well past the default validation leeway.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 7200,
            iat: now - 10800,
        };
        let token = encode(&Header::default(), &claims, &signing.encoding).unwrap();
        assert!(signing.verify(&token).is_err());
    }
}
