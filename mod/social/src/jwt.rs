//! JWT service — issue and verify bearer tokens.
//!
//! Shared by the login/register handlers (issue) and the `me` path
//! resolution (verify). The secret and TTL come from [`SocialConfig`].
//!
//! [`SocialConfig`]: crate::service::SocialConfig

use serde::{Deserialize, Serialize};

/// JWT claims — what's inside the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — user id.
    pub sub: String,
    /// Display name (the username).
    pub name: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Issue and verify HS256 tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: jsonwebtoken::EncodingKey,
    decoding_key: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
    expire_secs: i64,
}

impl JwtService {
    /// Create a new JwtService with an HMAC secret.
    pub fn new(secret: &str, expire_secs: i64) -> Self {
        Self {
            encoding_key: jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
            validation: jsonwebtoken::Validation::default(),
            expire_secs,
        }
    }

    /// Token lifetime in seconds.
    pub fn expire_secs(&self) -> i64 {
        self.expire_secs
    }

    /// Issue a signed JWT for a user.
    pub fn issue(&self, user_id: &str, display_name: &str) -> Result<String, String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            name: display_name.to_string(),
            iat: now,
            exp: now + self.expire_secs,
        };
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims, &self.encoding_key)
            .map_err(|e| format!("jwt encode: {}", e))
    }

    /// Verify a JWT and extract claims.
    /// Returns Err if the token is invalid, expired, or tampered with.
    pub fn verify(&self, token: &str) -> Result<Claims, String> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| format!("jwt verify: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify() {
        let svc = JwtService::new("test-secret", 3600);
        let token = svc.issue("alice", "alice").unwrap();
        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.name, "alice");
    }

    #[test]
    fn verify_invalid_token_rejected() {
        let svc = JwtService::new("test-secret", 3600);
        assert!(svc.verify("invalid.token.here").is_err());
    }

    #[test]
    fn verify_wrong_secret_rejected() {
        let issuer = JwtService::new("secret-a", 3600);
        let verifier = JwtService::new("secret-b", 3600);
        let token = issuer.issue("alice", "alice").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_expired_token_rejected() {
        // Expired 2 minutes ago (past the default leeway).
        let svc = JwtService::new("test-secret", -120);
        let token = svc.issue("alice", "alice").unwrap();
        assert!(svc.verify(&token).is_err());
    }
}
