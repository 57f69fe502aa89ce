use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// JWT claims carried by every issued token, timestamps in epoch seconds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username).
    pub sub: String,
    /// Issued at.
    pub iat: i64,
    /// Expiration time.
    pub exp: i64,
}

impl Claims {
    fn new(subject: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_seconds);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

/// Issue an HS256 token for the given subject.
pub fn issue_token(subject: &str, secret: &[u8], ttl_seconds: i64) -> Result<String> {
    let claims = Claims::new(subject, ttl_seconds);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Verify a token and return its claims.
///
/// The algorithm is pinned to HS256; a token presenting any other algorithm
/// (including "none") is rejected before signature verification. Expiry is
/// checked with zero leeway.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::TokenSignature,
            _ => AuthError::TokenMalformed,
        })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    const SECRET: &[u8] = b"test-secret-test-secret-test-sec";

    #[test]
    fn test_issue_and_verify() {
        let token = issue_token("alice", SECRET, 3600).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let token = issue_token("alice", SECRET, 3600).unwrap();
        let result = verify_token(&token, b"another-secret-another-secret-ab");

        assert!(matches!(result, Err(AuthError::TokenSignature)));
    }

    #[test]
    fn test_expired_token() {
        let token = issue_token("alice", SECRET, -10).unwrap();
        let result = verify_token(&token, SECRET);

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_tampered_signature() {
        let token = issue_token("alice", SECRET, 3600).unwrap();
        let (rest, sig) = token.rsplit_once('.').unwrap();
        // Flip the leading signature character; its bits are all significant,
        // so the tampered value still decodes but no longer matches.
        let flipped = if sig.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{rest}.{flipped}{}", &sig[1..]);

        let result = verify_token(&tampered, SECRET);
        assert!(matches!(result, Err(AuthError::TokenSignature)));
    }

    #[test]
    fn test_alg_none_rejected() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let claims = Claims::new("alice", 3600);
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let token = format!("{header}.{body}.");

        let result = verify_token(&token, SECRET);
        assert!(matches!(result, Err(AuthError::TokenMalformed)));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let result = verify_token("not.a.token", SECRET);
        assert!(matches!(result, Err(AuthError::TokenMalformed)));
    }
}
