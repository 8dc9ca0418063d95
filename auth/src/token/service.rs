use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Default token lifetime in hours.
pub const DEFAULT_LIFETIME_HOURS: i64 = 24;

/// Issues and validates signed, expiring identity tokens.
///
/// Uses HS256 (HMAC with SHA-256). Tokens encode the subject user id plus
/// issued-at and expiry timestamps; the lifetime is fixed at construction.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenService {
    /// Create a token service with the default 24-hour lifetime.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self::with_lifetime(secret, Duration::hours(DEFAULT_LIFETIME_HOURS))
    }

    /// Create a token service with an explicit token lifetime.
    pub fn with_lifetime(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
        }
    }

    /// Issue a signed token asserting the given user id.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        let claims = AccessClaims::for_user(user_id, self.lifetime);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return its subject user id.
    ///
    /// Verifies the signature and checks expiry with zero leeway.
    ///
    /// # Errors
    /// * `Expired` - Current time is past the token's expiry
    /// * `InvalidSignature` - Signature does not verify against the secret
    /// * `Malformed` - Token is not decodable
    pub fn validate(&self, token: &str) -> Result<i64, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed,
                }
            })?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_validate() {
        let service = TokenService::new(SECRET);

        let token = service.issue(42).expect("Failed to issue token");
        assert!(!token.is_empty());

        let subject = service.validate(&token).expect("Failed to validate token");
        assert_eq!(subject, 42);
    }

    #[test]
    fn test_validate_malformed_token() {
        let service = TokenService::new(SECRET);

        assert_eq!(
            service.validate("not.a.token"),
            Err(TokenError::Malformed)
        );
        assert_eq!(service.validate(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_validate_tampered_signature() {
        let service = TokenService::new(SECRET);

        let token = service.issue(42).expect("Failed to issue token");

        // Flip the last signature character to another base64url character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(
            service.validate(&tampered),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let issuer = TokenService::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenService::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer.issue(42).expect("Failed to issue token");

        assert_eq!(
            verifier.validate(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_expired_token() {
        let service = TokenService::with_lifetime(SECRET, Duration::seconds(-60));

        let token = service.issue(42).expect("Failed to issue token");

        assert_eq!(service.validate(&token), Err(TokenError::Expired));
    }
}
