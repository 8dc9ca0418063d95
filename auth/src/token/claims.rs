use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an identity token.
///
/// The subject is the numeric user id the token asserts; `iat`/`exp` are
/// Unix timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for a user with the given lifetime from now.
    pub fn for_user(user_id: i64, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + lifetime;

        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = AccessClaims::for_user(7, Duration::hours(24));

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_for_user_negative_lifetime() {
        let claims = AccessClaims::for_user(7, Duration::seconds(-60));
        assert!(claims.exp < claims.iat);
    }
}
