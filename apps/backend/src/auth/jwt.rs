use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Token lifetime in seconds (1 hour).
pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Caller role carried in the token.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Host,
}

/// Claims included in our backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Login of the authenticated admin or host
    pub sub: String,
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Mint a HS256 JWT access token.
pub fn mint_access_token(
    sub: &str,
    role: Role,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + ACCESS_TOKEN_TTL_SECS;

    let claims = Claims {
        sub: sub.to_string(),
        role,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a JWT and return its claims.
///
/// Errors:
/// - Expired token → `AppError::UnauthorizedExpiredJwt`
/// - Invalid signature or any other decode error → `AppError::UnauthorizedInvalidJwt`
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::UnauthorizedExpiredJwt,
        _ => AppError::UnauthorizedInvalidJwt,
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{mint_access_token, verify_access_token, Role, ACCESS_TOKEN_TTL_SECS};
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = SecurityConfig::for_tests();

        let now = SystemTime::now();
        let token = mint_access_token("admin", Role::Admin, now, &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + ACCESS_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token() {
        let security = SecurityConfig::for_tests();

        // Two hours ago so a one-hour token is expired
        let now = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
        let token = mint_access_token("host-1", Role::Host, now, &security).unwrap();

        match verify_access_token(&token, &security) {
            Err(AppError::UnauthorizedExpiredJwt) => {}
            other => panic!("Expected expired-token error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new(b"secret-A".to_vec());
        let token =
            mint_access_token("admin", Role::Admin, SystemTime::now(), &security_a).unwrap();

        let security_b = SecurityConfig::new(b"secret-B".to_vec());
        match verify_access_token(&token, &security_b) {
            Err(AppError::UnauthorizedInvalidJwt) => {}
            other => panic!("Expected invalid-signature error, got {other:?}"),
        }
    }

    #[test]
    fn test_role_claim_roundtrip() {
        let security = SecurityConfig::for_tests();

        let token =
            mint_access_token("evening-host", Role::Host, SystemTime::now(), &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();
        assert_eq!(claims.role, Role::Host);
    }
}
