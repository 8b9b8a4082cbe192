use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::auth::jwt::{verify_access_token, Claims, Role};
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;
use crate::AppError;

/// Verified JWT claims for the current request.
///
/// Extraction verifies the Bearer token against the configured secret and
/// rejects tokens revoked via logout. Role enforcement is the handler's
/// job, via [`JwtClaims::require_role`].
#[derive(Debug, Clone)]
pub struct JwtClaims {
    pub claims: Claims,
    /// Raw token, kept so logout can revoke it
    pub token: String,
}

impl JwtClaims {
    pub fn require_role(&self, role: Role) -> Result<(), AppError> {
        if self.claims.role == role {
            Ok(())
        } else {
            let needed = match role {
                Role::Admin => "Admin",
                Role::Host => "Host",
            };
            Err(AppError::forbidden(format!("{needed} privileges required")))
        }
    }
}

impl FromRequest for JwtClaims {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let token_fut = AuthToken::from_request(req, payload);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let auth_token = token_fut.await?;
            let state = state
                .ok_or_else(|| AppError::internal("AppState missing from app data".to_string()))?;

            if state.revoked.is_revoked(&auth_token.token) {
                return Err(AppError::UnauthorizedRevokedToken);
            }

            let claims = verify_access_token(&auth_token.token, &state.security)?;

            Ok(JwtClaims {
                claims,
                token: auth_token.token,
            })
        })
    }
}
