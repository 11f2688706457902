use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::SharedState;

/// Caller identity resolved from the Bearer token. Handlers take this as an
/// argument instead of reaching into ambient request state.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub user_id: Uuid,
    pub is_moderator: bool,
}

impl CallerIdentity {
    pub fn require_moderator(&self) -> Result<(), AppError> {
        if self.is_moderator {
            Ok(())
        } else {
            Err(AppError::Forbidden("Moderator access required".to_string()))
        }
    }
}

impl FromRequestParts<SharedState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(CallerIdentity {
            user_id: claims.sub,
            is_moderator: claims.moderator,
        })
    }
}
