use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::{password, token};
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::validate;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct NewPasswordRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Creates an inactive account and emails a confirmation link. The account
/// stays unusable until the link is followed.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    validate::registration(&req.email, &req.password)?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;
    let confirm_token = token::confirmation_token();

    let user = db::users::create(&state.pool, &req.email, &pw_hash, &confirm_token)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("An account with this email already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    let confirm_url = format!(
        "{}/api/v1/auth/email-confirm/{confirm_token}",
        state.config.base_url
    );

    match &state.mailer {
        Some(mailer) => {
            if let Err(e) = mailer.send_confirmation(&user.email, &confirm_url).await {
                tracing::error!("Failed to send confirmation email to {}: {e}", user.email);
            }
        }
        None => {
            tracing::warn!(
                "SMTP not configured. Confirmation link for {}: {confirm_url}",
                user.email
            );
        }
    }

    Ok(Json(MessageResponse {
        message: "Confirmation email sent".to_string(),
    }))
}

pub async fn email_confirm(
    State(state): State<SharedState>,
    Path(confirm_token): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = db::users::find_by_token(&state.pool, &confirm_token)
        .await?
        .ok_or_else(|| AppError::NotFound("Invalid confirmation token".to_string()))?;

    db::users::activate(&state.pool, user.id).await?;

    Ok(Json(MessageResponse {
        message: "Email confirmed".to_string(),
    }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    if !user.is_active {
        return Err(AppError::Unauthorized("Account is not active".to_string()));
    }

    let claims = Claims::new(user.id, user.is_moderator);
    let access_token =
        encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(AuthResponse { access_token }))
}

/// Replaces the password with a random one and emails the plaintext, as the
/// recovery flow for accounts without any session. Delivery failure here is
/// surfaced, not swallowed: the old password is already gone.
pub async fn new_password(
    State(state): State<SharedState>,
    Json(req): Json<NewPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("No account with this email".to_string()))?;

    let new_pass = token::replacement_password();
    let pw_hash = password::hash(&new_pass).map_err(AppError::Internal)?;
    db::users::update_password(&state.pool, user.id, &pw_hash).await?;

    match &state.mailer {
        Some(mailer) => {
            mailer
                .send_new_password(&user.email, &new_pass)
                .await
                .map_err(AppError::Internal)?;
        }
        None => {
            tracing::warn!(
                "SMTP not configured. New password for {}: {new_pass}",
                user.email
            );
        }
    }

    Ok(Json(MessageResponse {
        message: "A new password has been emailed".to_string(),
    }))
}
