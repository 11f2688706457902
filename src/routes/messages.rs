use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CallerIdentity;
use crate::db;
use crate::error::AppError;
use crate::models::Message;
use crate::state::SharedState;
use crate::validate;

#[derive(Deserialize)]
pub struct MessagePayload {
    pub subject: String,
    pub body: Option<String>,
}

pub async fn list(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = db::messages::list(&state.pool).await?;
    Ok(Json(messages))
}

pub async fn create(
    caller: CallerIdentity,
    State(state): State<SharedState>,
    Json(req): Json<MessagePayload>,
) -> Result<Json<Message>, AppError> {
    validate::message(&req.subject)?;

    let message =
        db::messages::create(&state.pool, &req.subject, req.body.as_deref(), caller.user_id)
            .await?;
    Ok(Json(message))
}

pub async fn get(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Message>, AppError> {
    let message = db::messages::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;
    Ok(Json(message))
}

pub async fn update(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MessagePayload>,
) -> Result<Json<Message>, AppError> {
    validate::message(&req.subject)?;

    let message = db::messages::update(&state.pool, id, &req.subject, req.body.as_deref())
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Message not found".to_string()),
            _ => AppError::Database(e),
        })?;
    Ok(Json(message))
}

/// Cascades: every mailing referencing this message goes with it.
pub async fn delete(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::messages::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Message not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
