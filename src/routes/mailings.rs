use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CallerIdentity;
use crate::db;
use crate::error::AppError;
use crate::models::{Client, Mailing, MailingPeriod, MailingStatus};
use crate::state::SharedState;
use crate::validate;

#[derive(Deserialize)]
pub struct CreateMailing {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub period: Option<MailingPeriod>,
    pub message_id: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateMailing {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub period: Option<MailingPeriod>,
    pub message_id: Uuid,
    pub is_active: Option<bool>,
}

pub async fn list(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Mailing>>, AppError> {
    let mailings = db::mailings::list(&state.pool).await?;
    Ok(Json(mailings))
}

pub async fn create(
    caller: CallerIdentity,
    State(state): State<SharedState>,
    Json(req): Json<CreateMailing>,
) -> Result<Json<Mailing>, AppError> {
    validate::mailing(req.start_at, req.end_at)?;

    let mailing = db::mailings::create(
        &state.pool,
        req.start_at,
        req.end_at,
        req.period.unwrap_or(MailingPeriod::Monthly),
        req.message_id,
        caller.user_id,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::BadRequest("Referenced message does not exist".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(mailing))
}

pub async fn get(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Mailing>, AppError> {
    let mailing = db::mailings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mailing not found".to_string()))?;
    Ok(Json(mailing))
}

pub async fn update(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMailing>,
) -> Result<Json<Mailing>, AppError> {
    validate::mailing(req.start_at, req.end_at)?;

    let existing = db::mailings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mailing not found".to_string()))?;

    if existing.status == MailingStatus::Completed {
        return Err(AppError::Conflict(
            "A completed mailing cannot be edited".to_string(),
        ));
    }

    let mailing = db::mailings::update(
        &state.pool,
        id,
        req.start_at,
        req.end_at,
        req.period.unwrap_or(existing.period),
        req.is_active.unwrap_or(existing.is_active),
        req.message_id,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::BadRequest("Referenced message does not exist".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(mailing))
}

pub async fn delete(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::mailings::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Mailing not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

pub async fn start(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Mailing>, AppError> {
    match db::mailings::start(&state.pool, id).await? {
        Some(mailing) => Ok(Json(mailing)),
        None => Err(transition_rejection(&state, id, "start").await),
    }
}

pub async fn complete(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Mailing>, AppError> {
    match db::mailings::complete(&state.pool, id).await? {
        Some(mailing) => Ok(Json(mailing)),
        None => Err(transition_rejection(&state, id, "complete").await),
    }
}

/// A failed guarded UPDATE means either the row is gone or the source state
/// was wrong; look again to say which.
async fn transition_rejection(state: &SharedState, id: Uuid, verb: &str) -> AppError {
    match db::mailings::find_by_id(&state.pool, id).await {
        Ok(None) => AppError::NotFound("Mailing not found".to_string()),
        Ok(Some(mailing)) => AppError::Conflict(format!(
            "Cannot {verb} a mailing in status `{}`",
            mailing.status.as_str()
        )),
        Err(e) => AppError::Database(e),
    }
}

pub async fn list_recipients(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Client>>, AppError> {
    db::mailings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mailing not found".to_string()))?;

    let recipients = db::mailings::list_recipients(&state.pool, id).await?;
    Ok(Json(recipients))
}

pub async fn add_recipient(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path((id, client_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mailing = require_mutable(&state, id).await?;

    db::clients::find_by_id(&state.pool, client_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    db::mailings::add_recipient(&state.pool, mailing.id, client_id).await?;
    Ok(Json(serde_json::json!({ "message": "Recipient added" })))
}

pub async fn remove_recipient(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path((id, client_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mailing = require_mutable(&state, id).await?;

    let removed = db::mailings::remove_recipient(&state.pool, mailing.id, client_id).await?;
    if removed == 0 {
        return Err(AppError::NotFound(
            "Client is not a recipient of this mailing".to_string(),
        ));
    }
    Ok(Json(serde_json::json!({ "message": "Recipient removed" })))
}

/// Recipient mutation is open while the mailing is `created` or `started`
/// and closed once `completed`.
async fn require_mutable(state: &SharedState, id: Uuid) -> Result<Mailing, AppError> {
    let mailing = db::mailings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mailing not found".to_string()))?;

    if mailing.status == MailingStatus::Completed {
        return Err(AppError::Conflict(
            "Recipients of a completed mailing cannot be changed".to_string(),
        ));
    }
    Ok(mailing)
}
