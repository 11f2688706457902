use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CallerIdentity;
use crate::db;
use crate::error::AppError;
use crate::models::Attempt;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct AppendAttempt {
    pub succeeded: bool,
}

/// Append surface for the external dispatcher. No dedup: every call logs a
/// fresh row, including repeats for the same mailing.
pub async fn append(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(mailing_id): Path<Uuid>,
    Json(req): Json<AppendAttempt>,
) -> Result<Json<Attempt>, AppError> {
    db::mailings::find_by_id(&state.pool, mailing_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mailing not found".to_string()))?;

    let attempt = db::attempts::append(&state.pool, mailing_id, req.succeeded).await?;
    Ok(Json(attempt))
}

pub async fn list(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(mailing_id): Path<Uuid>,
) -> Result<Json<Vec<Attempt>>, AppError> {
    db::mailings::find_by_id(&state.pool, mailing_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Mailing not found".to_string()))?;

    let attempts = db::attempts::list_by_mailing(&state.pool, mailing_id).await?;
    Ok(Json(attempts))
}
