use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::CallerIdentity;
use crate::db;
use crate::error::AppError;
use crate::models::Client;
use crate::state::SharedState;
use crate::validate;

#[derive(Deserialize)]
pub struct ClientPayload {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub note: Option<String>,
}

pub async fn list(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Client>>, AppError> {
    let clients = db::clients::list(&state.pool).await?;
    Ok(Json(clients))
}

pub async fn create(
    caller: CallerIdentity,
    State(state): State<SharedState>,
    Json(req): Json<ClientPayload>,
) -> Result<Json<Client>, AppError> {
    validate::client(
        &req.email,
        &req.first_name,
        &req.last_name,
        req.patronymic.as_deref(),
    )?;

    let client = db::clients::create(
        &state.pool,
        &req.email,
        &req.first_name,
        &req.last_name,
        req.patronymic.as_deref(),
        req.note.as_deref(),
        caller.user_id,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A client with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(client))
}

pub async fn get(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, AppError> {
    let client = db::clients::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;
    Ok(Json(client))
}

pub async fn update(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ClientPayload>,
) -> Result<Json<Client>, AppError> {
    validate::client(
        &req.email,
        &req.first_name,
        &req.last_name,
        req.patronymic.as_deref(),
    )?;

    let client = db::clients::update(
        &state.pool,
        id,
        &req.email,
        &req.first_name,
        &req.last_name,
        req.patronymic.as_deref(),
        req.note.as_deref(),
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("Client not found".to_string()),
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("A client with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(Json(client))
}

pub async fn delete(
    _caller: CallerIdentity,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::clients::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Client not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
