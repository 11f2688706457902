use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Client, Mailing, MailingPeriod};

pub async fn list(pool: &PgPool) -> Result<Vec<Mailing>, sqlx::Error> {
    sqlx::query_as::<_, Mailing>("SELECT * FROM mailings ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    period: MailingPeriod,
    message_id: Uuid,
    owner_id: Uuid,
) -> Result<Mailing, sqlx::Error> {
    sqlx::query_as::<_, Mailing>(
        "INSERT INTO mailings (start_at, end_at, period, message_id, owner_id)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(start_at)
    .bind(end_at)
    .bind(period)
    .bind(message_id)
    .bind(owner_id)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Mailing>, sqlx::Error> {
    sqlx::query_as::<_, Mailing>("SELECT * FROM mailings WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Schedule fields only. `status` moves exclusively through [`start`] and
/// [`complete`] so a completed mailing can never be reopened by an edit.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    period: MailingPeriod,
    is_active: bool,
    message_id: Uuid,
) -> Result<Mailing, sqlx::Error> {
    sqlx::query_as::<_, Mailing>(
        "UPDATE mailings SET start_at = $2, end_at = $3, period = $4,
                is_active = $5, message_id = $6, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(start_at)
    .bind(end_at)
    .bind(period)
    .bind(is_active)
    .bind(message_id)
    .fetch_one(pool)
    .await
}

/// `created` -> `started`. Returns `None` when the mailing is not in the
/// required source state (or does not exist); the guard lives in the WHERE
/// clause so concurrent callers cannot double-fire the transition.
pub async fn start(pool: &PgPool, id: Uuid) -> Result<Option<Mailing>, sqlx::Error> {
    sqlx::query_as::<_, Mailing>(
        "UPDATE mailings SET status = 'started', is_active = true, updated_at = now()
         WHERE id = $1 AND status = 'created' RETURNING *",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// `started` -> `completed`. Terminal; also drops `is_active`.
pub async fn complete(pool: &PgPool, id: Uuid) -> Result<Option<Mailing>, sqlx::Error> {
    sqlx::query_as::<_, Mailing>(
        "UPDATE mailings SET status = 'completed', is_active = false, updated_at = now()
         WHERE id = $1 AND status = 'started' RETURNING *",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM mailings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn add_recipient(
    pool: &PgPool,
    mailing_id: Uuid,
    client_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO mailing_recipients (mailing_id, client_id)
         VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(mailing_id)
    .bind(client_id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn remove_recipient(
    pool: &PgPool,
    mailing_id: Uuid,
    client_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM mailing_recipients WHERE mailing_id = $1 AND client_id = $2",
    )
    .bind(mailing_id)
    .bind(client_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn list_recipients(pool: &PgPool, mailing_id: Uuid) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT c.* FROM clients c
         JOIN mailing_recipients mr ON mr.client_id = c.id
         WHERE mr.mailing_id = $1
         ORDER BY c.created_at DESC",
    )
    .bind(mailing_id)
    .fetch_all(pool)
    .await
}
