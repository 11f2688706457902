use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Attempt;

/// Append-only: one row per dispatch attempt, stamped with the database
/// clock. Duplicates are allowed by contract.
pub async fn append(
    pool: &PgPool,
    mailing_id: Uuid,
    succeeded: bool,
) -> Result<Attempt, sqlx::Error> {
    sqlx::query_as::<_, Attempt>(
        "INSERT INTO attempts (mailing_id, succeeded) VALUES ($1, $2) RETURNING *",
    )
    .bind(mailing_id)
    .bind(succeeded)
    .fetch_one(pool)
    .await
}

pub async fn list_by_mailing(pool: &PgPool, mailing_id: Uuid) -> Result<Vec<Attempt>, sqlx::Error> {
    sqlx::query_as::<_, Attempt>(
        "SELECT * FROM attempts WHERE mailing_id = $1 ORDER BY attempted_at DESC",
    )
    .bind(mailing_id)
    .fetch_all(pool)
    .await
}
