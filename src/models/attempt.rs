use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Attempt {
    pub id: Uuid,
    pub mailing_id: Uuid,
    pub succeeded: bool,
    pub attempted_at: DateTime<Utc>,
}
