use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "mailing_period", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MailingPeriod {
    Daily,
    Weekly,
    Monthly,
}

/// Lifecycle of a mailing. Transitions are one-way:
/// `Created` -> `Started` -> `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "mailing_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MailingStatus {
    Created,
    Started,
    Completed,
}

impl MailingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MailingStatus::Created => "created",
            MailingStatus::Started => "started",
            MailingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Mailing {
    pub id: Uuid,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub period: MailingPeriod,
    pub status: MailingStatus,
    pub is_active: bool,
    pub message_id: Uuid,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
