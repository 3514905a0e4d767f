use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Лид (потенциальный клиент)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    /// Источник: site | referral | cold_call | advert
    pub source: String,
    /// new | in_progress | qualified | rejected
    pub status: String,
    /// Скоринговая оценка, 0..100
    pub score: u32,
    pub created_at: DateTime<Utc>,
}
