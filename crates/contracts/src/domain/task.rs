use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Задача менеджера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub subject: String,
    /// open | in_progress | done | blocked
    pub status: String,
    /// low | normal | high
    pub priority: String,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// Название связанной сущности (клиент или сделка)
    pub related_to: Option<String>,
    pub created_at: DateTime<Utc>,
}
