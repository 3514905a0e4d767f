use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Сделка
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: Uuid,
    pub title: String,
    /// Вложенная ссылка на клиента: в строках таблицы доступна как
    /// "customer.name" / "customer.id"
    pub customer: DealCustomer,
    pub amount: f64,
    /// new | negotiation | won | lost
    pub stage: String,
    /// Вероятность закрытия, 0..100
    pub probability: u8,
    pub expected_close: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealCustomer {
    pub id: Uuid,
    pub name: String,
}
