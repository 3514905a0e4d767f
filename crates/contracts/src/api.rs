use serde::{Deserialize, Serialize};

/// Стандартный конверт списочных ответов API: `{ "data": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Vec<T>,
}
