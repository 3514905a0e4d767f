use contracts::api::ApiEnvelope;
use contracts::domain::deal::Deal;

use crate::shared::api_utils::get_json;

/// Загрузка списка сделок текущего тенанта
pub async fn fetch_deals() -> Result<Vec<Deal>, String> {
    let envelope: ApiEnvelope<Deal> = get_json("/api/crm/deals").await?;
    Ok(envelope.data)
}
