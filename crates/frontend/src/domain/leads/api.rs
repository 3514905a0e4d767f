use contracts::api::ApiEnvelope;
use contracts::domain::lead::Lead;

use crate::shared::api_utils::get_json;

/// Загрузка списка лидов текущего тенанта
pub async fn fetch_leads() -> Result<Vec<Lead>, String> {
    let envelope: ApiEnvelope<Lead> = get_json("/api/crm/leads").await?;
    Ok(envelope.data)
}
