use contracts::api::ApiEnvelope;
use contracts::domain::customer::Customer;

use crate::shared::api_utils::get_json;

/// Загрузка списка клиентов текущего тенанта
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let envelope: ApiEnvelope<Customer> = get_json("/api/crm/customers").await?;
    Ok(envelope.data)
}
