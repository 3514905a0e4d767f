use contracts::api::ApiEnvelope;
use contracts::domain::contact::Contact;

use crate::shared::api_utils::get_json;

/// Загрузка списка контактных лиц текущего тенанта
pub async fn fetch_contacts() -> Result<Vec<Contact>, String> {
    let envelope: ApiEnvelope<Contact> = get_json("/api/crm/contacts").await?;
    Ok(envelope.data)
}
