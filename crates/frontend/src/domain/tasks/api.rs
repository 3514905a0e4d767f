use contracts::api::ApiEnvelope;
use contracts::domain::task::Task;

use crate::shared::api_utils::get_json;

/// Загрузка списка задач текущего тенанта
pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let envelope: ApiEnvelope<Task> = get_json("/api/crm/tasks").await?;
    Ok(envelope.data)
}
