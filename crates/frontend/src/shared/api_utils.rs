//! Построение URL и авторизованные запросы к API

use gloo_net::http::Request;

use crate::system::auth::storage;

/// Базовый адрес API. Фронтенд раздается dev-сервером на своем порту,
/// бэкенд всегда слушает 3000 на том же хосте.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный URL запроса из пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Авторизованный GET с разбором JSON ответа
pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let token = storage::get_access_token().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
