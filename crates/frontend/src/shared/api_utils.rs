//! API utilities for frontend-backend communication
//!
//! Все запросы идут на backend на порту 3000 того же хоста. Ошибки
//! возвращаются строкой для показа пользователю; backend кладёт текст
//! ошибки в поле `error` JSON-ответа.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Get the base URL for API requests
///
/// Returns e.g. "http://localhost:3000", or an empty string when there is
/// no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Ответ `{"id": "..."}` на upsert и команды, создающие записи
#[derive(Debug, Clone, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Текст ошибки из тела ответа, иначе "HTTP <status>"
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

async fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_text(path: &str) -> Result<String, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response)
        .await?
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST без тела ответа (200/201/204)
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("{e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// POST команды без тела запроса, возвращающей `{"id"}`
pub async fn post_command(path: &str) -> Result<IdResponse, String> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response)
        .await?
        .json::<IdResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST без тела запроса и без тела ответа (заполнение тестовыми данными)
pub async fn post_empty(path: &str) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(response).await.map(|_| ())
}

/// Открыть печатную форму в новом окне браузера
pub fn open_in_new_window(path: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .open_with_url_and_target(&api_url(path), "_blank")
        .map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(400, r#"{"error":"Validation failed: Код пуст"}"#),
            "Validation failed: Код пуст"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(500, "oops"), "HTTP 500");
        assert_eq!(error_message(404, r#"{"error":""}"#), "HTTP 404");
    }
}
