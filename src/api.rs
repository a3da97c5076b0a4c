//! Blocking HTTP client for the notes backend.
//!
//! Calls run on the background executor; each method builds its own short
//! client so a wedged request cannot hold state across calls.

use crate::note::Note;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:5000/api/notes";
const HTTP_USER_AGENT: &str = concat!("kNotes/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// A backend call failure, already reduced to the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error body the backend returns on 4xx/5xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct PinBody {
    pinned: bool,
}

#[derive(Debug, Clone)]
pub struct NotesApi {
    base_url: String,
}

impl NotesApi {
    pub fn from_env() -> Self {
        let base_url = std::env::var("KNOTES_API_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { base_url }
    }

    fn client(&self) -> ApiResult<Client> {
        Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(HTTP_USER_AGENT)
            .build()
            .map_err(|err| ApiError {
                message: format!("failed to create http client: {err}"),
            })
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    pub fn list(&self) -> ApiResult<Vec<Note>> {
        let response = self
            .client()?
            .get(&self.base_url)
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }

    pub fn create(&self, title: &str, content: &str) -> ApiResult<Note> {
        let response = self
            .client()?
            .post(&self.base_url)
            .json(&json!({ "title": title, "content": content }))
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }

    pub fn update(&self, id: &str, title: &str, content: &str) -> ApiResult<Note> {
        let response = self
            .client()?
            .put(self.note_url(id))
            .json(&json!({ "title": title, "content": content }))
            .send()
            .map_err(transport_error)?;
        parse_json(response)
    }

    pub fn delete(&self, id: &str) -> ApiResult<()> {
        let response = self
            .client()?
            .delete(self.note_url(id))
            .send()
            .map_err(transport_error)?;
        check_status(response).map(|_| ())
    }

    /// PATCHes the pin flag and returns the value the server settled on.
    pub fn set_pinned(&self, id: &str, pinned: bool) -> ApiResult<bool> {
        let response = self
            .client()?
            .patch(format!("{}/pin", self.note_url(id)))
            .json(&json!({ "pinned": pinned }))
            .send()
            .map_err(transport_error)?;
        parse_json::<PinBody>(response).map(|body| body.pinned)
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError {
        message: err.to_string(),
    }
}

/// Turns a non-2xx response into the backend's own error message when the
/// body carries `{"error": ...}`, otherwise into a status line.
fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(ApiError {
        message: extract_error_message(status.as_u16(), &body),
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    check_status(response)?.json::<T>().map_err(|err| ApiError {
        message: format!("failed to parse server response: {err}"),
    })
}

fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let message = parsed.error.trim();
        if !message.is_empty() {
            return message.to_string();
        }
    }

    format!("request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_default_and_override() {
        let api = NotesApi {
            base_url: DEFAULT_API_URL.to_string(),
        };
        assert_eq!(api.note_url("65f0"), "http://localhost:5000/api/notes/65f0");
    }

    #[test]
    fn error_body_message_wins() {
        assert_eq!(
            extract_error_message(400, r#"{"error": "Title and content required"}"#),
            "Title and content required"
        );
    }

    #[test]
    fn blank_or_malformed_error_body_falls_back_to_status() {
        assert_eq!(
            extract_error_message(500, r#"{"error": "  "}"#),
            "request failed with status 500"
        );
        assert_eq!(
            extract_error_message(404, "<html>not found</html>"),
            "request failed with status 404"
        );
        assert_eq!(extract_error_message(502, ""), "request failed with status 502");
    }
}
