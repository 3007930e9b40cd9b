//! HTTP client for the classification endpoint.

use reqwest::multipart;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use super::model::{Classification, ClassifyRequest, ErrorBody, TextBody};
use crate::error::{Error, Result};

/// Endpoint path, relative to the configured base URL.
const PROCESS_EMAIL_PATH: &str = "/api/process-email";

/// Capacity of the request-failure broadcast feed.
const FAILURE_FEED_CAPACITY: usize = 16;

/// Event published on the failure feed whenever a request fails.
///
/// Subscribers receive these independently of the error returned to the
/// caller, so a UI layer can surface a generic notification without
/// correlating it with the originating submission.
#[derive(Debug, Clone)]
pub struct RequestFailed {
    /// HTTP status, when the backend answered at all.
    pub status: Option<u16>,
    /// Human-readable failure description.
    pub message: String,
}

/// Client for the classification backend.
#[derive(Debug, Clone)]
pub struct ClassifyClient {
    http: reqwest::Client,
    base_url: String,
    failures: broadcast::Sender<RequestFailed>,
}

impl ClassifyClient {
    /// Creates a client for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let (failures, _) = broadcast::channel(FAILURE_FEED_CAPACITY);
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            failures,
        }
    }

    /// Subscribes to the request-failure feed.
    ///
    /// Every failed [`classify`](Self::classify) call publishes one event.
    /// Events sent while no subscriber exists are dropped.
    #[must_use]
    pub fn failures(&self) -> broadcast::Receiver<RequestFailed> {
        self.failures.subscribe()
    }

    /// Sends one classification request and decodes the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the request could not complete,
    /// [`Error::Http`] for non-success statuses (message from the body's
    /// `detail` field when present), and [`Error::Parse`] when a success
    /// body is not the expected JSON shape.
    pub async fn classify(&self, request: ClassifyRequest) -> Result<Classification> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            warn!("classification request failed: {e}");
            self.publish_failure(e);
        }
        result
    }

    async fn send(&self, request: ClassifyRequest) -> Result<Classification> {
        let url = format!("{}{PROCESS_EMAIL_PATH}", self.base_url);

        let builder = match request {
            ClassifyRequest::Text(text) => {
                debug!("submitting classification request (text, {} bytes)", text.len());
                self.http.post(&url).json(&TextBody {
                    email_content: &text,
                })
            }
            ClassifyRequest::File { name, contents } => {
                debug!("submitting classification request (file {name:?})");
                let part = multipart::Part::text(contents).file_name(name);
                let form = multipart::Form::new().part("file", part);
                self.http.post(&url).multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if (200..300).contains(&status) {
            decode_success(&body)
        } else {
            Err(decode_failure(status, &body))
        }
    }

    /// Publishes a failure event; best effort, no subscribers is fine.
    fn publish_failure(&self, error: &Error) {
        let _ = self.failures.send(RequestFailed {
            status: error.status(),
            message: error.to_string(),
        });
    }
}

/// Decodes a 2xx response body into a [`Classification`].
fn decode_success(body: &str) -> Result<Classification> {
    Ok(serde_json::from_str(body)?)
}

/// Maps a non-2xx response to an [`Error::Http`].
///
/// Prefers the backend's `detail` field; an unparseable or detail-less
/// body falls back to a status-coded message.
fn decode_failure(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| format!("HTTP error: {status}"));
    Error::Http { status, message }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let c = decode_success(r#"{"category":"Produtivo","response":"R"}"#).unwrap();
        assert_eq!(c.category, "Produtivo");
        assert_eq!(c.response, "R");
    }

    #[test]
    fn test_decode_success_rejects_wrong_shape() {
        assert!(matches!(
            decode_success(r#"{"category":"Produtivo"}"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(decode_success("not json"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_decode_failure_uses_detail() {
        let e = decode_failure(400, r#"{"detail":"bad input"}"#);
        assert_eq!(e.to_string(), "bad input");
        assert_eq!(e.status(), Some(400));
    }

    #[test]
    fn test_decode_failure_without_detail_uses_status() {
        let e = decode_failure(502, "<html>gateway</html>");
        assert_eq!(e.to_string(), "HTTP error: 502");

        let e = decode_failure(500, "{}");
        assert_eq!(e.to_string(), "HTTP error: 500");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ClassifyClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_failure_feed_receives_published_errors() {
        let client = ClassifyClient::new("http://localhost:8000");
        let mut rx = client.failures();

        client.publish_failure(&Error::Http {
            status: 400,
            message: "bad input".to_string(),
        });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.status, Some(400));
        assert_eq!(event.message, "bad input");
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let client = ClassifyClient::new("http://localhost:8000");
        client.publish_failure(&Error::EmptyInput);
    }
}
