use std::time::Duration;

use serde::Deserialize;

/// HTTP client for the assistant service.
pub struct AssistantClient {
    client: reqwest::Client,
    base_url: String,
}

/// Successful answer returned by the assistant's `/chat` endpoint.
///
/// `language` and `category` are classification tags the assistant may or
/// may not supply; callers apply their own defaults when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantReply {
    /// The answer text.
    pub response: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Errors from the assistant relay layer.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the body
    /// could not be decoded as the expected JSON shape.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The assistant returned a non-2xx status code.
    #[error("assistant API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for server-side logging.
        body: String,
    },
}

impl AssistantClient {
    /// Create a client for an assistant instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://host:8000`.
    /// * `timeout` - Upper bound on each relay call, connect time included.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Relay one query to the assistant.
    ///
    /// Sends `POST /chat` with the message JSON and the caller's bearer
    /// token. Exactly one attempt is made; retry policy belongs to the
    /// caller's client, not here.
    pub async fn ask(
        &self,
        bearer_token: &str,
        message: &str,
    ) -> Result<AssistantReply, AssistantError> {
        let body = serde_json::json!({ "message": message });

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .bearer_auth(bearer_token)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`AssistantError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AssistantError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response(response: reqwest::Response) -> Result<AssistantReply, AssistantError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<AssistantReply>().await?)
    }
}
