//! xAI HTTP client.

use super::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use threadwright_core::{CompletionRequest, ImageRequest, ImageUrl};
use threadwright_error::{ModelsError, ModelsErrorKind, ModelsResult, ThreadwrightResult};
use threadwright_interface::{ImageGenerator, TextGenerator};
use tracing::{debug, error, instrument};

/// Public xAI API root.
pub const DEFAULT_XAI_BASE_URL: &str = "https://api.x.ai/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// xAI API client for chat completions and image generations.
#[derive(Clone)]
pub struct XaiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for XaiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XaiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl XaiClient {
    /// Creates a client against `base_url` (e.g. [`DEFAULT_XAI_BASE_URL`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> ModelsResult<Self> {
        Self::with_timeout(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Creating xAI client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> ModelsResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, path, "Failed to send request to xAI");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "xAI API returned error");
            return Err(status_error(status, body));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse xAI response");
            ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string()))
        })
    }
}

/// Map a non-success status to an error kind.
fn status_error(status: StatusCode, body: String) -> ModelsError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        ModelsError::new(ModelsErrorKind::RateLimit)
    } else {
        ModelsError::new(ModelsErrorKind::Api {
            status: status.as_u16(),
            message: body,
        })
    }
}

#[async_trait]
impl TextGenerator for XaiClient {
    #[instrument(skip(self, req), fields(provider = "xai", model = %req.model()))]
    async fn complete(&self, req: &CompletionRequest) -> ThreadwrightResult<String> {
        let body = ChatCompletionRequest::from(req);
        let response: ChatCompletionResponse = self.post_json("chat/completions", &body).await?;
        let text = response.into_text()?;
        debug!(chars = text.chars().count(), "Received completion");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "xai"
    }
}

#[async_trait]
impl ImageGenerator for XaiClient {
    #[instrument(skip(self, req), fields(provider = "xai", model = %req.model()))]
    async fn generate_image(&self, req: &ImageRequest) -> ThreadwrightResult<ImageUrl> {
        let body = ImageGenerationRequest::from(req);
        let response: ImageGenerationResponse =
            self.post_json("images/generations", &body).await?;
        let url = response.into_url()?;
        debug!(url = %url, "Received image url");
        Ok(ImageUrl(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_status_maps_to_rate_limit() {
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, String::new());
        assert_eq!(err.kind, ModelsErrorKind::RateLimit);
        assert!(err.kind.is_retryable());
    }

    #[test]
    fn test_client_error_is_not_retryable() {
        let err = status_error(StatusCode::UNAUTHORIZED, "bad key".to_string());
        assert_eq!(
            err.kind,
            ModelsErrorKind::Api {
                status: 401,
                message: "bad key".to_string()
            }
        );
        assert!(!err.kind.is_retryable());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = XaiClient::new("key", "https://api.x.ai/v1/").unwrap();
        assert_eq!(
            client.endpoint("chat/completions"),
            "https://api.x.ai/v1/chat/completions"
        );
        assert!(format!("{:?}", client).contains("<redacted>"));
    }

    #[test]
    fn test_provider_name() {
        let client = XaiClient::new("key", DEFAULT_XAI_BASE_URL).unwrap();
        assert_eq!(client.provider_name(), "xai");
    }
}
