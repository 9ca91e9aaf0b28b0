//! X API client.

use super::dto::{CreatePostBody, CreatePostResponse, MediaUploadResponse};
use super::oauth::{OAuth1Signer, XCredentials};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use threadwright_core::{MediaHandle, PostId, PostRequest};
use threadwright_error::{
    SocialError, SocialErrorKind, SocialResult, StorageError, StorageErrorKind,
    ThreadwrightResult,
};
use threadwright_interface::{MediaUploader, SocialPlatform};
use threadwright_rate_limit::retry_after_secs;
use tracing::{debug, error, info, instrument, warn};

/// Root of the v2 API.
pub const DEFAULT_X_API_BASE: &str = "https://api.twitter.com/2";

/// Root of the v1.1 media upload API.
pub const DEFAULT_X_UPLOAD_BASE: &str = "https://upload.twitter.com/1.1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// API roots, overridable for testing against a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XEndpoints {
    /// v2 root (posts)
    pub api_base: String,
    /// v1.1 upload root (media)
    pub upload_base: String,
}

impl Default for XEndpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_X_API_BASE.to_string(),
            upload_base: DEFAULT_X_UPLOAD_BASE.to_string(),
        }
    }
}

impl XEndpoints {
    fn tweets_url(&self) -> String {
        format!("{}/tweets", self.api_base.trim_end_matches('/'))
    }

    fn media_upload_url(&self) -> String {
        format!(
            "{}/media/upload.json",
            self.upload_base.trim_end_matches('/')
        )
    }
}

/// X client implementing media upload and post creation.
///
/// All requests use OAuth 1.0a user context.
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    signer: OAuth1Signer,
    endpoints: XEndpoints,
}

impl XClient {
    /// Creates a client against the public API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: XCredentials) -> SocialResult<Self> {
        Self::with_endpoints(credentials, XEndpoints::default(), DEFAULT_TIMEOUT)
    }

    /// Creates a client with explicit API roots and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_endpoints(
        credentials: XCredentials,
        endpoints: XEndpoints,
        timeout: Duration,
    ) -> SocialResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SocialError::new(SocialErrorKind::Http(e.to_string())))?;
        debug!(?endpoints, "Creating X client");
        Ok(Self {
            client,
            signer: OAuth1Signer::new(credentials),
            endpoints,
        })
    }

    /// Turn a response into a parsed body or a classified error.
    async fn read_json<T: DeserializeOwned>(response: Response) -> SocialResult<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(|e| {
                error!(error = ?e, "Failed to parse X response");
                SocialError::new(SocialErrorKind::ResponseParsing(e.to_string()))
            });
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            let wait = retry_after_secs(response.headers(), now);
            warn!(retry_after_secs = ?wait, "Rate limited by X");
            return Err(SocialError::new(SocialErrorKind::RateLimited {
                retry_after_secs: wait,
            }));
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "X API returned error");
        Err(status_error(status, body))
    }
}

/// Map a non-success, non-429 status to an error kind.
fn status_error(status: StatusCode, body: String) -> SocialError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SocialError::new(SocialErrorKind::Unauthorized(format!("{}: {}", status, body)))
        }
        _ => SocialError::new(SocialErrorKind::Api {
            status: status.as_u16(),
            message: body,
        }),
    }
}

fn send_error(e: reqwest::Error) -> SocialError {
    error!(error = ?e, "Failed to send request to X");
    SocialError::new(SocialErrorKind::Http(format!("Request failed: {}", e)))
}

#[async_trait]
impl MediaUploader for XClient {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn upload_media(&self, path: &Path) -> ThreadwrightResult<MediaHandle> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media.jpg".to_string());
        debug!(bytes = bytes.len(), "Uploading media");

        let url = self.endpoints.media_upload_url();
        let auth = self.signer.authorization("POST", &url, &[])?;
        let form = Form::new().part("media", Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth)
            .multipart(form)
            .send()
            .await
            .map_err(send_error)?;

        let uploaded: MediaUploadResponse = Self::read_json(response).await?;
        if uploaded.media_id_string.trim().is_empty() {
            return Err(SocialError::new(SocialErrorKind::MediaUpload(
                "upload accepted without a media id".to_string(),
            ))
            .into());
        }
        info!(media_id = %uploaded.media_id_string, "Uploaded media");
        Ok(MediaHandle(uploaded.media_id_string))
    }
}

#[async_trait]
impl SocialPlatform for XClient {
    #[instrument(skip(self, req), fields(
        chars = req.text().chars().count(),
        reply_to = ?req.reply_to(),
        has_media = req.media().is_some(),
    ))]
    async fn post(&self, req: &PostRequest) -> ThreadwrightResult<PostId> {
        let url = self.endpoints.tweets_url();
        let auth = self.signer.authorization("POST", &url, &[])?;

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth)
            .json(&CreatePostBody::from(req))
            .send()
            .await
            .map_err(send_error)?;

        let created: CreatePostResponse = Self::read_json(response).await?;
        debug!(id = %created.data.id, "Created post");
        Ok(PostId(created.data.id))
    }

    fn platform_name(&self) -> &str {
        "x"
    }
}
