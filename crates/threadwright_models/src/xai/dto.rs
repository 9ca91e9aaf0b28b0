//! xAI API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use threadwright_core::{CompletionRequest, ImageRequest};
use threadwright_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role ("user", "assistant", "system")
    role: String,
    /// Message content
    #[serde(default)]
    content: String,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions request body.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation, here always a single user message
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    temperature: f32,
    /// Maximum output tokens
    max_tokens: u32,
}

impl From<&CompletionRequest> for ChatCompletionRequest {
    fn from(req: &CompletionRequest) -> Self {
        Self {
            model: req.model().clone(),
            messages: vec![ChatMessage::user(req.prompt().as_str())],
            temperature: *req.temperature(),
            max_tokens: *req.max_tokens(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat-completions response body (fields the bot reads).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Text of the first choice.
    ///
    /// # Errors
    ///
    /// Returns `EmptyResponse` when there are no choices or the content is blank.
    pub fn into_text(self) -> ModelsResult<String> {
        let content = self
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ModelsError::new(ModelsErrorKind::EmptyResponse("no choices".to_string()))
            })?;

        if content.trim().is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyResponse(
                "blank message content".to_string(),
            )));
        }
        Ok(content)
    }
}

/// Image-generations request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ImageGenerationRequest {
    /// Model identifier
    model: String,
    /// Image prompt
    prompt: String,
    /// Number of images
    n: u32,
    /// Requested size
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    /// Always "url": the bot downloads the image itself
    response_format: String,
}

impl From<&ImageRequest> for ImageGenerationRequest {
    fn from(req: &ImageRequest) -> Self {
        Self {
            model: req.model().clone(),
            prompt: req.prompt().clone(),
            n: *req.count(),
            size: req.size().clone(),
            response_format: "url".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ImageData {
    #[serde(default)]
    url: Option<String>,
}

/// Image-generations response body (fields the bot reads).
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

impl ImageGenerationResponse {
    /// URL of the first generated image.
    ///
    /// # Errors
    ///
    /// Returns `EmptyResponse` when no image URL is present.
    pub fn into_url(self) -> ModelsResult<String> {
        self.data
            .into_iter()
            .find_map(|d| d.url.filter(|u| !u.is_empty()))
            .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse("no image url".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_shape() {
        let req = CompletionRequest::builder()
            .model("grok-3")
            .prompt("Write about grid storage")
            .temperature(0.9)
            .max_tokens(2500)
            .build()
            .unwrap();
        let json = serde_json::to_value(ChatCompletionRequest::from(&req)).unwrap();

        assert_eq!(json["model"], "grok-3");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Write about grid storage");
        assert_eq!(json["max_tokens"], 2500);
    }

    #[test]
    fn test_chat_response_text() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"A|||B"}}]}"#;
        let resp: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.into_text().unwrap(), "A|||B");
    }

    #[test]
    fn test_chat_response_without_choices_is_empty() {
        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = resp.into_text().unwrap_err();
        assert!(matches!(err.kind, ModelsErrorKind::EmptyResponse(_)));
    }

    #[test]
    fn test_image_request_omits_missing_size() {
        let req = ImageRequest::builder()
            .model("grok-2-image")
            .prompt("neon racks")
            .build()
            .unwrap();
        let json = serde_json::to_value(ImageGenerationRequest::from(&req)).unwrap();

        assert_eq!(json["n"], 1);
        assert_eq!(json["response_format"], "url");
        assert!(json.get("size").is_none());
    }

    #[test]
    fn test_image_response_url() {
        let body = r#"{"data":[{"url":"https://imgen.x.ai/a.jpg","revised_prompt":"..."}]}"#;
        let resp: ImageGenerationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.into_url().unwrap(), "https://imgen.x.ai/a.jpg");

        let empty: ImageGenerationResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(empty.into_url().is_err());
    }
}
