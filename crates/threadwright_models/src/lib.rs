//! Generation provider integrations for threadwright.
//!
//! Currently one provider: xAI, reached through its OpenAI-compatible
//! chat-completions endpoint for text and its image-generations endpoint for
//! illustrations. [`XaiClient`] implements both
//! [`TextGenerator`](threadwright_interface::TextGenerator) and
//! [`ImageGenerator`](threadwright_interface::ImageGenerator).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod xai;

pub use xai::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse, XaiClient, DEFAULT_XAI_BASE_URL,
};
