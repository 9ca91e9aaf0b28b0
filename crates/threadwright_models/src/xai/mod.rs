//! xAI API integration.

mod client;
mod dto;

pub use client::{DEFAULT_XAI_BASE_URL, XaiClient};
pub use dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse,
};
