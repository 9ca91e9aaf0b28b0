//! X (Twitter) platform integration.

mod client;
mod dto;
mod oauth;

pub use client::{DEFAULT_X_API_BASE, DEFAULT_X_UPLOAD_BASE, XClient, XEndpoints};
pub use dto::CreatePostBody;
pub use oauth::{OAuth1Signer, XCredentials};
