//! Social platform integration for threadwright.
//!
//! # Platform Support
//!
//! - `x` - X (Twitter): v1.1 media upload and v2 post creation, signed with
//!   OAuth 1.0a user context.
//!
//! Also provides [`HttpAssetFetcher`], the timeout-bounded downloader used to
//! pull generated images before upload.

#![warn(missing_docs)]

mod fetch;
mod x;

pub use fetch::HttpAssetFetcher;
pub use x::{
    CreatePostBody, DEFAULT_X_API_BASE, DEFAULT_X_UPLOAD_BASE, OAuth1Signer, XClient,
    XCredentials, XEndpoints,
};
