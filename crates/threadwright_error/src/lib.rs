//! Error types for threadwright.
//!
//! This crate provides the foundation error types used throughout the threadwright workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use threadwright_error::{ThreadwrightResult, HttpError};
//!
//! fn fetch_data() -> ThreadwrightResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod http;
mod models;
mod social;
mod storage;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{ThreadwrightError, ThreadwrightErrorKind, ThreadwrightResult};
pub use http::HttpError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use social::{SocialError, SocialErrorKind, SocialResult};
pub use storage::{StorageError, StorageErrorKind};
