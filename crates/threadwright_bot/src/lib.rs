//! The threadwright content pipeline.
//!
//! One [`Pipeline::run`] picks an unused topic, generates a thread and an
//! illustration with xAI, stages the image onto X, and posts the thread as a
//! reply chain. Each step sits behind a trait from `threadwright_interface`,
//! so tests drive the same code with in-memory collaborators.
//!
//! Runs are sequential and one store must not be shared by two concurrent
//! processes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod credentials;
mod image;
mod pipeline;
mod publisher;
mod selector;
mod stager;
mod thread;

pub use config::{
    AppConfig, DatabaseSettings, ImageSettings, StagerSettings, TextSettings, TopicSettings,
    XSettings, XaiSettings,
};
pub use credentials::{
    Credentials, TW_ACCESS_TOKEN, TW_ACCESS_TOKEN_SECRET, TW_BEARER_TOKEN, TW_CONSUMER_KEY,
    TW_CONSUMER_SECRET, XAI_API_KEY,
};
pub use image::IllustrationGenerator;
pub use pipeline::{DryRun, Pipeline, RunOutcome};
pub use publisher::{PublishOutcome, Publisher};
pub use selector::TopicSelector;
pub use stager::MediaStager;
pub use thread::ThreadGenerator;
