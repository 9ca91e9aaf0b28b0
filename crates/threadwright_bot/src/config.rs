//! Layered runtime configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`threadwright.toml` shipped with the crate)
//! 2. `~/.config/threadwright/threadwright.toml`
//! 3. `./threadwright.toml`
//! 4. An explicit file passed on the command line
//! 5. `THREADWRIGHT__<SECTION>__<KEY>` environment variables
//!
//! Secrets never come from these files; see [`Credentials`](crate::Credentials).

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use threadwright_error::{ConfigError, ThreadwrightError, ThreadwrightResult};
use threadwright_rate_limit::{Pacing, RetryPolicy};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../threadwright.toml");

/// Topic store location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file path
    pub path: PathBuf,
}

/// Candidate topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSettings {
    /// Candidate topics, in configuration order
    pub pool: Vec<String>,
    /// Used when every pool entry has been consumed
    pub fallback: String,
}

/// Thread text generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Separator the model is told to put between posts
    pub delimiter: String,
    /// Platform limit on characters per post
    pub char_limit: usize,
}

/// Illustration generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSettings {
    /// Skip image generation entirely when false
    pub enabled: bool,
    /// Model identifier
    pub model: String,
    /// Requested size, e.g. `1024x1024`
    #[serde(default)]
    pub size: Option<String>,
    /// Prompt with a `{topic}` placeholder
    pub prompt_template: String,
    /// Retry policy for the generation call
    pub retry: RetryPolicy,
}

/// Image download and temporary storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagerSettings {
    /// Download timeout in seconds
    pub timeout_secs: u64,
    /// Directory for temporary files (system temp dir when unset)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl StagerSettings {
    /// Download timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// xAI endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XaiSettings {
    /// API root
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// X endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XSettings {
    /// v2 API root
    pub api_base: String,
    /// v1.1 upload root
    pub upload_base: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Complete runtime configuration.
///
/// # Example
///
/// ```no_run
/// use threadwright_bot::AppConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::load(None)?;
/// println!("{} topics in pool", config.topics.pool.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Topic store
    pub database: DatabaseSettings,
    /// Topic pool and fallback
    pub topics: TopicSettings,
    /// Thread generation
    pub text: TextSettings,
    /// Illustration generation
    pub image: ImageSettings,
    /// Image download and staging
    pub stager: StagerSettings,
    /// Posting pace and rate-limit handling
    pub publisher: Pacing,
    /// xAI endpoint
    pub xai: XaiSettings,
    /// X endpoints
    pub x: XSettings,
}

impl AppConfig {
    /// Load configuration with the full precedence chain.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is given but unreadable, or if the
    /// merged configuration does not parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> ThreadwrightResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/threadwright/threadwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("threadwright").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("THREADWRIGHT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay does not parse.
    pub fn from_toml_str(overlay: &str) -> ThreadwrightResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(overlay, FileFormat::Toml)))
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is invalid.
    pub fn bundled() -> ThreadwrightResult<Self> {
        Self::finish(Self::defaults())
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ThreadwrightResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ThreadwrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ThreadwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let config = AppConfig::bundled().unwrap();

        assert_eq!(config.topics.pool.len(), 10);
        assert!(config.topics.fallback.contains("news roundup"));
        assert_eq!(config.text.model, "grok-3");
        assert_eq!(config.text.max_tokens, 2500);
        assert_eq!(config.text.delimiter, "|||");
        assert_eq!(config.text.char_limit, 280);
        assert_eq!(config.image.model, "grok-2-image");
        assert!(config.image.prompt_template.contains("{topic}"));
        assert_eq!(config.image.retry, RetryPolicy::default());
        assert_eq!(config.stager.timeout(), Duration::from_secs(20));
        assert_eq!(config.publisher, Pacing::default());
        assert_eq!(config.database.path, PathBuf::from("topics.db"));
    }

    #[test]
    fn test_overlay_replaces_only_named_keys() {
        let config = AppConfig::from_toml_str(
            r#"
            [topics]
            pool = ["Grid-scale batteries"]

            [publisher]
            delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.topics.pool, vec!["Grid-scale batteries".to_string()]);
        assert!(config.topics.fallback.contains("news roundup"));
        assert_eq!(config.publisher.delay(), Duration::ZERO);
        assert_eq!(*config.publisher.rate_limit_retries(), 2);
    }

    #[test]
    fn test_invalid_overlay_is_config_error() {
        let err = AppConfig::from_toml_str("[text]\nmax_tokens = \"lots\"").unwrap_err();
        assert!(format!("{}", err).contains("configuration"));
    }
}
