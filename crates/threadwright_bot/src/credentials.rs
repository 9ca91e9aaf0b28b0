//! Secrets from the environment.

use threadwright_error::{ConfigError, ThreadwrightResult};
use threadwright_social::XCredentials;
use tracing::debug;

/// xAI API key.
pub const XAI_API_KEY: &str = "XAI_API_KEY";
/// X app bearer token.
pub const TW_BEARER_TOKEN: &str = "TW_BEARER_TOKEN";
/// X consumer key.
pub const TW_CONSUMER_KEY: &str = "TW_CONSUMER_KEY";
/// X consumer secret.
pub const TW_CONSUMER_SECRET: &str = "TW_CONSUMER_SECRET";
/// X user access token.
pub const TW_ACCESS_TOKEN: &str = "TW_ACCESS_TOKEN";
/// X user access token secret.
pub const TW_ACCESS_TOKEN_SECRET: &str = "TW_ACCESS_TOKEN_SECRET";

const REQUIRED: [&str; 6] = [
    XAI_API_KEY,
    TW_BEARER_TOKEN,
    TW_CONSUMER_KEY,
    TW_CONSUMER_SECRET,
    TW_ACCESS_TOKEN,
    TW_ACCESS_TOKEN_SECRET,
];

/// Every secret a run needs.
///
/// The bearer token is required and validated, but writes use OAuth 1.0a
/// user context only.
#[derive(Clone)]
pub struct Credentials {
    xai_api_key: String,
    bearer_token: String,
    x: XCredentials,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("xai_api_key", &"<redacted>")
            .field("bearer_token", &"<redacted>")
            .field("x", &self.x)
            .finish()
    }
}

impl Credentials {
    /// Read every secret from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing or empty variable.
    pub fn from_env() -> ThreadwrightResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every secret through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming every missing or empty variable.
    pub fn from_lookup<F>(lookup: F) -> ThreadwrightResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(REQUIRED.len());
        let mut missing = Vec::new();
        for name in REQUIRED {
            match lookup(name).filter(|v| !v.trim().is_empty()) {
                Some(value) => values.push(value),
                None => missing.push(name),
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::new(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            ))
            .into());
        }

        debug!("All credentials present");
        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        let xai_api_key = next();
        let bearer_token = next();
        let x = XCredentials::new(next(), next(), next(), next());
        Ok(Self {
            xai_api_key,
            bearer_token,
            x,
        })
    }

    /// xAI API key.
    pub fn xai_api_key(&self) -> &str {
        &self.xai_api_key
    }

    /// X app bearer token.
    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    /// OAuth 1.0a user-context credentials.
    pub fn x(&self) -> &XCredentials {
        &self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_present() {
        let vars = env(&[
            (XAI_API_KEY, "xai"),
            (TW_BEARER_TOKEN, "bearer"),
            (TW_CONSUMER_KEY, "ck"),
            (TW_CONSUMER_SECRET, "cs"),
            (TW_ACCESS_TOKEN, "at"),
            (TW_ACCESS_TOKEN_SECRET, "ats"),
        ]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(creds.xai_api_key(), "xai");
        assert_eq!(creds.bearer_token(), "bearer");
        assert_eq!(creds.x().consumer_key(), "ck");
        assert_eq!(creds.x().access_token_secret(), "ats");
        assert!(!format!("{:?}", creds).contains("bearer\""));
    }

    #[test]
    fn test_every_missing_name_is_reported() {
        let vars = env(&[
            (XAI_API_KEY, "xai"),
            (TW_CONSUMER_KEY, "  "),
            (TW_ACCESS_TOKEN, "at"),
        ]);
        let err = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        let message = format!("{}", err);

        for name in [
            TW_BEARER_TOKEN,
            TW_CONSUMER_KEY,
            TW_CONSUMER_SECRET,
            TW_ACCESS_TOKEN_SECRET,
        ] {
            assert!(
                message.contains(name),
                "{} not reported in {}",
                name,
                message
            );
        }
        assert!(!message.contains(XAI_API_KEY));
    }
}
