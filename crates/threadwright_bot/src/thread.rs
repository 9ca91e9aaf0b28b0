//! Thread text generation.

use crate::TextSettings;
use std::sync::Arc;
use threadwright_core::{CompletionRequest, Thread, Topic};
use threadwright_interface::TextGenerator;
use tracing::{error, info, instrument, warn};

/// Turns a topic into a thread with one text-generation call.
#[derive(Clone)]
pub struct ThreadGenerator {
    text: Arc<dyn TextGenerator>,
    settings: TextSettings,
}

impl std::fmt::Debug for ThreadGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThreadGenerator")
            .field("provider", &self.text.provider_name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl ThreadGenerator {
    /// Generator over `text` with the given model settings.
    pub fn new(text: Arc<dyn TextGenerator>, settings: TextSettings) -> Self {
        Self { text, settings }
    }

    /// The prompt sent for `topic`.
    pub fn prompt(&self, topic: &Topic) -> String {
        format!(
            r#"Write a viral 7-10 tweet X/Twitter thread about this exact topic:
"{topic}"

Tone: technical but exciting, for engineers + investors.
Rules:
- Separate each tweet with the string "{delimiter}" so it can be split easily.
- Start with a bold hook tweet.
- Keep every tweet under {limit} characters.
- Use real numbers and recent facts.
- End with a question to drive replies.
- Add 2-3 relevant emojis max per tweet.
- Do NOT number them (e.g. don't write "1/")."#,
            topic = topic,
            delimiter = self.settings.delimiter,
            limit = self.settings.char_limit,
        )
    }

    /// Generate the thread for `topic`.
    ///
    /// Any failure is logged and yields an empty thread; there is no retry.
    #[instrument(skip(self), fields(topic = %topic, model = %self.settings.model))]
    pub async fn generate(&self, topic: &Topic) -> Thread {
        let request = match CompletionRequest::builder()
            .model(self.settings.model.as_str())
            .prompt(self.prompt(topic))
            .temperature(self.settings.temperature)
            .max_tokens(self.settings.max_tokens)
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "Failed to build completion request");
                return Thread::default();
            }
        };

        let raw = match self.text.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Text generation failed");
                return Thread::default();
            }
        };

        let thread = Thread::from_delimited(&raw, &self.settings.delimiter);
        for (index, unit) in thread.units().iter().enumerate() {
            let chars = unit.char_count();
            if chars > self.settings.char_limit {
                warn!(
                    index,
                    chars,
                    limit = self.settings.char_limit,
                    "Post exceeds character limit"
                );
            }
        }
        info!(units = thread.len(), "Generated thread");
        thread
    }
}
