//! Mock collaborators shared by the pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use threadwright_bot::{ImageSettings, TextSettings};
use threadwright_core::{
    CompletionRequest, ImageRequest, ImageUrl, MediaHandle, PostId, PostRequest, Topic,
};
use threadwright_error::{
    DatabaseError, DatabaseErrorKind, HttpError, ModelsError, ModelsErrorKind, SocialError,
    SocialErrorKind, ThreadwrightResult,
};
use threadwright_interface::{
    AssetFetcher, ImageGenerator, MediaUploader, SocialPlatform, TextGenerator, UsedTopics,
};
use threadwright_rate_limit::RetryPolicy;

pub fn text_settings() -> TextSettings {
    TextSettings {
        model: "grok-3".to_string(),
        temperature: 0.9,
        max_tokens: 2500,
        delimiter: "|||".to_string(),
        char_limit: 280,
    }
}

pub fn image_settings(retry: RetryPolicy) -> ImageSettings {
    ImageSettings {
        enabled: true,
        model: "grok-2-image".to_string(),
        size: None,
        prompt_template: "Ultra-realistic cinematic scene: {topic}, neon lights".to_string(),
        retry,
    }
}

/// Used-topic set with a write counter.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: HashMap<Topic, i64>,
    pub writes: usize,
}

impl UsedTopics for MemoryStore {
    fn contains(&self, topic: &Topic) -> bool {
        self.rows.contains_key(topic)
    }

    fn mark_used(&mut self, topic: &Topic, now: i64) -> ThreadwrightResult<()> {
        self.writes += 1;
        self.rows.entry(topic.clone()).or_insert(now);
        Ok(())
    }
}

/// Used-topic set that cannot be written, like a read-only database file.
#[derive(Default)]
pub struct ReadOnlyStore {
    pub attempts: usize,
}

impl UsedTopics for ReadOnlyStore {
    fn contains(&self, _topic: &Topic) -> bool {
        false
    }

    fn mark_used(&mut self, _topic: &Topic, _now: i64) -> ThreadwrightResult<()> {
        self.attempts += 1;
        Err(DatabaseError::new(DatabaseErrorKind::Query(
            "attempt to write a readonly database".to_string(),
        )))?
    }
}

/// Text backend returning a canned response, or failing.
pub struct MockText {
    response: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockText {
    pub fn replying(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockText {
    async fn complete(&self, req: &CompletionRequest) -> ThreadwrightResult<String> {
        self.prompts.lock().unwrap().push(req.prompt().clone());
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ModelsError::new(ModelsErrorKind::Http("connection reset".into())).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Image backend that fails the first `failures` calls.
pub struct MockImages {
    failures: usize,
    calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl MockImages {
    pub fn succeeding() -> Self {
        Self::failing_first(0)
    }

    pub fn always_failing() -> Self {
        Self::failing_first(usize::MAX)
    }

    pub fn failing_first(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for MockImages {
    async fn generate_image(&self, req: &ImageRequest) -> ThreadwrightResult<ImageUrl> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(req.prompt().clone());
        if call < self.failures {
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
            .into());
        }
        Ok(ImageUrl("https://imgen.example/cybercab.jpg".to_string()))
    }
}

/// Asset fetcher returning fixed bytes, an error, or hanging.
pub struct MockFetcher {
    body: Option<Vec<u8>>,
    delay: Duration,
    pub calls: AtomicUsize,
}

impl MockFetcher {
    pub fn returning(body: &[u8]) -> Self {
        Self {
            body: Some(body.to_vec()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            body: Some(b"late".to_vec()),
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AssetFetcher for MockFetcher {
    async fn fetch(&self, _url: &ImageUrl) -> ThreadwrightResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.body
            .clone()
            .ok_or_else(|| HttpError::new("download returned 404 Not Found").into())
    }
}

/// Uploader that records each path and whether the file existed at upload time.
pub struct MockUploader {
    fail: bool,
    pub seen: Mutex<Vec<(PathBuf, bool, Vec<u8>)>>,
}

impl MockUploader {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.0.clone())
            .collect()
    }
}

#[async_trait]
impl MediaUploader for MockUploader {
    async fn upload_media(&self, path: &Path) -> ThreadwrightResult<MediaHandle> {
        let contents = std::fs::read(path).unwrap_or_default();
        self.seen
            .lock()
            .unwrap()
            .push((path.to_path_buf(), path.exists(), contents));
        if self.fail {
            return Err(SocialError::new(SocialErrorKind::MediaUpload("rejected".into())).into());
        }
        Ok(MediaHandle("m-1".to_string()))
    }
}

/// How the mock platform answers a given call (1-based).
#[derive(Clone, Copy)]
pub enum Answer {
    Ok,
    Fail,
    RateLimited(Option<u64>),
}

/// Platform assigning ids 100, 101, ... and following a script of answers.
pub struct MockPlatform {
    script: Vec<Answer>,
    next_id: AtomicUsize,
    pub requests: Mutex<Vec<PostRequest>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::scripted(Vec::new())
    }

    /// Answers for calls 1..=n; later calls succeed.
    pub fn scripted(script: Vec<Answer>) -> Self {
        Self {
            script,
            next_id: AtomicUsize::new(100),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> PostRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl SocialPlatform for MockPlatform {
    async fn post(&self, req: &PostRequest) -> ThreadwrightResult<PostId> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len()
        };
        match self.script.get(call - 1).copied().unwrap_or(Answer::Ok) {
            Answer::Ok => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                Ok(PostId(id.to_string()))
            }
            Answer::Fail => Err(SocialError::new(SocialErrorKind::Api {
                status: 403,
                message: "duplicate content".to_string(),
            })
            .into()),
            Answer::RateLimited(retry_after_secs) => {
                Err(SocialError::new(SocialErrorKind::RateLimited { retry_after_secs }).into())
            }
        }
    }

    fn platform_name(&self) -> &str {
        "mock"
    }
}
