//! Illustration generation retry bounds.

mod common;

use common::*;
use std::sync::Arc;
use std::time::Duration;
use threadwright_bot::IllustrationGenerator;
use threadwright_core::Topic;
use threadwright_rate_limit::RetryPolicy;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_always_failing_backend_gives_up_after_bound() {
    let images = Arc::new(MockImages::always_failing());
    let generator = IllustrationGenerator::new(
        images.clone(),
        image_settings(RetryPolicy::fixed(1, Duration::from_secs(2))),
    );

    let started = Instant::now();
    let url = generator.generate(&Topic::from("800V packs")).await;
    let elapsed = started.elapsed();

    assert_eq!(url, None);
    assert_eq!(images.calls(), 2);
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_millis(2100));
}

#[tokio::test(start_paused = true)]
async fn test_retry_bound_follows_policy() {
    let images = Arc::new(MockImages::always_failing());
    let generator = IllustrationGenerator::new(
        images.clone(),
        image_settings(RetryPolicy::fixed(3, Duration::from_millis(500))),
    );

    let started = Instant::now();
    assert!(generator.generate(&Topic::from("t")).await.is_none());
    assert_eq!(images.calls(), 4);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1500));
    assert!(elapsed < Duration::from_millis(1600));
}

#[tokio::test(start_paused = true)]
async fn test_success_is_not_retried() {
    let images = Arc::new(MockImages::succeeding());
    let generator =
        IllustrationGenerator::new(images.clone(), image_settings(RetryPolicy::default()));

    let started = Instant::now();
    let url = generator.generate(&Topic::from("t")).await;

    assert!(url.is_some());
    assert_eq!(images.calls(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_transient_failure_recovers_on_retry() {
    let images = Arc::new(MockImages::failing_first(1));
    let generator =
        IllustrationGenerator::new(images.clone(), image_settings(RetryPolicy::default()));

    assert!(generator.generate(&Topic::from("t")).await.is_some());
    assert_eq!(images.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_prompt_substitutes_topic() {
    let images = Arc::new(MockImages::succeeding());
    let generator = IllustrationGenerator::new(images.clone(), image_settings(RetryPolicy::none()));

    generator
        .generate(&Topic::from("Memphis supercluster"))
        .await;
    let prompts = images.prompts.lock().unwrap();
    assert_eq!(
        prompts[0],
        "Ultra-realistic cinematic scene: Memphis supercluster, neon lights"
    );
}

#[tokio::test(start_paused = true)]
async fn test_disabled_images_make_no_calls() {
    let images = Arc::new(MockImages::succeeding());
    let mut settings = image_settings(RetryPolicy::default());
    settings.enabled = false;
    let generator = IllustrationGenerator::new(images.clone(), settings);

    assert!(generator.generate(&Topic::from("t")).await.is_none());
    assert_eq!(images.calls(), 0);
}
