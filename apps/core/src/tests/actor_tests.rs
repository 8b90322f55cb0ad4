//! Actor Tests
//!
//! Emotion monitor behaviour against scripted detectors.

use crate::actors::{EmotionMonitorHandle, EmotionSource};
use crate::brain::{EmotionLabel, EmotionSignal, ExpressionScores, Responder};
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, timeout, Duration};

const TICK: Duration = Duration::from_millis(10);

// --- Mock Components ---

type Detection = Result<Option<ExpressionScores>, AppError>;

/// Replays a fixed script of detections, then reports "no face" forever.
struct ScriptedSource {
    script: Mutex<VecDeque<Detection>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(script: Vec<Detection>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl EmotionSource for ScriptedSource {
    async fn detect(&self) -> Result<Option<ExpressionScores>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}

/// Never answers within the polling interval.
struct StalledSource;

#[async_trait]
impl EmotionSource for StalledSource {
    async fn detect(&self) -> Result<Option<ExpressionScores>, AppError> {
        sleep(Duration::from_secs(60)).await;
        Ok(None)
    }
}

fn face(label: &str, score: f32) -> Detection {
    let mut scores = ExpressionScores::new();
    scores.insert(label.to_string(), score);
    scores.insert("neutral".to_string(), (1.0 - score).max(0.0) / 2.0);
    Ok(Some(scores))
}

fn known(label: EmotionLabel) -> Option<EmotionSignal> {
    Some(EmotionSignal::Known(label))
}

// --- Tests ---

#[tokio::test]
async fn test_publishes_dominant_emotion() {
    let source = ScriptedSource::new(vec![face("happy", 0.9)]);
    let monitor = EmotionMonitorHandle::spawn(source, TICK);
    let mut rx = monitor.subscribe();

    timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("no emotion published")
        .unwrap();
    assert_eq!(monitor.latest(), known(EmotionLabel::Happy));

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repeated_label_is_published_once() {
    let source = ScriptedSource::new(vec![
        face("sad", 0.8),
        face("sad", 0.7),
        face("sad", 0.9),
    ]);
    let monitor = EmotionMonitorHandle::spawn(source.clone(), TICK);
    let mut rx = monitor.subscribe();

    timeout(Duration::from_secs(2), rx.changed()).await.unwrap().unwrap();
    rx.borrow_and_update();

    // The script is exhausted well within this window; no further change may appear
    let second = timeout(TICK * 20, rx.changed()).await;
    assert!(second.is_err(), "identical label was published twice");
    assert!(source.calls.load(Ordering::SeqCst) >= 3);
    assert_eq!(monitor.latest(), known(EmotionLabel::Sad));

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_no_face_keeps_previous_label() {
    let source = ScriptedSource::new(vec![face("angry", 0.6), Ok(None), Ok(None)]);
    let monitor = EmotionMonitorHandle::spawn(source, TICK);

    sleep(TICK * 10).await;
    assert_eq!(monitor.latest(), known(EmotionLabel::Angry));

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_detector_errors_are_survived() {
    let source = ScriptedSource::new(vec![
        Err(AppError::Internal("camera unavailable".to_string())),
        Err(AppError::Internal("camera unavailable".to_string())),
        face("fearful", 0.7),
    ]);
    let monitor = EmotionMonitorHandle::spawn(source, TICK);
    let mut rx = monitor.subscribe();

    timeout(Duration::from_secs(2), rx.changed()).await.unwrap().unwrap();
    assert_eq!(monitor.latest(), known(EmotionLabel::Fearful));

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stalled_detector_does_not_block_overrides() {
    let monitor = EmotionMonitorHandle::spawn(Arc::new(StalledSource), TICK);

    monitor
        .set(known(EmotionLabel::Disgusted))
        .await
        .expect("override should not wait for the detector");
    assert_eq!(monitor.latest(), known(EmotionLabel::Disgusted));

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_label_is_kept_verbatim() {
    let source = ScriptedSource::new(vec![face("contempt", 0.95)]);
    let monitor = EmotionMonitorHandle::spawn(source, TICK);
    let mut rx = monitor.subscribe();

    timeout(Duration::from_secs(2), rx.changed()).await.unwrap().unwrap();
    assert_eq!(
        monitor.latest(),
        Some(EmotionSignal::Unknown("contempt".to_string()))
    );

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_handle_errors_after_shutdown() {
    let monitor = EmotionMonitorHandle::spawn(ScriptedSource::new(vec![]), TICK);
    monitor.shutdown().await.unwrap();

    let result = monitor.set(None).await;
    assert!(matches!(result, Err(AppError::Actor(_))));
}

#[tokio::test]
async fn test_monitor_feeds_responder() {
    let source = ScriptedSource::new(vec![face("surprised", 0.9)]);
    let monitor = EmotionMonitorHandle::spawn(source, TICK);
    let mut rx = monitor.subscribe();
    timeout(Duration::from_secs(2), rx.changed()).await.unwrap().unwrap();

    let responder = Responder::new();
    let emotion = monitor.latest();
    let reply = responder.respond("wow", &[], emotion.as_ref());
    assert_eq!(reply.category(), EmotionLabel::Surprised.category());

    monitor.shutdown().await.unwrap();
}
