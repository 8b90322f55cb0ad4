use crate::actors::messages::{AppError, EmotionMessage};
use crate::actors::traits::EmotionSource;
use crate::brain::{dominant_emotion, EmotionSignal};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, timeout, Duration, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

/// Default detection cadence
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// A handle to the emotion monitor actor.
///
/// The actor polls its [`EmotionSource`] at a fixed interval and publishes the dominant
/// expression whenever it changes. Reading the latest signal never waits on the source.
#[derive(Clone)]
pub struct EmotionMonitorHandle {
    sender: mpsc::Sender<EmotionMessage>,
    latest: watch::Receiver<Option<EmotionSignal>>,
}

impl EmotionMonitorHandle {
    /// Spawns the monitor on the current tokio runtime and returns a handle to it.
    ///
    /// # Arguments
    ///
    /// * `source` - The detector to poll.
    /// * `interval` - Time between detection passes; also the timeout for a single pass.
    pub fn spawn<S: EmotionSource>(source: Arc<S>, interval: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(8);
        let (publisher, latest) = watch::channel(None);
        let runner = EmotionMonitorRunner {
            receiver,
            source,
            publisher,
            interval,
        };
        tokio::spawn(async move { runner.run().await });
        Self { sender, latest }
    }

    /// The most recent signal, or `None` before the first detection.
    pub fn latest(&self) -> Option<EmotionSignal> {
        self.latest.borrow().clone()
    }

    /// A receiver notified each time the published signal changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<EmotionSignal>> {
        self.latest.clone()
    }

    /// Sets the current signal immediately. Later detections still replace it.
    #[instrument(skip(self))]
    pub async fn set(&self, signal: Option<EmotionSignal>) -> Result<(), AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(EmotionMessage::Override {
                signal,
                responder: send,
            })
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(Duration::from_secs(5), recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))
    }

    /// Stops the actor.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(EmotionMessage::Shutdown { responder: send })
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(Duration::from_secs(5), recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))
    }
}

// --- Actor Runner ---
struct EmotionMonitorRunner<S: EmotionSource> {
    receiver: mpsc::Receiver<EmotionMessage>,
    source: Arc<S>,
    publisher: watch::Sender<Option<EmotionSignal>>,
    interval: Duration,
}

impl<S: EmotionSource> EmotionMonitorRunner<S> {
    async fn run(mut self) {
        info!(interval_ms = self.interval.as_millis() as u64, "Emotion monitor started");
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.poll_once().await,
                msg = self.receiver.recv() => match msg {
                    Some(EmotionMessage::Override { signal, responder }) => {
                        self.publish(signal);
                        let _ = responder.send(());
                    }
                    Some(EmotionMessage::Shutdown { responder }) => {
                        let _ = responder.send(());
                        break;
                    }
                    // Every handle dropped
                    None => break,
                },
            }
        }

        info!("Emotion monitor stopped");
    }

    async fn poll_once(&self) {
        let detection = match timeout(self.interval, self.source.detect()).await {
            Ok(result) => result,
            Err(elapsed) => Err(AppError::from(elapsed)),
        };

        match detection {
            Ok(Some(scores)) => {
                if let Some(signal) = dominant_emotion(&scores) {
                    self.publish(Some(signal));
                }
            }
            // No face: keep the previous label
            Ok(None) => debug!("No expression detected"),
            Err(e) => warn!("Emotion detection failed: {}", e),
        }
    }

    /// Publish only when the value actually changes.
    fn publish(&self, signal: Option<EmotionSignal>) {
        self.publisher.send_if_modified(|current| {
            if *current == signal {
                return false;
            }
            info!(from = ?current, to = ?signal, "Detected emotion changed");
            *current = signal;
            true
        });
    }
}
