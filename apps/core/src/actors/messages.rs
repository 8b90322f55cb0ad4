use crate::brain::EmotionSignal;
use tokio::sync::oneshot;

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the emotion monitor actor.
#[derive(Debug)]
pub enum EmotionMessage {
    /// Replace the current signal without waiting for the next detection.
    Override {
        signal: Option<EmotionSignal>,
        /// A channel to confirm the update.
        responder: oneshot::Sender<()>,
    },
    /// Stop polling and end the actor loop.
    Shutdown {
        /// A channel to confirm the actor has stopped.
        responder: oneshot::Sender<()>,
    },
}
