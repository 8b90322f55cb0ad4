//! Actors
//!
//! Asynchronous collaborators around the synchronous responder. The emotion monitor
//! polls an [`traits::EmotionSource`] and publishes the latest label for callers to read
//! before each classification.

pub mod emotion;
pub mod messages;
pub mod traits;

pub use emotion::EmotionMonitorHandle;
pub use traits::EmotionSource;
