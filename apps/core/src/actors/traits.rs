use crate::brain::ExpressionScores;
use crate::error::AppError;
use async_trait::async_trait;

/// Defines the public interface for an expression detector.
///
/// This trait abstracts the perception backend (camera model, remote service, test
/// double), allowing the emotion monitor to poll any of them at a fixed cadence.
#[async_trait]
pub trait EmotionSource: Send + Sync + 'static {
    /// Runs one detection pass.
    ///
    /// Returns `Ok(None)` when nothing was detected (e.g. no face in frame), or the
    /// per-expression scores otherwise.
    async fn detect(&self) -> Result<Option<ExpressionScores>, AppError>;
}
