//! Chat session.
//!
//! Caller-side transcript holder: owns the conversation history, feeds it to the
//! responder, and appends both turns once a reply is chosen. The responder itself keeps
//! no state between calls.

use tracing::{info, instrument};

use crate::brain::{EmotionSignal, Reply, Responder};
use crate::error::AppError;
use crate::models::{ConversationMessage, Role};

/// First assistant turn of every session
pub const WELCOME_MESSAGE: &str = "Hi there! I'm your mental health assistant. How are you feeling today? I'm here to listen and provide support. Remember, I'm not a replacement for professional mental health care.";

/// An ongoing conversation with the responder
#[derive(Debug, Clone)]
pub struct ChatSession {
    responder: Responder,
    history: Vec<ConversationMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(Responder::new())
    }
}

impl ChatSession {
    /// Starts a session whose transcript holds only the welcome message.
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            history: vec![ConversationMessage::assistant(WELCOME_MESSAGE)],
        }
    }

    pub fn history(&self) -> &[ConversationMessage] {
        &self.history
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Submit a user message and record the exchange.
    ///
    /// The input is trimmed before classification. The responder sees the history as it
    /// was before this turn.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for empty or whitespace-only input; the transcript
    /// is left untouched.
    #[instrument(skip(self, input), fields(turns = self.history.len()))]
    pub fn submit(
        &mut self,
        input: &str,
        emotion: Option<&EmotionSignal>,
    ) -> Result<Reply, AppError> {
        let content = input.trim();
        if content.is_empty() {
            return Err(AppError::Validation("Message is empty".to_string()));
        }

        let reply = self.responder.respond(content, &self.history, emotion);

        self.history.push(ConversationMessage::user(content));
        self.history
            .push(ConversationMessage::assistant(reply.text.clone()));

        info!(category = %reply.category(), "Assistant replied");
        Ok(reply)
    }

    /// Number of user turns so far
    pub fn user_turns(&self) -> usize {
        self.history.iter().filter(|m| m.role == Role::User).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::Category;

    #[test]
    fn test_new_session_has_welcome() {
        let session = ChatSession::default();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::Assistant);
        assert_eq!(session.history()[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_submit_appends_both_turns() {
        let mut session = ChatSession::default();
        let reply = session.submit("  thanks for listening  ", None).unwrap();

        assert_eq!(reply.category(), Category::Gratitude);
        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].role, Role::User);
        assert_eq!(history[1].content, "thanks for listening");
        assert_eq!(history[2].role, Role::Assistant);
        assert_eq!(history[2].content, reply.text);
        assert_eq!(session.user_turns(), 1);
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut session = ChatSession::default();
        let result = session.submit("   ", None);

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.history().len(), 1);
    }
}
