//! Session Tests
//!
//! Multi-turn transcripts driven through `ChatSession`.

use crate::brain::{Category, ClassifierSettings, EmotionLabel, EmotionSignal, Responder};
use crate::error::AppError;
use crate::models::Role;
use crate::session::{ChatSession, WELCOME_MESSAGE};

#[test]
fn test_full_conversation() {
    let mut session = ChatSession::default();

    let turns = [
        ("Hello", Category::Greeting),
        ("I've been really stressed at work", Category::Stress),
        ("I can't sleep either", Category::Sleep),
        ("thank you", Category::Gratitude),
        ("goodbye", Category::Goodbye),
    ];

    for (input, expected) in turns {
        let reply = session.submit(input, None).unwrap();
        assert_eq!(reply.category(), expected, "Unexpected category for '{}'", input);
    }

    let history = session.history();
    assert_eq!(history.len(), 1 + turns.len() * 2);
    assert_eq!(history[0].content, WELCOME_MESSAGE);
    for (i, message) in history.iter().enumerate().skip(1) {
        let expected = if i % 2 == 1 { Role::User } else { Role::Assistant };
        assert_eq!(message.role, expected);
    }
    assert_eq!(session.user_turns(), turns.len());
}

#[test]
fn test_emotion_signal_per_turn() {
    let mut session = ChatSession::default();
    let surprised = EmotionSignal::Known(EmotionLabel::Surprised);

    let reply = session.submit("oh", Some(&surprised)).unwrap();
    assert_eq!(reply.category(), Category::SurprisedEmotion);

    let reply = session.submit("oh", None).unwrap();
    assert_eq!(reply.category(), Category::Default);
}

#[test]
fn test_crisis_mid_conversation() {
    let mut session = ChatSession::default();
    session.submit("hi", None).unwrap();

    let happy = EmotionSignal::Known(EmotionLabel::Happy);
    let reply = session.submit("I want to end my life", Some(&happy)).unwrap();
    assert_eq!(reply.category(), Category::Crisis);
    assert!(reply.text.contains("1-800-273-8255"));
}

#[test]
fn test_session_uses_configured_threshold() {
    let responder = Responder::with_settings(ClassifierSettings {
        short_message_threshold: 3,
    });
    let mut session = ChatSession::new(responder);
    let sad = EmotionSignal::Known(EmotionLabel::Sad);

    assert_eq!(session.submit("ok", Some(&sad)).unwrap().category(), Category::SadEmotion);
    assert_eq!(session.submit("hey you", Some(&sad)).unwrap().category(), Category::Greeting);
}

#[test]
fn test_whitespace_only_is_rejected() {
    let mut session = ChatSession::default();
    assert!(matches!(session.submit("\n\t ", None), Err(AppError::Validation(_))));
    assert_eq!(session.history().len(), 1);
}
