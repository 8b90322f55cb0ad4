//! Message classification.
//!
//! A strict priority ladder over surface text, first match wins:
//! 1. Crisis language (always wins)
//! 2. Emotion signal, for short messages only
//! 3. Greeting (exact or prefix match)
//! 4. Ordered keyword ladder, including the feeling-statement step
//! 5. Fallback to [`Category::Default`]
//!
//! Classification is pure: no I/O, no clock, no randomness.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::category::Category;
use super::emotion::EmotionSignal;
use super::rules::{self, LadderStep, CRISIS_RULE, GREETING_RULE, LADDER};
use crate::models::ConversationMessage;

/// Messages shorter than this (in characters) defer to the emotion signal
pub const DEFAULT_SHORT_MESSAGE_THRESHOLD: usize = 50;

/// Which stage of the ladder produced the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Crisis,
    Emotion,
    Greeting,
    Keyword,
    FeelingStatement,
    Fallback,
}

/// Result of classification, with enough detail to explain the decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub stage: Stage,
    /// Trigger substring or emotion label that matched, if any
    pub matched_trigger: Option<String>,
}

impl Classification {
    fn new(category: Category, stage: Stage, matched: Option<&str>) -> Self {
        Self {
            category,
            stage,
            matched_trigger: matched.map(str::to_string),
        }
    }
}

/// Tunables for the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierSettings {
    pub short_message_threshold: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            short_message_threshold: DEFAULT_SHORT_MESSAGE_THRESHOLD,
        }
    }
}

/// Keyword classifier mapping a message to a response category
#[derive(Debug, Clone, Default)]
pub struct ResponseClassifier {
    settings: ClassifierSettings,
}

impl ResponseClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> ClassifierSettings {
        self.settings
    }

    /// Classify a message into a category.
    ///
    /// `history` is accepted for interface stability; no rule currently reads it.
    pub fn classify(
        &self,
        message: &str,
        history: &[ConversationMessage],
        emotion: Option<&EmotionSignal>,
    ) -> Category {
        self.classify_detailed(message, history, emotion).category
    }

    /// Classify a message and report which stage and trigger decided it.
    pub fn classify_detailed(
        &self,
        message: &str,
        _history: &[ConversationMessage],
        emotion: Option<&EmotionSignal>,
    ) -> Classification {
        let lowered = message.to_lowercase();

        if let Some(trigger) = CRISIS_RULE.find_match(&lowered) {
            return Classification::new(Category::Crisis, Stage::Crisis, Some(trigger));
        }

        if let Some(signal) = emotion {
            // Length in Unicode scalar values, not UTF-16 units: an emoji counts once.
            if message.chars().count() < self.settings.short_message_threshold {
                let label = signal.to_string();
                return Classification::new(
                    signal.category(),
                    Stage::Emotion,
                    Some(label.as_str()),
                );
            }
        }

        if let Some(trigger) = GREETING_RULE.find_match(&lowered) {
            return Classification::new(Category::Greeting, Stage::Greeting, Some(trigger));
        }

        for step in LADDER {
            match step {
                LadderStep::Keyword(rule) => {
                    if let Some(trigger) = rule.find_match(&lowered) {
                        return Classification::new(rule.category, Stage::Keyword, Some(trigger));
                    }
                }
                LadderStep::FeelingStatement => {
                    if let Some((category, word)) = rules::match_feeling_statement(&lowered) {
                        return Classification::new(category, Stage::FeelingStatement, Some(word));
                    }
                }
            }
        }

        Classification::new(Category::Default, Stage::Fallback, None)
    }

    /// Every category this classifier can return
    pub fn reachable_categories() -> BTreeSet<Category> {
        let mut categories = BTreeSet::new();
        categories.insert(CRISIS_RULE.category);
        categories.insert(GREETING_RULE.category);
        for label in super::emotion::EmotionLabel::ALL {
            categories.insert(label.category());
        }
        for step in LADDER {
            categories.extend(rules::step_categories(step));
        }
        categories.insert(Category::Default);
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::emotion::EmotionLabel;

    fn sad() -> EmotionSignal {
        EmotionSignal::Known(EmotionLabel::Sad)
    }

    #[test]
    fn test_crisis_beats_emotion() {
        let classifier = ResponseClassifier::new();
        let neutral = EmotionSignal::Known(EmotionLabel::Neutral);

        let result =
            classifier.classify_detailed("I just want to end my life", &[], Some(&neutral));
        assert_eq!(result.category, Category::Crisis);
        assert_eq!(result.stage, Stage::Crisis);
        assert_eq!(result.matched_trigger.as_deref(), Some("end my life"));
    }

    #[test]
    fn test_short_message_uses_emotion() {
        let classifier = ResponseClassifier::new();

        let result = classifier.classify_detailed("meh", &[], Some(&sad()));
        assert_eq!(result.category, Category::SadEmotion);
        assert_eq!(result.stage, Stage::Emotion);
        assert_eq!(result.matched_trigger.as_deref(), Some("sad"));
    }

    #[test]
    fn test_long_message_ignores_emotion() {
        let classifier = ResponseClassifier::new();
        let message = "I have been thinking about going for a workout every morning";
        assert!(message.len() >= DEFAULT_SHORT_MESSAGE_THRESHOLD);

        assert_eq!(classifier.classify(message, &[], Some(&sad())), Category::Exercise);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let classifier = ResponseClassifier::new();
        let exactly_fifty = "x".repeat(50);
        let forty_nine = "x".repeat(49);

        assert_eq!(classifier.classify(&exactly_fifty, &[], Some(&sad())), Category::Default);
        assert_eq!(classifier.classify(&forty_nine, &[], Some(&sad())), Category::SadEmotion);
    }

    #[test]
    fn test_length_counts_characters() {
        let classifier = ResponseClassifier::new();
        let emoji = "\u{1F622}".repeat(30);
        assert_eq!(emoji.chars().count(), 30);

        assert_eq!(classifier.classify(&emoji, &[], Some(&sad())), Category::SadEmotion);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = ResponseClassifier::with_settings(ClassifierSettings {
            short_message_threshold: 5,
        });
        assert_eq!(classifier.classify("hello", &[], Some(&sad())), Category::Greeting);
        assert_eq!(classifier.classify("hey", &[], Some(&sad())), Category::SadEmotion);
    }

    #[test]
    fn test_fallback() {
        let classifier = ResponseClassifier::new();
        let result = classifier.classify_detailed("the sky is blue today", &[], None);
        assert_eq!(result.category, Category::Default);
        assert_eq!(result.stage, Stage::Fallback);
        assert_eq!(result.matched_trigger, None);
    }

    #[test]
    fn test_reachable_covers_every_category() {
        let reachable = ResponseClassifier::reachable_categories();
        assert_eq!(reachable.len(), Category::ALL.len());
    }
}
