//! Emotion labels produced by the external expression detector.
//!
//! The detector is a black box that reports a score per expression. This module turns
//! those scores into a closed label set and maps each label to its acknowledgement category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::category::Category;

/// Raw per-expression probabilities as reported by the detector.
pub type ExpressionScores = BTreeMap<String, f32>;

/// Closed set of expressions the detector can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Fearful,
    Disgusted,
    Surprised,
    Neutral,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Fearful,
        EmotionLabel::Disgusted,
        EmotionLabel::Surprised,
        EmotionLabel::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Fearful => "fearful",
            EmotionLabel::Disgusted => "disgusted",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Acknowledgement category for this expression
    pub fn category(&self) -> Category {
        match self {
            EmotionLabel::Happy => Category::HappyEmotion,
            EmotionLabel::Sad => Category::SadEmotion,
            EmotionLabel::Angry => Category::AngryEmotion,
            EmotionLabel::Fearful => Category::FearfulEmotion,
            EmotionLabel::Disgusted => Category::DisgustedEmotion,
            EmotionLabel::Surprised => Category::SurprisedEmotion,
            EmotionLabel::Neutral => Category::NeutralEmotion,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EmotionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EmotionLabel::ALL
            .into_iter()
            .find(|l| l.label() == wanted)
            .ok_or_else(|| format!("unknown emotion label '{}'", s.trim()))
    }
}

/// An emotion signal as received from the detector.
///
/// Labels outside the closed set are kept verbatim so they can be logged, but they
/// classify exactly like an unrecognised label: the fallback category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmotionSignal {
    Known(EmotionLabel),
    Unknown(String),
}

impl EmotionSignal {
    /// Parse a detector label.
    ///
    /// A blank label is the detector's "nothing detected yet" state and yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<EmotionLabel>() {
            Ok(label) => EmotionSignal::Known(label),
            Err(_) => EmotionSignal::Unknown(raw.to_string()),
        })
    }

    pub fn category(&self) -> Category {
        match self {
            EmotionSignal::Known(label) => label.category(),
            EmotionSignal::Unknown(_) => Category::Default,
        }
    }
}

impl From<EmotionLabel> for EmotionSignal {
    fn from(label: EmotionLabel) -> Self {
        EmotionSignal::Known(label)
    }
}

impl fmt::Display for EmotionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmotionSignal::Known(label) => write!(f, "{}", label),
            EmotionSignal::Unknown(raw) => write!(f, "unknown({})", raw),
        }
    }
}

/// Pick the highest-scoring expression.
///
/// Ties go to the lexicographically smallest label (not the last one reported), NaN
/// scores and blank labels are ignored, and an empty score map means "no detection".
pub fn dominant_emotion(scores: &ExpressionScores) -> Option<EmotionSignal> {
    let mut best: Option<(&String, f32)> = None;
    for (label, &score) in scores {
        if score.is_nan() || label.trim().is_empty() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((label, score)),
        }
    }
    best.and_then(|(label, _)| EmotionSignal::parse(label))
}
