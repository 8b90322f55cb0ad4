//! Response categories.
//!
//! The closed set of tags the classifier can return. Every variant has exactly one
//! canned response in the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Self-harm or suicide language
    Crisis,
    Greeting,
    Gratitude,
    Anxiety,
    Depression,
    Stress,
    Sleep,
    Mindfulness,
    /// Questions about the assistant itself
    AboutAssistant,
    HelpRequest,
    /// "How are you?" aimed at the assistant
    HowAreYou,
    PositiveFeeling,
    NegativeFeeling,
    Exercise,
    Nutrition,
    SocialSupport,
    WorkSchoolStress,
    Therapy,
    Medication,
    SelfCare,
    RelaxationTechniques,
    PanicAttack,
    Trauma,
    Goodbye,
    // Emotion acknowledgements, selected by the short-message emotion rule
    HappyEmotion,
    SadEmotion,
    AngryEmotion,
    FearfulEmotion,
    DisgustedEmotion,
    SurprisedEmotion,
    NeutralEmotion,
    /// Fallback when nothing matched
    Default,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 32] = [
        Category::Crisis,
        Category::Greeting,
        Category::Gratitude,
        Category::Anxiety,
        Category::Depression,
        Category::Stress,
        Category::Sleep,
        Category::Mindfulness,
        Category::AboutAssistant,
        Category::HelpRequest,
        Category::HowAreYou,
        Category::PositiveFeeling,
        Category::NegativeFeeling,
        Category::Exercise,
        Category::Nutrition,
        Category::SocialSupport,
        Category::WorkSchoolStress,
        Category::Therapy,
        Category::Medication,
        Category::SelfCare,
        Category::RelaxationTechniques,
        Category::PanicAttack,
        Category::Trauma,
        Category::Goodbye,
        Category::HappyEmotion,
        Category::SadEmotion,
        Category::AngryEmotion,
        Category::FearfulEmotion,
        Category::DisgustedEmotion,
        Category::SurprisedEmotion,
        Category::NeutralEmotion,
        Category::Default,
    ];

    /// Returns the stable key for the category
    pub fn key(&self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Greeting => "greeting",
            Category::Gratitude => "gratitude",
            Category::Anxiety => "anxiety",
            Category::Depression => "depression",
            Category::Stress => "stress",
            Category::Sleep => "sleep",
            Category::Mindfulness => "mindfulness",
            Category::AboutAssistant => "aboutAssistant",
            Category::HelpRequest => "helpRequest",
            Category::HowAreYou => "howAreYou",
            Category::PositiveFeeling => "positiveFeeling",
            Category::NegativeFeeling => "negativeFeeling",
            Category::Exercise => "exercise",
            Category::Nutrition => "nutrition",
            Category::SocialSupport => "socialSupport",
            Category::WorkSchoolStress => "workSchoolStress",
            Category::Therapy => "therapy",
            Category::Medication => "medication",
            Category::SelfCare => "selfCare",
            Category::RelaxationTechniques => "relaxationTechniques",
            Category::PanicAttack => "panicAttack",
            Category::Trauma => "trauma",
            Category::Goodbye => "goodbye",
            Category::HappyEmotion => "happyEmotion",
            Category::SadEmotion => "sadEmotion",
            Category::AngryEmotion => "angryEmotion",
            Category::FearfulEmotion => "fearfulEmotion",
            Category::DisgustedEmotion => "disgustedEmotion",
            Category::SurprisedEmotion => "surprisedEmotion",
            Category::NeutralEmotion => "neutralEmotion",
            Category::Default => "default",
        }
    }

    /// True for the seven emotion acknowledgement categories
    pub fn is_emotion_ack(&self) -> bool {
        matches!(
            self,
            Category::HappyEmotion
                | Category::SadEmotion
                | Category::AngryEmotion
                | Category::FearfulEmotion
                | Category::DisgustedEmotion
                | Category::SurprisedEmotion
                | Category::NeutralEmotion
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_unique() {
        let unique: HashSet<Category> = Category::ALL.iter().copied().collect();
        assert_eq!(unique.len(), Category::ALL.len());
    }

    #[test]
    fn test_serde_uses_key() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_emotion_ack_count() {
        let acks = Category::ALL.iter().filter(|c| c.is_emotion_ack()).count();
        assert_eq!(acks, 7);
    }
}
