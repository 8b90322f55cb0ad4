//! Keyword rules and their evaluation order.
//!
//! The priority order is data: [`LADDER`] lists every keyword step after the crisis,
//! emotion and greeting stages, and a single matcher ([`KeywordRule::find_match`])
//! evaluates any rule. All triggers are lower-case; callers lower-case the message once.

use super::category::Category;

/// How a rule's triggers are compared with the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Message equals the trigger, or starts with the trigger followed by a space
    ExactOrPrefix,
    /// Trigger appears anywhere in the message
    Contains,
}

/// A category with the trigger substrings that select it
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    pub triggers: &'static [&'static str],
    pub mode: MatchMode,
}

impl KeywordRule {
    const fn contains(category: Category, triggers: &'static [&'static str]) -> Self {
        Self {
            category,
            triggers,
            mode: MatchMode::Contains,
        }
    }

    /// Returns the first trigger (in declaration order) that matches `lowered`.
    pub fn find_match(&self, lowered: &str) -> Option<&'static str> {
        self.triggers.iter().copied().find(|&trigger| match self.mode {
            MatchMode::Contains => lowered.contains(trigger),
            MatchMode::ExactOrPrefix => {
                lowered == trigger
                    || lowered
                        .strip_prefix(trigger)
                        .is_some_and(|rest| rest.starts_with(' '))
            }
        })
    }
}

/// One entry of the ordered keyword ladder
#[derive(Debug, Clone, Copy)]
pub enum LadderStep {
    Keyword(KeywordRule),
    /// "I feel ..." statements, resolved by sentiment words; falls through when neither
    /// sentiment set matches.
    FeelingStatement,
}

pub const CRISIS_RULE: KeywordRule = KeywordRule::contains(
    Category::Crisis,
    &["suicide", "kill myself", "end my life", "want to die", "harm myself"],
);

pub const GREETING_RULE: KeywordRule = KeywordRule {
    category: Category::Greeting,
    triggers: &[
        "hello",
        "hi",
        "hey",
        "greetings",
        "good morning",
        "good afternoon",
        "good evening",
    ],
    mode: MatchMode::ExactOrPrefix,
};

pub const FEELING_PHRASES: &[&str] = &["i feel ", "feeling ", "i am ", "i'm "];

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "happy", "better", "awesome", "amazing", "excellent",
];

pub const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "awful", "worse", "horrible", "miserable"];

/// Keyword steps, highest priority first.
pub const LADDER: &[LadderStep] = &[
    LadderStep::Keyword(KeywordRule::contains(
        Category::Gratitude,
        &["thank you", "thanks", "appreciate", "grateful"],
    )),
    LadderStep::Keyword(KeywordRule::contains(Category::Anxiety, &["anxious", "anxiety"])),
    LadderStep::Keyword(KeywordRule::contains(Category::Depression, &["depress", "sad"])),
    LadderStep::Keyword(KeywordRule::contains(Category::Stress, &["stress", "overwhelm"])),
    LadderStep::Keyword(KeywordRule::contains(
        Category::Sleep,
        &["sleep", "insomnia", "tired"],
    )),
    LadderStep::Keyword(KeywordRule::contains(Category::Mindfulness, &["meditat", "mindful"])),
    LadderStep::Keyword(KeywordRule::contains(
        Category::AboutAssistant,
        &["who are you", "what are you", "how do you work"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::HelpRequest,
        &["help", "advice", "suggestion"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::HowAreYou,
        &["how are you", "how do you feel"],
    )),
    LadderStep::FeelingStatement,
    LadderStep::Keyword(KeywordRule::contains(
        Category::Exercise,
        &["exercise", "physical activity", "workout"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::Nutrition,
        &["food", "nutrition", "diet", "eat"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::SocialSupport,
        &["friend", "family", "relationship", "social"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::WorkSchoolStress,
        &["work", "job", "school", "study", "college"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::Therapy,
        &[
            "therapy",
            "therapist",
            "counseling",
            "counselor",
            "psychologist",
            "psychiatrist",
        ],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::Medication,
        &["medication", "medicine", "drug", "prescription"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::SelfCare,
        &["self-care", "self care", "take care of myself"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::RelaxationTechniques,
        &["relax", "calm down", "breathing", "technique"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::PanicAttack,
        &["panic attack", "panic"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::Trauma,
        &["trauma", "ptsd", "traumatic"],
    )),
    LadderStep::Keyword(KeywordRule::contains(
        Category::Goodbye,
        &["bye", "goodbye", "see you", "talk to you later", "farewell"],
    )),
];

/// Resolve a feeling statement to a sentiment category.
///
/// Returns the category and the sentiment word that decided it, or `None` when the
/// message is not a feeling statement or carries no sentiment word.
pub fn match_feeling_statement(lowered: &str) -> Option<(Category, &'static str)> {
    if !FEELING_PHRASES.iter().any(|p| lowered.contains(p)) {
        return None;
    }
    if let Some(word) = POSITIVE_WORDS.iter().copied().find(|w| lowered.contains(w)) {
        return Some((Category::PositiveFeeling, word));
    }
    NEGATIVE_WORDS
        .iter()
        .copied()
        .find(|w| lowered.contains(w))
        .map(|word| (Category::NegativeFeeling, word))
}

/// Categories a ladder step can produce
pub fn step_categories(step: &LadderStep) -> Vec<Category> {
    match step {
        LadderStep::Keyword(rule) => vec![rule.category],
        LadderStep::FeelingStatement => vec![Category::PositiveFeeling, Category::NegativeFeeling],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_mode_requires_word_boundary() {
        assert_eq!(GREETING_RULE.find_match("hi"), Some("hi"));
        assert_eq!(GREETING_RULE.find_match("hi there"), Some("hi"));
        assert_eq!(GREETING_RULE.find_match("good morning sunshine"), Some("good morning"));
        assert_eq!(GREETING_RULE.find_match("hiking trip"), None);
        assert_eq!(GREETING_RULE.find_match("ship arrived"), None);
        assert_eq!(GREETING_RULE.find_match("hi, friend"), None);
    }

    #[test]
    fn test_contains_mode() {
        assert_eq!(CRISIS_RULE.find_match("i want to die today"), Some("want to die"));
        assert_eq!(CRISIS_RULE.find_match("i want to dine out"), None);
    }

    #[test]
    fn test_ladder_order_is_fixed() {
        let order: Vec<Category> = LADDER.iter().flat_map(step_categories).collect();
        assert_eq!(order.first(), Some(&Category::Gratitude));
        assert_eq!(order.last(), Some(&Category::Goodbye));

        let how_are_you = order.iter().position(|c| *c == Category::HowAreYou).unwrap();
        assert_eq!(order[how_are_you + 1], Category::PositiveFeeling);
        assert_eq!(order[how_are_you + 2], Category::NegativeFeeling);
        assert_eq!(order[how_are_you + 3], Category::Exercise);
    }

    #[test]
    fn test_feeling_statement() {
        assert_eq!(
            match_feeling_statement("i feel great"),
            Some((Category::PositiveFeeling, "great"))
        );
        assert_eq!(
            match_feeling_statement("i'm feeling awful"),
            Some((Category::NegativeFeeling, "awful"))
        );
        assert_eq!(match_feeling_statement("i feel okay"), None);
        // Sentiment word without a feeling phrase is not a statement
        assert_eq!(match_feeling_statement("great weather"), None);
    }
}
