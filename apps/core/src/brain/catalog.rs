//! Response catalog.
//!
//! Maps every [`Category`] to one canned, supportive, non-diagnostic reply. The builtin
//! table is built once per process and never mutated; alternative tables can be built
//! with [`ResponseCatalog::from_entries`] and injected into a responder.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::category::Category;
use crate::error::AppError;

/// System prompt for deployments that replace the rule-based path with a generative
/// backend. Not used by the classifier.
pub const AI_SYSTEM_PROMPT: &str = "You are a supportive mental health assistant designed to provide empathetic guidance.

Guidelines:
- Respond with empathy and understanding
- Provide evidence-based coping strategies when appropriate
- Suggest resources for further support
- NEVER diagnose medical conditions or replace professional care
- If someone expresses thoughts of self-harm or suicide, ALWAYS encourage them to contact emergency services, a crisis helpline, or a mental health professional immediately
- Maintain a supportive, non-judgmental tone
- Focus on validation, mindfulness, and healthy coping mechanisms

Remember that you are not a replacement for professional mental health care.";

const BUILTIN_RESPONSES: &[(Category, &str)] = &[
    (
        Category::Greeting,
        "Hello! I'm here to support you with your mental health. How are you feeling today?",
    ),
    (
        Category::Gratitude,
        "You're welcome! I'm glad I could be of help. Remember that taking care of your mental health is an ongoing journey, and it's great that you're taking steps to support yourself.",
    ),
    (
        Category::Anxiety,
        "It sounds like you're experiencing anxiety. This is a common feeling that many people face. Some helpful strategies include deep breathing exercises, grounding techniques (like the 5-4-3-2-1 method), and progressive muscle relaxation. Regular exercise, adequate sleep, and limiting caffeine and alcohol can also help reduce anxiety. Would you like me to explain any of these techniques in more detail?",
    ),
    (
        Category::Depression,
        "I'm sorry to hear you're feeling down. Depression can make even simple tasks feel overwhelming. Some strategies that might help include setting small, achievable goals, maintaining a routine, physical activity, connecting with supportive people, and challenging negative thoughts. Remember that depression is treatable, and it's important to reach out to a mental health professional for proper support and treatment.",
    ),
    (
        Category::Stress,
        "Managing stress is important for your overall wellbeing. Consider trying stress-reduction techniques like deep breathing, meditation, or progressive muscle relaxation. Regular physical activity, adequate sleep, and setting boundaries can also help. It might also be helpful to identify your stress triggers and develop specific strategies for each one. Remember to take breaks and practice self-compassion.",
    ),
    (
        Category::Sleep,
        "Good sleep is crucial for mental health. Try establishing a regular sleep schedule, creating a relaxing bedtime routine, and making your sleep environment comfortable. Avoid screens, caffeine, and heavy meals before bed. Relaxation techniques like deep breathing or progressive muscle relaxation can also help. If sleep problems persist, consider speaking with a healthcare provider as they could be related to underlying conditions.",
    ),
    (
        Category::Mindfulness,
        "Mindfulness involves paying attention to the present moment without judgment. Regular practice can reduce stress, anxiety, and depression symptoms. You can start with simple exercises like mindful breathing (focusing on your breath for a few minutes) or a body scan (paying attention to each part of your body). Even everyday activities like eating or walking can be done mindfully by fully engaging your senses and staying present.",
    ),
    (
        Category::Crisis,
        "I'm concerned about what you've shared. If you're having thoughts of harming yourself, please reach out for immediate help. The National Suicide Prevention Lifeline is available 24/7 at 1-800-273-8255, or you can text HOME to 741741 to reach the Crisis Text Line. You can also go to your nearest emergency room or call 911. Remember that you're not alone, and help is available.",
    ),
    (
        Category::AboutAssistant,
        "I'm a mental health assistant designed to provide support and information about mental health topics. I can offer coping strategies, resources, and a space to express your feelings. However, I'm not a replacement for professional mental health care. If you're experiencing significant distress, please consider reaching out to a mental health professional.",
    ),
    (
        Category::HelpRequest,
        "I'd be happy to help. To provide the most relevant support, could you share a bit more about what you're experiencing or what specific area you'd like help with? For example, are you dealing with stress, anxiety, sleep issues, or something else?",
    ),
    (
        Category::HowAreYou,
        "Thanks for asking! As an assistant, I don't have feelings, but I'm here and ready to support you. How are you doing today? Is there something specific on your mind that you'd like to talk about?",
    ),
    (
        Category::PositiveFeeling,
        "I'm glad to hear you're feeling good! It's important to recognize and appreciate these positive moments. What do you think is contributing to your positive feelings? Understanding what helps you feel good can be valuable for maintaining your mental wellbeing.",
    ),
    (
        Category::NegativeFeeling,
        "I'm sorry to hear you're not feeling well. It takes courage to acknowledge difficult emotions. Would you like to talk more about what's going on? Or perhaps I could suggest some coping strategies that might help you navigate these feelings?",
    ),
    (
        Category::Exercise,
        "Physical activity is a powerful tool for mental health. It releases endorphins, reduces stress hormones, and can improve sleep quality. You don't need intense workouts to benefit—even a 10-minute walk can boost your mood. Try finding activities you enjoy, whether that's walking, dancing, yoga, or team sports. Start small and gradually increase duration and intensity. Remember, consistency is more important than intensity.",
    ),
    (
        Category::Nutrition,
        "What you eat can significantly impact your mental health. Try to include plenty of fruits, vegetables, whole grains, lean proteins, and healthy fats in your diet. Foods rich in omega-3 fatty acids (like fatty fish), antioxidants, and B vitamins may be particularly beneficial for brain health. Stay hydrated and be mindful of caffeine and alcohol intake, as they can affect mood and sleep. Remember, it's about overall dietary patterns rather than individual foods.",
    ),
    (
        Category::SocialSupport,
        "Strong social connections are vital for mental health. They provide emotional support, reduce feelings of isolation, and can help buffer against stress. Try to maintain regular contact with supportive friends and family, even if it's just a quick call or message. Consider joining groups or activities aligned with your interests to meet new people. If relationships are causing stress, it might help to set boundaries or seek support in navigating these challenges.",
    ),
    (
        Category::WorkSchoolStress,
        "Work or school stress is common and can significantly impact wellbeing. Try to identify specific stressors and develop targeted strategies. Time management techniques, breaking tasks into smaller steps, and setting realistic goals can help. Remember to take breaks and practice self-care. If possible, communicate with supervisors or teachers about your challenges. And try to maintain boundaries between work/school and personal life to prevent burnout.",
    ),
    (
        Category::Therapy,
        "Therapy can be a valuable resource for mental health support. Different approaches work for different people—common types include cognitive-behavioral therapy (CBT), psychodynamic therapy, and humanistic therapy. When looking for a therapist, consider their expertise, approach, and whether you feel comfortable with them. Many therapists offer initial consultations to help determine if it's a good fit. If cost is a concern, look into community mental health centers, training clinics, or therapists who offer sliding scale fees.",
    ),
    (
        Category::Medication,
        "Medication can be an effective part of treatment for many mental health conditions. It's typically prescribed by psychiatrists or primary care physicians after a thorough evaluation. Different medications work in different ways, and finding the right one often involves some trial and adjustment. It's important to take medications as prescribed and communicate with your provider about any side effects or concerns. Remember, medication often works best when combined with therapy and lifestyle changes.",
    ),
    (
        Category::SelfCare,
        "Self-care involves intentionally taking care of your physical, emotional, and mental health. It's not selfish—it's necessary for wellbeing. Self-care looks different for everyone but might include activities like setting boundaries, practicing relaxation techniques, engaging in hobbies, spending time in nature, or ensuring basic needs like sleep and nutrition are met. Try to incorporate small self-care practices into your daily routine rather than seeing it as an occasional indulgence.",
    ),
    (
        Category::RelaxationTechniques,
        "Relaxation techniques can help reduce stress and promote calm. Deep breathing is simple but effective—try inhaling slowly through your nose for a count of 4, holding for 1-2 seconds, then exhaling slowly through your mouth for a count of 6. Progressive muscle relaxation involves tensing and then releasing each muscle group in your body. Guided imagery, where you imagine a peaceful scene in detail, can also be helpful. These techniques work best with regular practice, even when you're not feeling stressed.",
    ),
    (
        Category::PanicAttack,
        "Panic attacks can be frightening but are not dangerous. Symptoms like rapid heartbeat, shortness of breath, and dizziness are your body's normal stress response in overdrive. During an attack, try to focus on your breathing—inhale slowly through your nose for a count of 4, hold for 1-2 seconds, then exhale slowly through your mouth for a count of 6. Remind yourself that the attack will pass and you are safe. Grounding techniques, like the 5-4-3-2-1 method (naming 5 things you can see, 4 you can touch, etc.), can also help.",
    ),
    (
        Category::Trauma,
        "Trauma can have profound effects on mental health, and healing is a personal journey that takes time. Professional support from trauma-informed therapists can be invaluable. Approaches like EMDR (Eye Movement Desensitization and Reprocessing) and trauma-focused CBT have strong evidence for helping process traumatic experiences. In daily life, establishing safety, practicing self-care, and developing coping strategies for triggers are important. Remember that healing isn't linear, and it's okay to have difficult days.",
    ),
    (
        Category::Goodbye,
        "Take care! Remember that taking steps to support your mental health is a sign of strength, not weakness. I'm here if you want to chat again in the future.",
    ),
    (
        Category::Default,
        "Thank you for sharing that with me. Mental health is a journey with ups and downs, and it's important to be patient with yourself. Is there a specific aspect of what you're experiencing that you'd like to explore further or any particular strategies you're interested in learning about?",
    ),
    (
        Category::HappyEmotion,
        "I'm glad you're feeling happy! Would you like to talk about what's making you feel good?",
    ),
    (
        Category::SadEmotion,
        "I notice you seem sad. I'm here to listen if you'd like to talk about what's troubling you.",
    ),
    (
        Category::AngryEmotion,
        "I notice you appear to be angry. Would you like to talk about what's causing these feelings?",
    ),
    (
        Category::FearfulEmotion,
        "I notice you seem anxious or fearful. Remember to take deep breaths. Would you like to discuss what's causing these feelings?",
    ),
    (
        Category::DisgustedEmotion,
        "I notice you seem uncomfortable. Would you like to talk about what's bothering you?",
    ),
    (
        Category::SurprisedEmotion,
        "I notice you seem surprised. Is there something unexpected that happened?",
    ),
    (
        Category::NeutralEmotion,
        "I'm here to listen and support you. How are you feeling today?",
    ),
];

// NOTE: expect() is acceptable here: the builtin table is static data and its
// completeness is asserted by tests, so a failure is unrecoverable.
static BUILTIN: LazyLock<ResponseCatalog> = LazyLock::new(|| {
    ResponseCatalog::from_entries(BUILTIN_RESPONSES.iter().copied())
        .expect("builtin response catalog must cover every category")
});

/// Immutable category-to-response table
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    entries: BTreeMap<Category, String>,
}

impl ResponseCatalog {
    /// The process-wide builtin catalog
    pub fn builtin() -> &'static ResponseCatalog {
        &BUILTIN
    }

    /// Build a catalog, checking that every category has a non-empty response.
    ///
    /// Later entries for the same category replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (Category, S)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (category, text) in entries {
            let text: String = text.into();
            if text.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Empty response for category '{}'",
                    category
                )));
            }
            map.insert(category, text);
        }

        if let Some(missing) = Category::ALL.iter().find(|c| !map.contains_key(*c)) {
            return Err(AppError::MissingCatalogEntry(*missing));
        }

        Ok(Self { entries: map })
    }

    /// Look up the response for a category.
    pub fn try_lookup(&self, category: Category) -> Result<&str, AppError> {
        self.entries
            .get(&category)
            .map(String::as_str)
            .ok_or(AppError::MissingCatalogEntry(category))
    }

    /// Look up the response for a category.
    ///
    /// # Panics
    ///
    /// Never for a catalog built by [`ResponseCatalog::from_entries`], which rejects
    /// incomplete tables.
    pub fn lookup(&self, category: Category) -> &str {
        match self.try_lookup(category) {
            Ok(text) => text,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
