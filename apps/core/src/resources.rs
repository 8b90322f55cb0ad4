//! Support resources directory.
//!
//! Static list of crisis lines, reading material, exercises and apps shown alongside
//! the chat.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    CrisisLine,
    Reading,
    Exercise,
    App,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::CrisisLine => "Crisis Resources",
            ResourceKind::Reading => "Educational Resources",
            ResourceKind::Exercise => "Self-Help Exercises",
            ResourceKind::App => "Mental Health Apps",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportResource {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub description: &'static str,
    /// Phone number or text instruction, for crisis lines
    pub contact: Option<&'static str>,
    pub link: &'static str,
}

pub const RESOURCES: &[SupportResource] = &[
    SupportResource {
        kind: ResourceKind::CrisisLine,
        title: "National Suicide Prevention Lifeline",
        description: "24/7, free and confidential support for people in distress",
        contact: Some("1-800-273-8255"),
        link: "https://suicidepreventionlifeline.org/",
    },
    SupportResource {
        kind: ResourceKind::CrisisLine,
        title: "Crisis Text Line",
        description: "Text HOME to 741741 to connect with a Crisis Counselor",
        contact: Some("Text HOME to 741741"),
        link: "https://www.crisistextline.org/",
    },
    SupportResource {
        kind: ResourceKind::CrisisLine,
        title: "SAMHSA's National Helpline",
        description: "Treatment referral and information service for individuals facing mental health or substance use disorders",
        contact: Some("1-800-662-4357"),
        link: "https://www.samhsa.gov/find-help/national-helpline",
    },
    SupportResource {
        kind: ResourceKind::Reading,
        title: "Understanding Anxiety",
        description: "Learn about the different types of anxiety disorders and treatment options",
        contact: None,
        link: "https://www.nimh.nih.gov/health/topics/anxiety-disorders",
    },
    SupportResource {
        kind: ResourceKind::Reading,
        title: "Depression Basics",
        description: "Information about depression symptoms, causes, and treatments",
        contact: None,
        link: "https://www.nimh.nih.gov/health/publications/depression",
    },
    SupportResource {
        kind: ResourceKind::Reading,
        title: "Stress Management Techniques",
        description: "Evidence-based strategies for managing stress in daily life",
        contact: None,
        link: "https://www.apa.org/topics/stress/tips",
    },
    SupportResource {
        kind: ResourceKind::Exercise,
        title: "5-Minute Mindfulness Meditation",
        description: "A quick meditation practice to center yourself during stressful moments",
        contact: None,
        link: "https://www.mindful.org/a-five-minute-breathing-meditation/",
    },
    SupportResource {
        kind: ResourceKind::Exercise,
        title: "Progressive Muscle Relaxation",
        description: "Technique to reduce physical tension associated with stress and anxiety",
        contact: None,
        link: "https://www.verywellmind.com/how-do-i-practice-progressive-muscle-relaxation-3024400",
    },
    SupportResource {
        kind: ResourceKind::Exercise,
        title: "Gratitude Journaling Exercise",
        description: "Simple daily practice to improve mood and outlook",
        contact: None,
        link: "https://ggia.berkeley.edu/practice/gratitude_journal",
    },
    SupportResource {
        kind: ResourceKind::App,
        title: "Headspace",
        description: "Guided meditation and mindfulness practices",
        contact: None,
        link: "https://www.headspace.com/",
    },
    SupportResource {
        kind: ResourceKind::App,
        title: "Calm",
        description: "Sleep stories, meditation, and relaxation exercises",
        contact: None,
        link: "https://www.calm.com/",
    },
    SupportResource {
        kind: ResourceKind::App,
        title: "Woebot",
        description: "AI-powered chatbot for cognitive behavioral therapy techniques",
        contact: None,
        link: "https://woebothealth.com/",
    },
];

pub fn by_kind(kind: ResourceKind) -> impl Iterator<Item = &'static SupportResource> {
    RESOURCES.iter().filter(move |r| r.kind == kind)
}

pub fn crisis_lines() -> impl Iterator<Item = &'static SupportResource> {
    by_kind(ResourceKind::CrisisLine)
}
