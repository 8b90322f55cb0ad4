//! Responder - classifier plus catalog.
//!
//! Turns a user message into the assistant's reply. Holds no per-conversation state and
//! can be shared across threads.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::catalog::ResponseCatalog;
use super::category::Category;
use super::classifier::{Classification, ClassifierSettings, ResponseClassifier};
use super::emotion::EmotionSignal;
use crate::models::ConversationMessage;

/// The reply chosen for a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub classification: Classification,
    pub text: String,
}

impl Reply {
    pub fn category(&self) -> Category {
        self.classification.category
    }
}

#[derive(Debug, Clone)]
enum CatalogRef {
    Builtin,
    Custom(Arc<ResponseCatalog>),
}

/// Selects a canned reply for a message
#[derive(Debug, Clone)]
pub struct Responder {
    classifier: ResponseClassifier,
    catalog: CatalogRef,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Responder using the builtin catalog and default settings
    pub fn new() -> Self {
        Self {
            classifier: ResponseClassifier::new(),
            catalog: CatalogRef::Builtin,
        }
    }

    pub fn with_settings(settings: ClassifierSettings) -> Self {
        Self {
            classifier: ResponseClassifier::with_settings(settings),
            catalog: CatalogRef::Builtin,
        }
    }

    /// Replace the catalog. The catalog was validated when it was built.
    pub fn with_catalog(mut self, catalog: Arc<ResponseCatalog>) -> Self {
        self.catalog = CatalogRef::Custom(catalog);
        self
    }

    pub fn classifier(&self) -> &ResponseClassifier {
        &self.classifier
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        match &self.catalog {
            CatalogRef::Builtin => ResponseCatalog::builtin(),
            CatalogRef::Custom(catalog) => catalog.as_ref(),
        }
    }

    /// Choose the reply for `message`.
    pub fn respond(
        &self,
        message: &str,
        history: &[ConversationMessage],
        emotion: Option<&EmotionSignal>,
    ) -> Reply {
        let classification = self.classifier.classify_detailed(message, history, emotion);

        debug!(
            category = %classification.category,
            stage = ?classification.stage,
            trigger = ?classification.matched_trigger,
            emotion = ?emotion,
            history_len = history.len(),
            "Selected response category"
        );

        let text = self.catalog().lookup(classification.category).to_string();
        Reply {
            classification,
            text,
        }
    }
}
