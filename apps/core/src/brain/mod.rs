//! # Brain Module
//!
//! Rule-based response selection for Haven.
//! Classifies a user message with a fixed keyword ladder and picks a canned reply.
//!
//! ## Components
//! - `category`: closed set of response categories
//! - `emotion`: detector labels and their acknowledgement categories
//! - `rules`: ordered keyword rules (the ladder)
//! - `classifier`: the priority ladder evaluation
//! - `catalog`: category-to-response table
//! - `responder`: classifier and catalog combined

pub mod catalog;
pub mod category;
pub mod classifier;
pub mod emotion;
pub mod responder;
pub mod rules;

pub use catalog::ResponseCatalog;
pub use category::Category;
pub use classifier::{Classification, ClassifierSettings, ResponseClassifier, Stage};
pub use emotion::{dominant_emotion, EmotionLabel, EmotionSignal, ExpressionScores};
pub use responder::{Reply, Responder};
