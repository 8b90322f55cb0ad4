//! Test Module
//!
//! Cross-module test suite for Haven.
//!
//! ## Test Categories
//! - `brain_tests`: classification ladder, emotion rule, catalog coverage
//! - `session_tests`: multi-turn transcripts through `ChatSession`
//! - `actor_tests`: emotion monitor polling behaviour
//! - `mood_tests`: mood log persistence

pub mod actor_tests;
pub mod session_tests;
