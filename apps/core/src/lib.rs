//! Haven core library.
//!
//! Rule-based supportive responder: classifies a user's message (optionally with a
//! detected facial expression) into one of a fixed set of categories and returns the
//! canned reply for that category.
//!
//! ```rust,ignore
//! use haven_core::brain::{Responder, EmotionSignal};
//!
//! let responder = Responder::new();
//! let reply = responder.respond("I can't sleep", &[], None);
//! println!("{}", reply.text);
//! ```

pub mod actors;
pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod mood;
pub mod resources;
pub mod session;

pub use error::AppError;

#[cfg(test)]
mod tests;
