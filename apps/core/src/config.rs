//! Configuration
//!
//! Settings are read from the environment after loading an optional `.env` file.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `HAVEN_SHORT_MESSAGE_THRESHOLD` | 50 | messages shorter than this defer to the emotion signal |
//! | `HAVEN_EMOTION_POLL_MS` | 1000 | emotion detector polling interval |
//! | `HAVEN_LOG_FORMAT` | `pretty` | `pretty` or `json` |
//! | `HAVEN_MOOD_LOG` | unset | path of the mood log file |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::brain::classifier::{ClassifierSettings, DEFAULT_SHORT_MESSAGE_THRESHOLD};
use crate::error::AppError;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

/// Runtime configuration for the responder and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Messages shorter than this many characters defer to the emotion signal.
    #[validate(range(min = 1, max = 10000))]
    pub short_message_threshold: usize,
    /// Interval between emotion detection passes, in milliseconds.
    #[validate(range(min = 50, max = 60000))]
    pub emotion_poll_ms: u64,
    /// Log output format.
    pub log_format: LogFormat,
    /// Where the mood log is persisted, if anywhere.
    pub mood_log: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            short_message_threshold: DEFAULT_SHORT_MESSAGE_THRESHOLD,
            emotion_poll_ms: 1000,
            log_format: LogFormat::Pretty,
            mood_log: None,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the configuration from the environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env file is not an error
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// Reads the configuration from the process environment only.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            short_message_threshold: parse_var(
                "HAVEN_SHORT_MESSAGE_THRESHOLD",
                defaults.short_message_threshold,
            )?,
            emotion_poll_ms: parse_var("HAVEN_EMOTION_POLL_MS", defaults.emotion_poll_ms)?,
            log_format: parse_var("HAVEN_LOG_FORMAT", defaults.log_format)?,
            mood_log: env::var_os("HAVEN_MOOD_LOG")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            short_message_threshold: self.short_message_threshold,
        }
    }

    pub fn emotion_poll_interval(&self) -> Duration {
        Duration::from_millis(self.emotion_poll_ms)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        _ => Ok(default),
    }
}
