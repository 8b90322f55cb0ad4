// Haven CLI Entry Point
// Interactive front end for the rule-based responder

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use haven_core::brain::{EmotionSignal, Responder};
use haven_core::config::AppConfig;
use haven_core::models::MoodLevel;
use haven_core::mood::{self, MoodTracker};
use haven_core::resources::{self, ResourceKind};
use haven_core::session::ChatSession;
use haven_core::logging;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// Haven: supportive rule-based chat responder.
#[derive(Parser)]
#[command(name = "haven", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive conversation (default).
    Chat {
        /// Treat every turn as carrying this detected emotion.
        #[arg(long)]
        emotion: Option<String>,
    },

    /// Classify a single message and print the reply.
    Classify {
        message: String,

        /// Detected emotion label (happy, sad, angry, fearful, disgusted, surprised, neutral).
        #[arg(long)]
        emotion: Option<String>,

        /// Print the classification as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Record today's mood (1 = very low, 5 = excellent).
    Mood {
        level: u8,

        #[arg(long, default_value = "")]
        note: String,

        /// Day to record (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
    },

    /// List support resources.
    Resources,
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("invalid configuration")?;
    logging::init_tracing(config.log_format);

    let cli = Cli::parse();
    let responder = Responder::with_settings(config.classifier_settings());

    match cli.command.unwrap_or(Command::Chat { emotion: None }) {
        Command::Chat { emotion } => {
            run_chat(responder, emotion.as_deref().and_then(EmotionSignal::parse))
        }
        Command::Classify {
            message,
            emotion,
            json,
        } => {
            let emotion = emotion.as_deref().and_then(EmotionSignal::parse);
            let reply = responder.respond(&message, &[], emotion.as_ref());
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("[{}] {}", reply.category(), reply.text);
            }
            Ok(())
        }
        Command::Mood { level, note, date } => record_mood(&config, level, note, date.as_deref()),
        Command::Resources => {
            print_resources();
            Ok(())
        }
    }
}

fn run_chat(responder: Responder, emotion: Option<EmotionSignal>) -> anyhow::Result<()> {
    let mut session = ChatSession::new(responder);
    info!(emotion = ?emotion, "Starting chat session");

    if let Some(welcome) = session.history().first() {
        println!("assistant> {}", welcome.content);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.submit(&line, emotion.as_ref()) {
            Ok(reply) => println!("assistant> {}", reply.text),
            // Blank lines are simply skipped
            Err(haven_core::AppError::Validation(_)) => continue,
            Err(e) => error!("Failed to respond: {}", e),
        }
    }

    info!(turns = session.user_turns(), "Chat session ended");
    Ok(())
}

fn record_mood(
    config: &AppConfig,
    level: u8,
    note: String,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let path = config
        .mood_log
        .clone()
        .context("HAVEN_MOOD_LOG is not set")?;
    let level = MoodLevel::try_from(level)?;
    let date = match date {
        Some(raw) => mood::parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let mut tracker = MoodTracker::load(&path)?;
    tracker.record(date, level, note);
    tracker.save(&path)?;

    println!("Recorded mood for {}: {}", date, level.label());
    if let Some(avg) = tracker.average() {
        println!("Average over {} days: {:.1}", tracker.entries().len(), avg);
    }
    Ok(())
}

fn print_resources() {
    for kind in [
        ResourceKind::CrisisLine,
        ResourceKind::Reading,
        ResourceKind::Exercise,
        ResourceKind::App,
    ] {
        println!("{}", kind);
        for resource in resources::by_kind(kind) {
            match resource.contact {
                Some(contact) => println!("  {} ({})", resource.title, contact),
                None => println!("  {}", resource.title),
            }
            println!("    {}", resource.description);
            println!("    {}", resource.link);
        }
        println!();
    }
}
