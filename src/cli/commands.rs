use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::session::DEFAULT_REPLY_DELAY_MS;
use crate::{responses, subjects, tui};

#[derive(Parser)]
#[command(name = "brainlearn")]
#[command(version = "0.1.0")]
#[command(about = "Explore subjects through an interactive brain map", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive explorer
    Tui {
        /// Delay before the assistant's scripted reply lands, in milliseconds
        #[arg(long, default_value_t = DEFAULT_REPLY_DELAY_MS)]
        reply_delay_ms: u64,
    },
    /// List the subjects on the brain map
    Subjects {
        /// Emit the registry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the chat greeting for a subject
    Greet {
        /// Subject id (for example "math" or "history")
        subject: String,
    },
    /// Resolve a one-shot assistant reply without opening the TUI
    Ask {
        /// Subject context for the reply
        #[arg(long)]
        subject: Option<String>,
        /// The question to ask
        text: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Tui { reply_delay_ms }) => {
            tui::run_interactive(Duration::from_millis(*reply_delay_ms))?;
        }
        Some(Commands::Subjects { json }) => {
            list_subjects(*json)?;
        }
        Some(Commands::Greet { subject }) => {
            println!("{}", responses::greeting_for(subject));
        }
        Some(Commands::Ask { subject, text }) => {
            println!("{}", responses::resolve(subject.as_deref(), text));
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn list_subjects(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(subjects::all())?);
        return Ok(());
    }

    println!("BrainLearn Subjects");
    println!("===================");
    for subject in subjects::all() {
        println!("{:<12} {}", subject.id, subject.name);
    }
    println!();
    println!("Total subjects: {}", subjects::all().len());

    Ok(())
}
