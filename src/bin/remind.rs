//! # Reminder Tracker
//!
//! Interactive prompt for managing personal reminders stored in a local
//! JSON file (`REMINDERS_FILE`, default `reminders.json`).
//!
//! Usage: `cargo run --bin remind`

use anyhow::Result;
use dialoguer::{Input, Select};
use dotenvy::dotenv;
use log::{error, info};

use reminders::{Config, MenuChoice, MenuHandler, Prompt, ReminderStore};

/// Answers prompts from the terminal, one line at a time
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, label: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

fn main() {
    if let Err(e) = run() {
        error!("Reminder tracker stopped: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting reminder tracker...");

    let mut store = ReminderStore::open(&config.reminders_path);
    if let Some(diagnostic) = store.load_diagnostic() {
        eprintln!("Warning: {diagnostic}. Starting with an empty list.");
    }

    println!("Reminder Tracker");
    println!("================");

    let handler = MenuHandler::new();
    let mut prompt = TerminalPrompt;

    loop {
        let stats = store.stats();
        println!(
            "\n{} reminders ({} pending, {} completed)",
            stats.total, stats.pending, stats.completed
        );

        let index = Select::new()
            .with_prompt("Choose an option")
            .items(&MenuChoice::ALL[..])
            .default(0)
            .interact()?;

        let Some(choice) = MenuChoice::from_number(index + 1) else {
            continue;
        };

        let output = handler.handle(choice, &mut store, &mut prompt)?;
        println!("{output}");

        if choice == MenuChoice::Exit {
            break;
        }
    }

    info!("Reminder tracker exiting");
    Ok(())
}
