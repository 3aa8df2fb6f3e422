use anyhow::Result;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use std::path::Path;
use teloxide::utils::command::BotCommands;
use teloxide::utils::html;

use crate::bot::commands::Command;
use crate::config::Config;
use crate::utils::greeting::{local_hour, part_of_day};

const HELP_EXPRESSIONS: [&str; 5] = [
    "I don't even know what the f*** half of them are used for. 🙄",
    "Use them if you want. Zzz... 😴",
    "Yeehaw! 🤠",
    "Please, do whatever you want with them, but leave my family alone. 😣",
    "Steve, at your service. 🫡",
];

/// The bot's voice: its name, its fun facts, and the clock it greets by.
#[derive(Debug, Clone)]
pub struct Persona {
    name: String,
    fun_facts: Vec<String>,
    utc_offset_hours: i32,
}

impl Persona {
    pub fn new(name: impl Into<String>, fun_facts: Vec<String>, utc_offset_hours: i32) -> Self {
        Self {
            name: name.into(),
            fun_facts,
            utc_offset_hours,
        }
    }

    /// Builds the persona from config. A missing fun facts file only logs a warning.
    pub fn from_config(config: &Config) -> Self {
        let fun_facts = match load_fun_facts(&config.fun_facts_path) {
            Ok(facts) => {
                tracing::info!("Loaded {} fun facts from {}", facts.len(), config.fun_facts_path.display());
                facts
            }
            Err(e) => {
                tracing::warn!(
                    "No fun facts loaded from {}: {}",
                    config.fun_facts_path.display(),
                    e
                );
                Vec::new()
            }
        };

        Self::new(config.bot_name.clone(), fun_facts, config.greeting_utc_offset_hours)
    }

    /// /start reply, HTML formatted.
    pub fn greeting(&self, now: DateTime<Utc>) -> String {
        let part = part_of_day(local_hour(now, self.utc_offset_hours));
        let mut text = format!(
            "Good {}! My name is {}. What can I do for you today? (Press /help for a list of commands)",
            html::escape(part),
            html::escape(&self.name)
        );

        if let Some(fact) = self.fun_facts.choose(&mut rand::thread_rng()) {
            text.push_str(&format!("\n\n<i>Fun fact: {}</i>", html::escape(fact)));
        }

        text
    }

    /// /help reply: a random remark followed by the command list.
    pub fn help(&self) -> String {
        let expression = HELP_EXPRESSIONS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();

        format!("A list of commands. {expression}\n\n{}", Command::descriptions())
    }

    pub fn fun_facts(&self) -> &[String] {
        &self.fun_facts
    }
}

/// Reads one fun fact per non-empty line.
pub fn load_fun_facts(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
