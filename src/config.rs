use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/steve.db";

/// Settings read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    /// Port of the health check server.
    pub http_port: u16,
    /// Name the bot introduces itself with.
    pub bot_name: String,
    /// File with one fun fact per line.
    pub fun_facts_path: PathBuf,
    /// Offset from UTC, in hours, used to pick "morning"/"afternoon"/"evening".
    pub greeting_utc_offset_hours: i32,
}

impl Config {
    /// Reads every setting, applying defaults for the optional ones.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let database_url = if database_url.trim().is_empty() {
            DEFAULT_DATABASE_URL.to_string()
        } else {
            database_url
        };

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let bot_name = env::var("BOT_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Steve".to_string());

        let fun_facts_path = env::var("FUN_FACTS_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| "fun_facts.txt".to_string())
            .into();

        let offset_str = env::var("GREETING_UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| "8".to_string());
        let greeting_utc_offset_hours = offset_str.trim()
            .parse::<i32>()
            .ok()
            .filter(|hours| (-12..=14).contains(hours))
            .ok_or_else(|| anyhow!("Invalid GREETING_UTC_OFFSET_HOURS"))?;

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            bot_name,
            fun_facts_path,
            greeting_utc_offset_hours,
        })
    }
}
