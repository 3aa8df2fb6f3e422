use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::commands::{games, general, Command};
use crate::bot::persona::Persona;
use crate::bot::state::{GameDialogue, HandlerResult};
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// Username (or "unknown") and id of whoever sent `msg`.
pub fn sender(msg: &Message) -> (String, u64) {
    match msg.from() {
        Some(user) => (
            user.username.clone().unwrap_or_else(|| "unknown".to_string()),
            user.id.0,
        ),
        None => ("unknown".to_string(), 0),
    }
}

/// Runs a parsed command with start/success/error logging.
pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: GameDialogue,
    persona: Arc<Persona>,
) -> HandlerResult {
    let (user, user_id) = sender(&msg);
    let chat_id = msg.chat.id.0;
    let name = format!("{cmd:?}").to_lowercase();

    log_command_start(&name, &user, user_id, chat_id, None);

    let result = match cmd {
        Command::Start => general::handle_start(bot, msg, &persona).await,
        Command::Help => general::handle_help(bot, msg, &persona).await,
        Command::Games => games::handle_games(bot, msg, dialogue).await,
        Command::Cancel => general::handle_cancel(bot, msg, dialogue).await,
    };

    match &result {
        Ok(()) => log_command_success(&name, &user, user_id, chat_id, None),
        Err(e) => log_command_error(&name, &user, user_id, chat_id, &e.to_string()),
    }
    result
}
