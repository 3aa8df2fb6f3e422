use teloxide::prelude::*;
use crate::bot::state::HandlerResult;
use crate::utils::feedback::CommandFeedback;

/// Reply to a command the bot does not know.
pub const UNKNOWN_COMMAND: &str = "Sorry, I didn't understand that command.";

/// Messages that look like a command but didn't parse as one of ours.
pub fn is_command_like(msg: Message) -> bool {
    msg.text().is_some_and(|text| text.starts_with('/'))
}

pub async fn handle_unknown_command(bot: Bot, msg: Message) -> HandlerResult {
    let command = msg.text().and_then(|t| t.split_whitespace().next()).unwrap_or_default();
    tracing::debug!("Unknown command '{}' in chat {}", command, msg.chat.id.0);

    bot.send_message(msg.chat.id, UNKNOWN_COMMAND).await?;
    Ok(())
}

/// Free text outside any conversation. Only obvious questions get a hint;
/// everything else, and all group chatter, is ignored.
pub async fn handle_general_message(bot: Bot, msg: Message) -> HandlerResult {
    if !msg.chat.is_private() {
        return Ok(());
    }

    let feedback = CommandFeedback::new(bot, msg.chat.id);

    if let Some(text) = msg.text() {
        let text = text.to_lowercase();
        if text.contains("game") || text.contains("matrix") {
            feedback.info("Looking for a game? Try /games").await?;
        } else if text.contains("help") {
            feedback.info("Use /help to see all available commands!").await?;
        }
    }

    Ok(())
}
