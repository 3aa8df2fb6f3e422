use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::{KeyboardRemove, ParseMode};

use crate::bot::persona::Persona;
use crate::bot::state::{GameDialogue, HandlerResult};

/// Reply when /cancel ends a conversation.
pub const CANCELED: &str = "Operation canceled.";
/// Reply when /cancel finds nothing running.
pub const NOTHING_TO_CANCEL: &str = "No active command to cancel. I wasn't doing anything anyway. Ugh. 🙄";

/// Greets the chat.
pub async fn handle_start(bot: Bot, msg: Message, persona: &Persona) -> HandlerResult {
    bot.send_message(msg.chat.id, persona.greeting(Utc::now()))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}

/// Lists the commands.
pub async fn handle_help(bot: Bot, msg: Message, persona: &Persona) -> HandlerResult {
    bot.send_message(msg.chat.id, persona.help()).await?;
    Ok(())
}

/// Leaves whatever conversation the chat is in. A running board is abandoned;
/// its buttons stop responding.
pub async fn handle_cancel(bot: Bot, msg: Message, dialogue: GameDialogue) -> HandlerResult {
    let state = dialogue.get().await?.unwrap_or_default();

    if state.is_idle() {
        bot.send_message(msg.chat.id, NOTHING_TO_CANCEL).await?;
        return Ok(());
    }

    dialogue.exit().await?;
    bot.send_message(msg.chat.id, CANCELED)
        .reply_markup(KeyboardRemove::new())
        .await?;
    Ok(())
}
