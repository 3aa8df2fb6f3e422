/// /games and the game picker.
pub mod games;
/// /start, /help and /cancel.
pub mod general;

use teloxide::utils::command::BotCommands;

/// Commands the bot answers to.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Commands:")]
pub enum Command {
    #[command(description = "Start a conversation.")]
    Start,
    #[command(description = "Games!")]
    Games,
    #[command(description = "Cancel the current operation.")]
    Cancel,
    #[command(description = "Displays a list of commands.")]
    Help,
}
