//! Telegram side of the bot: commands, dialogue state, and the game board UI.

/// Board message text and inline keyboard.
pub mod board;
/// Slash commands.
pub mod commands;
/// Dispatcher tree and endpoints.
pub mod handlers;
/// Greeting and help texts.
pub mod persona;
/// Per-chat dialogue state.
pub mod state;
