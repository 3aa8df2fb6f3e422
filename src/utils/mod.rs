//! Helpers shared by the bot handlers: logging, input parsing, reply formatting.

/// Formatted status replies.
pub mod feedback;
/// Time-of-day helpers for the greeting.
pub mod greeting;
/// Consistent log lines.
pub mod logging;
pub mod markdown;
/// Parsing and checking user input.
pub mod validation;
