//! Long-lived services shared by the bot and the HTTP server.

/// HTTP health checks.
pub mod health;
/// Persistent per-chat high scores.
pub mod high_scores;
