//! # Steve Bot
//!
//! A personal Telegram bot that greets you, hands out fun facts, and hosts a
//! few games.
//!
//! ## Features
//! - `/start` greeting that knows what time of day it is
//! - `/games` menu with Telegram's animated dice
//! - "Escape the matrix": a 4x4 memory-matching game with a per-chat highscore
//! - Persistent highscores with SQLite

/// Telegram commands, dialogue state, and the game board UI
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// The matching-game engine
pub mod game;
/// Background services like highscore storage and health checks
pub mod services;
/// Utility functions for logging, validation, and formatting
pub mod utils;
