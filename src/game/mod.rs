//! The "Escape the matrix" memory game.
//!
//! A 4x4 board hides eight symbol pairs. The player taps two cells per move;
//! equal symbols stay face-up, different ones flip back. The game is won once
//! every pair is matched, and the move count is the score (lower is better).
//!
//! The engine is transport-agnostic: the bot layer owns one [`MatchingGame`]
//! per chat, feeds it taps, and renders [`DisplayGrid`]s.

/// Board geometry and cell types.
pub mod board;
pub mod engine;
pub mod error;
/// Per-chat best score.
pub mod score;
/// Emoji sets boards are dealt from.
pub mod themes;

pub use board::{Cell, Coord, DisplayGrid, Lock, Selection, CELLS, COLUMNS, PAIRS, ROWS};
pub use engine::{GameStatus, MatchingGame, Resolution, Turn, WinSignal};
pub use error::{GameError, Result};
pub use score::HighScore;
pub use themes::{random_theme, THEMES};
