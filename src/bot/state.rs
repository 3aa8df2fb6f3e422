use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::MessageId;

use crate::game::{HighScore, MatchingGame};

/// Error type shared by every dispatcher endpoint.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Per-chat conversation slot. Each chat owns its own game; the storage is the
/// session store.
pub type GameDialogue = Dialogue<State, InMemStorage<State>>;

/// What the chat is doing right now.
#[derive(Clone, Debug, Default)]
pub enum State {
    /// Nothing running.
    #[default]
    Idle,
    /// The games menu keyboard is showing.
    ChoosingGame,
    /// A matching game is on the board.
    Matrix(MatrixSession),
}

impl State {
    pub fn is_idle(&self) -> bool {
        matches!(self, State::Idle)
    }
}

/// A running "Escape the matrix" game and what the board message shows.
#[derive(Clone, Debug)]
pub struct MatrixSession {
    pub game: MatchingGame<String>,
    /// Best score for this chat when the game started.
    pub high_score: HighScore,
    /// Taps on any other message's buttons belong to an abandoned board.
    pub board_message: MessageId,
}
