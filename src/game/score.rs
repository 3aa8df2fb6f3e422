use std::fmt;

/// Best (lowest) move count for a chat. Zero means no game has been won yet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HighScore(u32);

impl HighScore {
    /// No game won yet.
    pub const UNSET: HighScore = HighScore(0);

    pub fn from_moves(moves: u32) -> Self {
        Self(moves)
    }

    pub fn moves(&self) -> u32 {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Folds a finished game into the record: the new score wins when nothing
    /// is recorded yet or when it took fewer moves.
    pub fn merge(self, score: u32) -> Self {
        if self.is_unset() || score < self.0 {
            Self(score)
        } else {
            self
        }
    }
}

impl fmt::Display for HighScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
