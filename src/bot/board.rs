use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::game::{Coord, DisplayGrid, HighScore, Resolution, COLUMNS};
use crate::utils::validation::cell_callback_data;

/// Button label for a face-down cell.
pub const HIDDEN_CELL: &str = " ";

/// Headline while a game is running.
pub const PLAYING_HEADLINE: &str = "Escape the matrix.";
/// Headline once every pair is matched.
pub const WON_HEADLINE: &str = "Congratulations! You won! 🎉";

/// Message text shown above the board.
pub fn board_text(headline: &str, high_score: HighScore, moves: u32) -> String {
    format!("{headline}\n\nHighscore: {high_score}\nMoves used: {moves}")
}

/// One callback button per cell, laid out like the board.
pub fn board_keyboard(grid: &DisplayGrid<'_, String>) -> InlineKeyboardMarkup {
    let coords: Vec<Coord> = Coord::all().collect();
    let rows = coords.chunks(COLUMNS).map(|row| {
        row.iter()
            .map(|coord| {
                let label = grid[coord.row()][coord.col()]
                    .map_or_else(|| HIDDEN_CELL.to_string(), |symbol| symbol.clone());
                InlineKeyboardButton::callback(label, cell_callback_data(*coord))
            })
            .collect::<Vec<_>>()
    });

    InlineKeyboardMarkup::new(rows)
}

/// Cells that flipped back face-down on this tap. The next board edit shows
/// them for one frame so the player sees what they tapped.
pub fn flashed_cells(resolution: Resolution) -> Vec<Coord> {
    match resolution {
        Resolution::Mismatched(first, second) => vec![first, second],
        Resolution::Cancelled(cell) => vec![cell],
        Resolution::Ignored | Resolution::Revealed(_) | Resolution::Matched(_, _) => Vec::new(),
    }
}
