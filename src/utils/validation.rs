use anyhow::{anyhow, Result};
use crate::game::Coord;

/// Separator between row and column in board button callback data.
pub const CELL_CALLBACK_SEPARATOR: char = '_';

/// Callback data of the board button at `coord`.
pub fn cell_callback_data(coord: Coord) -> String {
    format!("{}{}{}", coord.row(), CELL_CALLBACK_SEPARATOR, coord.col())
}

/// Parses board button callback data of the form `"{row}_{col}"`.
pub fn parse_cell_callback(data: &str) -> Result<Coord> {
    let (row, col) = data
        .split_once(CELL_CALLBACK_SEPARATOR)
        .ok_or_else(|| anyhow!("Callback data '{}' is not a board cell", data))?;

    let row: usize = row.parse()
        .map_err(|_| anyhow!("Invalid row in callback data '{}'", data))?;
    let col: usize = col.parse()
        .map_err(|_| anyhow!("Invalid column in callback data '{}'", data))?;

    Ok(Coord::new(row, col)?)
}

/// Rejects ids Telegram never assigns. Private chat ids are user ids, which
/// no longer fit in 32 bits, so only zero is refused.
pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    Ok(())
}
