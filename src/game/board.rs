use super::error::{GameError, Result};

/// Number of rows on the board.
pub const ROWS: usize = 4;
/// Number of columns on the board.
pub const COLUMNS: usize = 4;
/// Number of cells on the board.
pub const CELLS: usize = ROWS * COLUMNS;
/// Number of symbol pairs hidden on the board.
pub const PAIRS: usize = CELLS / 2;

/// A validated cell position. Can only be built inside the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Fails with `InvalidCoordinate` outside the board.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= ROWS || col >= COLUMNS {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub(crate) fn index(&self) -> usize {
        self.row * COLUMNS + self.col
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..ROWS).flat_map(|row| (0..COLUMNS).map(move |col| Coord { row, col }))
    }
}

/// Whether a cell is still in play.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Lock {
    #[default]
    Unresolved,
    /// Paired and permanently face-up.
    Matched,
}

/// One board position: the hidden symbol plus its reveal and lock markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<S> {
    pub symbol: S,
    /// Face-up right now.
    pub revealed: bool,
    pub lock: Lock,
}

impl<S> Cell<S> {
    pub(crate) fn hidden(symbol: S) -> Self {
        Self {
            symbol,
            revealed: false,
            lock: Lock::Unresolved,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.lock == Lock::Matched
    }
}

/// Cells picked for the pending comparison.
///
/// `Two` only exists between the second tap and its resolution; a stored
/// selection is always `Empty` or `One`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    One(Coord),
    Two(Coord, Coord),
}

impl Selection {
    pub(crate) fn push(self, coord: Coord) -> Selection {
        match self {
            Selection::Empty => Selection::One(coord),
            Selection::One(first) => Selection::Two(first, coord),
            // Never stored, but restart from the new tap rather than drop it.
            Selection::Two(_, _) => Selection::One(coord),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Empty)
    }
}

/// What the player sees: `Some(symbol)` for face-up cells, `None` for blanks.
pub type DisplayGrid<'a, S> = [[Option<&'a S>; COLUMNS]; ROWS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).is_ok());
        assert!(Coord::new(ROWS - 1, COLUMNS - 1).is_ok());
        assert_eq!(
            Coord::new(ROWS, 0),
            Err(GameError::InvalidCoordinate { row: ROWS, col: 0 })
        );
        assert_eq!(
            Coord::new(0, COLUMNS),
            Err(GameError::InvalidCoordinate { row: 0, col: COLUMNS })
        );
    }

    #[test]
    fn test_coord_all_is_row_major() {
        let coords: Vec<Coord> = Coord::all().collect();
        assert_eq!(coords.len(), CELLS);
        for (i, coord) in coords.iter().enumerate() {
            assert_eq!(coord.index(), i);
        }
    }

    #[test]
    fn test_selection_push() {
        let a = Coord::new(0, 1).unwrap();
        let b = Coord::new(2, 3).unwrap();
        let one = Selection::Empty.push(a);
        assert_eq!(one, Selection::One(a));
        assert_eq!(one.push(b), Selection::Two(a, b));
        assert!(Selection::default().is_empty());
    }
}
