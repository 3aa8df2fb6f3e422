use rand::seq::SliceRandom;
use rand::Rng;

use super::board::{Cell, Coord, DisplayGrid, Lock, Selection, CELLS, COLUMNS, PAIRS, ROWS};
use super::error::{GameError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every cell is matched.
    Won,
}

/// What a single tap did to the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The cell was already matched; nothing changed.
    Ignored,
    /// First cell of a pair turned face-up.
    Revealed(Coord),
    /// The same cell was tapped twice and turned back face-down. Costs no move.
    Cancelled(Coord),
    /// Both cells hold the same symbol and are now locked face-up.
    Matched(Coord, Coord),
    /// Different symbols; both cells turned back face-down.
    Mismatched(Coord, Coord),
}

/// Emitted once, by the tap that matches the last pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WinSignal {
    /// Final move count, the chat's score for this game.
    pub moves: u32,
}

/// Result of one tap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Turn {
    pub resolution: Resolution,
    pub win: Option<WinSignal>,
}

impl Turn {
    fn ignored() -> Self {
        Self {
            resolution: Resolution::Ignored,
            win: None,
        }
    }

    /// Whether the tap changed anything a player could see.
    pub fn changed(&self) -> bool {
        self.resolution != Resolution::Ignored
    }
}

/// One game of "Escape the matrix": a 4x4 board of hidden symbol pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingGame<S> {
    cells: Vec<Cell<S>>,
    selection: Selection,
    moves: u32,
}

impl<S: Clone + PartialEq> MatchingGame<S> {
    /// Deals a new board from `symbols` using the thread-local RNG.
    pub fn new(symbols: &[S]) -> Result<Self> {
        Self::new_with_rng(symbols, &mut rand::thread_rng())
    }

    /// Deals a new board: picks `PAIRS` distinct symbols at random, doubles
    /// them, shuffles, and lays them out row-major.
    pub fn new_with_rng<R: Rng + ?Sized>(symbols: &[S], rng: &mut R) -> Result<Self> {
        let mut distinct: Vec<&S> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if !distinct.contains(&symbol) {
                distinct.push(symbol);
            }
        }

        if distinct.len() < PAIRS {
            return Err(GameError::InvalidConfig {
                required: PAIRS,
                supplied: distinct.len(),
            });
        }

        let mut deck: Vec<S> = distinct
            .choose_multiple(rng, PAIRS)
            .flat_map(|symbol| [(*symbol).clone(), (*symbol).clone()])
            .collect();
        deck.shuffle(rng);

        let cells: Vec<Cell<S>> = deck.into_iter().map(Cell::hidden).collect();
        debug_assert_eq!(cells.len(), CELLS);

        Ok(Self {
            cells,
            selection: Selection::Empty,
            moves: 0,
        })
    }

    /// Same as [`select`](Self::select), for callers holding raw indices.
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<Turn> {
        let coord = Coord::new(row, col)?;
        Ok(self.select(coord))
    }

    /// Taps a cell. Matched cells are inert; the second tap of a pair resolves it.
    pub fn select(&mut self, coord: Coord) -> Turn {
        let cell = &mut self.cells[coord.index()];
        if cell.is_matched() {
            return Turn::ignored();
        }
        cell.revealed = true;

        let resolution = match self.selection.push(coord) {
            Selection::Two(first, second) => {
                self.selection = Selection::Empty;
                self.resolve(first, second)
            }
            pending => {
                self.selection = pending;
                Resolution::Revealed(coord)
            }
        };

        let win = match resolution {
            Resolution::Matched(_, _) if self.is_won() => Some(WinSignal { moves: self.moves }),
            _ => None,
        };

        Turn { resolution, win }
    }

    fn resolve(&mut self, first: Coord, second: Coord) -> Resolution {
        if first == second {
            self.cells[first.index()].revealed = false;
            return Resolution::Cancelled(first);
        }

        self.moves += 1;

        if self.cells[first.index()].symbol == self.cells[second.index()].symbol {
            self.cells[first.index()].lock = Lock::Matched;
            self.cells[second.index()].lock = Lock::Matched;
            Resolution::Matched(first, second)
        } else {
            self.cells[first.index()].revealed = false;
            self.cells[second.index()].revealed = false;
            Resolution::Mismatched(first, second)
        }
    }
}

impl<S> MatchingGame<S> {
    /// Symbols of face-up cells; `None` for the rest.
    pub fn render(&self) -> DisplayGrid<'_, S> {
        self.render_revealing(&[])
    }

    /// Like [`render`](Self::render), with `extra` cells shown face-up as well.
    /// Used to flash a mismatched pair without keeping it revealed.
    pub fn render_revealing(&self, extra: &[Coord]) -> DisplayGrid<'_, S> {
        let mut grid: DisplayGrid<'_, S> = [[None; COLUMNS]; ROWS];
        for coord in Coord::all() {
            let cell = &self.cells[coord.index()];
            if cell.revealed || extra.contains(&coord) {
                grid[coord.row()][coord.col()] = Some(&cell.symbol);
            }
        }
        grid
    }

    /// Resolved pairs so far, matched or not.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cell(&self, coord: Coord) -> &Cell<S> {
        &self.cells[coord.index()]
    }

    pub fn symbol_at(&self, coord: Coord) -> &S {
        &self.cell(coord).symbol
    }

    pub fn is_won(&self) -> bool {
        self.cells.iter().all(Cell::is_matched)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
