pub(crate) mod census;
pub(crate) mod flood;
pub(crate) mod history;
pub(crate) mod indexing;
pub(crate) mod pretty;
pub(crate) mod region;

use itertools::Itertools;

use super::prelude::*;

pub use census::ColourHistogram;
pub use flood::MoveResult;
pub use region::Region;

/// The matrix of colours on a Flood-It board, stored at full capacity.
/// Cells at or beyond `size` are padding and never read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: [[Colour; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
}

impl Grid {
    /// Fills a fresh grid, one uniform draw per cell in row-major order.
    pub(crate) fn generate(size: usize, colours: usize, rng: &mut impl Rng) -> Grid {
        let mut grid = Grid {
            size,
            cells: [[Colour::Red; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
        };
        for row in 0..size {
            for col in 0..size {
                grid.cells[row][col] = Colour::from(rng.gen_range(0..colours as u8));
            }
        }
        grid
    }

    /// Unchecked constructor over explicit rows; callers validate the edge.
    pub(crate) fn from_cells(size: usize, cells: [[Colour; MAX_BOARD_SIZE]; MAX_BOARD_SIZE]) -> Grid {
        Grid { size, cells }
    }

    /// The edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Unchecked accessor; callers stay inside `size`.
    pub(crate) fn at(&self, coord: &Coord) -> Colour {
        self.cells[coord.row][coord.col]
    }

    /// Unchecked write; callers stay inside `size`.
    pub(crate) fn set(&mut self, coord: &Coord, colour: Colour) {
        self.cells[coord.row][coord.col] = colour;
    }

    /// Determines whether every cell matches the origin colour.
    pub fn is_uniform(&self) -> bool {
        let target = self.at(&ORIGIN);
        self.cells
            .iter()
            .take(self.size)
            .all(|row| row.iter().take(self.size).all(|cell| *cell == target))
    }

    /// Percentage of cells matching the origin colour anywhere on the
    /// grid, with truncating division.
    pub fn flooded_percentage(&self) -> usize {
        let target = self.at(&ORIGIN);
        let matching = self
            .cells
            .iter()
            .take(self.size)
            .map(|row| row.iter().take(self.size).filter(|cell| **cell == target).count())
            .sum::<usize>();
        matching * 100 / (self.size * self.size)
    }

    /// Notates the grid as a flat row-major digit string.
    pub fn notate(&self) -> String {
        self.cells
            .iter()
            .take(self.size)
            .map(|row| row.iter().take(self.size).map(|cell| cell.index()).join(""))
            .join("")
    }
}

/// A Flood-It game in progress.
#[derive(Clone, Debug)]
pub struct Board {
    /// The coloured grid as of the latest applied move.
    cells: Grid,

    /// The number of colours dealt into this game.
    colours: usize,

    /// The number of applied moves; undo and redo walk this counter.
    moves: usize,

    /// Set once the grid becomes uniform; cleared only by a new deal.
    game_over: bool,

    /// Pre-move snapshots of applied moves, oldest first.
    undo_stack: Vec<Grid>,

    /// Snapshots unwound by undo, most recently undone last.
    redo_stack: Vec<Grid>,
}

impl Board {
    /// Deals a new randomized board within the supported limits.
    pub fn new(size: usize, colours: usize, rng: &mut impl Rng) -> Result<Board, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
            || !(MIN_COLOURS..=MAX_COLOURS).contains(&colours)
        {
            return Err(GameError::InvalidConfiguration { size, colours });
        }
        Ok(Board::start(Grid::generate(size, colours, rng), colours))
    }

    /// Starts a game on an explicit grid, e.g. one recovered from notation.
    ///
    /// Unlike `new`, this accepts any edge length the grid storage can hold,
    /// so fixed scenarios may be smaller than the randomized minimum.
    pub fn with_grid(grid: Grid, colours: usize) -> Result<Board, GameError> {
        if !(1..=MAX_BOARD_SIZE).contains(&grid.size())
            || !(MIN_COLOURS..=MAX_COLOURS).contains(&colours)
        {
            return Err(GameError::InvalidConfiguration { size: grid.size(), colours });
        }
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                if grid.at(&Coord::new(row, col)).index() >= colours {
                    return Err(GameError::InvalidConfiguration { size: grid.size(), colours });
                }
            }
        }
        Ok(Board::start(grid, colours))
    }

    fn start(cells: Grid, colours: usize) -> Board {
        Board {
            cells,
            colours,
            moves: 0,
            game_over: false,
            undo_stack: vec![],
            redo_stack: vec![],
        }
    }

    /// The edge length of the board.
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// The number of colours dealt into this game.
    pub fn colours(&self) -> usize {
        self.colours
    }

    /// The number of applied moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Whether the board has been flooded to completion.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The colour currently occupying the origin.
    pub fn origin_colour(&self) -> Colour {
        self.cells.at(&ORIGIN)
    }

    /// Percentage of cells matching the origin colour, truncated.
    pub fn flooded_percentage(&self) -> usize {
        self.cells.flooded_percentage()
    }

    /// The session counters reported to the presentation layer.
    pub fn status(&self) -> Status {
        Status {
            moves: self.moves,
            flooded: self.flooded_percentage(),
            game_over: self.game_over,
        }
    }

    /// Notates the board's grid.
    pub fn notate(&self) -> String {
        self.cells.notate()
    }
}

/// Session counters: move count, flooded percentage, terminal flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub moves: usize,
    pub flooded: usize,
    pub game_over: bool,
}
