
use regex::Regex;

use crate::{
    flood_it::board::Grid,
    prelude::{Colour, MAX_BOARD_SIZE, MIN_COLOURS},
    utils::prelude::*,
};

/// A flat digit encoding of a board deal: one cell per character in
/// row-major order, so "0110" lays out a 2x2 board with red corners
/// on the main diagonal.
///
/// The palette width is inferred as the smallest playable palette
/// covering every digit that appears.
#[derive(Clone, Debug)]
pub struct GridString {
    pub repr: String,
    pub grid: Grid,
    pub colours: usize,
}

/// Finds the edge length of a square encoding, if it has one.
fn _edge_length(len: usize) -> std::result::Result<usize, Error> {
    (1..=MAX_BOARD_SIZE)
        .find(|n| n * n == len)
        .ok_or_else(|| anyhow!("a gridstring of {len} cells is not a playable square"))
}

impl std::str::FromStr for GridString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new("^[0-5]+$")?;
        if !pattern.is_match(s) {
            return Err(anyhow!("could not parse gridstring {s}"));
        }

        let size = _edge_length(s.len())?;
        let mut cells = [[Colour::Red; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
        let mut highest = 0u8;
        for (i, ch) in s.chars().enumerate() {
            let [r, c] = [i / size, i % size];
            let digit = (ch as u8) - b'0'; // the pattern admits only 0-5
            highest = highest.max(digit);
            cells[r][c] = Colour::from(digit);
        }

        let grid = Grid::from_cells(size, cells);
        let colours = (highest as usize + 1).max(MIN_COLOURS);
        Ok(GridString { repr: s.to_owned(), grid, colours })
    }
}
