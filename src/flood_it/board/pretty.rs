use crate::flood_it::prelude::*;

use itertools::Itertools;

impl Board {
    /// Renders the grid one row per line, cells as colour initials.
    pub fn pretty(&self) -> String {
        (0..self.cells.size())
            .map(|row| {
                (0..self.cells.size())
                    .map(|col| self.cells.at(&Coord::new(row, col)).to_string())
                    .join(" ")
            })
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn rows_of_initials() {
        let setup = "012345012".parse::<GridString>().unwrap();
        let board = Board::with_grid(setup.grid, setup.colours).unwrap();
        assert_eq!(board.pretty(), "R G B\nY M O\nR G B");
    }
}
