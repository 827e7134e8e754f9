use crate::flood_it::prelude::*;

impl Board {
    /// Gets the colour at a given coordinate.
    pub fn colour_at(&self, coord: &Coord) -> Result<Colour, GameError> {
        if coord.in_bounds(self.size()) {
            Ok(self.cells.at(coord))
        } else {
            Err(GameError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn board() -> Board {
        let setup = "0110".parse::<GridString>().unwrap();
        Board::with_grid(setup.grid, setup.colours).unwrap()
    }

    #[test]
    fn reads_inside_the_grid() {
        let board = board();
        assert_eq!(board.colour_at(&Coord::new(0, 0)).unwrap(), Colour::Red);
        assert_eq!(board.colour_at(&Coord::new(1, 0)).unwrap(), Colour::Green);
    }

    #[test]
    fn rejects_reads_past_the_edge() {
        let board = board();
        for coord in [Coord::new(2, 0), Coord::new(0, 2), Coord::new(13, 13)] {
            let err = board.colour_at(&coord).unwrap_err();
            assert_eq!(
                err,
                GameError::OutOfBounds { row: coord.row, col: coord.col, size: 2 }
            );
        }
    }
}
