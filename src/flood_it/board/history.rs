use crate::flood_it::prelude::*;

impl Board {
    /// Saves the pre-move grid and forfeits any redo line. Snapshots are
    /// independent copies, never aliases into the live grid.
    pub(super) fn snapshot(&mut self) {
        self.undo_stack.push(self.cells);
        self.redo_stack.clear();
    }

    /// Steps back one applied move. Finished games and exhausted stacks
    /// stay put and report `false`.
    pub fn undo(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match self.undo_stack.pop() {
            Some(grid) => {
                self.redo_stack.push(self.cells);
                self.cells = grid;
                self.moves -= 1;
                true
            }
            None => false,
        }
    }

    /// Steps forward along a line previously unwound by undo.
    pub fn redo(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        match self.redo_stack.pop() {
            Some(grid) => {
                self.undo_stack.push(self.cells);
                self.cells = grid;
                self.moves += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn board(setup: &str) -> Board {
        let setup = setup.parse::<GridString>().unwrap();
        Board::with_grid(setup.grid, setup.colours).unwrap()
    }

    #[test]
    fn fresh_boards_have_nothing_to_walk() {
        let mut board = board("012012012");
        assert!(!board.undo());
        assert!(!board.redo());
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn round_trip_restores_grids_and_counters() {
        let mut board = board("010212212");
        let mut trail = vec![board.notate()];

        for colour in [Colour::Green, Colour::Blue, Colour::Red] {
            assert!(board.apply(colour).applied);
            trail.push(board.notate());
        }

        for step in (0..3).rev() {
            assert!(board.undo());
            assert_eq!(board.notate(), trail[step]);
            assert_eq!(board.moves(), step);
        }
        assert!(!board.undo());

        for step in 1..=3 {
            assert!(board.redo());
            assert_eq!(board.notate(), trail[step]);
            assert_eq!(board.moves(), step);
        }
        assert!(!board.redo());
    }

    #[test]
    fn real_moves_forfeit_the_redo_line() {
        let mut board = board("012012012");
        board.apply(Colour::Green);
        assert!(board.undo());

        board.apply(Colour::Blue);
        assert!(!board.redo());
    }

    #[test]
    fn finished_games_freeze_history() {
        let mut board = board("0110");
        board.apply(Colour::Green);
        board.apply(Colour::Red);
        assert!(board.game_over());

        assert!(!board.undo());
        assert!(!board.redo());
        assert_eq!(board.moves(), 2);
    }

    #[test]
    fn noop_moves_leave_no_snapshot() {
        let mut board = board("012012012");
        board.apply(Colour::Green);
        board.apply(Colour::Green); // origin already green
        assert!(board.undo());
        assert!(!board.undo());
    }
}
