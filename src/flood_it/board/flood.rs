use crate::flood_it::prelude::*;

/// The outcome of an attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    /// Whether the move changed the board.
    pub applied: bool,
    /// The move counter after the attempt.
    pub moves: usize,
    /// Whether the board is uniform after the attempt.
    pub game_over: bool,
}

impl Board {
    /// Plays a colour: recolours the flooded region in place and advances
    /// the counters.
    ///
    /// Picking the colour already at the origin, or playing once the game
    /// has finished, leaves the board untouched and takes no snapshot.
    pub fn apply(&mut self, colour: Colour) -> MoveResult {
        let old = self.origin_colour();
        if self.game_over || colour == old {
            return self.result(false);
        }

        self.snapshot();
        self.recolour(old, colour);
        self.moves += 1;
        if self.cells.is_uniform() {
            self.game_over = true;
        }
        self.result(true)
    }

    /// Recolours every origin-connected cell of the pre-move colour,
    /// breadth-first. Each dequeued cell is written before its neighbours
    /// are examined; expansion only passes through pre-move-coloured cells.
    fn recolour(&mut self, old: Colour, colour: Colour) {
        let mut visited = CoordSet::default();
        let mut queue = VecDeque::from([ORIGIN]);
        visited.insert(&ORIGIN);

        while let Some(coord) = queue.pop_front() {
            self.cells.set(&coord, colour);
            for offset in ORTHOGONAL_OFFSETS.iter() {
                let neighbour = coord + offset;
                if !neighbour.in_bounds_signed(self.size()) {
                    continue;
                }
                let next = neighbour.coerce();
                if !visited.contains(&next) && self.cells.at(&next) == old {
                    visited.insert(&next);
                    queue.push_back(next);
                }
            }
        }
    }

    pub(crate) fn result(&self, applied: bool) -> MoveResult {
        MoveResult {
            applied,
            moves: self.moves,
            game_over: self.game_over,
        }
    }
}
