use crate::flood_it::prelude::*;

/// The greedy Flood-It player. Every turn it floods the colour worth
/// the most cells on the whole grid, preferring colours that already
/// touch the flooded region.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBot;

impl GreedyBot {
    /// Suggests the colour the bot would flood next, if any colour is
    /// worth flooding.
    pub fn suggest(&self, board: &Board) -> Option<Colour> {
        let region = board.region();
        let census = board.census();
        pick_best_colour(&census, &region.boundary, board.origin_colour(), board.colours())
    }

    /// Plays one bot move. A board with nothing left to flood is left
    /// untouched and reports an unapplied result.
    pub fn take_turn(&self, board: &mut Board) -> (Option<Colour>, MoveResult) {
        match self.suggest(board) {
            Some(colour) => {
                log::debug!("bot plays {}", colour.notate());
                (Some(colour), board.apply(colour))
            }
            None => (None, board.result(false)),
        }
    }
}

/// Chooses the colour with the highest census count among the boundary
/// colours, falling back to the whole palette when nothing borders the
/// flooded region. The current colour never qualifies, counts of zero
/// never qualify, and ties break toward the lowest palette index.
pub fn pick_best_colour(
    census: &ColourHistogram,
    boundary: &ColourSet,
    current: Colour,
    colours: usize,
) -> Option<Colour> {
    let mut best = None;
    let mut max = 0;

    for colour in boundary.iter() {
        if colour == current {
            continue;
        }
        let count = census.count(colour);
        if count > max {
            best = Some(colour);
            max = count;
        }
    }
    if best.is_some() {
        return best;
    }

    for colour in Colour::all().into_iter().take(colours) {
        if colour == current {
            continue;
        }
        let count = census.count(colour);
        if count > max {
            best = Some(colour);
            max = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::prelude::*;

    fn board(setup: &str) -> Board {
        let setup = setup.parse::<GridString>().unwrap();
        Board::with_grid(setup.grid, setup.colours).unwrap()
    }

    #[test]
    fn adjacent_colours_outrank_distant_majorities() {
        // yellow owns 12 of 16 cells but never touches the origin region
        let board = board("0133113333333333");
        assert_eq!(GreedyBot.suggest(&board), Some(Colour::Green));
    }

    #[test]
    fn ties_break_toward_the_lowest_index() {
        // green and blue both border the origin and both count 4
        let board = board("011212221");
        assert_eq!(GreedyBot.suggest(&board), Some(Colour::Green));
    }

    #[test]
    fn falls_back_to_the_census_when_nothing_borders() {
        let census = board("012012012").census();
        let empty = ColourSet::default();
        assert_eq!(
            pick_best_colour(&census, &empty, Colour::Red, 3),
            Some(Colour::Green)
        );
    }

    #[test]
    fn uniform_boards_offer_nothing() {
        let board = board("2222");
        assert_eq!(GreedyBot.suggest(&board), None);

        let (colour, result) = GreedyBot.take_turn(&mut board.clone());
        assert_eq!(colour, None);
        assert!(!result.applied);
    }

    #[test]
    fn checkerboard_finishes_in_four_moves() {
        let mut board = board("010101010");
        while !board.game_over() {
            GreedyBot.take_turn(&mut board);
        }
        assert_eq!(board.moves(), 4);
    }

    #[test]
    fn finishes_any_board() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut board = Board::new(10, 6, &mut rng).unwrap();

        let mut turns = 0;
        while !board.game_over() {
            let (colour, result) = GreedyBot.take_turn(&mut board);
            assert!(colour.is_some());
            assert!(result.applied);
            turns += 1;
            assert!(turns < 100);
        }
        assert_eq!(board.flooded_percentage(), 100);
    }

    #[test]
    fn bot_turns_share_the_undo_line() {
        let mut board = board("011212221");
        let before = board.notate();

        let (colour, result) = GreedyBot.take_turn(&mut board);
        assert_eq!(colour, Some(Colour::Green));
        assert!(result.applied);

        assert!(board.undo());
        assert_eq!(board.notate(), before);
        assert_eq!(board.moves(), 0);
    }
}
