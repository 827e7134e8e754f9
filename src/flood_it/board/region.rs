use crate::flood_it::prelude::*;

/// The origin-connected patch of same-coloured cells, plus the colours
/// found just outside it. Derived on demand; never cached across moves.
#[derive(Clone, Copy, Debug)]
pub struct Region {
    /// Cells reachable from the origin through its colour.
    pub cells: CoordSet,
    /// Colours on cells orthogonally adjacent to, but outside, the region.
    pub boundary: ColourSet,
}

impl Board {
    /// Marks the flooded region via breadth-first search from the origin,
    /// then collects the colours bordering it.
    pub fn region(&self) -> Region {
        let origin_colour = self.origin_colour();

        let mut cells = CoordSet::default();
        let mut queue = VecDeque::from([ORIGIN]);
        cells.insert(&ORIGIN);

        while let Some(coord) = queue.pop_front() {
            for offset in ORTHOGONAL_OFFSETS.iter() {
                let neighbour = coord + offset;
                if !neighbour.in_bounds_signed(self.size()) {
                    continue;
                }
                let next = neighbour.coerce();
                if !cells.contains(&next) && self.cells.at(&next) == origin_colour {
                    cells.insert(&next);
                    queue.push_back(next);
                }
            }
        }

        let mut boundary = ColourSet::default();
        for coord in cells.iter() {
            for offset in ORTHOGONAL_OFFSETS.iter() {
                let neighbour = coord + offset;
                if !neighbour.in_bounds_signed(self.size()) {
                    continue;
                }
                let next = neighbour.coerce();
                if !cells.contains(&next) {
                    boundary.insert(self.cells.at(&next));
                }
            }
        }

        Region { cells, boundary }
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
    fn connects_orthogonally_only() {
        // the 0 at (1, 1) touches the origin diagonally, so it stays out
        let Region { cells, boundary } = board("0110").region();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains(&Coord::new(0, 0)));
        assert_eq!(boundary.iter().collect::<Vec<_>>(), vec![Colour::Green]);
    }

    #[test]
    fn walks_bent_corridors() {
        let Region { cells, boundary } = board("001101121").region();
        let expected = [(0, 0), (0, 1), (1, 1)].map(|(r, c)| Coord::new(r, c));
        assert_eq!(cells.len(), expected.len());
        assert!(expected.iter().all(|c| cells.contains(c)));
        assert_eq!(
            boundary.iter().collect::<Vec<_>>(),
            vec![Colour::Green, Colour::Blue]
        );
    }

    #[test]
    fn uniform_board_has_no_boundary() {
        let Region { cells, boundary } = board("2222").region();
        assert_eq!(cells.len(), 4);
        assert!(boundary.is_empty());
    }

    #[test]
    fn same_colour_beyond_the_border_is_boundary_free() {
        // no boundary colour ever equals the origin colour: any adjacent
        // same-coloured cell would have been absorbed by the search
        let Region { cells, boundary } = board("010101010").region();
        assert_eq!(cells.len(), 1);
        assert!(!boundary.contains(Colour::Red));
        assert!(boundary.contains(Colour::Green));
    }
}
