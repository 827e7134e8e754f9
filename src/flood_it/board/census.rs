use crate::flood_it::prelude::*;

/// Per-colour cell counts over some rectangle of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColourHistogram([usize; MAX_COLOURS]);

impl ColourHistogram {
    /// The count recorded for a colour.
    pub fn count(&self, colour: Colour) -> usize {
        self.0[colour.index()]
    }

    /// Cells tallied in total.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub(crate) fn bump(&mut self, colour: Colour) -> &mut Self {
        self.0[colour.index()] += 1;
        self
    }

    /// Merges another tally component-wise.
    pub(crate) fn merge(&mut self, other: &ColourHistogram) -> &mut Self {
        for (lhs, rhs) in self.0.iter_mut().zip(other.0.iter()) {
            *lhs += rhs;
        }
        self
    }
}

impl Board {
    /// Tallies every cell on the board by colour.
    pub fn census(&self) -> ColourHistogram {
        self.census_rect(0, self.size() - 1, 0, self.size() - 1)
    }

    /// Tallies an inclusive cell rectangle by recursive quadrant splits.
    /// Non-empty rectangles must lie inside the live grid, not its padding.
    ///
    /// The recursion bottoms out on empty rectangles (without touching the
    /// grid) and single cells; anything larger splits at the floor midpoint
    /// of both axes into four quadrants whose tallies sum.
    pub fn census_rect(&self, r1: usize, r2: usize, c1: usize, c2: usize) -> ColourHistogram {
        let mut counts = ColourHistogram::default();
        if r1 > r2 || c1 > c2 {
            return counts;
        }
        debug_assert!(r2 < self.size() && c2 < self.size());
        if r1 == r2 && c1 == c2 {
            counts.bump(self.cells.at(&Coord::new(r1, c1)));
            return counts;
        }

        let [mid_r, mid_c] = [(r1 + r2) / 2, (c1 + c2) / 2];
        counts.merge(&self.census_rect(r1, mid_r, c1, mid_c));
        counts.merge(&self.census_rect(r1, mid_r, mid_c + 1, c2));
        counts.merge(&self.census_rect(mid_r + 1, r2, c1, mid_c));
        counts.merge(&self.census_rect(mid_r + 1, r2, mid_c + 1, c2));
        counts
    }
}
