
use crate::prelude::*;

type SubSet = u16;
const SUBSET_SIZE: usize = MAX_BOARD_SIZE;
const NUM_SUBSETS: usize = MAX_BOARD_SIZE;

/// A fixed bitset over board coordinates, one subset per row.
#[derive(Clone, Copy, Debug)]
pub struct CoordSet([SubSet; NUM_SUBSETS]);

impl CoordSet {
    #[inline]
    fn _index(coord: &Coord) -> (usize, usize) {
        (coord.row, coord.col)
    }

    pub fn contains(&self, value: &Coord) -> bool {
        let (ia, ib) = CoordSet::_index(value);
        (self.0[ia] >> ib) & 1 == 1
    }

    pub fn insert(&mut self, value: &Coord) -> &mut Self {
        let (ia, ib) = CoordSet::_index(value);
        self.0[ia] |= (1 as SubSet) << ib;
        self
    }

    pub fn len(&self) -> usize {
        self.0.iter().map(|sub| sub.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|sub| *sub == 0)
    }

    pub fn iter(&self) -> CoordSetIterator<'_> {
        CoordSetIterator::new(&self.0)
    }
}

impl Default for CoordSet {
    fn default() -> Self {
        CoordSet([SubSet::default(); NUM_SUBSETS])
    }
}

impl<'a> FromIterator<&'a Coord> for CoordSet {
    fn from_iter<T: IntoIterator<Item = &'a Coord>>(iter: T) -> Self {
        let mut s = CoordSet::default();
        iter.into_iter().for_each(|i| {
            s.insert(i);
        });
        s
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        let mut s = CoordSet::default();
        iter.into_iter().for_each(|i| {
            s.insert(&i);
        });
        s
    }
}

pub struct CoordSetIterator<'a> {
    data: &'a [SubSet; NUM_SUBSETS],
    mask: SubSet,
    current_subset: usize,
}

impl<'a> CoordSetIterator<'a> {
    pub fn new<'d>(data: &'d [SubSet; NUM_SUBSETS]) -> CoordSetIterator<'d> {
        CoordSetIterator { data, mask: SubSet::MAX, current_subset: 0 }
    }
}

impl<'a> Iterator for CoordSetIterator<'a> {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_subset >= NUM_SUBSETS {
                return None;
            }

            let subject = self.data[self.current_subset] & self.mask;
            let tz = subject.trailing_zeros() as usize;

            if tz >= SUBSET_SIZE {
                self.current_subset += 1;
                self.mask = SubSet::MAX;
                continue;
            } else {
                let value = Coord::new(self.current_subset, tz);
                self.mask ^= (1 as SubSet) << tz; // add a 0 where we found the 1 to knock it out of the next iteration
                return Some(value);
            }
        }
    }
}

impl<'a> IntoIterator for &'a CoordSet {
    type IntoIter = CoordSetIterator<'a>;
    type Item = Coord;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
