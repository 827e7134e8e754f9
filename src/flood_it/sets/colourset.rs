
use crate::prelude::*;

type SubSet = u8;

/// A fixed bitset over the palette. Iteration runs in ascending palette
/// order, which is the scan order the move heuristic's tie-break relies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColourSet(SubSet);

impl ColourSet {
    pub fn contains(&self, value: Colour) -> bool {
        (self.0 >> value.index()) & 1 == 1
    }

    pub fn insert(&mut self, value: Colour) -> &mut Self {
        self.0 |= (1 as SubSet) << value.index();
        self
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> ColourSetIterator {
        ColourSetIterator { data: self.0 }
    }
}

impl FromIterator<Colour> for ColourSet {
    fn from_iter<T: IntoIterator<Item = Colour>>(iter: T) -> Self {
        let mut s = ColourSet::default();
        iter.into_iter().for_each(|i| {
            s.insert(i);
        });
        s
    }
}

pub struct ColourSetIterator {
    data: SubSet,
}

impl Iterator for ColourSetIterator {
    type Item = Colour;
    fn next(&mut self) -> Option<Self::Item> {
        let tz = self.data.trailing_zeros() as usize;
        if tz >= MAX_COLOURS {
            return None;
        }
        self.data ^= (1 as SubSet) << tz;
        Some(Colour::from(tz as u8))
    }
}

impl IntoIterator for ColourSet {
    type IntoIter = ColourSetIterator;
    type Item = Colour;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ColourSet;
    use crate::prelude::Colour;

    #[test]
    fn iterate_ascending() {
        let s = ColourSet::from_iter([Colour::Orange, Colour::Red, Colour::Yellow]);
        let recovered = s.iter().collect::<Vec<_>>();
        assert_eq!(recovered, vec![Colour::Red, Colour::Yellow, Colour::Orange]);
    }

    #[test]
    fn membership_and_len() {
        let mut s = ColourSet::default();
        assert!(s.is_empty());

        s.insert(Colour::Blue).insert(Colour::Blue);
        assert_eq!(s.len(), 1);
        assert!(s.contains(Colour::Blue));
        assert!(!s.contains(Colour::Green));
    }
}
