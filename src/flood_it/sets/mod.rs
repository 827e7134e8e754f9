
mod colourset;
mod coordset;

pub use colourset::{ColourSet, ColourSetIterator};
pub use coordset::{CoordSet, CoordSetIterator};
