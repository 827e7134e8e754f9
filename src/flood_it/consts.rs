use crate::flood_it::coords::Coord;
use crate::utils::prelude::*;

/// Smallest edge length a randomized deal may use.
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest edge length; grids are stored at this capacity.
pub const MAX_BOARD_SIZE: usize = 14;

/// Smallest palette a deal may use.
pub const MIN_COLOURS: usize = 2;
/// Full palette size.
pub const MAX_COLOURS: usize = 6;

/// The flood always grows from the top-left corner.
pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

// A cell colouring. A game's colour count selects a prefix of this palette.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Magenta = 4,
    Orange = 5,
}

impl Colour {
    /// Gets the palette in index order.
    pub fn all() -> [Colour; MAX_COLOURS] {
        [
            Colour::Red,
            Colour::Green,
            Colour::Blue,
            Colour::Yellow,
            Colour::Magenta,
            Colour::Orange,
        ]
    }

    /// The palette index of the colour.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Notates the colour by its full name.
    pub fn notate(&self) -> String {
        match self {
            Colour::Red => "Red",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::Yellow => "Yellow",
            Colour::Magenta => "Magenta",
            Colour::Orange => "Orange",
        }
        .into()
    }
}

impl From<u8> for Colour {
    fn from(value: u8) -> Self {
        match value {
            0 => Colour::Red,
            1 => Colour::Green,
            2 => Colour::Blue,
            3 => Colour::Yellow,
            4 => Colour::Magenta,
            5 => Colour::Orange,
            _ => panic!("expected colour index of 0-5, received {value}"),
        }
    }
}

impl std::str::FromStr for Colour {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" | "0" => Ok(Colour::Red),
            "g" | "green" | "1" => Ok(Colour::Green),
            "b" | "blue" | "2" => Ok(Colour::Blue),
            "y" | "yellow" | "3" => Ok(Colour::Yellow),
            "m" | "magenta" | "4" => Ok(Colour::Magenta),
            "o" | "orange" | "5" => Ok(Colour::Orange),
            _ => Err(anyhow!("invalid notation {s} for colour")),
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let initial = match self {
            Colour::Red => "R",
            Colour::Green => "G",
            Colour::Blue => "B",
            Colour::Yellow => "Y",
            Colour::Magenta => "M",
            Colour::Orange => "O",
        };
        write!(f, "{}", initial)
    }
}

#[cfg(test)]
mod tests {
    use super::Colour;

    #[test]
    fn parse_aliases() {
        for (repr, expected) in [
            ("red", Colour::Red),
            ("G", Colour::Green),
            ("2", Colour::Blue),
            ("Yellow", Colour::Yellow),
            ("m", Colour::Magenta),
            ("orange", Colour::Orange),
        ] {
            assert_eq!(repr.parse::<Colour>().unwrap(), expected);
        }
        assert!("violet".parse::<Colour>().is_err());
        assert!("6".parse::<Colour>().is_err());
    }

    #[test]
    fn palette_is_index_ordered() {
        for (i, colour) in Colour::all().into_iter().enumerate() {
            assert_eq!(colour.index(), i);
            assert_eq!(Colour::from(i as u8), colour);
        }
    }
}
