/*
 *  An implementation of Flood-It in Rust.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub(crate) mod errors;
pub mod notation;
pub mod sets;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, ColourHistogram, Grid, MoveResult, Region, Status},
        consts::*,
        coords::{self, *},
        errors::GameError,
        notation::*,
        sets::*,
    };
}
