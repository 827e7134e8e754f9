pub mod agent;
pub mod fip_server;
pub mod flood_it;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T, E = Error> = std::result::Result<T, E>;
        pub use rand::Rng;

        pub use std::{
            collections::VecDeque,
            ops::Add
        };
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::fip_server::*;
    pub use super::flood_it::prelude::*;
    pub use super::utils::prelude::*;
}
