pub mod ranking;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use sdb_entities::{geo::*, id::*, school::*};
}
