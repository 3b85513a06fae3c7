pub use sdb_core::{ranking, repositories, util};

pub mod entities {
    pub use sdb_core::entities::*;
}

pub mod usecases {
    pub use sdb_core::usecases::*;
}

pub mod prelude {
    pub use super::{
        entities::*,
        ranking::{InvalidInput, ProximityRanker, RankedSchool},
        repositories::*,
    };
}
