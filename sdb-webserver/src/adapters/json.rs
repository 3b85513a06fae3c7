pub use sdb_boundary::*;

use crate::core::{ranking, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn add_school(from: NewSchool) -> usecases::AddSchool {
        let NewSchool {
            name,
            address,
            latitude,
            longitude,
        } = from;
        usecases::AddSchool {
            name: name.unwrap_or_default(),
            address: address.unwrap_or_default(),
            lat: latitude,
            lng: longitude,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn ranked_school(from: ranking::RankedSchool) -> RankedSchool {
        let ranking::RankedSchool { item, distance } = from;
        RankedSchool::from((item, distance))
    }
}
