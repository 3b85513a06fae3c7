use crate::{geo::Coordinate, id::SchoolId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    pub id      : SchoolId,
    pub name    : String,
    pub address : String,
    pub pos     : Coordinate,
}

/// A school that passed validation but has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchool {
    pub name    : String,
    pub address : String,
    pub pos     : Coordinate,
}

impl NewSchool {
    pub fn into_school(self, id: SchoolId) -> School {
        let Self { name, address, pos } = self;
        School {
            id,
            name,
            address,
            pos,
        }
    }
}
