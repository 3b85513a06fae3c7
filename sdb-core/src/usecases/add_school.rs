use super::prelude::*;
use crate::util::validate::Validate;

/// Unvalidated request for adding a school.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AddSchool {
    pub name    : String,
    pub address : String,
    pub lat     : Option<f64>,
    pub lng     : Option<f64>,
}

impl TryFrom<AddSchool> for NewSchool {
    type Error = Error;
    fn try_from(from: AddSchool) -> Result<Self> {
        from.validate()?;
        let AddSchool {
            name,
            address,
            lat,
            lng,
        } = from;
        let pos = lat
            .zip(lng)
            .map(|(lat, lng)| Coordinate::new(lat, lng))
            .ok_or(Error::Latitude)?;
        Ok(Self { name, address, pos })
    }
}

pub fn add_school<R: SchoolRepo>(repo: &R, school: AddSchool) -> Result<SchoolId> {
    let new_school = NewSchool::try_from(school)?;
    log::debug!("Adding school '{}' at {}", new_school.name, new_school.pos);
    let id = repo.create_school(new_school)?;
    log::info!("Added school #{id}");
    Ok(id)
}
