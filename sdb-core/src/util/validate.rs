use thiserror::Error;

use crate::usecases::AddSchool;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SchoolInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing address")]
    Address,
    #[error("Missing latitude")]
    Latitude,
    #[error("Missing longitude")]
    Longitude,
}

// Only checks for the presence of all fields. The range of the
// coordinates is not validated.
impl Validate for AddSchool {
    type Error = SchoolInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_present(&self.name) {
            return Err(Self::Error::Name);
        }
        if !is_present(&self.address) {
            return Err(Self::Error::Address);
        }
        if self.lat.is_none() {
            return Err(Self::Error::Latitude);
        }
        if self.lng.is_none() {
            return Err(Self::Error::Longitude);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_school() -> AddSchool {
        AddSchool {
            name: "Hogwarts".into(),
            address: "Scotland".into(),
            lat: Some(57.0),
            lng: Some(-4.0),
        }
    }

    #[test]
    fn complete_school_is_valid() {
        assert!(add_school().validate().is_ok());
    }

    #[test]
    fn zero_coordinates_are_present() {
        let school = AddSchool {
            lat: Some(0.0),
            lng: Some(0.0),
            ..add_school()
        };
        assert!(school.validate().is_ok());
    }

    #[test]
    fn missing_fields() {
        let blank_name = AddSchool {
            name: " \t".into(),
            ..add_school()
        };
        assert_eq!(blank_name.validate(), Err(SchoolInvalidation::Name));

        let no_address = AddSchool {
            address: "".into(),
            ..add_school()
        };
        assert_eq!(no_address.validate(), Err(SchoolInvalidation::Address));

        let no_lat = AddSchool {
            lat: None,
            ..add_school()
        };
        assert_eq!(no_lat.validate(), Err(SchoolInvalidation::Latitude));

        let no_lng = AddSchool {
            lng: None,
            ..add_school()
        };
        assert_eq!(no_lng.validate(), Err(SchoolInvalidation::Longitude));
    }
}
