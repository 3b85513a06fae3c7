use crate::{ranking::InvalidInput, repositories, util::validate::SchoolInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is missing")]
    Name,
    #[error("The address is missing")]
    Address,
    #[error("The latitude is missing")]
    Latitude,
    #[error("The longitude is missing")]
    Longitude,
    #[error("Invalid target coordinate: {0}")]
    InvalidTarget(#[from] InvalidInput),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<SchoolInvalidation> for Error {
    fn from(err: SchoolInvalidation) -> Self {
        match err {
            SchoolInvalidation::Name => Self::Name,
            SchoolInvalidation::Address => Self::Address,
            SchoolInvalidation::Latitude => Self::Latitude,
            SchoolInvalidation::Longitude => Self::Longitude,
        }
    }
}
