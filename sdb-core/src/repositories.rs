// Low-level database access traits.
// Records are only created and read. Updating or deleting
// a school is not part of the repository contract.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait SchoolRepo {
    /// Store a new school and return the id that
    /// has been assigned to it.
    fn create_school(&self, school: NewSchool) -> Result<SchoolId>;

    fn get_school(&self, id: SchoolId) -> Result<School>;

    // Ordered by id, i.e. in insertion order
    fn all_schools(&self) -> Result<Vec<School>>;

    fn count_schools(&self) -> Result<usize>;
}
