use super::prelude::*;

pub fn get_school<R: SchoolRepo>(repo: &R, id: SchoolId) -> Result<School> {
    Ok(repo.get_school(id)?)
}

pub fn count_schools<R: SchoolRepo>(repo: &R) -> Result<usize> {
    Ok(repo.count_schools()?)
}
