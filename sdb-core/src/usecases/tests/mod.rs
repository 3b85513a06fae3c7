use std::cell::RefCell;

use anyhow::anyhow;

use crate::{
    entities::*,
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory store that assigns ids sequentially.
#[derive(Default)]
pub struct MockDb {
    pub schools: RefCell<Vec<School>>,
    pub fail: bool,
}

impl MockDb {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check_connection(&self) -> RepoResult<()> {
        if self.fail {
            return Err(anyhow!("connection refused").into());
        }
        Ok(())
    }
}

impl SchoolRepo for MockDb {
    fn create_school(&self, school: NewSchool) -> RepoResult<SchoolId> {
        self.check_connection()?;
        let mut schools = self.schools.borrow_mut();
        let next = schools.iter().map(|s| s.id.to_raw()).max().unwrap_or(0) + 1;
        let id = SchoolId::from_raw(next);
        schools.push(school.into_school(id));
        Ok(id)
    }

    fn get_school(&self, id: SchoolId) -> RepoResult<School> {
        self.check_connection()?;
        self.schools
            .borrow()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_schools(&self) -> RepoResult<Vec<School>> {
        self.check_connection()?;
        Ok(self.schools.borrow().clone())
    }

    fn count_schools(&self) -> RepoResult<usize> {
        self.check_connection()?;
        Ok(self.schools.borrow().len())
    }
}
