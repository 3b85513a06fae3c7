mod add_school;
mod error;
mod get_school;
mod list_schools;

#[cfg(test)]
pub mod tests;

pub use self::{add_school::*, error::Error, get_school::*, list_schools::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        ranking::*,
        repositories::*,
    };
}
