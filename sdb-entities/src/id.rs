use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a stored school.
///
/// The value is assigned by the store when a school is created
/// and never changes afterwards.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SchoolId(i64);

impl SchoolId {
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for SchoolId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<SchoolId> for i64 {
    fn from(from: SchoolId) -> Self {
        from.0
    }
}

impl FromStr for SchoolId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: SchoolId = "42".parse().unwrap();
        assert_eq!(SchoolId::from_raw(42), id);
        assert_eq!("42", id.to_string());
        assert!("forty-two".parse::<SchoolId>().is_err());
    }
}
