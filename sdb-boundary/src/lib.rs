use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Request body for adding a school.
///
/// All fields are optional on the wire so that missing fields
/// can be reported individually instead of failing to parse.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewSchool {
    pub name      : Option<String>,
    pub address   : Option<String>,
    pub latitude  : Option<f64>,
    pub longitude : Option<f64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct School {
    pub id        : i64,
    pub name      : String,
    pub address   : String,
    pub latitude  : f64,
    pub longitude : f64,
}

/// A school annotated with its distance to the requested location.
///
/// The distance is `None` (`null` in JSON) if it is not finite,
/// e.g. for stored coordinates that are out of range.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RankedSchool {
    pub id        : i64,
    pub name      : String,
    pub address   : String,
    pub latitude  : f64,
    pub longitude : f64,
    pub distance  : Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct SchoolCreated {
    pub id: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{http_status}: {message}")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
