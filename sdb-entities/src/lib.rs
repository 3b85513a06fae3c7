#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # sdb-entities
//!
//! Reusable, agnostic domain entities for SchoolDB.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod school;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
