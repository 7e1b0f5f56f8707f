#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # mhs-entities
//!
//! Reusable, agnostic domain entities for the Mergington High School
//! activities service.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod directory;
pub mod student;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
