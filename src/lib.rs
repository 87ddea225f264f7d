//! roster - Student record manager
//!
//! Keeps a small collection of student records in a flat JSON file, with
//! CRUD, search, course enrollment and CSV/spreadsheet export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RosterError;
