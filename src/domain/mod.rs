//! Domain layer - Student records

pub mod student;

pub use student::{EnrollStatus, RemoveStatus, Student, StudentRecord};
