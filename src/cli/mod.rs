//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ExportFormat};
pub use output::{format_student, with_extension};
