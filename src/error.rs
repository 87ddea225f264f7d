//! Error types for roster

use thiserror::Error;

/// Main error type for roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("No student found with ID {0}.")]
    StudentNotFound(String),

    #[error("Student with ID {0} already exists.")]
    DuplicateStudent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Export(String),

    #[error("Excel export is not available. Rebuild roster with the `xlsx` feature enabled (cargo build --features xlsx)")]
    SpreadsheetUnavailable,
}

impl RosterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::StudentNotFound(_) => 2,
            RosterError::DuplicateStudent(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RosterError::StudentNotFound(id) => {
                format!(
                    "No student found with ID {}.\n\n\
                    Suggestions:\n\
                    • Run 'roster list' to see every registered student\n\
                    • Run 'roster search <name>' if you only know part of the name\n\
                    • IDs are matched exactly, including case",
                    id
                )
            }
            RosterError::DuplicateStudent(id) => {
                format!(
                    "Student with ID {} already exists.\n\n\
                    Suggestions:\n\
                    • Choose a different ID for the new student\n\
                    • Use 'roster update {}' to change the existing record",
                    id, id
                )
            }
            RosterError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Valid keys in roster.toml: data_file, csv_file, xlsx_file, log_level",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;
