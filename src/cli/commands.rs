//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Student record manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Student data file (overrides roster.toml and ROSTER_FILE)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    Add {
        name: String,

        /// Age in years (positive whole number)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        age: u32,

        gender: String,

        /// Unique student ID
        id: String,
    },

    /// View all students
    List,

    /// Show a single student
    Show { id: String },

    /// Update a student's information; omitted fields keep their current value
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        age: Option<u32>,

        #[arg(long)]
        gender: Option<String>,

        /// Course to add (repeatable)
        #[arg(long, value_name = "COURSE")]
        enroll: Vec<String>,

        /// Course to remove (repeatable)
        #[arg(long, value_name = "COURSE")]
        drop: Vec<String>,
    },

    /// Remove a student
    Remove { id: String },

    /// Search students by name or ID
    Search { query: String },

    /// Export student data
    Export {
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file (default from roster.toml)
        path: Option<PathBuf>,
    },

    /// Save the collection to the data file
    Save,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
