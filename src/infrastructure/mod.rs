//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;
pub mod logging;
pub mod store;

pub use config::Config;
pub use export::{export_csv, export_spreadsheet, ExportCapabilities};
pub use store::{JsonFileStore, RecordStore};
