//! Application layer - Use cases and orchestration

pub mod registry;

pub use registry::Registry;
