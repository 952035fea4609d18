/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module converting records to CSV text
pub mod records;

pub use config::*;
pub use logger::*;
pub use records::*;
