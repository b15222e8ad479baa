//! GST calculation ledger
//!
//! Calculates GST on a base amount, keeps saved calculations as a single JSON
//! collection in a key-value store, and derives the filtered, sorted, and
//! summarized views the records screen shows.

pub mod config;
pub mod core;
pub mod modules;
pub mod storage;

// Re-export commonly used types
pub use modules::records;
pub use modules::settings;
pub use modules::taxes;
