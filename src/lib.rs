//! Sparkify ETL Library
//!
//! Loads song metadata and user activity logs from JSON files into a SQLite
//! star schema (songs, artists, users, time, songplays).

pub mod config;
pub mod discover;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod sqlite_persistence;
pub mod store;
pub mod transform;

// Re-export commonly used types for convenience
pub use error::{EtlError, Result};
pub use loader::{process_data, LoadSummary};
pub use pipeline::{run_etl, RunSummary};
pub use store::{SqliteWarehouse, WarehouseWriter};
