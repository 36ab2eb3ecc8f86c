//! The full ETL run: song metadata first, so the event logs can resolve their
//! plays against it, then the event logs.

use crate::config::AppConfig;
use crate::error::Result;
use crate::loader::{process_data, LoadSummary};
use crate::store::{SqliteWarehouse, TableCounts};
use crate::transform::{process_log_file, process_song_file};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub songs: LoadSummary,
    pub logs: LoadSummary,
    /// Rows held by the warehouse once both roots are loaded.
    pub counts: TableCounts,
}

pub fn run_etl(config: &AppConfig) -> Result<RunSummary> {
    info!("Opening warehouse at {}", config.database.display());
    let mut warehouse = SqliteWarehouse::open(&config.database)?;

    let songs = process_data(&mut warehouse, &config.song_data, process_song_file)?;
    let logs = process_data(&mut warehouse, &config.log_data, process_log_file)?;
    let counts = warehouse.get_counts()?;

    warehouse.close()?;
    Ok(RunSummary {
        songs,
        logs,
        counts,
    })
}
