mod file_config;

pub use file_config::FileConfig;

use crate::discover::absolute_path;
use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_SONG_DATA: &str = "data/song_data";
pub const DEFAULT_LOG_DATA: &str = "data/log_data";
pub const DEFAULT_DATABASE: &str = "sparkify.db";

/// Values coming from the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub song_data: PathBuf,
    pub log_data: PathBuf,
    pub database: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            song_data: PathBuf::from(DEFAULT_SONG_DATA),
            log_data: PathBuf::from(DEFAULT_LOG_DATA),
            database: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub song_data: PathBuf,
    pub log_data: PathBuf,
    pub database: PathBuf,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present. Data roots are kept as
    /// given, the database path comes out absolute.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let song_data = file
            .song_data
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.song_data.clone());
        let log_data = file
            .log_data
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.log_data.clone());
        let database = file
            .database
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.database.clone());

        let database = absolute_path(&database);
        if let Some(parent) = database.parent() {
            if !parent.is_dir() {
                bail!("Database directory does not exist: {:?}", parent);
            }
        }

        Ok(Self {
            song_data,
            log_data,
            database,
        })
    }
}
