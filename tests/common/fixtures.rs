//! Test fixture creation for data directories and the warehouse

use rusqlite::Connection;
use sparkify_etl::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestData {
    // Kept alive so the directory outlives the test
    _dir: TempDir,
    pub song_data: PathBuf,
    pub log_data: PathBuf,
    pub database: PathBuf,
}

impl TestData {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let song_data = dir.path().join("data/song_data");
        let log_data = dir.path().join("data/log_data");
        fs::create_dir_all(&song_data).unwrap();
        fs::create_dir_all(&log_data).unwrap();
        let database = dir.path().join("sparkify.db");
        Self {
            _dir: dir,
            song_data,
            log_data,
            database,
        }
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            song_data: self.song_data.clone(),
            log_data: self.log_data.clone(),
            database: self.database.clone(),
        }
    }

    pub fn write_song_file(&self, relative: &str, json: &str) -> PathBuf {
        write_file(&self.song_data, relative, json)
    }

    pub fn write_log_file(&self, relative: &str, lines: &[&str]) -> PathBuf {
        write_file(&self.log_data, relative, &lines.join("\n"))
    }

    /// Direct connection to the warehouse, for assertions.
    pub fn open_db(&self) -> Connection {
        Connection::open(&self.database).unwrap()
    }

    pub fn count(&self, table: &str) -> i64 {
        self.open_db()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
                r.get(0)
            })
            .unwrap()
    }
}

fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
