//! Song metadata transformer: one file, one song, one artist.

use super::records::SongRecord;
use super::FileReport;
use crate::error::{EtlError, Result};
use crate::store::{ArtistRow, SongRow, WarehouseWriter};
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct SongFileRows {
    pub song: SongRow,
    pub artist: ArtistRow,
}

pub fn read_song_file(path: &Path) -> Result<SongFileRows> {
    let content = std::fs::read_to_string(path).map_err(|e| EtlError::io(path, e))?;
    let record: SongRecord =
        serde_json::from_str(&content).map_err(|e| EtlError::parse(path, None, e.to_string()))?;
    Ok(SongFileRows {
        song: record.song_row(),
        artist: record.artist_row(),
    })
}

pub fn process_song_file(writer: &dyn WarehouseWriter, path: &Path) -> Result<FileReport> {
    let rows = read_song_file(path)?;
    writer.insert_song(&rows.song)?;
    writer.insert_artist(&rows.artist)?;
    Ok(FileReport {
        songs: 1,
        artists: 1,
        ..Default::default()
    })
}
