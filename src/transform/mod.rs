mod log;
mod records;
mod song;
mod time;

#[cfg(test)]
pub(crate) mod recording_writer;

pub use log::{process_log_file, read_log_file, time_rows};
pub use records::{RawLogEvent, SongPlayEvent, SongRecord, UserId, SONG_PLAY_PAGE};
pub use song::{process_song_file, read_song_file, SongFileRows};
pub use time::decompose_timestamp;

use crate::error::Result;
use crate::store::WarehouseWriter;
use std::ops::AddAssign;
use std::path::Path;

/// Turns one input file into warehouse rows, writing them through the given
/// writer.
pub type FileTransformer = fn(&dyn WarehouseWriter, &Path) -> Result<FileReport>;

/// Rows written for one file (or, summed, for a whole root).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    pub songs: usize,
    pub artists: usize,
    pub users: usize,
    pub time: usize,
    pub songplays: usize,
    /// Songplays whose song and artist were found in the catalog.
    pub resolved_songplays: usize,
}

impl AddAssign for FileReport {
    fn add_assign(&mut self, other: Self) {
        self.songs += other.songs;
        self.artists += other.artists;
        self.users += other.users;
        self.time += other.time;
        self.songplays += other.songplays;
        self.resolved_songplays += other.resolved_songplays;
    }
}
