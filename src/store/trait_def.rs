//! WarehouseWriter trait definition.
//!
//! Transformers only see this trait, so they can be driven by a SQLite unit of
//! work in production and by a recording fake in tests.

use super::models::{ArtistRow, SongMatch, SongPlayRow, SongRow, TimeRow, UserRow};
use crate::error::Result;

pub trait WarehouseWriter {
    fn insert_song(&self, song: &SongRow) -> Result<()>;

    fn insert_artist(&self, artist: &ArtistRow) -> Result<()>;

    fn insert_user(&self, user: &UserRow) -> Result<()>;

    fn insert_time(&self, time: &TimeRow) -> Result<()>;

    fn insert_songplay(&self, songplay: &SongPlayRow) -> Result<()>;

    /// Look up the song whose title, artist name and duration all equal the
    /// given values. Returns `None` when nothing matches exactly.
    fn find_song_and_artist(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> Result<Option<SongMatch>>;
}
