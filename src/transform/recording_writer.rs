//! In-memory WarehouseWriter that records every row, for transformer tests.

use crate::error::Result;
use crate::store::{ArtistRow, SongMatch, SongPlayRow, SongRow, TimeRow, UserRow, WarehouseWriter};
use std::cell::RefCell;

#[derive(Default)]
pub struct RecordingWriter {
    pub songs: RefCell<Vec<SongRow>>,
    pub artists: RefCell<Vec<ArtistRow>>,
    pub users: RefCell<Vec<UserRow>>,
    pub time: RefCell<Vec<TimeRow>>,
    pub songplays: RefCell<Vec<SongPlayRow>>,
    catalog: Vec<(String, String, f64, SongMatch)>,
}

impl RecordingWriter {
    pub fn with_catalog(entries: Vec<(&str, &str, f64, SongMatch)>) -> Self {
        Self {
            catalog: entries
                .into_iter()
                .map(|(title, artist, duration, found)| {
                    (title.to_string(), artist.to_string(), duration, found)
                })
                .collect(),
            ..Default::default()
        }
    }
}

impl WarehouseWriter for RecordingWriter {
    fn insert_song(&self, song: &SongRow) -> Result<()> {
        self.songs.borrow_mut().push(song.clone());
        Ok(())
    }

    fn insert_artist(&self, artist: &ArtistRow) -> Result<()> {
        self.artists.borrow_mut().push(artist.clone());
        Ok(())
    }

    fn insert_user(&self, user: &UserRow) -> Result<()> {
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn insert_time(&self, time: &TimeRow) -> Result<()> {
        self.time.borrow_mut().push(time.clone());
        Ok(())
    }

    fn insert_songplay(&self, songplay: &SongPlayRow) -> Result<()> {
        self.songplays.borrow_mut().push(songplay.clone());
        Ok(())
    }

    fn find_song_and_artist(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> Result<Option<SongMatch>> {
        Ok(self
            .catalog
            .iter()
            .find(|(t, a, d, _)| t == title && a == artist_name && *d == duration)
            .map(|(_, _, _, found)| found.clone()))
    }
}
