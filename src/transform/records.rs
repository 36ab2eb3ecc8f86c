//! Input record shapes.
//!
//! Song metadata files hold one [`SongRecord`]. Event logs hold one JSON
//! object per line; each line is first read as a lenient [`RawLogEvent`] and
//! only the song-play lines are tightened into a [`SongPlayEvent`], because
//! other page types routinely carry nulls and empty ids.

use crate::store::{ArtistRow, SongMatch, SongPlayRow, SongRow, UserRow};
use serde::Deserialize;

/// `page` value that marks a user starting a track.
pub const SONG_PLAY_PAGE: &str = "NextSong";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    pub artist_location: Option<String>,
    pub artist_latitude: Option<f64>,
    pub artist_longitude: Option<f64>,
    pub year: i32,
    pub duration: f64,
}

impl SongRecord {
    pub fn song_row(&self) -> SongRow {
        SongRow {
            song_id: self.song_id.clone(),
            title: self.title.clone(),
            artist_id: self.artist_id.clone(),
            year: self.year,
            duration: self.duration,
        }
    }

    pub fn artist_row(&self) -> ArtistRow {
        ArtistRow {
            artist_id: self.artist_id.clone(),
            name: self.artist_name.clone(),
            location: self.artist_location.clone(),
            latitude: self.artist_latitude,
            longitude: self.artist_longitude,
        }
    }
}

/// The log format writes user ids as strings, but numbers are accepted too.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl UserId {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            UserId::Number(n) => Some(*n),
            UserId::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawLogEvent {
    pub page: Option<String>,
    pub ts: Option<i64>,
    pub user_id: Option<UserId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub level: Option<String>,
    pub song: Option<String>,
    pub artist: Option<String>,
    pub length: Option<f64>,
    pub session_id: Option<i64>,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("missing field `{}` on a {} event", field, SONG_PLAY_PAGE))
}

impl RawLogEvent {
    pub fn is_song_play(&self) -> bool {
        self.page.as_deref() == Some(SONG_PLAY_PAGE)
    }

    /// Validate the fields a song play needs. `position` is the record's
    /// 0-based index within its file.
    pub fn into_song_play(self, position: usize) -> Result<SongPlayEvent, String> {
        let user_id = required(self.user_id, "userId")?;
        let user_id = user_id
            .as_i64()
            .ok_or_else(|| format!("userId {:?} is not an integer", user_id))?;

        Ok(SongPlayEvent {
            position: position as i64,
            ts: required(self.ts, "ts")?,
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            level: required(self.level, "level")?,
            song: required(self.song, "song")?,
            artist: required(self.artist, "artist")?,
            length: required(self.length, "length")?,
            session_id: required(self.session_id, "sessionId")?,
            location: self.location,
            user_agent: self.user_agent,
        })
    }
}

/// A retained log entry: a user starting a track.
#[derive(Clone, Debug, PartialEq)]
pub struct SongPlayEvent {
    pub position: i64,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub level: String,
    pub song: String,
    pub artist: String,
    pub length: f64,
    pub session_id: i64,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}

impl SongPlayEvent {
    pub fn user_row(&self) -> UserRow {
        UserRow {
            user_id: self.user_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            level: self.level.clone(),
        }
    }

    pub fn songplay_row(&self, resolved: Option<SongMatch>) -> SongPlayRow {
        let (song_id, artist_id) = match resolved {
            Some(m) => (Some(m.song_id), Some(m.artist_id)),
            None => (None, None),
        };
        SongPlayRow {
            songplay_id: self.position,
            start_time: self.ts,
            user_id: self.user_id,
            level: self.level.clone(),
            song_id,
            artist_id,
            session_id: self.session_id,
            location: self.location.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}
