//! Row types for the warehouse tables.
//!
//! Each struct maps one-to-one onto the columns of its table, in column order.

/// `songs` table row.
#[derive(Clone, Debug, PartialEq)]
pub struct SongRow {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub duration: f64,
}

/// `artists` table row.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRow {
    pub artist_id: String,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// `users` table row, as seen on one play event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub level: String,
}

/// `time` table row: one event instant broken into calendar parts (UTC).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeRow {
    /// Milliseconds since the Unix epoch.
    pub start_time: i64,
    pub hour: u32,
    pub day: u32,
    /// ISO 8601 week number.
    pub week: u32,
    pub month: u32,
    pub year: i32,
    pub weekday: String,
}

/// `songplays` fact row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongPlayRow {
    /// Position of the event among the retained rows of its log file. Not
    /// unique across files.
    pub songplay_id: i64,
    pub start_time: i64,
    pub user_id: i64,
    pub level: String,
    pub song_id: Option<String>,
    pub artist_id: Option<String>,
    pub session_id: i64,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}

/// Catalog identifiers a play event resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongMatch {
    pub song_id: String,
    pub artist_id: String,
}

/// Number of rows currently held by each table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub songs: usize,
    pub artists: usize,
    pub users: usize,
    pub time: usize,
    pub songplays: usize,
}
