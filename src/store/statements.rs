//! Parameterized statements issued against the warehouse.

pub const SONG_INSERT: &str =
    "INSERT INTO songs (song_id, title, artist_id, year, duration) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const ARTIST_INSERT: &str =
    "INSERT INTO artists (artist_id, name, location, latitude, longitude) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const USER_INSERT: &str =
    "INSERT INTO users (user_id, first_name, last_name, gender, level) VALUES (?1, ?2, ?3, ?4, ?5)";

pub const TIME_INSERT: &str = "INSERT INTO time (start_time, hour, day, week, month, year, weekday)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

pub const SONGPLAY_INSERT: &str = "INSERT INTO songplays
     (songplay_id, start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

/// Exact match on song title, artist name and duration.
pub const SONG_SELECT: &str = "SELECT s.song_id, a.artist_id
     FROM songs s
     JOIN artists a ON s.artist_id = a.artist_id
     WHERE s.title = ?1 AND a.name = ?2 AND s.duration = ?3
     LIMIT 1";

pub const COUNT_SONGS: &str = "SELECT COUNT(*) FROM songs";
pub const COUNT_ARTISTS: &str = "SELECT COUNT(*) FROM artists";
pub const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";
pub const COUNT_TIME: &str = "SELECT COUNT(*) FROM time";
pub const COUNT_SONGPLAYS: &str = "SELECT COUNT(*) FROM songplays";
