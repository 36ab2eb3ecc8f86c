//! SQLite-backed warehouse store.
//!
//! One connection serves the whole run. Every input file gets its own
//! [`FileTransaction`]: committing it makes the file's rows durable, dropping
//! it rolls them back.

use super::models::*;
use super::schema::WAREHOUSE_VERSIONED_SCHEMAS;
use super::statements::*;
use super::trait_def::WarehouseWriter;
use crate::error::Result;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Transaction};
use std::path::Path;
use tracing::{debug, info};

pub struct SqliteWarehouse {
    conn: Connection,
}

/// Create the schema on a brand-new database, validate it otherwise.
fn prepare_schema(conn: &Connection) -> Result<()> {
    let latest_schema = &WAREHOUSE_VERSIONED_SCHEMAS[WAREHOUSE_VERSIONED_SCHEMAS.len() - 1];

    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;

    if table_count == 0 {
        info!(
            "Creating warehouse schema at version {}",
            latest_schema.version
        );
        return latest_schema.create(conn);
    }

    latest_schema.validate(conn)
}

impl SqliteWarehouse {
    /// Open (or create) the warehouse database at `db_path`.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        prepare_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Warehouse backed by a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        prepare_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Start the unit of work for one input file.
    pub fn begin_file(&mut self) -> Result<FileTransaction<'_>> {
        Ok(FileTransaction {
            tx: self.conn.transaction()?,
        })
    }

    pub fn get_counts(&self) -> Result<TableCounts> {
        let count = |sql: &str| -> Result<usize> {
            let n: i64 = self.conn.query_row(sql, [], |r| r.get(0))?;
            Ok(n as usize)
        };
        Ok(TableCounts {
            songs: count(COUNT_SONGS)?,
            artists: count(COUNT_ARTISTS)?,
            users: count(COUNT_USERS)?,
            time: count(COUNT_TIME)?,
            songplays: count(COUNT_SONGPLAYS)?,
        })
    }

    /// Read-only access to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

/// The uncommitted inserts of a single input file.
pub struct FileTransaction<'conn> {
    tx: Transaction<'conn>,
}

impl FileTransaction<'_> {
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }
}

impl WarehouseWriter for FileTransaction<'_> {
    fn insert_song(&self, song: &SongRow) -> Result<()> {
        let conn: &Connection = &self.tx;
        conn.insert_song(song)
    }

    fn insert_artist(&self, artist: &ArtistRow) -> Result<()> {
        let conn: &Connection = &self.tx;
        conn.insert_artist(artist)
    }

    fn insert_user(&self, user: &UserRow) -> Result<()> {
        let conn: &Connection = &self.tx;
        conn.insert_user(user)
    }

    fn insert_time(&self, time: &TimeRow) -> Result<()> {
        let conn: &Connection = &self.tx;
        conn.insert_time(time)
    }

    fn insert_songplay(&self, songplay: &SongPlayRow) -> Result<()> {
        let conn: &Connection = &self.tx;
        conn.insert_songplay(songplay)
    }

    fn find_song_and_artist(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> Result<Option<SongMatch>> {
        let conn: &Connection = &self.tx;
        conn.find_song_and_artist(title, artist_name, duration)
    }
}

impl WarehouseWriter for Connection {
    fn insert_song(&self, song: &SongRow) -> Result<()> {
        self.prepare_cached(SONG_INSERT)?.execute(params![
            song.song_id,
            song.title,
            song.artist_id,
            song.year,
            song.duration
        ])?;
        Ok(())
    }

    fn insert_artist(&self, artist: &ArtistRow) -> Result<()> {
        self.prepare_cached(ARTIST_INSERT)?.execute(params![
            artist.artist_id,
            artist.name,
            artist.location,
            artist.latitude,
            artist.longitude
        ])?;
        Ok(())
    }

    fn insert_user(&self, user: &UserRow) -> Result<()> {
        self.prepare_cached(USER_INSERT)?.execute(params![
            user.user_id,
            user.first_name,
            user.last_name,
            user.gender,
            user.level
        ])?;
        Ok(())
    }

    fn insert_time(&self, time: &TimeRow) -> Result<()> {
        self.prepare_cached(TIME_INSERT)?.execute(params![
            time.start_time,
            time.hour,
            time.day,
            time.week,
            time.month,
            time.year,
            time.weekday
        ])?;
        Ok(())
    }

    fn insert_songplay(&self, songplay: &SongPlayRow) -> Result<()> {
        self.prepare_cached(SONGPLAY_INSERT)?.execute(params![
            songplay.songplay_id,
            songplay.start_time,
            songplay.user_id,
            songplay.level,
            songplay.song_id,
            songplay.artist_id,
            songplay.session_id,
            songplay.location,
            songplay.user_agent
        ])?;
        Ok(())
    }

    fn find_song_and_artist(
        &self,
        title: &str,
        artist_name: &str,
        duration: f64,
    ) -> Result<Option<SongMatch>> {
        let found = self
            .prepare_cached(SONG_SELECT)?
            .query_row(params![title, artist_name, duration], |row| {
                Ok(SongMatch {
                    song_id: row.get(0)?,
                    artist_id: row.get(1)?,
                })
            })
            .optional()?;
        if found.is_none() {
            debug!(
                "No catalog match for '{}' by '{}' ({})",
                title, artist_name, duration
            );
        }
        Ok(found)
    }
}
