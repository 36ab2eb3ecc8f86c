//! Event log transformer.
//!
//! Only song-play events survive the filter. Each one yields a time row, a
//! user row and a songplay row; the songplay's catalog references come from an
//! exact-match lookup against songs already in the warehouse.

use super::records::{RawLogEvent, SongPlayEvent};
use super::time::decompose_timestamp;
use super::FileReport;
use crate::error::{EtlError, Result};
use crate::store::{TimeRow, WarehouseWriter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parse every line of a log file and keep the song-play events.
///
/// The whole file is parsed before anything is returned, so a malformed line
/// anywhere fails the file.
pub fn read_log_file(path: &Path) -> Result<Vec<SongPlayEvent>> {
    let file = File::open(path).map_err(|e| EtlError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();
    let mut total = 0;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| EtlError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        total += 1;

        let raw: RawLogEvent = serde_json::from_str(&line)
            .map_err(|e| EtlError::parse(path, Some(line_number), e.to_string()))?;
        if raw.is_song_play() {
            // songplay_id is the index among the retained rows
            let event = raw
                .into_song_play(events.len())
                .map_err(|msg| EtlError::parse(path, Some(line_number), msg))?;
            events.push(event);
        }
    }

    debug!(
        "{}: {} song plays out of {} events",
        path.display(),
        events.len(),
        total
    );
    Ok(events)
}

pub fn time_rows(path: &Path, events: &[SongPlayEvent]) -> Result<Vec<TimeRow>> {
    events
        .iter()
        .map(|event| {
            decompose_timestamp(event.ts).ok_or_else(|| {
                EtlError::parse(path, None, format!("timestamp {} is out of range", event.ts))
            })
        })
        .collect()
}

pub fn process_log_file(writer: &dyn WarehouseWriter, path: &Path) -> Result<FileReport> {
    let events = read_log_file(path)?;
    let times = time_rows(path, &events)?;
    let mut report = FileReport::default();

    for time in &times {
        writer.insert_time(time)?;
        report.time += 1;
    }

    for event in &events {
        writer.insert_user(&event.user_row())?;
        report.users += 1;
    }

    for event in &events {
        let resolved = writer.find_song_and_artist(&event.song, &event.artist, event.length)?;
        if resolved.is_some() {
            report.resolved_songplays += 1;
        }
        writer.insert_songplay(&event.songplay_row(resolved))?;
        report.songplays += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SongMatch;
    use crate::transform::recording_writer::RecordingWriter;
    use std::fs;
    use tempfile::TempDir;

    fn log_line(page: &str, ts: i64, user_id: &str, song: &str, artist: &str, length: f64) -> String {
        format!(
            r#"{{"artist":"{artist}","auth":"Logged In","firstName":"Lily","gender":"F","itemInSession":1,"lastName":"Koch","length":{length},"level":"paid","location":"Chicago-Naperville-Elgin, IL-IN-WI","method":"PUT","page":"{page}","registration":1541048010796.0,"sessionId":818,"song":"{song}","status":200,"ts":{ts},"userAgent":"Mozilla/5.0","userId":"{user_id}"}}"#
        )
    }

    fn write_log(dir: &TempDir, lines: &[String]) -> std::path::PathBuf {
        let path = dir.path().join("2018-11-08-events.json");
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn test_only_next_song_rows_produce_output() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            &[
                log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0),
                log_line("Login", 1541705800000, "15", "Hey", "Someone", 200.0),
            ],
        );

        let writer = RecordingWriter::default();
        let report = process_log_file(&writer, &path).unwrap();

        assert_eq!((report.time, report.users, report.songplays), (1, 1, 1));
        assert_eq!(writer.time.borrow().len(), 1);
        assert_eq!(writer.users.borrow().len(), 1);
        assert_eq!(writer.songplays.borrow().len(), 1);
        assert_eq!(writer.time.borrow()[0].start_time, 1541705796796);
        assert_eq!(writer.users.borrow()[0].user_id, 15);
    }

    #[test]
    fn test_repeated_instants_are_not_deduplicated() {
        let dir = TempDir::new().unwrap();
        let line = log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0);
        let path = write_log(&dir, &[line.clone(), line]);

        let writer = RecordingWriter::default();
        process_log_file(&writer, &path).unwrap();

        assert_eq!(writer.time.borrow().len(), 2);
        assert_eq!(writer.users.borrow().len(), 2);
    }

    #[test]
    fn test_songplay_resolution_is_exact_match_only() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            &[
                log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0),
                log_line("NextSong", 1541705896796, "15", "Hey", "Someone", 200.5),
            ],
        );

        let writer = RecordingWriter::with_catalog(vec![(
            "Hey",
            "Someone",
            200.0,
            SongMatch {
                song_id: "S1".to_string(),
                artist_id: "A1".to_string(),
            },
        )]);
        let report = process_log_file(&writer, &path).unwrap();
        assert_eq!(report.resolved_songplays, 1);

        let songplays = writer.songplays.borrow();
        assert_eq!(songplays[0].song_id.as_deref(), Some("S1"));
        assert_eq!(songplays[0].artist_id.as_deref(), Some("A1"));
        assert_eq!(songplays[1].song_id, None);
        assert_eq!(songplays[1].artist_id, None);
    }

    #[test]
    fn test_songplay_id_counts_only_retained_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            &[
                log_line("Login", 1541705700000, "15", "x", "y", 1.0),
                log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0),
                String::new(),
                log_line("Home", 1541705800000, "15", "x", "y", 1.0),
                log_line("NextSong", 1541705896796, "15", "Hey", "Someone", 200.0),
            ],
        );

        let writer = RecordingWriter::default();
        process_log_file(&writer, &path).unwrap();

        let ids: Vec<i64> = writer
            .songplays
            .borrow()
            .iter()
            .map(|s| s.songplay_id)
            .collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_malformed_line_fails_before_any_insert() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            &[
                log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0),
                "{\"page\": \"NextSong\", ".to_string(),
            ],
        );

        let writer = RecordingWriter::default();
        let err = process_log_file(&writer, &path).unwrap_err();

        match err {
            EtlError::Parse { line, .. } => assert_eq!(line, Some(2)),
            other => panic!("expected parse error, got {other}"),
        }
        assert!(writer.time.borrow().is_empty());
    }

    #[test]
    fn test_malformed_non_song_play_line_fails_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            &dir,
            &[
                log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0),
                log_line("Home", 1541705800000, "15", "x", "y", 1.0),
                "{\"page\":\"Home\",".to_string(),
            ],
        );

        let writer = RecordingWriter::default();
        let err = process_log_file(&writer, &path).unwrap_err();

        match err {
            EtlError::Parse { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("expected parse error, got {other}"),
        }
        assert!(writer.songplays.borrow().is_empty());
    }

    #[test]
    fn test_song_play_missing_session_fails_with_its_line() {
        let dir = TempDir::new().unwrap();
        let incomplete = log_line("NextSong", 1541705896796, "15", "Hey", "Someone", 200.0)
            .replace("\"sessionId\":818,", "");
        let path = write_log(
            &dir,
            &[
                log_line("NextSong", 1541705796796, "15", "Hey", "Someone", 200.0),
                incomplete,
            ],
        );

        let err = read_log_file(&path).unwrap_err();
        match err {
            EtlError::Parse { line, message, .. } => {
                assert_eq!(line, Some(2));
                assert!(message.contains("sessionId"));
            }
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_log(&dir, &[]);

        let writer = RecordingWriter::default();
        let report = process_log_file(&writer, &path).unwrap();
        assert_eq!(report, FileReport::default());
    }
}
