//! Shared constants for end-to-end tests

// ============================================================================
// Song Metadata
// ============================================================================

/// Song file used as the reference projection example.
pub const SONG_1_JSON: &str = r#"{"song_id":"S1","title":"T","artist_id":"A1","artist_name":"N","artist_location":"L","artist_latitude":1.0,"artist_longitude":2.0,"year":2000,"duration":123.45}"#;

/// Song that the log fixtures below play.
pub const SONG_2_JSON: &str = r#"{"num_songs":1,"artist_id":"AR5KOSW1187FB35FF4","artist_latitude":49.80388,"artist_longitude":15.47491,"artist_location":"Dubai UAE","artist_name":"Elena","song_id":"SOZCTXZ12AB0182364","title":"Setanta matins","duration":269.58322,"year":0}"#;

pub const SONG_2_ID: &str = "SOZCTXZ12AB0182364";
pub const ARTIST_2_ID: &str = "AR5KOSW1187FB35FF4";

// ============================================================================
// Event Log Lines
// ============================================================================

/// 2018-11-08 19:36:36.796 UTC, plays song 2.
pub const NEXT_SONG_MATCHING: &str = r#"{"artist":"Elena","auth":"Logged In","firstName":"Lily","gender":"F","itemInSession":5,"lastName":"Koch","length":269.58322,"level":"paid","location":"Chicago-Naperville-Elgin, IL-IN-WI","method":"PUT","page":"NextSong","registration":1541048010796.0,"sessionId":818,"song":"Setanta matins","status":200,"ts":1541705796796,"userAgent":"\"Mozilla\/5.0 (X11; Linux x86_64)\"","userId":"15"}"#;

/// A song that is not in the catalog.
pub const NEXT_SONG_UNKNOWN: &str = r#"{"artist":"Des'ree","auth":"Logged In","firstName":"Kaylee","gender":"F","itemInSession":1,"lastName":"Summers","length":246.30812,"level":"free","location":"Phoenix-Mesa-Scottsdale, AZ","method":"PUT","page":"NextSong","registration":1540344794796.0,"sessionId":139,"song":"You Gotta Be","status":200,"ts":1541106106796,"userAgent":"Mozilla\/5.0 (Windows NT 6.1; WOW64)","userId":"8"}"#;

/// Logged-out login page hit: empty user id, null names.
pub const LOGIN_EVENT: &str = r#"{"artist":null,"auth":"Logged Out","firstName":null,"gender":null,"itemInSession":0,"lastName":null,"length":null,"level":"free","location":null,"method":"PUT","page":"Login","registration":null,"sessionId":52,"song":null,"status":307,"ts":1541207073796,"userAgent":null,"userId":""}"#;
