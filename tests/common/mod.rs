//! Common test infrastructure
//!
//! Builds throwaway song/log data directories and a warehouse path inside a
//! temporary directory. Tests should only import from this module.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestData, SONG_1_JSON};
//!
//! #[test]
//! fn test_load_one_song() {
//!     let data = TestData::new();
//!     data.write_song_file("A/A/A/S1.json", SONG_1_JSON);
//!     let summary = sparkify_etl::run_etl(&data.config()).unwrap();
//!     assert_eq!(summary.counts.songs, 1);
//! }
//! ```

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::TestData;
