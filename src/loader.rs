//! Batch loader: runs a transformer over every input file under a root,
//! committing after each file.

use crate::discover::{find_files, INPUT_EXTENSION};
use crate::error::Result;
use crate::store::SqliteWarehouse;
use crate::transform::{FileReport, FileTransformer};
use std::path::Path;
use tracing::{debug, error};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub rows: FileReport,
}

/// Printed before the loop, with the root exactly as it was configured.
fn files_found_line(total: usize, root: &Path) -> String {
    format!("{} files found in {}", total, root.display())
}

fn progress_line(done: usize, total: usize) -> String {
    format!("{}/{} files processed.", done, total)
}

/// Load every input file under `root` with `transform`.
///
/// Files are processed in discovery order. Each file runs in its own
/// transaction, committed before progress is reported. The first failure is
/// returned as is: files committed before it stay in the warehouse, the
/// failing file's rows are rolled back.
pub fn process_data<P: AsRef<Path>>(
    warehouse: &mut SqliteWarehouse,
    root: P,
    transform: FileTransformer,
) -> Result<LoadSummary> {
    let root = root.as_ref();
    let files = find_files(root, INPUT_EXTENSION);
    let total = files.len();
    println!("{}", files_found_line(total, root));

    let mut summary = LoadSummary {
        files_found: total,
        ..Default::default()
    };

    for (i, path) in files.iter().enumerate() {
        let tx = warehouse.begin_file()?;
        let report = match transform(&tx, path) {
            Ok(report) => report,
            Err(e) => {
                error!("Failed to load {}: {}", path.display(), e);
                return Err(e);
            }
        };
        tx.commit()?;

        debug!("{}: {:?}", path.display(), report);
        summary.rows += report;
        summary.files_processed += 1;
        println!("{}", progress_line(i + 1, total));
    }

    Ok(summary)
}
