use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::stats::{AggregateState, LineOutcome, LineTotals};

/// Per-file failures. The `Display` text is the line shown to the user.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Error opening file: {}, because: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading file: {}, because: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Streams one log file into `state`. The handle is closed when this returns,
/// whether it succeeded or not. Lines recorded before a read error stay in
/// `state`.
pub fn ingest_file(
    path: &Path,
    state: &mut AggregateState,
) -> Result<LineTotals, IngestError> {
    let start_time = Instant::now();
    info!(action = "start", component = "ingest", file_path = ?path, "Reading log file");

    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = ingest_reader(BufReader::new(file), state).map_err(|(partial, source)| {
        warn!(
            action = "abort",
            component = "ingest",
            file_path = ?path,
            lines_read = partial.lines_read(),
            error = %source,
            "Read failed, dropping rest of file"
        );
        IngestError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(
        action = "complete",
        component = "ingest",
        file_path = ?path,
        lines_read = summary.lines_read(),
        lines_skipped = summary.lines_skipped,
        domains_unextractable = summary.domains_unextractable,
        duration_ms = start_time.elapsed().as_millis(),
        "Finished log file"
    );
    Ok(summary)
}

/// Reads newline-terminated lines one at a time until end of stream and
/// returns the totals for this reader alone. On an I/O error, returns what was
/// consumed so far alongside the error.
///
/// Lines are raw bytes; anything that is not UTF-8 is replaced with U+FFFD
/// rather than failing the read.
pub fn ingest_reader<R: BufRead>(
    mut reader: R,
    state: &mut AggregateState,
) -> Result<LineTotals, (LineTotals, io::Error)> {
    let before = state.totals;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(strip_terminator(&buf));
                if state.record_line(&line) == LineOutcome::Skipped {
                    debug!(
                        component = "ingest",
                        line_number = state.totals.since(&before).lines_read(),
                        "Skipping short line"
                    );
                }
            }
            Err(e) => return Err((state.totals.since(&before), e)),
        }
    }

    Ok(state.totals.since(&before))
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
