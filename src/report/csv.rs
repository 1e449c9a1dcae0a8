/*!
 * CSV Export
 * One row per completed process, in completion order, no quoting
 */

use crate::core::ExportError;
use crate::process::ProcessRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const CSV_HEADER: &str =
    "PID,Type,Arrival,Burst,Priority,Start,Finish,Waiting,Turnaround,Response,ContextSwitches";

fn opt(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write header and rows to any writer
pub fn write_csv<W: Write>(mut writer: W, completed: &[ProcessRecord]) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for p in completed {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{}",
            p.id,
            p.process_type,
            p.arrival,
            p.burst,
            p.priority,
            opt(p.start),
            opt(p.finish),
            p.waiting,
            p.turnaround,
            opt(p.response),
            p.context_switches
        )?;
    }
    writer.flush()
}

/// Write the CSV to `path`, replacing any existing file
pub fn export_csv(path: impl AsRef<Path>, completed: &[ProcessRecord]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let to_export_error = |source: io::Error| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(to_export_error)?;
    write_csv(BufWriter::new(file), completed).map_err(to_export_error)?;

    info!(path = %path.display(), rows = completed.len(), "Results exported");
    Ok(())
}
