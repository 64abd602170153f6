use crate::progress_bar_manager::ProgressBarManager;
use crate::ua_error::UaError;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tokio::fs as tfs;
use tokio::io::{AsyncWriteExt, BufWriter};

pub const DEFAULT_FILE_NAME: &str = "user_agents.txt";

/// Newline-joined agents with a trailing newline, empty for an empty batch.
pub fn join_lines(agents: &[String]) -> String {
    agents.iter().map(|ua| format!("{}\n", ua)).collect()
}

/// Writes one agent per line into `out`.
///
/// A reader hanging up early (e.g. `| head -1`) is not an error.
pub fn print_agents<W: Write>(out: &mut W, agents: &[String]) -> Result<(), UaError> {
    let written = out
        .write_all(join_lines(agents).as_bytes())
        .and_then(|_| out.flush());
    match written {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
        Ok(()) => Ok(()),
    }
}

/// Writes one agent per line into `path`, truncating any previous content.
///
/// Returns the size of the written file.
pub async fn write_agents(
    path: &Path,
    agents: &[String],
    pbm: &ProgressBarManager,
) -> Result<u64, UaError> {
    let file = tfs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    for ua in agents {
        writer.write_all(ua.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        pbm.increment_global_progress();
    }
    writer.flush().await?;
    let file_size = tfs::metadata(path).await?.len();
    Ok(file_size)
}

const KILOBYTE: f64 = 1024.0;
const MEGABYTE: f64 = KILOBYTE * KILOBYTE;

pub fn pretty_file_size(len: u64) -> String {
    let float_len = len as f64;
    let (unit, value) = if float_len > MEGABYTE {
        ("MiB", float_len / MEGABYTE)
    } else if float_len > KILOBYTE {
        ("KiB", float_len / KILOBYTE)
    } else {
        ("bytes", float_len)
    };
    format!("{:.2}{}", value, unit)
}
