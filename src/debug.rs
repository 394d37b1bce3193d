// Debug logging for vspong
// File-based tracing output, enabled via the --debug flag

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::{info, Level};

pub const DEFAULT_LOG_PATH: &str = "/tmp/vspong-debug.log";

/// Initialize debug logging to file
///
/// # Behavior
/// - If `enabled` is false: no subscriber is installed, tracing macros are no-ops
/// - If `enabled` is true: truncates `path` and sends DEBUG and above there
///
/// The terminal UI owns stdout, so logs never go to the console.
pub fn init(enabled: bool, path: &Path) -> io::Result<()> {
    if !enabled {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    info!("vspong debug log started, to monitor: tail -f {}", path.display());
    Ok(())
}
