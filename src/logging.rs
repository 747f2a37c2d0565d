//! File-based logging bootstrap.
//!
//! The terminal is in raw mode while the app runs, so nothing may write to
//! stdout or stderr; diagnostics go to rotating files instead.

use std::path::Path;

use anyhow::Result;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

const LOG_FILE_BASENAME: &str = "tudu";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts the rotating file logger. The returned handle must stay alive
/// for the duration of the process. `RUST_LOG` overrides the default
/// level.
pub fn init(log_dir: &Path) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(default_level())?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(logger)
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
