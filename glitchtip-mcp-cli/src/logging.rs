//! Logging setup
//!
//! stdout carries the MCP channel, so logs never go there: they are written
//! to stderr, or appended to the file named by `GLITCHTIP_MCP_LOG_FILE`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file to append to
pub const LOG_FILE_ENV_VAR: &str = "GLITCHTIP_MCP_LOG_FILE";

/// A writer that flushes every write to the shared log file.
///
/// Each write takes the lock, writes, flushes and syncs, so log lines are on
/// disk even if the server is killed by its client.
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn lock(&self) -> MutexGuard<'_, File> {
        self.file
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.lock();
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.lock();
        file.flush()?;
        file.sync_all()
    }
}

/// Level used when `RUST_LOG` is not set
pub fn log_level(verbose: bool, quiet: bool, serving: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else if serving {
        Level::INFO
    } else {
        Level::WARN
    }
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the global subscriber
pub fn init_logging(level: Level) {
    let log_file = std::env::var(LOG_FILE_ENV_VAR)
        .ok()
        .filter(|path| !path.trim().is_empty());

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                let shared = Arc::new(Mutex::new(file));
                tracing_subscriber::fmt()
                    .with_writer(move || FileWriterGuard::new(shared.clone()))
                    .with_env_filter(env_filter(level))
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file {path}, using stderr: {e}");
            }
        }
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(level))
        .init();
}
