//! File log sink for the `log` facade.
//!
//! The terminal belongs to the board while the game runs, so records can't go
//! to stdout or stderr. When a log file is configured every record is
//! appended to it as `[LEVEL] [module] message`; otherwise logging stays off.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::Config;

/// Appends formatted records to a file.
pub struct FileLogger<W: Write + Send = File> {
    out: Mutex<W>,
    level: LevelFilter,
    started: Instant,
}

impl<W: Write + Send> FileLogger<W> {
    pub fn new(out: W, level: LevelFilter) -> Self {
        Self {
            out: Mutex::new(out),
            level,
            started: Instant::now(),
        }
    }

    fn level_prefix(level: Level) -> &'static str {
        match level {
            Level::Error => "[ERROR] ",
            Level::Warn => "[WARN]  ",
            Level::Info => "[INFO]  ",
            Level::Debug => "[DEBUG] ",
            Level::Trace => "[TRACE] ",
        }
    }

    /// Consume the logger and return the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Log for FileLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let elapsed = self.started.elapsed();
        // A failed log write has nowhere else to go.
        let _ = write!(
            out,
            "{:>6}.{:03} {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            Self::level_prefix(record.level())
        );
        if let Some(module) = record.module_path() {
            let _ = write!(out, "[{}] ", module);
        }
        let _ = writeln!(out, "{}", record.args());
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Install the global logger described by `config`.
///
/// Without a log file the max level is set to `Off` and no logger is installed.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_deref() else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    let logger = FileLogger::new(open_append(path)?, config.log_level);
    log::set_logger(Box::leak(Box::new(logger)))
        .map_err(|e| anyhow::anyhow!("installing logger: {e}"))?;
    log::set_max_level(config.log_level);
    log::info!("logging to {} at {}", path.display(), config.log_level);
    Ok(())
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
