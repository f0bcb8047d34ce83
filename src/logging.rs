// src/logging.rs
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::{Mutex, OnceLock},
};

use anyhow::Context;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::Config;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_LEVEL_ENV: &str = "FILE_METADATA_LOG";

enum LogTarget {
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    level: LevelFilter,
    target: LogTarget,
}

impl Logger {
    fn format(record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!("{} {} [{}] {}", timestamp, record.level(), record.target(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = Self::format(record);

        match &self.target {
            LogTarget::Stderr => eprintln!("{msg}"),
            LogTarget::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{msg}");
                }
            }
        }
    }

    fn flush(&self) {
        if let LogTarget::File(file) = &self.target
            && let Ok(mut file) = file.lock()
        {
            let _ = file.flush();
        }
    }
}

/// Level named by [`LOG_LEVEL_ENV`], if set and valid.
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_LEVEL_ENV).ok().and_then(|s| s.parse::<LevelFilter>().ok())
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the process-wide logger described by `config`.
///
/// Only the first call installs a logger; later calls are no-ops.
///
/// # Errors
///
/// Returns `Err` when the log file cannot be opened or another logger is
/// already registered with the `log` facade.
pub fn init(config: &Config) -> anyhow::Result<()> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    if LOGGER.get().is_some() {
        return Ok(());
    }

    let target = match &config.log_file {
        Some(path) => {
            let file = open_append(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            LogTarget::File(Mutex::new(file))
        }
        None => LogTarget::Stderr,
    };

    let logger = LOGGER.get_or_init(|| Logger { level: config.log_level, target });
    log::set_logger(logger).context("logger already installed")?;
    log::set_max_level(logger.level);
    Ok(())
}
