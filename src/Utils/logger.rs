use chrono::Local;
use csv::Writer;
use log::{LevelFilter, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::numerical::scalar_roots::errors::RootFindingError;
use crate::numerical::scalar_roots::iteration::IterationRecord;

/// "debug" | "info" | "warn" | "error" | "off" (also "none")
pub fn level_from_str(level: &str) -> Result<LevelFilter, RootFindingError> {
    match level.to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        other => Err(RootFindingError::InvalidInput(format!(
            "loglevel must be debug, info, warn, error or off, got '{}'",
            other
        ))),
    }
}

/// log_2024-05-01_12-00-00.txt
pub fn default_log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Installs a terminal logger and, if `log_file` is given, a file logger with the same level.
/// Only the first call in a process installs anything. Returns whether this call did; if a
/// logger was already in place and a file was requested, a warning says the file stays empty.
pub fn init_logger(loglevel: &str, log_file: Option<&Path>) -> Result<bool, RootFindingError> {
    let level = level_from_str(loglevel)?;
    if level == LevelFilter::Off {
        return Ok(false);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path).map_err(|e| {
            RootFindingError::InvalidInput(format!("cannot create {}: {}", path.display(), e))
        })?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    if let Err(e) = CombinedLogger::init(loggers) {
        if let Some(path) = log_file {
            warn!(
                "logger already installed ({}), nothing will be written to {}",
                e,
                path.display()
            );
        }
        return Ok(false);
    }
    Ok(true)
}

/// Writes an iteration trace as CSV, one row per record, with the column names of its
/// method family as header. An empty trace produces an empty file.
pub fn save_trace_to_csv(trace: &[IterationRecord], filename: &Path) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    if let Some(first) = trace.first() {
        writer.write_record(first.headers())?;
    }
    for record in trace {
        writer.write_record(record.row())?;
    }
    writer.flush()?;
    Ok(())
}
