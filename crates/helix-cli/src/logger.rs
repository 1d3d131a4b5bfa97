use crate::{CliError, CliResult};

use helix_config::LogLevel;

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Where log records go. Stdout is reserved for command output.
enum Sink {
    File(File),
    ColoredStderr,
    Stderr,
}

/// Install the global `fern` logger.
///
/// `log_file` = None logs to stderr (colored if `colored`); Some appends to
/// that file, creating its directory first.
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let sink = match log_file.as_deref() {
        Some(path) => Sink::File(open_log_file(path)?),
        None if colored => Sink::ColoredStderr,
        None => Sink::Stderr,
    };

    Dispatch::new()
        .level(log_level.0)
        .chain(dispatch_for(sink))
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    debug!(
        "Logger initialized: level={}, target={}",
        log_level.0,
        log_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("stderr"))
    );

    Ok(())
}

fn open_log_file(path: &Path) -> CliResult<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::logger(format!("Failed to open log file {}: {e}", path.display())))
}

fn dispatch_for(sink: Sink) -> Dispatch {
    match sink {
        // File records carry the source location for later debugging.
        Sink::File(file) => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message} [{}:{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                ))
            })
            .chain(file),
        Sink::ColoredStderr => {
            let colors = ColoredLevelConfig::new()
                .error(Color::Red)
                .warn(Color::Yellow)
                .info(Color::Green)
                .debug(Color::Blue)
                .trace(Color::Magenta);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {message}",
                        humantime::format_rfc3339(SystemTime::now()),
                        colors.color(record.level()),
                    ))
                })
                .chain(std::io::stderr())
        }
        Sink::Stderr => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message}",
                    humantime::format_rfc3339(SystemTime::now()),
                    record.level(),
                ))
            })
            .chain(std::io::stderr()),
    }
}
