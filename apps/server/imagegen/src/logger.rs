//! Logging for the imagegen server.
//!
//! Dual output (colored stdout + plain file) with thread-safe, idempotent
//! initialization.

use crate::error::ImagegenError;

use common::ErrorLocation;

use std::io::stdout;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::SystemTime;

use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use fern::Dispatch;
use humantime::format_rfc3339;
use log::{info, warn, LevelFilter};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "imagegen.log";

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Default log level for release builds.
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stdout + file).
///
/// Safe to call multiple times - subsequent calls log a warning and return
/// Ok. The actual initialization runs exactly once.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the dispatch
/// configuration fails.
pub fn initialize(log_dir: &Path) -> Result<(), ImagegenError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("Logger already initialized");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(log_dir);
        if result.is_ok() {
            info!("Logger initialized with level: {LOG_LEVEL:?}");
        }
    });

    result
}

/// Internal logger initialization with dual dispatch.
#[track_caller]
fn initialize_internal(log_dir: &Path) -> Result<(), ImagegenError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let base_dispatch = Dispatch::new().level(LOG_LEVEL);

    // Stdout dispatch (colored)
    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stdout());

    // File dispatch (plain text, no colors)
    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(
            fern::log_file(&log_file_path).map_err(|e| ImagegenError::Imagegen {
                message: format!("Failed to create log file: {e}"),
                location: ErrorLocation::from(std::panic::Location::caller()),
            })?,
        );

    base_dispatch
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| ImagegenError::Imagegen {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(std::panic::Location::caller()),
        })?;

    Ok(())
}
