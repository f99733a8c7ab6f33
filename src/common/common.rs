use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Bytes left literal when encoding identifiers for text protocols (RFC 3986 unreserved).
const URL_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;
    info!("logging initialized.");
    Ok(())
}

/// Percent-encodes raw identifier bytes (peer id, info hash) for tracker queries and magnet links.
pub fn url_encode(data: &[u8]) -> String {
    percent_encoding::percent_encode(data, URL_UNRESERVED).to_string()
}

/// Runs accounting work that may block on a pacing sleep.
///
/// On a multi-threaded Tokio runtime the worker is handed over with `block_in_place`,
/// so other reader tasks keep running while this one is throttled.
pub fn run_blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => tokio::task::block_in_place(f),
        _ => f(),
    }
}

/// Sleeps for `duration`, returns `true` when shutdown was requested first.
pub async fn shutdown_waiting(duration: Duration, shutdown: Shutdown) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => false,
        _ = shutdown.handle() => true,
    }
}
