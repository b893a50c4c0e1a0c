//! Telemetry setup
//!
//! The console owns the terminal, so log lines go to a daily rolling file
//! instead of stdout.

use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::AppError;

pub const LOG_FILE_PREFIX: &str = "gonnect-console";

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init_telemetry(
    settings: &LoggingSettings,
    level_override: Option<&str>,
) -> Result<WorkerGuard, AppError> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(&settings.directory)
        .map_err(|e| AppError::InternalError(format!("log file: {}", e)))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = build_filter(&settings.level, level_override)?;

    let result = match settings.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false), // No colors in file
            )
            .try_init(),
    };
    result.map_err(|e| AppError::InternalError(format!("tracing subscriber: {}", e)))?;

    Ok(guard)
}

/// `RUST_LOG` wins. Otherwise the configured level, raised to the verbosity
/// override when that is more verbose.
fn build_filter(level: &str, level_override: Option<&str>) -> Result<EnvFilter, AppError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let configured = parse_filter(level)?;
    let Some(raised) = level_override else {
        return Ok(configured);
    };
    let wanted = LevelFilter::from_str(raised)
        .map_err(|e| AppError::InternalError(format!("log level {:?}: {}", raised, e)))?;
    if configured.max_level_hint().is_some_and(|current| current >= wanted) {
        Ok(configured)
    } else {
        parse_filter(raised)
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directive)
        .map_err(|e| AppError::InternalError(format!("log filter {:?}: {}", directive, e)))
}
