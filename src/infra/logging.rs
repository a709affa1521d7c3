use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Initializes tracing with a non-blocking file writer; the TUI owns the
/// terminal, so nothing may log to stdout/stderr. The returned guard must
/// stay alive for the process lifetime or buffered lines are lost.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let directory = config
        .file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = config
        .file
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from("parley.log"));

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}
