// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::rolling_file_appender;
use crate::core::error::{BoxtermError, BoxtermResult};

/// Installs the global tracing subscriber when `-l/--enable-logging` is
/// passed. Returns the worker guard the caller must keep alive for the
/// duration of the process — dropping it flushes and stops the background
/// writer thread.
///
/// Just the single file-writer case: there is no stdout/stderr display
/// layer because stdout is the screen being drawn to.
pub fn init_logging(log_file_path: &str) -> BoxtermResult<tracing_appender::non_blocking::WorkerGuard> {
    let appender = rolling_file_appender::try_create(log_file_path)
        .map_err(BoxtermError::LogSetup)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("BOXTERM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();

    Ok(guard)
}
