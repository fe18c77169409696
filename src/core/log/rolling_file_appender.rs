// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::miette;

/// Build a never-rolled file appender at `path_str`.
///
/// # Errors
///
/// Returns an error if `path_str` has no parent directory or no file name.
pub fn try_create(path_str: &str) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| std::path::Path::new("."));

    let file_name = path.file_name().ok_or_else(|| {
        miette!("can't derive a log file name from {}", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
