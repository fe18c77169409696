// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Logging setup: one rolling-file layer, no stdout/stderr/shared-writer
//! display layers (this process's stdout *is* the terminal screen it's
//! drawing to, so tracing can never share it) and no custom event formatter.

pub mod init;
pub mod rolling_file_appender;

pub use init::*;
pub use rolling_file_appender::*;
