// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The crate-wide error type.
//!
//! A `thiserror`-derived enum with `miette::Diagnostic` attached so the
//! binary can render a fancy report, while library callers just get a plain
//! `Result`.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BoxtermError {
    #[error("could not read file: {path}")]
    #[diagnostic(code(boxterm::fs::read))]
    FileRead { path: String, #[source] source: std::io::Error },

    #[error("could not write file: {path}")]
    #[diagnostic(code(boxterm::fs::write))]
    FileWrite { path: String, #[source] source: std::io::Error },

    #[error("terminal does not support raw mode: {0}")]
    #[diagnostic(code(boxterm::terminal::raw_mode))]
    RawModeUnsupported(String),

    #[error("terminal size probe timed out before a cursor-position report arrived")]
    #[diagnostic(code(boxterm::terminal::resize_probe_timeout))]
    ResizeProbeTimedOut,

    #[error("no box exists with id {0}")]
    #[diagnostic(code(boxterm::boxes::not_found))]
    BoxNotFound(u32),

    #[error("cannot delete the last remaining box")]
    #[diagnostic(code(boxterm::boxes::last_box))]
    CannotDeleteLastBox,

    #[error("split would leave a box narrower than 6 cells along the split axis")]
    #[diagnostic(code(boxterm::boxes::split_too_small))]
    SplitTooSmall,

    #[error("I/O error")]
    #[diagnostic(code(boxterm::io))]
    Io(#[from] std::io::Error),

    #[error("logging setup failed")]
    #[diagnostic(code(boxterm::log::setup))]
    LogSetup(#[source] miette::Report),
}

pub type BoxtermResult<T> = Result<T, BoxtermError>;
