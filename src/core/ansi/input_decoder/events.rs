// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Event types emitted by the decoder.

/// A decoded CSI (Control Sequence Introducer) command: the private prefix and
/// intermediates concatenated with the final byte, plus its parsed parameter
/// list.
///
/// Absent parameters are `None`, not a sentinel integer, since the default
/// value a missing parameter implies is command-dependent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsiEvent {
    /// Private-prefix byte (if any) concatenated with intermediate bytes and
    /// the final byte, e.g. `"A"`, `"~"`, `"?1049h"[1..]` style strings; for
    /// plain cursor-move sequences this is just the final byte as a string,
    /// e.g. `"R"` for a cursor-position report.
    pub command: String,
    pub params: Vec<Option<i64>>,
}

impl CsiEvent {
    #[must_use]
    pub fn param_count(&self) -> usize { self.params.len() }
}

/// A raw mouse report: the decoder does not interpret the button/coordinate
/// encoding (X10 vs SGR vs RXVT) — it is handed to the consumer to accept or
/// reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    pub raw: Vec<u8>,
}

/// The unified output of [`super::decoder::Decoder::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderEvent {
    /// Concatenation of resolved key names and any leftover untranslated raw
    /// bytes. `is_translated` is true iff at least one
    /// key name was resolved.
    Keys { payload: String, is_translated: bool },
    Csi(CsiEvent),
    Mouse(MouseEvent),
    /// Emitted alongside every input read, independent of parsing outcome —
    /// e.g. for key-display tools.
    RawBytes(Vec<u8>),
    /// The wait timed out with no pending Escape and nothing to report
    ///.
    Tick,
    /// The input descriptor reached end-of-file.
    Eof,
}
