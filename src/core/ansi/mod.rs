// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! VT100/ANSI byte-level protocol support: constants, the static key table, and
//! the input decoder state machine. A router feeding specialized parsers into
//! a shared event type, generalized here to timeout-based (rather than
//! lookahead-based) ESC disambiguation.

pub mod constants;
pub mod key_table;

pub mod input_decoder;

pub use input_decoder::*;
