// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! CSI parameter parsing.
//!
//! A CSI sequence, once canonicalized to start with the single byte
//! [`crate::core::ansi::constants::CSI`], has the shape:
//!
//! ```text
//! CSI [private-prefix] param (';' param)* [intermediate]* final
//! ```
//!
//! where `private-prefix` is one of `< = > ?`, each `param` is a run of
//! decimal digits (an empty run between semicolons means "absent"),
//! `intermediate` bytes lie in `0x21..=0x2F`, and `final` lies in
//! `0x40..=0x7E`.

use super::events::CsiEvent;
use crate::core::ansi::constants::{CSI_FINAL_RANGE, CSI_INTERMEDIATE_RANGE, CSI_PRIVATE_PREFIX};

/// The result of attempting to parse a CSI body (the bytes after the leading
/// [`crate::core::ansi::constants::CSI`] byte).
#[derive(Debug, PartialEq, Eq)]
pub enum CsiParse {
    /// The final byte was seen; here is the fully decoded event.
    Complete(CsiEvent),
    /// No final byte yet — the caller should keep accumulating bytes.
    Incomplete,
    /// The bytes seen so far cannot form a valid CSI sequence (e.g. an
    /// out-of-range byte where a parameter or intermediate was expected).
    Invalid,
}

/// Parse the body of a CSI sequence (everything after the leading 0x9B byte).
#[must_use]
pub fn parse_csi_body(body: &[u8]) -> CsiParse {
    let mut i = 0;
    let mut prefix = String::new();

    if let Some(&b) = body.first() {
        if CSI_PRIVATE_PREFIX.contains(&b) {
            prefix.push(b as char);
            i += 1;
        }
    }

    let mut params: Vec<Option<i64>> = Vec::new();
    let mut current: Option<i64> = None;
    let mut current_present = false;

    loop {
        let Some(&b) = body.get(i) else { return CsiParse::Incomplete };

        if b.is_ascii_digit() {
            current_present = true;
            let digit = i64::from(b - b'0');
            current = Some(current.unwrap_or(0) * 10 + digit);
            i += 1;
            continue;
        }

        if b == b';' {
            params.push(if current_present { current } else { None });
            current = None;
            current_present = false;
            i += 1;
            continue;
        }

        // Not a digit or separator: we're past the parameter list.
        break;
    }
    // Push the final (possibly absent) parameter, unless the list is empty
    // and nothing was ever seen (a bare `CSI <final>` with zero parameters).
    if current_present || !params.is_empty() {
        params.push(if current_present { current } else { None });
    }

    let mut intermediates = String::new();
    while let Some(&b) = body.get(i) {
        if CSI_INTERMEDIATE_RANGE.contains(&b) {
            intermediates.push(b as char);
            i += 1;
        } else {
            break;
        }
    }

    let Some(&final_byte) = body.get(i) else { return CsiParse::Incomplete };

    if !CSI_FINAL_RANGE.contains(&final_byte) {
        return CsiParse::Invalid;
    }

    let mut command = prefix;
    command.push_str(&intermediates);
    command.push(final_byte as char);

    CsiParse::Complete(CsiEvent { command, params })
}
