// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The static byte-sequence ↔ key-name table.
//!
//! Lookup is linear: the table is small (a few dozen entries) and input
//! arrives at human typing speed, so there is no reason to reach for a trie or
//! hash map — a straight scan is both the simplest and, at this scale, the
//! fastest option.
//!
//! Sequences that begin with the two-byte CSI introducer are stored starting
//! with the canonical single byte [`crate::core::ansi::constants::CSI`] (0x9B);
//! the decoder canonicalizes incoming bytes to that form before calling
//! [`lookup`].

use crate::core::ansi::constants::{CSI, SS3_O};

/// One entry in the static key table: a literal byte sequence and the name the
/// decoder emits on an exact match.
#[derive(Copy, Clone, Debug)]
pub struct KeyTableEntry {
    pub bytes: &'static [u8],
    pub name: &'static str,
}

const fn entry(bytes: &'static [u8], name: &'static str) -> KeyTableEntry {
    KeyTableEntry { bytes, name }
}

/// Build the fixed C0-control names `^A`..`^Z`, `^[`..`^_`, skipping 0x1B
/// (`ESC`, handled separately by the decoder's lone-Escape timeout) and the
/// bytes already covered by a more specific entry below (Tab, Return, etc).
const fn control_name(byte: u8) -> &'static str {
    match byte {
        0x01 => "^A", 0x02 => "^B", 0x03 => "^C", 0x04 => "^D", 0x05 => "^E",
        0x06 => "^F", 0x07 => "^G", 0x08 => "^H", 0x0B => "^K", 0x0C => "^L",
        0x0E => "^N", 0x0F => "^O", 0x10 => "^P", 0x11 => "^Q", 0x12 => "^R",
        0x13 => "^S", 0x14 => "^T", 0x15 => "^U", 0x16 => "^V", 0x17 => "^W",
        0x18 => "^X", 0x19 => "^Y", 0x1A => "^Z", 0x1C => "^\\", 0x1D => "^]",
        0x1E => "^^", 0x1F => "^_",
        _ => unreachable!(),
    }
}

/// The full static table, built once at first use. Order matters only in the
/// sense that every prefix of a later multi-byte entry must itself be
/// resolvable as "prefix, keep waiting" by [`lookup`] — the table doesn't need
/// to be sorted.
pub fn table() -> &'static [KeyTableEntry] {
    static TABLE: std::sync::OnceLock<Vec<KeyTableEntry>> = std::sync::OnceLock::new();
    TABLE.get_or_init(build_table)
}

fn build_table() -> Vec<KeyTableEntry> {
    let mut t = Vec::new();

    // C0 controls except ESC (0x1B), Tab (0x09), Return (0x0A/0x0D), BS-ish.
    for byte in [
        0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x0B, 0x0C, 0x0E, 0x0F,
        0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1C,
        0x1D, 0x1E, 0x1F,
    ] {
        t.push(KeyTableEntry { bytes: leak_one(byte), name: control_name(byte) });
    }

    // Single-byte specials. Delete is whatever the terminal actually sends
    // for the VT220 Delete key (CSI "3~"), not 0x08 (that's backspace's C0
    // control and is already covered as "^H" above).
    t.push(entry(&[0x09], "Tab"));
    t.push(entry(&[0x0A], "Return"));
    t.push(entry(&[0x0D], "Return"));
    t.push(entry(&[0x7F], "BS"));

    // CSI-introduced navigation/editing keys (stored with the canonical 0x9B
    // lead byte — see module docs).
    for (tail, name) in [
        (&b"A"[..], "Up"), (&b"B"[..], "Down"), (&b"C"[..], "Right"), (&b"D"[..], "Left"),
        (&b"H"[..], "Home"), (&b"F"[..], "End"),
        (&b"1~"[..], "Home"), (&b"4~"[..], "End"),
        (&b"2~"[..], "Insert"), (&b"3~"[..], "Del"),
        (&b"5~"[..], "PgUp"), (&b"6~"[..], "PgDn"),
        (&b"11~"[..], "F1"), (&b"12~"[..], "F2"), (&b"13~"[..], "F3"), (&b"14~"[..], "F4"),
        (&b"15~"[..], "F5"), (&b"17~"[..], "F6"), (&b"18~"[..], "F7"), (&b"19~"[..], "F8"),
        (&b"20~"[..], "F9"), (&b"21~"[..], "F10"),
    ] {
        t.push(KeyTableEntry { bytes: prepend_csi(tail), name });
    }

    // Shifted variants via the `;2` parameter form.
    for (tail, name) in [
        (&b"1;2A"[..], "Shift-Up"), (&b"1;2B"[..], "Shift-Down"),
        (&b"1;2C"[..], "Shift-Right"), (&b"1;2D"[..], "Shift-Left"),
        (&b"1;2H"[..], "Shift-Home"), (&b"1;2F"[..], "Shift-End"),
        (&b"11;2~"[..], "Shift F1"), (&b"12;2~"[..], "Shift F2"), (&b"13;2~"[..], "Shift F3"),
        (&b"14;2~"[..], "Shift F4"), (&b"15;2~"[..], "Shift F5"), (&b"17;2~"[..], "Shift F6"),
        (&b"18;2~"[..], "Shift F7"), (&b"19;2~"[..], "Shift F8"), (&b"20;2~"[..], "Shift F9"),
        (&b"21;2~"[..], "Shift F10"),
    ] {
        t.push(KeyTableEntry { bytes: prepend_csi(tail), name });
    }

    // SS3 sequences: `ESC O <final>`, application-mode arrows/function keys.
    for (final_byte, name) in [
        (b'A', "Up"), (b'B', "Down"), (b'C', "Right"), (b'D', "Left"),
        (b'H', "Home"), (b'F', "End"),
        (b'P', "F1"), (b'Q', "F2"), (b'R', "F3"), (b'S', "F4"),
    ] {
        t.push(KeyTableEntry { bytes: leak_slice(&[crate::core::ansi::constants::ESC, SS3_O, final_byte]), name });
    }

    // Legacy "Esc <digit>" mappings for F1..F10.
    for (digit, name) in [
        (b'1', "F1"), (b'2', "F2"), (b'3', "F3"), (b'4', "F4"), (b'5', "F5"),
        (b'6', "F6"), (b'7', "F7"), (b'8', "F8"), (b'9', "F9"), (b'0', "F10"),
    ] {
        t.push(KeyTableEntry { bytes: leak_slice(&[crate::core::ansi::constants::ESC, digit]), name });
    }

    t
}

fn leak_one(byte: u8) -> &'static [u8] { leak_slice(&[byte]) }

fn leak_slice(bytes: &[u8]) -> &'static [u8] { Vec::from(bytes).leak() }

fn prepend_csi(tail: &[u8]) -> &'static [u8] {
    let mut v = Vec::with_capacity(tail.len() + 1);
    v.push(CSI);
    v.extend_from_slice(tail);
    v.leak()
}

/// The outcome of comparing an accumulated buffer against the key table.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The longest table entry that matches the start of the buffer; the
    /// caller should emit `name` and re-run lookup on the remaining
    /// `buffer[consumed..]` (multiple key names can resolve out of one
    /// buffer, e.g. `^X^C` arriving in a single read).
    Exact { name: &'static str, consumed: usize },
    /// No entry matches yet, but the whole buffer is a strict prefix of at
    /// least one table entry — keep accumulating bytes.
    Prefix,
    /// No table entry matches and none could ever become a match by
    /// appending bytes.
    NoMatch,
}

/// Compare `buffer` against the static table.
///
/// Uses maximal munch: if more than one entry matches a leading run of
/// `buffer`, the longest one wins, so a short entry that happens to be a
/// byte-prefix of a longer one (none exist in this table today, but the
/// rule is kept general) never shadows it.
#[must_use]
pub fn lookup(buffer: &[u8]) -> Lookup {
    if buffer.is_empty() {
        return Lookup::NoMatch;
    }

    let mut best: Option<&KeyTableEntry> = None;
    for e in table() {
        let is_longer = match best {
            Some(b) => e.bytes.len() > b.bytes.len(),
            None => true,
        };
        if buffer.starts_with(e.bytes) && is_longer {
            best = Some(e);
        }
    }
    if let Some(e) = best {
        return Lookup::Exact { name: e.name, consumed: e.bytes.len() };
    }

    if table().iter().any(|e| e.bytes.starts_with(buffer)) {
        Lookup::Prefix
    } else {
        Lookup::NoMatch
    }
}
