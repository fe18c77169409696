// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Byte-level ANSI/VT100 constants shared by the key table, the decoder, and the
//! renderer.

/// `ESC`, 0x1B. Introduces every multi-byte escape sequence.
pub const ESC: u8 = 0x1B;

/// `[`, the second byte of the two-byte CSI introducer `ESC [`.
pub const CSI_BRACKET: u8 = b'[';

/// The canonical single-byte CSI introducer, 0x9B (C1 control `CSI`). The
/// decoder collapses both `ESC [` and the UTF-8 encoding of 0x9B down to this
/// single byte before table lookup.
pub const CSI: u8 = 0x9B;

/// The two-byte UTF-8 encoding of the C1 control byte 0x9B: `0xC2 0x9B`.
pub const CSI_UTF8_LEAD: u8 = 0xC2;
pub const CSI_UTF8_TAIL: u8 = 0x9B;

/// `O`, the second byte of the SS3 introducer `ESC O` (application-mode
/// arrow/function keys).
pub const SS3_O: u8 = b'O';

/// Mouse-report sub-introducer: the second byte of a CSI sequence is `M` for a
/// legacy X10/normal mouse report.
pub const CSI_MOUSE: u8 = b'M';

/// CSI final bytes lie in this inclusive range (ECMA-48).
pub const CSI_FINAL_RANGE: std::ops::RangeInclusive<u8> = 0x40..=0x7E;

/// CSI intermediate bytes lie in this inclusive range.
pub const CSI_INTERMEDIATE_RANGE: std::ops::RangeInclusive<u8> = 0x21..=0x2F;

/// CSI private-prefix bytes: one of `< = > ?`.
pub const CSI_PRIVATE_PREFIX: &[u8] = b"<=>?";

/// Maximum size of the decoder's pending-bytes buffer.
pub const MAX_INPUT_BUFFER: usize = 20;

/// Lone-Escape disambiguation timeout.
pub const ESC_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(100);
