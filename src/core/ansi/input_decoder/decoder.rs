// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The decoder state machine itself.

use super::csi::{parse_csi_body, CsiParse};
use super::events::{CsiEvent, DecoderEvent, MouseEvent};
use crate::core::ansi::constants::{
    CSI, CSI_MOUSE, CSI_UTF8_LEAD, CSI_UTF8_TAIL, ESC, MAX_INPUT_BUFFER,
};
use crate::core::ansi::key_table::{lookup, Lookup};

/// Minimum bytes needed for a legacy X10 mouse report: `CSI M Cb Cx Cy`.
const X10_MOUSE_LEN: usize = 5;

/// Converts a raw byte stream into [`DecoderEvent`]s. Owns the pending-bytes
/// buffer; callers drive it by calling [`Decoder::push_bytes`] whenever input
/// arrives and [`Decoder::on_timeout`] whenever the 100ms wait for a lone
/// Escape to resolve elapses with nothing to read.
#[derive(Debug, Default)]
pub struct Decoder {
    buffer: Vec<u8>,
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Bytes just read from the input descriptor.
    /// Always includes a [`DecoderEvent::RawBytes`] first so observers (e.g.
    /// a key-display tool) see every byte regardless of how it's eventually
    /// translated.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Vec<DecoderEvent> {
        let mut events = vec![DecoderEvent::RawBytes(bytes.to_vec())];

        self.buffer.extend_from_slice(bytes);
        if self.buffer.len() > MAX_INPUT_BUFFER {
            tracing::warn!(buffer = ?self.buffer, "decoder buffer overflow, resetting");
            self.buffer.clear();
            return events;
        }

        events.extend(self.process());
        events
    }

    /// The 100ms wait elapsed with no bytes read. If
    /// the buffer holds exactly a lone `ESC`, that's now a real Escape key
    /// press rather than the start of a sequence.
    pub fn on_timeout(&mut self) -> DecoderEvent {
        if self.buffer == [ESC] {
            self.buffer.clear();
            tracing::debug!("lone ESC resolved by timeout");
            return DecoderEvent::Keys { payload: "^[".to_owned(), is_translated: true };
        }
        DecoderEvent::Tick
    }

    /// Canonicalize the two-byte CSI introducer (`ESC '['`) and its UTF-8
    /// encoding (`0xC2 0x9B`) down to the single byte 0x9B, in place at the front of the buffer.
    fn canonicalize_csi(&mut self) {
        if self.buffer.len() >= 2 {
            let starts_esc_bracket = self.buffer[0] == ESC && self.buffer[1] == b'[';
            let starts_utf8_csi = self.buffer[0] == CSI_UTF8_LEAD && self.buffer[1] == CSI_UTF8_TAIL;
            if starts_esc_bracket || starts_utf8_csi {
                self.buffer.splice(0..2, [CSI]);
            }
        }
    }

    /// Resolve as much of the buffer as possible, looping while each pass
    /// makes progress (e.g. `"^X^C"` arriving in one read resolves to two
    /// chained key names in a single call). Returns the events produced;
    /// unresolved trailing bytes (a genuine prefix of some table entry, or an
    /// incomplete CSI sequence) are left in `self.buffer` for the next call.
    fn process(&mut self) -> Vec<DecoderEvent> {
        let mut events = Vec::new();
        let mut translated = String::new();

        loop {
            if self.buffer.is_empty() {
                break;
            }

            self.canonicalize_csi();

            match lookup(&self.buffer) {
                Lookup::Exact { name, consumed } => {
                    translated.push_str(name);
                    self.buffer.drain(..consumed);
                    // Keep looping: more bytes may already be buffered (a
                    // prefix chain like "^X^C" read in one shot).
                }
                Lookup::Prefix => break,
                Lookup::NoMatch => {
                    if self.buffer[0] == CSI {
                        match self.try_parse_csi() {
                            CsiOutcome::Event(ev) => {
                                events.push(ev);
                                // A CSI event is always flushed before any
                                // translated/raw keys that follow it in the
                                // same buffer, so flush what's accumulated so
                                // far right now.
                                if let Some(keys) = Self::flush_keys(&mut translated, &mut Vec::new()) {
                                    events.push(keys);
                                }
                            }
                            CsiOutcome::WaitForMore => break,
                        }
                    } else {
                        // A byte (or run of bytes) that will never become a
                        // table match: leftover raw input (printable text,
                        // or an unrecognized escape forwarded as-is).
                        break;
                    }
                }
            }
        }

        // Whatever never got consumed above is genuine leftover raw bytes
        // (NoMatch bytes are never cleared from the buffer above, so they're
        // still sitting there) — unless what's left is a live prefix/partial
        // CSI, which must stay buffered for the next read.
        let still_pending = self.buffer_is_pending_prefix();
        let mut leftover = if still_pending { Vec::new() } else { std::mem::take(&mut self.buffer) };

        if let Some(keys) = Self::flush_keys(&mut translated, &mut leftover) {
            events.push(keys);
        }

        events
    }

    fn buffer_is_pending_prefix(&self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        if self.buffer[0] == CSI {
            return matches!(parse_csi_body(&self.buffer[1..]), CsiParse::Incomplete);
        }
        matches!(lookup(&self.buffer), Lookup::Prefix)
    }

    fn try_parse_csi(&mut self) -> CsiOutcome {
        debug_assert_eq!(self.buffer.first(), Some(&CSI));

        if self.buffer.get(1) == Some(&CSI_MOUSE) {
            if self.buffer.len() < X10_MOUSE_LEN {
                return CsiOutcome::WaitForMore;
            }
            let raw = std::mem::take(&mut self.buffer);
            return CsiOutcome::Event(DecoderEvent::Mouse(MouseEvent { raw }));
        }

        match parse_csi_body(&self.buffer[1..]) {
            CsiParse::Complete(CsiEvent { command, params }) => {
                self.buffer.clear();
                CsiOutcome::Event(DecoderEvent::Csi(CsiEvent { command, params }))
            }
            CsiParse::Incomplete => CsiOutcome::WaitForMore,
            CsiParse::Invalid => {
                tracing::warn!(buffer = ?self.buffer, "unrecognized CSI sequence, forwarding raw");
                CsiOutcome::WaitForMore // caller's flush will forward the raw bytes
            }
        }
    }

    fn flush_keys(translated: &mut String, leftover: &mut Vec<u8>) -> Option<DecoderEvent> {
        if translated.is_empty() && leftover.is_empty() {
            return None;
        }
        let is_translated = !translated.is_empty();
        let mut payload = std::mem::take(translated);
        payload.push_str(&String::from_utf8_lossy(leftover));
        leftover.clear();
        Some(DecoderEvent::Keys { payload, is_translated })
    }
}

enum CsiOutcome {
    Event(DecoderEvent),
    WaitForMore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_escape_times_out_to_esc_key() {
        let mut d = Decoder::new();
        let events = d.push_bytes(&[ESC]);
        // Still waiting: no Keys event yet, just the raw-bytes echo.
        assert_eq!(events, vec![DecoderEvent::RawBytes(vec![ESC])]);
        let ev = d.on_timeout();
        assert_eq!(ev, DecoderEvent::Keys { payload: "^[".into(), is_translated: true });
    }

    #[test]
    fn arrow_key_up() {
        let mut d = Decoder::new();
        let events = d.push_bytes(&[ESC, b'[', b'A']);
        assert_eq!(
            events,
            vec![
                DecoderEvent::RawBytes(vec![ESC, b'[', b'A']),
                DecoderEvent::Keys { payload: "Up".into(), is_translated: true },
            ]
        );
    }

    #[test]
    fn cursor_position_report() {
        let mut d = Decoder::new();
        let bytes = [ESC, b'[', b'2', b'4', b';', b'8', b'0', b'R'];
        let events = d.push_bytes(&bytes);
        assert_eq!(
            events,
            vec![
                DecoderEvent::RawBytes(bytes.to_vec()),
                DecoderEvent::Csi(CsiEvent { command: "R".into(), params: vec![Some(24), Some(80)] }),
            ]
        );
    }

    #[test]
    fn prefix_chain_in_one_read() {
        let mut d = Decoder::new();
        let events = d.push_bytes(&[0x18, 0x03]); // ^X ^C
        assert_eq!(
            events,
            vec![
                DecoderEvent::RawBytes(vec![0x18, 0x03]),
                DecoderEvent::Keys { payload: "^X^C".into(), is_translated: true },
            ]
        );
    }

    #[test]
    fn prefix_chain_across_two_reads() {
        let mut d = Decoder::new();
        let first = d.push_bytes(&[0x18]);
        assert_eq!(
            first,
            vec![
                DecoderEvent::RawBytes(vec![0x18]),
                DecoderEvent::Keys { payload: "^X".into(), is_translated: true },
            ]
        );
        let second = d.push_bytes(&[0x03]);
        assert_eq!(
            second,
            vec![
                DecoderEvent::RawBytes(vec![0x03]),
                DecoderEvent::Keys { payload: "^C".into(), is_translated: true },
            ]
        );
    }

    #[test]
    fn printable_bytes_pass_through_untranslated() {
        let mut d = Decoder::new();
        let events = d.push_bytes(b"ab");
        assert_eq!(
            events,
            vec![
                DecoderEvent::RawBytes(b"ab".to_vec()),
                DecoderEvent::Keys { payload: "ab".into(), is_translated: false },
            ]
        );
    }

    #[test]
    fn incomplete_csi_waits_for_more_bytes() {
        let mut d = Decoder::new();
        let events = d.push_bytes(&[ESC, b'[']);
        assert_eq!(events, vec![DecoderEvent::RawBytes(vec![ESC, b'['])]);
        let events2 = d.push_bytes(&[b'A']);
        assert_eq!(
            events2,
            vec![
                DecoderEvent::RawBytes(vec![b'A']),
                DecoderEvent::Keys { payload: "Up".into(), is_translated: true },
            ]
        );
    }

    #[test]
    fn buffer_overflow_resets_without_crash() {
        let mut d = Decoder::new();
        let huge = vec![ESC; MAX_INPUT_BUFFER + 5];
        let events = d.push_bytes(&huge);
        assert_eq!(events, vec![DecoderEvent::RawBytes(huge)]);
        // Decoder is usable afterward.
        let events2 = d.push_bytes(&[ESC, b'[', b'A']);
        assert!(events2.iter().any(|e| matches!(e, DecoderEvent::Keys { .. })));
    }
}
