// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Resize coordination: SIGWINCH sets a sticky flag; the next
//! decoder iteration sends the cursor-position probe; the terminal's reply
//! (`CSI <rows>;<cols> R`) is recognized by the consumer and turned into a
//! new root-box geometry.
//!
//! The flag itself is a plain `bool` here, not an atomic: only the
//! signal-delivery flag needs to be signal-safe, and that one lives one
//! level up, in the process wiring that owns the `signal_hook` registration
//! (see `src/editor/main_loop.rs`); this type just represents "a resize was
//! requested, send the probe."

/// The six-byte chord that asks the terminal to report its size: save cursor,
/// jump to (999, 999) (clamped to the bottom-right corner by every real
/// terminal), request cursor position, restore cursor.
pub const SIZE_PROBE_CHORD: &[u8] = b"\x1b[s\x1b[999C\x1b[999B\x1b[6n\x1b[u";

/// Tracks whether a size probe is owed to the terminal, and validates the
/// reply once it arrives.
#[derive(Debug, Default)]
pub struct ResizeCoordinator {
    probe_pending: bool,
}

impl ResizeCoordinator {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Called when a resize notification (SIGWINCH) has been observed.
    pub fn request_probe(&mut self) { self.probe_pending = true; }

    /// True if a probe is owed; clears the flag (the caller is expected to
    /// actually send [`SIZE_PROBE_CHORD`] immediately after this returns
    /// true).
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.probe_pending)
    }

    /// Decide whether a decoded CSI event is the cursor-position report this
    /// coordinator is waiting for, as opposed to an unrelated CSI ending in
    /// the same final byte `R` (there is no such VT100 key today, but the
    /// disambiguation rule is kept general: exactly two parameters, each
    /// greater than 8).
    #[must_use]
    pub fn accept_as_size_report(command: &str, params: &[Option<i64>]) -> Option<(u16, u16)> {
        if command != "R" || params.len() != 2 {
            return None;
        }
        let rows = params[0]?;
        let cols = params[1]?;
        if rows > 8 && cols > 8 {
            Some((rows as u16, cols as u16))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_flag_round_trips() {
        let mut rc = ResizeCoordinator::new();
        assert!(!rc.take_pending());
        rc.request_probe();
        assert!(rc.take_pending());
        assert!(!rc.take_pending());
    }

    #[test]
    fn accepts_24x80_report() {
        assert_eq!(
            ResizeCoordinator::accept_as_size_report("R", &[Some(24), Some(80)]),
            Some((24, 80))
        );
    }

    #[test]
    fn rejects_small_params_as_unrelated_key() {
        assert_eq!(ResizeCoordinator::accept_as_size_report("R", &[Some(1), Some(5)]), None);
    }

    #[test]
    fn rejects_wrong_param_count() {
        assert_eq!(ResizeCoordinator::accept_as_size_report("R", &[Some(24)]), None);
    }
}
