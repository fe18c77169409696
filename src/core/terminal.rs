// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Raw-mode terminal setup: a `cfmakeraw()`-equivalent bit manipulation over
//! rustix's type-safe termios API, wrapped in an RAII guard that restores
//! the original settings on drop.

use rustix::io::OFlags;
use rustix::stdio::stdin;
use rustix::termios::{
    self, ControlModes, InputModes, LocalModes, OptionalActions, OutputModes, SpecialCodeIndex, Termios,
};

use super::error::{BoxtermError, BoxtermResult};

fn raw_mode_error(e: rustix::io::Errno) -> BoxtermError {
    BoxtermError::RawModeUnsupported(e.to_string())
}

/// Puts stdin into raw, non-blocking mode on construction; restores the
/// original termios and descriptor flags on drop.
pub struct RawMode {
    original_termios: Termios,
    original_flags: OFlags,
}

impl RawMode {
    pub fn enable() -> BoxtermResult<Self> {
        let fd = stdin();

        let original_termios = termios::tcgetattr(fd).map_err(raw_mode_error)?;
        let mut raw = original_termios.clone();

        raw.input_modes.remove(
            InputModes::IGNBRK
                | InputModes::BRKINT
                | InputModes::PARMRK
                | InputModes::ISTRIP
                | InputModes::INLCR
                | InputModes::IGNCR
                | InputModes::ICRNL
                | InputModes::IXON,
        );
        raw.output_modes.remove(OutputModes::OPOST);
        raw.local_modes.remove(
            LocalModes::ECHO | LocalModes::ECHONL | LocalModes::ICANON | LocalModes::ISIG | LocalModes::IEXTEN,
        );
        raw.control_modes.remove(ControlModes::CSIZE | ControlModes::PARENB);
        raw.control_modes.insert(ControlModes::CS8);
        raw.special_codes[SpecialCodeIndex::VMIN] = 1;
        raw.special_codes[SpecialCodeIndex::VTIME] = 0;

        termios::tcsetattr(fd, OptionalActions::Now, &raw).map_err(raw_mode_error)?;

        let original_flags = rustix::io::fcntl_getfl(fd).map_err(raw_mode_error)?;
        rustix::io::fcntl_setfl(fd, original_flags | OFlags::NONBLOCK).map_err(raw_mode_error)?;

        Ok(Self { original_termios, original_flags })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let fd = stdin();
        let _ = termios::tcsetattr(fd, OptionalActions::Now, &self.original_termios);
        let _ = rustix::io::fcntl_setfl(fd, self.original_flags);
    }
}
