// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The cooperative main loop: one `mio::Poll` covering stdin
//! and the SIGWINCH signal source, woken at least every 100ms so a lone
//! Escape can resolve on timeout. All state mutation happens here, after a
//! wake-up; nothing in this crate blocks anywhere else.
//!
//! Single-poll-loop design, generalized from an async/tokio driver down to
//! the plain `mio` + `signal-hook-mio` pairing.

use std::io::Write;
use std::os::fd::AsRawFd;
use std::time::Duration;

use mio::unix::SourceFd;
use mio::{Events, Interest, Poll, Token};
use signal_hook::consts::SIGWINCH;
use signal_hook_mio::v1_0::Signals;

use super::editor::Editor;
use crate::core::ansi::input_decoder::resize::SIZE_PROBE_CHORD;
use crate::core::ansi::input_decoder::Decoder;
use crate::core::error::{BoxtermError, BoxtermResult};
use crate::render::Renderer;

const STDIN_TOKEN: Token = Token(0);
const SIGNAL_TOKEN: Token = Token(1);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Drive `editor` to completion against stdin (already in raw mode — setup
/// and teardown belong to the caller) and `renderer`'s output stream.
pub fn run<W: Write>(editor: &mut Editor, renderer: &mut Renderer<W>) -> BoxtermResult<()> {
    let mut poll = Poll::new()?;
    let mut events = Events::with_capacity(16);
    let mut decoder = Decoder::new();

    let mut signals = Signals::new([SIGWINCH]).map_err(BoxtermError::Io)?;
    poll.registry().register(&mut signals, SIGNAL_TOKEN, Interest::READABLE)?;

    let stdin_fd = rustix::stdio::stdin().as_raw_fd();
    poll.registry().register(&mut SourceFd(&stdin_fd), STDIN_TOKEN, Interest::READABLE)?;

    editor.tree.calc_boxes();
    renderer.draw_boxes(&editor.tree)?;
    renderer.position_cursor(&editor.tree)?;

    while editor.still_running {
        events.clear();
        poll.poll(&mut events, Some(POLL_TIMEOUT))?;

        if events.is_empty() {
            let outcome = editor.handle_event(decoder.on_timeout())?;
            if outcome.quit {
                editor.still_running = false;
            }
            if outcome.send_probe {
                renderer.write_raw(SIZE_PROBE_CHORD)?;
            }
        } else {
            for event in events.iter() {
                match event.token() {
                    SIGNAL_TOKEN => {
                        for _ in signals.pending() {
                            editor.request_resize_probe();
                        }
                    }
                    STDIN_TOKEN => read_stdin(editor, &mut decoder, renderer)?,
                    _ => {}
                }
            }
        }

        if editor.still_running {
            editor.tree.calc_boxes();
            renderer.draw_boxes(&editor.tree)?;
            renderer.position_cursor(&editor.tree)?;
        }
    }

    Ok(())
}

fn read_stdin<W: Write>(editor: &mut Editor, decoder: &mut Decoder, renderer: &mut Renderer<W>) -> BoxtermResult<()> {
    let mut buf = [0u8; 256];
    match rustix::io::read(rustix::stdio::stdin(), &mut buf) {
        Ok(0) => editor.still_running = false,
        Ok(n) => {
            for decoder_event in decoder.push_bytes(&buf[..n]) {
                let outcome = editor.handle_event(decoder_event)?;
                if outcome.quit {
                    editor.still_running = false;
                }
                if outcome.send_probe {
                    renderer.write_raw(SIZE_PROBE_CHORD)?;
                }
                if let Some(diagnostic) = outcome.diagnostic {
                    tracing::warn!(%diagnostic, "command diagnostic");
                }
            }
        }
        Err(rustix::io::Errno::WOULDBLOCK) => {}
        Err(errno) => return Err(BoxtermError::Io(errno.into())),
    }
    Ok(())
}
