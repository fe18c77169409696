// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The joe emulation — this crate's namesake editor: `^K` prefix commands
//! for window/file operations, `^[x` ("Esc x") to enter command mode.
//! There's no plain exit key bound in the real joe either — `^Kx` (abort,
//! our `deleteBox`) is how you leave a window, same as upstream.

use std::collections::HashMap;

use crate::context::commands::builtin;
use crate::context::context::{Context, Mode};

#[must_use]
pub fn context() -> Context {
    let mut commands = HashMap::new();
    for name in [
        "leftChar", "rightChar", "upLine", "downLine", "upPage", "downPage", "startOfLine",
        "endOfLine", "backSpaceChar", "deleteChar", "splitLine", "executeLine", "saveContent",
        "splitH", "splitV", "deleteBox", "switchBoxes", "switchMode", "quit", "nop",
    ] {
        commands.insert(name, builtin(name).expect("builtin name is valid"));
    }
    // No key binds `quit` directly here — `deleteBox` on the last window
    // serves that role, same as the real joe's commented-out F10 binding —
    // but the name stays reachable via `executeLine`, like every other
    // context's generic command set.

    let editing = Mode::new(
        "joe",
        vec![
            ("^Kd", "saveContent"),
            ("^K^D", "saveContent"),
            ("^Ko", "splitH"),
            ("^K^O", "splitH"),
            ("^Kn", "switchBoxes"),
            ("^K^N", "switchBoxes"),
            ("^Kx", "deleteBox"),
            ("^K^X", "deleteBox"),
            ("^[x", "switchMode"),
            ("^[^X", "switchMode"),
            ("^B", "leftChar"),
            ("^F", "rightChar"),
            ("^P", "upLine"),
            ("^N", "downLine"),
            ("^A", "startOfLine"),
            ("^E", "endOfLine"),
            ("^D", "deleteChar"),
            ("^V", "downPage"),
            ("^U", "upPage"),
            ("BS", "backSpaceChar"),
            ("Left", "leftChar"),
            ("Right", "rightChar"),
            ("Up", "upLine"),
            ("Down", "downLine"),
            ("PgUp", "upPage"),
            ("PgDn", "downPage"),
            ("Home", "startOfLine"),
            ("End", "endOfLine"),
            ("Return", "splitLine"),
        ],
        false,
    );

    let command = Mode::new(
        "command",
        vec![
            ("BS", "backSpaceChar"),
            ("^D", "deleteChar"),
            ("Down", "downLine"),
            ("^N", "downLine"),
            ("^E", "endOfLine"),
            ("^A", "startOfLine"),
            ("Left", "leftChar"),
            ("^B", "leftChar"),
            ("Right", "rightChar"),
            ("^F", "rightChar"),
            ("^[x", "switchMode"),
            ("^[^X", "switchMode"),
            ("Up", "upLine"),
            ("^P", "upLine"),
            ("Return", "executeLine"),
        ],
        true,
    );

    Context::new("joe", commands, vec![editing, command])
}
