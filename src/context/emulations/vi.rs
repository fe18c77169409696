// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The vi emulation: a normal mode (movement) and a command-line mode
//! (`:`-prefixed ex commands, modeled as a `commandMode` mode).

use std::collections::HashMap;

use crate::context::commands::builtin;
use crate::context::context::{Context, Mode};

#[must_use]
pub fn context() -> Context {
    let mut commands = HashMap::new();
    for name in [
        "leftChar", "rightChar", "upLine", "downLine", "upPage", "downPage", "startOfLine",
        "endOfLine", "backSpaceChar", "deleteChar", "splitLine", "executeLine", "saveContent",
        "splitH", "splitV", "deleteBox", "switchBoxes", "quit", "nop",
        "enterCommandLine", "leaveCommandLine",
    ] {
        commands.insert(name, builtin(name).expect("builtin name is valid"));
    }

    let normal = Mode::new(
        "normal",
        vec![
            ("h", "leftChar"),
            ("l", "rightChar"),
            ("k", "upLine"),
            ("j", "downLine"),
            ("^F", "downPage"),
            ("^B", "upPage"),
            ("0", "startOfLine"),
            ("$", "endOfLine"),
            ("x", "deleteChar"),
            ("Left", "leftChar"),
            ("Right", "rightChar"),
            ("Up", "upLine"),
            ("Down", "downLine"),
            ("PgUp", "upPage"),
            ("PgDn", "downPage"),
            ("Home", "startOfLine"),
            ("End", "endOfLine"),
            ("^Ws", "splitH"),
            ("^Wv", "splitV"),
            ("^Wc", "deleteBox"),
            ("^Ww", "switchBoxes"),
            (":", "enterCommandLine"),
        ],
        false,
    );

    let cmdline = Mode::new(
        "cmdline",
        vec![("Return", "executeLine"), ("BS", "backSpaceChar"), ("^[", "leaveCommandLine")],
        true,
    );

    Context::new("vi", commands, vec![normal, cmdline])
}
