// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The nano emulation: arrow-key movement, `^O` write-out, `^X` exit.

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
    ] {
        commands.insert(name, builtin(name).expect("builtin name is valid"));
    }

    let editing = Mode::new(
        "nano",
        vec![
            ("^X", "quit"),
            ("^O", "saveContent"),
            ("^A", "startOfLine"),
            ("^E", "endOfLine"),
            ("^K", "deleteChar"),
            ("Left", "leftChar"),
            ("Right", "rightChar"),
            ("Up", "upLine"),
            ("Down", "downLine"),
            ("PgUp", "upPage"),
            ("PgDn", "downPage"),
            ("Home", "startOfLine"),
            ("End", "endOfLine"),
            ("BS", "backSpaceChar"),
            ("Del", "deleteChar"),
            ("Return", "splitLine"),
        ],
        false,
    );

    Context::new("nano", commands, vec![editing])
}
