// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The emacs emulation.

use std::collections::HashMap;

use crate::context::commands::{self, builtin};
use crate::context::context::{Context, Mode};

#[must_use]
pub fn context() -> Context {
    let mut commands = HashMap::new();
    for name in [
        "leftChar", "rightChar", "upLine", "downLine", "upPage", "downPage", "startOfLine",
        "endOfLine", "backSpaceChar", "deleteChar", "splitLine", "executeLine", "saveContent",
        "splitH", "splitV", "deleteBox", "switchBoxes", "switchMode", "nop",
    ] {
        commands.insert(name, builtin(name).expect("builtin name is valid"));
    }
    commands.insert("save-buffers-kill-emacs", commands::quit);

    let editing = Mode::new(
        "emacs",
        vec![
            ("^X^C", "save-buffers-kill-emacs"),
            ("^X^S", "saveContent"),
            ("^X2", "splitH"),
            ("^X3", "splitV"),
            ("^X0", "deleteBox"),
            ("^Xo", "switchBoxes"),
            ("^[x", "switchMode"),
            ("^F", "rightChar"),
            ("^B", "leftChar"),
            ("^N", "downLine"),
            ("^P", "upLine"),
            ("^A", "startOfLine"),
            ("^E", "endOfLine"),
            ("^H", "backSpaceChar"),
            ("Del", "backSpaceChar"),
            ("BS", "backSpaceChar"),
            ("^D", "deleteChar"),
            ("^V", "downPage"),
            ("Return", "splitLine"),
            ("Right", "rightChar"),
            ("Left", "leftChar"),
            ("Down", "downLine"),
            ("Up", "upLine"),
            ("PgUp", "upPage"),
            ("PgDn", "downPage"),
            ("Home", "startOfLine"),
            ("End", "endOfLine"),
        ],
        false,
    );

    let command = Mode::new(
        "command",
        vec![
            ("Del", "backSpaceChar"),
            ("^D", "deleteChar"),
            ("Down", "downLine"),
            ("^N", "downLine"),
            ("End", "endOfLine"),
            ("^E", "endOfLine"),
            ("Home", "startOfLine"),
            ("^A", "startOfLine"),
            ("Left", "leftChar"),
            ("^B", "leftChar"),
            ("Up", "upLine"),
            ("^P", "upLine"),
            ("Return", "executeLine"),
            ("^[x", "switchMode"),
        ],
        true,
    );

    Context::new("emacs", commands, vec![editing, command])
}
