// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The less emulation: a read-only pager — movement and quit only.

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

    let paging = Mode::new(
        "less",
        vec![
            ("q", "quit"),
            ("j", "downLine"),
            ("k", "upLine"),
            ("Down", "downLine"),
            ("Up", "upLine"),
            ("Left", "leftChar"),
            ("Right", "rightChar"),
            ("PgDn", "downPage"),
            ("PgUp", "upPage"),
            ("f", "downPage"),
            (" ", "downPage"),
            ("^F", "downPage"),
            ("b", "upPage"),
            ("^B", "upPage"),
            ("Home", "startOfLine"),
            ("End", "endOfLine"),
            ("Return", "downLine"),
        ],
        false,
    );

    Context::new("less", commands, vec![paging, super::simple_command_mode()])
}
