// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The more emulation: `less`'s simpler ancestor — forward paging and quit
//! only, no backward movement.

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
        "more",
        vec![
            ("q", "quit"),
            ("j", "downLine"),
            ("Return", "downLine"),
            ("f", "downPage"),
            (" ", "downPage"),
            ("^F", "downPage"),
            ("b", "upPage"),
            ("^B", "upPage"),
            ("k", "upLine"),
            ("Down", "downLine"),
            ("PgDn", "downPage"),
        ],
        false,
    );

    Context::new("more", commands, vec![paging, super::simple_command_mode()])
}
