// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The mcedit emulation (the default): F-key driven, arrow-key movement.

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

    let editing = Mode::new(
        "mcedit",
        vec![
            ("F2", "saveContent"),
            ("F10", "quit"),
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
            ("Shift F2", "switchMode"),
            ("Shift F3", "splitV"),
            ("Shift F4", "splitH"),
            ("Shift F6", "switchBoxes"),
            ("Shift F9", "deleteBox"),
        ],
        false,
    );

    Context::new("mcedit", commands, vec![editing, super::simple_command_mode()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_management_keys_are_bound() {
        let ctx = context();
        let editing = &ctx.modes[0];
        for (key, command) in [
            ("Shift F2", "switchMode"),
            ("Shift F3", "splitV"),
            ("Shift F4", "splitH"),
            ("Shift F6", "switchBoxes"),
            ("Shift F9", "deleteBox"),
        ] {
            assert!(editing.keymap.iter().any(|&(k, c)| k == key && c == command));
            assert!(ctx.command(command).is_some());
        }
    }

    #[test]
    fn second_mode_is_the_shared_command_line() {
        let ctx = context();
        assert_eq!(ctx.modes.len(), 2);
        assert!(ctx.modes[1].command_mode);
        assert_eq!(ctx.mode_index_by_name("command"), Some(1));
    }
}
