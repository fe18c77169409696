// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! `Context` and `Mode`: an editor personality is a command
//! table plus an ordered list of modes, each carrying its own keymap.

use std::collections::HashMap;

use super::commands::CommandFn;

/// A keymap plus a flag indicating whether it redirects input to the
/// command line.
pub struct Mode {
    pub name: &'static str,
    /// Ordered `(key sequence, command name)` pairs — order matters, the
    /// dispatcher scans top to bottom.
    pub keymap: Vec<(&'static str, &'static str)>,
    pub command_mode: bool,
}

impl Mode {
    #[must_use]
    pub fn new(name: &'static str, keymap: Vec<(&'static str, &'static str)>, command_mode: bool) -> Self {
        Self { name, keymap, command_mode }
    }
}

/// An editor personality: a command table plus an ordered list of modes
///.
pub struct Context {
    pub name: &'static str,
    pub commands: HashMap<&'static str, CommandFn>,
    pub modes: Vec<Mode>,
}

impl Context {
    #[must_use]
    pub fn new(name: &'static str, commands: HashMap<&'static str, CommandFn>, modes: Vec<Mode>) -> Self {
        Self { name, commands, modes }
    }

    #[must_use]
    pub fn command(&self, name: &str) -> Option<CommandFn> { self.commands.get(name).copied() }

    #[must_use]
    pub fn mode(&self, index: usize) -> Option<&Mode> { self.modes.get(index) }

    /// Resolve a mode by name, for `CommandOutcome::SwitchMode`. Contexts with only one mode never produce that outcome,
    /// so this is only ever consulted for multi-mode contexts like vi.
    #[must_use]
    pub fn mode_index_by_name(&self, name: &str) -> Option<usize> { self.modes.iter().position(|m| m.name == name) }
}
