// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The seven built-in editor personalities.

pub mod emacs;
pub mod joe;
pub mod less;
pub mod mcedit;
pub mod more;
pub mod nano;
pub mod vi;

use strum_macros::{Display, EnumIter, EnumString};

use super::context::{Context, Mode};

/// The command-line mode shared by `less`, `more`, and `mcedit` — the C
/// source's `simpleCommandKeys`, reachable there (and here) only via
/// `switchMode`.
pub(super) fn simple_command_mode() -> Mode {
    Mode::new(
        "command",
        vec![
            ("BS", "backSpaceChar"),
            ("Del", "deleteChar"),
            ("Down", "downLine"),
            ("End", "endOfLine"),
            ("F10", "quit"),
            ("Home", "startOfLine"),
            ("Left", "leftChar"),
            ("Return", "executeLine"),
            ("Right", "rightChar"),
            ("Shift F2", "switchMode"),
            ("Up", "upLine"),
        ],
        true,
    )
}

/// The seven built-in personality names, doubling as the `-m/--mode` CLI
/// values clap validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum EmulationMode {
    Emacs,
    Joe,
    Less,
    Mcedit,
    More,
    Nano,
    Vi,
}

impl EmulationMode {
    #[must_use]
    pub fn context(self) -> Context {
        match self {
            Self::Emacs => emacs::context(),
            Self::Joe => joe::context(),
            Self::Less => less::context(),
            Self::Mcedit => mcedit::context(),
            Self::More => more::context(),
            Self::Nano => nano::context(),
            Self::Vi => vi::context(),
        }
    }
}

/// Resolve a `-m/--mode` CLI value to its [`Context`]. `mcedit` is the
/// default.
#[must_use]
pub fn by_name(name: &str) -> Option<Context> {
    name.parse::<EmulationMode>().ok().map(EmulationMode::context)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_variant_round_trips_through_its_lowercase_name() {
        for mode in EmulationMode::iter() {
            let name = mode.to_string();
            assert_eq!(name, name.to_lowercase());
            assert_eq!(by_name(&name).map(|ctx| ctx.name.to_owned()), Some(name));
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(by_name("notareal mode").is_none());
    }
}
