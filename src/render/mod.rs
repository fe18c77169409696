// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Terminal output: ANSI escapes and border drawing.

pub mod palette;
pub mod renderer;

pub use palette::{Palette, PaletteKind};
pub use renderer::Renderer;
