// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Tab-expanded line display and cursor calculus.

pub mod format;
pub mod view;

pub use format::*;
pub use view::*;
