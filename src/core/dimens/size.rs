// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

use super::{height, width, ColWidth, RowHeight};

/// The extent of a rectangular region: `width` columns by `height` rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: ColWidth,
    pub height: RowHeight,
}

#[must_use]
pub fn size(w: ColWidth, h: RowHeight) -> Size { Size { width: w, height: h } }

impl Size {
    #[must_use]
    pub const fn new(width: ColWidth, height: RowHeight) -> Self { Size { width, height } }
}

impl From<(usize, usize)> for Size {
    /// `(width, height)` tuple, matching the order fields are usually quoted in
    /// prose ("80x24").
    fn from((w, h): (usize, usize)) -> Self { size(width(w), height(h)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_from_tuple() {
        let s: Size = (80, 24).into();
        assert_eq!(s.width, width(80));
        assert_eq!(s.height, height(24));
    }
}
