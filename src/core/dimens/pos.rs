// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

use super::{col, row, Col, Row};

/// A screen position: a `(row, col)` pair, 0-based, top-left origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: Row,
    pub col: Col,
}

#[must_use]
pub fn pos(r: Row, c: Col) -> Pos { Pos { row: r, col: c } }

impl Pos {
    #[must_use]
    pub const fn new(row: Row, col: Col) -> Self { Pos { row, col } }

    #[must_use]
    pub fn origin() -> Self { pos(row(0), col(0)) }
}

impl From<(usize, usize)> for Pos {
    fn from((r, c): (usize, usize)) -> Self { pos(row(r), col(c)) }
}
