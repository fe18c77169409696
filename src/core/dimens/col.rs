// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// The horizontal index in a grid of characters, 0-based. See [`super::Row`] for
/// the vertical counterpart.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Col(pub usize);

#[must_use]
pub fn col(value: usize) -> Col { Col(value) }

impl Col {
    #[must_use]
    pub fn as_usize(self) -> usize { self.0 }

    #[must_use]
    pub fn as_u16(self) -> u16 { self.0 as u16 }

    #[must_use]
    pub fn convert_to_width(self) -> ColWidth { ColWidth(self.0 + 1) }
}

impl From<usize> for Col {
    fn from(value: usize) -> Self { Col(value) }
}

impl From<u16> for Col {
    fn from(value: u16) -> Self { Col(value as usize) }
}

impl Add for Col {
    type Output = Col;
    fn add(self, rhs: Col) -> Col { Col(self.0 + rhs.0) }
}

impl AddAssign for Col {
    fn add_assign(&mut self, rhs: Col) { self.0 += rhs.0; }
}

impl Sub for Col {
    type Output = Col;
    fn sub(self, rhs: Col) -> Col { Col(self.0.saturating_sub(rhs.0)) }
}

impl SubAssign for Col {
    fn sub_assign(&mut self, rhs: Col) { self.0 = self.0.saturating_sub(rhs.0); }
}

/// The width of a region, measured in columns.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColWidth(pub usize);

#[must_use]
pub fn width(value: usize) -> ColWidth { ColWidth(value) }

impl ColWidth {
    #[must_use]
    pub fn as_usize(self) -> usize { self.0 }

    #[must_use]
    pub fn as_u16(self) -> u16 { self.0 as u16 }

    #[must_use]
    pub fn convert_to_col_index(self) -> Option<Col> {
        self.0.checked_sub(1).map(Col)
    }
}

impl From<usize> for ColWidth {
    fn from(value: usize) -> Self { ColWidth(value) }
}

impl Add<ColWidth> for Col {
    type Output = Col;
    fn add(self, rhs: ColWidth) -> Col { Col(self.0 + rhs.0) }
}

impl Sub<ColWidth> for Col {
    type Output = Col;
    fn sub(self, rhs: ColWidth) -> Col { Col(self.0.saturating_sub(rhs.0)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn col_add_sub() {
        assert_eq!(col(5) + col(3), col(8));
        assert_eq!(col(5) - col(3), col(2));
    }

    #[test]
    fn col_width_roundtrip() {
        assert_eq!(col(5).convert_to_width(), width(6));
        assert_eq!(width(6).convert_to_col_index(), Some(col(5)));
    }
}
