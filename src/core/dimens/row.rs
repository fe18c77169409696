// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// The vertical index in a grid of characters, 0-based. Distinct from
/// [`crate::core::dimens::RowHeight`], which measures an extent rather than a
/// position — see [`crate::core::dimens::Size`].
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Row(pub usize);

/// Construct a [`Row`]. `row(5)` reads better at call sites than `Row(5)`.
#[must_use]
pub fn row(value: usize) -> Row { Row(value) }

impl Row {
    #[must_use]
    pub fn as_usize(self) -> usize { self.0 }

    #[must_use]
    pub fn as_u16(self) -> u16 { self.0 as u16 }

    /// A row index converts to a height one greater than itself: the number of
    /// rows needed to contain indices `0..=self`.
    #[must_use]
    pub fn convert_to_height(self) -> RowHeight { RowHeight(self.0 + 1) }
}

impl From<usize> for Row {
    fn from(value: usize) -> Self { Row(value) }
}

impl From<u16> for Row {
    fn from(value: u16) -> Self { Row(value as usize) }
}

impl Add for Row {
    type Output = Row;
    fn add(self, rhs: Row) -> Row { Row(self.0 + rhs.0) }
}

impl AddAssign for Row {
    fn add_assign(&mut self, rhs: Row) { self.0 += rhs.0; }
}

impl Sub for Row {
    type Output = Row;
    fn sub(self, rhs: Row) -> Row { Row(self.0.saturating_sub(rhs.0)) }
}

impl SubAssign for Row {
    fn sub_assign(&mut self, rhs: Row) { self.0 = self.0.saturating_sub(rhs.0); }
}

/// The height of a region, measured in rows. See [`Row`] for the corresponding
/// position type.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowHeight(pub usize);

#[must_use]
pub fn height(value: usize) -> RowHeight { RowHeight(value) }

impl RowHeight {
    #[must_use]
    pub fn as_usize(self) -> usize { self.0 }

    #[must_use]
    pub fn as_u16(self) -> u16 { self.0 as u16 }

    /// The last valid row index within an extent of this height, or `None` if
    /// the height is zero.
    #[must_use]
    pub fn convert_to_row_index(self) -> Option<Row> {
        self.0.checked_sub(1).map(Row)
    }
}

impl From<usize> for RowHeight {
    fn from(value: usize) -> Self { RowHeight(value) }
}

impl Add<RowHeight> for Row {
    type Output = Row;
    fn add(self, rhs: RowHeight) -> Row { Row(self.0 + rhs.0) }
}

impl Sub<RowHeight> for Row {
    type Output = Row;
    fn sub(self, rhs: RowHeight) -> Row { Row(self.0.saturating_sub(rhs.0)) }
}
