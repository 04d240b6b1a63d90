// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index spaces: the shape of the collection being navigated.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

/// Error returned when an index space is structurally invalid.
///
/// This is the only hard error in the crate. Everything else (out-of-bounds
/// positions, missing remap entries, scans without a hit) degrades to `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// A list was given a negative length.
    #[error("list length must not be negative, got {0}")]
    NegativeLength(i64),
    /// A plane row was given a negative length.
    #[error("row {row} of the plane has negative length {len}")]
    NegativeRowLength {
        /// Row whose length was rejected.
        row: usize,
        /// The offending length.
        len: i64,
    },
}

/// The shape of a navigable collection.
///
/// A space enumerates its valid positions in a single traversal order. All
/// directional operations ("next", "previous", "first", "last") are defined in
/// terms of that order, which lets scanners and state machines stay generic over
/// lists and planes.
pub trait Space {
    /// Position type identifying one slot of the space.
    type Position: Copy + Eq + Hash + Debug;

    /// Number of valid positions.
    fn len(&self) -> usize;

    /// Returns `true` if the space has no valid positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `position` is within the current bounds.
    fn contains(&self, position: Self::Position) -> bool;

    /// Position at `ordinal` in traversal order, or `None` past the end.
    fn position_at(&self, ordinal: usize) -> Option<Self::Position>;

    /// Number of valid positions strictly before `position` in traversal order.
    ///
    /// This is defined for out-of-range positions as well, which is what lets a
    /// scan start "strictly past" a position that no longer exists.
    fn preceding(&self, position: Self::Position) -> usize;

    /// Ordinal of an in-bounds position in traversal order.
    fn ordinal_of(&self, position: Self::Position) -> Option<usize> {
        self.contains(position).then(|| self.preceding(position))
    }

    /// First position in traversal order.
    fn first(&self) -> Option<Self::Position> {
        self.position_at(0)
    }

    /// Last position in traversal order.
    fn last(&self) -> Option<Self::Position> {
        self.len().checked_sub(1).and_then(|i| self.position_at(i))
    }

    /// In-bounds position immediately after `position` in traversal order.
    ///
    /// Scans walk the space with this, so implementations should step directly
    /// rather than round-tripping through ordinals.
    fn after(&self, position: Self::Position) -> Option<Self::Position> {
        self.position_at(self.preceding(position) + usize::from(self.contains(position)))
    }

    /// In-bounds position immediately before `position` in traversal order.
    fn before(&self, position: Self::Position) -> Option<Self::Position> {
        self.preceding(position)
            .checked_sub(1)
            .and_then(|i| self.position_at(i))
    }
}

/// A flat list of `len` items, indexed `0..len`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListSpace {
    len: usize,
}

impl ListSpace {
    /// Creates a list space of `len` items.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Creates a list space from a signed length, rejecting negative values.
    pub fn try_from_len(len: i64) -> Result<Self, SpaceError> {
        usize::try_from(len)
            .map(Self::new)
            .map_err(|_| SpaceError::NegativeLength(len))
    }
}

impl Space for ListSpace {
    type Position = usize;

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, position: usize) -> bool {
        position < self.len
    }

    fn position_at(&self, ordinal: usize) -> Option<usize> {
        (ordinal < self.len).then_some(ordinal)
    }

    fn preceding(&self, position: usize) -> usize {
        position.min(self.len)
    }

    fn after(&self, position: usize) -> Option<usize> {
        position.checked_add(1).filter(|&next| next < self.len)
    }

    fn before(&self, position: usize) -> Option<usize> {
        position.min(self.len).checked_sub(1)
    }
}

/// A `(row, column)` slot in a [`PlaneSpace`].
///
/// The derived ordering is row-major, which matches the default traversal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanePosition {
    /// Row index.
    pub row: usize,
    /// Column index within the row.
    pub column: usize,
}

impl PlanePosition {
    /// Creates a plane position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Order in which a [`PlaneSpace`] enumerates its positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Row 0 left to right, then row 1, and so on.
    #[default]
    RowMajor,
    /// Column 0 top to bottom, then column 1, and so on.
    ///
    /// Rows too short to have a given column are skipped in that column.
    ColumnMajor,
}

/// A plane of rows, each of which may have a different length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaneSpace {
    rows: Vec<usize>,
    total: usize,
    traversal: Traversal,
}

impl PlaneSpace {
    /// Creates a row-major plane from per-row lengths.
    pub fn new(row_lengths: impl IntoIterator<Item = usize>) -> Self {
        let rows: Vec<usize> = row_lengths.into_iter().collect();
        let total = rows.iter().sum();
        Self {
            rows,
            total,
            traversal: Traversal::RowMajor,
        }
    }

    /// Creates a plane from signed per-row lengths, rejecting negative rows.
    pub fn try_from_row_lengths(
        row_lengths: impl IntoIterator<Item = i64>,
    ) -> Result<Self, SpaceError> {
        let rows = row_lengths
            .into_iter()
            .enumerate()
            .map(|(row, len)| {
                usize::try_from(len).map_err(|_| SpaceError::NegativeRowLength { row, len })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rows))
    }

    /// Returns this plane with a different traversal order.
    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Traversal order used by directional operations.
    #[must_use]
    pub const fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Per-row lengths.
    #[must_use]
    pub fn row_lengths(&self) -> &[usize] {
        &self.rows
    }

    /// Length of `row`, or `0` if the row does not exist.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).copied().unwrap_or(0)
    }

    /// Number of rows long enough to have `column`.
    #[must_use]
    pub fn column_len(&self, column: usize) -> usize {
        self.rows.iter().filter(|&&len| len > column).count()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().copied().max().unwrap_or(0)
    }
}

impl Space for PlaneSpace {
    type Position = PlanePosition;

    fn len(&self) -> usize {
        self.total
    }

    fn contains(&self, position: PlanePosition) -> bool {
        position.column < self.row_len(position.row)
    }

    fn position_at(&self, ordinal: usize) -> Option<PlanePosition> {
        if ordinal >= self.total {
            return None;
        }
        let mut remaining = ordinal;
        match self.traversal {
            Traversal::RowMajor => {
                for (row, &len) in self.rows.iter().enumerate() {
                    if remaining < len {
                        return Some(PlanePosition::new(row, remaining));
                    }
                    remaining -= len;
                }
            }
            Traversal::ColumnMajor => {
                for column in 0..self.column_count() {
                    let height = self.column_len(column);
                    if remaining < height {
                        return self
                            .rows
                            .iter()
                            .enumerate()
                            .filter(|&(_, &len)| len > column)
                            .nth(remaining)
                            .map(|(row, _)| PlanePosition::new(row, column));
                    }
                    remaining -= height;
                }
            }
        }
        None
    }

    fn preceding(&self, position: PlanePosition) -> usize {
        let PlanePosition { row, column } = position;
        let rows_before = &self.rows[..row.min(self.rows.len())];
        match self.traversal {
            Traversal::RowMajor => {
                let full: usize = rows_before.iter().sum();
                full + self.rows.get(row).map_or(0, |&len| column.min(len))
            }
            Traversal::ColumnMajor => {
                let earlier_columns: usize = self.rows.iter().map(|&len| len.min(column)).sum();
                earlier_columns + rows_before.iter().filter(|&&len| len > column).count()
            }
        }
    }

    fn after(&self, position: PlanePosition) -> Option<PlanePosition> {
        if !self.contains(position) {
            return self.position_at(self.preceding(position));
        }
        let PlanePosition { row, column } = position;
        match self.traversal {
            Traversal::RowMajor => {
                if column + 1 < self.rows[row] {
                    return Some(PlanePosition::new(row, column + 1));
                }
                (row + 1..self.rows.len())
                    .find(|&r| self.rows[r] > 0)
                    .map(|r| PlanePosition::new(r, 0))
            }
            Traversal::ColumnMajor => (row + 1..self.rows.len())
                .find(|&r| self.rows[r] > column)
                .map(|r| PlanePosition::new(r, column))
                .or_else(|| {
                    let next = column + 1;
                    self.rows
                        .iter()
                        .position(|&len| len > next)
                        .map(|r| PlanePosition::new(r, next))
                }),
        }
    }

    fn before(&self, position: PlanePosition) -> Option<PlanePosition> {
        if !self.contains(position) {
            return self
                .preceding(position)
                .checked_sub(1)
                .and_then(|i| self.position_at(i));
        }
        let PlanePosition { row, column } = position;
        match self.traversal {
            Traversal::RowMajor => {
                if column > 0 {
                    return Some(PlanePosition::new(row, column - 1));
                }
                (0..row)
                    .rev()
                    .find(|&r| self.rows[r] > 0)
                    .map(|r| PlanePosition::new(r, self.rows[r] - 1))
            }
            Traversal::ColumnMajor => (0..row)
                .rev()
                .find(|&r| self.rows[r] > column)
                .map(|r| PlanePosition::new(r, column))
                .or_else(|| {
                    let previous = column.checked_sub(1)?;
                    self.rows
                        .iter()
                        .rposition(|&len| len > previous)
                        .map(|r| PlanePosition::new(r, previous))
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn list_bounds_and_preceding() {
        let space = ListSpace::new(4);
        assert!(space.contains(3));
        assert!(!space.contains(4));
        assert_eq!(space.first(), Some(0));
        assert_eq!(space.last(), Some(3));
        assert_eq!(space.preceding(2), 2);
        // Out-of-range positions sit after every valid one.
        assert_eq!(space.preceding(10), 4);
        assert_eq!(ListSpace::new(0).last(), None);
    }

    #[test]
    fn negative_lengths_are_rejected() {
        assert_eq!(ListSpace::try_from_len(-1), Err(SpaceError::NegativeLength(-1)));
        assert_eq!(ListSpace::try_from_len(3), Ok(ListSpace::new(3)));
        assert_eq!(
            PlaneSpace::try_from_row_lengths([2, -4, 1]),
            Err(SpaceError::NegativeRowLength { row: 1, len: -4 })
        );
    }

    #[test]
    fn row_major_round_trips_ordinals() {
        let space = PlaneSpace::new([2, 0, 3]);
        assert_eq!(space.len(), 5);
        let order: Vec<_> = (0..space.len()).filter_map(|i| space.position_at(i)).collect();
        assert_eq!(
            order,
            vec![
                PlanePosition::new(0, 0),
                PlanePosition::new(0, 1),
                PlanePosition::new(2, 0),
                PlanePosition::new(2, 1),
                PlanePosition::new(2, 2),
            ]
        );
        for (i, p) in order.iter().enumerate() {
            assert_eq!(space.ordinal_of(*p), Some(i));
        }
    }

    #[test]
    fn column_major_skips_short_rows() {
        let space = PlaneSpace::new([3, 1, 2]).with_traversal(Traversal::ColumnMajor);
        let order: Vec<_> = (0..space.len()).filter_map(|i| space.position_at(i)).collect();
        assert_eq!(
            order,
            vec![
                PlanePosition::new(0, 0),
                PlanePosition::new(1, 0),
                PlanePosition::new(2, 0),
                PlanePosition::new(0, 1),
                PlanePosition::new(2, 1),
                PlanePosition::new(0, 2),
            ]
        );
        for (i, p) in order.iter().enumerate() {
            assert_eq!(space.ordinal_of(*p), Some(i));
        }
    }

    #[test]
    fn stepping_agrees_with_ordinals() {
        for traversal in [Traversal::RowMajor, Traversal::ColumnMajor] {
            let space = PlaneSpace::new([3, 0, 1, 2]).with_traversal(traversal);
            let order: Vec<_> = (0..space.len()).filter_map(|i| space.position_at(i)).collect();
            for pair in order.windows(2) {
                assert_eq!(space.after(pair[0]), Some(pair[1]), "{traversal:?}");
                assert_eq!(space.before(pair[1]), Some(pair[0]), "{traversal:?}");
            }
            assert_eq!(space.after(order[order.len() - 1]), None, "{traversal:?}");
            assert_eq!(space.before(order[0]), None, "{traversal:?}");
        }
        let list = ListSpace::new(3);
        assert_eq!(list.after(1), Some(2));
        assert_eq!(list.after(2), None);
        assert_eq!(list.before(0), None);
        assert_eq!(list.before(7), Some(2));
    }

    #[test]
    fn out_of_range_plane_positions_have_a_place_in_order() {
        let space = PlaneSpace::new([2, 2]);
        // Past the end of row 0: after both of its cells, before row 1.
        assert_eq!(space.preceding(PlanePosition::new(0, 5)), 2);
        // Past the last row: after everything.
        assert_eq!(space.preceding(PlanePosition::new(7, 0)), 4);
        assert_eq!(space.ordinal_of(PlanePosition::new(0, 5)), None);
    }
}
