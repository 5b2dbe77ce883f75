//! Cell identifiers and covering-set iteration
//!
//! A cell is the square `[cx * size, (cx + 1) * size) x [cy * size, (cy + 1) * size)`
//! of world space. World coordinates map to cells by multiplying with the
//! reciprocal cell size and flooring, so negative coordinates land in negative
//! cells and cell 0 starts exactly at the origin.

use crate::bounds::Extent;

/// Integer grid coordinate of one cell
///
/// Used as the bucket key. Hashing is structural, so two different
/// coordinate pairs never share a bucket. Treat the values as opaque: pass
/// them back to [`GridIndex::get`](crate::GridIndex::get) and
/// [`GridIndex::clear`](crate::GridIndex::clear) rather than deriving them by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl CellId {
    /// Creates a cell identifier from its column and row
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for CellId {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Inclusive rectangle of cells, iterated row by row
///
/// Produced by [`GridIndex::covering_set`](crate::GridIndex::covering_set).
///
/// # Example
/// ```
/// use gridindex::{Bounds, CellId, GridIndex};
///
/// let grid: GridIndex<u32> = GridIndex::new(); // 32-unit cells
/// let cells: Vec<CellId> = grid.covering_set(&Bounds::new(0.0, 0.0, 10.0, 10.0)).collect();
/// assert_eq!(cells, vec![
///     CellId::new(-1, -1), CellId::new(0, -1),
///     CellId::new(-1, 0), CellId::new(0, 0),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellRange {
    min: CellId,
    max: CellId,
    /// Next cell to yield, `None` once exhausted
    cursor: Option<CellId>,
}

impl CellRange {
    /// Creates the range `min..=max` on both axes
    ///
    /// An inverted range (`min` past `max` on either axis) is empty.
    pub const fn new(min: CellId, max: CellId) -> Self {
        let cursor = if min.x > max.x || min.y > max.y {
            None
        } else {
            Some(min)
        };
        Self { min, max, cursor }
    }

    /// Cells touched by `bounds`, inflated by `overflow` cells on every side
    pub(crate) fn covering<E: Extent + ?Sized>(
        bounds: &E,
        inv_cell_size: f64,
        overflow: u32,
    ) -> Self {
        let margin = i64::from(overflow);
        let min = CellId::new(
            to_cell(bounds.min_x(), inv_cell_size).saturating_sub(margin),
            to_cell(bounds.min_y(), inv_cell_size).saturating_sub(margin),
        );
        let max = CellId::new(
            to_cell(bounds.max_x(), inv_cell_size).saturating_add(margin),
            to_cell(bounds.max_y(), inv_cell_size).saturating_add(margin),
        );
        Self::new(min, max)
    }

    /// Lowest corner of the range
    pub const fn min_cell(&self) -> CellId {
        self.min
    }

    /// Highest corner of the range
    pub const fn max_cell(&self) -> CellId {
        self.max
    }

    /// Number of cells in the whole range, ignoring iteration progress
    pub fn cell_count(&self) -> usize {
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return 0;
        }
        let columns = i128::from(self.max.x) - i128::from(self.min.x) + 1;
        let rows = i128::from(self.max.y) - i128::from(self.min.y) + 1;
        usize::try_from(columns.saturating_mul(rows)).unwrap_or(usize::MAX)
    }

    /// Whether `cell` lies inside the range
    pub const fn contains(&self, cell: CellId) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Whether the two ranges share at least one cell
    pub fn intersects(&self, other: &Self) -> bool {
        self.cell_count() > 0
            && other.cell_count() > 0
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    fn remaining(&self) -> usize {
        let Some(cursor) = self.cursor else {
            return 0;
        };
        let columns = i128::from(self.max.x) - i128::from(self.min.x) + 1;
        let full_rows = i128::from(self.max.y) - i128::from(cursor.y);
        let current_row = i128::from(self.max.x) - i128::from(cursor.x) + 1;
        let remaining = full_rows.saturating_mul(columns).saturating_add(current_row);
        usize::try_from(remaining).unwrap_or(usize::MAX)
    }
}

impl Iterator for CellRange {
    type Item = CellId;

    fn next(&mut self) -> Option<CellId> {
        let current = self.cursor?;
        self.cursor = if current.x < self.max.x {
            Some(CellId::new(current.x + 1, current.y))
        } else if current.y < self.max.y {
            Some(CellId::new(self.min.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRange {}

impl std::iter::FusedIterator for CellRange {}

/// World coordinate to cell coordinate
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate, far-away coordinates clamp to the edge cells"
)]
fn to_cell(coordinate: f64, inv_cell_size: f64) -> i64 {
    (coordinate * inv_cell_size).floor() as i64
}
