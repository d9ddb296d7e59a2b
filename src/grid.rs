//! Sprite sheet grid geometry and tile addressing.

use crate::{ConfigError, ConfigResult};

/// A 0-based tile coordinate within the sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// Column index, always less than the grid's column count
    pub col: u32,
    /// Row index
    pub row: u32,
}

impl GridPosition {
    /// Create a new position.
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Step to the next tile in reading order, wrapping into the next row.
    #[inline]
    pub fn advance(&mut self, column_count: u32) {
        self.col += 1;
        if self.col == column_count {
            self.col = 0;
            self.row += 1;
        }
    }
}

/// Shape of a sprite sheet: `rows` x `columns` equally sized tiles.
///
/// Construction validates the shape, so every `SheetGrid` has at least one
/// tile and a frame total that fits in `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetGrid {
    rows: u32,
    columns: u32,
}

impl SheetGrid {
    /// Create a validated grid.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sprite_timeline::SheetGrid;
    ///
    /// let grid = SheetGrid::new(2, 3).unwrap();
    /// assert_eq!(grid.total_frames(), 6);
    /// assert!(SheetGrid::new(0, 3).is_err());
    /// ```
    pub fn new(rows: u32, columns: u32) -> ConfigResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::EmptyGrid { rows, columns });
        }
        if rows.checked_mul(columns).is_none() {
            return Err(ConfigError::GridTooLarge { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of tile columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of tiles in the sheet.
    #[inline]
    pub fn total_frames(&self) -> u32 {
        self.rows * self.columns
    }

    /// Resolve the tile playback begins on.
    ///
    /// `starting_frame` is 1-based; `0` means "unset" and maps to the first
    /// tile.
    pub fn resolve_start(&self, starting_frame: u32) -> GridPosition {
        resolve_start(starting_frame, self.columns)
    }
}

/// Map a 1-based frame number to its tile coordinate.
///
/// A frame that lands exactly on a row boundary resolves to the last column of
/// that row, not the first column of the next one. `column_count` must be
/// non-zero; [`SheetGrid::resolve_start`] guarantees that.
///
/// ## Panics
///
/// Panics if `column_count` is zero and `starting_frame` is not.
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::{resolve_start, GridPosition};
///
/// assert_eq!(resolve_start(0, 3), GridPosition::new(0, 0));
/// assert_eq!(resolve_start(3, 3), GridPosition::new(2, 0));
/// assert_eq!(resolve_start(4, 3), GridPosition::new(0, 1));
/// ```
pub fn resolve_start(starting_frame: u32, column_count: u32) -> GridPosition {
    if starting_frame == 0 {
        return GridPosition::default();
    }
    assert!(column_count > 0, "column_count must be non-zero");
    if starting_frame <= column_count {
        return GridPosition::new(starting_frame - 1, 0);
    }

    let remainder = starting_frame % column_count;
    if remainder > 0 {
        GridPosition::new(remainder - 1, starting_frame / column_count)
    } else {
        GridPosition::new(column_count - 1, starting_frame / column_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_start() {
        assert_eq!(resolve_start(0, 5), GridPosition::new(0, 0));
    }

    #[test]
    fn test_first_row() {
        assert_eq!(resolve_start(1, 4), GridPosition::new(0, 0));
        assert_eq!(resolve_start(3, 4), GridPosition::new(2, 0));
    }

    #[test]
    fn test_row_boundary_wraparound() {
        for columns in 1..8 {
            assert_eq!(
                resolve_start(columns, columns),
                GridPosition::new(columns - 1, 0)
            );
            assert_eq!(resolve_start(columns + 1, columns), GridPosition::new(0, 1));
        }
        // Last column of the third row
        assert_eq!(resolve_start(9, 3), GridPosition::new(2, 2));
        // Mid-row
        assert_eq!(resolve_start(8, 3), GridPosition::new(1, 2));
    }

    #[test]
    fn test_single_column() {
        assert_eq!(resolve_start(1, 1), GridPosition::new(0, 0));
        assert_eq!(resolve_start(4, 1), GridPosition::new(0, 3));
    }

    #[test]
    fn test_zero_columns_unset_start() {
        assert_eq!(resolve_start(0, 0), GridPosition::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "column_count must be non-zero")]
    fn test_zero_columns_panics() {
        resolve_start(5, 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut pos = GridPosition::new(1, 0);
        pos.advance(3);
        assert_eq!(pos, GridPosition::new(2, 0));
        pos.advance(3);
        assert_eq!(pos, GridPosition::new(0, 1));
    }

    #[test]
    fn test_grid_validation() {
        assert!(matches!(
            SheetGrid::new(3, 0),
            Err(ConfigError::EmptyGrid { rows: 3, columns: 0 })
        ));
        assert!(matches!(
            SheetGrid::new(u32::MAX, 2),
            Err(ConfigError::GridTooLarge { .. })
        ));

        let grid = SheetGrid::new(2, 3).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.resolve_start(4), GridPosition::new(0, 1));
    }
}
