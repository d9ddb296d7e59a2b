//! Keyframe timeline generation.

use crate::GridPosition;

/// Pixel size of one tile.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileSize {
    /// Tile width in the configured unit
    pub width: f64,
    /// Tile height in the configured unit
    pub height: f64,
}

impl TileSize {
    /// Create a new tile size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Offset that aligns the tile at `pos` with the viewport origin.
    #[inline]
    pub fn offset_of(&self, pos: GridPosition) -> (f64, f64) {
        (self.width * pos.col as f64, self.height * pos.row as f64)
    }
}

/// One keyframe: hold the sheet at `(offset_x, offset_y)` from `percent` of
/// the cycle onwards.
///
/// Offsets are positive distances; a renderer translates the sheet by their
/// negation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameStep {
    /// Position in the cycle, 0.0 - 100.0
    pub percent: f64,
    /// Horizontal offset
    pub offset_x: f64,
    /// Vertical offset
    pub offset_y: f64,
}

impl FrameStep {
    /// Create a keyframe at `percent` showing the tile at `pos`.
    pub fn at(percent: f64, pos: GridPosition, tile: TileSize) -> Self {
        let (offset_x, offset_y) = tile.offset_of(pos);
        Self {
            percent,
            offset_x,
            offset_y,
        }
    }

    /// Copy of this keyframe moved to another point in the cycle.
    #[inline]
    pub fn with_percent(self, percent: f64) -> Self {
        Self { percent, ..self }
    }
}

/// Walk `frame_count` tiles from `start`, producing one keyframe per tile.
///
/// Percentages are truncated to two decimals. After the last tile a
/// duplicate keyframe at exactly 100% is appended so the final tile holds
/// until the end of the cycle instead of being cut short by the rounding gap.
/// A `frame_count` of zero yields an empty timeline.
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::{build_timeline, GridPosition, TileSize};
///
/// let steps = build_timeline(3, GridPosition::new(1, 0), 2, TileSize::new(10.0, 20.0));
/// let percents: Vec<f64> = steps.iter().map(|s| s.percent).collect();
/// assert_eq!(percents, vec![0.0, 33.33, 66.66, 100.0]);
///
/// // Starts at column 1, wraps into row 1
/// assert_eq!((steps[0].offset_x, steps[0].offset_y), (10.0, 0.0));
/// assert_eq!((steps[1].offset_x, steps[1].offset_y), (0.0, 20.0));
/// assert_eq!(steps[3], steps[2].with_percent(100.0));
/// ```
pub fn build_timeline(
    frame_count: u32,
    start: GridPosition,
    column_count: u32,
    tile: TileSize,
) -> Vec<FrameStep> {
    if frame_count == 0 {
        return Vec::new();
    }

    let percent_step = 100.0 / frame_count as f64;
    let mut steps = Vec::with_capacity(frame_count as usize + 1);
    let mut pos = start;

    for i in 0..frame_count {
        let percent = (percent_step * i as f64 * 100.0).floor() / 100.0;
        let step = FrameStep::at(percent, pos, tile);
        steps.push(step);

        if i + 1 == frame_count {
            steps.push(step.with_percent(100.0));
        }

        pos.advance(column_count);
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(steps: &[FrameStep]) -> Vec<(f64, f64)> {
        steps.iter().map(|s| (s.offset_x, s.offset_y)).collect()
    }

    fn percents(steps: &[FrameStep]) -> Vec<f64> {
        steps.iter().map(|s| s.percent).collect()
    }

    #[test]
    fn test_single_row_sheet() {
        let steps = build_timeline(4, GridPosition::default(), 4, TileSize::new(10.0, 10.0));

        assert_eq!(steps.len(), 5);
        assert_eq!(percents(&steps), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(
            offsets(&steps),
            vec![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (30.0, 0.0)]
        );
    }

    #[test]
    fn test_wraps_rows() {
        let steps = build_timeline(3, GridPosition::new(0, 1), 3, TileSize::new(8.0, 16.0));

        assert_eq!(
            offsets(&steps),
            vec![(0.0, 16.0), (8.0, 16.0), (16.0, 16.0), (16.0, 16.0)]
        );

        let steps = build_timeline(4, GridPosition::new(2, 0), 3, TileSize::new(8.0, 16.0));
        assert_eq!(
            offsets(&steps),
            vec![(16.0, 0.0), (0.0, 16.0), (8.0, 16.0), (16.0, 16.0), (16.0, 16.0)]
        );
    }

    #[test]
    fn test_single_frame() {
        let steps = build_timeline(1, GridPosition::new(1, 1), 2, TileSize::new(5.0, 5.0));
        assert_eq!(percents(&steps), vec![0.0, 100.0]);
        assert_eq!(offsets(&steps), vec![(5.0, 5.0), (5.0, 5.0)]);
    }

    #[test]
    fn test_percent_truncation() {
        let steps = build_timeline(7, GridPosition::default(), 7, TileSize::new(1.0, 1.0));
        assert_eq!(
            percents(&steps),
            vec![0.0, 14.28, 28.57, 42.85, 57.14, 71.42, 85.71, 100.0]
        );
    }

    #[test]
    fn test_percent_monotonic() {
        for frame_count in 1..200 {
            let steps =
                build_timeline(frame_count, GridPosition::default(), 9, TileSize::new(1.0, 1.0));
            assert_eq!(steps.len(), frame_count as usize + 1);
            assert_eq!(steps[0].percent, 0.0);
            assert_eq!(steps[steps.len() - 1].percent, 100.0);
            assert!(steps.windows(2).all(|w| w[0].percent <= w[1].percent));
            assert!(steps.iter().all(|s| (0.0..=100.0).contains(&s.percent)));
        }
    }

    #[test]
    fn test_zero_frames() {
        assert!(build_timeline(0, GridPosition::default(), 3, TileSize::new(1.0, 1.0)).is_empty());
    }
}
