//! Frame range resolution.

use crate::{ConfigError, ConfigResult, SheetGrid};

impl SheetGrid {
    /// Resolve how many frames an animation covers.
    ///
    /// Both bounds are 1-based and `0` / `None` mean "unset":
    ///
    /// - start and finish set: `finish - start`, the finish frame is exclusive
    /// - start set only: from the start through the last tile, inclusive
    /// - finish set only: the first `finish` tiles
    /// - neither: the whole sheet
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::StartOutOfRange`] when the start lies past the last tile
    /// - [`ConfigError::FinishBeforeStart`] when both are set and finish <= start
    /// - [`ConfigError::FinishOutOfRange`] when the finish addresses tiles
    ///   beyond the sheet: above `total + 1` with a start (the bound is
    ///   exclusive), above `total` without one
    /// - [`ConfigError::EmptyFrameRange`] when the range resolves to zero frames
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sprite_timeline::SheetGrid;
    ///
    /// let grid = SheetGrid::new(2, 3).unwrap();
    /// assert_eq!(grid.resolve_frame_count(0, None).unwrap(), 6);
    /// assert_eq!(grid.resolve_frame_count(4, None).unwrap(), 3);
    /// assert_eq!(grid.resolve_frame_count(2, Some(5)).unwrap(), 3);
    /// assert!(grid.resolve_frame_count(5, Some(3)).is_err());
    /// ```
    pub fn resolve_frame_count(
        &self,
        starting_frame: u32,
        finish_frame: Option<u32>,
    ) -> ConfigResult<u32> {
        let total_frames = self.total_frames();

        if starting_frame > total_frames {
            return Err(ConfigError::StartOutOfRange {
                starting_frame,
                total_frames,
            });
        }

        let frame_count = match (starting_frame, finish_frame) {
            (0, Some(finish_frame)) => {
                if finish_frame > total_frames {
                    return Err(ConfigError::FinishOutOfRange {
                        finish_frame,
                        limit: total_frames,
                    });
                }
                finish_frame
            }
            (0, None) => total_frames,
            (start, Some(finish_frame)) => {
                if finish_frame <= start {
                    return Err(ConfigError::FinishBeforeStart {
                        starting_frame: start,
                        finish_frame,
                    });
                }
                // Exclusive bound, so one past the last tile is allowed
                let limit = total_frames.saturating_add(1);
                if finish_frame > limit {
                    return Err(ConfigError::FinishOutOfRange {
                        finish_frame,
                        limit,
                    });
                }
                finish_frame - start
            }
            (start, None) => total_frames - start + 1,
        };

        if frame_count == 0 {
            return Err(ConfigError::EmptyFrameRange);
        }
        Ok(frame_count)
    }
}
