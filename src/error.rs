//! Configuration errors.

/// Result alias used by every fallible operation in this crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for invalid animation configuration.
///
/// Every variant is raised before any keyframe is generated, so a failed
/// build never yields a partial schedule.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid has no rows or no columns
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: u32, columns: u32 },
    /// rows * columns does not fit the frame index type
    #[error("grid of {rows}x{columns} tiles is too large")]
    GridTooLarge { rows: u32, columns: u32 },
    /// Tile width or height is zero, negative or not finite
    #[error("tile size must be positive, got {width}x{height}")]
    InvalidTileSize { width: f64, height: f64 },
    /// Frame rate is zero, negative or not finite
    #[error("fps must be positive, got {fps}")]
    InvalidFps { fps: f64 },
    /// Delay is not a finite number
    #[error("delay must be a finite number of milliseconds, got {delay_ms}")]
    InvalidDelay { delay_ms: f64 },
    /// No image source was given
    #[error("image source must not be empty")]
    EmptyImageSource,
    /// Explicit loop count of zero
    #[error("loop count must be at least 1")]
    InvalidLoopCount,
    /// Starting frame lies past the last tile
    #[error("starting frame {starting_frame} is outside the sheet of {total_frames} frames")]
    StartOutOfRange { starting_frame: u32, total_frames: u32 },
    /// Finish frame does not come after the starting frame
    #[error("finish frame {finish_frame} must be greater than starting frame {starting_frame}")]
    FinishBeforeStart { starting_frame: u32, finish_frame: u32 },
    /// Finish frame lies past the end of the sheet
    #[error("finish frame {finish_frame} exceeds the limit of {limit}")]
    FinishOutOfRange { finish_frame: u32, limit: u32 },
    /// Frame range resolves to nothing to play
    #[error("frame range is empty")]
    EmptyFrameRange,
}
