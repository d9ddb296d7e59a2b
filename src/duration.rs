//! Playback duration calculation.

use crate::{ConfigError, ConfigResult};

/// Which frame total the cycle duration is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DurationMode {
    /// One `1/fps` slot per generated frame
    #[default]
    FrameCount,
    /// `rows * columns - starting_frame` slots, regardless of the finish frame
    SheetRemainder,
}

fn check_fps(fps: f64) -> ConfigResult<()> {
    if fps.is_finite() && fps > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFps { fps })
    }
}

/// Duration of the remainder of the sheet after `starting_frame`.
///
/// The finish frame plays no part here, so the result only matches the
/// number of generated keyframes when the animation runs to the end of the
/// sheet from the first tile. See [`DurationMode::SheetRemainder`].
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::compute_duration_ms;
///
/// assert_eq!(compute_duration_ms(2, 3, 0, 30.0).unwrap(), 200.0);
/// assert_eq!(compute_duration_ms(2, 3, 4, 20.0).unwrap(), 100.0);
/// assert!(compute_duration_ms(2, 3, 0, 0.0).is_err());
/// ```
pub fn compute_duration_ms(
    row_count: u32,
    column_count: u32,
    starting_frame: u32,
    fps: f64,
) -> ConfigResult<f64> {
    check_fps(fps)?;
    let remaining = (row_count as f64) * (column_count as f64) - starting_frame as f64;
    Ok(remaining * 1000.0 / fps)
}

/// Duration that gives each of `frame_count` frames exactly `1/fps` seconds.
pub fn frame_count_duration_ms(frame_count: u32, fps: f64) -> ConfigResult<f64> {
    check_fps(fps)?;
    Ok(frame_count as f64 * 1000.0 / fps)
}
