//! The full config → keyframe schedule pipeline.

use crate::{
    build_timeline, compute_duration_ms, frame_count_duration_ms, AnimationConfig, ConfigResult,
    DurationMode, FrameStep, GridPosition,
};

/// How many passes an animation makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Iterations {
    /// Repeat until stopped
    Infinite,
    /// Play this many passes, then end
    Count(u32),
}

impl Default for Iterations {
    fn default() -> Self {
        Iterations::Count(1)
    }
}

/// What is shown outside the active period of the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillMode {
    /// First keyframe during the delay, nothing after the end
    #[default]
    Backwards,
    /// Last keyframe retained after the end
    Forwards,
}

/// Initial playback state handed to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayState {
    /// Start advancing immediately
    Running,
    /// Wait for an explicit play
    #[default]
    Paused,
}

/// A complete, immutable animation schedule for one sprite sheet animation.
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::{AnimationConfig, Iterations, Schedule};
///
/// let config = AnimationConfig::new("coin.png", 1, 4)
///     .with_tile_size(10.0, 10.0)
///     .with_fps(8.0)
///     .with_loop(true);
///
/// let schedule = Schedule::build(&config).unwrap();
/// assert_eq!(schedule.frame_count, 4);
/// assert_eq!(schedule.steps.len(), 5);
/// assert_eq!(schedule.duration_ms, 500.0);
/// assert_eq!(schedule.iterations, Iterations::Infinite);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Keyframes name derived from the config key
    pub name: String,
    /// Keyframes in ascending `percent` order
    pub steps: Vec<FrameStep>,
    /// Number of distinct tiles played per pass
    pub frame_count: u32,
    /// Tile the first keyframe shows
    pub start: GridPosition,
    /// Length of one pass
    pub duration_ms: f64,
    /// Wait before the first pass
    pub delay_ms: f64,
    /// Number of passes
    pub iterations: Iterations,
    /// What shows before and after the active period
    pub fill: FillMode,
    /// Whether playback starts running or paused
    pub play_state: PlayState,
}

impl Schedule {
    /// Validate `config` and derive its schedule.
    ///
    /// Fails before generating any keyframe if the config is invalid.
    #[tracing::instrument(skip(config), fields(key = %config.key))]
    pub fn build(config: &AnimationConfig) -> ConfigResult<Self> {
        config.validate()?;

        let grid = config.grid()?;
        let start = grid.resolve_start(config.starting_frame);
        let frame_count = grid.resolve_frame_count(config.starting_frame, config.finish_frame)?;
        let steps = build_timeline(frame_count, start, grid.columns(), config.tile());

        let duration_ms = match config.duration_mode {
            DurationMode::FrameCount => frame_count_duration_ms(frame_count, config.fps)?,
            DurationMode::SheetRemainder => compute_duration_ms(
                config.row_count,
                config.column_count,
                config.starting_frame,
                config.fps,
            )?,
        };

        let iterations = if config.looping {
            Iterations::Infinite
        } else {
            Iterations::Count(config.loop_count.unwrap_or(1))
        };
        let fill = if config.fill_forwards {
            FillMode::Forwards
        } else {
            FillMode::Backwards
        };
        let play_state = if config.playing {
            PlayState::Running
        } else {
            PlayState::Paused
        };

        tracing::debug!(
            frame_count,
            steps = steps.len(),
            duration_ms,
            ?iterations,
            "built sprite schedule"
        );

        Ok(Self {
            name: config.key.animation_name(),
            steps,
            frame_count,
            start,
            duration_ms,
            delay_ms: config.delay_ms,
            iterations,
            fill,
            play_state,
        })
    }

    /// Keyframe in effect at `percent` of a pass.
    ///
    /// Each keyframe holds until the next one begins, so this is the last
    /// step whose `percent` is not greater than the argument.
    pub fn step_at(&self, percent: f64) -> Option<&FrameStep> {
        let idx = self.steps.partition_point(|s| s.percent <= percent);
        idx.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// First keyframe of a pass.
    #[inline]
    pub fn first_step(&self) -> Option<&FrameStep> {
        self.steps.first()
    }

    /// Keyframe held at the end of a pass.
    #[inline]
    pub fn last_step(&self) -> Option<&FrameStep> {
        self.steps.last()
    }
}
