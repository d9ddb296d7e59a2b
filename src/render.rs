//! Rendering schedules into medium-specific animation primitives.

use std::fmt;

use crate::{AnimationConfig, FillMode, FrameStep, Iterations, PlayState, Schedule};

/// Converts a [`Schedule`] into whatever a presentation layer consumes.
///
/// Implementations translate each [`FrameStep`] into a "hold this offset from
/// this point of the cycle" instruction and carry over duration, delay,
/// iteration count, fill mode and play state.
pub trait ScheduleRenderer {
    type Output;

    fn render(&self, schedule: &Schedule, config: &AnimationConfig) -> Self::Output;
}

/// CSS `@keyframes` output for a schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssAnimation {
    /// Name used in both the keyframes block and the shorthand
    pub name: String,
    /// One rule per keyframe, e.g. `25% {transform: translate(-10px, -0px)}`
    pub keyframes: Vec<String>,
    /// Value for the `animation` property
    pub shorthand: String,
}

impl fmt::Display for CssAnimation {
    /// Writes the complete `@keyframes` block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;
        for rule in &self.keyframes {
            writeln!(f, "  {rule}")?;
        }
        writeln!(f, "}}")
    }
}

/// Renders schedules as CSS keyframes driven by `steps(1)` timing, which
/// holds each tile until the next keyframe.
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::{AnimationConfig, Schedule};
/// use sprite_timeline::render::{CssRenderer, ScheduleRenderer};
///
/// let config = AnimationConfig::new("coin.png", 1, 2)
///     .with_tile_size(16.0, 16.0)
///     .with_fps(4.0)
///     .with_loop(true)
///     .with_playing(true);
/// let schedule = Schedule::build(&config).unwrap();
/// let css = CssRenderer.render(&schedule, &config);
///
/// assert_eq!(css.keyframes[1], "50% {transform: translate(-16px, -0px)}");
/// assert_eq!(css.shorthand, "frames0 500ms steps(1) 0ms infinite backwards running");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CssRenderer;

impl CssRenderer {
    fn keyframe_rule(step: &FrameStep, unit: &str) -> String {
        format!(
            "{}% {{transform: translate(-{}{unit}, -{}{unit})}}",
            step.percent, step.offset_x, step.offset_y
        )
    }
}

impl ScheduleRenderer for CssRenderer {
    type Output = CssAnimation;

    fn render(&self, schedule: &Schedule, config: &AnimationConfig) -> CssAnimation {
        let keyframes = schedule
            .steps
            .iter()
            .map(|step| Self::keyframe_rule(step, &config.unit))
            .collect();

        let iterations = match schedule.iterations {
            Iterations::Infinite => "infinite".to_string(),
            Iterations::Count(n) => n.to_string(),
        };
        let fill = match schedule.fill {
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
        };
        let play_state = match schedule.play_state {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        };

        let shorthand = format!(
            "{} {}ms steps(1) {}ms {} {} {}",
            schedule.name, schedule.duration_ms, schedule.delay_ms, iterations, fill, play_state
        );

        CssAnimation {
            name: schedule.name.clone(),
            keyframes,
            shorthand,
        }
    }
}
