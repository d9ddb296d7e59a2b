//! Caller-driven playback over a schedule.

use crate::{
    AnimationConfig, ConfigResult, FillMode, FrameStep, Iterations, LifecycleHandlers, PlayState,
    Schedule,
};

/// Current state of playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Time does not advance
    Paused,
    /// Time advances on every tick
    Playing,
    /// The last pass of a finite animation completed
    Finished,
}

/// Platform-agnostic playback cursor for a [`Schedule`].
///
/// This does not own a timer. The caller advances it with [`Playback::tick`]
/// from its own render loop and draws whatever [`Playback::current_step`]
/// returns. Lifecycle handlers fire from inside `tick`.
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::{AnimationConfig, Playback, PlaybackState};
///
/// let config = AnimationConfig::new("coin.png", 1, 4)
///     .with_tile_size(10.0, 10.0)
///     .with_fps(4.0)
///     .with_playing(true);
/// let mut playback = Playback::from_config(&config).unwrap();
///
/// playback.tick(600.0);
/// assert_eq!(playback.current_step().unwrap().offset_x, 20.0);
///
/// playback.tick(400.0);
/// assert_eq!(playback.state(), PlaybackState::Finished);
/// ```
#[derive(Clone, Debug)]
pub struct Playback {
    schedule: Schedule,
    handlers: LifecycleHandlers,
    /// Time since playback started, including the delay
    elapsed_ms: f64,
    /// Passes completed so far
    completed_passes: u64,
    state: PlaybackState,
}

impl Playback {
    /// Create a playback cursor for `schedule`.
    ///
    /// Starts playing if the schedule's play state is running.
    pub fn new(schedule: Schedule, handlers: LifecycleHandlers) -> Self {
        let state = match schedule.play_state {
            PlayState::Running => PlaybackState::Playing,
            PlayState::Paused => PlaybackState::Paused,
        };
        Self {
            schedule,
            handlers,
            elapsed_ms: 0.0,
            completed_passes: 0,
            state,
        }
    }

    /// Build the schedule for `config` and wrap it with the config's handlers.
    pub fn from_config(config: &AnimationConfig) -> ConfigResult<Self> {
        let schedule = Schedule::build(config)?;
        Ok(Self::new(schedule, config.handlers.clone()))
    }

    /// The schedule being played.
    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Get the current playback state.
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if playback is currently running.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Time advanced so far, delay included.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Number of passes completed so far.
    #[inline]
    pub fn completed_passes(&self) -> u64 {
        self.completed_passes
    }

    /// Start or resume playback. Has no effect once finished.
    pub fn play(&mut self) {
        if self.state != PlaybackState::Finished {
            self.state = PlaybackState::Playing;
        }
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Toggle play/pause, restarting from the beginning when finished.
    pub fn toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.play(),
            PlaybackState::Finished => {
                self.rewind();
                self.state = PlaybackState::Playing;
            }
        }
    }

    /// Stop playback and rewind to the start, delay included.
    pub fn stop(&mut self) {
        self.rewind();
        self.state = PlaybackState::Paused;
    }

    fn rewind(&mut self) {
        self.elapsed_ms = 0.0;
        self.completed_passes = 0;
    }

    /// Time into the active period; negative during the delay.
    #[inline]
    fn active_ms(&self) -> f64 {
        self.elapsed_ms - self.schedule.delay_ms
    }

    /// Position within the current pass, 0.0 - 100.0.
    pub fn progress(&self) -> f64 {
        let duration = self.schedule.duration_ms;
        let active = self.active_ms();
        if duration <= 0.0 || active < 0.0 {
            return 0.0;
        }
        (active % duration) / duration * 100.0
    }

    /// Advance playback by `delta_ms`.
    ///
    /// Deltas that are not positive and finite are ignored.
    /// Fires `on_iteration` for every pass boundary crossed that is followed
    /// by another pass, and `on_animation_end` when the last pass of a finite
    /// animation completes. Returns `false` when playback is not running
    /// after the tick.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        if !self.is_playing() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return false;
        }

        self.elapsed_ms += delta_ms;
        let active = self.active_ms();
        if active < 0.0 {
            return true;
        }

        let duration = self.schedule.duration_ms;
        let passes = if duration > 0.0 {
            (active / duration).floor() as u64
        } else {
            // A zero-length pass completes as soon as it starts
            u64::MAX
        };

        match self.schedule.iterations {
            Iterations::Infinite => {
                if duration <= 0.0 {
                    return true;
                }
                while self.completed_passes < passes {
                    self.completed_passes += 1;
                    tracing::trace!(pass = self.completed_passes, "sprite animation iteration");
                    self.handlers.on_iteration.call();
                }
            }
            Iterations::Count(0) => self.finish(),
            Iterations::Count(n) => {
                let target = passes.min(u64::from(n));
                while self.completed_passes < target {
                    self.completed_passes += 1;
                    if self.completed_passes < u64::from(n) {
                        tracing::trace!(pass = self.completed_passes, "sprite animation iteration");
                        self.handlers.on_iteration.call();
                    } else {
                        self.finish();
                    }
                }
            }
        }

        self.is_playing()
    }

    fn finish(&mut self) {
        self.state = PlaybackState::Finished;
        tracing::trace!(passes = self.completed_passes, "sprite animation ended");
        self.handlers.on_animation_end.call();
    }

    /// Keyframe to display right now, or `None` when the sheet should be
    /// shown in its un-animated state.
    pub fn current_step(&self) -> Option<&FrameStep> {
        if self.state == PlaybackState::Finished {
            return match self.schedule.fill {
                FillMode::Forwards => self.schedule.last_step(),
                FillMode::Backwards => None,
            };
        }

        if self.active_ms() < 0.0 {
            return match self.schedule.fill {
                FillMode::Backwards => self.schedule.first_step(),
                FillMode::Forwards => None,
            };
        }

        self.schedule.step_at(self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DurationMode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counters {
        iterations: Arc<AtomicUsize>,
        ends: Arc<AtomicUsize>,
    }

    impl Counters {
        fn iterations(&self) -> usize {
            self.iterations.load(Ordering::SeqCst)
        }

        fn ends(&self) -> usize {
            self.ends.load(Ordering::SeqCst)
        }
    }

    // 1x4 sheet at 4 fps: one pass is 1000ms, 250ms per tile
    fn counted(config: AnimationConfig) -> (Playback, Counters) {
        let iterations = Arc::new(AtomicUsize::new(0));
        let ends = Arc::new(AtomicUsize::new(0));
        let (i, e) = (iterations.clone(), ends.clone());
        let config = config
            .on_iteration(move || {
                i.fetch_add(1, Ordering::SeqCst);
            })
            .on_animation_end(move || {
                e.fetch_add(1, Ordering::SeqCst);
            });
        (
            Playback::from_config(&config).unwrap(),
            Counters { iterations, ends },
        )
    }

    fn sheet() -> AnimationConfig {
        AnimationConfig::new("a.png", 1, 4)
            .with_tile_size(10.0, 10.0)
            .with_fps(4.0)
            .with_playing(true)
    }

    fn offset_x(playback: &Playback) -> Option<f64> {
        playback.current_step().map(|s| s.offset_x)
    }

    #[test]
    fn test_basic_playback() {
        let (mut playback, counters) = counted(sheet());
        assert_eq!(playback.state(), PlaybackState::Playing);
        assert_eq!(offset_x(&playback), Some(0.0));

        assert!(playback.tick(250.0));
        assert_eq!(offset_x(&playback), Some(10.0));

        assert!(playback.tick(500.0));
        assert_eq!(offset_x(&playback), Some(30.0));
        assert!((playback.progress() - 75.0).abs() < 1e-9);

        assert!(!playback.tick(250.0));
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert_eq!(counters.iterations(), 0);
        assert_eq!(counters.ends(), 1);

        // Backwards fill reverts after the end
        assert_eq!(offset_x(&playback), None);
        assert!(!playback.tick(100.0));
        assert_eq!(counters.ends(), 1);
    }

    #[test]
    fn test_starts_paused() {
        let (mut playback, _) = counted(sheet().with_playing(false));
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert!(!playback.tick(500.0));
        assert_eq!(playback.elapsed_ms(), 0.0);

        playback.play();
        assert!(playback.tick(500.0));
        assert_eq!(offset_x(&playback), Some(20.0));

        playback.pause();
        assert!(!playback.tick(500.0));
        assert_eq!(offset_x(&playback), Some(20.0));
    }

    #[test]
    fn test_loop_count() {
        let (mut playback, counters) = counted(sheet().with_loop_count(3));

        playback.tick(1000.0);
        assert_eq!(counters.iterations(), 1);
        assert_eq!(offset_x(&playback), Some(0.0));

        playback.tick(1100.0);
        assert_eq!(counters.iterations(), 2);
        assert_eq!(playback.completed_passes(), 2);
        assert!(playback.is_playing());

        playback.tick(900.0);
        assert_eq!(counters.iterations(), 2);
        assert_eq!(counters.ends(), 1);
        assert_eq!(playback.state(), PlaybackState::Finished);
    }

    #[test]
    fn test_infinite_never_ends() {
        let (mut playback, counters) = counted(sheet().with_loop(true));

        playback.tick(3500.0);
        assert_eq!(counters.iterations(), 3);
        assert_eq!(offset_x(&playback), Some(20.0));

        for _ in 0..100 {
            playback.tick(250.0);
        }
        assert_eq!(counters.iterations(), 28);
        assert_eq!(counters.ends(), 0);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_fill_forwards_keeps_last_frame() {
        let (mut playback, _) = counted(sheet().with_fill_forwards(true));
        playback.tick(2000.0);
        assert_eq!(playback.state(), PlaybackState::Finished);
        assert_eq!(offset_x(&playback), Some(30.0));
    }

    #[test]
    fn test_delay() {
        let (mut playback, _) = counted(sheet().with_starting_frame(2).with_delay_ms(500.0));
        assert_eq!(offset_x(&playback), Some(10.0));

        playback.tick(400.0);
        assert_eq!(offset_x(&playback), Some(10.0));
        assert_eq!(playback.progress(), 0.0);

        playback.tick(350.0);
        assert_eq!(offset_x(&playback), Some(20.0));

        // Forwards fill shows nothing during the delay
        let (playback, _) = counted(sheet().with_delay_ms(500.0).with_fill_forwards(true));
        assert_eq!(offset_x(&playback), None);
    }

    #[test]
    fn test_toggle_and_stop() {
        let (mut playback, counters) = counted(sheet());
        playback.tick(1000.0);
        assert_eq!(playback.state(), PlaybackState::Finished);

        playback.play();
        assert_eq!(playback.state(), PlaybackState::Finished);

        playback.toggle();
        assert!(playback.is_playing());
        assert_eq!(playback.elapsed_ms(), 0.0);
        assert_eq!(offset_x(&playback), Some(0.0));

        playback.tick(1000.0);
        assert_eq!(counters.ends(), 2);

        playback.stop();
        assert_eq!(playback.state(), PlaybackState::Paused);
        assert_eq!(playback.completed_passes(), 0);

        playback.toggle();
        assert!(playback.is_playing());
    }

    #[test]
    fn test_zero_length_pass() {
        let config = sheet()
            .with_starting_frame(4)
            .with_duration_mode(DurationMode::SheetRemainder);
        let (mut playback, counters) = counted(config);
        assert_eq!(playback.schedule().duration_ms, 0.0);

        assert!(!playback.tick(1.0));
        assert_eq!(counters.ends(), 1);

        let (mut playback, counters) = counted(
            sheet()
                .with_starting_frame(4)
                .with_duration_mode(DurationMode::SheetRemainder)
                .with_loop(true),
        );
        assert!(playback.tick(1.0));
        assert_eq!(counters.iterations(), 0);
        assert_eq!(offset_x(&playback), Some(30.0));
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let (mut playback, _) = counted(sheet());
        assert!(!playback.tick(0.0));
        assert!(!playback.tick(-5.0));
        assert!(!playback.tick(f64::NAN));
        assert!(!playback.tick(f64::INFINITY));
        assert_eq!(playback.elapsed_ms(), 0.0);
        assert!(playback.is_playing());
    }

    #[test]
    fn test_infinite_delta_on_loop() {
        let (mut playback, counters) = counted(sheet().with_loop(true));
        assert!(!playback.tick(f64::INFINITY));
        assert_eq!(counters.iterations(), 0);
        assert_eq!(playback.elapsed_ms(), 0.0);

        // Still usable afterwards
        assert!(playback.tick(1250.0));
        assert_eq!(counters.iterations(), 1);
        assert_eq!(offset_x(&playback), Some(10.0));
    }
}
