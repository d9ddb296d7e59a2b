//! Animation configuration.

use std::fmt;
use std::sync::Arc;

use crate::{ConfigError, ConfigResult, DurationMode, SheetGrid, TileSize};

/// Identity of an animation instance, used to name the generated keyframes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AnimationKey {
    /// Integer identity
    Number(i64),
    /// Text identity
    Text(String),
}

impl Default for AnimationKey {
    fn default() -> Self {
        AnimationKey::Number(0)
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationKey::Number(n) => write!(f, "{n}"),
            AnimationKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AnimationKey {
    fn from(n: i64) -> Self {
        AnimationKey::Number(n)
    }
}

impl From<&str> for AnimationKey {
    fn from(s: &str) -> Self {
        AnimationKey::Text(s.to_string())
    }
}

impl From<String> for AnimationKey {
    fn from(s: String) -> Self {
        AnimationKey::Text(s)
    }
}

impl AnimationKey {
    /// Keyframes name for this key, e.g. `frames0` or `frames-walk_cycle`.
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced with `_`.
    pub fn animation_name(&self) -> String {
        let raw = self.to_string();
        let mut name = String::with_capacity("frames".len() + raw.len());
        name.push_str("frames");
        name.extend(raw.chars().map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        }));
        name
    }
}

/// A lifecycle callback slot. Defaults to a no-op.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn() + Send + Sync>);

impl Handler {
    /// Wrap a callback.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A handler that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Invoke the callback.
    #[inline]
    pub fn call(&self) {
        (self.0)()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Callbacks invoked by whatever engine plays a schedule.
#[derive(Clone, Debug, Default)]
pub struct LifecycleHandlers {
    /// Fired each time a pass completes and another one begins
    pub on_iteration: Handler,
    /// Fired once when a finite animation completes its last pass
    pub on_animation_end: Handler,
}

/// Configuration for one sprite sheet animation.
///
/// Build one with [`AnimationConfig::new`] and the `with_*` methods, or load
/// it from TOML with the `toml` feature. Nothing is checked until
/// [`AnimationConfig::validate`] or [`crate::Schedule::build`] runs.
///
/// ## Example
///
/// ```rust
/// use sprite_timeline::AnimationConfig;
///
/// let config = AnimationConfig::new("hero.png", 2, 4)
///     .with_tile_size(32.0, 48.0)
///     .with_fps(12.0)
///     .with_loop(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.unit, "px");
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// Identity used to name the keyframes
    #[cfg_attr(feature = "serde", serde(default))]
    pub key: AnimationKey,
    /// Sprite sheet image location, passed through to renderers
    pub image_source: String,
    /// Tiles along the vertical axis
    pub row_count: u32,
    /// Tiles along the horizontal axis
    pub column_count: u32,
    /// Tile width in `unit`s
    #[cfg_attr(feature = "serde", serde(default))]
    pub tile_width: f64,
    /// Tile height in `unit`s
    #[cfg_attr(feature = "serde", serde(default))]
    pub tile_height: f64,
    /// Length unit tag for offsets (e.g. "px", "rem")
    #[cfg_attr(feature = "serde", serde(default = "default_unit"))]
    pub unit: String,
    /// Frames per second
    #[cfg_attr(feature = "serde", serde(default = "default_fps"))]
    pub fps: f64,
    /// 1-based first frame, `0` for the start of the sheet
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_frame: u32,
    /// 1-based end bound, `None` for the end of the sheet
    #[cfg_attr(feature = "serde", serde(default))]
    pub finish_frame: Option<u32>,
    /// Wait before the first pass
    #[cfg_attr(feature = "serde", serde(default))]
    pub delay_ms: f64,
    /// Repeat forever; `loop_count` is ignored when set
    #[cfg_attr(feature = "serde", serde(default, rename = "loop"))]
    pub looping: bool,
    /// Number of passes when not looping, `None` for one
    #[cfg_attr(feature = "serde", serde(default))]
    pub loop_count: Option<u32>,
    /// Start running immediately instead of paused
    #[cfg_attr(feature = "serde", serde(default))]
    pub playing: bool,
    /// Keep the last frame after playback ends
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill_forwards: bool,
    /// How the cycle duration is derived
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration_mode: DurationMode,
    /// Lifecycle callbacks, never serialized
    #[cfg_attr(feature = "serde", serde(skip))]
    pub handlers: LifecycleHandlers,
}

#[cfg(feature = "serde")]
fn default_unit() -> String {
    "px".to_string()
}

#[cfg(feature = "serde")]
fn default_fps() -> f64 {
    30.0
}

impl AnimationConfig {
    /// Create a config for a `row_count` x `column_count` sheet with default
    /// playback settings: 30 fps, one pass, paused, no fill.
    pub fn new(image_source: impl Into<String>, row_count: u32, column_count: u32) -> Self {
        Self {
            key: AnimationKey::default(),
            image_source: image_source.into(),
            row_count,
            column_count,
            tile_width: 0.0,
            tile_height: 0.0,
            unit: "px".to_string(),
            fps: 30.0,
            starting_frame: 0,
            finish_frame: None,
            delay_ms: 0.0,
            looping: false,
            loop_count: None,
            playing: false,
            fill_forwards: false,
            duration_mode: DurationMode::default(),
            handlers: LifecycleHandlers::default(),
        }
    }

    /// Parse a TOML document into an `AnimationConfig`.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Set the identity used to name the keyframes.
    pub fn with_key(mut self, key: impl Into<AnimationKey>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the tile width and height.
    pub fn with_tile_size(mut self, width: f64, height: f64) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Set the length unit tag for offsets.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the playback frame rate.
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    /// Set the 1-based first frame (`0` for the start of the sheet).
    pub fn with_starting_frame(mut self, frame: u32) -> Self {
        self.starting_frame = frame;
        self
    }

    /// Set the 1-based finish frame.
    pub fn with_finish_frame(mut self, frame: u32) -> Self {
        self.finish_frame = Some(frame);
        self
    }

    /// Set the delay before the first pass.
    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Repeat forever when `true`.
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the number of passes for a non-looping animation.
    pub fn with_loop_count(mut self, count: u32) -> Self {
        self.loop_count = Some(count);
        self
    }

    /// Start running instead of paused.
    pub fn with_playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }

    /// Keep the last frame after playback ends.
    pub fn with_fill_forwards(mut self, fill_forwards: bool) -> Self {
        self.fill_forwards = fill_forwards;
        self
    }

    /// Choose how the cycle duration is derived.
    pub fn with_duration_mode(mut self, mode: DurationMode) -> Self {
        self.duration_mode = mode;
        self
    }

    /// Set the callback fired between passes.
    pub fn on_iteration(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.handlers.on_iteration = Handler::new(f);
        self
    }

    /// Set the callback fired when a finite animation ends.
    pub fn on_animation_end(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.handlers.on_animation_end = Handler::new(f);
        self
    }

    /// The validated sheet grid.
    pub fn grid(&self) -> ConfigResult<SheetGrid> {
        SheetGrid::new(self.row_count, self.column_count)
    }

    /// Tile dimensions as a [`TileSize`].
    #[inline]
    pub fn tile(&self) -> TileSize {
        TileSize::new(self.tile_width, self.tile_height)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.image_source.trim().is_empty() {
            return Err(ConfigError::EmptyImageSource);
        }

        let grid = self.grid()?;

        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.tile_width) || !positive(self.tile_height) {
            return Err(ConfigError::InvalidTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if !positive(self.fps) {
            return Err(ConfigError::InvalidFps { fps: self.fps });
        }
        if !self.delay_ms.is_finite() {
            return Err(ConfigError::InvalidDelay {
                delay_ms: self.delay_ms,
            });
        }
        if !self.looping && self.loop_count == Some(0) {
            return Err(ConfigError::InvalidLoopCount);
        }

        grid.resolve_frame_count(self.starting_frame, self.finish_frame)?;
        Ok(())
    }
}
