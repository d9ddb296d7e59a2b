//! # sprite-timeline
//!
//! Keyframe scheduling for sprite sheet animations.
//!
//! A sprite sheet is one image laid out as a grid of equally sized tiles.
//! This crate turns a frame range over that grid into an ordered list of
//! `(percent of cycle, tile offset)` keyframes plus the timing metadata needed
//! to play it. Nothing here touches images or a display; any renderer
//! (CSS animations, a canvas loop, a native timeline) can consume the result.
//!
//! This crate provides platform-agnostic logic for:
//! - Resolving 1-based frame numbers to grid coordinates
//! - Resolving the frame range to play from optional start/finish bounds
//! - Generating the keyframe timeline and its duration
//! - Rendering schedules to CSS keyframes
//! - Sampling a schedule from a caller-driven render loop
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`AnimationConfig`] from TOML
//!
//! ## Example
//!
//! ```rust
//! use sprite_timeline::{AnimationConfig, Schedule};
//!
//! let config = AnimationConfig::new("explosion.png", 2, 3)
//!     .with_tile_size(64.0, 64.0)
//!     .with_fps(12.0)
//!     .with_starting_frame(4);
//!
//! let schedule = Schedule::build(&config)?;
//! assert_eq!(schedule.frame_count, 3);
//! assert_eq!(schedule.steps.len(), 4);
//! assert_eq!(schedule.steps[0].offset_y, 64.0);
//! # Ok::<(), sprite_timeline::ConfigError>(())
//! ```

mod config;
mod duration;
mod error;
mod grid;
mod playback;
mod range;
pub mod render;
mod schedule;
mod timeline;

pub use config::{AnimationConfig, AnimationKey, Handler, LifecycleHandlers};
pub use duration::{compute_duration_ms, frame_count_duration_ms, DurationMode};
pub use error::{ConfigError, ConfigResult};
pub use grid::{resolve_start, GridPosition, SheetGrid};
pub use playback::{Playback, PlaybackState};
pub use render::{CssAnimation, CssRenderer, ScheduleRenderer};
pub use schedule::{FillMode, Iterations, PlayState, Schedule};
pub use timeline::{build_timeline, FrameStep, TileSize};
