//! # slider-core
//!
//! Platform-agnostic carousel engine.
//!
//! This crate provides the state and logic behind a horizontal slider:
//! - Choosing how many slides are visible from the viewport width
//! - Buffering clones at both ends so navigation can wrap seamlessly
//! - Keeping the buffered index and the track translate in sync
//! - Turning pointer drags into committed steps or snap-backs
//! - Interval and continuous autoplay
//! - Pagination dots derived from the position
//!
//! The engine never reads a clock or touches a presentation surface. The
//! host delivers time through [`SliderEngine::poll`] and
//! [`SliderEngine::on_frame`], and receives intents through a
//! [`RenderAdapter`].
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for options
//! - `toml` - Load options from TOML documents
//! - `web` - Enable the DOM render adapter for web/WASM hosts
//!
//! ## Example
//!
//! ```rust
//! use slider_core::{AutoplayKind, RecordingAdapter, SliderEngine, SliderOptions};
//!
//! let options = SliderOptions {
//!     autoplay: AutoplayKind::Interval,
//!     autoplay_delay_ms: Some(2000),
//!     infinite_scrolling: true,
//!     pagination: true,
//!     ..Default::default()
//! };
//!
//! let adapter = RecordingAdapter::new(600.0, 1280.0);
//! let mut slider = SliderEngine::mount(adapter, vec!["a", "b", "c"], options);
//!
//! // Two seconds later the first autoplay step fires
//! slider.poll(2000);
//! assert_eq!(slider.logical_index(), 1);
//! assert_eq!(slider.adapter().active_dot(), Some(1));
//!
//! slider.destroy();
//! ```

mod autoplay;
mod buffer;
mod drag;
mod engine;
mod error;
mod memo;
mod options;
mod pagination;
mod position;
pub mod render;
mod timer;
mod viewport;

pub use autoplay::{AutoplayMode, AutoplayScheduler, AutoplayState, DEFAULT_CONTINUOUS_SPEED, DEFAULT_INTERVAL_MS};
pub use buffer::{Slide, SlideBuffer};
pub use drag::{DragController, DragPhase, DragRelease};
pub use engine::{Lifecycle, SliderEngine, SliderState, RESIZE_DEBOUNCE_MS};
pub use error::ConfigWarning;
#[cfg(feature = "toml")]
pub use error::OptionsError;
pub use memo::{layout_fingerprint, LayoutCache, LayoutKey, LayoutPlan, LAYOUT_CACHE_CAPACITY};
pub use options::{AutoplayKind, ResolvedOptions, SliderOptions};
pub use pagination::{
    active_dot_index, dot_count, PaginationState, PaginationSync, PaginationUpdate, DOT_CLICK_DEBOUNCE_MS,
};
pub use position::{
    round_half_up, Direction, Drift, Geometry, LoopSnap, PositionController, Step, TransformIntent,
    SLIDE_TRANSITION_MS,
};
pub use render::{RecordingAdapter, RenderAdapter, RenderCommand};
pub use timer::{TimerId, TimerKind, TimerQueue};
pub use viewport::{Breakpoint, BreakpointName, BreakpointTable, SlidesPerViewConfig, ViewportPolicy};

#[cfg(feature = "web")]
pub use render::web::{now_ms, DomRenderAdapter};
