//! Vizij Clock Core (engine-agnostic)
//!
//! Frame-driven animation clocks. A [`ClockManager`] is updated once per host
//! frame with the elapsed seconds; every playing [`Clock`] converts its
//! accumulated time into a normalized progress value (delays, repeats and
//! ping-pong reversal included) and fires its lifecycle hooks. Animations are
//! clocks whose ticked hook turns progress into a typed value via a
//! [`ValueSource`] and hands it to a caller-supplied apply sink.
//!
//! Everything here is single-threaded and synchronous: handles are `Rc`-based
//! and callbacks run inside [`ClockManager::update`].

pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod frames;
pub mod from_to;
pub mod ids;
pub mod interp;
pub mod keyframes;
pub mod manager;
pub mod signals;
pub mod state;
pub mod text;
pub mod timing;
pub mod value;

// Re-exports for consumers (hosts)
pub use animation::{Animated, Animation, ProgressTransform, ValueSource};
pub use clock::{Clock, ClockHooks, WeakClock};
pub use config::{ClockConfig, Repeat};
pub use error::ClockError;
pub use frames::{FrameAnimation, FrameSequence};
pub use from_to::{FromTo, FromToAnimation};
pub use ids::ClockId;
pub use interp::{Lerp, LerpFn};
pub use keyframes::{KeyframeAnimation, KeyframeTrack};
pub use manager::ClockManager;
pub use signals::{Observable, Signals, Timer};
pub use state::ClockState;
pub use text::{TextReveal, TextRevealAnimation};
pub use timing::{TickSignals, Timing};
pub use value::{Color, Keyframe, Rect, Transform, Vec2};

/// Clock core result type
pub type Result<T> = core::result::Result<T, ClockError>;
