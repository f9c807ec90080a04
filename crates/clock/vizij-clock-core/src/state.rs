use serde::{Deserialize, Serialize};

/// Playback state of a clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClockState {
    /// Clock is stopped (initial state)
    #[default]
    Stopped,
    /// Clock is registered with its manager and advancing
    Playing,
    /// Clock is frozen; elapsed time and progress are preserved
    Paused,
}

impl ClockState {
    /// Get the name of this state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if the clock can be resumed
    #[inline]
    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Paused | Self::Stopped)
    }

    /// Check if the clock can be paused
    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Playing)
    }
}
