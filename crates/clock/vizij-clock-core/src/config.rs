//! Timing configuration shared by every clock.

use serde::{Deserialize, Serialize};

/// How many additional passes a clock plays after the first one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Play the first pass plus this many more.
    Count(u32),
    /// Loop until stopped; the clock never completes on its own.
    Forever,
}

impl Repeat {
    #[inline]
    pub fn is_forever(&self) -> bool {
        matches!(self, Self::Forever)
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Clock timing parameters.
///
/// `duration` must be positive; progress math divides by it and a zero or
/// negative duration is not checked at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Length of one pass in seconds.
    pub duration: f32,
    /// Seconds after start before progress begins advancing.
    #[serde(default)]
    pub begin_offset: f32,
    #[serde(default)]
    pub repeat: Repeat,
    /// Ping-pong playback: every logical loop is a forward and a reverse pass.
    #[serde(default)]
    pub auto_reverse: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            begin_offset: 0.0,
            repeat: Repeat::Count(0),
            auto_reverse: false,
        }
    }
}

impl ClockConfig {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_begin_offset(mut self, begin_offset: f32) -> Self {
        self.begin_offset = begin_offset.max(0.0);
        self
    }

    #[inline]
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[inline]
    pub fn with_auto_reverse(mut self, auto_reverse: bool) -> Self {
        self.auto_reverse = auto_reverse;
        self
    }

    /// Index of the last segment that still belongs to playback, or `None`
    /// when repeating forever.
    ///
    /// Under auto-reverse each repeat contributes two segments (there and
    /// back) and the first pass is itself a pair.
    pub fn total_segments(&self) -> Option<i64> {
        match self.repeat {
            Repeat::Forever => None,
            Repeat::Count(n) => {
                let per_loop = if self.auto_reverse { 2 } else { 1 };
                let tail = if self.auto_reverse { 1 } else { 0 };
                Some(i64::from(n) * per_loop + tail)
            }
        }
    }
}
