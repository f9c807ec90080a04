//! Timing state machine: accumulated time -> progress, loops and completion.
//!
//! `Timing` is the pure part of a clock. It owns no callbacks and knows
//! nothing about managers; `advance` reports what happened during the step
//! as [`TickSignals`] and the owning [`Clock`](crate::Clock) dispatches them.
//!
//! Model (all times in seconds):
//! - `effective = total_elapsed - begin_offset`
//! - `segment = floor(effective / duration)`; one segment is one pass
//! - under auto-reverse odd segments run backwards (progress mirrored)
//! - playback completes once `segment` exceeds `ClockConfig::total_segments`

use crate::config::ClockConfig;
use crate::state::ClockState;

/// What a single `advance` call produced, in dispatch order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickSignals {
    /// The begin offset was crossed during this step.
    pub began: bool,
    /// Number of completed loops crossed during this step.
    pub loops: u32,
    /// New progress, or `None` while still waiting out the begin offset.
    pub progress: Option<f32>,
    /// Playback finished; the state is already `Stopped`.
    pub completed: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Timing {
    config: ClockConfig,
    total_elapsed: f32,
    progress: f32,
    state: ClockState,
}

impl Timing {
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut ClockConfig {
        &mut self.config
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn total_elapsed(&self) -> f32 {
        self.total_elapsed
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    pub fn set_state(&mut self, state: ClockState) {
        self.state = state;
    }

    /// Zero accumulated time and progress; state is untouched.
    pub fn reset(&mut self) {
        self.total_elapsed = 0.0;
        self.progress = 0.0;
    }

    /// Jump past a pending begin offset.
    pub fn skip_to_begin(&mut self) {
        if self.total_elapsed < self.config.begin_offset {
            self.total_elapsed = self.config.begin_offset;
        }
    }

    /// Advance by `elapsed` seconds (must be non-negative).
    ///
    /// # Panics
    /// When the state is not `Playing`. Only playing clocks are ticked by the
    /// manager, so reaching this is a bug in the caller.
    pub fn advance(&mut self, elapsed: f32) -> TickSignals {
        assert!(
            self.state.is_playing(),
            "Timing::advance called while {}",
            self.state.name()
        );

        let mut out = TickSignals::default();
        let begin_offset = self.config.begin_offset;
        let old_total = self.total_elapsed;
        self.total_elapsed += elapsed;

        if self.total_elapsed < begin_offset {
            return out;
        }
        out.began = old_total <= begin_offset && begin_offset < self.total_elapsed;

        let duration = self.config.duration;
        let auto_reverse = self.config.auto_reverse;
        let effective = self.total_elapsed - begin_offset;
        let old_effective = old_total - begin_offset;
        // Segment and fraction come from one quotient so they agree at
        // pass boundaries.
        let quotient = effective / duration;
        let segment = quotient.floor() as i64;
        // Time spent waiting for the offset is not a segment of its own.
        let old_segment = ((old_effective / duration).floor() as i64).max(0);

        let finished = self
            .config
            .total_segments()
            .is_some_and(|last| segment > last);

        if finished {
            self.progress = if auto_reverse { 0.0 } else { 1.0 };
            self.state = ClockState::Stopped;
            out.progress = Some(self.progress);
            out.completed = true;
            return out;
        }

        let mut progress = (quotient - quotient.floor()).clamp(0.0, 1.0);
        if auto_reverse && segment % 2 == 1 {
            progress = 1.0 - progress;
        }
        self.progress = progress;

        for boundary in old_segment..segment {
            // Under auto-reverse a loop is a full there-and-back pair: only the
            // boundary entering an even segment counts.
            if !auto_reverse || boundary % 2 == 1 {
                out.loops += 1;
            }
        }
        out.progress = Some(progress);
        out
    }
}
