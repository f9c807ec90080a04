//! Frame-index animation for sprite sheets and flipbooks.
//!
//! The clock's duration tracks `frame_count / fps`; setting either through
//! the animation handle keeps them in step.

use crate::animation::{Animated, Animation, ValueSource};
use crate::clock::Clock;
use crate::config::ClockConfig;
use crate::manager::ClockManager;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    pub frame_count: usize,
    pub fps: u32,
}

impl FrameSequence {
    pub fn new(frame_count: usize, fps: u32) -> Self {
        Self { frame_count, fps }
    }

    /// Seconds needed to show every frame once. A zero fps counts as 1.
    pub fn duration(&self) -> f32 {
        self.frame_count as f32 / self.fps.max(1) as f32
    }
}

impl ValueSource<usize> for FrameSequence {
    fn value_at(&self, progress: f32, _duration: f32) -> Option<usize> {
        if self.frame_count == 0 {
            return None;
        }
        let frame = (progress.max(0.0) * self.frame_count as f32).floor() as usize;
        Some(frame.min(self.frame_count - 1))
    }
}

pub type FrameAnimation = Animation<usize, FrameSequence>;

impl Clock<Animated<usize, FrameSequence>> {
    pub fn new(manager: &ClockManager, frame_count: usize, fps: u32) -> Self {
        let sequence = FrameSequence::new(frame_count, fps);
        let config = match sequence.duration() {
            d if d > 0.0 => ClockConfig::new(d),
            _ => ClockConfig::default(),
        };
        Clock::with_source(manager, config, sequence)
    }

    pub fn frame_count(&self) -> usize {
        self.source().frame_count
    }

    pub fn set_frame_count(&self, frame_count: usize) {
        self.source_mut().frame_count = frame_count;
        self.sync_duration();
    }

    pub fn fps(&self) -> u32 {
        self.source().fps
    }

    pub fn set_fps(&self, fps: u32) {
        self.source_mut().fps = fps;
        self.sync_duration();
    }

    /// Frame shown by the last tick.
    pub fn current_frame(&self) -> Option<usize> {
        self.current_value()
    }

    /// Start playback and run straight to `frame` (clamped to the last one).
    /// Begin fires on the way, as for any step past the begin offset.
    pub fn start_at_frame(&self, frame: usize) {
        self.start();
        let frame = frame.min(self.frame_count().saturating_sub(1));
        let fps = self.fps().max(1) as f32;
        // Land mid-frame; the exact frame start can round down to the previous one.
        let target = self.begin_offset() + (frame as f32 + 0.5) / fps;
        self.step(target - self.total_elapsed());
    }

    fn sync_duration(&self) {
        let duration = self.source().duration();
        // A zero-length pass would divide by zero when sampled.
        if duration > 0.0 {
            self.set_duration(duration);
        }
    }
}
