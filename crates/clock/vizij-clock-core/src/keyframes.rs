//! Sparse keyframe animation.
//!
//! Keyframes live at integer frame indices; a frame index `i` sits at
//! `i / fps` seconds into the pass. Sampling at progress `p` looks at frame
//! `p * duration * fps`:
//! - `prev` = greatest keyed index <= frame, `next` = smallest keyed index > prev
//! - no `next`: hold `value[prev]` (no extrapolation)
//! - otherwise blend with `amount = (frame - prev) / (next - prev)`
//! - before the first keyframe: hold the first value
//! - empty table: no value

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use crate::animation::{Animated, Animation, ValueSource};
use crate::clock::Clock;
use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::interp::{Lerp, LerpFn};
use crate::manager::ClockManager;
use crate::value::Keyframe;
use crate::Result;

pub struct KeyframeTrack<T> {
    fps: u32,
    frames: BTreeMap<i32, T>,
    lerp: LerpFn<T>,
}

impl<T> KeyframeTrack<T> {
    /// `fps` must be positive.
    pub fn new(fps: u32, lerp: LerpFn<T>) -> Self {
        Self {
            fps,
            frames: BTreeMap::new(),
            lerp,
        }
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Insert a new keyframe; an occupied index is an error.
    pub fn add(&mut self, index: i32, value: T) -> Result<()> {
        if self.frames.contains_key(&index) {
            return Err(ClockError::DuplicateKeyframe { index });
        }
        self.frames.insert(index, value);
        Ok(())
    }

    /// Insert or replace, returning the replaced value.
    pub fn set(&mut self, index: i32, value: T) -> Option<T> {
        self.frames.insert(index, value)
    }

    pub fn remove(&mut self, index: i32) -> Option<T> {
        self.frames.remove(&index)
    }

    pub fn get(&self, index: i32) -> Option<&T> {
        self.frames.get(&index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Keyed indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.frames.keys().copied()
    }

    /// Fractional frame index at `seconds` into the pass.
    #[inline]
    pub fn frame_at(&self, seconds: f32) -> f32 {
        seconds * self.fps as f32
    }
}

impl<T: Clone> KeyframeTrack<T> {
    /// Sample at a fractional frame index.
    pub fn sample(&self, frame: f32) -> Option<T> {
        let cursor = frame.floor() as i32;
        let Some((&prev_index, prev)) = self.frames.range(..=cursor).next_back() else {
            return self.frames.values().next().cloned();
        };
        let next = self
            .frames
            .range((Bound::Excluded(prev_index), Bound::Unbounded))
            .next();
        match next {
            None => Some(prev.clone()),
            Some((&next_index, next)) => {
                let span = next_index as f32 - prev_index as f32;
                let amount = (frame - prev_index as f32) / span;
                Some((self.lerp)(prev, next, amount))
            }
        }
    }
}

impl<T: Clone> ValueSource<T> for KeyframeTrack<T> {
    fn value_at(&self, progress: f32, duration: f32) -> Option<T> {
        self.sample(self.frame_at(progress * duration))
    }
}

impl<T: fmt::Debug> fmt::Debug for KeyframeTrack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyframeTrack")
            .field("fps", &self.fps)
            .field("frames", &self.frames)
            .finish()
    }
}

pub type KeyframeAnimation<T> = Animation<T, KeyframeTrack<T>>;

impl<T: Clone + 'static> Clock<Animated<T, KeyframeTrack<T>>> {
    pub fn new(manager: &ClockManager, fps: u32) -> Self
    where
        T: Lerp,
    {
        Self::with_lerp(manager, fps, T::lerp)
    }

    pub fn with_lerp(manager: &ClockManager, fps: u32, lerp: LerpFn<T>) -> Self {
        Clock::with_source(
            manager,
            ClockConfig::default(),
            KeyframeTrack::new(fps, lerp),
        )
    }

    pub fn fps(&self) -> u32 {
        self.source().fps()
    }

    pub fn set_fps(&self, fps: u32) {
        self.source_mut().set_fps(fps);
    }

    pub fn add_keyframe(&self, index: i32, value: T) -> Result<()> {
        self.source_mut().add(index, value)
    }

    pub fn set_keyframe(&self, index: i32, value: T) -> Option<T> {
        self.source_mut().set(index, value)
    }

    /// `None` when nothing was keyed at `index`.
    pub fn remove_keyframe(&self, index: i32) -> Option<T> {
        self.source_mut().remove(index)
    }

    pub fn keyframe(&self, index: i32) -> Option<T> {
        self.source().get(index).cloned()
    }

    pub fn keyframe_count(&self) -> usize {
        self.source().len()
    }
}

impl Clock<Animated<Keyframe, KeyframeTrack<Keyframe>>> {
    /// Puppet-style animation keyed by each keyframe's own index.
    pub fn from_keyframes(
        manager: &ClockManager,
        fps: u32,
        keyframes: impl IntoIterator<Item = Keyframe>,
    ) -> Result<Self> {
        let mut track = KeyframeTrack::new(fps, Keyframe::lerp);
        for keyframe in keyframes {
            track.add(keyframe.index, keyframe)?;
        }
        Ok(Clock::with_source(manager, ClockConfig::default(), track))
    }
}
