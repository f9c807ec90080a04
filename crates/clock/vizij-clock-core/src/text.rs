//! Typewriter-style text reveal.

use crate::animation::{Animated, Animation, ValueSource};
use crate::clock::Clock;
use crate::config::ClockConfig;
use crate::manager::ClockManager;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextReveal {
    /// Always shown in full ahead of the revealed part.
    pub prefix: String,
    pub text: String,
}

impl TextReveal {
    pub fn new(prefix: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            text: text.into(),
        }
    }

    /// Characters (not bytes) of `text` visible at `progress`.
    pub fn visible_chars(&self, progress: f32) -> usize {
        let count = self.text.chars().count();
        let shown = (count as f32 * progress.clamp(0.0, 1.0)).floor() as usize;
        shown.min(count)
    }
}

impl ValueSource<String> for TextReveal {
    fn value_at(&self, progress: f32, _duration: f32) -> Option<String> {
        let mut out = String::with_capacity(self.prefix.len() + self.text.len());
        out.push_str(&self.prefix);
        out.extend(self.text.chars().take(self.visible_chars(progress)));
        Some(out)
    }
}

pub type TextRevealAnimation = Animation<String, TextReveal>;

impl Clock<Animated<String, TextReveal>> {
    pub fn new(manager: &ClockManager, prefix: impl Into<String>, text: impl Into<String>) -> Self {
        Clock::with_source(
            manager,
            ClockConfig::default(),
            TextReveal::new(prefix, text),
        )
    }

    pub fn prefix(&self) -> String {
        self.source().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.source_mut().prefix = prefix.into();
    }

    pub fn text(&self) -> String {
        self.source().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.source_mut().text = text.into();
    }
}
