//! Two-point animation: `from` -> `to` over one pass.

use std::fmt;
use std::rc::Rc;

use crate::animation::{Animated, Animation, ValueSource};
use crate::clock::Clock;
use crate::config::ClockConfig;
use crate::interp::{Lerp, LerpFn};
use crate::manager::ClockManager;

type InterpolateFn<T> = Rc<dyn Fn(&T, &T, f32) -> T>;

pub struct FromTo<T> {
    pub from: T,
    pub to: T,
    lerp: LerpFn<T>,
    /// Overrides `lerp` when set.
    interpolate: Option<InterpolateFn<T>>,
}

impl<T> FromTo<T> {
    pub fn new(from: T, to: T, lerp: LerpFn<T>) -> Self {
        Self {
            from,
            to,
            lerp,
            interpolate: None,
        }
    }

    pub fn set_interpolate(&mut self, f: impl Fn(&T, &T, f32) -> T + 'static) {
        self.interpolate = Some(Rc::new(f));
    }

    pub fn clear_interpolate(&mut self) {
        self.interpolate = None;
    }
}

impl<T: Lerp> FromTo<T> {
    pub fn linear(from: T, to: T) -> Self {
        Self::new(from, to, T::lerp)
    }
}

impl<T> ValueSource<T> for FromTo<T> {
    fn value_at(&self, progress: f32, _duration: f32) -> Option<T> {
        Some(match &self.interpolate {
            Some(f) => f(&self.from, &self.to, progress),
            None => (self.lerp)(&self.from, &self.to, progress),
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for FromTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromTo")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("custom_interpolate", &self.interpolate.is_some())
            .finish()
    }
}

pub type FromToAnimation<T> = Animation<T, FromTo<T>>;

impl<T: Clone + 'static> Clock<Animated<T, FromTo<T>>> {
    /// One-second animation using `T`'s own [`Lerp`].
    pub fn new(manager: &ClockManager, from: T, to: T) -> Self
    where
        T: Lerp,
    {
        Self::with_lerp(manager, from, to, T::lerp)
    }

    /// Animation for types without a `Lerp` impl, or with a different blend.
    pub fn with_lerp(manager: &ClockManager, from: T, to: T, lerp: LerpFn<T>) -> Self {
        Clock::with_source(
            manager,
            ClockConfig::default(),
            FromTo::new(from, to, lerp),
        )
    }

    pub fn from(&self) -> T {
        self.source().from.clone()
    }

    pub fn set_from(&self, from: T) {
        self.source_mut().from = from;
    }

    pub fn to(&self) -> T {
        self.source().to.clone()
    }

    pub fn set_to(&self, to: T) {
        self.source_mut().to = to;
    }

    pub fn set_interpolate(&self, f: impl Fn(&T, &T, f32) -> T + 'static) {
        self.source_mut().set_interpolate(f);
    }

    pub fn clear_interpolate(&self) {
        self.source_mut().clear_interpolate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_interpolate_overrides_lerp() {
        let mut src = FromTo::linear(0.0f32, 10.0);
        assert_eq!(src.value_at(0.5, 1.0), Some(5.0));
        src.set_interpolate(|a, b, p| if p < 0.5 { *a } else { *b });
        assert_eq!(src.value_at(0.25, 1.0), Some(0.0));
        assert_eq!(src.value_at(0.75, 1.0), Some(10.0));
        src.clear_interpolate();
        assert_eq!(src.value_at(0.75, 1.0), Some(7.5));
    }
}
