//! Animation: a clock whose ticks produce typed values.
//!
//! On every tick the (optionally eased) progress is handed to a
//! [`ValueSource`]; the result is cached as the current value and passed to
//! the apply sink. Sources must be pure in progress and their own
//! configuration so any easing function composes with them.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::clock::{Clock, ClockHooks};
use crate::config::ClockConfig;
use crate::manager::ClockManager;
use crate::signals::{Observable, Signals};

/// Easing applied to raw progress before sampling, e.g. `|p| p * p`.
pub type ProgressTransform = Rc<dyn Fn(f32) -> f32>;

type ApplyFn<T> = Box<dyn FnMut(&T)>;

/// Strategy that maps progress to a value.
pub trait ValueSource<T> {
    /// `duration` is the owning clock's pass length in seconds. `None` means
    /// the source has nothing to produce (the apply sink is not invoked).
    fn value_at(&self, progress: f32, duration: f32) -> Option<T>;
}

/// Hook state of an animation clock.
pub struct Animated<T, S> {
    source: RefCell<S>,
    transform: RefCell<Option<ProgressTransform>>,
    apply: RefCell<Option<ApplyFn<T>>>,
    current: RefCell<Option<T>>,
    /// Value produced while the sink was running (e.g. the sink restarted
    /// this animation); delivered once the sink returns.
    pending: RefCell<Option<T>>,
    delivering: Cell<bool>,
    signals: Signals,
}

impl<T, S> Animated<T, S> {
    pub fn new(source: S) -> Self {
        Self {
            source: RefCell::new(source),
            transform: RefCell::new(None),
            apply: RefCell::new(None),
            current: RefCell::new(None),
            pending: RefCell::new(None),
            delivering: Cell::new(false),
            signals: Signals::new(),
        }
    }

    fn deliver(&self, value: T) {
        let taken = self.apply.borrow_mut().take();
        let Some(mut apply) = taken else {
            if self.delivering.get() {
                // Only the latest nested value is kept.
                *self.pending.borrow_mut() = Some(value);
            }
            return;
        };
        self.delivering.set(true);
        let mut next = Some(value);
        while let Some(value) = next {
            apply(&value);
            next = self.pending.borrow_mut().take();
        }
        self.delivering.set(false);
        // Keep a sink installed by the callback itself.
        let mut slot = self.apply.borrow_mut();
        if slot.is_none() {
            *slot = Some(apply);
        }
    }
}

impl<T: Clone, S: ValueSource<T>> ClockHooks for Animated<T, S> {
    fn begin(&self) {
        self.signals.emit_begin();
    }

    fn ticked(&self, progress: f32, config: &ClockConfig) {
        let transform = self.transform.borrow().clone();
        let progress = transform.map_or(progress, |f| (*f)(progress));
        let value = self.source.borrow().value_at(progress, config.duration);
        let Some(value) = value else {
            return;
        };
        *self.current.borrow_mut() = Some(value.clone());
        self.deliver(value);
    }

    fn looped(&self) {
        self.signals.emit_looped();
    }

    fn completed(&self) {
        self.signals.emit_completed();
    }
}

impl<T, S> Observable for Animated<T, S> {
    fn signals(&self) -> &Signals {
        &self.signals
    }
}

impl<T, S: fmt::Debug> fmt::Debug for Animated<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animated")
            .field("source", &*self.source.borrow())
            .field("eased", &self.transform.borrow().is_some())
            .field("has_apply", &self.apply.borrow().is_some())
            .field("signals", &self.signals)
            .finish()
    }
}

/// A clock producing values of `T` from source `S`.
pub type Animation<T, S> = Clock<Animated<T, S>>;

impl<T: Clone + 'static, S: ValueSource<T> + 'static> Clock<Animated<T, S>> {
    pub fn with_source(manager: &ClockManager, config: ClockConfig, source: S) -> Self {
        Clock::with_hooks(manager, config, Animated::new(source))
    }

    pub fn set_progress_transform(&self, transform: impl Fn(f32) -> f32 + 'static) {
        *self.hooks().transform.borrow_mut() = Some(Rc::new(transform));
    }

    pub fn clear_progress_transform(&self) {
        self.hooks().transform.borrow_mut().take();
    }

    /// Install the sink that receives every computed value.
    pub fn set_apply(&self, apply: impl FnMut(&T) + 'static) {
        *self.hooks().apply.borrow_mut() = Some(Box::new(apply));
    }

    pub fn clear_apply(&self) {
        self.hooks().apply.borrow_mut().take();
    }

    /// Last value produced by a tick.
    pub fn current_value(&self) -> Option<T> {
        self.hooks().current.borrow().clone()
    }

    /// Sample the source directly at `progress`, bypassing easing and the sink.
    pub fn value_at(&self, progress: f32) -> Option<T> {
        let duration = self.duration();
        self.hooks().source.borrow().value_at(progress, duration)
    }

    pub fn source(&self) -> Ref<'_, S> {
        self.hooks().source.borrow()
    }

    /// Mutable access to the source; changes show from the next tick.
    pub fn source_mut(&self) -> RefMut<'_, S> {
        self.hooks().source.borrow_mut()
    }
}
