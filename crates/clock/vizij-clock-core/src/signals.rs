//! Lifecycle listener lists (begin / looped / completed) and the plain Timer.

use std::cell::RefCell;
use std::fmt;

use crate::clock::{Clock, ClockHooks};
use crate::config::ClockConfig;
use crate::manager::ClockManager;

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
struct Listeners {
    slots: RefCell<Vec<Listener>>,
}

impl Listeners {
    fn push(&self, listener: Listener) {
        self.slots.borrow_mut().push(listener);
    }

    /// Call every listener in registration order. The list is moved out while
    /// running so listeners can register more; those run from the next emit.
    fn emit(&self) {
        let mut running = std::mem::take(&mut *self.slots.borrow_mut());
        for listener in running.iter_mut() {
            listener();
        }
        let mut slots = self.slots.borrow_mut();
        running.append(&mut slots);
        *slots = running;
    }

    fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

/// Public begin/looped/completed events of a clock.
#[derive(Default)]
pub struct Signals {
    begin: Listeners,
    looped: Listeners,
    completed: Listeners,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_begin(&self, f: impl FnMut() + 'static) {
        self.begin.push(Box::new(f));
    }

    pub fn on_looped(&self, f: impl FnMut() + 'static) {
        self.looped.push(Box::new(f));
    }

    pub fn on_completed(&self, f: impl FnMut() + 'static) {
        self.completed.push(Box::new(f));
    }

    pub(crate) fn emit_begin(&self) {
        self.begin.emit();
    }

    pub(crate) fn emit_looped(&self) {
        self.looped.emit();
    }

    pub(crate) fn emit_completed(&self) {
        self.completed.emit();
    }
}

impl fmt::Debug for Signals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signals")
            .field("begin", &self.begin.len())
            .field("looped", &self.looped.len())
            .field("completed", &self.completed.len())
            .finish()
    }
}

impl ClockHooks for Signals {
    fn begin(&self) {
        self.emit_begin();
    }

    fn looped(&self) {
        self.emit_looped();
    }

    fn completed(&self) {
        self.emit_completed();
    }
}

/// Hook types that expose [`Signals`].
pub trait Observable {
    fn signals(&self) -> &Signals;
}

impl Observable for Signals {
    fn signals(&self) -> &Signals {
        self
    }
}

impl<H: ClockHooks + Observable + 'static> Clock<H> {
    /// Fires once per start, on the tick where the begin offset is passed.
    pub fn on_begin(&self, f: impl FnMut() + 'static) {
        self.hooks().signals().on_begin(f);
    }

    /// Fires once per completed loop (a there-and-back pair under auto-reverse).
    pub fn on_looped(&self, f: impl FnMut() + 'static) {
        self.hooks().signals().on_looped(f);
    }

    /// Fires once when a finite clock runs out; the clock is already stopped.
    pub fn on_completed(&self, f: impl FnMut() + 'static) {
        self.hooks().signals().on_completed(f);
    }
}

/// A clock with lifecycle events and no value.
pub type Timer = Clock<Signals>;

impl Clock<Signals> {
    pub fn new(manager: &ClockManager, config: ClockConfig) -> Self {
        Clock::with_hooks(manager, config, Signals::new())
    }
}
