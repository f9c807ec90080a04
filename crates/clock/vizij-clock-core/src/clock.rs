//! Clock: shared handle over a [`Timing`] state machine plus lifecycle hooks.
//!
//! A `Clock<H>` is an `Rc` handle; clones refer to the same clock. `H`
//! supplies the hook behaviour: [`Signals`](crate::Signals) for plain timers,
//! [`Animated`](crate::Animated) for value-producing animations.
//!
//! Hooks run after the clock has released its own state, so listeners may
//! start, stop or reconfigure any clock (including this one) while being
//! called. Listeners that need the clock should capture a [`WeakClock`]; a
//! strong handle stored inside the clock's own hooks is a reference cycle.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::{ClockConfig, Repeat};
use crate::ids::{ClockId, Ticket};
use crate::manager::{ClockManager, Registry, Tickable};
use crate::state::ClockState;
use crate::timing::Timing;

/// Overridable lifecycle hooks; all default to no-ops.
///
/// Call order within one tick: `begin`, then either `looped` (once per loop
/// crossed) followed by `ticked`, or `ticked` followed by `completed`.
pub trait ClockHooks {
    fn begin(&self) {}
    fn ticked(&self, _progress: f32, _config: &ClockConfig) {}
    fn looped(&self) {}
    fn completed(&self) {}
}

impl ClockHooks for () {}

struct ClockCell<H> {
    id: ClockId,
    timing: RefCell<Timing>,
    ticket: Cell<Option<Ticket>>,
    registry: Weak<RefCell<Registry>>,
    hooks: H,
}

impl<H> ClockCell<H> {
    fn leave_registry(&self) {
        if let Some(ticket) = self.ticket.take() {
            if let Some(registry) = self.registry.upgrade() {
                registry.borrow_mut().unregister(ticket);
            }
        }
    }
}

impl<H: ClockHooks> Tickable for ClockCell<H> {
    fn clock_id(&self) -> ClockId {
        self.id
    }

    fn ticket(&self) -> Option<Ticket> {
        self.ticket.get()
    }

    fn tick(&self, elapsed: f32) {
        let (signals, config) = {
            let mut timing = self.timing.borrow_mut();
            let signals = timing.advance(elapsed);
            (signals, *timing.config())
        };

        if signals.completed {
            self.leave_registry();
            log::debug!("{} completed", self.id);
        }
        if signals.began {
            self.hooks.begin();
        }
        if signals.completed {
            if let Some(progress) = signals.progress {
                self.hooks.ticked(progress, &config);
            }
            self.hooks.completed();
            return;
        }
        for _ in 0..signals.loops {
            self.hooks.looped();
        }
        if let Some(progress) = signals.progress {
            self.hooks.ticked(progress, &config);
        }
    }
}

/// Shared handle to a clock bound to one [`ClockManager`].
pub struct Clock<H> {
    cell: Rc<ClockCell<H>>,
}

impl<H> Clone for Clock<H> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

/// Non-owning clock handle for use inside callbacks.
pub struct WeakClock<H> {
    cell: Weak<ClockCell<H>>,
}

impl<H> Clone for WeakClock<H> {
    fn clone(&self) -> Self {
        Self {
            cell: Weak::clone(&self.cell),
        }
    }
}

impl<H> WeakClock<H> {
    pub fn upgrade(&self) -> Option<Clock<H>> {
        self.cell.upgrade().map(|cell| Clock { cell })
    }
}

impl<H: ClockHooks + 'static> Clock<H> {
    /// Create a stopped clock with custom hooks.
    pub fn with_hooks(manager: &ClockManager, config: ClockConfig, hooks: H) -> Self {
        Self {
            cell: Rc::new(ClockCell {
                id: manager.alloc_clock(),
                timing: RefCell::new(Timing::new(config)),
                ticket: Cell::new(None),
                registry: manager.registry(),
                hooks,
            }),
        }
    }

    /// Builder-style config replacement.
    pub fn with_config(self, config: ClockConfig) -> Self {
        self.set_config(config);
        self
    }

    #[inline]
    pub fn id(&self) -> ClockId {
        self.cell.id
    }

    #[inline]
    pub fn hooks(&self) -> &H {
        &self.cell.hooks
    }

    pub fn downgrade(&self) -> WeakClock<H> {
        WeakClock {
            cell: Rc::downgrade(&self.cell),
        }
    }

    /// True while registered with the manager (i.e. being ticked).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.cell.ticket.get().is_some()
    }

    /// Restart from zero. Without a begin offset the clock ticks once
    /// immediately so its first value is available before the next update.
    pub fn start(&self) {
        let immediate = {
            let mut timing = self.cell.timing.borrow_mut();
            timing.reset();
            timing.set_state(ClockState::Playing);
            timing.config().begin_offset == 0.0
        };
        self.enter_registry();
        log::debug!("{} started", self.cell.id);
        if immediate {
            self.cell.tick(0.0);
        }
    }

    pub fn stop(&self) {
        self.cell.leave_registry();
        let previous = self.replace_state(ClockState::Stopped);
        if previous != ClockState::Stopped {
            log::debug!("{} stopped", self.cell.id);
        }
    }

    /// Freeze a playing clock, keeping its elapsed time and progress.
    pub fn pause(&self) {
        if !self.state().can_pause() {
            return;
        }
        self.cell.leave_registry();
        self.replace_state(ClockState::Paused);
        log::debug!("{} paused", self.cell.id);
    }

    /// Continue from the current playhead (no reset, unlike `start`).
    pub fn resume(&self) {
        if !self.state().can_resume() {
            return;
        }
        self.replace_state(ClockState::Playing);
        self.enter_registry();
        log::debug!("{} resumed", self.cell.id);
    }

    /// Zero elapsed time and progress without changing state.
    pub fn reset(&self) {
        self.cell.timing.borrow_mut().reset();
    }

    pub fn skip_to_begin(&self) {
        self.cell.timing.borrow_mut().skip_to_begin();
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.cell.timing.borrow().state()
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.cell.timing.borrow().progress()
    }

    /// Seconds accumulated since the last start or reset.
    #[inline]
    pub fn total_elapsed(&self) -> f32 {
        self.cell.timing.borrow().total_elapsed()
    }

    #[inline]
    pub fn config(&self) -> ClockConfig {
        *self.cell.timing.borrow().config()
    }

    pub fn set_config(&self, config: ClockConfig) {
        *self.cell.timing.borrow_mut().config_mut() = config;
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.config().duration
    }

    /// `duration` must be positive.
    pub fn set_duration(&self, duration: f32) {
        self.cell.timing.borrow_mut().config_mut().duration = duration;
    }

    #[inline]
    pub fn begin_offset(&self) -> f32 {
        self.config().begin_offset
    }

    pub fn set_begin_offset(&self, begin_offset: f32) {
        self.cell.timing.borrow_mut().config_mut().begin_offset = begin_offset.max(0.0);
    }

    #[inline]
    pub fn repeat(&self) -> Repeat {
        self.config().repeat
    }

    pub fn set_repeat(&self, repeat: Repeat) {
        self.cell.timing.borrow_mut().config_mut().repeat = repeat;
    }

    #[inline]
    pub fn auto_reverse(&self) -> bool {
        self.config().auto_reverse
    }

    pub fn set_auto_reverse(&self, auto_reverse: bool) {
        self.cell.timing.borrow_mut().config_mut().auto_reverse = auto_reverse;
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.repeat().is_forever()
    }

    pub fn set_looping(&self, looping: bool) {
        self.set_repeat(if looping {
            Repeat::Forever
        } else {
            Repeat::Count(0)
        });
    }

    /// Synchronous tick outside a manager pass; no-op unless playing.
    pub(crate) fn step(&self, elapsed: f32) {
        if self.state().is_playing() {
            self.cell.tick(elapsed.max(0.0));
        }
    }

    fn replace_state(&self, state: ClockState) -> ClockState {
        let mut timing = self.cell.timing.borrow_mut();
        let previous = timing.state();
        timing.set_state(state);
        previous
    }

    fn enter_registry(&self) {
        if self.cell.ticket.get().is_some() {
            return;
        }
        match self.cell.registry.upgrade() {
            Some(registry) => {
                let entry: Rc<dyn Tickable> = self.cell.clone();
                let ticket = registry.borrow_mut().register(entry);
                self.cell.ticket.set(Some(ticket));
            }
            None => log::warn!("{} has no manager; it will not be ticked", self.cell.id),
        }
    }
}

impl<H> fmt::Debug for Clock<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timing = self.cell.timing.borrow();
        f.debug_struct("Clock")
            .field("id", &self.cell.id)
            .field("state", &timing.state())
            .field("progress", &timing.progress())
            .field("total_elapsed", &timing.total_elapsed())
            .field("config", timing.config())
            .finish()
    }
}
