//! ClockManager: the active set of playing clocks, driven once per frame.
//!
//! The manager is a cheap clonable handle around a shared registry. Clocks
//! hold a weak reference to it and add/remove themselves on start, stop,
//! pause and resume; host code only calls [`ClockManager::update`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::ids::{ClockId, IdAllocator, Ticket};

/// Object-safe view of a clock used by the registry.
pub(crate) trait Tickable {
    fn clock_id(&self) -> ClockId;
    /// Current membership ticket, `None` while not registered.
    fn ticket(&self) -> Option<Ticket>;
    fn tick(&self, elapsed: f32);
}

#[derive(Default)]
pub(crate) struct Registry {
    ids: IdAllocator,
    /// Registration order is tick order.
    active: Vec<(Ticket, Rc<dyn Tickable>)>,
}

impl Registry {
    #[inline]
    pub fn alloc_clock(&mut self) -> ClockId {
        self.ids.alloc_clock()
    }

    pub fn register(&mut self, clock: Rc<dyn Tickable>) -> Ticket {
        let ticket = self.ids.alloc_ticket();
        self.active.push((ticket, clock));
        ticket
    }

    pub fn unregister(&mut self, ticket: Ticket) -> bool {
        let before = self.active.len();
        self.active.retain(|(t, _)| *t != ticket);
        self.active.len() != before
    }
}

/// Drives every playing clock registered with it.
#[derive(Clone, Default)]
pub struct ClockManager {
    inner: Rc<RefCell<Registry>>,
}

impl ClockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick every playing clock once, in registration order.
    ///
    /// The set of clocks is captured when the pass begins. Clocks started by a
    /// callback during the pass are ticked from the next call on; clocks
    /// stopped or paused before their turn are skipped.
    pub fn update(&self, elapsed: f32) {
        let pass: Vec<(Ticket, Rc<dyn Tickable>)> = self.inner.borrow().active.clone();
        log::trace!("clock pass: dt={elapsed} active={}", pass.len());
        for (ticket, clock) in pass {
            if clock.ticket() == Some(ticket) {
                clock.tick(elapsed);
            }
        }
    }

    /// Number of clocks currently playing.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn contains(&self, id: ClockId) -> bool {
        self.inner
            .borrow()
            .active
            .iter()
            .any(|(_, c)| c.clock_id() == id)
    }

    pub(crate) fn registry(&self) -> Weak<RefCell<Registry>> {
        Rc::downgrade(&self.inner)
    }

    pub(crate) fn alloc_clock(&self) -> ClockId {
        self.inner.borrow_mut().alloc_clock()
    }
}

impl fmt::Debug for ClockManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockManager")
            .field("active", &self.active_count())
            .finish()
    }
}
