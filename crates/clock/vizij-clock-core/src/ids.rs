//! Identifiers and simple allocators for clocks and their registrations.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClockId(pub u32);

impl core::fmt::Display for ClockId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "clock#{}", self.0)
    }
}

/// One membership of a clock in a manager's active set.
///
/// Each register call mints a fresh ticket, so a clock that was stopped and
/// started again during an update pass no longer matches the ticket captured
/// at the start of that pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub(crate) struct Ticket(pub u64);

/// Monotonic allocator for ClockId and Ticket.
#[derive(Default, Debug)]
pub(crate) struct IdAllocator {
    next_clock: u32,
    next_ticket: u64,
}

impl IdAllocator {
    #[inline]
    pub fn alloc_clock(&mut self) -> ClockId {
        let id = ClockId(self.next_clock);
        self.next_clock = self.next_clock.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_ticket(&mut self) -> Ticket {
        let t = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        t
    }
}
