//! One-shot elapsed-time timers.
//!
//! A [`Timers`] array holds `N` independent slots.  A slot is either idle or counting from the
//! instant it was started.  Checking a counting slot with [`Timers::is_elapsed()`] consumes it
//! once the duration has passed: the slot goes back to idle and must be started again.
//!
//! Slot indices outside the array are ignored by every operation.

use crate::Clock;

/// `N` one-shot timer slots measured against a [`Clock`].
///
/// Usually owned by a [`Sipo8`][crate::Sipo8] and reached through its `*_timer` methods or
/// [`timers_mut()`][crate::Sipo8::timers_mut], but usable on its own as well.
pub struct Timers<C, const N: usize> {
    clock: C,
    // start instant of each counting slot
    slots: [Option<u32>; N],
}

impl<C: Clock, const N: usize> Timers<C, N> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            slots: [None; N],
        }
    }

    /// Number of timer slots.
    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Start (or restart) `slot` from the current instant.
    pub fn start(&mut self, slot: u8) {
        let now = self.clock.now_ms();
        if let Some(s) = self.slots.get_mut(slot as usize) {
            *s = Some(now);
        }
    }

    /// Return `slot` to idle, discarding its start instant.
    pub fn stop(&mut self, slot: u8) {
        if let Some(s) = self.slots.get_mut(slot as usize) {
            *s = None;
        }
    }

    pub fn is_active(&self, slot: u8) -> bool {
        matches!(self.slots.get(slot as usize), Some(Some(_)))
    }

    /// Check whether `duration_ms` has passed since `slot` was started.
    ///
    /// Returns `true` at most once per start: an elapsed slot is returned to idle.  Idle slots
    /// never report elapsed.
    pub fn is_elapsed(&mut self, slot: u8, duration_ms: u32) -> bool {
        let now = self.clock.now_ms();
        let Some(s) = self.slots.get_mut(slot as usize) else {
            return false;
        };
        match *s {
            Some(start) if now.wrapping_sub(start) >= duration_ms => {
                *s = None;
                true
            }
            _ => false,
        }
    }
}

impl<C, const N: usize> Timers<C, N> {
    pub(crate) fn into_clock(self) -> C {
        self.clock
    }
}
