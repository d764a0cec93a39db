//! Pointer grabs: registration of the motion and button-release listeners.
//!
//! While an item is held, motion and release events have to reach the drag controller no
//! matter where the pointer goes. A grab stands for that registration. It is acquired when a
//! drag session starts and released when the [`PointerGrab`] guard is dropped, which happens
//! on every path that ends the session.

use std::cell::Cell;
use std::rc::Rc;

use tracing::trace;

#[derive(Debug, Default)]
struct GrabCounters {
    active: Cell<usize>,
    acquired: Cell<u64>,
    released: Cell<u64>,
}

/// Registry of active pointer grabs.
///
/// Cloning gives another handle to the same registry. Grabs are single-threaded, like the
/// event loop that delivers pointer events.
#[derive(Debug, Clone, Default)]
pub struct PointerGrabs {
    counters: Rc<GrabCounters>,
}

/// An active pointer grab. Dropping it releases the grab.
#[derive(Debug)]
#[must_use = "the grab is released as soon as it is dropped"]
pub struct PointerGrab {
    counters: Rc<GrabCounters>,
}

impl PointerGrabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> PointerGrab {
        let counters = &self.counters;
        counters.active.set(counters.active.get() + 1);
        counters.acquired.set(counters.acquired.get() + 1);
        trace!("pointer grab acquired, {} active", counters.active.get());

        PointerGrab {
            counters: self.counters.clone(),
        }
    }

    /// Whether motion and release events are currently being tracked.
    pub fn is_grabbed(&self) -> bool {
        self.active() > 0
    }

    pub fn active(&self) -> usize {
        self.counters.active.get()
    }

    /// Number of grabs acquired over the registry's lifetime.
    pub fn acquired(&self) -> u64 {
        self.counters.acquired.get()
    }

    /// Number of grabs released over the registry's lifetime.
    pub fn released(&self) -> u64 {
        self.counters.released.get()
    }
}

impl Drop for PointerGrab {
    fn drop(&mut self) {
        let counters = &self.counters;
        counters.active.set(counters.active.get().saturating_sub(1));
        counters.released.set(counters.released.get() + 1);
        trace!("pointer grab released, {} active", counters.active.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_is_released_on_drop() {
        let grabs = PointerGrabs::new();
        assert!(!grabs.is_grabbed());

        let grab = grabs.acquire();
        assert!(grabs.is_grabbed());
        assert_eq!(grabs.active(), 1);

        drop(grab);
        assert!(!grabs.is_grabbed());
        assert_eq!(grabs.acquired(), 1);
        assert_eq!(grabs.released(), 1);
    }

    #[test]
    fn clones_share_the_registry() {
        let grabs = PointerGrabs::new();
        let other = grabs.clone();

        let _grab = other.acquire();
        assert!(grabs.is_grabbed());
    }
}
