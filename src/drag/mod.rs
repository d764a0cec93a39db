//! Single-pointer dragging of items.
//!
//! The controller is either idle or holds exactly one [`DragSession`]. A session records
//! which item is held and the offset from the item's top-left corner to the pointer at the
//! moment it was picked up. The offset stays fixed for the whole gesture, so the item moves
//! rigidly with the pointer.
//!
//! Every operation is total. Starting a drag on an unknown item, or moving and releasing the
//! pointer while nothing is held, does nothing: on a live canvas these are clicks on empty
//! space and stray events racing with the end of a gesture, not errors.

use glam::DVec2;
use tracing::{debug, trace};

use crate::layout::snapshot::ItemSnapshot;
use crate::layout::{Item, ItemId};

mod grab;

pub use grab::{PointerGrab, PointerGrabs};


/// An ongoing drag gesture.
#[derive(Debug)]
pub struct DragSession {
    /// The item being moved.
    item_id: ItemId,
    /// Pointer position relative to the item's top-left corner at drag start.
    grab_offset: DVec2,
    /// Keeps motion and release events flowing to the controller until the session ends.
    _grab: PointerGrab,
}

impl DragSession {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn grab_offset(&self) -> DVec2 {
        self.grab_offset
    }
}

/// Owner of the item collection and of the drag state.
#[derive(Debug)]
pub struct DragController {
    items: Vec<Item>,
    drag: Option<DragSession>,
    grabs: PointerGrabs,
}

impl DragController {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_grabs(items, PointerGrabs::new())
    }

    /// Creates a controller that registers its grabs in an existing registry.
    pub fn with_grabs(items: Vec<Item>, grabs: PointerGrabs) -> Self {
        Self {
            items,
            drag: None,
            grabs,
        }
    }

    /// Items in render order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn snapshot(&self) -> Vec<ItemSnapshot> {
        self.items.iter().map(ItemSnapshot::from).collect()
    }

    pub fn grabs(&self) -> &PointerGrabs {
        &self.grabs
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Picks up an item.
    ///
    /// Any session already in progress is replaced. Returns `false` and leaves the state
    /// untouched if `id` is not a known item.
    pub fn begin_drag(&mut self, id: ItemId, pointer: DVec2) -> bool {
        if !pointer.is_finite() {
            trace!("ignoring drag start at non-finite position {pointer}");
            return false;
        }

        let Some(item) = self.item(id) else {
            trace!("ignoring drag start on unknown item {id}");
            return false;
        };
        let grab_offset = pointer - item.pos();
        if !grab_offset.is_finite() {
            trace!("ignoring drag start on item {id} with overflowing offset {grab_offset}");
            return false;
        }

        // Release the old grab before taking the new one so that at most one is ever active.
        if let Some(prev) = self.drag.take() {
            debug!("drag of item {} superseded by item {id}", prev.item_id);
        }

        self.drag = Some(DragSession {
            item_id: id,
            grab_offset,
            _grab: self.grabs.acquire(),
        });
        debug!("started dragging item {id} with offset {grab_offset}");

        true
    }

    /// Moves the held item so that the grab offset is preserved.
    ///
    /// Positions are not clamped; the item may leave the canvas entirely.
    pub fn update_drag(&mut self, pointer: DVec2) -> bool {
        let Some(drag) = &self.drag else {
            trace!("ignoring pointer motion without a drag");
            return false;
        };

        if !pointer.is_finite() {
            trace!("ignoring pointer motion to non-finite position {pointer}");
            return false;
        }

        let id = drag.item_id;
        let pos = pointer - drag.grab_offset;
        if !pos.is_finite() {
            trace!("ignoring pointer motion that would move item {id} to {pos}");
            return false;
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        item.set_pos(pos);
        trace!("moved item {id} to {pos}");

        true
    }

    /// Drops the held item where it is.
    pub fn end_drag(&mut self) -> bool {
        self.stop_drag("ended")
    }

    /// Ends the gesture because tracking was lost, e.g. pointer capture went away.
    ///
    /// The item keeps its last position, same as with [`DragController::end_drag`].
    pub fn cancel_drag(&mut self) -> bool {
        self.stop_drag("cancelled")
    }

    fn stop_drag(&mut self, how: &str) -> bool {
        match self.drag.take() {
            Some(drag) => {
                debug!("drag of item {} {how}", drag.item_id);
                true
            }
            None => {
                trace!("no drag to stop");
                false
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_invariants(&self) {
        use std::collections::HashSet;

        let mut ids = HashSet::new();
        for item in &self.items {
            assert!(ids.insert(item.id()), "item ids must be unique");
            assert!(item.pos().is_finite(), "item positions must be finite");
            assert!(item.width() > 0. && item.height() > 0.);
        }

        if let Some(drag) = &self.drag {
            assert!(
                self.item(drag.item_id).is_some(),
                "drag session must reference an existing item"
            );
            assert!(drag.grab_offset.is_finite());
        }

        // Tests give every controller its own registry.
        let active = usize::from(self.drag.is_some());
        assert_eq!(self.grabs.active(), active, "grab must live exactly as long as the drag");
        assert_eq!(
            self.grabs.acquired() - self.grabs.released(),
            active as u64,
            "every acquired grab must be released"
        );
    }
}
