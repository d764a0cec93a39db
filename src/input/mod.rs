//! Routing of pointer events to the drag controller.
//!
//! Pointer-down is always delivered. Motion, release and cancellation are only delivered while
//! a pointer grab is active, which is exactly while a drag session exists. Anything arriving
//! outside of a grab is dropped.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::drag::DragController;
use crate::layout::{item_under, Item, ItemId};

/// A single-pointer input event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerEvent {
    /// Button pressed. `target` is the item under the pointer, if any.
    Down {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<ItemId>,
    },
    Motion {
        x: f64,
        y: f64,
    },
    Up,
    /// The pointer left the tracking surface or capture was lost.
    Cancel,
}

impl PointerEvent {
    /// Fills in the target of a pointer-down that doesn't have one by hit testing `items`.
    pub fn with_hit_target(self, items: &[Item]) -> Self {
        match self {
            PointerEvent::Down { x, y, target: None } => PointerEvent::Down {
                x,
                y,
                target: item_under(items, DVec2::new(x, y)).map(Item::id),
            },
            event => event,
        }
    }
}

impl DragController {
    /// Delivers one pointer event. Returns whether the controller state changed.
    pub fn process_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { x, y, target } => match target {
                Some(id) => self.begin_drag(id, DVec2::new(x, y)),
                None => {
                    trace!("pointer down on empty canvas");
                    false
                }
            },
            _ if !self.grabs().is_grabbed() => {
                trace!("dropping {event:?} outside of a pointer grab");
                false
            }
            PointerEvent::Motion { x, y } => self.update_drag(DVec2::new(x, y)),
            PointerEvent::Up => self.end_drag(),
            PointerEvent::Cancel => self.cancel_drag(),
        }
    }
}
