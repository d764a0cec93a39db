//! Flat, serializable view of the items for the renderer and the command line.

use serde::Serialize;

use super::Item;

/// Snapshot of a single item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSnapshot {
    pub id: u32,
    pub kind: &'static str,
    pub label: String,
    pub source: String,
    /// Top-left X.
    pub x: f64,
    /// Top-left Y.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id().0,
            kind: item.kind().as_str(),
            label: item.label().to_owned(),
            source: item.source().to_owned(),
            x: item.x(),
            y: item.y(),
            width: item.width(),
            height: item.height(),
        }
    }
}
