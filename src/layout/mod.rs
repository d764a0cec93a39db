//! Initial placement of catalog items.
//!
//! Items are spread around a circle centered in the viewport. Item `i` of `N` starts from the
//! angle `i / N * 2π - π/2`, so the first item sits at the top and the rest follow clockwise
//! (canvas Y grows downwards). Both the radius and the angle are then perturbed by independent
//! uniform jitter, drawn separately for every item, so that the result looks scattered rather
//! than regular.
//!
//! The random source is passed in by the caller. Seeding it makes the layout reproducible;
//! nothing is cached between calls.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;

use glam::DVec2;
use scatter_config::{Config, Dimension, ItemKind, ItemTemplate, Placement, Viewport};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod snapshot;

#[cfg(test)]
mod tests;

/// Stable identifier of an item, unique for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positioned element on the canvas.
///
/// Identity, size and metadata are fixed at creation. Only the position changes afterwards,
/// and only through the drag controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    /// Top-left corner in canvas coordinates. Not clamped to the viewport.
    pos: DVec2,
    width: Dimension,
    height: Dimension,
    kind: ItemKind,
    label: String,
    source: String,
}

impl Item {
    pub fn new(id: ItemId, pos: DVec2, template: &ItemTemplate) -> Self {
        Self {
            id,
            pos,
            width: template.width,
            height: template.height,
            kind: template.kind,
            label: template.label.clone(),
            source: template.source.clone(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width(), self.height())
    }

    /// Visual centroid of the item.
    pub fn center(&self) -> DVec2 {
        self.pos + self.size() / 2.
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Opaque tag naming where the item comes from. Display only.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Checks whether a canvas point falls within the item's rectangle.
    pub fn contains(&self, point: DVec2) -> bool {
        let rel = point - self.pos;
        (0. ..self.width()).contains(&rel.x) && (0. ..self.height()).contains(&rel.y)
    }

    pub(crate) fn set_pos(&mut self, pos: DVec2) {
        self.pos = pos;
    }
}

/// Returns the topmost item under `point`.
///
/// Items later in the sequence are drawn above earlier ones, so the search goes backwards.
pub fn item_under(items: &[Item], point: DVec2) -> Option<&Item> {
    items.iter().rev().find(|item| item.contains(point))
}

/// Circular scatter placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGenerator {
    /// Viewport size; the circle is centered at its midpoint.
    pub viewport: DVec2,
    /// Base distance from the center to each item's centroid.
    pub radius: f64,
    /// Radius jitter is drawn from `[-radius_jitter, radius_jitter]`.
    pub radius_jitter: f64,
    /// Angle jitter in radians is drawn from `[-angle_jitter, angle_jitter]`.
    pub angle_jitter: f64,
}

impl LayoutGenerator {
    pub fn new(viewport: DVec2, radius: f64) -> Self {
        Self {
            viewport,
            radius,
            radius_jitter: scatter_config::DEFAULT_RADIUS_JITTER,
            angle_jitter: scatter_config::DEFAULT_ANGLE_JITTER,
        }
    }

    pub fn from_config(viewport: &Viewport, placement: &Placement) -> Self {
        Self {
            viewport: DVec2::new(viewport.width.0, viewport.height.0),
            radius: placement.radius.0,
            radius_jitter: placement.radius_jitter.0,
            angle_jitter: placement.angle_jitter.0,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.viewport / 2.
    }

    /// Unperturbed angle of item `idx` out of `count`.
    pub fn base_angle(idx: usize, count: usize) -> f64 {
        idx as f64 / count as f64 * TAU - FRAC_PI_2
    }

    /// Creates one item per template, in catalog order.
    ///
    /// Ids are assigned `1..=N` in catalog order.
    pub fn generate(&self, catalog: &[ItemTemplate], rng: &mut fastrand::Rng) -> Vec<Item> {
        let count = catalog.len();
        let center = self.center();

        let items: Vec<Item> = catalog
            .iter()
            .enumerate()
            .map(|(idx, template)| {
                let radius = self.radius + symmetric(rng, self.radius_jitter);
                let angle = Self::base_angle(idx, count) + symmetric(rng, self.angle_jitter);

                let centroid = center + DVec2::from_angle(angle) * radius;
                let size = DVec2::new(template.width.get(), template.height.get());

                let id = ItemId(idx as u32 + 1);
                Item::new(id, centroid - size / 2., template)
            })
            .collect();

        debug!("placed {count} items around {center}");
        items
    }
}

/// Generates the initial items for a config, seeding the jitter from the config if requested.
pub fn generate_from_config(config: &Config) -> Vec<Item> {
    let generator = LayoutGenerator::from_config(&config.viewport, &config.placement);
    let mut rng = match config.placement.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    generator.generate(&config.catalog, &mut rng)
}

/// Uniform sample from `[-half_width, half_width)`.
fn symmetric(rng: &mut fastrand::Rng, half_width: f64) -> f64 {
    (rng.f64() - 0.5) * 2. * half_width
}
