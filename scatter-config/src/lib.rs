//! Configuration for scatter.
//!
//! The config is a KDL document with three kinds of top-level nodes: `viewport`, `placement`
//! and any number of `item` nodes. The `item` nodes form the catalog, in document order.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use miette::{Context as _, IntoDiagnostic as _};
use tracing::debug;

mod catalog;
mod placement;
pub mod utils;

pub use catalog::{ItemKind, ItemTemplate};
pub use placement::{
    Placement, Viewport, DEFAULT_ANGLE_JITTER, DEFAULT_RADIUS, DEFAULT_RADIUS_JITTER,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
pub use utils::{Dimension, FloatOrInt};

/// Contents of the built-in config, used when no config file exists.
pub const DEFAULT_CONFIG: &str = include_str!("../default-config.kdl");

#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub viewport: Viewport,
    #[knuffel(child, default)]
    pub placement: Placement,
    #[knuffel(children(name = "item"))]
    pub catalog: Vec<ItemTemplate>,
}

impl Config {
    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        knuffel::parse(filename, text)
    }

    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("config.kdl");
        let config = Self::parse(filename, &contents).context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    /// Parses the built-in config.
    ///
    /// The built-in config is covered by tests, so this cannot fail at runtime.
    pub fn load_default() -> Self {
        Self::parse("default-config.kdl", DEFAULT_CONFIG)
            .expect("built-in default config must be valid")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load_default()
    }
}
