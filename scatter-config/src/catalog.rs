use crate::utils::Dimension;

/// Visual variant of a catalog item.
///
/// Only the renderer looks at this; placement and dragging treat all kinds the same.
#[derive(knuffel::DecodeScalar, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Button,
    Card,
    Input,
    Badge,
    Toggle,
    Dropdown,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Button => "button",
            ItemKind::Card => "card",
            ItemKind::Input => "input",
            ItemKind::Badge => "badge",
            ItemKind::Toggle => "toggle",
            ItemKind::Dropdown => "dropdown",
        }
    }
}

/// One `item` node: the fixed description an item is instantiated from.
#[derive(knuffel::Decode, Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    #[knuffel(argument)]
    pub label: String,
    #[knuffel(property)]
    pub kind: ItemKind,
    #[knuffel(property)]
    pub width: Dimension,
    #[knuffel(property)]
    pub height: Dimension,
    /// Where the item conceptually comes from, e.g. the component file it showcases.
    #[knuffel(property, default)]
    pub source: String,
}
