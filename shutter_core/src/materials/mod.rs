//! # Materials
//!
//! Line items of a shuttering bill of materials.
//!
//! Every [`MaterialItem`] may carry a [`MaterialFamily`] tag. The tag is set
//! when the item is built from the [`catalog`], and the cross-category
//! summary aggregates by tag instead of by matching on display names.
//!
//! ## Example
//!
//! ```rust
//! use shutter_core::materials::{MaterialFamily, MaterialKind};
//!
//! let boards = MaterialKind::WoodBoards.item(195, "Standard shuttering boards for slab surface");
//! assert_eq!(boards.name, "Wood Boards (2.5\" × 8')");
//! assert_eq!(boards.family, Some(MaterialFamily::WoodBoard));
//! ```

pub mod catalog;

pub use catalog::MaterialKind;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Material families totalled in the cross-category summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialFamily {
    WoodBoard,
    Prop,
    /// Steel beams / joists under the boards
    Beam,
    Bamboo,
    SteelSheet,
}

impl MaterialFamily {
    /// All families in summary order
    pub const ALL: [MaterialFamily; 5] = [
        MaterialFamily::WoodBoard,
        MaterialFamily::Bamboo,
        MaterialFamily::SteelSheet,
        MaterialFamily::Prop,
        MaterialFamily::Beam,
    ];

    /// Display label used in summaries
    pub fn label(self) -> &'static str {
        match self {
            MaterialFamily::WoodBoard => "Wood Boards",
            MaterialFamily::Prop => "Props",
            MaterialFamily::Beam => "Steel Beams",
            MaterialFamily::Bamboo => "Bamboo Poles",
            MaterialFamily::SteelSheet => "Steel Sheets",
        }
    }
}

impl fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of a bill of materials.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Adjustable Props",
///   "quantity": 40,
///   "unit": "pcs",
///   "description": "Steel props for slab support (8' standard)",
///   "size": "8' length",
///   "family": "prop"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialItem {
    /// Display name
    pub name: String,

    /// Whole units to procure (always rounded up)
    pub quantity: u64,

    /// Unit of measure ("pcs", "kg", "liters")
    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Summary family, if this item is totalled across categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<MaterialFamily>,
}

impl MaterialItem {
    /// Build a free-form item with no family tag
    pub fn new(name: impl Into<String>, quantity: u64, unit: impl Into<String>) -> Self {
        MaterialItem {
            name: name.into(),
            quantity,
            unit: unit.into(),
            description: None,
            size: None,
            family: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_family(mut self, family: MaterialFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// True if this item counts toward the given summary family
    pub fn is_family(&self, family: MaterialFamily) -> bool {
        self.family == Some(family)
    }
}
