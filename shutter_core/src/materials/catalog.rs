//! # Material Catalog
//!
//! Fixed name, unit, size and family for every line item the category
//! calculators emit. Descriptions vary by category and are supplied at the
//! call site.
//!
//! Names are part of the output contract (renderers and exports key on
//! them), so they live here once rather than as literals in each calculator.

use serde::{Deserialize, Serialize};

use super::{MaterialFamily, MaterialItem};

/// Catalogued shuttering materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialKind {
    WoodBoards,
    AdjustableProps,
    SteelBeams,
    BambooPoles,
    SteelSheets,
    Nails3In,
    Nails4In,
    Nails5In,
    BindingWire,
    BeamBottomPlates,
    ColumnClamps,
    CornerAngles,
    ReleaseAgent,
    WallPanels,
    TieRods,
}

impl MaterialKind {
    /// Display name, verbatim as rendered and exported
    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::WoodBoards => "Wood Boards (2.5\" × 8')",
            MaterialKind::AdjustableProps => "Adjustable Props",
            MaterialKind::SteelBeams => "Steel Beams / Joists",
            MaterialKind::BambooPoles => "Bamboo Poles",
            MaterialKind::SteelSheets => "Steel Shuttering Sheets (4' × 8')",
            MaterialKind::Nails3In => "Nails (3\")",
            MaterialKind::Nails4In => "Nails (4\")",
            MaterialKind::Nails5In => "Nails (5\")",
            MaterialKind::BindingWire => "Binding Wire",
            MaterialKind::BeamBottomPlates => "Beam Bottom Plates",
            MaterialKind::ColumnClamps => "Column Clamps / Yokes",
            MaterialKind::CornerAngles => "Corner Angles (Steel)",
            MaterialKind::ReleaseAgent => "Release Agent / Oil",
            MaterialKind::WallPanels => "Wall Panels (Steel)",
            MaterialKind::TieRods => "Tie Rods",
        }
    }

    /// Unit of measure
    pub fn unit(self) -> &'static str {
        match self {
            MaterialKind::BindingWire => "kg",
            MaterialKind::ReleaseAgent => "liters",
            _ => "pcs",
        }
    }

    /// Stock size, where one applies
    pub fn size(self) -> Option<&'static str> {
        match self {
            MaterialKind::WoodBoards => Some("2.5\" × 8'"),
            MaterialKind::AdjustableProps
            | MaterialKind::SteelBeams
            | MaterialKind::CornerAngles => Some("8' length"),
            MaterialKind::BambooPoles => Some("12' length, 3\" diameter"),
            MaterialKind::SteelSheets => Some("4' × 8'"),
            MaterialKind::BeamBottomPlates => Some("1.5\" × 9\" × 8'"),
            MaterialKind::ColumnClamps => Some("Adjustable"),
            MaterialKind::WallPanels => Some("2' × 8' or 3' × 8'"),
            MaterialKind::TieRods => Some("With cones"),
            MaterialKind::Nails3In
            | MaterialKind::Nails4In
            | MaterialKind::Nails5In
            | MaterialKind::BindingWire
            | MaterialKind::ReleaseAgent => None,
        }
    }

    /// Summary family; `None` for items not totalled across categories
    pub fn family(self) -> Option<MaterialFamily> {
        match self {
            MaterialKind::WoodBoards => Some(MaterialFamily::WoodBoard),
            MaterialKind::AdjustableProps => Some(MaterialFamily::Prop),
            MaterialKind::SteelBeams => Some(MaterialFamily::Beam),
            MaterialKind::BambooPoles => Some(MaterialFamily::Bamboo),
            MaterialKind::SteelSheets => Some(MaterialFamily::SteelSheet),
            _ => None,
        }
    }

    /// Build a line item of this kind
    pub fn item(self, quantity: u64, description: impl Into<String>) -> MaterialItem {
        MaterialItem {
            name: self.name().to_string(),
            quantity,
            unit: self.unit().to_string(),
            description: Some(description.into()),
            size: self.size().map(str::to_string),
            family: self.family(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_shared_families_are_tagged() {
        assert_eq!(MaterialKind::WallPanels.family(), None);
        assert_eq!(MaterialKind::CornerAngles.family(), None);
        assert_eq!(MaterialKind::BeamBottomPlates.family(), None);
        assert_eq!(MaterialKind::SteelSheets.family(), Some(MaterialFamily::SteelSheet));
        assert_eq!(MaterialKind::SteelBeams.family(), Some(MaterialFamily::Beam));
    }

    #[test]
    fn test_units() {
        assert_eq!(MaterialKind::BindingWire.unit(), "kg");
        assert_eq!(MaterialKind::ReleaseAgent.unit(), "liters");
        assert_eq!(MaterialKind::TieRods.unit(), "pcs");
    }

    #[test]
    fn test_item() {
        let item = MaterialKind::Nails5In.item(12, "Heavy nails for beam bottom");
        assert_eq!(item.name, "Nails (5\")");
        assert_eq!(item.size, None);
        assert_eq!(item.description.as_deref(), Some("Heavy nails for beam bottom"));
    }
}
