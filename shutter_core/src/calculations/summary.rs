//! # Material Summary
//!
//! Cross-category totals for the five material families. The summary is a
//! derived view: it is always recomputed from the category line items, so
//! it cannot drift from the detailed tables. Engine quantities are capped at
//! [`MAX_QUANTITY`](crate::units::MAX_QUANTITY), so the four-way sums never
//! reach the saturation point.

use serde::{Deserialize, Serialize};

use crate::materials::MaterialFamily;

use super::CategoryResult;

/// Totals per material family across all categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSummary {
    pub total_wood_boards: u64,
    pub total_bamboo: u64,
    pub total_steel_sheets: u64,
    pub total_props: u64,
    pub total_beams: u64,
}

impl MaterialSummary {
    /// Sum the first item of each family in every category.
    pub fn from_categories(categories: &[CategoryResult]) -> Self {
        let sum = |family| family_total(categories, family);
        MaterialSummary {
            total_wood_boards: sum(MaterialFamily::WoodBoard),
            total_bamboo: sum(MaterialFamily::Bamboo),
            total_steel_sheets: sum(MaterialFamily::SteelSheet),
            total_props: sum(MaterialFamily::Prop),
            total_beams: sum(MaterialFamily::Beam),
        }
    }

    /// Total for one family
    pub fn total(&self, family: MaterialFamily) -> u64 {
        match family {
            MaterialFamily::WoodBoard => self.total_wood_boards,
            MaterialFamily::Bamboo => self.total_bamboo,
            MaterialFamily::SteelSheet => self.total_steel_sheets,
            MaterialFamily::Prop => self.total_props,
            MaterialFamily::Beam => self.total_beams,
        }
    }
}

fn family_total(categories: &[CategoryResult], family: MaterialFamily) -> u64 {
    categories
        .iter()
        .filter_map(|category| category.materials.iter().find(|m| m.is_family(family)))
        .map(|item| item.quantity)
        .fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::Category;
    use crate::materials::{MaterialItem, MaterialKind};

    fn category(category: Category, materials: Vec<MaterialItem>) -> CategoryResult {
        CategoryResult {
            category,
            materials,
            total_area: 0,
            notes: String::new(),
            remarks: Vec::new(),
        }
    }

    #[test]
    fn test_sums_tagged_items_only() {
        let categories = vec![
            category(
                Category::Slab,
                vec![
                    MaterialKind::WoodBoards.item(10, "boards"),
                    MaterialKind::SteelSheets.item(3, "sheets"),
                ],
            ),
            category(
                Category::Wall,
                vec![
                    MaterialKind::WoodBoards.item(5, "boards"),
                    MaterialKind::WallPanels.item(7, "panels"),
                ],
            ),
        ];
        let summary = MaterialSummary::from_categories(&categories);
        assert_eq!(summary.total_wood_boards, 15);
        assert_eq!(summary.total_steel_sheets, 3);
        assert_eq!(summary.total_props, 0);
    }

    #[test]
    fn test_untagged_name_lookalike_ignored() {
        // A free-form item that happens to share a name is not counted
        let categories = vec![category(
            Category::Beam,
            vec![MaterialItem::new("Adjustable Props", 99, "pcs")],
        )];
        assert_eq!(MaterialSummary::from_categories(&categories).total_props, 0);
    }

    #[test]
    fn test_totals_saturate() {
        let categories: Vec<CategoryResult> = Category::ALL
            .iter()
            .map(|&c| category(c, vec![MaterialKind::BambooPoles.item(u64::MAX / 2, "poles")]))
            .collect();
        assert_eq!(MaterialSummary::from_categories(&categories).total_bamboo, u64::MAX);
    }

    #[test]
    fn test_total_by_family() {
        let summary = MaterialSummary {
            total_wood_boards: 1,
            total_bamboo: 2,
            total_steel_sheets: 3,
            total_props: 4,
            total_beams: 5,
        };
        assert_eq!(summary.total(MaterialFamily::Prop), 4);
        assert_eq!(summary.total(MaterialFamily::Beam), 5);
    }

    #[test]
    fn test_serialization_keys() {
        let json = serde_json::to_string(&MaterialSummary::default()).unwrap();
        assert!(json.contains("\"totalWoodBoards\":0"));
        assert!(json.contains("\"totalSteelSheets\":0"));
    }
}
