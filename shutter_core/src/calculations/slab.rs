//! # Slab Shuttering
//!
//! Horizontal formwork for floor and roof slabs. On top of the shared
//! families a slab gets steel shuttering sheets as a wood alternative,
//! 4" nails for fixing boards to the joists, and binding wire.

use crate::errors::CalcResult;
use crate::materials::{MaterialItem, MaterialKind};
use crate::units::{multiply, round_up};

use super::rules::{CategoryContext, CategoryRules, CoreDescriptions, CoreQuantities};

/// Coverage of one 4' × 8' steel sheet (sq ft)
pub const STEEL_SHEET_AREA_SQFT: f64 = 32.0;

/// 4" nails per wood board
pub const NAILS_PER_BOARD: u64 = 8;

/// Binding wire per sq ft of slab (kg)
pub const BINDING_WIRE_KG_PER_SQFT: f64 = 0.05;

/// Slab calculator hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct SlabRules;

impl CategoryRules for SlabRules {
    fn descriptions(&self) -> CoreDescriptions {
        CoreDescriptions {
            wood_boards: "Standard shuttering boards for slab surface",
            props: "Steel props for slab support (8' standard)",
            beams: "Support beams under wood boards",
            bamboo: "Secondary support and bracing",
        }
    }

    fn trailing_items(&self, ctx: &CategoryContext<'_>, core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        let area = ctx.area_sqft;
        Ok(vec![
            MaterialKind::SteelSheets.item(
                round_up(area / STEEL_SHEET_AREA_SQFT)?,
                "Alternative to wood for smooth finish",
            ),
            MaterialKind::Nails4In.item(
                multiply(core.wood_boards, NAILS_PER_BOARD)?,
                "For securing boards to beams",
            ),
            MaterialKind::BindingWire.item(
                round_up(area * BINDING_WIRE_KG_PER_SQFT)?,
                "For tying and securing",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::rules::estimate;
    use crate::calculations::Category;
    use crate::settings::EstimatorSettings;

    fn quantities(area_sqft: f64) -> Vec<(String, u64)> {
        let settings = EstimatorSettings::default();
        let ctx = CategoryContext::new(Category::Slab, area_sqft, &settings);
        estimate(&SlabRules, &ctx)
            .unwrap()
            .materials
            .into_iter()
            .map(|m| (m.name, m.quantity))
            .collect()
    }

    #[test]
    fn test_slab_materials_for_500_sqft() {
        let items = quantities(500.0);
        let expected = [
            ("Wood Boards (2.5\" × 8')", 195),
            ("Adjustable Props", 40),
            ("Steel Beams / Joists", 75),
            ("Bamboo Poles", 60),
            ("Steel Shuttering Sheets (4' × 8')", 16),
            ("Nails (4\")", 1560),
            ("Binding Wire", 25),
        ];
        assert_eq!(items.len(), expected.len());
        for ((name, qty), (exp_name, exp_qty)) in items.iter().zip(expected) {
            assert_eq!(name, exp_name);
            assert_eq!(*qty, exp_qty, "quantity for {}", name);
        }
    }

    #[test]
    fn test_binding_wire_unit() {
        let settings = EstimatorSettings::default();
        let ctx = CategoryContext::new(Category::Slab, 500.0, &settings);
        let result = estimate(&SlabRules, &ctx).unwrap();
        let wire = result.materials.last().unwrap();
        assert_eq!(wire.unit, "kg");
        assert!(result.remarks.is_empty());
    }

    #[test]
    fn test_tiny_slab_rounds_everything_up() {
        for (name, qty) in quantities(0.25) {
            assert!(qty >= 1, "{} should be at least one unit", name);
        }
    }
}
