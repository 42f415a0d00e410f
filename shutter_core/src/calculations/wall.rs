//! # Wall Shuttering
//!
//! Vertical formwork for walls. Wall length is derived from the allocated
//! area assuming a 10 ft wall, then split into 8' panels held by two tie
//! rods each.

use crate::errors::CalcResult;
use crate::materials::{MaterialItem, MaterialKind};
use crate::units::{multiply, round_up};

use super::rules::{CategoryContext, CategoryRules, CoreDescriptions, CoreQuantities};

/// Assumed wall height (ft)
pub const WALL_HEIGHT_FT: f64 = 10.0;

/// Width of one wall panel run (ft)
pub const PANEL_LENGTH_FT: f64 = 8.0;

pub const TIE_RODS_PER_PANEL: u64 = 2;

/// 3" nails per wood board
pub const NAILS_PER_BOARD: u64 = 5;

/// Number of 8' wall panels for a wall formwork area.
pub fn panels_needed(area_sqft: f64) -> CalcResult<u64> {
    let wall_length_ft = area_sqft / WALL_HEIGHT_FT;
    round_up(wall_length_ft / PANEL_LENGTH_FT)
}

/// Wall calculator hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct WallRules;

impl CategoryRules for WallRules {
    fn descriptions(&self) -> CoreDescriptions {
        CoreDescriptions {
            wood_boards: "For wall surface",
            props: "Wall alignment supports",
            beams: "Horizontal walers",
            bamboo: "Wall bracing",
        }
    }

    fn lead_items(&self, ctx: &CategoryContext<'_>, _core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        Ok(vec![MaterialKind::WallPanels.item(
            panels_needed(ctx.area_sqft)?,
            "Steel panels for wall (optional)",
        )])
    }

    fn trailing_items(&self, ctx: &CategoryContext<'_>, core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        Ok(vec![
            MaterialKind::TieRods.item(
                multiply(panels_needed(ctx.area_sqft)?, TIE_RODS_PER_PANEL)?,
                "To hold wall forms together",
            ),
            MaterialKind::Nails3In.item(
                multiply(core.wood_boards, NAILS_PER_BOARD)?,
                "For wall formwork",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::rules::estimate;
    use crate::calculations::Category;
    use crate::materials::MaterialFamily;
    use crate::settings::EstimatorSettings;

    #[test]
    fn test_panels_needed() {
        // 100 sq ft / 10 ft = 10 ft of wall -> 2 panels
        assert_eq!(panels_needed(100.0).unwrap(), 2);
        assert_eq!(panels_needed(80.0).unwrap(), 1);
        assert_eq!(panels_needed(80.1).unwrap(), 2);
    }

    #[test]
    fn test_wall_materials_for_100_sqft() {
        let settings = EstimatorSettings::default();
        let ctx = CategoryContext::new(Category::Wall, 100.0, &settings);
        let result = estimate(&WallRules, &ctx).unwrap();

        let quantities: Vec<u64> = result.materials.iter().map(|m| m.quantity).collect();
        assert_eq!(quantities, vec![45, 2, 6, 12, 10, 4, 225]);
        assert_eq!(result.materials[1].name, "Wall Panels (Steel)");
    }

    #[test]
    fn test_wall_panels_not_counted_as_steel_sheets() {
        let settings = EstimatorSettings::default();
        let ctx = CategoryContext::new(Category::Wall, 100.0, &settings);
        let result = estimate(&WallRules, &ctx).unwrap();
        assert!(result
            .materials
            .iter()
            .all(|m| !m.is_family(MaterialFamily::SteelSheet)));
    }
}
