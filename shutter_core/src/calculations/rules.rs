//! # Category Rules
//!
//! One parametrized calculator shared by all four categories. Every category
//! gets the same four density-driven families (wood boards, props, steel
//! beams, bamboo) from its factor record; the [`CategoryRules`] hooks add
//! the category's own secondary materials around them.
//!
//! Item order within a category is fixed:
//!
//! ```text
//! wood boards, lead items.., props, steel beams, bamboo, trailing items..
//! ```

use crate::errors::CalcResult;
use crate::materials::{MaterialItem, MaterialKind};
use crate::settings::{BoardSpec, EstimatorSettings, MaterialFactors};
use crate::units::round_up;

use super::Category;

/// Number of boards needed to cover `area_sqft × factor` of board face.
pub fn wood_boards(area_sqft: f64, factor: f64, board: &BoardSpec) -> CalcResult<u64> {
    let board_face_sqft = area_sqft * factor;
    round_up(board_face_sqft / board.area_sqft())
}

/// Everything a category calculator may read.
#[derive(Debug, Clone, Copy)]
pub struct CategoryContext<'a> {
    /// Area allocated to the category (sq ft, unrounded)
    pub area_sqft: f64,
    pub factors: &'a MaterialFactors,
    pub settings: &'a EstimatorSettings,
}

impl<'a> CategoryContext<'a> {
    pub fn new(category: Category, area_sqft: f64, settings: &'a EstimatorSettings) -> Self {
        CategoryContext {
            area_sqft,
            factors: settings.factors.for_category(category),
            settings,
        }
    }
}

/// Quantities of the four families every category carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreQuantities {
    pub wood_boards: u64,
    pub props: u64,
    pub beams: u64,
    pub bamboo: u64,
}

/// Board count chosen by a category, with an optional explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCount {
    pub boards: u64,
    pub remark: Option<String>,
}

/// Per-category descriptions for the four shared families.
#[derive(Debug, Clone, Copy)]
pub struct CoreDescriptions {
    pub wood_boards: &'static str,
    pub props: &'static str,
    pub beams: &'static str,
    pub bamboo: &'static str,
}

/// Materials and remarks produced for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMaterials {
    pub materials: Vec<MaterialItem>,
    pub remarks: Vec<String>,
}

/// Category-specific hooks around the shared calculator.
pub trait CategoryRules: Sync {
    /// Descriptions for the shared families
    fn descriptions(&self) -> CoreDescriptions;

    /// Wood board count. Default: generic board formula with the category factor.
    fn wood_boards(&self, ctx: &CategoryContext<'_>) -> CalcResult<BoardCount> {
        Ok(BoardCount {
            boards: wood_boards(
                ctx.area_sqft,
                ctx.factors.wood_boards_per_sqft,
                &ctx.settings.board,
            )?,
            remark: None,
        })
    }

    /// Items listed directly after the wood boards
    fn lead_items(&self, _ctx: &CategoryContext<'_>, _core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        Ok(Vec::new())
    }

    /// Items listed after the shared families
    fn trailing_items(&self, ctx: &CategoryContext<'_>, core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>>;
}

/// Run the shared calculator with one category's hooks.
///
/// Fails only with [`CalcError::QuantityOverflow`](crate::errors::CalcError::QuantityOverflow)
/// when a tuned factor table drives a count past the representable range.
pub fn estimate(rules: &dyn CategoryRules, ctx: &CategoryContext<'_>) -> CalcResult<CategoryMaterials> {
    let area = ctx.area_sqft;
    let board_count = rules.wood_boards(ctx)?;
    let core = CoreQuantities {
        wood_boards: board_count.boards,
        props: round_up(area * ctx.factors.props_per_sqft)?,
        beams: round_up(area * ctx.factors.beams_per_sqft)?,
        bamboo: round_up(area * ctx.factors.bamboo_per_sqft)?,
    };
    let text = rules.descriptions();

    let mut materials = vec![MaterialKind::WoodBoards.item(core.wood_boards, text.wood_boards)];
    materials.extend(rules.lead_items(ctx, &core)?);
    materials.push(MaterialKind::AdjustableProps.item(core.props, text.props));
    materials.push(MaterialKind::SteelBeams.item(core.beams, text.beams));
    materials.push(MaterialKind::BambooPoles.item(core.bamboo, text.bamboo));
    materials.extend(rules.trailing_items(ctx, &core)?);

    Ok(CategoryMaterials {
        materials,
        remarks: board_count.remark.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wood_boards_exact_division() {
        // 500 × 0.65 = 325 sq ft of board face / (20/12) = 195 boards
        let board = BoardSpec::default();
        assert_eq!(wood_boards(500.0, 0.65, &board).unwrap(), 195);
    }

    #[test]
    fn test_wood_boards_rounds_up() {
        let board = BoardSpec::default();
        // 250 × 0.85 = 212.5 / 1.6667 = 127.5 -> 128
        assert_eq!(wood_boards(250.0, 0.85, &board).unwrap(), 128);
        assert_eq!(wood_boards(0.01, 0.65, &board).unwrap(), 1);
    }

    #[test]
    fn test_wood_boards_follow_board_size() {
        let long_board = BoardSpec {
            width_in: 2.5,
            length_ft: 16.0,
        };
        assert_eq!(wood_boards(500.0, 0.65, &long_board).unwrap(), 98);
    }

    #[test]
    fn test_context_picks_category_factors() {
        let settings = EstimatorSettings::default();
        let ctx = CategoryContext::new(Category::Beam, 250.0, &settings);
        assert_eq!(ctx.factors.wood_boards_per_sqft, 0.85);
    }

    #[test]
    fn test_oversized_factor_is_an_error() {
        let mut settings = EstimatorSettings::default();
        settings.factors.slab.props_per_sqft = 1e300;
        let ctx = CategoryContext::new(Category::Slab, 500.0, &settings);
        let err = estimate(&crate::calculations::SlabRules, &ctx).unwrap_err();
        assert_eq!(err.error_code(), "QUANTITY_OVERFLOW");
    }
}
