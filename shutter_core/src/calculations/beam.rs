//! # Beam Shuttering
//!
//! Formwork for RCC beams (sides, bottom and support). The beam count is
//! estimated from the allocated area by treating it as a square run of
//! formwork: total length `sqrt(area × 4)` cut into 8' beams.

use crate::errors::CalcResult;
use crate::materials::{MaterialItem, MaterialKind};
use crate::units::{multiply, round_up};

use super::rules::{CategoryContext, CategoryRules, CoreDescriptions, CoreQuantities};

/// Length of one beam segment (ft)
pub const BEAM_SEGMENT_FT: f64 = 8.0;

/// Bottom plates per estimated beam
pub const BOTTOM_PLATES_PER_BEAM: u64 = 2;

/// 3" nails per wood board
pub const NAILS_PER_BOARD: u64 = 6;

/// 5" nails per estimated beam
pub const HEAVY_NAILS_PER_BEAM: u64 = 4;

/// Estimated number of 8' beams for a beam formwork area (at least one).
pub fn estimated_beams(area_sqft: f64) -> CalcResult<u64> {
    let beam_length_ft = (area_sqft * 4.0).sqrt();
    round_up((beam_length_ft / BEAM_SEGMENT_FT).floor().max(1.0))
}

/// Beam calculator hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct BeamRules;

impl CategoryRules for BeamRules {
    fn descriptions(&self) -> CoreDescriptions {
        CoreDescriptions {
            wood_boards: "For beam sides and bottom",
            props: "Vertical support for beams",
            beams: "Horizontal support under beam",
            bamboo: "Diagonal bracing for beam sides",
        }
    }

    fn trailing_items(&self, ctx: &CategoryContext<'_>, core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        let beams = estimated_beams(ctx.area_sqft)?;
        Ok(vec![
            MaterialKind::BeamBottomPlates.item(
                multiply(beams, BOTTOM_PLATES_PER_BEAM)?,
                "Thick boards for beam bottom (if needed)",
            ),
            MaterialKind::Nails3In.item(
                multiply(core.wood_boards, NAILS_PER_BOARD)?,
                "For beam formwork assembly",
            ),
            MaterialKind::Nails5In.item(
                multiply(beams, HEAVY_NAILS_PER_BEAM)?,
                "Heavy nails for beam bottom",
            ),
        ])
    }
}
