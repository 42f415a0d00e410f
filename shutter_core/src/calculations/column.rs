//! # Column Shuttering
//!
//! Vertical formwork wrapped on all four sides of each column.
//!
//! ## Board Rule
//!
//! A 4" column face is wider than one 2.5" board, so each face takes two
//! boards stacked side by side (2.5" + 2.5" = 5"). Board count is the larger
//! of two independent lower bounds:
//!
//! 1. **Baseline**: the generic board formula with factor 1.4.
//! 2. **Per column**: `estimated_columns × 8` (2 boards × 4 sides), where
//!    `estimated_columns = max(1, floor(area / column_face_area))` and the
//!    face is a 4" × 8" section.
//!
//! For small areas the per-column bound dominates by a wide margin (150 sq ft
//! gives 126 baseline vs 5400 per column).
//!
//! ## Example
//!
//! ```rust
//! use shutter_core::calculations::column::estimate_column_boards;
//! use shutter_core::settings::BoardSpec;
//!
//! let estimate = estimate_column_boards(150.0, &BoardSpec::default()).unwrap();
//! assert_eq!(estimate.estimated_columns, 675);
//! assert_eq!(estimate.boards, 5400);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::{MaterialItem, MaterialKind};
use crate::settings::BoardSpec;
use crate::units::{multiply, round_up};

use super::rules::{wood_boards, BoardCount, CategoryContext, CategoryRules, CoreDescriptions, CoreQuantities};

/// Board factor for 4-sided coverage
pub const COLUMN_BOARD_FACTOR: f64 = 1.4;

/// Reference column section width (in)
pub const COLUMN_WIDTH_IN: f64 = 4.0;

/// Reference column section depth (in)
pub const COLUMN_DEPTH_IN: f64 = 8.0;

/// 2 boards per side × 4 sides
pub const BOARDS_PER_COLUMN: u64 = 8;

/// Clamps / yokes per column
pub const CLAMPS_PER_COLUMN: u64 = 4;

/// Corner angles per column
pub const CORNER_ANGLES_PER_COLUMN: u64 = 4;

/// 4" nails per column board
pub const NAILS_PER_BOARD: u64 = 4;

/// Release oil per sq ft (liters)
pub const RELEASE_OIL_LITERS_PER_SQFT: f64 = 0.02;

/// Face area of the reference 4" × 8" column section (sq ft)
pub fn column_face_area_sqft() -> f64 {
    COLUMN_WIDTH_IN * COLUMN_DEPTH_IN / 144.0
}

/// Estimated number of columns for a column formwork area (at least one).
pub fn estimated_columns(area_sqft: f64) -> CalcResult<u64> {
    round_up((area_sqft / column_face_area_sqft()).floor().max(1.0))
}

/// Outcome of the column board rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnBoardEstimate {
    /// Generic formula with [`COLUMN_BOARD_FACTOR`]
    pub baseline: u64,
    pub estimated_columns: u64,
    /// `estimated_columns × BOARDS_PER_COLUMN`
    pub column_boards: u64,
    /// Final count, the larger of the two bounds
    pub boards: u64,
    pub note: String,
}

/// Apply the column board rule to a column formwork area.
pub fn estimate_column_boards(area_sqft: f64, board: &BoardSpec) -> CalcResult<ColumnBoardEstimate> {
    let baseline = wood_boards(area_sqft, COLUMN_BOARD_FACTOR, board)?;
    let columns = estimated_columns(area_sqft)?;
    let column_boards = multiply(columns, BOARDS_PER_COLUMN)?;

    Ok(ColumnBoardEstimate {
        baseline,
        estimated_columns: columns,
        column_boards,
        boards: baseline.max(column_boards),
        note: format!(
            "For {} estimated columns (4\"×8\"). Each column needs 8 boards (2 boards per side × 4 sides). \
             2.5\" + 2.5\" boards cover 4\" width.",
            columns
        ),
    })
}

/// Column calculator hooks
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnRules;

impl CategoryRules for ColumnRules {
    fn descriptions(&self) -> CoreDescriptions {
        CoreDescriptions {
            wood_boards: "For column shuttering (4 sides)",
            props: "Plumb support for columns",
            beams: "For column alignment",
            bamboo: "Diagonal bracing for columns",
        }
    }

    fn wood_boards(&self, ctx: &CategoryContext<'_>) -> CalcResult<BoardCount> {
        let estimate = estimate_column_boards(ctx.area_sqft, &ctx.settings.board)?;
        Ok(BoardCount {
            boards: estimate.boards,
            remark: Some(estimate.note),
        })
    }

    fn lead_items(&self, ctx: &CategoryContext<'_>, _core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        let columns = estimated_columns(ctx.area_sqft)?;
        Ok(vec![MaterialKind::ColumnClamps.item(
            multiply(columns, CLAMPS_PER_COLUMN)?,
            "Metal clamps to hold column boards",
        )])
    }

    fn trailing_items(&self, ctx: &CategoryContext<'_>, core: &CoreQuantities) -> CalcResult<Vec<MaterialItem>> {
        let columns = estimated_columns(ctx.area_sqft)?;
        Ok(vec![
            MaterialKind::CornerAngles.item(
                multiply(columns, CORNER_ANGLES_PER_COLUMN)?,
                "For perfect column corners",
            ),
            MaterialKind::Nails4In.item(
                multiply(core.wood_boards, NAILS_PER_BOARD)?,
                "For column formwork",
            ),
            MaterialKind::ReleaseAgent.item(
                round_up(ctx.area_sqft * RELEASE_OIL_LITERS_PER_SQFT)?,
                "For easy form removal",
            ),
        ])
    }
}
