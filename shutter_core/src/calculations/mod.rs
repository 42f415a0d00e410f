//! # Shuttering Calculations
//!
//! The estimation engine. A single entry point, [`calculate`], turns a total
//! built-up area into an itemized bill of materials for four structural
//! categories plus a cross-category summary:
//!
//! ```text
//! CalculationInput
//!   -> normalize to sq ft
//!   -> split across slab / beam / column / wall
//!   -> per-category materials (shared families + category hooks)
//!   -> CategoryResult x4 (rounded display areas, fixed notes)
//!   -> MaterialSummary (derived from the line items)
//!   -> ShutteringResult
//! ```
//!
//! The engine is pure and deterministic: no I/O, no shared mutable state,
//! and the same input always yields the same result.
//!
//! ## Example
//!
//! ```rust
//! use shutter_core::calculations::{calculate, CalculationInput};
//! use shutter_core::units::AreaUnit;
//!
//! let result = calculate(&CalculationInput::new(1000.0, AreaUnit::Sqft)).unwrap();
//! assert_eq!(result.total_area, 1000);
//! assert_eq!(result.categories.len(), 4);
//! assert_eq!(result.summary.total_steel_sheets, 16);
//! ```
//!
//! ## Modules
//!
//! - [`distribution`] - area split across categories
//! - [`rules`] - the shared calculator and its per-category hooks
//! - [`slab`], [`beam`], [`column`], [`wall`] - category hooks
//! - [`summary`] - cross-category totals

pub mod beam;
pub mod column;
pub mod distribution;
pub mod rules;
pub mod slab;
pub mod summary;
pub mod wall;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{MaterialFamily, MaterialItem};
use crate::settings::EstimatorSettings;
use crate::units::{round_display, AreaUnit};

pub use beam::BeamRules;
pub use column::{estimate_column_boards, ColumnBoardEstimate, ColumnRules};
pub use distribution::AreaDistribution;
pub use rules::{CategoryContext, CategoryRules};
pub use slab::SlabRules;
pub use summary::MaterialSummary;
pub use wall::WallRules;

// ============================================================================
// Input
// ============================================================================

/// Largest total area the engine accepts, after conversion to sq ft.
///
/// A trillion sq ft keeps every line item far below
/// [`MAX_QUANTITY`](crate::units::MAX_QUANTITY) with the standard tables.
pub const MAX_AREA_SQFT: f64 = 1e12;

/// Input to the estimation engine.
///
/// The advanced dimensions and `use_steel_shuttering` are accepted and
/// validated but reserved: quantities do not depend on them yet.
///
/// ## JSON Example
///
/// ```json
/// {
///   "totalArea": 1000.0,
///   "unit": "sqft",
///   "slabHeight": 10.0,
///   "slabThickness": 6.0,
///   "useSteelShuttering": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Total built-up area in `unit`
    pub total_area: f64,

    #[serde(default)]
    pub unit: AreaUnit,

    /// Slab soffit height (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slab_height: Option<f64>,

    /// Beam height (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_height: Option<f64>,

    /// Column height (ft)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_height: Option<f64>,

    /// Slab thickness (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slab_thickness: Option<f64>,

    /// Prefer steel shuttering over wood where applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_steel_shuttering: Option<bool>,
}

impl CalculationInput {
    /// Input with only the required fields set
    pub fn new(total_area: f64, unit: AreaUnit) -> Self {
        CalculationInput {
            total_area,
            unit,
            slab_height: None,
            beam_height: None,
            column_height: None,
            slab_thickness: None,
            use_steel_shuttering: None,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.total_area.is_finite() {
            return Err(CalcError::invalid_area(self.total_area, "Area must be a finite number"));
        }
        if self.total_area <= 0.0 {
            return Err(CalcError::invalid_area(self.total_area, "Area must be positive"));
        }
        let total_sqft = self.total_area_sqft();
        if !total_sqft.is_finite() || total_sqft > MAX_AREA_SQFT {
            return Err(CalcError::invalid_area(
                self.total_area,
                format!("Area must not exceed {} sq ft", MAX_AREA_SQFT),
            ));
        }

        let dimensions = [
            ("slabHeight", self.slab_height),
            ("beamHeight", self.beam_height),
            ("columnHeight", self.column_height),
            ("slabThickness", self.slab_thickness),
        ];
        for (field, value) in dimensions {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(CalcError::invalid_input(
                        field,
                        value.to_string(),
                        "Dimension must be positive",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Total area normalized to sq ft
    pub fn total_area_sqft(&self) -> f64 {
        self.unit.to_sqft(self.total_area)
    }

    /// True if any reserved advanced parameter was supplied
    pub fn has_advanced_parameters(&self) -> bool {
        self.slab_height.is_some()
            || self.beam_height.is_some()
            || self.column_height.is_some()
            || self.slab_thickness.is_some()
            || self.use_steel_shuttering == Some(true)
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Structural categories, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Slab Shuttering")]
    Slab,
    #[serde(rename = "Beam Shuttering")]
    Beam,
    #[serde(rename = "Column Shuttering")]
    Column,
    #[serde(rename = "Wall Shuttering")]
    Wall,
}

impl Category {
    /// All categories in output order
    pub const ALL: [Category; 4] = [Category::Slab, Category::Beam, Category::Column, Category::Wall];

    /// Display name
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Slab => "Slab Shuttering",
            Category::Beam => "Beam Shuttering",
            Category::Column => "Column Shuttering",
            Category::Wall => "Wall Shuttering",
        }
    }

    /// Lowercase key used in settings files
    pub fn key(self) -> &'static str {
        match self {
            Category::Slab => "slab",
            Category::Beam => "beam",
            Category::Column => "column",
            Category::Wall => "wall",
        }
    }

    /// Fixed annotation shown with the category
    pub fn notes(self) -> &'static str {
        match self {
            Category::Slab => {
                "Horizontal formwork for floor/roof slabs. Includes main support system."
            }
            Category::Beam => {
                "Formwork for RCC beams. Includes sides, bottom, and support system."
            }
            Category::Column => {
                "Vertical formwork for columns. 4-sided coverage with special board arrangement \
                 (2.5\" + 2.5\" boards for 4\" faces)."
            }
            Category::Wall => {
                "Vertical formwork for walls. Includes tie rods and alignment system."
            }
        }
    }

    /// Calculator hooks for this category
    pub fn rules(self) -> &'static dyn CategoryRules {
        match self {
            Category::Slab => &SlabRules,
            Category::Beam => &BeamRules,
            Category::Column => &ColumnRules,
            Category::Wall => &WallRules,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Bill of materials for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub category: Category,

    /// Line items in fixed display order
    pub materials: Vec<MaterialItem>,

    /// Allocated area (sq ft), rounded to the nearest integer
    pub total_area: u64,

    pub notes: String,

    /// Calculator-emitted annotations (e.g. the column board rule)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<String>,
}

impl CategoryResult {
    /// First line item of a summary family
    pub fn material(&self, family: MaterialFamily) -> Option<&MaterialItem> {
        self.materials.iter().find(|m| m.is_family(family))
    }

    /// Line item by exact display name
    pub fn material_named(&self, name: &str) -> Option<&MaterialItem> {
        self.materials.iter().find(|m| m.name == name)
    }
}

/// Full engine output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShutteringResult {
    /// Total area in sq ft, rounded to the nearest integer
    pub total_area: u64,

    /// Unit the caller entered the area in
    pub input_unit: AreaUnit,

    /// Exactly four categories: slab, beam, column, wall
    pub categories: Vec<CategoryResult>,

    pub summary: MaterialSummary,
}

impl ShutteringResult {
    /// Result for one category
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Every line item of a family, paired with its category
    pub fn materials_of(&self, family: MaterialFamily) -> Vec<(Category, &MaterialItem)> {
        self.categories
            .iter()
            .filter_map(|c| c.material(family).map(|m| (c.category, m)))
            .collect()
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Estimate shuttering materials with the standard tables.
///
/// # Returns
///
/// * `Ok(ShutteringResult)` - Bill of materials
/// * `Err(CalcError::InvalidArea)` - Area is not positive, not finite, or
///   above [`MAX_AREA_SQFT`]
/// * `Err(CalcError::InvalidInput)` - An advanced dimension is not positive
pub fn calculate(input: &CalculationInput) -> CalcResult<ShutteringResult> {
    calculate_with(input, EstimatorSettings::standard())
}

/// Estimate shuttering materials with custom tables.
///
/// Extreme factor tables can additionally fail with
/// `CalcError::QuantityOverflow`.
pub fn calculate_with(input: &CalculationInput, settings: &EstimatorSettings) -> CalcResult<ShutteringResult> {
    input.validate()?;
    settings.validate()?;

    if input.has_advanced_parameters() {
        tracing::warn!(
            "advanced parameters (heights, slab thickness, steel preference) are reserved and do not affect quantities"
        );
    }

    let total_sqft = input.total_area_sqft();
    let split = AreaDistribution::split(total_sqft, &settings.distribution);
    tracing::debug!(
        total_sqft,
        slab_sqft = split.slab_sqft,
        beam_sqft = split.beam_sqft,
        column_sqft = split.column_sqft,
        wall_sqft = split.wall_sqft,
        "distributed area"
    );

    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let area_sqft = split.area(category);
            let ctx = CategoryContext::new(category, area_sqft, settings);
            let estimated = rules::estimate(category.rules(), &ctx)?;
            Ok(CategoryResult {
                category,
                materials: estimated.materials,
                total_area: round_display(area_sqft),
                notes: category.notes().to_string(),
                remarks: estimated.remarks,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    let summary = MaterialSummary::from_categories(&categories);
    tracing::debug!(?summary, "calculation complete");

    Ok(ShutteringResult {
        total_area: round_display(total_sqft),
        input_unit: input.unit,
        categories,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqft(area: f64) -> ShutteringResult {
        calculate(&CalculationInput::new(area, AreaUnit::Sqft)).unwrap()
    }

    #[test]
    fn test_category_order() {
        let result = sqft(1000.0);
        let order: Vec<Category> = result.categories.iter().map(|c| c.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_display_areas() {
        let result = sqft(1000.0);
        let areas: Vec<u64> = result.categories.iter().map(|c| c.total_area).collect();
        assert_eq!(areas, vec![500, 250, 150, 100]);
    }

    #[test]
    fn test_1000_sqft_summary() {
        let summary = sqft(1000.0).summary;
        assert_eq!(summary.total_wood_boards, 195 + 128 + 5400 + 45);
        assert_eq!(summary.total_bamboo, 60 + 20 + 9 + 10);
        assert_eq!(summary.total_steel_sheets, 16);
        assert_eq!(summary.total_props, 40 + 38 + 8 + 6);
        assert_eq!(summary.total_beams, 75 + 63 + 15 + 12);
    }

    #[test]
    fn test_sqm_input_converted() {
        let result = calculate(&CalculationInput::new(100.0, AreaUnit::Sqm)).unwrap();
        assert_eq!(result.total_area, 1076);
        assert_eq!(result.input_unit, AreaUnit::Sqm);
        let slab = result.category(Category::Slab).unwrap();
        assert_eq!(slab.total_area, 538);
        assert_eq!(slab.material(MaterialFamily::WoodBoard).unwrap().quantity, 210);
    }

    #[test]
    fn test_invalid_areas_rejected() {
        for area in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let err = calculate(&CalculationInput::new(area, AreaUnit::Sqft)).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_AREA", "area {}", area);
        }
    }

    #[test]
    fn test_oversized_areas_rejected() {
        for (area, unit) in [
            (1e18, AreaUnit::Sqft),
            (1e20, AreaUnit::Sqft),
            (f64::MAX, AreaUnit::Sqft),
            (f64::MAX, AreaUnit::Sqm),
            (1e12, AreaUnit::Sqm),
        ] {
            let err = calculate(&CalculationInput::new(area, unit)).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_AREA", "area {} {}", area, unit);
        }
    }

    #[test]
    fn test_largest_area_is_estimated() {
        let result = sqft(MAX_AREA_SQFT);
        assert_eq!(result.total_area, 1_000_000_000_000);
        let column = result.category(Category::Column).unwrap();
        assert_eq!(column.material_named("Nails (4\")").unwrap().quantity, 21_600_000_000_000);
    }

    #[test]
    fn test_extreme_board_spec_overflows_cleanly() {
        let mut settings = EstimatorSettings::default();
        settings.board.width_in = 1e-12;
        let err = calculate_with(&CalculationInput::new(MAX_AREA_SQFT, AreaUnit::Sqft), &settings).unwrap_err();
        assert_eq!(err.error_code(), "QUANTITY_OVERFLOW");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_advanced_dimension_rejected() {
        let mut input = CalculationInput::new(1000.0, AreaUnit::Sqft);
        input.beam_height = Some(-2.0);
        match calculate(&input) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "beamHeight"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_advanced_parameters_are_reserved() {
        let mut input = CalculationInput::new(1000.0, AreaUnit::Sqft);
        input.slab_height = Some(10.0);
        input.beam_height = Some(12.0);
        input.column_height = Some(10.0);
        input.slab_thickness = Some(6.0);
        input.use_steel_shuttering = Some(true);
        assert!(input.has_advanced_parameters());

        let plain = sqft(1000.0);
        let advanced = calculate(&input).unwrap();
        assert_eq!(plain.categories, advanced.categories);
        assert_eq!(plain.summary, advanced.summary);
    }

    #[test]
    fn test_steel_false_is_not_advanced() {
        let mut input = CalculationInput::new(10.0, AreaUnit::Sqft);
        input.use_steel_shuttering = Some(false);
        assert!(!input.has_advanced_parameters());
    }

    #[test]
    fn test_column_remark_emitted() {
        let result = sqft(1000.0);
        let column = result.category(Category::Column).unwrap();
        assert_eq!(column.remarks.len(), 1);
        assert!(column.remarks[0].contains("675 estimated columns"));
        assert!(result.category(Category::Slab).unwrap().remarks.is_empty());
    }

    #[test]
    fn test_materials_of_family() {
        let result = sqft(1000.0);
        let sheets = result.materials_of(MaterialFamily::SteelSheet);
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].0, Category::Slab);
        assert_eq!(result.materials_of(MaterialFamily::Prop).len(), 4);
    }

    #[test]
    fn test_custom_distribution() {
        let mut settings = EstimatorSettings::default();
        settings.distribution.slab = 1.0;
        settings.distribution.beam = 0.0;
        settings.distribution.column = 0.0;
        settings.distribution.wall = 0.0;
        let result = calculate_with(&CalculationInput::new(1000.0, AreaUnit::Sqft), &settings).unwrap();
        let beam = result.category(Category::Beam).unwrap();
        assert_eq!(beam.total_area, 0);
        assert_eq!(beam.material(MaterialFamily::Prop).unwrap().quantity, 0);
        assert_eq!(result.summary.total_steel_sheets, 32);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = EstimatorSettings::default();
        settings.distribution.wall = 0.5;
        assert!(calculate_with(&CalculationInput::new(1000.0, AreaUnit::Sqft), &settings).is_err());
    }

    #[test]
    fn test_input_json_contract() {
        let json = r#"{ "totalArea": 250.5, "unit": "sqm", "slabHeight": 10, "useSteelShuttering": false }"#;
        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.total_area, 250.5);
        assert_eq!(input.unit, AreaUnit::Sqm);
        assert_eq!(input.slab_height, Some(10.0));
        assert_eq!(input.beam_height, None);
    }

    #[test]
    fn test_result_serialization() {
        let result = sqft(1000.0);
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"category\": \"Column Shuttering\""));
        assert!(json.contains("\"totalWoodBoards\": 5768"));

        let roundtrip: ShutteringResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
