//! # Estimator Settings
//!
//! The constant tables that drive the engine: how the total area is split
//! between categories, the per-category material density factors, and the
//! standard wood board size.
//!
//! Settings serialize to JSON so a site office can tune the factors without
//! touching calculation code. Any field left out of a settings file falls
//! back to the standard value, down to a single factor inside one
//! category's record.
//!
//! ## Example
//!
//! ```rust
//! use shutter_core::settings::EstimatorSettings;
//!
//! let settings = EstimatorSettings::standard();
//! assert_eq!(settings.distribution.slab, 0.50);
//! assert!((settings.board.area_sqft() - 1.6667).abs() < 1e-3);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::Category;
use crate::errors::{CalcError, CalcResult};

/// Directory name under the user's config dir
pub const CONFIG_DIR_NAME: &str = "shuttering-calculator";

/// Settings file name inside [`CONFIG_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Tolerance for the distribution shares summing to 1.0
const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

static STANDARD: Lazy<EstimatorSettings> = Lazy::new(EstimatorSettings::default);

/// Complete set of tables used by one calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Share of the total area allocated to each category
    pub distribution: CategoryDistribution,

    /// Material density factors per category
    pub factors: FactorTable,

    /// Standard shuttering board
    pub board: BoardSpec,
}

impl EstimatorSettings {
    /// The built-in tables, shared process-wide.
    pub fn standard() -> &'static EstimatorSettings {
        &STANDARD
    }

    /// Default settings file location (`<config dir>/shuttering-calculator/settings.json`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load and validate settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read settings", path.display().to_string(), e.to_string())
        })?;
        let settings = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), "loaded estimator settings");
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EstimatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every table for values the engine cannot use.
    pub fn validate(&self) -> CalcResult<()> {
        self.distribution.validate()?;
        for category in Category::ALL {
            self.factors
                .for_category(category)
                .validate(category.key())?;
        }
        self.board.validate()
    }
}

/// Fraction of the total area assigned to each structural category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDistribution {
    pub slab: f64,
    pub beam: f64,
    pub column: f64,
    pub wall: f64,
}

impl Default for CategoryDistribution {
    fn default() -> Self {
        CategoryDistribution {
            slab: 0.50,
            beam: 0.25,
            column: 0.15,
            wall: 0.10,
        }
    }
}

impl CategoryDistribution {
    /// Share for one category
    pub fn share(&self, category: Category) -> f64 {
        match category {
            Category::Slab => self.slab,
            Category::Beam => self.beam,
            Category::Column => self.column,
            Category::Wall => self.wall,
        }
    }

    /// Sum of all four shares
    pub fn total(&self) -> f64 {
        self.slab + self.beam + self.column + self.wall
    }

    fn validate(&self) -> CalcResult<()> {
        for category in Category::ALL {
            let share = self.share(category);
            if !share.is_finite() || share < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("distribution.{}", category.key()),
                    share.to_string(),
                    "Share must be a finite, non-negative fraction",
                ));
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(CalcError::invalid_input(
                "distribution",
                total.to_string(),
                "Shares must sum to 1.0",
            ));
        }
        Ok(())
    }
}

/// Linear density factors (quantity per sq ft) for the four shared families.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialFactors {
    /// Board face area needed per sq ft of formwork
    pub wood_boards_per_sqft: f64,
    pub props_per_sqft: f64,
    pub beams_per_sqft: f64,
    pub bamboo_per_sqft: f64,
}

impl MaterialFactors {
    pub const fn new(wood_boards: f64, props: f64, beams: f64, bamboo: f64) -> Self {
        MaterialFactors {
            wood_boards_per_sqft: wood_boards,
            props_per_sqft: props,
            beams_per_sqft: beams,
            bamboo_per_sqft: bamboo,
        }
    }

    fn validate(&self, category: &str) -> CalcResult<()> {
        let fields = [
            ("wood_boards_per_sqft", self.wood_boards_per_sqft),
            ("props_per_sqft", self.props_per_sqft),
            ("beams_per_sqft", self.beams_per_sqft),
            ("bamboo_per_sqft", self.bamboo_per_sqft),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("factors.{}.{}", category, name),
                    value.to_string(),
                    "Factor must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Factor record for each category.
///
/// Deserializes through [`FactorTableFile`], so a file may name only the
/// factors it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FactorTableFile")]
pub struct FactorTable {
    pub slab: MaterialFactors,
    pub beam: MaterialFactors,
    pub column: MaterialFactors,
    pub wall: MaterialFactors,
}

impl Default for FactorTable {
    fn default() -> Self {
        FactorTable {
            slab: MaterialFactors::new(0.65, 0.08, 0.15, 0.12),
            beam: MaterialFactors::new(0.85, 0.15, 0.25, 0.08),
            // Column boards are sized by the column rule, not wood_boards_per_sqft
            column: MaterialFactors::new(1.20, 0.05, 0.10, 0.06),
            wall: MaterialFactors::new(0.75, 0.06, 0.12, 0.10),
        }
    }
}

impl FactorTable {
    /// Factor record for one category
    pub fn for_category(&self, category: Category) -> &MaterialFactors {
        match category {
            Category::Slab => &self.slab,
            Category::Beam => &self.beam,
            Category::Column => &self.column,
            Category::Wall => &self.wall,
        }
    }
}

/// A category's factors as written in a settings file; absent fields are `None`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct FactorOverrides {
    wood_boards_per_sqft: Option<f64>,
    props_per_sqft: Option<f64>,
    beams_per_sqft: Option<f64>,
    bamboo_per_sqft: Option<f64>,
}

impl FactorOverrides {
    fn over(self, base: MaterialFactors) -> MaterialFactors {
        MaterialFactors {
            wood_boards_per_sqft: self.wood_boards_per_sqft.unwrap_or(base.wood_boards_per_sqft),
            props_per_sqft: self.props_per_sqft.unwrap_or(base.props_per_sqft),
            beams_per_sqft: self.beams_per_sqft.unwrap_or(base.beams_per_sqft),
            bamboo_per_sqft: self.bamboo_per_sqft.unwrap_or(base.bamboo_per_sqft),
        }
    }
}

/// On-disk form of [`FactorTable`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct FactorTableFile {
    slab: FactorOverrides,
    beam: FactorOverrides,
    column: FactorOverrides,
    wall: FactorOverrides,
}

impl From<FactorTableFile> for FactorTable {
    fn from(file: FactorTableFile) -> Self {
        let standard = FactorTable::default();
        FactorTable {
            slab: file.slab.over(standard.slab),
            beam: file.beam.over(standard.beam),
            column: file.column.over(standard.column),
            wall: file.wall.over(standard.wall),
        }
    }
}

/// Standard shuttering board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSpec {
    /// Face width in inches
    pub width_in: f64,
    /// Length in feet
    pub length_ft: f64,
}

impl Default for BoardSpec {
    fn default() -> Self {
        BoardSpec {
            width_in: 2.5,
            length_ft: 8.0,
        }
    }
}

impl BoardSpec {
    /// Face area of one board in sq ft
    pub fn area_sqft(&self) -> f64 {
        self.width_in * self.length_ft / 12.0
    }

    fn validate(&self) -> CalcResult<()> {
        if !self.width_in.is_finite() || self.width_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "board.width_in",
                self.width_in.to_string(),
                "Board width must be positive",
            ));
        }
        if !self.length_ft.is_finite() || self.length_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "board.length_ft",
                self.length_ft.to_string(),
                "Board length must be positive",
            ));
        }
        Ok(())
    }
}
