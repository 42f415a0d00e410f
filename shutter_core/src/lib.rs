//! # shutter_core - Shuttering Material Estimation Engine
//!
//! `shutter_core` estimates formwork (shuttering) materials for a building
//! from its total built-up area: wood boards, props, steel beams, bamboo
//! poles, steel sheets and the fasteners that go with them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from input to bill of materials
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Table-Driven**: Distribution shares and density factors are data
//!   ([`settings`]), not literals in the calculators
//! - **Rich Errors**: Invalid input returns a structured error instead of
//!   NaN or negative quantities
//!
//! ## Quick Start
//!
//! ```rust
//! use shutter_core::{calculate, CalculationInput};
//! use shutter_core::units::AreaUnit;
//!
//! let result = calculate(&CalculationInput::new(1000.0, AreaUnit::Sqft)).unwrap();
//! assert_eq!(result.summary.total_wood_boards, 5768);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("Slab Shuttering"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The engine, its input and result types
//! - [`materials`] - Line items, material families and the catalog
//! - [`settings`] - Distribution and factor tables, settings files
//! - [`units`] - Area units, conversion and rounding
//! - [`export`] - JSON export documents
//! - [`report`] - Plain-text print view
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod export;
pub mod materials;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, calculate_with, CalculationInput, Category, CategoryResult, MaterialSummary,
    ShutteringResult,
};
pub use errors::{CalcError, CalcResult};
pub use export::{save_export, ExportDocument};
pub use materials::{MaterialFamily, MaterialItem};
pub use settings::EstimatorSettings;
