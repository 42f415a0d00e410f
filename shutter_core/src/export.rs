//! # JSON Export
//!
//! The downloadable form of a calculation:
//!
//! ```json
//! {
//!   "projectArea": 1000,
//!   "unit": "sq ft",
//!   "categories": [ ... ],
//!   "summary": { "totalWoodBoards": 5768, ... },
//!   "generatedAt": "2026-01-01T00:00:00Z"
//! }
//! ```
//!
//! Files are written atomically: serialize, write to a `.tmp` sibling,
//! fsync, then rename over the target.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shutter_core::calculations::{calculate, CalculationInput};
//! use shutter_core::export::{default_file_name, save_export, ExportDocument};
//! use shutter_core::units::AreaUnit;
//! use std::path::Path;
//!
//! let result = calculate(&CalculationInput::new(1000.0, AreaUnit::Sqft))?;
//! let doc = ExportDocument::from_result(&result);
//! save_export(&doc, Path::new(&default_file_name(&result)))?;
//! # Ok::<(), shutter_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{CategoryResult, MaterialSummary, ShutteringResult};
use crate::errors::{CalcError, CalcResult};

/// Unit label written into every export (areas are always sq ft)
pub const EXPORT_UNIT: &str = "sq ft";

/// Exported calculation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Total area (sq ft, rounded)
    pub project_area: u64,
    pub unit: String,
    pub categories: Vec<CategoryResult>,
    pub summary: MaterialSummary,
    pub generated_at: DateTime<Utc>,
}

impl ExportDocument {
    /// Export a result, stamped with the current time.
    pub fn from_result(result: &ShutteringResult) -> Self {
        Self::with_timestamp(result, Utc::now())
    }

    /// Export a result with an explicit timestamp.
    pub fn with_timestamp(result: &ShutteringResult, generated_at: DateTime<Utc>) -> Self {
        ExportDocument {
            project_area: result.total_area,
            unit: EXPORT_UNIT.to_string(),
            categories: result.categories.clone(),
            summary: result.summary,
            generated_at,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Default download name, e.g. `shuttering-calculation-1000sqft.json`.
pub fn default_file_name(result: &ShutteringResult) -> String {
    format!("shuttering-calculation-{}sqft.json", result.total_area)
}

/// Write an export document to `path` atomically.
pub fn save_export(doc: &ExportDocument, path: &Path) -> CalcResult<()> {
    let json = doc.to_json()?;
    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename temp file", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), project_area = doc.project_area, "wrote export");
    Ok(())
}

/// Read an export document back from disk.
pub fn load_export(path: &Path) -> CalcResult<ExportDocument> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CalcError::file_error("read export", path.display().to_string(), e.to_string())
    })?;
    Ok(serde_json::from_str(&contents)?)
}
