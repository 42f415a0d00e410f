//! # Unit Types
//!
//! Area units and the rounding rules applied at the output boundary.
//!
//! All calculations run in square feet. Square metres are accepted on input
//! and converted with the exact factor [`SQFT_PER_SQM`]; nothing is rounded
//! during conversion.
//!
//! ## Rounding
//!
//! - Material quantities always round **up** ([`round_up`]): a partial board
//!   or prop still has to be bought whole.
//! - Displayed areas round to the nearest integer ([`round_display`]).
//! - No quantity may exceed [`MAX_QUANTITY`]; [`round_up`] and
//!   [`multiply`] return [`CalcError::QuantityOverflow`] instead of
//!   wrapping or saturating.
//!
//! ## Example
//!
//! ```rust
//! use shutter_core::units::{round_up, sqm_to_sqft, AreaUnit};
//!
//! assert!((sqm_to_sqft(100.0) - 1076.4).abs() < 1e-9);
//! assert_eq!(AreaUnit::Sqft.to_sqft(250.0), 250.0);
//! assert_eq!(round_up(127.5).unwrap(), 128);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{CalcError, CalcResult};

/// Square feet in one square metre
pub const SQFT_PER_SQM: f64 = 10.764;

/// Convert square metres to square feet.
pub fn sqm_to_sqft(sqm: f64) -> f64 {
    sqm * SQFT_PER_SQM
}

/// Convert square feet to square metres.
pub fn sqft_to_sqm(sqft: f64) -> f64 {
    sqft / SQFT_PER_SQM
}

/// Largest quantity a line item may carry (2^53, the last integer an f64
/// holds exactly). Four of them still sum inside `u64`.
pub const MAX_QUANTITY: u64 = 1 << 53;

/// Round a quantity up to the next whole unit.
///
/// Values in `(-1, 0]` round to zero. Anything negative beyond that, NaN,
/// or above [`MAX_QUANTITY`] is a [`CalcError::QuantityOverflow`].
pub fn round_up(value: f64) -> CalcResult<u64> {
    let rounded = value.ceil();
    if rounded.is_nan() || rounded < 0.0 || rounded > MAX_QUANTITY as f64 {
        return Err(CalcError::quantity_overflow(value, MAX_QUANTITY));
    }
    Ok(rounded as u64)
}

/// `count × per`, bounded by [`MAX_QUANTITY`].
pub fn multiply(count: u64, per: u64) -> CalcResult<u64> {
    count
        .checked_mul(per)
        .filter(|&quantity| quantity <= MAX_QUANTITY)
        .ok_or_else(|| CalcError::quantity_overflow(format!("{} × {}", count, per), MAX_QUANTITY))
}

/// Round an area to the nearest whole number for display.
pub fn round_display(value: f64) -> u64 {
    value.round() as u64
}

/// Unit the caller entered the total area in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    /// Square feet
    #[default]
    Sqft,
    /// Square metres
    Sqm,
}

impl AreaUnit {
    /// Normalize a value in this unit to square feet
    pub fn to_sqft(self, value: f64) -> f64 {
        match self {
            AreaUnit::Sqft => value,
            AreaUnit::Sqm => sqm_to_sqft(value),
        }
    }

    /// Human-readable unit label
    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::Sqft => "sq ft",
            AreaUnit::Sqm => "sq m",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaUnit::Sqft => write!(f, "sqft"),
            AreaUnit::Sqm => write!(f, "sqm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqm_to_sqft() {
        assert!((sqm_to_sqft(100.0) - 1076.4).abs() < 1e-9);
        assert_eq!(sqm_to_sqft(1.0), 10.764);
    }

    #[test]
    fn test_unit_round_trip() {
        for x in [0.001, 1.0, 37.5, 1000.0, 123_456.789] {
            let back = sqft_to_sqm(sqm_to_sqft(x));
            assert!((back - x).abs() <= x * 1e-12, "round trip drifted for {}", x);
        }
    }

    #[test]
    fn test_to_sqft() {
        assert_eq!(AreaUnit::Sqft.to_sqft(500.0), 500.0);
        assert!((AreaUnit::Sqm.to_sqft(50.0) - 538.2).abs() < 1e-9);
    }

    #[test]
    fn test_round_up() {
        assert_eq!(round_up(195.0).unwrap(), 195);
        assert_eq!(round_up(195.000001).unwrap(), 196);
        assert_eq!(round_up(0.01).unwrap(), 1);
        assert_eq!(round_up(0.0).unwrap(), 0);
        assert_eq!(round_up(-0.5).unwrap(), 0);
    }

    #[test]
    fn test_round_up_out_of_range() {
        assert_eq!(round_up(MAX_QUANTITY as f64).unwrap(), MAX_QUANTITY);
        for value in [1e18, f64::INFINITY, f64::NAN, -2.0] {
            let err = round_up(value).unwrap_err();
            assert_eq!(err.error_code(), "QUANTITY_OVERFLOW", "value {}", value);
        }
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(195, 8).unwrap(), 1560);
        assert!(multiply(MAX_QUANTITY, 2).is_err());
        assert!(multiply(u64::MAX, 4).is_err());
    }

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(1076.4), 1076);
        assert_eq!(round_display(107.64), 108);
        assert_eq!(round_display(0.5), 1);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&AreaUnit::Sqm).unwrap(), "\"sqm\"");
        let unit: AreaUnit = serde_json::from_str("\"sqft\"").unwrap();
        assert_eq!(unit, AreaUnit::Sqft);
    }
}
