//! # Area Distribution
//!
//! Splits the total area (sq ft) across the four categories using the
//! fixed shares from [`CategoryDistribution`]. Areas stay fractional here;
//! rounding happens only when results are assembled.

use serde::{Deserialize, Serialize};

use crate::settings::CategoryDistribution;

use super::Category;

/// Area allocated to each category (sq ft, unrounded)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaDistribution {
    pub slab_sqft: f64,
    pub beam_sqft: f64,
    pub column_sqft: f64,
    pub wall_sqft: f64,
}

impl AreaDistribution {
    /// Allocate `total_sqft` by the given shares.
    pub fn split(total_sqft: f64, shares: &CategoryDistribution) -> Self {
        AreaDistribution {
            slab_sqft: total_sqft * shares.slab,
            beam_sqft: total_sqft * shares.beam,
            column_sqft: total_sqft * shares.column,
            wall_sqft: total_sqft * shares.wall,
        }
    }

    /// Area allocated to one category
    pub fn area(&self, category: Category) -> f64 {
        match category {
            Category::Slab => self.slab_sqft,
            Category::Beam => self.beam_sqft,
            Category::Column => self.column_sqft,
            Category::Wall => self.wall_sqft,
        }
    }

    /// Sum of the allocated areas
    pub fn total(&self) -> f64 {
        self.slab_sqft + self.beam_sqft + self.column_sqft + self.wall_sqft
    }
}
