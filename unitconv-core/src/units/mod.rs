//! Unit categories and the conversion systems behind them
//!
//! Each [`Category`] is served by a [`UnitSystem`]:
//!
//! - Length, volume and weight use a [`UnitTable`] of scalar factors and
//!   convert by pivoting through the table's base unit.
//! - Temperature uses [`TemperatureScales`], an affine conversion routed
//!   through Celsius.
//!
//! # Example
//!
//! ```rust
//! use unitconv_core::units::{Category, UnitSystem, unit_system};
//!
//! let length = unit_system(Category::Length);
//! let feet = length.convert("meters", "feet", 1.0).unwrap();
//! assert_eq!(format!("{:.4}", feet), "3.2808");
//! ```

mod table;
mod temperature;

pub use table::{LENGTH, UnitTable, VOLUME, WEIGHT};
pub use temperature::{
    TEMPERATURE, TemperatureScale, TemperatureScales, celsius_to_fahrenheit, celsius_to_kelvin,
    fahrenheit_to_celsius, fahrenheit_to_kelvin, kelvin_to_celsius, kelvin_to_fahrenheit,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// Conversion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Volume,
    Temperature,
    Weight,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Volume,
        Category::Temperature,
        Category::Weight,
    ];

    /// Display name, as written to the history file
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Volume => "Volume",
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
        }
    }

    /// Look up a category by its 1-based menu position
    pub fn from_menu_index(index: usize) -> Option<Category> {
        index
            .checked_sub(1)
            .and_then(|i| Category::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

/// A set of units within one category that can be converted among each other
pub trait UnitSystem: Send + Sync {
    /// Category served by this system
    fn category(&self) -> Category;

    /// Unit names in display order
    fn unit_names(&self) -> Vec<&'static str>;

    /// Prompt shown when asking for the value to convert
    fn value_prompt(&self) -> &'static str {
        "Enter value to convert: "
    }

    /// Convert `value` from one named unit to another
    fn convert(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<f64>;

    /// Number of units in the system
    fn len(&self) -> usize {
        self.unit_names().len()
    }

    /// Whether the system has no units
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unit name at a 1-based menu position
    fn unit_at(&self, index: usize) -> Option<&'static str> {
        index
            .checked_sub(1)
            .and_then(|i| self.unit_names().get(i).copied())
    }

    /// Canonical unit name for a case-insensitive match
    fn resolve_unit(&self, name: &str) -> Result<&'static str> {
        let wanted = name.trim();
        self.unit_names()
            .into_iter()
            .find(|unit| unit.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConvertError::UnknownUnit {
                category: self.category(),
                unit: name.to_string(),
            })
    }
}

/// The unit system serving a category
pub fn unit_system(category: Category) -> &'static dyn UnitSystem {
    match category {
        Category::Length => &LENGTH,
        Category::Volume => &VOLUME,
        Category::Temperature => &TEMPERATURE,
        Category::Weight => &WEIGHT,
    }
}
