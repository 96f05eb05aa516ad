//! Scalar unit tables converted through a base unit

use super::{Category, UnitSystem};
use crate::error::{ConvertError, Result};

/// Units of one category, each with a factor relative to the base unit.
///
/// A factor is the number of units equal to one base unit, so
/// `base = value / factor_from` and `result = base * factor_to`.
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    category: Category,
    units: &'static [(&'static str, f64)],
}

/// Length units (base: meters)
pub static LENGTH: UnitTable = UnitTable {
    category: Category::Length,
    units: &[
        ("meters", 1.0),
        ("feet", 3.28084),
        ("inches", 39.3701),
        ("centimeters", 100.0),
        ("kilometers", 0.001),
        ("miles", 0.000621371),
    ],
};

/// Volume units (base: liters)
pub static VOLUME: UnitTable = UnitTable {
    category: Category::Volume,
    units: &[
        ("liters", 1.0),
        ("milliliters", 1000.0),
        ("gallons", 0.264172),
        ("cups", 4.22675),
        ("cubic meters", 0.001),
    ],
};

/// Weight units (base: kilograms)
pub static WEIGHT: UnitTable = UnitTable {
    category: Category::Weight,
    units: &[
        ("kilograms", 1.0),
        ("grams", 1000.0),
        ("pounds", 2.20462),
        ("ounces", 35.274),
    ],
};

impl UnitTable {
    /// Name of the unit whose factor is 1.0
    pub fn base_unit(&self) -> Option<&'static str> {
        self.units
            .iter()
            .find(|(_, factor)| *factor == 1.0)
            .map(|(name, _)| *name)
    }

    /// Factor for a unit name (exact match)
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.units
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    /// All `(name, factor)` pairs in display order
    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.units
    }

    fn lookup(&self, unit: &str) -> Result<f64> {
        self.factor(unit).ok_or_else(|| ConvertError::UnknownUnit {
            category: self.category,
            unit: unit.to_string(),
        })
    }
}

impl UnitSystem for UnitTable {
    fn category(&self) -> Category {
        self.category
    }

    fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|(name, _)| *name).collect()
    }

    fn convert(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
        let from_factor = self.lookup(from_unit)?;
        let to_factor = self.lookup(to_unit)?;

        // Same unit: the factors cancel, skip the rounding of a round trip
        if from_unit == to_unit {
            return Ok(value);
        }

        let base_value = value / from_factor;
        Ok(base_value * to_factor)
    }
}
