//! Temperature conversion between Celsius, Fahrenheit and Kelvin
//!
//! The scales are related by an offset as well as a ratio, so they cannot
//! share the factor tables. Every conversion goes through Celsius.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Category, UnitSystem};
use crate::error::{ConvertError, Result};

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0) + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

pub fn fahrenheit_to_kelvin(f: f64) -> f64 {
    celsius_to_kelvin(fahrenheit_to_celsius(f))
}

pub fn kelvin_to_fahrenheit(k: f64) -> f64 {
    celsius_to_fahrenheit(kelvin_to_celsius(k))
}

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Scales in display order
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    /// Express a reading on this scale in Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => fahrenheit_to_celsius(value),
            TemperatureScale::Kelvin => kelvin_to_celsius(value),
        }
    }

    /// Express a Celsius reading on this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius_to_fahrenheit(celsius),
            TemperatureScale::Kelvin => celsius_to_kelvin(celsius),
        }
    }

    /// Convert a reading from this scale to `target`
    pub fn convert(&self, target: TemperatureScale, value: f64) -> f64 {
        target.from_celsius(self.to_celsius(value))
    }

    fn from_name(name: &str) -> Option<TemperatureScale> {
        TemperatureScale::ALL
            .into_iter()
            .find(|scale| scale.name() == name)
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The temperature [`UnitSystem`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureScales;

/// Shared temperature system
pub static TEMPERATURE: TemperatureScales = TemperatureScales;

impl TemperatureScales {
    fn lookup(&self, unit: &str) -> Result<TemperatureScale> {
        TemperatureScale::from_name(unit).ok_or_else(|| ConvertError::UnknownUnit {
            category: Category::Temperature,
            unit: unit.to_string(),
        })
    }
}

impl UnitSystem for TemperatureScales {
    fn category(&self) -> Category {
        Category::Temperature
    }

    fn unit_names(&self) -> Vec<&'static str> {
        TemperatureScale::ALL.iter().map(|s| s.name()).collect()
    }

    fn value_prompt(&self) -> &'static str {
        "Enter temperature to convert: "
    }

    fn convert(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
        let from = self.lookup(from_unit)?;
        let to = self.lookup(to_unit)?;
        Ok(from.convert(to, value))
    }
}
