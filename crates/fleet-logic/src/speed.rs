//! Vessel speed and its unit renderings.
//!
//! Speeds are stored in knots. Meters per second is derived on demand
//! using the registry's conversion factor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FORMAT_CODE_KN, FORMAT_CODE_MS, KNOTS_TO_METERS_PER_SECOND};

/// Unit a [`Speed`] is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedUnit {
    MetersPerSecond,
    #[default]
    Knots,
}

impl SpeedUnit {
    /// Map a format code to a unit. `"MS"` selects meters per second,
    /// every other code (including `"KN"`) falls back to knots.
    pub fn from_code(code: &str) -> Self {
        match code {
            FORMAT_CODE_MS => Self::MetersPerSecond,
            FORMAT_CODE_KN => Self::Knots,
            _ => Self::Knots,
        }
    }

    /// The format code that selects this unit.
    pub fn code(self) -> &'static str {
        match self {
            Self::MetersPerSecond => FORMAT_CODE_MS,
            Self::Knots => FORMAT_CODE_KN,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::Knots => "knots",
        }
    }
}

/// Speed through water, in knots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    knots: f64,
}

impl Speed {
    pub fn new(knots: f64) -> Self {
        Self { knots }
    }

    pub fn knots(&self) -> f64 {
        self.knots
    }

    pub fn meters_per_second(&self) -> f64 {
        self.knots * KNOTS_TO_METERS_PER_SECOND
    }

    /// Value in the given unit.
    pub fn value_in(&self, unit: SpeedUnit) -> f64 {
        match unit {
            SpeedUnit::MetersPerSecond => self.meters_per_second(),
            SpeedUnit::Knots => self.knots,
        }
    }

    /// Render as `"{value} {suffix}"`, e.g. `"5.144 m/s"` or `"10 knots"`.
    pub fn format_in(&self, unit: SpeedUnit) -> String {
        format!("{} {}", self.value_in(unit), unit.suffix())
    }

    /// Render using a format code (`"MS"`, `"KN"`; anything else means knots).
    pub fn format(&self, code: &str) -> String {
        self.format_in(SpeedUnit::from_code(code))
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.knots, SpeedUnit::Knots.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn meters_per_second_conversion() {
        let speed = Speed::new(10.0);
        assert_eq!(speed.knots(), 10.0);
        assert!((speed.meters_per_second() - 5.144).abs() < 1e-12);
        assert_eq!(Speed::new(0.0).meters_per_second(), 0.0);
    }

    #[test]
    fn format_codes() {
        let speed = Speed::new(10.0);
        assert_eq!(speed.format("MS"), "5.144 m/s");
        assert_eq!(speed.format("KN"), "10 knots");
    }

    #[test]
    fn unknown_code_defaults_to_knots() {
        let speed = Speed::new(10.0);
        assert_eq!(speed.format(""), "10 knots");
        assert_eq!(speed.format("ms"), "10 knots");
        assert_eq!(speed.format("MPH"), "10 knots");
    }

    #[test]
    fn fractional_values_render_shortest() {
        assert_eq!(Speed::new(12.5).format("KN"), "12.5 knots");
        assert_eq!(Speed::new(12.5).format("MS"), "6.43 m/s");
        assert_eq!(Speed::new(20.0).format("MS"), "10.288 m/s");
    }

    #[test]
    fn display_renders_knots() {
        assert_eq!(Speed::new(18.5).to_string(), "18.5 knots");
    }

    #[test]
    fn unit_from_code() {
        assert_eq!(SpeedUnit::from_code("MS"), SpeedUnit::MetersPerSecond);
        assert_eq!(SpeedUnit::from_code("KN"), SpeedUnit::Knots);
        assert_eq!(SpeedUnit::from_code("??"), SpeedUnit::default());
    }

    #[test]
    fn unit_code_selects_same_unit() {
        for unit in [SpeedUnit::MetersPerSecond, SpeedUnit::Knots] {
            assert_eq!(SpeedUnit::from_code(unit.code()), unit);
        }
        assert_eq!(SpeedUnit::Knots.code(), "KN");
    }
}
