//! Fixed values shared across the vessel model.

/// Name value reserved as an in-band "no name" marker. Vessels may not use it.
pub const NULL_NAME_SENTINEL: &str = "NULL";

/// Oldest a vessel may be, in whole years, when it enters the registry.
pub const MAX_VESSEL_AGE_YEARS: u32 = 20;

/// Meters per second in one knot, as used by the registry (not the exact 1852/3600).
pub const KNOTS_TO_METERS_PER_SECOND: f64 = 0.5144;

/// Format code selecting meters-per-second rendering.
pub const FORMAT_CODE_MS: &str = "MS";

/// Format code selecting knots rendering.
pub const FORMAT_CODE_KN: &str = "KN";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_factor_close_to_exact_knot() {
        let exact = 1852.0 / 3600.0;
        assert!((KNOTS_TO_METERS_PER_SECOND - exact).abs() < 1e-3);
    }
}
