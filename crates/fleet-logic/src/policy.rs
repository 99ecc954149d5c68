//! Validation policy applied when vessels enter the registry.
//!
//! ```
//! use fleet_logic::policy::ValidationPolicy;
//!
//! let policy = ValidationPolicy::as_of(2024);
//! assert_eq!(policy.max_age_years, 20);
//! assert_eq!(policy.current_year(), 2024);
//! ```

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_VESSEL_AGE_YEARS;

/// Age limit and the year ages are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Oldest accepted vessel, in whole years.
    pub max_age_years: u32,
    /// Year to measure age against (None = current local calendar year).
    pub reference_year: Option<i32>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_age_years: MAX_VESSEL_AGE_YEARS,
            reference_year: None,
        }
    }
}

impl ValidationPolicy {
    /// Default limits, pinned to a fixed reference year.
    pub fn as_of(year: i32) -> Self {
        Self {
            reference_year: Some(year),
            ..Self::default()
        }
    }

    /// The year vessel ages are measured against.
    pub fn current_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Age in years of a vessel built in `year_built`. Negative for future years.
    ///
    /// Computed in `i64` so any pair of `i32` years yields an exact age.
    pub fn age_of(&self, year_built: i32) -> i64 {
        i64::from(self.current_year()) - i64::from(year_built)
    }

    /// Whether a vessel of the given age is within the limit.
    pub fn accepts_age(&self, age: i64) -> bool {
        age <= i64::from(self.max_age_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_twenty_year_limit_and_clock() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy.max_age_years, 20);
        assert_eq!(policy.reference_year, None);
        assert_eq!(policy.current_year(), chrono::Local::now().year());
    }

    #[test]
    fn age_boundary() {
        let policy = ValidationPolicy::as_of(2024);
        assert_eq!(policy.age_of(2004), 20);
        assert!(policy.accepts_age(20));
        assert!(!policy.accepts_age(21));
    }

    #[test]
    fn future_build_year_is_accepted() {
        let policy = ValidationPolicy::as_of(2024);
        assert_eq!(policy.age_of(2030), -6);
        assert!(policy.accepts_age(-6));
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let policy = ValidationPolicy::as_of(2024);
        assert_eq!(policy.age_of(i32::MIN), 2024 + 2_147_483_648);
        assert!(!policy.accepts_age(policy.age_of(i32::MIN)));

        let far_future = ValidationPolicy::as_of(i32::MAX);
        assert_eq!(far_future.age_of(-5), i64::from(i32::MAX) + 5);
        assert_eq!(ValidationPolicy::as_of(i32::MIN).age_of(i32::MAX), -4_294_967_295);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let policy: ValidationPolicy = serde_json::from_str(r#"{"reference_year": 2010}"#).unwrap();
        assert_eq!(policy, ValidationPolicy::as_of(2010));

        let policy: ValidationPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, ValidationPolicy::default());
    }
}
