//! Vessels and their classes.
//!
//! A vessel is a shared base record (name, build year, optional speed)
//! plus a [`VesselClass`] payload carrying the one attribute specific to
//! ferries, tugboats, or submarines. Construction validates the base
//! record against a [`ValidationPolicy`] and is the only way to obtain a
//! `Vessel`, so every value in circulation satisfies the registry rules.
//!
//! ```
//! use fleet_logic::policy::ValidationPolicy;
//! use fleet_logic::vessel::{Vessel, VesselClass};
//! use fleet_logic::error::VesselErrorKind;
//!
//! let policy = ValidationPolicy::as_of(2024);
//! let tug = Vessel::with_policy("Hercules", "2015", VesselClass::Tugboat { max_force: 800 }, &policy)
//!     .unwrap();
//! assert_eq!(tug.describe(), "Vessel: Hercules (2015), Max Force: 800");
//!
//! let err = Vessel::with_policy("Relic", "2000", VesselClass::Ferry { passengers: 10 }, &policy)
//!     .unwrap_err();
//! assert_eq!(err.kind(), VesselErrorKind::TooOld);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NULL_NAME_SENTINEL;
use crate::error::VesselError;
use crate::policy::ValidationPolicy;
use crate::speed::Speed;

/// Class-specific payload of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum VesselClass {
    Ferry { passengers: u32 },
    Tugboat { max_force: i32 },
    Submarine { max_depth: i32 },
}

impl VesselClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ferry { .. } => "Ferry",
            Self::Tugboat { .. } => "Tugboat",
            Self::Submarine { .. } => "Submarine",
        }
    }

    /// Label and value of the class attribute, as shown in descriptions.
    pub fn attribute(&self) -> (&'static str, i64) {
        match *self {
            Self::Ferry { passengers } => ("Passengers", i64::from(passengers)),
            Self::Tugboat { max_force } => ("Max Force", i64::from(max_force)),
            Self::Submarine { max_depth } => ("Max Depth", i64::from(max_depth)),
        }
    }
}

/// A registered vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vessel {
    name: String,
    year_built: String,
    speed: Option<Speed>,
    #[serde(flatten)]
    class: VesselClass,
}

impl Vessel {
    /// Build a vessel, measuring its age against the current year.
    pub fn new(
        name: impl Into<String>,
        year_built: impl Into<String>,
        class: VesselClass,
    ) -> Result<Self, VesselError> {
        Self::with_policy(name, year_built, class, &ValidationPolicy::default())
    }

    /// Build a vessel under an explicit policy.
    ///
    /// The name is checked before the year, so a `"NULL"` name is reported
    /// as [`VesselError::InvalidName`] even when the year is malformed.
    pub fn with_policy(
        name: impl Into<String>,
        year_built: impl Into<String>,
        class: VesselClass,
        policy: &ValidationPolicy,
    ) -> Result<Self, VesselError> {
        let name = name.into();
        let year_built = year_built.into();

        if name == NULL_NAME_SENTINEL {
            return Err(VesselError::InvalidName);
        }

        let year = parse_year(&year_built)?;
        let age = policy.age_of(year);
        if !policy.accepts_age(age) {
            return Err(VesselError::TooOld {
                year_built: year,
                age,
                max_age: policy.max_age_years,
            });
        }

        log::debug!("registered {} {name:?} ({year_built}), age {age}", class.name());

        Ok(Self {
            name,
            year_built,
            speed: None,
            class,
        })
    }

    pub fn ferry(
        name: impl Into<String>,
        year_built: impl Into<String>,
        passengers: u32,
    ) -> Result<Self, VesselError> {
        Self::new(name, year_built, VesselClass::Ferry { passengers })
    }

    pub fn tugboat(
        name: impl Into<String>,
        year_built: impl Into<String>,
        max_force: i32,
    ) -> Result<Self, VesselError> {
        Self::new(name, year_built, VesselClass::Tugboat { max_force })
    }

    pub fn submarine(
        name: impl Into<String>,
        year_built: impl Into<String>,
        max_depth: i32,
    ) -> Result<Self, VesselError> {
        Self::new(name, year_built, VesselClass::Submarine { max_depth })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build year exactly as given at construction.
    pub fn year_built(&self) -> &str {
        &self.year_built
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn speed(&self) -> Option<Speed> {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = Some(speed);
    }

    pub fn clear_speed(&mut self) {
        self.speed = None;
    }

    /// Passenger count, for ferries.
    pub fn passengers(&self) -> Option<u32> {
        match self.class {
            VesselClass::Ferry { passengers } => Some(passengers),
            _ => None,
        }
    }

    /// Towing force rating, for tugboats.
    pub fn max_force(&self) -> Option<i32> {
        match self.class {
            VesselClass::Tugboat { max_force } => Some(max_force),
            _ => None,
        }
    }

    /// Depth rating, for submarines.
    pub fn max_depth(&self) -> Option<i32> {
        match self.class {
            VesselClass::Submarine { max_depth } => Some(max_depth),
            _ => None,
        }
    }

    /// `"Vessel: {name} ({year_built})"`, without the class attribute.
    pub fn base_description(&self) -> String {
        format!("Vessel: {} ({})", self.name, self.year_built)
    }

    /// Full description, e.g. `"Vessel: Titan (2010), Passengers: 50"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, value) = self.class.attribute();
        write!(f, "{}, {label}: {value}", self.base_description())
    }
}

fn parse_year(input: &str) -> Result<i32, VesselError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|source| VesselError::InvalidYear {
            input: input.to_string(),
            source,
        })
}
