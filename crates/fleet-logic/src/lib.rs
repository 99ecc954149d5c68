//! Pure vessel registry model for Fleet.
//!
//! This crate contains the vessel taxonomy and its validation rules,
//! independent of any storage, UI, or runtime. Functions take plain data
//! and return results, so everything here is unit-testable in isolation.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Age limit, name sentinel, unit conversion factor |
//! | [`error`] | Construction and manifest error types |
//! | [`manifest`] | JSON fleet manifests and bulk validation |
//! | [`policy`] | Validation policy (age limit, reference year) |
//! | [`speed`] | Speed values and unit formatting |
//! | [`vessel`] | Vessels, vessel classes, descriptions |
//!
//! ```
//! use fleet_logic::speed::Speed;
//! use fleet_logic::vessel::Vessel;
//!
//! let mut ferry = Vessel::ferry("Titan", "2020", 50).unwrap();
//! ferry.set_speed(Speed::new(10.0));
//! assert_eq!(ferry.describe(), "Vessel: Titan (2020), Passengers: 50");
//! assert_eq!(ferry.speed().unwrap().format("MS"), "5.144 m/s");
//! ```

pub mod constants;
pub mod error;
pub mod manifest;
pub mod policy;
pub mod speed;
pub mod vessel;

pub use error::{ManifestError, VesselError, VesselErrorKind};
pub use policy::ValidationPolicy;
pub use speed::{Speed, SpeedUnit};
pub use vessel::{Vessel, VesselClass};
