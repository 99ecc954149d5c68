//! Fleet manifests: bulk vessel registration from JSON.
//!
//! A manifest carries its own [`ValidationPolicy`] at the top level and a
//! list of vessel entries. Building a manifest validates every entry and
//! splits the result into accepted vessels and rejected entries, so one
//! bad row never hides the rest of the fleet.
//!
//! ```
//! use fleet_logic::manifest::FleetManifest;
//!
//! let json = r#"{
//!     "reference_year": 2024,
//!     "vessels": [
//!         { "name": "Titan", "year_built": "2010", "class": "ferry", "passengers": 50 },
//!         { "name": "NULL", "year_built": "2020", "class": "tugboat", "max_force": 500 }
//!     ]
//! }"#;
//! let load = FleetManifest::from_json(json).unwrap().build();
//! assert_eq!(load.vessels.len(), 1);
//! assert_eq!(load.rejected.len(), 1);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ManifestError, VesselError};
use crate::policy::ValidationPolicy;
use crate::speed::Speed;
use crate::vessel::{Vessel, VesselClass};

/// One vessel row in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetEntry {
    pub name: String,
    pub year_built: String,
    #[serde(flatten)]
    pub class: VesselClass,
    /// Cruising speed in knots, if known.
    #[serde(default)]
    pub speed_knots: Option<f64>,
}

impl FleetEntry {
    /// Validate this entry into a vessel, applying its speed if present.
    pub fn to_vessel(&self, policy: &ValidationPolicy) -> Result<Vessel, VesselError> {
        let mut vessel = Vessel::with_policy(&*self.name, &*self.year_built, self.class, policy)?;
        if let Some(knots) = self.speed_knots {
            vessel.set_speed(Speed::new(knots));
        }
        Ok(vessel)
    }
}

/// A complete manifest document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetManifest {
    #[serde(flatten)]
    pub policy: ValidationPolicy,
    #[serde(default)]
    pub vessels: Vec<FleetEntry>,
}

/// An entry that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEntry {
    /// Position of the entry in the manifest.
    pub index: usize,
    pub name: String,
    pub error: VesselError,
}

/// Result of building a manifest.
#[derive(Debug, Clone, Default)]
pub struct FleetLoad {
    /// Accepted vessels, in manifest order.
    pub vessels: Vec<Vessel>,
    /// Rejected entries, in manifest order.
    pub rejected: Vec<RejectedEntry>,
}

impl FleetManifest {
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every entry against the manifest's policy.
    pub fn build(&self) -> FleetLoad {
        let mut load = FleetLoad::default();

        for (index, entry) in self.vessels.iter().enumerate() {
            match entry.to_vessel(&self.policy) {
                Ok(vessel) => load.vessels.push(vessel),
                Err(error) => {
                    log::warn!("manifest entry {index} ({:?}) rejected: {error}", entry.name);
                    load.rejected.push(RejectedEntry {
                        index,
                        name: entry.name.clone(),
                        error,
                    });
                }
            }
        }

        log::info!(
            "fleet manifest: {} accepted, {} rejected",
            load.vessels.len(),
            load.rejected.len()
        );
        load
    }
}

impl FleetLoad {
    /// Number of accepted vessels per class name.
    pub fn count_by_class(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for vessel in &self.vessels {
            *counts.entry(vessel.class().name()).or_insert(0) += 1;
        }
        counts
    }

    /// Look up an accepted vessel by exact name.
    pub fn find(&self, name: &str) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VesselErrorKind;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "reference_year": 2024,
        "max_age_years": 20,
        "vessels": [
            { "name": "Titan", "year_built": "2010", "class": "ferry", "passengers": 50, "speed_knots": 18.5 },
            { "name": "Hercules", "year_built": "2004", "class": "tugboat", "max_force": 800 },
            { "name": "Relic", "year_built": "2003", "class": "submarine", "max_depth": 250 },
            { "name": "NULL", "year_built": "2020", "class": "ferry", "passengers": 10 },
            { "name": "Nautilus", "year_built": "20x0", "class": "submarine", "max_depth": 300 },
            { "name": "Kraken", "year_built": "2022", "class": "submarine", "max_depth": 450 }
        ]
    }"#;

    #[test]
    fn parses_policy_and_entries() {
        let manifest = FleetManifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.policy, ValidationPolicy::as_of(2024));
        assert_eq!(manifest.vessels.len(), 6);
        assert_eq!(
            manifest.vessels[0],
            FleetEntry {
                name: "Titan".to_string(),
                year_built: "2010".to_string(),
                class: VesselClass::Ferry { passengers: 50 },
                speed_knots: Some(18.5),
            }
        );
        assert_eq!(manifest.vessels[1].speed_knots, None);
    }

    #[test]
    fn build_splits_accepted_and_rejected() {
        let load = FleetManifest::from_json(SAMPLE).unwrap().build();

        let names: Vec<_> = load.vessels.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["Titan", "Hercules", "Kraken"]);

        let rejected: Vec<_> = load
            .rejected
            .iter()
            .map(|r| (r.index, r.name.as_str(), r.error.kind()))
            .collect();
        assert_eq!(
            rejected,
            vec![
                (2, "Relic", VesselErrorKind::TooOld),
                (3, "NULL", VesselErrorKind::InvalidName),
                (4, "Nautilus", VesselErrorKind::ParseError),
            ]
        );
    }

    #[test]
    fn speed_applied_from_entry() {
        let load = FleetManifest::from_json(SAMPLE).unwrap().build();
        let titan = load.find("Titan").unwrap();
        assert_eq!(titan.speed(), Some(Speed::new(18.5)));
        assert_eq!(load.find("Hercules").unwrap().speed(), None);
        assert!(load.find("Relic").is_none());
    }

    #[test]
    fn counts_by_class() {
        let load = FleetManifest::from_json(SAMPLE).unwrap().build();
        let counts = load.count_by_class();
        assert_eq!(counts.get("Ferry"), Some(&1));
        assert_eq!(counts.get("Tugboat"), Some(&1));
        assert_eq!(counts.get("Submarine"), Some(&1));
    }

    #[test]
    fn extreme_reference_year_rejects_without_panic() {
        let json = r#"{
            "reference_year": 2147483647,
            "vessels": [
                { "name": "Ark", "year_built": "-5", "class": "ferry", "passengers": 2 },
                { "name": "Ark II", "year_built": "2147483640", "class": "ferry", "passengers": 2 }
            ]
        }"#;
        let load = FleetManifest::from_json(json).unwrap().build();
        assert_eq!(load.vessels.len(), 1);
        assert_eq!(load.vessels[0].name(), "Ark II");
        assert_eq!(
            load.rejected[0].error,
            VesselError::TooOld {
                year_built: -5,
                age: i64::from(i32::MAX) + 5,
                max_age: 20,
            }
        );
    }

    #[test]
    fn unknown_class_is_a_manifest_error() {
        let json = r#"{ "vessels": [ { "name": "Ark", "year_built": "2020", "class": "galleon" } ] }"#;
        assert!(matches!(
            FleetManifest::from_json(json),
            Err(ManifestError::Json(_))
        ));
    }

    #[test]
    fn empty_document_is_empty_fleet() {
        let manifest = FleetManifest::from_json("{}").unwrap();
        assert_eq!(manifest, FleetManifest::default());
        let load = manifest.build();
        assert!(load.vessels.is_empty());
        assert!(load.rejected.is_empty());
    }
}
