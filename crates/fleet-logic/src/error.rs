//! Error types for vessel construction and manifest loading.

use std::num::ParseIntError;

use thiserror::Error;

/// Why a vessel could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VesselError {
    /// Name is the reserved `"NULL"` sentinel.
    #[error("vessel name can't be the NULL sentinel")]
    InvalidName,
    /// Vessel is older than the policy allows.
    #[error("vessel built in {year_built} is {age} years old (limit {max_age})")]
    TooOld {
        year_built: i32,
        age: i64,
        max_age: u32,
    },
    /// Build year is not an integer.
    #[error("year built {input:?} is not a valid year")]
    InvalidYear {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Coarse classification of [`VesselError`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VesselErrorKind {
    /// See [`VesselError::InvalidName`].
    InvalidName,
    /// See [`VesselError::TooOld`].
    TooOld,
    /// See [`VesselError::InvalidYear`].
    ParseError,
}

impl VesselError {
    pub fn kind(&self) -> VesselErrorKind {
        match self {
            Self::InvalidName => VesselErrorKind::InvalidName,
            Self::TooOld { .. } => VesselErrorKind::TooOld,
            Self::InvalidYear { .. } => VesselErrorKind::ParseError,
        }
    }
}

/// Failure to read a fleet manifest document.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse fleet manifest: {0}")]
    Json(#[from] serde_json::Error),
}
