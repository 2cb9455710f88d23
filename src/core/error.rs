use thiserror::Error;

use crate::core::types::{ProfileId, UnitId};
use crate::deployment::{Classification, Posture};

/// Reasons a posture transition can be refused.
///
/// Every variant is an ordinary, recoverable rejection: the unit is left exactly
/// as it was and the message is suitable for showing to the player.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PostureError {
    #[error("Unit is already in {0} posture")]
    AlreadyInPosture(Posture),

    #[error("No posture lower than {0}")]
    NoLowerPosture(Posture),

    #[error("{0} units cannot change deployment posture")]
    IneligibleClassification(Classification),

    #[error("Insufficient supply to change posture ({current:.2} days, need more than {threshold:.2})")]
    InsufficientSupply { current: f32, threshold: f32 },

    #[error("Static operations: cannot move from {from} to {to}")]
    StaticOperations { from: Posture, to: Posture },

    #[error("Insufficient movement points to change posture ({current:.2} of {required:.2} required)")]
    InsufficientMovement { current: f32, required: f32 },

    #[error("Unit has no embarked profile")]
    NoEmbarkedProfile,

    #[error("{0} units must be on an airbase to embark")]
    RequiresAirbase(Classification),

    #[error("{0} units must be in a port to embark")]
    RequiresPort(Classification),

    #[error("{0} units can only embark on helicopter transport")]
    RequiresHelicopterTransport(Classification),

    #[error("No movement allowance known for weapon-system profile {0}")]
    UnknownProfile(ProfileId),
}

impl PostureError {
    /// Whether this rejection came from an embark rule.
    pub fn is_transport_rule(&self) -> bool {
        matches!(
            self,
            PostureError::NoEmbarkedProfile
                | PostureError::RequiresAirbase(_)
                | PostureError::RequiresPort(_)
                | PostureError::RequiresHelicopterTransport(_)
        )
    }
}

pub type PostureResult<T> = std::result::Result<T, PostureError>;

/// Errors raised while loading configuration, catalogs, or scenarios.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown weapon-system profile: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Panic for a transition attempted on a destroyed unit.
///
/// Correct calling code never reaches the state machine with a destroyed unit,
/// so this is not surfaced as a [`PostureError`].
#[track_caller]
pub fn destroyed_unit_violation(unit: UnitId) -> ! {
    panic!("contract violation: posture transition requested for destroyed unit {unit}")
}
