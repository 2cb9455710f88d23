//! Location predicates supplied by the map layer

use serde::{Deserialize, Serialize};

/// What the positioning layer knows about the hex a unit stands on
pub trait UnitLocation {
    fn is_on_airbase(&self) -> bool;
    fn is_on_port(&self) -> bool;
}

/// Location snapshot with fixed answers, for tests and scripted scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedLocation {
    pub on_airbase: bool,
    pub on_port: bool,
}

impl FixedLocation {
    pub fn open_ground() -> Self {
        Self::default()
    }

    pub fn airbase() -> Self {
        Self { on_airbase: true, on_port: false }
    }

    pub fn port() -> Self {
        Self { on_airbase: false, on_port: true }
    }
}

impl UnitLocation for FixedLocation {
    fn is_on_airbase(&self) -> bool {
        self.on_airbase
    }

    fn is_on_port(&self) -> bool {
        self.on_port
    }
}
