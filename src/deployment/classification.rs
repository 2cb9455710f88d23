//! Unit classifications and readiness tiers
//!
//! Classification is fixed for a unit's lifetime and decides which posture
//! rules apply to it. The rule tables in `guards` and `transport` match on
//! [`ClassCategory`] exhaustively, so adding a classification here forces a
//! decision about its category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of military unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    // Fixed-wing aircraft
    Fighter,
    AttackAircraft,
    Bomber,
    TransportAircraft,

    // Static facilities
    Airbase,
    SupplyDepot,
    RadarSite,

    // Airborne
    Airborne,
    MechanizedAirborne,

    // Air-mobile
    AirMobile,
    MechanizedAirMobile,

    // Marine
    Marine,
    MechanizedMarine,

    SpecialForces,

    // Other ground
    Infantry,
    MechanizedInfantry,
    Armor,
    Artillery,
    AirDefense,
    Recon,
    Engineers,
    Headquarters,
}

/// Rule grouping for classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassCategory {
    FixedWing,
    Facility,
    Airborne,
    AirMobile,
    Marine,
    SpecialForces,
    Ground,
}

impl Classification {
    pub fn category(self) -> ClassCategory {
        use Classification::*;

        match self {
            Fighter | AttackAircraft | Bomber | TransportAircraft => ClassCategory::FixedWing,
            Airbase | SupplyDepot | RadarSite => ClassCategory::Facility,
            Airborne | MechanizedAirborne => ClassCategory::Airborne,
            AirMobile | MechanizedAirMobile => ClassCategory::AirMobile,
            Marine | MechanizedMarine => ClassCategory::Marine,
            SpecialForces => ClassCategory::SpecialForces,
            Infantry | MechanizedInfantry | Armor | Artillery | AirDefense | Recon | Engineers
            | Headquarters => ClassCategory::Ground,
        }
    }

    /// Can units of this classification change posture at all?
    pub fn can_change_posture(self) -> bool {
        match self.category() {
            ClassCategory::FixedWing | ClassCategory::Facility => false,
            ClassCategory::Airborne
            | ClassCategory::AirMobile
            | ClassCategory::Marine
            | ClassCategory::SpecialForces
            | ClassCategory::Ground => true,
        }
    }

    pub fn is_aircraft(self) -> bool {
        self.category() == ClassCategory::FixedWing
    }

    pub fn is_facility(self) -> bool {
        self.category() == ClassCategory::Facility
    }

    pub fn name(self) -> &'static str {
        use Classification::*;

        match self {
            Fighter => "Fighter",
            AttackAircraft => "Attack Aircraft",
            Bomber => "Bomber",
            TransportAircraft => "Transport Aircraft",
            Airbase => "Airbase",
            SupplyDepot => "Supply Depot",
            RadarSite => "Radar Site",
            Airborne => "Airborne",
            MechanizedAirborne => "Mechanized Airborne",
            AirMobile => "Air Mobile",
            MechanizedAirMobile => "Mechanized Air Mobile",
            Marine => "Marine",
            MechanizedMarine => "Mechanized Marine",
            SpecialForces => "Special Forces",
            Infantry => "Infantry",
            MechanizedInfantry => "Mechanized Infantry",
            Armor => "Armor",
            Artillery => "Artillery",
            AirDefense => "Air Defense",
            Recon => "Recon",
            Engineers => "Engineers",
            Headquarters => "Headquarters",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a unit is carried while Embarked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    FixedWing,  // Needs a runway to load
    Helicopter, // Loads anywhere
}

/// Operational readiness of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum EfficiencyTier {
    /// Cannot leave prepared positions or form a road column
    StaticOperations,
    DegradedOperations,
    #[default]
    NormalOperations,
    FullOperations,
    PeakOperations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_and_facilities_are_ineligible() {
        assert!(!Classification::Fighter.can_change_posture());
        assert!(!Classification::TransportAircraft.can_change_posture());
        assert!(!Classification::SupplyDepot.can_change_posture());
        assert!(Classification::Armor.can_change_posture());
        assert!(Classification::SpecialForces.can_change_posture());
    }

    #[test]
    fn test_mechanized_variants_share_category() {
        assert_eq!(Classification::MechanizedAirborne.category(), ClassCategory::Airborne);
        assert_eq!(Classification::MechanizedAirMobile.category(), ClassCategory::AirMobile);
        assert_eq!(Classification::MechanizedMarine.category(), ClassCategory::Marine);
    }

    #[test]
    fn test_category_queries() {
        assert!(Classification::Bomber.is_aircraft());
        assert!(Classification::RadarSite.is_facility());
        assert!(!Classification::Marine.is_aircraft());
    }

    #[test]
    fn test_static_operations_is_lowest_tier() {
        assert!(EfficiencyTier::StaticOperations < EfficiencyTier::DegradedOperations);
        assert_eq!(EfficiencyTier::default(), EfficiencyTier::NormalOperations);
    }
}
