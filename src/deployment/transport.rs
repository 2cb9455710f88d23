//! Embark and debark rules
//!
//! Loading onto transport depends on both classification and where the unit
//! stands. Unloading has one hook per insertion method; hex legality for
//! landings is settled by the map layer before a request reaches here, so
//! today every hook accepts.

use crate::core::error::{PostureError, PostureResult};
use crate::unit::{UnitLocation, UnitProfile};

use super::classification::{ClassCategory, TransportKind};

/// Preconditions for entering Embarked
pub fn check_embark(unit: &UnitProfile, location: &dyn UnitLocation) -> PostureResult<()> {
    let transport = unit.transport_kind().ok_or(PostureError::NoEmbarkedProfile)?;
    let classification = unit.classification;

    match classification.category() {
        ClassCategory::Airborne => {
            if !location.is_on_airbase() {
                return Err(PostureError::RequiresAirbase(classification));
            }
        }
        ClassCategory::SpecialForces => match transport {
            TransportKind::FixedWing if !location.is_on_airbase() => {
                return Err(PostureError::RequiresAirbase(classification));
            }
            TransportKind::FixedWing | TransportKind::Helicopter => {}
        },
        ClassCategory::Marine => {
            if !location.is_on_port() {
                return Err(PostureError::RequiresPort(classification));
            }
        }
        ClassCategory::AirMobile => {
            if transport != TransportKind::Helicopter {
                return Err(PostureError::RequiresHelicopterTransport(classification));
            }
        }
        ClassCategory::FixedWing | ClassCategory::Facility | ClassCategory::Ground => {}
    }

    Ok(())
}

/// Preconditions for leaving Embarked
pub fn check_debark(unit: &UnitProfile, is_beachhead: bool) -> PostureResult<()> {
    match unit.classification.category() {
        ClassCategory::Marine if is_beachhead => beachhead_landing(unit),
        ClassCategory::Airborne => airborne_drop(unit),
        ClassCategory::AirMobile => air_mobile_landing(unit),
        ClassCategory::SpecialForces => special_forces_insertion(unit),
        ClassCategory::Marine
        | ClassCategory::FixedWing
        | ClassCategory::Facility
        | ClassCategory::Ground => Ok(()),
    }
}

fn beachhead_landing(unit: &UnitProfile) -> PostureResult<()> {
    tracing::trace!("{} landing across the beach", unit.name);
    Ok(())
}

fn airborne_drop(unit: &UnitProfile) -> PostureResult<()> {
    tracing::trace!("{} dropping by parachute", unit.name);
    Ok(())
}

fn air_mobile_landing(unit: &UnitProfile) -> PostureResult<()> {
    tracing::trace!("{} landing by helicopter", unit.name);
    Ok(())
}

fn special_forces_insertion(unit: &UnitProfile) -> PostureResult<()> {
    tracing::trace!("{} inserting ({:?})", unit.name, unit.transport_kind());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ProfileId;
    use crate::deployment::Classification;
    use crate::unit::FixedLocation;

    fn unit(classification: Classification, transport: Option<TransportKind>) -> UnitProfile {
        let profile = UnitProfile::new("test", classification, ProfileId::new("ground"));
        match transport {
            Some(kind) => profile.with_embarked(ProfileId::new("lift"), kind),
            None => profile,
        }
    }

    #[test]
    fn test_embark_requires_profile() {
        let result = check_embark(&unit(Classification::Infantry, None), &FixedLocation::airbase());
        assert_eq!(result, Err(PostureError::NoEmbarkedProfile));
    }

    #[test]
    fn test_ground_units_embark_anywhere() {
        let armor = unit(Classification::Armor, Some(TransportKind::FixedWing));
        assert!(check_embark(&armor, &FixedLocation::open_ground()).is_ok());
    }

    #[test]
    fn test_airborne_needs_airbase() {
        let para = unit(Classification::MechanizedAirborne, Some(TransportKind::FixedWing));
        assert_eq!(
            check_embark(&para, &FixedLocation::open_ground()),
            Err(PostureError::RequiresAirbase(Classification::MechanizedAirborne))
        );
        assert!(check_embark(&para, &FixedLocation::airbase()).is_ok());
    }

    #[test]
    fn test_special_forces_depends_on_transport() {
        let by_plane = unit(Classification::SpecialForces, Some(TransportKind::FixedWing));
        let by_helo = unit(Classification::SpecialForces, Some(TransportKind::Helicopter));

        assert!(check_embark(&by_plane, &FixedLocation::open_ground()).is_err());
        assert!(check_embark(&by_plane, &FixedLocation::airbase()).is_ok());
        assert!(check_embark(&by_helo, &FixedLocation::open_ground()).is_ok());
    }

    #[test]
    fn test_marines_need_port() {
        let marines = unit(Classification::Marine, Some(TransportKind::Helicopter));
        assert_eq!(
            check_embark(&marines, &FixedLocation::airbase()),
            Err(PostureError::RequiresPort(Classification::Marine))
        );
        assert!(check_embark(&marines, &FixedLocation::port()).is_ok());
    }

    #[test]
    fn test_air_mobile_needs_helicopters() {
        let cav = unit(Classification::AirMobile, Some(TransportKind::FixedWing));
        assert_eq!(
            check_embark(&cav, &FixedLocation::airbase()),
            Err(PostureError::RequiresHelicopterTransport(Classification::AirMobile))
        );
        let cav = unit(Classification::MechanizedAirMobile, Some(TransportKind::Helicopter));
        assert!(check_embark(&cav, &FixedLocation::open_ground()).is_ok());
    }

    #[test]
    fn test_every_debark_hook_accepts() {
        for classification in [
            Classification::Marine,
            Classification::Airborne,
            Classification::AirMobile,
            Classification::SpecialForces,
            Classification::Infantry,
        ] {
            let u = unit(classification, Some(TransportKind::Helicopter));
            assert!(check_debark(&u, true).is_ok());
            assert!(check_debark(&u, false).is_ok());
        }
    }
}
