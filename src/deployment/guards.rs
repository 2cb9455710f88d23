//! Guard pipeline shared by both transition directions
//!
//! Checks run in a fixed order and the first failure wins, so the reason a
//! player sees is always the most fundamental one.

use crate::core::config::PostureConfig;
use crate::core::error::{destroyed_unit_violation, PostureError, PostureResult};
use crate::unit::ResourcePools;

use super::classification::EfficiencyTier;
use super::machine::UnitStatus;
use super::posture::Posture;

/// Run every guard for a move from `current` to `target`
///
/// Panics if the unit is destroyed.
pub fn check_transition(
    current: Posture,
    target: Posture,
    unit: &UnitStatus<'_>,
    pools: &ResourcePools,
    config: &PostureConfig,
) -> PostureResult<()> {
    if target == current {
        return Err(PostureError::AlreadyInPosture(current));
    }

    if unit.is_destroyed {
        destroyed_unit_violation(unit.profile.id);
    }

    let classification = unit.profile.classification;
    if !classification.can_change_posture() {
        return Err(PostureError::IneligibleClassification(classification));
    }

    check_supply(pools, config)?;
    check_efficiency(current, target, unit.efficiency)?;
    check_movement(pools, config)
}

fn check_supply(pools: &ResourcePools, config: &PostureConfig) -> PostureResult<()> {
    let current = pools.supply.current();
    if current <= config.critical_supply_threshold {
        return Err(PostureError::InsufficientSupply {
            current,
            threshold: config.critical_supply_threshold,
        });
    }
    Ok(())
}

/// Static operations pins a unit in prepared positions and bars the road column
fn check_efficiency(current: Posture, target: Posture, efficiency: EfficiencyTier) -> PostureResult<()> {
    if efficiency == EfficiencyTier::StaticOperations && (current.is_dug_in() || target == Posture::Mobile) {
        return Err(PostureError::StaticOperations { from: current, to: target });
    }
    Ok(())
}

fn check_movement(pools: &ResourcePools, config: &PostureConfig) -> PostureResult<()> {
    let required = movement_cost(pools, config);
    let current = pools.movement.current();
    if current < required {
        return Err(PostureError::InsufficientMovement { current, required });
    }
    Ok(())
}

/// Movement points a posture change needs and spends
pub fn movement_cost(pools: &ResourcePools, config: &PostureConfig) -> f32 {
    config.deployment_movement_fraction * pools.movement.max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ProfileId;
    use crate::deployment::Classification;
    use crate::unit::{ActionCounter, Gauge, UnitProfile};

    fn pools(movement: f32, supply: f32) -> ResourcePools {
        ResourcePools::new(Gauge::new(movement, 10.0), Gauge::new(supply, 7.0), ActionCounter::new(2))
    }

    fn status(profile: &UnitProfile, efficiency: EfficiencyTier) -> UnitStatus<'_> {
        UnitStatus { profile, efficiency, is_destroyed: false }
    }

    fn infantry() -> UnitProfile {
        UnitProfile::new("3rd Rifles", Classification::Infantry, ProfileId::new("rifle_company"))
    }

    #[test]
    fn test_same_state_rejected_first() {
        let profile = UnitProfile::new("Depot", Classification::SupplyDepot, ProfileId::new("depot"));
        let result = check_transition(
            Posture::Deployed,
            Posture::Deployed,
            &status(&profile, EfficiencyTier::NormalOperations),
            &pools(0.0, 0.0),
            &PostureConfig::default(),
        );
        assert_eq!(result, Err(PostureError::AlreadyInPosture(Posture::Deployed)));
    }

    #[test]
    fn test_classification_checked_before_resources() {
        let profile = UnitProfile::new("VF-1", Classification::Fighter, ProfileId::new("f14"));
        let result = check_transition(
            Posture::Deployed,
            Posture::HastyDefense,
            &status(&profile, EfficiencyTier::NormalOperations),
            &pools(0.0, 0.0),
            &PostureConfig::default(),
        );
        assert_eq!(result, Err(PostureError::IneligibleClassification(Classification::Fighter)));
    }

    #[test]
    fn test_supply_at_threshold_rejected() {
        let profile = infantry();
        let result = check_transition(
            Posture::Deployed,
            Posture::HastyDefense,
            &status(&profile, EfficiencyTier::NormalOperations),
            &pools(10.0, 1.0),
            &PostureConfig::default(),
        );
        assert!(matches!(result, Err(PostureError::InsufficientSupply { .. })));
    }

    #[test]
    fn test_static_operations_blocks_dug_in_and_mobile() {
        let profile = infantry();
        let config = PostureConfig::default();
        let unit = status(&profile, EfficiencyTier::StaticOperations);

        let leaving_trench = check_transition(Posture::Entrenched, Posture::HastyDefense, &unit, &pools(10.0, 5.0), &config);
        assert!(matches!(leaving_trench, Err(PostureError::StaticOperations { .. })));

        let to_column = check_transition(Posture::Deployed, Posture::Mobile, &unit, &pools(10.0, 5.0), &config);
        assert!(matches!(to_column, Err(PostureError::StaticOperations { .. })));

        let dig_in = check_transition(Posture::Deployed, Posture::HastyDefense, &unit, &pools(10.0, 5.0), &config);
        assert!(dig_in.is_ok());
    }

    #[test]
    fn test_movement_fraction_boundary() {
        let profile = infantry();
        let unit = status(&profile, EfficiencyTier::NormalOperations);
        let config = PostureConfig::default();

        assert!(check_transition(Posture::Deployed, Posture::HastyDefense, &unit, &pools(2.5, 5.0), &config).is_ok());
        let short = check_transition(Posture::Deployed, Posture::HastyDefense, &unit, &pools(2.4, 5.0), &config);
        assert!(matches!(short, Err(PostureError::InsufficientMovement { .. })));
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_destroyed_unit_panics() {
        let profile = infantry();
        let unit = UnitStatus { profile: &profile, efficiency: EfficiencyTier::NormalOperations, is_destroyed: true };
        let _ = check_transition(Posture::Deployed, Posture::HastyDefense, &unit, &pools(10.0, 5.0), &PostureConfig::default());
    }
}
