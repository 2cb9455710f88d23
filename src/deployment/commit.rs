//! Commit sequence - charges the pools once a transition has passed its guards

use serde::{Deserialize, Serialize};

use crate::core::config::PostureConfig;
use crate::unit::ResourcePools;

use super::guards::movement_cost;
use super::posture::Posture;

/// Record of a committed posture change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureChange {
    pub from: Posture,
    pub to: Posture,
    pub supply_spent: f32,
    pub movement_before: f32,
    pub movement_after: f32,
    pub max_movement_after: f32,
}

/// Charge supply, an action, and movement, then rescale movement to
/// `new_allowance`, the allowance that applies in `to`
///
/// The movement charge uses the allowance in force before the change; the
/// rescale keeps whatever fraction of it the unit has left.
pub fn charge_transition(
    from: Posture,
    to: Posture,
    new_allowance: u32,
    pools: &mut ResourcePools,
    config: &PostureConfig,
) -> PostureChange {
    let movement_before = pools.movement.current();

    let supply_spent = pools.supply.consume(config.transition_supply_cost);
    pools.actions.consume();

    let cost = movement_cost(pools, config);
    pools.movement.consume(cost);

    pools.movement.rescale_max(new_allowance as f32);

    if to == Posture::Mobile {
        pools.movement.apply_bonus(config.mobile_movement_bonus);
    }

    PostureChange {
        from,
        to,
        supply_spent,
        movement_before,
        movement_after: pools.movement.current(),
        max_movement_after: pools.movement.max(),
    }
}
