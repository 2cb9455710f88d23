//! Deployment state machine
//!
//! Owns a unit's posture. A request runs the guard pipeline, then the
//! transport rules, then looks up the movement allowance for the new
//! posture, and only then commits and charges the resource pools, so a
//! rejected request never leaves a partial change behind.
//!
//! Not safe for concurrent use on the same unit: guards read several pools
//! that the commit later writes. Callers serialize access per unit.

use serde::{Deserialize, Serialize};

use crate::core::config::{config, PostureConfig};
use crate::core::error::{PostureError, PostureResult};
use crate::unit::{MovementProfileProvider, ResourcePools, UnitLocation, UnitProfile};

use super::classification::EfficiencyTier;
use super::commit::{charge_transition, PostureChange};
use super::guards::check_transition;
use super::posture::Posture;
use super::transport::{check_debark, check_embark};

/// The external capabilities a transition consumes
pub struct DeploymentContext<'a> {
    pub config: &'a PostureConfig,
    pub profiles: &'a dyn MovementProfileProvider,
    pub location: &'a dyn UnitLocation,
}

impl<'a> DeploymentContext<'a> {
    /// Context using the global config
    pub fn new(profiles: &'a dyn MovementProfileProvider, location: &'a dyn UnitLocation) -> Self {
        Self { config: config(), profiles, location }
    }

    pub fn with_config(mut self, config: &'a PostureConfig) -> Self {
        self.config = config;
        self
    }
}

/// Read-only view of the unit fields the guards consult
#[derive(Debug, Clone, Copy)]
pub struct UnitStatus<'a> {
    pub profile: &'a UnitProfile,
    pub efficiency: EfficiencyTier,
    pub is_destroyed: bool,
}

/// A planned transition: the posture the guards check against, and the one committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Plan {
    target: Posture,
    commit: Posture,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentState {
    posture: Posture,
    last_change: Option<PostureChange>,
}

impl DeploymentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posture(&self) -> Posture {
        self.posture
    }

    pub fn last_change(&self) -> Option<&PostureChange> {
        self.last_change.as_ref()
    }

    /// Raising from Entrenched or Fortified resets to Deployed
    ///
    /// Entrenched is still checked against Fortified. Fortified has nothing
    /// above it, so it is checked against the reset posture itself.
    fn plan_up(&self) -> Plan {
        let current = self.posture;
        let commit = match current {
            Posture::Entrenched | Posture::Fortified => Posture::Deployed,
            other => other.raised().unwrap_or(Posture::Deployed),
        };
        let target = current.raised().unwrap_or(commit);
        Plan { target, commit }
    }

    /// Lowering from Embarked debarks straight to Deployed
    fn plan_down(&self) -> PostureResult<Plan> {
        let target = match self.posture {
            Posture::Embarked => Posture::Deployed,
            other => other.lowered().ok_or(PostureError::NoLowerPosture(other))?,
        };
        Ok(Plan { target, commit: target })
    }

    fn validate(
        &self,
        plan: Plan,
        is_beachhead: Option<bool>,
        unit: &UnitStatus<'_>,
        pools: &ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<u32> {
        check_transition(self.posture, plan.target, unit, pools, ctx.config)?;

        if plan.target == Posture::Embarked {
            check_embark(unit.profile, ctx.location)?;
        }
        if let (Posture::Embarked, Some(is_beachhead)) = (self.posture, is_beachhead) {
            check_debark(unit.profile, is_beachhead)?;
        }

        ctx.profiles
            .movement_allowance(unit.profile, plan.commit)
            .ok_or_else(|| PostureError::UnknownProfile(unit.profile.profile_for(plan.commit).clone()))
    }

    fn check_up(
        &self,
        unit: &UnitStatus<'_>,
        pools: &ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<(Posture, u32)> {
        let plan = self.plan_up();
        let allowance = self.validate(plan, None, unit, pools, ctx)?;
        Ok((plan.commit, allowance))
    }

    fn check_down(
        &self,
        is_beachhead: bool,
        unit: &UnitStatus<'_>,
        pools: &ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<(Posture, u32)> {
        let plan = self.plan_down()?;
        let allowance = self.validate(plan, Some(is_beachhead), unit, pools, ctx)?;
        Ok((plan.commit, allowance))
    }

    /// Posture `request_up` would commit
    pub fn preview_up(
        &self,
        unit: &UnitStatus<'_>,
        pools: &ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<Posture> {
        self.check_up(unit, pools, ctx).map(|(posture, _)| posture)
    }

    /// Posture `request_down` would commit
    pub fn preview_down(
        &self,
        is_beachhead: bool,
        unit: &UnitStatus<'_>,
        pools: &ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<Posture> {
        self.check_down(is_beachhead, unit, pools, ctx).map(|(posture, _)| posture)
    }

    /// Move one step toward fixed defense
    ///
    /// Panics if the unit is destroyed.
    pub fn request_up(
        &mut self,
        unit: &UnitStatus<'_>,
        pools: &mut ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<()> {
        let (committed, allowance) = self
            .check_up(unit, pools, ctx)
            .inspect_err(|e| tracing::debug!("{}: posture up refused: {}", unit.profile.name, e))?;
        self.commit(committed, allowance, unit, pools, ctx.config);
        Ok(())
    }

    /// Move one step toward mobility, or debark when Embarked
    ///
    /// Panics if the unit is destroyed.
    pub fn request_down(
        &mut self,
        is_beachhead: bool,
        unit: &UnitStatus<'_>,
        pools: &mut ResourcePools,
        ctx: &DeploymentContext<'_>,
    ) -> PostureResult<()> {
        let (committed, allowance) = self
            .check_down(is_beachhead, unit, pools, ctx)
            .inspect_err(|e| tracing::debug!("{}: posture down refused: {}", unit.profile.name, e))?;
        self.commit(committed, allowance, unit, pools, ctx.config);
        Ok(())
    }

    fn commit(
        &mut self,
        to: Posture,
        allowance: u32,
        unit: &UnitStatus<'_>,
        pools: &mut ResourcePools,
        config: &PostureConfig,
    ) {
        let from = self.posture;
        self.posture = to;
        let change = charge_transition(from, to, allowance, pools, config);

        tracing::debug!(
            unit = %unit.profile.id,
            "{}: {} -> {} (movement {:.2}/{:.2}, supply {:.2})",
            unit.profile.name,
            from,
            to,
            change.movement_after,
            change.max_movement_after,
            pools.supply.current()
        );

        self.last_change = Some(change);
    }

    /// Debug backdoor: assign a posture with no guards and no resource charges.
    ///
    /// For test harnesses and debug consoles only; gameplay code must go
    /// through `request_up`/`request_down`.
    pub fn set_posture_unchecked(&mut self, posture: Posture) {
        tracing::warn!("Posture forced to {} without checks", posture);
        self.posture = posture;
    }
}
