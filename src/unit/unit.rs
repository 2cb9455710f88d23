//! A unit as seen by the deployment layer

use serde::{Deserialize, Serialize};

use super::profile::UnitProfile;
use super::resources::ResourcePools;
use crate::core::error::PostureResult;
use crate::deployment::{
    DeploymentContext, DeploymentState, EfficiencyTier, Posture, PostureChange, UnitStatus,
};

/// A unit and the resource pools its posture changes draw from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub profile: UnitProfile,
    pub efficiency: EfficiencyTier,
    pub is_destroyed: bool,
    pub resources: ResourcePools,
    deployment: DeploymentState,
}

impl Unit {
    /// New units start Deployed
    pub fn new(profile: UnitProfile, resources: ResourcePools) -> Self {
        Self {
            profile,
            efficiency: EfficiencyTier::default(),
            is_destroyed: false,
            resources,
            deployment: DeploymentState::new(),
        }
    }

    pub fn with_efficiency(mut self, efficiency: EfficiencyTier) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn posture(&self) -> Posture {
        self.deployment.posture()
    }

    pub fn last_change(&self) -> Option<&PostureChange> {
        self.deployment.last_change()
    }

    fn status(&self) -> UnitStatus<'_> {
        UnitStatus {
            profile: &self.profile,
            efficiency: self.efficiency,
            is_destroyed: self.is_destroyed,
        }
    }

    /// Posture a raise would commit, without committing it
    pub fn preview_posture_up(&self, ctx: &DeploymentContext<'_>) -> PostureResult<Posture> {
        self.deployment.preview_up(&self.status(), &self.resources, ctx)
    }

    /// Posture a lower would commit, without committing it
    pub fn preview_posture_down(&self, is_beachhead: bool, ctx: &DeploymentContext<'_>) -> PostureResult<Posture> {
        self.deployment.preview_down(is_beachhead, &self.status(), &self.resources, ctx)
    }

    pub fn request_posture_up(&mut self, ctx: &DeploymentContext<'_>) -> PostureResult<()> {
        let status = UnitStatus {
            profile: &self.profile,
            efficiency: self.efficiency,
            is_destroyed: self.is_destroyed,
        };
        self.deployment.request_up(&status, &mut self.resources, ctx)
    }

    pub fn request_posture_down(&mut self, is_beachhead: bool, ctx: &DeploymentContext<'_>) -> PostureResult<()> {
        let status = UnitStatus {
            profile: &self.profile,
            efficiency: self.efficiency,
            is_destroyed: self.is_destroyed,
        };
        self.deployment.request_down(is_beachhead, &status, &mut self.resources, ctx)
    }

    /// Debug backdoor: see [`DeploymentState::set_posture_unchecked`]
    pub fn set_posture_unchecked(&mut self, posture: Posture) {
        self.deployment.set_posture_unchecked(posture);
    }
}
