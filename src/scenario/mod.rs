//! Scripted posture scenarios
//!
//! A scenario is a TOML file describing one unit, where it stands, and an
//! ordered list of commands. Used by the `posture_runner` binary and by tests.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::config::PostureConfig;
use crate::core::error::Result;
use crate::core::types::ProfileId;
use crate::deployment::{Classification, DeploymentContext, EfficiencyTier, Posture, TransportKind};
use crate::unit::{ActionCounter, FixedLocation, Gauge, ProfileCatalog, ResourcePools, Unit, UnitProfile};

/// One scripted action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Up,
    Down,
    /// Down, landing across a beach
    Beachhead,
    /// Stand-in for the turn cycle: refill movement and actions
    NewTurn,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaugeDef {
    pub current: f32,
    pub max: f32,
}

impl From<GaugeDef> for Gauge {
    fn from(def: GaugeDef) -> Self {
        Gauge::new(def.current, def.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbarkedDef {
    pub profile: String,
    pub transport: TransportKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDef {
    pub name: String,
    pub classification: Classification,
    pub ground_profile: String,
    #[serde(default)]
    pub embarked: Option<EmbarkedDef>,
    #[serde(default)]
    pub efficiency: EfficiencyTier,
    #[serde(default)]
    pub posture: Posture,
    pub movement: GaugeDef,
    pub supply: GaugeDef,
    #[serde(default = "default_actions")]
    pub actions_per_turn: u32,
}

fn default_actions() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub unit: UnitDef,
    #[serde(default)]
    pub location: FixedLocation,
    pub steps: Vec<Command>,
}

/// What happened on one step, and the unit afterwards
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub command: Command,
    pub accepted: bool,
    pub reason: Option<String>,
    pub posture: Posture,
    pub movement: f32,
    pub max_movement: f32,
    pub supply: f32,
    pub actions_remaining: u32,
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Build the scripted unit; its posture is placed directly, not transitioned into
    pub fn build_unit(&self, catalog: &ProfileCatalog) -> Result<Unit> {
        let def = &self.unit;
        let mut profile = UnitProfile::new(
            def.name.clone(),
            def.classification,
            ProfileId::new(def.ground_profile.clone()),
        );
        if let Some(embarked) = &def.embarked {
            profile = profile.with_embarked(ProfileId::new(embarked.profile.clone()), embarked.transport);
        }
        catalog.validate_unit(&profile)?;

        let resources = ResourcePools::new(
            def.movement.into(),
            def.supply.into(),
            ActionCounter::new(def.actions_per_turn),
        );
        let mut unit = Unit::new(profile, resources).with_efficiency(def.efficiency);
        if def.posture != unit.posture() {
            unit.set_posture_unchecked(def.posture);
        }
        Ok(unit)
    }

    pub fn run(&self, catalog: &ProfileCatalog, config: &PostureConfig) -> Result<Vec<StepOutcome>> {
        let mut unit = self.build_unit(catalog)?;
        let ctx = DeploymentContext::new(catalog, &self.location).with_config(config);

        let outcomes = self
            .steps
            .iter()
            .enumerate()
            .map(|(step, &command)| {
                let result = match command {
                    Command::Up => unit.request_posture_up(&ctx),
                    Command::Down => unit.request_posture_down(false, &ctx),
                    Command::Beachhead => unit.request_posture_down(true, &ctx),
                    Command::NewTurn => {
                        unit.resources.movement.refill();
                        unit.resources.actions.reset();
                        Ok(())
                    }
                };

                StepOutcome {
                    step,
                    command,
                    accepted: result.is_ok(),
                    reason: result.err().map(|e| e.to_string()),
                    posture: unit.posture(),
                    movement: unit.resources.movement.current(),
                    max_movement: unit.resources.movement.max(),
                    supply: unit.resources.supply.current(),
                    actions_remaining: unit.resources.actions.remaining(),
                }
            })
            .collect();

        Ok(outcomes)
    }
}

/// Render step outcomes as pretty-printed JSON
pub fn outcomes_to_json(outcomes: &[StepOutcome]) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcomes)?)
}
