//! Resource pools charged by posture changes
//!
//! Replenishment belongs to the turn cycle; this module only reads, charges,
//! and rescales.

use serde::{Deserialize, Serialize};

/// A bounded resource: `0 <= current <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    current: f32,
    max: f32,
}

impl Gauge {
    /// Create a gauge; `current` is clamped into `[0, max]`
    pub fn new(current: f32, max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: current.clamp(0.0, max), max }
    }

    /// A gauge filled to capacity
    pub fn full(max: f32) -> Self {
        Self::new(max, max)
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Fill level in `[0, 1]`; an empty-capacity gauge reports 0
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    /// Subtract `amount`, saturating at zero. Returns the amount actually taken.
    pub fn consume(&mut self, amount: f32) -> f32 {
        let taken = amount.clamp(0.0, self.current);
        self.current -= taken;
        taken
    }

    /// Change capacity, keeping the same fill ratio
    pub fn rescale_max(&mut self, new_max: f32) {
        let ratio = self.ratio();
        self.max = new_max.max(0.0);
        self.current = (self.max * ratio).clamp(0.0, self.max);
    }

    /// Add a flat bonus to both capacity and current value
    pub fn apply_bonus(&mut self, bonus: f32) {
        self.max = (self.max + bonus).max(0.0);
        self.current = (self.current + bonus).clamp(0.0, self.max);
    }

    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }
}

/// Per-turn budget of deployment actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCounter {
    remaining: u32,
    per_turn: u32,
}

impl ActionCounter {
    pub fn new(per_turn: u32) -> Self {
        Self { remaining: per_turn, per_turn }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn consume(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Called by the turn cycle
    pub fn reset(&mut self) {
        self.remaining = self.per_turn;
    }
}

/// The pools a posture change reads and charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePools {
    pub movement: Gauge,
    pub supply: Gauge,
    pub actions: ActionCounter,
}

impl ResourcePools {
    pub fn new(movement: Gauge, supply: Gauge, actions: ActionCounter) -> Self {
        Self { movement, supply, actions }
    }
}
