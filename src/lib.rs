//! Unit Posture - deployment posture state machine for turn-based military units

pub mod core;
pub mod deployment;
pub mod scenario;
pub mod unit;
