//! Deployment posture system
//!
//! Units step through an ordered set of postures, from loaded on transport to
//! fortified. Every step is guarded by classification, readiness, supply, and
//! movement, and every committed step is paid for out of the unit's pools.

pub mod classification;
pub mod commit;
pub mod guards;
pub mod machine;
pub mod posture;
pub mod transport;

pub use classification::{ClassCategory, Classification, EfficiencyTier, TransportKind};
pub use commit::PostureChange;
pub use machine::{DeploymentContext, DeploymentState, UnitStatus};
pub use posture::Posture;
