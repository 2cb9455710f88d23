//! Units and the external capabilities the deployment layer consumes

pub mod location;
pub mod profile;
pub mod resources;
#[allow(clippy::module_inception)]
pub mod unit;

pub use location::{FixedLocation, UnitLocation};
pub use profile::{EmbarkedProfile, MovementProfileProvider, ProfileCatalog, UnitProfile, WeaponSystemProfile};
pub use resources::{ActionCounter, Gauge, ResourcePools};
pub use unit::Unit;
