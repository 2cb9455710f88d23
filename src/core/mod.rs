pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, PostureConfig};
pub use error::{LoadError, PostureError, PostureResult};
pub use types::{ProfileId, UnitId};
