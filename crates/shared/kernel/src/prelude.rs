pub use crate::config::{ConfigError, ConfigErrorExt, config_path, load_config};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
