//! Activities feature slice.
//!
//! Owns the [`ActivityRegistry`]: a fixed catalog of school activities whose rosters
//! students join ([`ActivityRegistry::signup`]) and leave ([`ActivityRegistry::unregister`]).
//! With the `server` feature the slice also exposes its Axum routes.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod model;
pub mod registry;
#[cfg(feature = "server")]
pub mod router;
pub mod seed;

pub use error::{ActivityError, ActivityErrorExt};
pub use model::{Activity, Catalog};
pub use registry::{ActivityRegistry, Confirmation};

use mhs_kernel::domain::config::ActivitiesConfig;
use mhs_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Activities feature state.
#[mhs_derive::mhs_slice]
pub struct Activities {
    pub registry: Arc<ActivityRegistry>,
}

/// Initialize the activities feature from the configured seed, or the built-in catalog.
///
/// # Errors
/// Returns an error if the seed file cannot be read, parsed or validated.
pub fn init(config: &ActivitiesConfig) -> Result<InitializedSlice, ActivityError> {
    let catalog = match &config.seed {
        Some(path) => seed::load(path)?,
        None => seed::default_catalog(),
    };

    let registry = Arc::new(ActivityRegistry::new(catalog));
    tracing::info!(activities = registry.len(), "Activities slice initialized");

    Ok(InitializedSlice::new(Activities::new(ActivitiesInner { registry })))
}
