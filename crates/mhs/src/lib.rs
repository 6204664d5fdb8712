//! Facade crate for the activities service.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates, it does not implement business logic.

pub use mhs_domain as domain;
use mhs_domain::config::ApiConfig;
use mhs_domain::registry::InitializedSlice;
pub use mhs_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use mhs_activities::router::activities_router;
        pub use mhs_kernel::server::router::system_router;
    }
}

/// Feature slices composed by this facade.
pub mod features {
    pub use mhs_activities as activities;
}

/// Initialize all feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Activities
    slices.push(features::activities::init(&config.activities)?);

    Ok(slices)
}
