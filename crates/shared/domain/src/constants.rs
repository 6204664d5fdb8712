//! Route prefixes and `OpenAPI` tags.

pub const SYSTEM_TAG: &str = "System";
pub const ACTIVITIES_TAG: &str = "Activities";

pub const STATIC_ROUTE: &str = "/static";
pub const INDEX_PAGE: &str = "/static/index.html";

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "MHS";
