//! # Domain Models
//!
//! Pure data shared by every crate of the activities service: configuration,
//! constants and the feature-slice registry. No I/O and no logic beyond defaults.

pub mod config;
pub mod constants;
pub mod registry;
