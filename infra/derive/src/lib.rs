#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate of the activities service:
//!
//! * [`mhs_error`] turns an enum into a `thiserror` error with `.context(...)` support.
//! * [`mhs_slice`] wraps feature state into an `Arc` handle registered in the API state.
//! * [`api_model`] / [`api_handler`] keep DTOs and Axum handlers consistent with `OpenAPI`.
//! * [`main`] bootstraps the tokio runtime from a profile.
//!
//! Examples are `ignore`d here; the consuming crates exercise them in their own tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a synchronous `fn main` running on a tokio runtime.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and longer keep-alive, for the server.
/// * `memory_efficient` - Half the workers and smaller stacks.
/// * `default` (or no argument) - Worker threads auto-detected.
///
/// # Examples
///
/// ```rust,ignore
/// #[mhs_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data model (request or response body).
///
/// * **Derives**: adds `Debug`, `Clone`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: adds `utoipa::ToSchema` when the consuming crate enables `server`.
/// * **Serde policy**: `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct Activity {
///     pub description: String,
///     pub max_participants: u32,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with `utoipa::path`.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `params(...)`, `responses(...)`, `tag = ...`). The path attribute is only emitted
/// when the consuming crate enables its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = SYSTEM_TAG,
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a domain error enum.
///
/// # Features
///
/// * Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * Generates a companion `<Name>Ext` trait with `.context(...)` for `Result<T, Name>`
///   and for `Result<T, Source>` of every variant carrying a source.
/// * Implements `From<Source>` for variants with a `source` field (or a `#[source]`/`#[from]`
///   field), so `?` works on upstream errors.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Brings a private `format_context` helper into scope for the `#[error]` strings.
///
/// # Requirements
///
/// 1. Only enums, and only named-field variants.
/// 2. `context` fields must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[mhs_error]
/// pub enum SeedError {
///     #[error("Seed I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &Path) -> Result<String, SeedError> {
///     std::fs::read_to_string(path).context("reading seed")
/// }
/// ```
#[proc_macro_attribute]
pub fn mhs_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap-to-clone
/// `Arc` wrapper that derefs to the inner state and implements
/// `mhs_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[mhs_derive::mhs_slice]
/// pub struct Activities {
///     pub registry: Arc<ActivityRegistry>,
/// }
///
/// let slice = Activities::new(ActivitiesInner { registry });
/// ```
#[proc_macro_attribute]
pub fn mhs_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
