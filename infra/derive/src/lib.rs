#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace: the runtime entry point,
//! the error-enum attribute, the feature-slice handle and the API model/handler helpers.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros;
//! the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the tuned Tokio runtime.
///
/// Turns an `async fn main` returning a `Result` into a plain `fn main` that builds the
/// runtime from one of the `shub_runtime::RuntimeConfig` presets and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Server profile (larger stacks, longer keep-alive).
/// * `single_threaded` - Current-thread scheduler for one-shot tools such as the CLI.
/// * `default` or nothing - Worker threads detected from the available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[shub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines an API data model (DTO).
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields` unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use shub_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct TextRequest {
///     pub text: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with its `OpenAPI` description.
///
/// The arguments are forwarded verbatim to `utoipa::path` when the consuming crate enables
/// its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(post, path = "/api/analyze/text", responses((status = OK, body = AnalysisReport)))]
/// pub async fn analyze_text(/* extractors */) -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a crate error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and, for every variant
///   with a `source` field, for `Result<T, Source>` as well.
/// * `From<Source>` for each variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields; variants with a source also carry
/// `context: Option<Cow<'static, str>>`. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// #[shub_derive::shub_error]
/// pub enum ArtifactError {
///     #[error("Artifact IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///     #[error("Internal artifact error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn shub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Turns a struct into a feature-slice handle.
///
/// The struct body becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs to it and
/// implements `shub_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[shub_derive::shub_slice]
/// pub struct Classifier {
///     pub predictor: SentimentPredictor,
/// }
///
/// let slice = Classifier::new(ClassifierInner { predictor });
/// ```
#[proc_macro_attribute]
pub fn shub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
