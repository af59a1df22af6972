#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Avia crates.
//! Every crate that exposes an error enum goes through [`macro@avia_error`], so that all of
//! them render, convert and accept context the same way.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// The annotated enum becomes a `thiserror` error with a uniform context mechanism.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)`, implemented for `Result<T, ErrorName>` and, for
///   every variant carrying a `source` field, for `Result<T, SourceError>`.
/// * `From<SourceError>` for each variant with a `source` field (or a field marked `#[source]`).
///   A source type must therefore appear in at most one variant.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A module-private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** whose variants all use named fields.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source field must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use avia_derive::avia_error;
/// use std::borrow::Cow;
///
/// #[avia_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context("Reading the store file")
/// }
/// ```
#[proc_macro_attribute]
pub fn avia_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
