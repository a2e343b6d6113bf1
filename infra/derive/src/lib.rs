#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the tour workspace.
//! This crate provides a derive for raw-value enumerations and an attribute macro
//! that wires up the workspace's error enums.
//!
//! ## Usage
//! Consumers normally reach the derive through `tour-domain`, which re-exports it next to
//! the `RawValue` trait it implements:
//! ```toml
//! [dependencies]
//! tour-domain = { path = "../crates/shared/domain" }
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests/examples as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `tour_domain::raw::RawValue` for a field-less enum.
///
/// Every variant gets exactly one raw value of the scalar type named by the enum-level
/// `#[raw_value(type = ...)]` attribute. A variant may set its own value with `#[raw = ...]`,
/// or with `#[raw(...)]` when the value is negative (`#[raw(-2)]`), since `#[raw = -2]`
/// is not a valid attribute.
///
/// # Implicit values
///
/// * **Integers** (`i8`..`i128`, `u8`..`u128`, `isize`, `usize`): a variant without a literal
///   takes the previous variant's value plus one; the first one defaults to `0`.
/// * **`&'static str`**: a variant without a literal takes its own name in lower camel case
///   (`LineFeed` becomes `"lineFeed"`).
/// * **`char`**: there is no implicit value, every variant must carry a literal.
///
/// # Generated Items
///
/// * `impl RawValue for Enum` with a forward `match` and a partial reverse `match`.
/// * `impl TryFrom<Raw> for Enum` failing with `UnknownRawValue` (for `&str`, any lifetime).
///
/// # Errors
///
/// Emits a compile-time error for non-enum input, variants with fields, an unsupported raw
/// type, a literal of the wrong kind, a missing `char` literal, or duplicate raw values.
///
/// # Example
///
/// ```rust,ignore
/// use tour_domain::RawValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, RawValue)]
/// #[raw_value(type = i32)]
/// pub enum Planet {
///     #[raw = 1]
///     Mercury,
///     Venus, // 2
///     Earth, // 3
/// }
///
/// assert_eq!(Planet::from_raw_value(3), Some(Planet::Earth));
/// assert_eq!(Planet::from_raw_value(4), None);
/// ```
#[proc_macro_derive(RawValue, attributes(raw_value, raw))]
pub fn raw_value(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::raw_value::expand_derive(input).into()
}

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro reduces boilerplate by transforming a standard enum into a fully-featured
/// error type integrated with the workspace infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides specialized `From<&str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit and reliable.
///
/// # Generated Items
///
/// * `<ErrorName>Ext` trait with `.context(...)` for both `Result<T, ErrorName>` and
///   `Result<T, SourceError>` when a source field exists.
/// * `From<SourceError>` impls for variants with a source field and a context field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
///
/// # Example
///
/// ```rust,ignore
/// use tour_derive::tour_error;
/// use std::borrow::Cow;
///
/// #[tour_error]
/// pub enum TourError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io {
///         #[source]
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// // Usage:
/// fn render(out: &mut impl std::io::Write) -> Result<(), TourError> {
///     writeln!(out, "Move to east").context("Writing the basics lesson")?;
///     Ok(())
/// }
/// ```
///
/// # Rejected Inputs
///
/// A variant wrapping a source error without a `context` field:
///
/// ```compile_fail
/// #[tour_derive::tour_error]
/// pub enum LessonError {
///     #[error("Output error: {source}")]
///     Io { source: std::io::Error },
/// }
/// ```
///
/// A `context` field of any other type:
///
/// ```compile_fail
/// #[tour_derive::tour_error]
/// pub enum LessonError {
///     #[error("Output error: {source}")]
///     Io { source: std::io::Error, context: Option<String> },
/// }
/// ```
///
/// Tuple variants:
///
/// ```compile_fail
/// #[tour_derive::tour_error]
/// pub enum LessonError {
///     #[error("Output error")]
///     Io(std::io::Error),
/// }
/// ```
#[proc_macro_attribute]
pub fn tour_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
