//! # FHIR Codec Macros
//!
//! Procedural macros used by `fhir-codec` to declare its closed code systems.
//!
//! FHIR binds many `code` elements to a fixed value set: `CarePlan.status`,
//! `Observation.status`, `HumanName.use` and so on. Each set differs between
//! releases, and a wire string outside the set must fail decoding instead of
//! being coerced. The `#[derive(CodeSystem)]` macro turns a plain fieldless enum
//! into such a table.
//!
//! ## Usage
//!
//! ```ignore
//! use fhir_codec::CodeSystem;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CodeSystem)]
//! #[code_system(name = "CarePlanStatus", url = "http://hl7.org/fhir/care-plan-status")]
//! pub enum CarePlanStatus {
//!     Draft,
//!     Active,
//!     Suspended,
//!     Completed,
//!     EnteredInError,
//!     Cancelled,
//!     Unknown,
//! }
//!
//! assert_eq!(CarePlanStatus::EnteredInError.code(), "entered-in-error");
//! assert_eq!(CarePlanStatus::resolve("completed"), Some(CarePlanStatus::Completed));
//! ```
//!
//! ## Attributes
//!
//! - `#[code_system(url = "...")]` (required) - canonical URL of the system
//! - `#[code_system(name = "...")]` - display name, defaults to the enum name
//! - `#[code_system(rename_all = "...")]` - wire casing for variants without an
//!   explicit code: `kebab-case` (default), `PascalCase`, `camelCase`,
//!   `lowercase`, `UPPERCASE`
//! - `#[code("...")]` or `#[code = "..."]` on a variant - explicit wire code
//!
//! Two variants mapping to the same wire code is a compile error, so every
//! generated table is injective.

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use crate::code_system_impl::generate_code_system_impl;

pub(crate) mod attr_helpers;
pub(crate) mod code_system_impl;

/// Derives `fhir_codec::CodeSystem`, `Display` and `FromStr` for a fieldless enum.
///
/// The generated `CodeSystem::SYSTEM` constant lists the wire codes in variant
/// declaration order, so `index()` of a variant is its position in that list.
#[proc_macro_derive(CodeSystem, attributes(code_system, code))]
pub fn code_system_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    generate_code_system_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
