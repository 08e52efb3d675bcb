//! # FHIR JSON codec
//!
//! Decodes FHIR JSON documents into a typed resource graph and encodes them
//! back, for the STU3 and R4 releases. One generic, schema-driven engine
//! handles every resource: the release-specific knowledge lives in static
//! tables ([`VersionProfile`]) and in closed code-system enums derived with
//! [`CodeSystem`](derive@CodeSystem).
//!
//! ```rust
//! use fhir_codec::{FhirCodec, FhirVersion};
//! use fhir_codec::r4::{ObservationStatus, ResourceType};
//!
//! let codec = FhirCodec::new(FhirVersion::R4);
//! let observation = codec
//!     .to_fhir(
//!         Some("Observation"),
//!         r#"{"resourceType":"Observation","status":"final",
//!             "code":{"text":"Body weight"},
//!             "valueQuantity":{"value":185,"unit":"lbs"}}"#,
//!     )
//!     .expect("valid observation");
//!
//! assert_eq!(observation.kind::<ResourceType>(), Some(ResourceType::Observation));
//! assert_eq!(observation.root().code::<ObservationStatus>("status"), Some(ObservationStatus::Final));
//! let value = observation.at("valueQuantity.value").and_then(|v| v.as_decimal());
//! assert_eq!(value.map(|d| d.original_string()), Some("185"));
//! ```
//!
//! ## Features
//!
//! - `STU3`: FHIR 3.0.2 tables
//! - `R4`: FHIR 4.0.1 tables
//!
//! Both are enabled by default.

extern crate self as fhir_codec;

pub mod code_system;
pub mod codec;
pub mod config;
pub mod date_time;
pub mod element;
pub mod error;
pub mod fhir_version;
pub mod precise_decimal;
pub mod schema;

#[cfg(feature = "R4")]
pub mod r4;
#[cfg(feature = "STU3")]
pub mod stu3;

pub use code_system::{Code, CodeSystem, CodeSystemDef, UnknownCodeError};
pub use codec::FhirCodec;
pub use config::{ChoicePolicy, CodecOptions, UnknownFieldPolicy};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::{Choice, Element, Extension, FieldValue, PrimitiveElement, PrimitiveValue, Resource, Value};
pub use error::{CodecError, FieldPath, JsonKind, PathSegment, Result};
pub use fhir_codec_macros::CodeSystem;
pub use fhir_version::{FhirVersion, VersionProfile};
pub use precise_decimal::PreciseDecimal;
pub use schema::{
    ChoiceType, ElementSchema, FieldDef, FieldKind, PrimitiveKind, SchemaCategory, TypeRef,
};
