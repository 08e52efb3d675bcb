//! The generic decode/encode engine.
//!
//! [`FhirCodec`] is the public entry point. Internally a [`Decoder`] or
//! [`Encoder`] walks the schema tables of one [`VersionProfile`], keeping the
//! current [`FieldPath`] for error reporting. The walk is split by concern:
//!
//! - `dispatch`: `resourceType` handling and the entry points
//! - `element`: the schema-driven object walk
//! - `primitive`: scalars and their `_field` siblings
//! - `choice`: `[x]` fields
//! - `extension`: `extension` / `modifierExtension` lists

mod choice;
mod dispatch;
mod element;
mod extension;
mod primitive;

use serde_json::{Map, Value as JsonValue};

use crate::config::CodecOptions;
use crate::error::{CodecError, FieldPath, JsonKind, Result};
use crate::fhir_version::{FhirVersion, VersionProfile};
use crate::schema::ElementSchema;

/// Converts FHIR JSON to [`Resource`](crate::Resource) graphs and back for one
/// FHIR release.
///
/// The codec holds no mutable state; it is `Copy` and can be shared freely
/// across threads.
///
/// ```rust
/// use fhir_codec::{FhirCodec, FhirVersion};
///
/// let codec = FhirCodec::new(FhirVersion::R4);
/// let json = r#"{"resourceType":"Patient","id":"p1","active":true}"#;
/// let patient = codec.to_fhir(Some("Patient"), json).expect("valid patient");
/// assert_eq!(patient.id(), Some("p1"));
/// assert_eq!(codec.from_fhir(&patient).expect("encodes"), json);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FhirCodec {
    profile: &'static VersionProfile,
    options: CodecOptions,
}

impl FhirCodec {
    pub fn new(version: FhirVersion) -> Self {
        Self::with_options(version, CodecOptions::default())
    }

    pub fn with_options(version: FhirVersion, options: CodecOptions) -> Self {
        Self {
            profile: version.profile(),
            options,
        }
    }

    pub fn version(&self) -> FhirVersion {
        self.profile.version
    }

    pub fn profile(&self) -> &'static VersionProfile {
        self.profile
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }
}

/// State of one decode call.
pub(crate) struct Decoder<'a> {
    pub(crate) profile: &'static VersionProfile,
    pub(crate) options: &'a CodecOptions,
    pub(crate) path: FieldPath,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(profile: &'static VersionProfile, options: &'a CodecOptions) -> Self {
        Self {
            profile,
            options,
            path: FieldPath::root(),
            depth: 0,
        }
    }

    /// Enters one nesting level, failing once `max_depth` is exceeded.
    pub(crate) fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(CodecError::DepthLimitExceeded(self.path.clone()));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn shape_error(&self, expected: JsonKind, actual: &JsonValue) -> CodecError {
        CodecError::UnexpectedJsonShape {
            path: self.path.clone(),
            expected,
            actual: JsonKind::of(actual),
        }
    }

    pub(crate) fn expect_object<'v>(&self, value: &'v JsonValue) -> Result<&'v Map<String, JsonValue>> {
        value
            .as_object()
            .ok_or_else(|| self.shape_error(JsonKind::Object, value))
    }

    pub(crate) fn expect_array<'v>(&self, value: &'v JsonValue) -> Result<&'v Vec<JsonValue>> {
        value
            .as_array()
            .ok_or_else(|| self.shape_error(JsonKind::Array, value))
    }

    pub(crate) fn resolve_type(&self, name: &str) -> Result<&'static ElementSchema> {
        self.profile.datatype(name).ok_or_else(|| CodecError::InvalidGraph {
            path: self.path.clone(),
            reason: format!("type `{}` is not defined in FHIR {}", name, self.profile.version),
        })
    }
}

/// State of one encode call.
pub(crate) struct Encoder {
    pub(crate) profile: &'static VersionProfile,
    pub(crate) path: FieldPath,
}

impl Encoder {
    pub(crate) fn new(profile: &'static VersionProfile) -> Self {
        Self {
            profile,
            path: FieldPath::root(),
        }
    }

    pub(crate) fn invalid(&self, reason: impl Into<String>) -> CodecError {
        CodecError::InvalidGraph {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn resolve_type(&self, name: &str) -> Result<&'static ElementSchema> {
        self.profile
            .datatype(name)
            .ok_or_else(|| self.invalid(format!("type `{}` is not defined in FHIR {}", name, self.profile.version)))
    }
}
