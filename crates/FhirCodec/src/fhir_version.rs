use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::code_system::CodeSystemDef;
use crate::schema::{ChoiceType, ElementSchema};

#[cfg(feature = "R4")]
use crate::r4;
#[cfg(feature = "STU3")]
use crate::stu3;

/// Enumeration of supported FHIR releases.
///
/// Each release is gated by a Cargo feature of the same name, and both are
/// enabled by default.
///
/// # Command Line Usage
///
/// This enum implements `clap::ValueEnum`:
///
/// ```rust,no_run
/// use clap::Parser;
/// use fhir_codec::FhirVersion;
///
/// #[derive(Parser)]
/// struct Args {
///     #[arg(value_enum, default_value_t = FhirVersion::default())]
///     version: FhirVersion,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FhirVersion {
    /// FHIR 3.0.2
    #[cfg(feature = "STU3")]
    #[serde(rename = "STU3")]
    Stu3,
    /// FHIR 4.0.1
    #[cfg(feature = "R4")]
    #[serde(rename = "R4")]
    R4,
}

impl FhirVersion {
    /// Returns the version identifier, e.g. `"STU3"` or `"R4"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "STU3")]
            FhirVersion::Stu3 => "STU3",
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "R4",
        }
    }

    /// The schema and code-system tables of this release.
    pub fn profile(&self) -> &'static VersionProfile {
        match self {
            #[cfg(feature = "STU3")]
            FhirVersion::Stu3 => &stu3::PROFILE,
            #[cfg(feature = "R4")]
            FhirVersion::R4 => &r4::PROFILE,
        }
    }

    /// All releases compiled into this build.
    pub fn all() -> &'static [FhirVersion] {
        &[
            #[cfg(feature = "STU3")]
            FhirVersion::Stu3,
            #[cfg(feature = "R4")]
            FhirVersion::R4,
        ]
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// R4 is the default when compiled in.
#[cfg(feature = "R4")]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::R4
    }
}

#[cfg(all(feature = "STU3", not(feature = "R4")))]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::Stu3
    }
}

impl FromStr for FhirVersion {
    type Err = String;

    /// Case-insensitive; also accepts the numeric release (`3.0.2`, `4.0.1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            #[cfg(feature = "STU3")]
            "STU3" | "3.0" | "3.0.1" | "3.0.2" => Ok(FhirVersion::Stu3),
            #[cfg(feature = "R4")]
            "R4" | "4.0" | "4.0.0" | "4.0.1" => Ok(FhirVersion::R4),
            _ => Err(format!("unsupported FHIR version '{}'", s)),
        }
    }
}

impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        Self::all()
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Name-indexed view of a profile's tables, built on first use.
pub(crate) struct ProfileIndex {
    resources: HashMap<&'static str, &'static ElementSchema>,
    types: HashMap<&'static str, &'static ElementSchema>,
    code_systems: HashMap<&'static str, &'static CodeSystemDef>,
}

impl ProfileIndex {
    pub(crate) fn build(
        resources: &'static [&'static ElementSchema],
        types: &'static [&'static ElementSchema],
        code_systems: &'static [&'static CodeSystemDef],
    ) -> Self {
        Self {
            resources: resources.iter().map(|schema| (schema.name, *schema)).collect(),
            types: types.iter().map(|schema| (schema.name, *schema)).collect(),
            code_systems: code_systems.iter().map(|system| (system.url, *system)).collect(),
        }
    }
}

/// One FHIR release's schema catalog.
///
/// A profile is a `'static` table; the dispatcher and the element codec are
/// parameterised by it and contain no release-specific logic.
pub struct VersionProfile {
    pub version: FhirVersion,
    /// Resource schemas
    pub resources: &'static [&'static ElementSchema],
    /// Complex datatypes and backbone elements
    pub types: &'static [&'static ElementSchema],
    /// Every closed code system the schemas bind to
    pub code_systems: &'static [&'static CodeSystemDef],
    /// Admissible types of `Extension.value[x]`
    pub extension_value_types: &'static [ChoiceType],
    pub(crate) index: Lazy<ProfileIndex>,
}

impl VersionProfile {
    pub fn resource(&self, resource_type: &str) -> Option<&'static ElementSchema> {
        self.index.resources.get(resource_type).copied()
    }

    /// A complex datatype or backbone element by name, e.g. `Quantity` or
    /// `CarePlan.activity.detail`.
    pub fn datatype(&self, name: &str) -> Option<&'static ElementSchema> {
        self.index.types.get(name).copied()
    }

    /// A code system by canonical URL.
    pub fn code_system(&self, url: &str) -> Option<&'static CodeSystemDef> {
        self.index.code_systems.get(url).copied()
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + use<> {
        let resources: &'static [&'static ElementSchema] = self.resources;
        resources.iter().map(|schema| schema.name)
    }
}

impl std::fmt::Debug for VersionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionProfile")
            .field("version", &self.version)
            .field("resources", &self.resources.len())
            .field("types", &self.types.len())
            .field("code_systems", &self.code_systems.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings_round_trip() {
        for version in FhirVersion::all() {
            assert_eq!(version.as_str().parse::<FhirVersion>(), Ok(*version));
            assert_eq!(version.to_string(), version.as_str());
            assert_eq!(version.profile().version, *version);
        }
        assert!("R5".parse::<FhirVersion>().is_err());
    }

    #[cfg(feature = "R4")]
    #[test]
    fn serde_uses_release_names() {
        assert_eq!(serde_json::to_string(&FhirVersion::R4).expect("serializes"), "\"R4\"");
        let parsed: FhirVersion = serde_json::from_str("\"R4\"").expect("deserializes");
        assert_eq!(parsed, FhirVersion::R4);
        assert_eq!(FhirVersion::default(), FhirVersion::R4);
        assert_eq!("4.0.1".parse::<FhirVersion>(), Ok(FhirVersion::R4));
    }

    #[cfg(feature = "STU3")]
    #[test]
    fn stu3_accepts_lowercase() {
        assert_eq!("stu3".parse::<FhirVersion>(), Ok(FhirVersion::Stu3));
        assert_eq!(
            serde_json::to_string(&FhirVersion::Stu3).expect("serializes"),
            "\"STU3\""
        );
    }

    #[test]
    fn clap_lists_compiled_versions() {
        use clap::ValueEnum;
        let names: Vec<String> = FhirVersion::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names.len(), FhirVersion::all().len());
    }
}
