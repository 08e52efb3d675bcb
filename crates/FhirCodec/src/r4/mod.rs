//! FHIR R4 (4.0.1) profile.

mod codes;
pub mod datatypes;
pub mod resources;

use once_cell::sync::Lazy;

pub use codes::*;
use datatypes::*;
use resources::*;

use crate::CodeSystem;
use crate::fhir_version::{FhirVersion, ProfileIndex, VersionProfile};

pub static PROFILE: VersionProfile = VersionProfile {
    version: FhirVersion::R4,
    resources: &[
        &BASIC,
        &BUNDLE,
        &CARE_PLAN,
        &CARE_TEAM,
        &CONDITION,
        &GOAL,
        &MEDICATION,
        &OBSERVATION,
        &ORGANIZATION,
        &PARAMETERS,
        &PATIENT,
        &PRACTITIONER,
    ],
    types: &[
        &META,
        &NARRATIVE,
        &CODING,
        &CODEABLE_CONCEPT,
        &QUANTITY,
        &SIMPLE_QUANTITY,
        &AGE,
        &DURATION,
        &COUNT,
        &DISTANCE,
        &MONEY,
        &RANGE,
        &RATIO,
        &PERIOD,
        &IDENTIFIER,
        &REFERENCE,
        &HUMAN_NAME,
        &ADDRESS,
        &CONTACT_POINT,
        &ANNOTATION,
        &ATTACHMENT,
        &TIMING,
        &TIMING_REPEAT,
        &PATIENT_CONTACT,
        &PATIENT_COMMUNICATION,
        &PATIENT_LINK,
        &OBSERVATION_REFERENCE_RANGE,
        &OBSERVATION_COMPONENT,
        &CARE_PLAN_ACTIVITY,
        &CARE_PLAN_ACTIVITY_DETAIL,
        &CARE_TEAM_PARTICIPANT,
        &GOAL_TARGET,
        &CONDITION_STAGE,
        &CONDITION_EVIDENCE,
        &PRACTITIONER_QUALIFICATION,
        &ORGANIZATION_CONTACT,
        &MEDICATION_INGREDIENT,
        &MEDICATION_BATCH,
        &BUNDLE_LINK,
        &BUNDLE_ENTRY,
        &BUNDLE_ENTRY_SEARCH,
        &BUNDLE_ENTRY_REQUEST,
        &BUNDLE_ENTRY_RESPONSE,
        &PARAMETERS_PARAMETER,
    ],
    code_systems: &[
        ResourceType::SYSTEM,
        AdministrativeGender::SYSTEM,
        NarrativeStatus::SYSTEM,
        IdentifierUse::SYSTEM,
        QuantityComparator::SYSTEM,
        NameUse::SYSTEM,
        ContactPointSystem::SYSTEM,
        ContactPointUse::SYSTEM,
        AddressUse::SYSTEM,
        AddressType::SYSTEM,
        LinkType::SYSTEM,
        ObservationStatus::SYSTEM,
        RequestStatus::SYSTEM,
        CarePlanIntent::SYSTEM,
        CarePlanActivityStatus::SYSTEM,
        CarePlanActivityKind::SYSTEM,
        CareTeamStatus::SYSTEM,
        GoalLifecycleStatus::SYSTEM,
        MedicationStatus::SYSTEM,
        BundleType::SYSTEM,
        HttpVerb::SYSTEM,
        SearchEntryMode::SYSTEM,
        UnitsOfTime::SYSTEM,
        DayOfWeek::SYSTEM,
    ],
    extension_value_types: EXTENSION_VALUE_TYPES,
    index: Lazy::new(|| ProfileIndex::build(PROFILE.resources, PROFILE.types, PROFILE.code_systems)),
};
