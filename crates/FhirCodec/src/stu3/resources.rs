//! STU3 resources and their backbone elements.

use super::codes::*;
use crate::CodeSystem;
use crate::schema::*;

/// Fields of `Resource`.
pub const RESOURCE_BASE: &[FieldDef] = &[
    optional("id", ID),
    optional("meta", complex("Meta")),
    optional("implicitRules", URI),
    optional("language", CODE),
];

/// Fields of `DomainResource`.
pub const DOMAIN_RESOURCE_BASE: &[FieldDef] = &[
    optional("id", ID),
    optional("meta", complex("Meta")),
    optional("implicitRules", URI),
    optional("language", CODE),
    optional("text", complex("Narrative")),
    list("contained", RESOURCE),
    list("extension", EXTENSIONS),
    list("modifierExtension", EXTENSIONS),
];

const BOOLEAN_OR_DATE_TIME: &[ChoiceType] = &[
    primitive_choice("Boolean", PrimitiveKind::Boolean),
    primitive_choice("DateTime", PrimitiveKind::DateTime),
];

const BOOLEAN_OR_INTEGER: &[ChoiceType] = &[
    primitive_choice("Boolean", PrimitiveKind::Boolean),
    primitive_choice("Integer", PrimitiveKind::Integer),
];

const CONCEPT_OR_REFERENCE: &[ChoiceType] = &[
    complex_choice("CodeableConcept"),
    complex_choice("Reference"),
];

const OBSERVATION_EFFECTIVE: &[ChoiceType] = &[
    primitive_choice("DateTime", PrimitiveKind::DateTime),
    complex_choice("Period"),
];

const OBSERVATION_VALUE: &[ChoiceType] = &[
    complex_choice("Quantity"),
    complex_choice("CodeableConcept"),
    primitive_choice("String", PrimitiveKind::String),
    primitive_choice("Boolean", PrimitiveKind::Boolean),
    complex_choice("Range"),
    complex_choice("Ratio"),
    complex_choice("Attachment"),
    primitive_choice("Time", PrimitiveKind::Time),
    primitive_choice("DateTime", PrimitiveKind::DateTime),
    complex_choice("Period"),
];

const ACTIVITY_SCHEDULED: &[ChoiceType] = &[
    complex_choice("Timing"),
    complex_choice("Period"),
    primitive_choice("String", PrimitiveKind::String),
];

const GOAL_START: &[ChoiceType] = &[
    primitive_choice("Date", PrimitiveKind::Date),
    complex_choice("CodeableConcept"),
];

const GOAL_TARGET_DETAIL: &[ChoiceType] = &[
    complex_choice("Quantity"),
    complex_choice("Range"),
    complex_choice("CodeableConcept"),
];

const GOAL_TARGET_DUE: &[ChoiceType] = &[
    primitive_choice("Date", PrimitiveKind::Date),
    complex_choice("Duration"),
];

const CONDITION_ONSET: &[ChoiceType] = &[
    primitive_choice("DateTime", PrimitiveKind::DateTime),
    complex_choice("Age"),
    complex_choice("Period"),
    complex_choice("Range"),
    primitive_choice("String", PrimitiveKind::String),
];

const CONDITION_ABATEMENT: &[ChoiceType] = &[
    primitive_choice("DateTime", PrimitiveKind::DateTime),
    complex_choice("Age"),
    primitive_choice("Boolean", PrimitiveKind::Boolean),
    complex_choice("Period"),
    complex_choice("Range"),
    primitive_choice("String", PrimitiveKind::String),
];

pub static PATIENT: ElementSchema = ElementSchema {
    name: "Patient",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        optional("active", BOOLEAN),
        list("name", complex("HumanName")),
        list("telecom", complex("ContactPoint")),
        optional("gender", code(AdministrativeGender::SYSTEM)),
        optional("birthDate", DATE),
        optional("deceased", FieldKind::Choice(BOOLEAN_OR_DATE_TIME)),
        list("address", complex("Address")),
        optional("maritalStatus", complex("CodeableConcept")),
        optional("multipleBirth", FieldKind::Choice(BOOLEAN_OR_INTEGER)),
        list("photo", complex("Attachment")),
        list("contact", complex("Patient.contact")),
        list("communication", complex("Patient.communication")),
        list("generalPractitioner", complex("Reference")),
        optional("managingOrganization", complex("Reference")),
        list("link", complex("Patient.link")),
    ],
};

pub static PATIENT_CONTACT: ElementSchema = ElementSchema {
    name: "Patient.contact",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        list("relationship", complex("CodeableConcept")),
        optional("name", complex("HumanName")),
        list("telecom", complex("ContactPoint")),
        optional("address", complex("Address")),
        optional("gender", code(AdministrativeGender::SYSTEM)),
        optional("organization", complex("Reference")),
        optional("period", complex("Period")),
    ],
};

pub static PATIENT_COMMUNICATION: ElementSchema = ElementSchema {
    name: "Patient.communication",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        required("language", complex("CodeableConcept")),
        optional("preferred", BOOLEAN),
    ],
};

pub static PATIENT_LINK: ElementSchema = ElementSchema {
    name: "Patient.link",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        required("other", complex("Reference")),
        required("type", code(LinkType::SYSTEM)),
    ],
};

pub static OBSERVATION: ElementSchema = ElementSchema {
    name: "Observation",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        list("basedOn", complex("Reference")),
        required("status", code(ObservationStatus::SYSTEM)),
        list("category", complex("CodeableConcept")),
        required("code", complex("CodeableConcept")),
        optional("subject", complex("Reference")),
        optional("context", complex("Reference")),
        optional("effective", FieldKind::Choice(OBSERVATION_EFFECTIVE)),
        optional("issued", INSTANT),
        list("performer", complex("Reference")),
        optional("value", FieldKind::Choice(OBSERVATION_VALUE)),
        optional("dataAbsentReason", complex("CodeableConcept")),
        optional("interpretation", complex("CodeableConcept")),
        optional("comment", STRING),
        optional("bodySite", complex("CodeableConcept")),
        optional("method", complex("CodeableConcept")),
        optional("specimen", complex("Reference")),
        optional("device", complex("Reference")),
        list("referenceRange", complex("Observation.referenceRange")),
        list("related", complex("Observation.related")),
        list("component", complex("Observation.component")),
    ],
};

pub static OBSERVATION_REFERENCE_RANGE: ElementSchema = ElementSchema {
    name: "Observation.referenceRange",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("low", complex("SimpleQuantity")),
        optional("high", complex("SimpleQuantity")),
        optional("type", complex("CodeableConcept")),
        list("appliesTo", complex("CodeableConcept")),
        optional("age", complex("Range")),
        optional("text", STRING),
    ],
};

pub static OBSERVATION_RELATED: ElementSchema = ElementSchema {
    name: "Observation.related",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("type", code(ObservationRelationshipType::SYSTEM)),
        required("target", complex("Reference")),
    ],
};

pub static OBSERVATION_COMPONENT: ElementSchema = ElementSchema {
    name: "Observation.component",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        required("code", complex("CodeableConcept")),
        optional("value", FieldKind::Choice(OBSERVATION_VALUE)),
        optional("dataAbsentReason", complex("CodeableConcept")),
        optional("interpretation", complex("CodeableConcept")),
        list("referenceRange", complex("Observation.referenceRange")),
    ],
};

pub static CARE_PLAN: ElementSchema = ElementSchema {
    name: "CarePlan",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        list("definition", complex("Reference")),
        list("basedOn", complex("Reference")),
        list("replaces", complex("Reference")),
        list("partOf", complex("Reference")),
        required("status", code(CarePlanStatus::SYSTEM)),
        required("intent", code(CarePlanIntent::SYSTEM)),
        list("category", complex("CodeableConcept")),
        optional("title", STRING),
        optional("description", STRING),
        required("subject", complex("Reference")),
        optional("context", complex("Reference")),
        optional("period", complex("Period")),
        list("author", complex("Reference")),
        list("careTeam", complex("Reference")),
        list("addresses", complex("Reference")),
        list("supportingInfo", complex("Reference")),
        list("goal", complex("Reference")),
        list("activity", complex("CarePlan.activity")),
        list("note", complex("Annotation")),
    ],
};

pub static CARE_PLAN_ACTIVITY: ElementSchema = ElementSchema {
    name: "CarePlan.activity",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        list("outcomeCodeableConcept", complex("CodeableConcept")),
        list("outcomeReference", complex("Reference")),
        list("progress", complex("Annotation")),
        optional("reference", complex("Reference")),
        optional("detail", complex("CarePlan.activity.detail")),
    ],
};

pub static CARE_PLAN_ACTIVITY_DETAIL: ElementSchema = ElementSchema {
    name: "CarePlan.activity.detail",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("category", complex("CodeableConcept")),
        optional("definition", complex("Reference")),
        optional("code", complex("CodeableConcept")),
        list("reasonCode", complex("CodeableConcept")),
        list("reasonReference", complex("Reference")),
        list("goal", complex("Reference")),
        required("status", code(CarePlanActivityStatus::SYSTEM)),
        optional("statusReason", STRING),
        optional("prohibited", BOOLEAN),
        optional("scheduled", FieldKind::Choice(ACTIVITY_SCHEDULED)),
        optional("location", complex("Reference")),
        list("performer", complex("Reference")),
        optional("product", FieldKind::Choice(CONCEPT_OR_REFERENCE)),
        optional("dailyAmount", complex("SimpleQuantity")),
        optional("quantity", complex("SimpleQuantity")),
        optional("description", STRING),
    ],
};

pub static CARE_TEAM: ElementSchema = ElementSchema {
    name: "CareTeam",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        optional("status", code(CareTeamStatus::SYSTEM)),
        list("category", complex("CodeableConcept")),
        optional("name", STRING),
        optional("subject", complex("Reference")),
        optional("context", complex("Reference")),
        optional("period", complex("Period")),
        list("participant", complex("CareTeam.participant")),
        list("reasonCode", complex("CodeableConcept")),
        list("reasonReference", complex("Reference")),
        list("managingOrganization", complex("Reference")),
        list("note", complex("Annotation")),
    ],
};

pub static CARE_TEAM_PARTICIPANT: ElementSchema = ElementSchema {
    name: "CareTeam.participant",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("role", complex("CodeableConcept")),
        optional("member", complex("Reference")),
        optional("onBehalfOf", complex("Reference")),
        optional("period", complex("Period")),
    ],
};

pub static GOAL: ElementSchema = ElementSchema {
    name: "Goal",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        required("status", code(GoalStatus::SYSTEM)),
        list("category", complex("CodeableConcept")),
        optional("priority", complex("CodeableConcept")),
        required("description", complex("CodeableConcept")),
        optional("subject", complex("Reference")),
        optional("start", FieldKind::Choice(GOAL_START)),
        optional("target", complex("Goal.target")),
        optional("statusDate", DATE),
        optional("statusReason", STRING),
        optional("expressedBy", complex("Reference")),
        list("addresses", complex("Reference")),
        list("note", complex("Annotation")),
        list("outcomeCode", complex("CodeableConcept")),
        list("outcomeReference", complex("Reference")),
    ],
};

pub static GOAL_TARGET: ElementSchema = ElementSchema {
    name: "Goal.target",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("measure", complex("CodeableConcept")),
        optional("detail", FieldKind::Choice(GOAL_TARGET_DETAIL)),
        optional("due", FieldKind::Choice(GOAL_TARGET_DUE)),
    ],
};

pub static CONDITION: ElementSchema = ElementSchema {
    name: "Condition",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        optional("clinicalStatus", code(ConditionClinicalStatus::SYSTEM)),
        optional("verificationStatus", code(ConditionVerificationStatus::SYSTEM)),
        list("category", complex("CodeableConcept")),
        optional("severity", complex("CodeableConcept")),
        optional("code", complex("CodeableConcept")),
        list("bodySite", complex("CodeableConcept")),
        required("subject", complex("Reference")),
        optional("context", complex("Reference")),
        optional("onset", FieldKind::Choice(CONDITION_ONSET)),
        optional("abatement", FieldKind::Choice(CONDITION_ABATEMENT)),
        optional("assertedDate", DATE_TIME),
        optional("asserter", complex("Reference")),
        optional("stage", complex("Condition.stage")),
        list("evidence", complex("Condition.evidence")),
        list("note", complex("Annotation")),
    ],
};

pub static CONDITION_STAGE: ElementSchema = ElementSchema {
    name: "Condition.stage",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("summary", complex("CodeableConcept")),
        list("assessment", complex("Reference")),
    ],
};

pub static CONDITION_EVIDENCE: ElementSchema = ElementSchema {
    name: "Condition.evidence",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        list("code", complex("CodeableConcept")),
        list("detail", complex("Reference")),
    ],
};

pub static PRACTITIONER: ElementSchema = ElementSchema {
    name: "Practitioner",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        optional("active", BOOLEAN),
        list("name", complex("HumanName")),
        list("telecom", complex("ContactPoint")),
        list("address", complex("Address")),
        optional("gender", code(AdministrativeGender::SYSTEM)),
        optional("birthDate", DATE),
        list("photo", complex("Attachment")),
        list("qualification", complex("Practitioner.qualification")),
        list("communication", complex("CodeableConcept")),
    ],
};

pub static PRACTITIONER_QUALIFICATION: ElementSchema = ElementSchema {
    name: "Practitioner.qualification",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        required("code", complex("CodeableConcept")),
        optional("period", complex("Period")),
        optional("issuer", complex("Reference")),
    ],
};

pub static ORGANIZATION: ElementSchema = ElementSchema {
    name: "Organization",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        optional("active", BOOLEAN),
        list("type", complex("CodeableConcept")),
        optional("name", STRING),
        list("alias", STRING),
        list("telecom", complex("ContactPoint")),
        list("address", complex("Address")),
        optional("partOf", complex("Reference")),
        list("contact", complex("Organization.contact")),
        list("endpoint", complex("Reference")),
    ],
};

pub static ORGANIZATION_CONTACT: ElementSchema = ElementSchema {
    name: "Organization.contact",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("purpose", complex("CodeableConcept")),
        optional("name", complex("HumanName")),
        list("telecom", complex("ContactPoint")),
        optional("address", complex("Address")),
    ],
};

pub static MEDICATION: ElementSchema = ElementSchema {
    name: "Medication",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        optional("code", complex("CodeableConcept")),
        optional("status", code(MedicationStatus::SYSTEM)),
        optional("isBrand", BOOLEAN),
        optional("isOverTheCounter", BOOLEAN),
        optional("manufacturer", complex("Reference")),
        optional("form", complex("CodeableConcept")),
        list("ingredient", complex("Medication.ingredient")),
        list("image", complex("Attachment")),
    ],
};

pub static MEDICATION_INGREDIENT: ElementSchema = ElementSchema {
    name: "Medication.ingredient",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        required("item", FieldKind::Choice(CONCEPT_OR_REFERENCE)),
        optional("isActive", BOOLEAN),
        optional("amount", complex("Ratio")),
    ],
};

pub static BASIC: ElementSchema = ElementSchema {
    name: "Basic",
    category: SchemaCategory::Resource,
    base: DOMAIN_RESOURCE_BASE,
    fields: &[
        list("identifier", complex("Identifier")),
        required("code", complex("CodeableConcept")),
        optional("subject", complex("Reference")),
        optional("created", DATE),
        optional("author", complex("Reference")),
    ],
};

pub static BUNDLE: ElementSchema = ElementSchema {
    name: "Bundle",
    category: SchemaCategory::Resource,
    base: RESOURCE_BASE,
    fields: &[
        optional("identifier", complex("Identifier")),
        required("type", code(BundleType::SYSTEM)),
        optional("total", UNSIGNED_INT),
        list("link", complex("Bundle.link")),
        list("entry", complex("Bundle.entry")),
    ],
};

pub static BUNDLE_LINK: ElementSchema = ElementSchema {
    name: "Bundle.link",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[required("relation", STRING), required("url", URI)],
};

pub static BUNDLE_ENTRY: ElementSchema = ElementSchema {
    name: "Bundle.entry",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        list("link", complex("Bundle.link")),
        optional("fullUrl", URI),
        optional("resource", RESOURCE),
        optional("search", complex("Bundle.entry.search")),
        optional("request", complex("Bundle.entry.request")),
        optional("response", complex("Bundle.entry.response")),
    ],
};

pub static BUNDLE_ENTRY_SEARCH: ElementSchema = ElementSchema {
    name: "Bundle.entry.search",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        optional("mode", code(SearchEntryMode::SYSTEM)),
        optional("score", DECIMAL),
    ],
};

pub static BUNDLE_ENTRY_REQUEST: ElementSchema = ElementSchema {
    name: "Bundle.entry.request",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        required("method", code(HttpVerb::SYSTEM)),
        required("url", URI),
        optional("ifNoneMatch", STRING),
        optional("ifModifiedSince", INSTANT),
        optional("ifMatch", STRING),
        optional("ifNoneExist", STRING),
    ],
};

pub static BUNDLE_ENTRY_RESPONSE: ElementSchema = ElementSchema {
    name: "Bundle.entry.response",
    category: SchemaCategory::Backbone,
    base: BACKBONE_BASE,
    fields: &[
        required("status", STRING),
        optional("location", URI),
        optional("etag", STRING),
        optional("lastModified", INSTANT),
        optional("outcome", RESOURCE),
    ],
};

