//! R4 complex datatypes.

use super::codes::*;
use crate::CodeSystem;
use crate::schema::*;

const ANNOTATION_AUTHOR: &[ChoiceType] = &[
    complex_choice("Reference"),
    primitive_choice("String", PrimitiveKind::String),
];

const TIMING_BOUNDS: &[ChoiceType] = &[
    complex_choice("Duration"),
    complex_choice("Range"),
    complex_choice("Period"),
];

/// Fields shared by `Quantity` and its constrained profiles.
const QUANTITY_FIELDS: &[FieldDef] = &[
    optional("value", DECIMAL),
    optional("comparator", code(QuantityComparator::SYSTEM)),
    optional("unit", STRING),
    optional("system", URI),
    optional("code", CODE),
];

pub static META: ElementSchema = ElementSchema {
    name: "Meta",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("versionId", ID),
        optional("lastUpdated", INSTANT),
        optional("source", URI),
        list("profile", CANONICAL),
        list("security", complex("Coding")),
        list("tag", complex("Coding")),
    ],
};

pub static NARRATIVE: ElementSchema = ElementSchema {
    name: "Narrative",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        required("status", code(NarrativeStatus::SYSTEM)),
        required("div", XHTML),
    ],
};

pub static CODING: ElementSchema = ElementSchema {
    name: "Coding",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("system", URI),
        optional("version", STRING),
        optional("code", CODE),
        optional("display", STRING),
        optional("userSelected", BOOLEAN),
    ],
};

pub static CODEABLE_CONCEPT: ElementSchema = ElementSchema {
    name: "CodeableConcept",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[list("coding", complex("Coding")), optional("text", STRING)],
};

pub static QUANTITY: ElementSchema = ElementSchema {
    name: "Quantity",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: QUANTITY_FIELDS,
};

pub static SIMPLE_QUANTITY: ElementSchema = ElementSchema {
    name: "SimpleQuantity",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("value", DECIMAL),
        optional("unit", STRING),
        optional("system", URI),
        optional("code", CODE),
    ],
};

pub static AGE: ElementSchema = ElementSchema {
    name: "Age",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: QUANTITY_FIELDS,
};

pub static DURATION: ElementSchema = ElementSchema {
    name: "Duration",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: QUANTITY_FIELDS,
};

pub static COUNT: ElementSchema = ElementSchema {
    name: "Count",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: QUANTITY_FIELDS,
};

pub static DISTANCE: ElementSchema = ElementSchema {
    name: "Distance",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: QUANTITY_FIELDS,
};

pub static MONEY: ElementSchema = ElementSchema {
    name: "Money",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[optional("value", DECIMAL), optional("currency", CODE)],
};

pub static RANGE: ElementSchema = ElementSchema {
    name: "Range",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("low", complex("SimpleQuantity")),
        optional("high", complex("SimpleQuantity")),
    ],
};

pub static RATIO: ElementSchema = ElementSchema {
    name: "Ratio",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("numerator", complex("Quantity")),
        optional("denominator", complex("Quantity")),
    ],
};

pub static PERIOD: ElementSchema = ElementSchema {
    name: "Period",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[optional("start", DATE_TIME), optional("end", DATE_TIME)],
};

pub static IDENTIFIER: ElementSchema = ElementSchema {
    name: "Identifier",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("use", code(IdentifierUse::SYSTEM)),
        optional("type", complex("CodeableConcept")),
        optional("system", URI),
        optional("value", STRING),
        optional("period", complex("Period")),
        optional("assigner", complex("Reference")),
    ],
};

pub static REFERENCE: ElementSchema = ElementSchema {
    name: "Reference",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("reference", STRING),
        optional("type", URI),
        optional("identifier", complex("Identifier")),
        optional("display", STRING),
    ],
};

pub static HUMAN_NAME: ElementSchema = ElementSchema {
    name: "HumanName",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("use", code(NameUse::SYSTEM)),
        optional("text", STRING),
        optional("family", STRING),
        list("given", STRING),
        list("prefix", STRING),
        list("suffix", STRING),
        optional("period", complex("Period")),
    ],
};

pub static ADDRESS: ElementSchema = ElementSchema {
    name: "Address",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("use", code(AddressUse::SYSTEM)),
        optional("type", code(AddressType::SYSTEM)),
        optional("text", STRING),
        list("line", STRING),
        optional("city", STRING),
        optional("district", STRING),
        optional("state", STRING),
        optional("postalCode", STRING),
        optional("country", STRING),
        optional("period", complex("Period")),
    ],
};

pub static CONTACT_POINT: ElementSchema = ElementSchema {
    name: "ContactPoint",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("system", code(ContactPointSystem::SYSTEM)),
        optional("value", STRING),
        optional("use", code(ContactPointUse::SYSTEM)),
        optional("rank", POSITIVE_INT),
        optional("period", complex("Period")),
    ],
};

pub static ANNOTATION: ElementSchema = ElementSchema {
    name: "Annotation",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("author", FieldKind::Choice(ANNOTATION_AUTHOR)),
        optional("time", DATE_TIME),
        required("text", MARKDOWN),
    ],
};

pub static ATTACHMENT: ElementSchema = ElementSchema {
    name: "Attachment",
    category: SchemaCategory::Datatype,
    base: ELEMENT_BASE,
    fields: &[
        optional("contentType", CODE),
        optional("language", CODE),
        optional("data", BASE64_BINARY),
        optional("url", URL),
        optional("size", UNSIGNED_INT),
        optional("hash", BASE64_BINARY),
        optional("title", STRING),
        optional("creation", DATE_TIME),
    ],
};

pub static TIMING: ElementSchema = ElementSchema {
    name: "Timing",
    category: SchemaCategory::Datatype,
    base: BACKBONE_BASE,
    fields: &[
        list("event", DATE_TIME),
        optional("repeat", complex("Timing.repeat")),
        optional("code", complex("CodeableConcept")),
    ],
};

pub static TIMING_REPEAT: ElementSchema = ElementSchema {
    name: "Timing.repeat",
    category: SchemaCategory::Backbone,
    base: ELEMENT_BASE,
    fields: &[
        optional("bounds", FieldKind::Choice(TIMING_BOUNDS)),
        optional("count", POSITIVE_INT),
        optional("countMax", POSITIVE_INT),
        optional("duration", DECIMAL),
        optional("durationMax", DECIMAL),
        optional("durationUnit", code(UnitsOfTime::SYSTEM)),
        optional("frequency", POSITIVE_INT),
        optional("frequencyMax", POSITIVE_INT),
        optional("period", DECIMAL),
        optional("periodMax", DECIMAL),
        optional("periodUnit", code(UnitsOfTime::SYSTEM)),
        list("dayOfWeek", code(DayOfWeek::SYSTEM)),
        list("timeOfDay", TIME),
        list("when", CODE),
        optional("offset", UNSIGNED_INT),
    ],
};

/// Admissible `Extension.value[x]` and `Parameters.parameter.value[x]` types,
/// limited to the datatypes above.
pub const EXTENSION_VALUE_TYPES: &[ChoiceType] = &[
    primitive_choice("Base64Binary", PrimitiveKind::Base64Binary),
    primitive_choice("Boolean", PrimitiveKind::Boolean),
    primitive_choice("Canonical", PrimitiveKind::Canonical),
    primitive_choice("Code", PrimitiveKind::Code),
    primitive_choice("Date", PrimitiveKind::Date),
    primitive_choice("DateTime", PrimitiveKind::DateTime),
    primitive_choice("Decimal", PrimitiveKind::Decimal),
    primitive_choice("Id", PrimitiveKind::Id),
    primitive_choice("Instant", PrimitiveKind::Instant),
    primitive_choice("Integer", PrimitiveKind::Integer),
    primitive_choice("Markdown", PrimitiveKind::Markdown),
    primitive_choice("Oid", PrimitiveKind::Oid),
    primitive_choice("PositiveInt", PrimitiveKind::PositiveInt),
    primitive_choice("String", PrimitiveKind::String),
    primitive_choice("Time", PrimitiveKind::Time),
    primitive_choice("UnsignedInt", PrimitiveKind::UnsignedInt),
    primitive_choice("Uri", PrimitiveKind::Uri),
    primitive_choice("Url", PrimitiveKind::Url),
    primitive_choice("Uuid", PrimitiveKind::Uuid),
    complex_choice("Address"),
    complex_choice("Age"),
    complex_choice("Annotation"),
    complex_choice("Attachment"),
    complex_choice("CodeableConcept"),
    complex_choice("Coding"),
    complex_choice("ContactPoint"),
    complex_choice("Count"),
    complex_choice("Distance"),
    complex_choice("Duration"),
    complex_choice("HumanName"),
    complex_choice("Identifier"),
    complex_choice("Money"),
    complex_choice("Period"),
    complex_choice("Quantity"),
    complex_choice("Range"),
    complex_choice("Ratio"),
    complex_choice("Reference"),
    complex_choice("Timing"),
    complex_choice("Meta"),
];
