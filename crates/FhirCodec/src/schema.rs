//! Static schema tables describing resources, datatypes and backbone elements.
//!
//! Each profile module (`stu3`, `r4`) declares its catalog with the constants
//! and constructor functions in this module. The codec walks these tables and
//! never special-cases a resource type.

use crate::code_system::CodeSystemDef;

/// FHIR primitive datatypes and how they sit on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    PositiveInt,
    UnsignedInt,
    Decimal,
    String,
    Code,
    Id,
    Markdown,
    Uri,
    Url,
    Canonical,
    Oid,
    Uuid,
    Base64Binary,
    Xhtml,
    Date,
    DateTime,
    Instant,
    Time,
}

impl PrimitiveKind {
    /// The FHIR type name, e.g. `positiveInt`.
    pub fn type_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::PositiveInt => "positiveInt",
            PrimitiveKind::UnsignedInt => "unsignedInt",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::String => "string",
            PrimitiveKind::Code => "code",
            PrimitiveKind::Id => "id",
            PrimitiveKind::Markdown => "markdown",
            PrimitiveKind::Uri => "uri",
            PrimitiveKind::Url => "url",
            PrimitiveKind::Canonical => "canonical",
            PrimitiveKind::Oid => "oid",
            PrimitiveKind::Uuid => "uuid",
            PrimitiveKind::Base64Binary => "base64Binary",
            PrimitiveKind::Xhtml => "xhtml",
            PrimitiveKind::Date => "date",
            PrimitiveKind::DateTime => "dateTime",
            PrimitiveKind::Instant => "instant",
            PrimitiveKind::Time => "time",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Integer | PrimitiveKind::PositiveInt | PrimitiveKind::UnsignedInt
        )
    }

    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Date | PrimitiveKind::DateTime | PrimitiveKind::Instant | PrimitiveKind::Time
        )
    }
}

/// One admissible type of a `[x]` field, e.g. `Quantity` for `valueQuantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceType {
    /// Key suffix, `Quantity` in `valueQuantity`
    pub suffix: &'static str,
    pub target: TypeRef,
}

/// Target of a choice type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// A complex datatype, looked up by name in the profile
    Complex(&'static str),
}

/// What a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(PrimitiveKind),
    /// A `code` bound to a closed code system
    Code(&'static CodeSystemDef),
    /// A complex datatype or backbone element, by schema name
    Complex(&'static str),
    Choice(&'static [ChoiceType]),
    /// Any resource of the profile, dispatched on `resourceType`
    Resource,
    /// `extension` or `modifierExtension`
    Extensions,
}

/// One field of an [`ElementSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// JSON member name; for a choice field the part before the suffix
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub repeated: bool,
}

impl FieldDef {
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Whether the `_name` sibling may appear for this field.
    pub fn has_primitive_sibling(&self) -> bool {
        matches!(self.kind, FieldKind::Primitive(_) | FieldKind::Code(_))
    }

    /// The declared choice type for a concrete JSON key such as `valueQuantity`.
    pub fn choice_for_key(&self, key: &str) -> Option<&'static ChoiceType> {
        let FieldKind::Choice(types) = self.kind else {
            return None;
        };
        let suffix = key.strip_prefix(self.name)?;
        types.iter().find(|choice| choice.suffix == suffix)
    }
}

/// Role of a schema inside a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCategory {
    Resource,
    Datatype,
    /// Inline element of a resource or datatype, named `Resource.path`
    Backbone,
}

/// Field table of one resource, datatype or backbone element.
///
/// `base` holds the inherited fields (`Resource`, `DomainResource`,
/// `Element` or `BackboneElement`) and `fields` the type's own. Slots of a
/// decoded [`Element`](crate::Element) follow `base` then `fields`.
#[derive(Debug)]
pub struct ElementSchema {
    pub name: &'static str,
    pub category: SchemaCategory,
    pub base: &'static [FieldDef],
    pub fields: &'static [FieldDef],
}

impl ElementSchema {
    /// All fields in slot order.
    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldDef> + use<> {
        let base: &'static [FieldDef] = self.base;
        let fields: &'static [FieldDef] = self.fields;
        base.iter().chain(fields.iter())
    }

    pub fn field_count(&self) -> usize {
        self.base.len() + self.fields.len()
    }

    pub fn field_at(&self, index: usize) -> Option<&'static FieldDef> {
        let base: &'static [FieldDef] = self.base;
        let fields: &'static [FieldDef] = self.fields;
        if index < base.len() {
            base.get(index)
        } else {
            fields.get(index - base.len())
        }
    }

    /// Slot index of the field with this logical name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.all_fields().position(|field| field.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.all_fields().find(|field| field.name == name)
    }

    pub fn is_resource(&self) -> bool {
        self.category == SchemaCategory::Resource
    }

    /// Whether a JSON key belongs to this schema, including `_field`
    /// siblings and concrete choice keys.
    pub fn declares_key(&self, key: &str) -> bool {
        if self.is_resource() && key == "resourceType" {
            return true;
        }
        if let Some(sibling) = key.strip_prefix('_') {
            return self.all_fields().any(|field| match field.kind {
                FieldKind::Primitive(_) | FieldKind::Code(_) => field.name == sibling,
                FieldKind::Choice(_) => field
                    .choice_for_key(sibling)
                    .is_some_and(|choice| matches!(choice.target, TypeRef::Primitive(_))),
                _ => false,
            });
        }
        self.all_fields().any(|field| {
            if field.is_choice() {
                field.choice_for_key(key).is_some()
            } else {
                field.name == key
            }
        })
    }
}

// Table-building helpers used by the profile catalogs.

pub const fn optional(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind, required: false, repeated: false }
}

pub const fn required(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind, required: true, repeated: false }
}

pub const fn list(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind, required: false, repeated: true }
}

pub const fn required_list(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind, required: true, repeated: true }
}

pub const fn primitive_choice(suffix: &'static str, kind: PrimitiveKind) -> ChoiceType {
    ChoiceType { suffix, target: TypeRef::Primitive(kind) }
}

pub const fn complex_choice(name: &'static str) -> ChoiceType {
    ChoiceType { suffix: name, target: TypeRef::Complex(name) }
}

pub const fn complex(name: &'static str) -> FieldKind {
    FieldKind::Complex(name)
}

pub const fn code(system: &'static CodeSystemDef) -> FieldKind {
    FieldKind::Code(system)
}

pub const BOOLEAN: FieldKind = FieldKind::Primitive(PrimitiveKind::Boolean);
pub const INTEGER: FieldKind = FieldKind::Primitive(PrimitiveKind::Integer);
pub const POSITIVE_INT: FieldKind = FieldKind::Primitive(PrimitiveKind::PositiveInt);
pub const UNSIGNED_INT: FieldKind = FieldKind::Primitive(PrimitiveKind::UnsignedInt);
pub const DECIMAL: FieldKind = FieldKind::Primitive(PrimitiveKind::Decimal);
pub const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);
pub const CODE: FieldKind = FieldKind::Primitive(PrimitiveKind::Code);
pub const ID: FieldKind = FieldKind::Primitive(PrimitiveKind::Id);
pub const MARKDOWN: FieldKind = FieldKind::Primitive(PrimitiveKind::Markdown);
pub const URI: FieldKind = FieldKind::Primitive(PrimitiveKind::Uri);
pub const URL: FieldKind = FieldKind::Primitive(PrimitiveKind::Url);
pub const CANONICAL: FieldKind = FieldKind::Primitive(PrimitiveKind::Canonical);
pub const BASE64_BINARY: FieldKind = FieldKind::Primitive(PrimitiveKind::Base64Binary);
pub const XHTML: FieldKind = FieldKind::Primitive(PrimitiveKind::Xhtml);
pub const DATE: FieldKind = FieldKind::Primitive(PrimitiveKind::Date);
pub const DATE_TIME: FieldKind = FieldKind::Primitive(PrimitiveKind::DateTime);
pub const INSTANT: FieldKind = FieldKind::Primitive(PrimitiveKind::Instant);
pub const TIME: FieldKind = FieldKind::Primitive(PrimitiveKind::Time);
pub const RESOURCE: FieldKind = FieldKind::Resource;
pub const EXTENSIONS: FieldKind = FieldKind::Extensions;

/// Fields every datatype inherits from `Element`.
pub const ELEMENT_BASE: &[FieldDef] = &[optional("id", STRING), list("extension", EXTENSIONS)];

/// Fields every backbone element inherits from `BackboneElement`.
pub const BACKBONE_BASE: &[FieldDef] = &[
    optional("id", STRING),
    list("extension", EXTENSIONS),
    list("modifierExtension", EXTENSIONS),
];

#[cfg(test)]
mod tests {
    use super::*;

    const VALUE_TYPES: &[ChoiceType] = &[
        complex_choice("Quantity"),
        primitive_choice("String", PrimitiveKind::String),
    ];

    static SAMPLE: ElementSchema = ElementSchema {
        name: "Sample",
        category: SchemaCategory::Resource,
        base: &[optional("id", ID)],
        fields: &[
            required("status", CODE),
            list("given", STRING),
            optional("value", FieldKind::Choice(VALUE_TYPES)),
            optional("subject", complex("Reference")),
        ],
    };

    #[test]
    fn slots_follow_base_then_fields() {
        let names: Vec<&str> = SAMPLE.all_fields().map(|field| field.name).collect();
        assert_eq!(names, vec!["id", "status", "given", "value", "subject"]);
        assert_eq!(SAMPLE.position("value"), Some(3));
        assert_eq!(SAMPLE.field_at(0).map(|field| field.name), Some("id"));
        assert_eq!(SAMPLE.field_at(5), None);
    }

    #[test]
    fn recognises_declared_keys() {
        assert!(SAMPLE.declares_key("resourceType"));
        assert!(SAMPLE.declares_key("status"));
        assert!(SAMPLE.declares_key("_status"));
        assert!(SAMPLE.declares_key("_given"));
        assert!(SAMPLE.declares_key("valueQuantity"));
        assert!(SAMPLE.declares_key("_valueString"));
        assert!(!SAMPLE.declares_key("_valueQuantity"));
        assert!(!SAMPLE.declares_key("valueBoolean"));
        assert!(!SAMPLE.declares_key("value"));
        assert!(!SAMPLE.declares_key("_subject"));
        assert!(!SAMPLE.declares_key("colour"));
    }

    #[test]
    fn choice_keys_resolve_to_their_type() {
        let field = SAMPLE.field("value").expect("declared");
        let choice = field.choice_for_key("valueString").expect("declared suffix");
        assert_eq!(choice.target, TypeRef::Primitive(PrimitiveKind::String));
        assert!(field.choice_for_key("valueInteger").is_none());
    }
}
