//! The decoded resource graph.
//!
//! Decoding produces a tree of [`Element`]s. Each element points at its
//! static [`ElementSchema`] and owns one slot per schema field. The graph is a
//! read-only snapshot: there is no mutation API, and every node is `Send + Sync`.

use std::fmt;

use crate::code_system::{Code, CodeSystem};
use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::fhir_version::FhirVersion;
use crate::precise_decimal::PreciseDecimal;
use crate::schema::{ElementSchema, FieldDef};

/// Scalar content of a FHIR primitive.
///
/// Date and time values keep the wire string; the `as_*` views parse it on
/// demand into the partial-precision types.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Boolean(bool),
    /// `integer`, `positiveInt` and `unsignedInt`
    Integer(i32),
    /// `quoted` records that the wire value was a JSON string such as `"185"`
    Decimal { value: PreciseDecimal, quoted: bool },
    /// Every string-like type, including `uri`, `id`, `markdown` and unbound `code`
    String(String),
    Date(String),
    DateTime(String),
    Instant(String),
    Time(String),
    /// A `code` bound to a closed code system
    Code(Code),
}

impl PrimitiveValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrimitiveValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            PrimitiveValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&PreciseDecimal> {
        match self {
            PrimitiveValue::Decimal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Text of any string-shaped value, including codes and date/time strings.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimitiveValue::String(s)
            | PrimitiveValue::Date(s)
            | PrimitiveValue::DateTime(s)
            | PrimitiveValue::Instant(s)
            | PrimitiveValue::Time(s) => Some(s),
            PrimitiveValue::Code(code) => Some(code.as_str()),
            PrimitiveValue::Boolean(_) | PrimitiveValue::Integer(_) | PrimitiveValue::Decimal { .. } => None,
        }
    }

    pub fn as_code(&self) -> Option<Code> {
        match self {
            PrimitiveValue::Code(code) => Some(*code),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<PrecisionDate> {
        match self {
            PrimitiveValue::Date(s) => PrecisionDate::parse(s),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<PrecisionDateTime> {
        match self {
            PrimitiveValue::DateTime(s) => PrecisionDateTime::parse(s),
            _ => None,
        }
    }

    pub fn as_instant(&self) -> Option<PrecisionInstant> {
        match self {
            PrimitiveValue::Instant(s) => PrecisionInstant::parse(s),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<PrecisionTime> {
        match self {
            PrimitiveValue::Time(s) => PrecisionTime::parse(s),
            _ => None,
        }
    }
}

/// A primitive together with its `_field` side channel.
///
/// In JSON a primitive may appear as a bare value, as a bare `_field` object
/// carrying `id`/`extension`, or as both:
///
/// ```json
/// {
///   "birthDate": "1970-03-30",
///   "_birthDate": {
///     "extension": [{ "url": "http://hl7.org/fhir/StructureDefinition/patient-birthTime",
///                     "valueDateTime": "1970-03-30T14:35:00+01:00" }]
///   }
/// }
/// ```
///
/// Decoding merges both members into one `PrimitiveElement`; encoding splits
/// it again and omits `_field` when there is nothing to put in it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveElement {
    pub(crate) value: Option<PrimitiveValue>,
    pub(crate) id: Option<String>,
    pub(crate) extension: Vec<Extension>,
}

impl PrimitiveElement {
    pub(crate) fn new(value: Option<PrimitiveValue>) -> Self {
        Self {
            value,
            id: None,
            extension: Vec::new(),
        }
    }

    pub fn value(&self) -> Option<&PrimitiveValue> {
        self.value.as_ref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extension
    }

    /// True when the `_field` sibling has content.
    pub fn has_side_channel(&self) -> bool {
        self.id.is_some() || !self.extension.is_empty()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(PrimitiveValue::as_str)
    }
}

/// One entry of an `extension` or `modifierExtension` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    pub(crate) id: Option<String>,
    pub(crate) url: String,
    pub(crate) extension: Vec<Extension>,
    pub(crate) value: Option<Choice>,
}

impl Extension {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Nested extensions of a complex extension.
    pub fn extensions(&self) -> &[Extension] {
        &self.extension
    }

    /// The `value[x]` of a simple extension.
    pub fn value(&self) -> Option<&Choice> {
        self.value.as_ref()
    }

    /// First extension in `list` with the given url.
    pub fn find<'a>(list: &'a [Extension], url: &str) -> Option<&'a Extension> {
        list.iter().find(|extension| extension.url == url)
    }

    /// Every extension in `list` with the given url, in order.
    pub fn find_all<'a>(list: &'a [Extension], url: &'a str) -> impl Iterator<Item = &'a Extension> {
        list.iter().filter(move |extension| extension.url == url)
    }
}

/// The populated variant of a `[x]` field.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub(crate) suffix: &'static str,
    pub(crate) value: Value,
}

impl Choice {
    /// Type suffix, `Quantity` for `valueQuantity`.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The JSON member name for a field with the given base name.
    pub fn key(&self, field_name: &str) -> String {
        format!("{}{}", field_name, self.suffix)
    }
}

/// A node in the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Primitive(PrimitiveElement),
    Element(Box<Element>),
    Resource(Box<Resource>),
}

impl Value {
    pub fn as_primitive(&self) -> Option<&PrimitiveElement> {
        match self {
            Value::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    /// The element, or the root element of a resource.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(element) => Some(element),
            Value::Resource(resource) => Some(&resource.root),
            Value::Primitive(_) => None,
        }
    }

    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Value::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_primitive().and_then(PrimitiveElement::as_str)
    }

    pub fn as_decimal(&self) -> Option<&PreciseDecimal> {
        self.as_primitive()
            .and_then(PrimitiveElement::value)
            .and_then(PrimitiveValue::as_decimal)
    }

    pub fn as_code<T: CodeSystem>(&self) -> Option<T> {
        self.as_primitive()
            .and_then(PrimitiveElement::value)
            .and_then(PrimitiveValue::as_code)
            .and_then(|code| code.get::<T>())
    }
}

/// Content of one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Single(Value),
    /// A repeated field; may be empty when the wire array was `[]`
    Repeated(Vec<Value>),
    Choice(Choice),
    Extensions(Vec<Extension>),
}

impl FieldValue {
    /// Values of the field in order; a single value is a one-element slice.
    pub fn values(&self) -> &[Value] {
        match self {
            FieldValue::Single(value) => std::slice::from_ref(value),
            FieldValue::Repeated(values) => values,
            FieldValue::Choice(choice) => std::slice::from_ref(&choice.value),
            FieldValue::Extensions(_) => &[],
        }
    }
}

/// A resource, backbone element or complex datatype instance.
#[derive(Clone)]
pub struct Element {
    pub(crate) schema: &'static ElementSchema,
    pub(crate) slots: Vec<Option<FieldValue>>,
}

impl Element {
    pub(crate) fn from_slots(schema: &'static ElementSchema, slots: Vec<Option<FieldValue>>) -> Self {
        Self { schema, slots }
    }

    pub fn schema(&self) -> &'static ElementSchema {
        self.schema
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    /// Populated fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldDef, &FieldValue)> + '_ {
        self.schema
            .all_fields()
            .zip(self.slots.iter())
            .filter_map(|(field, slot)| slot.as_ref().map(|value| (field, value)))
    }

    /// The slot of a field by logical name (`value` for `value[x]`).
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let index = self.schema.position(name)?;
        self.slots.get(index)?.as_ref()
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The value of a single-valued field, or the first value of a list.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values(name).first()
    }

    pub fn values(&self, name: &str) -> &[Value] {
        self.get(name).map(FieldValue::values).unwrap_or(&[])
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.value(name).and_then(Value::as_element)
    }

    pub fn elements<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> + 'a {
        self.values(name).iter().filter_map(Value::as_element)
    }

    pub fn primitive(&self, name: &str) -> Option<&PrimitiveElement> {
        self.value(name).and_then(Value::as_primitive)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.primitive(name).and_then(PrimitiveElement::as_str)
    }

    /// Typed value of a code field bound to `T`.
    pub fn code<T: CodeSystem>(&self, name: &str) -> Option<T> {
        self.value(name).and_then(Value::as_code::<T>)
    }

    pub fn choice(&self, name: &str) -> Option<&Choice> {
        match self.get(name)? {
            FieldValue::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    pub fn extensions(&self) -> &[Extension] {
        self.extension_list("extension")
    }

    pub fn modifier_extensions(&self) -> &[Extension] {
        self.extension_list("modifierExtension")
    }

    fn extension_list(&self, name: &str) -> &[Extension] {
        match self.get(name) {
            Some(FieldValue::Extensions(list)) => list,
            _ => &[],
        }
    }

    /// Follows a dotted path such as `activity[0].detail.status`.
    ///
    /// A segment without an index selects the first value. Choice fields are
    /// reachable by base name (`value`) or concrete key (`valueQuantity`).
    pub fn at(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let (name, index) = match segment.split_once('[') {
                Some((name, rest)) => (name, rest.strip_suffix(']')?.parse::<usize>().ok()?),
                None => (segment, 0),
            };
            let value = current.lookup(name)?.get(index)?;
            if segments.peek().is_none() {
                return Some(value);
            }
            current = value.as_element()?;
        }
        None
    }

    fn lookup(&self, key: &str) -> Option<&[Value]> {
        if let Some(slot) = self.get(key) {
            return Some(slot.values());
        }
        let field = self
            .schema
            .all_fields()
            .find(|field| field.choice_for_key(key).is_some())?;
        match self.get(field.name)? {
            FieldValue::Choice(choice) if field.choice_for_key(key)?.suffix == choice.suffix => {
                Some(std::slice::from_ref(&choice.value))
            }
            _ => None,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.slots == other.slots
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        map.entry(&"type", &self.schema.name);
        for (field, value) in self.fields() {
            map.entry(&field.name, value);
        }
        map.finish()
    }
}

/// A decoded resource of one FHIR release.
///
/// The resource type comes from the schema the dispatcher selected, so it
/// always equals the wire `resourceType`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub(crate) version: FhirVersion,
    pub(crate) root: Element,
}

impl Resource {
    pub fn version(&self) -> FhirVersion {
        self.version
    }

    pub fn resource_type(&self) -> &'static str {
        self.root.schema.name
    }

    /// The resource type as a variant of the profile's `ResourceType` enum.
    pub fn kind<T: CodeSystem>(&self) -> Option<T> {
        T::resolve(self.resource_type())
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn id(&self) -> Option<&str> {
        self.root.string("id")
    }

    pub fn at(&self, path: &str) -> Option<&Value> {
        self.root.at(path)
    }

    /// Inline resources from `contained`, in document order.
    pub fn contained(&self) -> impl Iterator<Item = &Resource> + '_ {
        self.root.values("contained").iter().filter_map(Value::as_resource)
    }

    /// A contained resource by its local id, as referenced by `#id`.
    pub fn contained_by_id(&self, id: &str) -> Option<&Resource> {
        let id = id.strip_prefix('#').unwrap_or(id);
        self.contained().find(|resource| resource.id() == Some(id))
    }
}
