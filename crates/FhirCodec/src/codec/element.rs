use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

use super::{Decoder, Encoder};
use crate::config::UnknownFieldPolicy;
use crate::element::{Element, FieldValue, Value};
use crate::error::{CodecError, Result};
use crate::schema::{ElementSchema, FieldDef, FieldKind, PrimitiveKind};

impl Decoder<'_> {
    pub(super) fn decode_element(
        &mut self,
        value: &JsonValue,
        schema: &'static ElementSchema,
    ) -> Result<Element> {
        let object = self.expect_object(value)?;
        self.decode_object(object, schema)
    }

    /// Walks `schema` over a JSON object, filling one slot per field.
    pub(super) fn decode_object(
        &mut self,
        object: &Map<String, JsonValue>,
        schema: &'static ElementSchema,
    ) -> Result<Element> {
        self.enter()?;
        let mut slots = Vec::with_capacity(schema.field_count());
        for field in schema.all_fields() {
            let slot = self.decode_field(object, field)?;
            if slot.is_none() && field.required {
                return Err(CodecError::MissingRequiredField(self.path.join(field.name)));
            }
            slots.push(slot);
        }
        for key in object.keys() {
            if !schema.declares_key(key) {
                self.unknown_key(key)?;
            }
        }
        self.leave();
        Ok(Element::from_slots(schema, slots))
    }

    /// Applies the unknown-field policy to an undeclared member.
    pub(super) fn unknown_key(&mut self, key: &str) -> Result<()> {
        self.path.push_field(key);
        let result = match self.options.unknown_fields {
            UnknownFieldPolicy::Reject => Err(CodecError::UnknownField(self.path.clone())),
            UnknownFieldPolicy::Ignore => {
                debug!(path = %self.path, "dropping undeclared field");
                Ok(())
            }
        };
        self.path.pop();
        result
    }

    fn decode_field(
        &mut self,
        object: &Map<String, JsonValue>,
        field: &'static FieldDef,
    ) -> Result<Option<FieldValue>> {
        match field.kind {
            FieldKind::Primitive(kind) => self.decode_primitive_field(object, field, kind, None),
            FieldKind::Code(system) => {
                self.decode_primitive_field(object, field, PrimitiveKind::Code, Some(system))
            }
            FieldKind::Choice(types) => Ok(self
                .decode_choice(object, field.name, types)?
                .map(FieldValue::Choice)),
            FieldKind::Extensions => {
                let Some(value) = object.get(field.name) else {
                    return Ok(None);
                };
                self.path.push_field(field.name);
                let extensions = self.decode_extensions(value)?;
                self.path.pop();
                Ok(Some(FieldValue::Extensions(extensions)))
            }
            FieldKind::Complex(type_name) => {
                if !object.contains_key(field.name) {
                    return Ok(None);
                }
                let schema = self.resolve_type(type_name)?;
                self.decode_nested(object, field, |decoder, value| {
                    Ok(Value::Element(Box::new(decoder.decode_element(value, schema)?)))
                })
            }
            FieldKind::Resource => self.decode_nested(object, field, |decoder, value| {
                trace!(path = %decoder.path, "decoding inline resource");
                Ok(Value::Resource(Box::new(decoder.decode_resource(value, None)?)))
            }),
        }
    }

    /// Decodes a complex or resource field, honouring its cardinality.
    fn decode_nested<F>(
        &mut self,
        object: &Map<String, JsonValue>,
        field: &FieldDef,
        mut decode: F,
    ) -> Result<Option<FieldValue>>
    where
        F: FnMut(&mut Self, &JsonValue) -> Result<Value>,
    {
        let Some(wire) = object.get(field.name) else {
            return Ok(None);
        };
        self.path.push_field(field.name);
        let value = if field.repeated {
            let items = self.expect_array(wire)?;
            let mut values = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                self.path.push_index(index);
                values.push(decode(self, item)?);
                self.path.pop();
            }
            FieldValue::Repeated(values)
        } else {
            FieldValue::Single(decode(self, wire)?)
        };
        self.path.pop();
        Ok(Some(value))
    }
}

impl Encoder {
    pub(super) fn encode_element(&mut self, element: &Element) -> Result<Map<String, JsonValue>> {
        let mut map = Map::new();
        self.encode_fields(element, &mut map)?;
        Ok(map)
    }

    /// Writes every populated slot of `element` into `map` in schema order.
    pub(super) fn encode_fields(
        &mut self,
        element: &Element,
        map: &mut Map<String, JsonValue>,
    ) -> Result<()> {
        let schema = element.schema;
        if element.slots.len() != schema.field_count() {
            return Err(self.invalid(format!(
                "{} has {} slots but its schema declares {} fields",
                schema.name,
                element.slots.len(),
                schema.field_count()
            )));
        }
        for (field, slot) in schema.all_fields().zip(&element.slots) {
            match slot {
                Some(value) => self.encode_field(field, value, map)?,
                None if field.required => {
                    return Err(CodecError::MissingRequiredField(self.path.join(field.name)));
                }
                None => {}
            }
        }
        Ok(())
    }

    fn encode_field(
        &mut self,
        field: &FieldDef,
        value: &FieldValue,
        map: &mut Map<String, JsonValue>,
    ) -> Result<()> {
        match (field.kind, value) {
            (FieldKind::Primitive(kind), _) => self.encode_primitive_field(field, kind, None, value, map),
            (FieldKind::Code(system), _) => {
                self.encode_primitive_field(field, PrimitiveKind::Code, Some(system), value, map)
            }
            (FieldKind::Choice(types), FieldValue::Choice(choice)) => {
                self.encode_choice(field.name, types, choice, map)
            }
            (FieldKind::Extensions, FieldValue::Extensions(extensions)) => {
                if !extensions.is_empty() {
                    self.path.push_field(field.name);
                    let list = self.encode_extensions(extensions)?;
                    self.path.pop();
                    map.insert(field.name.to_string(), list);
                }
                Ok(())
            }
            (FieldKind::Complex(type_name), _) => {
                self.resolve_type(type_name)?;
                self.encode_nested(field, value, map, |encoder, value| match value {
                    Value::Element(element) if element.type_name() == type_name => {
                        Ok(JsonValue::Object(encoder.encode_element(element)?))
                    }
                    _ => Err(encoder.invalid(format!("expected a {} element", type_name))),
                })
            }
            (FieldKind::Resource, _) => self.encode_nested(field, value, map, |encoder, value| match value {
                Value::Resource(resource) => Ok(JsonValue::Object(encoder.encode_resource(resource)?)),
                _ => Err(encoder.invalid("expected an inline resource")),
            }),
            _ => Err(self.invalid(format!("slot of `{}` does not match its declared kind", field.name))),
        }
    }

    fn encode_nested<F>(
        &mut self,
        field: &FieldDef,
        value: &FieldValue,
        map: &mut Map<String, JsonValue>,
        mut encode: F,
    ) -> Result<()>
    where
        F: FnMut(&mut Self, &Value) -> Result<JsonValue>,
    {
        self.path.push_field(field.name);
        let json = match (field.repeated, value) {
            (true, FieldValue::Repeated(values)) => {
                let mut items = Vec::with_capacity(values.len());
                for (index, value) in values.iter().enumerate() {
                    self.path.push_index(index);
                    items.push(encode(self, value)?);
                    self.path.pop();
                }
                JsonValue::Array(items)
            }
            (false, FieldValue::Single(value)) => encode(self, value)?,
            _ => return Err(self.invalid("slot does not match the declared cardinality")),
        };
        self.path.pop();
        map.insert(field.name.to_string(), json);
        Ok(())
    }
}
