use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use super::{Decoder, Encoder};
use crate::config::ChoicePolicy;
use crate::element::{Choice, Value};
use crate::error::{CodecError, Result};
use crate::schema::{ChoiceType, TypeRef};

/// Suffixes of `types` that appear in `object` under `name`, in declaration order.
///
/// A `_nameSuffix` sibling counts only for primitive targets.
fn present_choices(
    object: &Map<String, JsonValue>,
    name: &str,
    types: &'static [ChoiceType],
) -> Vec<&'static ChoiceType> {
    let mut found: Vec<&str> = Vec::new();
    for key in object.keys() {
        let (bare, sibling) = match key.strip_prefix('_') {
            Some(bare) => (bare, true),
            None => (key.as_str(), false),
        };
        let Some(suffix) = bare.strip_prefix(name) else {
            continue;
        };
        let declared = types.iter().find(|choice| choice.suffix == suffix);
        if let Some(choice) = declared
            && (!sibling || matches!(choice.target, TypeRef::Primitive(_)))
        {
            found.push(choice.suffix);
        }
    }
    types
        .iter()
        .filter(|choice| found.contains(&choice.suffix))
        .collect()
}

impl Decoder<'_> {
    /// Decodes the single populated variant of `name[x]`, if any.
    pub(super) fn decode_choice(
        &mut self,
        object: &Map<String, JsonValue>,
        name: &str,
        types: &'static [ChoiceType],
    ) -> Result<Option<Choice>> {
        let present = present_choices(object, name, types);
        let choice = match present.as_slice() {
            [] => return Ok(None),
            [only] => *only,
            [first, ..] => match self.options.choice_policy {
                ChoicePolicy::Reject => {
                    return Err(CodecError::AmbiguousChoiceField {
                        path: self.path.join(name),
                        suffixes: present.iter().map(|choice| choice.suffix.to_string()).collect(),
                    });
                }
                ChoicePolicy::FirstDeclared => {
                    debug!(
                        path = %self.path.join(name),
                        kept = first.suffix,
                        candidates = present.len(),
                        "several variants of a choice field present, keeping the first declared"
                    );
                    *first
                }
            },
        };

        let key = format!("{}{}", name, choice.suffix);
        self.path.push_field(&key);
        let value = match choice.target {
            TypeRef::Primitive(kind) => {
                let sibling = object.get(&format!("_{}", key));
                Value::Primitive(self.decode_primitive(kind, None, object.get(&key), sibling)?)
            }
            TypeRef::Complex(type_name) => {
                let wire = object
                    .get(&key)
                    .ok_or_else(|| CodecError::MissingRequiredField(self.path.clone()))?;
                let schema = self.resolve_type(type_name)?;
                Value::Element(Box::new(self.decode_element(wire, schema)?))
            }
        };
        self.path.pop();

        Ok(Some(Choice {
            suffix: choice.suffix,
            value,
        }))
    }
}

impl Encoder {
    /// Writes a choice value under its concrete key, e.g. `effectiveDateTime`.
    pub(super) fn encode_choice(
        &mut self,
        name: &str,
        types: &'static [ChoiceType],
        choice: &Choice,
        map: &mut Map<String, JsonValue>,
    ) -> Result<()> {
        let Some(declared) = types.iter().find(|declared| declared.suffix == choice.suffix) else {
            return Err(CodecError::InvalidChoiceType {
                path: self.path.join(name),
                suffix: choice.suffix.to_string(),
            });
        };

        let key = choice.key(name);
        self.path.push_field(&key);
        match (declared.target, &choice.value) {
            (TypeRef::Primitive(kind), Value::Primitive(primitive)) => {
                let (wire, sibling) = self.encode_primitive(kind, None, primitive)?;
                let sibling_key = format!("_{}", key);
                if let Some(wire) = wire {
                    map.insert(key, wire);
                }
                if let Some(sibling) = sibling {
                    map.insert(sibling_key, sibling);
                }
            }
            (TypeRef::Complex(type_name), Value::Element(element)) if element.type_name() == type_name => {
                let object = self.encode_element(element)?;
                map.insert(key, JsonValue::Object(object));
            }
            _ => {
                return Err(self.invalid(format!(
                    "value does not match the declared type of `{}`",
                    key
                )));
            }
        }
        self.path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::{PrimitiveKind, complex_choice, primitive_choice};

    static TYPES: &[ChoiceType] = &[
        complex_choice("Quantity"),
        primitive_choice("String", PrimitiveKind::String),
        primitive_choice("DateTime", PrimitiveKind::DateTime),
    ];

    fn object(value: JsonValue) -> Map<String, JsonValue> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn finds_variants_in_declaration_order() {
        let found = present_choices(
            &object(json!({"valueDateTime": "2020", "valueQuantity": {}, "status": "final"})),
            "value",
            TYPES,
        );
        let suffixes: Vec<&str> = found.iter().map(|choice| choice.suffix).collect();
        assert_eq!(suffixes, vec!["Quantity", "DateTime"]);
    }

    #[test]
    fn sibling_alone_selects_primitive_variants_only() {
        let found = present_choices(&object(json!({"_valueString": {"id": "a"}})), "value", TYPES);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suffix, "String");

        let found = present_choices(&object(json!({"_valueQuantity": {}})), "value", TYPES);
        assert!(found.is_empty());
    }

    #[test]
    fn undeclared_suffixes_are_not_variants() {
        let found = present_choices(&object(json!({"valueBoolean": true, "value": 1})), "value", TYPES);
        assert!(found.is_empty());
    }
}
