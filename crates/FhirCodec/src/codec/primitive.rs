use serde_json::{Map, Value as JsonValue};

use super::{Decoder, Encoder};
use crate::code_system::CodeSystemDef;
use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::element::{FieldValue, PrimitiveElement, PrimitiveValue, Value};
use crate::error::{CodecError, JsonKind, Result};
use crate::precise_decimal::PreciseDecimal;
use crate::schema::{FieldDef, PrimitiveKind};

fn sibling_key(name: &str) -> String {
    format!("_{}", name)
}

impl Decoder<'_> {
    fn malformed(&self, reason: impl Into<String>) -> CodecError {
        CodecError::MalformedPrimitive {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    /// Decodes a primitive or bound-code field together with its `_name` sibling.
    pub(super) fn decode_primitive_field(
        &mut self,
        object: &Map<String, JsonValue>,
        field: &FieldDef,
        kind: PrimitiveKind,
        binding: Option<&'static CodeSystemDef>,
    ) -> Result<Option<FieldValue>> {
        let wire = object.get(field.name);
        let sibling = object.get(&sibling_key(field.name));
        if wire.is_none() && sibling.is_none() {
            return Ok(None);
        }

        self.path.push_field(field.name);
        let value = if field.repeated {
            FieldValue::Repeated(self.decode_primitive_list(kind, binding, wire, sibling)?)
        } else {
            FieldValue::Single(Value::Primitive(self.decode_primitive(kind, binding, wire, sibling)?))
        };
        self.path.pop();
        Ok(Some(value))
    }

    /// Merges a wire value and its `_field` sibling into one primitive.
    pub(super) fn decode_primitive(
        &mut self,
        kind: PrimitiveKind,
        binding: Option<&'static CodeSystemDef>,
        wire: Option<&JsonValue>,
        sibling: Option<&JsonValue>,
    ) -> Result<PrimitiveElement> {
        let value = match wire {
            None => None,
            Some(JsonValue::Null) if sibling.is_some_and(|s| !s.is_null()) => None,
            Some(value) => Some(self.decode_scalar(kind, binding, value)?),
        };
        let mut element = PrimitiveElement::new(value);
        if let Some(sibling) = sibling {
            self.decode_sibling(sibling, &mut element)?;
        }
        Ok(element)
    }

    /// Decodes the parallel `given` / `_given` arrays of a repeated primitive.
    fn decode_primitive_list(
        &mut self,
        kind: PrimitiveKind,
        binding: Option<&'static CodeSystemDef>,
        wire: Option<&JsonValue>,
        sibling: Option<&JsonValue>,
    ) -> Result<Vec<Value>> {
        let values = wire.map(|value| self.expect_array(value)).transpose()?;
        let sides = sibling.map(|value| self.expect_array(value)).transpose()?;
        let len = match (values, sides) {
            (Some(values), Some(sides)) if values.len() != sides.len() => {
                return Err(self.malformed(format!(
                    "extension array has {} entries but the value array has {}",
                    sides.len(),
                    values.len()
                )));
            }
            (Some(values), _) => values.len(),
            (None, Some(sides)) => sides.len(),
            (None, None) => 0,
        };

        let mut decoded = Vec::with_capacity(len);
        for index in 0..len {
            self.path.push_index(index);
            let value = values.and_then(|v| v.get(index)).filter(|v| !v.is_null());
            let side = sides.and_then(|s| s.get(index)).filter(|s| !s.is_null());
            if value.is_none() && side.is_none() {
                return Err(self.malformed("null entry without a matching extension"));
            }
            decoded.push(Value::Primitive(self.decode_primitive(kind, binding, value, side)?));
            self.path.pop();
        }
        Ok(decoded)
    }

    fn decode_sibling(&mut self, sibling: &JsonValue, element: &mut PrimitiveElement) -> Result<()> {
        let object = self.expect_object(sibling)?;
        for (key, value) in object {
            match key.as_str() {
                "id" => match value {
                    JsonValue::String(id) => element.id = Some(id.clone()),
                    other => {
                        self.path.push_field("id");
                        return Err(self.shape_error(JsonKind::String, other));
                    }
                },
                "extension" => {
                    self.path.push_field("extension");
                    element.extension = self.decode_extensions(value)?;
                    self.path.pop();
                }
                _ => self.unknown_key(key)?,
            }
        }
        Ok(())
    }

    fn expect_string<'v>(&self, value: &'v JsonValue) -> Result<&'v str> {
        value
            .as_str()
            .ok_or_else(|| self.shape_error(JsonKind::String, value))
    }

    fn decode_scalar(
        &self,
        kind: PrimitiveKind,
        binding: Option<&'static CodeSystemDef>,
        value: &JsonValue,
    ) -> Result<PrimitiveValue> {
        match kind {
            PrimitiveKind::Boolean => value
                .as_bool()
                .map(PrimitiveValue::Boolean)
                .ok_or_else(|| self.shape_error(JsonKind::Boolean, value)),
            PrimitiveKind::Integer | PrimitiveKind::PositiveInt | PrimitiveKind::UnsignedInt => {
                self.decode_integer(kind, value)
            }
            PrimitiveKind::Decimal => self.decode_decimal(value),
            PrimitiveKind::Date => {
                let text = self.expect_string(value)?;
                self.check_temporal(kind, text, PrecisionDate::parse(text).is_some())?;
                Ok(PrimitiveValue::Date(text.to_string()))
            }
            PrimitiveKind::DateTime => {
                let text = self.expect_string(value)?;
                self.check_temporal(kind, text, PrecisionDateTime::parse(text).is_some())?;
                Ok(PrimitiveValue::DateTime(text.to_string()))
            }
            PrimitiveKind::Instant => {
                let text = self.expect_string(value)?;
                self.check_temporal(kind, text, PrecisionInstant::parse(text).is_some())?;
                Ok(PrimitiveValue::Instant(text.to_string()))
            }
            PrimitiveKind::Time => {
                let text = self.expect_string(value)?;
                self.check_temporal(kind, text, PrecisionTime::parse(text).is_some())?;
                Ok(PrimitiveValue::Time(text.to_string()))
            }
            PrimitiveKind::Code if binding.is_some() => {
                let text = self.expect_string(value)?;
                let system = binding.ok_or_else(|| self.malformed("missing code system"))?;
                system
                    .resolve(text)
                    .map(PrimitiveValue::Code)
                    .ok_or_else(|| CodecError::UnknownCode {
                        path: self.path.clone(),
                        system: system.url.to_string(),
                        value: text.to_string(),
                    })
            }
            _ => Ok(PrimitiveValue::String(self.expect_string(value)?.to_string())),
        }
    }

    fn decode_integer(&self, kind: PrimitiveKind, value: &JsonValue) -> Result<PrimitiveValue> {
        let JsonValue::Number(number) = value else {
            return Err(self.shape_error(JsonKind::Number, value));
        };
        let Some(wide) = number.as_i64() else {
            return Err(self.malformed(format!("`{}` is not an integer", number)));
        };
        let Ok(narrow) = i32::try_from(wide) else {
            return Err(self.malformed(format!("{} does not fit in a 32-bit integer", wide)));
        };
        match kind {
            PrimitiveKind::PositiveInt if narrow < 1 => Err(self.malformed(format!(
                "positiveInt must be at least 1, found {}",
                narrow
            ))),
            PrimitiveKind::UnsignedInt if narrow < 0 => Err(self.malformed(format!(
                "unsignedInt must not be negative, found {}",
                narrow
            ))),
            _ => Ok(PrimitiveValue::Integer(narrow)),
        }
    }

    fn decode_decimal(&self, value: &JsonValue) -> Result<PrimitiveValue> {
        let (text, quoted) = match value {
            JsonValue::Number(number) => (number.to_string(), false),
            JsonValue::String(text) => (text.clone(), true),
            other => return Err(self.shape_error(JsonKind::Number, other)),
        };
        let decimal = PreciseDecimal::parse(&text)
            .ok_or_else(|| self.malformed(format!("`{}` is not a decimal", text)))?;
        Ok(PrimitiveValue::Decimal {
            value: decimal,
            quoted,
        })
    }

    fn check_temporal(&self, kind: PrimitiveKind, text: &str, valid: bool) -> Result<()> {
        if self.options.validate_temporal && !valid {
            return Err(self.malformed(format!(
                "`{}` is not a valid {}",
                text,
                kind.type_name()
            )));
        }
        Ok(())
    }
}

/// Whether `value` is a legal content for a field of this kind.
fn accepts(kind: PrimitiveKind, binding: Option<&'static CodeSystemDef>, value: &PrimitiveValue) -> bool {
    match (kind, value) {
        (_, PrimitiveValue::Code(code)) => binding.is_some_and(|system| system == code.system()),
        (_, _) if binding.is_some() => false,
        (PrimitiveKind::Boolean, PrimitiveValue::Boolean(_)) => true,
        (PrimitiveKind::Integer, PrimitiveValue::Integer(_)) => true,
        (PrimitiveKind::PositiveInt, PrimitiveValue::Integer(i)) => *i >= 1,
        (PrimitiveKind::UnsignedInt, PrimitiveValue::Integer(i)) => *i >= 0,
        (PrimitiveKind::Decimal, PrimitiveValue::Decimal { .. }) => true,
        (PrimitiveKind::Date, PrimitiveValue::Date(_)) => true,
        (PrimitiveKind::DateTime, PrimitiveValue::DateTime(_)) => true,
        (PrimitiveKind::Instant, PrimitiveValue::Instant(_)) => true,
        (PrimitiveKind::Time, PrimitiveValue::Time(_)) => true,
        (
            PrimitiveKind::Boolean
            | PrimitiveKind::Integer
            | PrimitiveKind::PositiveInt
            | PrimitiveKind::UnsignedInt
            | PrimitiveKind::Decimal,
            _,
        ) => false,
        (kind, PrimitiveValue::String(_)) => !kind.is_temporal(),
        _ => false,
    }
}

impl Encoder {
    /// Writes a primitive field as `name` plus, when needed, `_name`.
    pub(super) fn encode_primitive_field(
        &mut self,
        field: &FieldDef,
        kind: PrimitiveKind,
        binding: Option<&'static CodeSystemDef>,
        value: &FieldValue,
        map: &mut Map<String, JsonValue>,
    ) -> Result<()> {
        self.path.push_field(field.name);
        match (field.repeated, value) {
            (false, FieldValue::Single(Value::Primitive(primitive))) => {
                let (wire, sibling) = self.encode_primitive(kind, binding, primitive)?;
                if let Some(wire) = wire {
                    map.insert(field.name.to_string(), wire);
                }
                if let Some(sibling) = sibling {
                    map.insert(sibling_key(field.name), sibling);
                }
            }
            (true, FieldValue::Repeated(values)) => {
                let mut wire = Vec::with_capacity(values.len());
                let mut sides = Vec::with_capacity(values.len());
                for (index, value) in values.iter().enumerate() {
                    self.path.push_index(index);
                    let Value::Primitive(primitive) = value else {
                        return Err(self.invalid("expected a primitive value"));
                    };
                    let (value, side) = self.encode_primitive(kind, binding, primitive)?;
                    wire.push(value.unwrap_or(JsonValue::Null));
                    sides.push(side.unwrap_or(JsonValue::Null));
                    self.path.pop();
                }
                if values.is_empty() || wire.iter().any(|v| !v.is_null()) {
                    map.insert(field.name.to_string(), JsonValue::Array(wire));
                }
                if sides.iter().any(|s| !s.is_null()) {
                    map.insert(sibling_key(field.name), JsonValue::Array(sides));
                }
            }
            _ => return Err(self.invalid("slot does not hold a primitive of the declared cardinality")),
        }
        self.path.pop();
        Ok(())
    }

    /// Splits a primitive into its wire value and its `_field` object.
    pub(super) fn encode_primitive(
        &mut self,
        kind: PrimitiveKind,
        binding: Option<&'static CodeSystemDef>,
        primitive: &PrimitiveElement,
    ) -> Result<(Option<JsonValue>, Option<JsonValue>)> {
        let wire = match &primitive.value {
            Some(value) if accepts(kind, binding, value) => Some(self.encode_scalar(value)?),
            Some(_) => {
                return Err(self.invalid(format!("value is not a valid {}", kind.type_name())));
            }
            None => None,
        };

        let sibling = if primitive.has_side_channel() {
            let mut side = Map::new();
            if let Some(id) = &primitive.id {
                side.insert("id".to_string(), JsonValue::String(id.clone()));
            }
            if !primitive.extension.is_empty() {
                self.path.push_field("extension");
                side.insert("extension".to_string(), self.encode_extensions(&primitive.extension)?);
                self.path.pop();
            }
            Some(JsonValue::Object(side))
        } else {
            None
        };

        if wire.is_none() && sibling.is_none() {
            return Err(self.invalid("primitive has neither a value nor an extension"));
        }
        Ok((wire, sibling))
    }

    fn encode_scalar(&self, value: &PrimitiveValue) -> Result<JsonValue> {
        Ok(match value {
            PrimitiveValue::Boolean(b) => JsonValue::Bool(*b),
            PrimitiveValue::Integer(i) => JsonValue::from(*i),
            PrimitiveValue::Decimal { value, quoted: true } => {
                JsonValue::String(value.original_string().to_string())
            }
            PrimitiveValue::Decimal { value, quoted: false } => value
                .to_json_number()
                .map(JsonValue::Number)
                .ok_or_else(|| self.invalid(format!("`{}` is not a JSON number", value)))?,
            PrimitiveValue::String(s)
            | PrimitiveValue::Date(s)
            | PrimitiveValue::DateTime(s)
            | PrimitiveValue::Instant(s)
            | PrimitiveValue::Time(s) => JsonValue::String(s.clone()),
            PrimitiveValue::Code(code) => JsonValue::String(code.as_str().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::CodecOptions;
    use crate::fhir_version::FhirVersion;

    fn decoder(options: &CodecOptions) -> Decoder<'_> {
        Decoder::new(FhirVersion::default().profile(), options)
    }

    fn decode(kind: PrimitiveKind, value: JsonValue) -> Result<PrimitiveValue> {
        let options = CodecOptions::default();
        decoder(&options).decode_scalar(kind, None, &value)
    }

    #[test]
    fn integers_must_be_whole_numbers_in_range() {
        assert_eq!(decode(PrimitiveKind::Integer, json!(-5)), Ok(PrimitiveValue::Integer(-5)));
        assert!(matches!(
            decode(PrimitiveKind::Integer, json!(1.5)),
            Err(CodecError::MalformedPrimitive { .. })
        ));
        assert!(matches!(
            decode(PrimitiveKind::Integer, json!(2_147_483_648i64)),
            Err(CodecError::MalformedPrimitive { .. })
        ));
        assert!(matches!(
            decode(PrimitiveKind::Integer, json!("5")),
            Err(CodecError::UnexpectedJsonShape { expected: JsonKind::Number, actual: JsonKind::String, .. })
        ));
        assert!(decode(PrimitiveKind::PositiveInt, json!(0)).is_err());
        assert!(decode(PrimitiveKind::UnsignedInt, json!(0)).is_ok());
        assert!(decode(PrimitiveKind::UnsignedInt, json!(-1)).is_err());
    }

    #[test]
    fn decimals_remember_their_wire_form() {
        let number: JsonValue = serde_json::from_str("1.50").expect("json");
        let Ok(PrimitiveValue::Decimal { value, quoted }) = decode(PrimitiveKind::Decimal, number) else {
            panic!("expected a decimal");
        };
        assert_eq!(value.original_string(), "1.50");
        assert!(!quoted);

        let Ok(PrimitiveValue::Decimal { value, quoted }) = decode(PrimitiveKind::Decimal, json!("185")) else {
            panic!("expected a decimal");
        };
        assert_eq!(value.original_string(), "185");
        assert!(quoted);

        assert!(matches!(
            decode(PrimitiveKind::Decimal, json!("12 mg")),
            Err(CodecError::MalformedPrimitive { .. })
        ));
        assert!(decode(PrimitiveKind::Decimal, json!(true)).is_err());
    }

    #[test]
    fn booleans_and_strings_are_not_coerced() {
        assert!(decode(PrimitiveKind::Boolean, json!("true")).is_err());
        assert!(decode(PrimitiveKind::String, json!(12)).is_err());
        assert_eq!(
            decode(PrimitiveKind::Uri, json!("urn:uuid:1")),
            Ok(PrimitiveValue::String("urn:uuid:1".to_string()))
        );
    }

    #[test]
    fn temporal_validation_is_opt_in() {
        assert!(decode(PrimitiveKind::Date, json!("2017-13-01")).is_ok());

        let strict = CodecOptions::default().with_validate_temporal(true);
        let result = decoder(&strict).decode_scalar(PrimitiveKind::Date, None, &json!("2017-13-01"));
        assert!(matches!(result, Err(CodecError::MalformedPrimitive { .. })));
        let ok = decoder(&strict).decode_scalar(PrimitiveKind::Instant, None, &json!("2015-02-07T13:28:17.239+02:00"));
        assert!(ok.is_ok());
    }

    #[test]
    fn encode_rejects_values_of_the_wrong_kind() {
        let mut encoder = Encoder::new(FhirVersion::default().profile());
        let primitive = PrimitiveElement::new(Some(PrimitiveValue::String("yes".to_string())));
        assert!(matches!(
            encoder.encode_primitive(PrimitiveKind::Boolean, None, &primitive),
            Err(CodecError::InvalidGraph { .. })
        ));
        let date = PrimitiveElement::new(Some(PrimitiveValue::String("2020".to_string())));
        assert!(encoder.encode_primitive(PrimitiveKind::Date, None, &date).is_err());
    }

    #[test]
    fn quoted_decimals_encode_as_strings() {
        let mut encoder = Encoder::new(FhirVersion::default().profile());
        let decimal = PrimitiveElement::new(Some(PrimitiveValue::Decimal {
            value: PreciseDecimal::parse("185").expect("valid"),
            quoted: true,
        }));
        let (wire, sibling) = encoder
            .encode_primitive(PrimitiveKind::Decimal, None, &decimal)
            .expect("encodes");
        assert_eq!(wire, Some(json!("185")));
        assert_eq!(sibling, None);
    }
}
