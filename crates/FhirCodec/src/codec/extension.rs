use serde_json::{Map, Value as JsonValue};

use super::{Decoder, Encoder};
use crate::element::Extension;
use crate::error::{CodecError, JsonKind, Result};
use crate::schema::{FieldDef, FieldKind, TypeRef};

impl Decoder<'_> {
    /// Decodes an `extension` or `modifierExtension` array.
    pub(super) fn decode_extensions(&mut self, value: &JsonValue) -> Result<Vec<Extension>> {
        let items = self.expect_array(value)?;
        let mut extensions = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push_index(index);
            extensions.push(self.decode_extension(item)?);
            self.path.pop();
        }
        Ok(extensions)
    }

    fn decode_extension(&mut self, value: &JsonValue) -> Result<Extension> {
        self.enter()?;
        let object = self.expect_object(value)?;

        let url = match object.get("url") {
            Some(JsonValue::String(url)) => url.clone(),
            Some(other) => {
                self.path.push_field("url");
                return Err(self.shape_error(JsonKind::String, other));
            }
            None => return Err(CodecError::MissingRequiredField(self.path.join("url"))),
        };
        let id = match object.get("id") {
            Some(JsonValue::String(id)) => Some(id.clone()),
            Some(other) => {
                self.path.push_field("id");
                return Err(self.shape_error(JsonKind::String, other));
            }
            None => None,
        };
        let extension = match object.get("extension") {
            Some(nested) => {
                self.path.push_field("extension");
                let nested = self.decode_extensions(nested)?;
                self.path.pop();
                nested
            }
            None => Vec::new(),
        };
        let value_types = self.profile.extension_value_types;
        let value = self.decode_choice(object, "value", value_types)?;

        let value_field = FieldDef {
            name: "value",
            kind: FieldKind::Choice(value_types),
            required: false,
            repeated: false,
        };
        for key in object.keys() {
            let declared = match key.as_str() {
                "url" | "id" | "extension" => true,
                key => match key.strip_prefix('_') {
                    Some(sibling) => value_field
                        .choice_for_key(sibling)
                        .is_some_and(|choice| matches!(choice.target, TypeRef::Primitive(_))),
                    None => value_field.choice_for_key(key).is_some(),
                },
            };
            if !declared {
                self.unknown_key(key)?;
            }
        }

        self.leave();
        Ok(Extension {
            id,
            url,
            extension,
            value,
        })
    }
}

impl Encoder {
    pub(super) fn encode_extensions(&mut self, extensions: &[Extension]) -> Result<JsonValue> {
        let mut items = Vec::with_capacity(extensions.len());
        for (index, extension) in extensions.iter().enumerate() {
            self.path.push_index(index);
            items.push(JsonValue::Object(self.encode_extension(extension)?));
            self.path.pop();
        }
        Ok(JsonValue::Array(items))
    }

    fn encode_extension(&mut self, extension: &Extension) -> Result<Map<String, JsonValue>> {
        let mut map = Map::new();
        if let Some(id) = &extension.id {
            map.insert("id".to_string(), JsonValue::String(id.clone()));
        }
        if !extension.extension.is_empty() {
            self.path.push_field("extension");
            map.insert("extension".to_string(), self.encode_extensions(&extension.extension)?);
            self.path.pop();
        }
        map.insert("url".to_string(), JsonValue::String(extension.url.clone()));
        if let Some(value) = &extension.value {
            self.encode_choice("value", self.profile.extension_value_types, value, &mut map)?;
        }
        Ok(map)
    }
}
