use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use super::{Decoder, Encoder, FhirCodec};
use crate::element::Resource;
use crate::error::{CodecError, JsonKind, Result};

const RESOURCE_TYPE: &str = "resourceType";

impl FhirCodec {
    /// Parses FHIR JSON text into a resource.
    ///
    /// When `expected` is given the document's `resourceType` must match it.
    pub fn to_fhir(&self, expected: Option<&str>, json: &str) -> Result<Resource> {
        let value: JsonValue = serde_json::from_str(json)?;
        self.decode(expected, &value)
    }

    /// Decodes an already parsed JSON value.
    pub fn decode(&self, expected: Option<&str>, value: &JsonValue) -> Result<Resource> {
        let mut decoder = Decoder::new(self.profile, &self.options);
        let resource = decoder.decode_resource(value, expected)?;
        debug!(
            version = %self.profile.version,
            resource_type = resource.resource_type(),
            "decoded resource"
        );
        Ok(resource)
    }

    /// Serialises a resource to compact FHIR JSON.
    pub fn from_fhir(&self, resource: &Resource) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(resource)?)?)
    }

    pub fn from_fhir_pretty(&self, resource: &Resource) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.encode(resource)?)?)
    }

    /// Encodes a resource to a JSON value with `resourceType` as the first member.
    pub fn encode(&self, resource: &Resource) -> Result<JsonValue> {
        let mut encoder = Encoder::new(self.profile);
        let object = encoder.encode_resource(resource)?;
        debug!(
            version = %self.profile.version,
            resource_type = resource.resource_type(),
            "encoded resource"
        );
        Ok(JsonValue::Object(object))
    }
}

impl Decoder<'_> {
    /// Selects the resource schema from `resourceType` and decodes against it.
    pub(super) fn decode_resource(&mut self, value: &JsonValue, expected: Option<&str>) -> Result<Resource> {
        let object = self.expect_object(value)?;
        let resource_type = match object.get(RESOURCE_TYPE) {
            Some(JsonValue::String(name)) => name.as_str(),
            Some(other) => {
                self.path.push_field(RESOURCE_TYPE);
                return Err(self.shape_error(JsonKind::String, other));
            }
            None => return Err(CodecError::MissingResourceType(self.path.clone())),
        };
        if let Some(expected) = expected
            && expected != resource_type
        {
            return Err(CodecError::ResourceTypeMismatch {
                expected: expected.to_string(),
                found: resource_type.to_string(),
            });
        }
        let schema = self
            .profile
            .resource(resource_type)
            .ok_or_else(|| CodecError::UnknownResourceType(resource_type.to_string()))?;

        let root = self.decode_object(object, schema)?;
        Ok(Resource {
            version: self.profile.version,
            root,
        })
    }
}

impl Encoder {
    pub(super) fn encode_resource(&mut self, resource: &Resource) -> Result<Map<String, JsonValue>> {
        if resource.version != self.profile.version {
            return Err(CodecError::VersionMismatch {
                expected: self.profile.version.to_string(),
                found: resource.version.to_string(),
            });
        }
        let root = &resource.root;
        if !root.schema.is_resource() {
            return Err(self.invalid(format!("{} is not a resource type", root.schema.name)));
        }

        let mut map = Map::new();
        map.insert(
            RESOURCE_TYPE.to_string(),
            JsonValue::String(root.schema.name.to_string()),
        );
        self.encode_fields(root, &mut map)?;
        Ok(map)
    }
}
