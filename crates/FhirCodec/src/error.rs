use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One step of a [`FieldPath`]: an object member or an array position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Location of a value inside a resource, rendered as `activity[0].detail.status`.
///
/// Paths are relative to the outermost resource being decoded or encoded; a
/// contained resource shows up as `contained[1].status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path extended by one member name.
    pub fn join(&self, field: &str) -> Self {
        let mut path = self.clone();
        path.push_field(field);
        path
    }

    pub(crate) fn push_field(&mut self, field: &str) {
        self.segments.push(PathSegment::Field(field.to_string()));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    /// Parses the dotted notation produced by `Display`, e.g. `entry[1].resource.id`.
    fn from(text: &str) -> Self {
        let mut path = FieldPath::root();
        for part in text.split('.').filter(|part| !part.is_empty()) {
            let mut rest = part;
            if let Some(open) = rest.find('[') {
                path.push_field(&rest[..open]);
                rest = &rest[open..];
                while let Some(stripped) = rest.strip_prefix('[') {
                    let Some(close) = stripped.find(']') else {
                        break;
                    };
                    if let Ok(index) = stripped[..close].parse::<usize>() {
                        path.push_index(index);
                    }
                    rest = &stripped[close + 1..];
                }
            } else {
                path.push_field(rest);
            }
        }
        path
    }
}

/// Shape of a JSON value, used to report what the decoder found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Structural decode and encode failures.
///
/// Every variant that can occur inside a resource carries the [`FieldPath`] of
/// the offending value. The codec never partially succeeds: the first error
/// aborts the whole resource.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("missing required field `{0}`")]
    MissingRequiredField(FieldPath),

    #[error("unexpected JSON at `{path}`: expected {expected}, found {actual}")]
    UnexpectedJsonShape {
        path: FieldPath,
        expected: JsonKind,
        actual: JsonKind,
    },

    #[error("unknown resource type `{0}`")]
    UnknownResourceType(String),

    #[error("missing `resourceType` at `{0}`")]
    MissingResourceType(FieldPath),

    #[error("expected a `{expected}` resource but found `{found}`")]
    ResourceTypeMismatch { expected: String, found: String },

    #[error("choice field `{path}` is present more than once: {}", .suffixes.join(", "))]
    AmbiguousChoiceField {
        path: FieldPath,
        suffixes: Vec<String>,
    },

    #[error("unknown code `{value}` at `{path}` for code system {system}")]
    UnknownCode {
        path: FieldPath,
        system: String,
        value: String,
    },

    #[error("malformed primitive at `{path}`: {reason}")]
    MalformedPrimitive { path: FieldPath, reason: String },

    #[error("unknown field `{0}`")]
    UnknownField(FieldPath),

    #[error("nesting limit exceeded at `{0}`")]
    DepthLimitExceeded(FieldPath),

    #[error("choice field `{path}` has no declared type `{suffix}`")]
    InvalidChoiceType { path: FieldPath, suffix: String },

    #[error("element at `{path}` does not match its schema: {reason}")]
    InvalidGraph { path: FieldPath, reason: String },

    #[error("resource belongs to FHIR {found} but the codec is configured for {expected}")]
    VersionMismatch { expected: String, found: String },

    #[error("invalid JSON: {0}")]
    Json(String),
}

impl CodecError {
    /// The field path carried by the error, if it has one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            CodecError::MissingRequiredField(path)
            | CodecError::MissingResourceType(path)
            | CodecError::UnknownField(path)
            | CodecError::DepthLimitExceeded(path) => Some(path),
            CodecError::UnexpectedJsonShape { path, .. }
            | CodecError::AmbiguousChoiceField { path, .. }
            | CodecError::UnknownCode { path, .. }
            | CodecError::MalformedPrimitive { path, .. }
            | CodecError::InvalidChoiceType { path, .. }
            | CodecError::InvalidGraph { path, .. } => Some(path),
            CodecError::UnknownResourceType(_)
            | CodecError::ResourceTypeMismatch { .. }
            | CodecError::VersionMismatch { .. }
            | CodecError::Json(_) => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_display_uses_dotted_notation() {
        let mut path = FieldPath::root();
        path.push_field("activity");
        path.push_index(0);
        path.push_field("detail");
        path.push_field("status");
        assert_eq!(path.to_string(), "activity[0].detail.status");
        assert_eq!(FieldPath::root().to_string(), "<root>");
    }

    #[test]
    fn path_parses_back_from_text() {
        let path = FieldPath::from("entry[1].resource.contained[0].id");
        assert_eq!(path.to_string(), "entry[1].resource.contained[0].id");
        assert_eq!(path.segments().len(), 6);
    }

    #[test]
    fn errors_render_their_path() {
        let err = CodecError::MissingRequiredField(FieldPath::from("activity[0].detail.status"));
        assert_eq!(
            err.to_string(),
            "missing required field `activity[0].detail.status`"
        );
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("activity[0].detail.status"));
    }

    #[test]
    fn json_errors_keep_the_message() {
        let err: CodecError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert!(matches!(err, CodecError::Json(ref msg) if msg.contains("EOF")));
    }
}
