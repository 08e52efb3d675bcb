use serde::Deserialize;

/// What the decoder does with an object key that the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownFieldPolicy {
    /// Fail with `CodecError::UnknownField`.
    #[default]
    Reject,
    /// Drop the key and log it at debug level.
    Ignore,
}

/// What the choice resolver does when several `name<Suffix>` keys are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoicePolicy {
    /// Fail with `CodecError::AmbiguousChoiceField`.
    #[default]
    Reject,
    /// Keep the suffix declared first in the schema and ignore the others.
    FirstDeclared,
}

/// Codec configuration
///
/// Every field has a default, so a partial JSON document such as
/// `{"maxDepth": 16}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecOptions {
    /// Maximum element nesting depth before decoding fails closed
    pub max_depth: usize,
    /// Handling of undeclared object keys
    pub unknown_fields: UnknownFieldPolicy,
    /// Handling of choice fields present under more than one suffix
    pub choice_policy: ChoicePolicy,
    /// Reject date, dateTime, instant and time strings that do not parse
    pub validate_temporal: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            unknown_fields: UnknownFieldPolicy::Reject,
            choice_policy: ChoicePolicy::Reject,
            validate_temporal: false,
        }
    }
}

impl CodecOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_choice_policy(mut self, policy: ChoicePolicy) -> Self {
        self.choice_policy = policy;
        self
    }

    pub fn with_validate_temporal(mut self, validate: bool) -> Self {
        self.validate_temporal = validate;
        self
    }
}
