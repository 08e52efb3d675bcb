//! Closed code systems and the values that refer to them.
//!
//! A code system is a static table of wire codes. Enums annotated with
//! `#[derive(CodeSystem)]` generate the table and map each variant to its
//! position in it. The decoder never sees the enums: it stores a [`Code`],
//! which is a reference to the table plus an index, and callers recover the
//! typed variant with [`Code::get`].

use std::fmt;

use thiserror::Error;

/// Static description of one closed code system.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CodeSystemDef {
    pub name: &'static str,
    /// Canonical URL of the system, e.g. `http://hl7.org/fhir/care-plan-status`
    pub url: &'static str,
    /// Wire codes in declaration order
    pub codes: &'static [&'static str],
}

impl CodeSystemDef {
    /// Position of `code` in the table, if it is a member.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|candidate| *candidate == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    pub(crate) fn resolve(&'static self, code: &str) -> Option<Code> {
        self.position(code).map(|index| Code { system: self, index })
    }

    /// True when no two entries share a wire code.
    pub fn is_injective(&self) -> bool {
        self.codes
            .iter()
            .enumerate()
            .all(|(i, code)| !self.codes[i + 1..].contains(code))
    }
}

/// A typed closed code system, usually produced by `#[derive(CodeSystem)]`.
pub trait CodeSystem: Copy + Sized + 'static {
    /// The table this enum mirrors.
    const SYSTEM: &'static CodeSystemDef;

    fn from_index(index: usize) -> Option<Self>;

    fn index(self) -> usize;

    /// Maps a wire code to its variant; `None` for codes outside the system.
    fn resolve(code: &str) -> Option<Self> {
        Self::SYSTEM.position(code).and_then(Self::from_index)
    }

    /// The wire code of this variant.
    fn code(self) -> &'static str {
        Self::SYSTEM.codes[self.index()]
    }

    /// Every variant in declaration order.
    fn variants() -> Vec<Self> {
        (0..Self::SYSTEM.codes.len())
            .filter_map(Self::from_index)
            .collect()
    }
}

/// Returned by the generated `FromStr` impls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a code of {system}")]
pub struct UnknownCodeError {
    pub system: &'static str,
    pub value: String,
}

/// A decoded member of a closed code system.
#[derive(Clone, Copy)]
pub struct Code {
    system: &'static CodeSystemDef,
    index: usize,
}

impl Code {
    pub fn system(&self) -> &'static CodeSystemDef {
        self.system
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_str(&self) -> &'static str {
        self.system.codes[self.index]
    }

    /// The typed variant, if this code belongs to `T`'s system.
    pub fn get<T: CodeSystem>(&self) -> Option<T> {
        if std::ptr::eq(self.system, T::SYSTEM) || self.system == T::SYSTEM {
            T::from_index(self.index)
        } else {
            None
        }
    }

    pub fn is<T: CodeSystem>(&self, variant: T) -> bool {
        self.get::<T>().map(T::index) == Some(variant.index())
    }
}

impl<T: CodeSystem> From<T> for Code {
    fn from(variant: T) -> Self {
        Code {
            system: T::SYSTEM,
            index: variant.index(),
        }
    }
}

impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.system.url == other.system.url
    }
}

impl Eq for Code {}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({}#{})", self.system.url, self.as_str())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
