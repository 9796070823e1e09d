//! Class member descriptors.
//!
//! Members are one of four closed kinds. Variants are declared in the same
//! order as their dump spellings sort, so ordering by kind matches ordering
//! by `MemberType` string.

use serde::{Deserialize, Serialize};

use super::security::Security;
use super::tags::{self, TagSet};
use super::types::{self, ValueTypeRef};

/// Member kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// Script-assigned function the engine invokes.
    Callback,
    /// Signal scripts can connect to.
    Event,
    /// Callable method.
    Function,
    /// Readable and/or writable value.
    Property,
}

impl MemberKind {
    /// Get the dump spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Callback => "Callback",
            MemberKind::Event => "Event",
            MemberKind::Function => "Function",
            MemberKind::Property => "Property",
        }
    }

    /// Property and callback members have separately secured read and write
    /// accessors.
    pub fn has_accessors(&self) -> bool {
        matches!(self, MemberKind::Property | MemberKind::Callback)
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Function, event, or callback parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "Type", default)]
    pub value_type: ValueTypeRef,

    /// Default value expression, as text.
    #[serde(default)]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value_type: ValueTypeRef) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: None,
        }
    }
}

/// A member of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemberDescriptor {
    #[serde(rename = "MemberType")]
    pub kind: MemberKind,

    pub name: String,

    /// Property value type.
    #[serde(default, deserialize_with = "types::deserialize_optional")]
    pub value_type: Option<ValueTypeRef>,

    /// Function or callback return type.
    #[serde(default, deserialize_with = "types::deserialize_optional")]
    pub return_type: Option<ValueTypeRef>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default, skip_serializing)]
    pub security: Security,

    /// `Safe`, `ReadSafe`, `Unsafe`, or empty.
    #[serde(default)]
    pub thread_safety: String,

    #[serde(default)]
    pub tags: TagSet,
}

impl MemberDescriptor {
    /// Create a member with open security and no tags.
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value_type: None,
            return_type: None,
            parameters: Vec::new(),
            security: Security::default(),
            thread_safety: String::new(),
            tags: TagSet::default(),
        }
    }

    pub fn property(name: impl Into<String>, value_type: ValueTypeRef) -> Self {
        Self::new(MemberKind::Property, name).with_value_type(value_type)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Function, name)
    }

    pub fn event(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Event, name)
    }

    pub fn callback(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Callback, name)
    }

    pub fn with_value_type(mut self, value_type: ValueTypeRef) -> Self {
        self.value_type = Some(value_type);
        self
    }

    pub fn with_return_type(mut self, return_type: ValueTypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_security(mut self, security: Security) -> Self {
        self.security = security;
        self
    }

    pub fn with_tags<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_thread_safety(mut self, thread_safety: impl Into<String>) -> Self {
        self.thread_safety = thread_safety.into();
        self
    }

    /// Every value type this member mentions: value, return, then parameters.
    pub fn referenced_types(&self) -> impl Iterator<Item = &ValueTypeRef> {
        self.value_type
            .iter()
            .chain(self.return_type.iter())
            .chain(self.parameters.iter().map(|p| &p.value_type))
    }

    pub fn is_read_only(&self) -> bool {
        self.tags.contains(tags::READ_ONLY)
    }

    pub fn is_write_only(&self) -> bool {
        self.tags.contains(tags::WRITE_ONLY)
    }

    pub fn is_deprecated(&self) -> bool {
        self.tags.contains(tags::DEPRECATED)
    }

    pub fn is_not_scriptable(&self) -> bool {
        self.tags.contains(tags::NOT_SCRIPTABLE)
    }

    pub fn is_hidden(&self) -> bool {
        self.tags.contains(tags::HIDDEN)
    }

    pub fn can_yield(&self) -> bool {
        self.tags.contains(tags::CAN_YIELD) || self.tags.contains(tags::YIELDS)
    }
}
