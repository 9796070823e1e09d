use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Marker suffix on a value-type name that makes it nullable.
pub const NULLABLE_MARKER: char = '?';

/// Category of a dump value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeCategory {
    /// Built-in scalar (bool, int, string, ...).
    Primitive,
    /// Engine value type (Vector3, CFrame, Color3, ...).
    DataType,
    /// Engine enum.
    Enum,
    /// Reference to another class in the dump.
    Class,
    /// Collection shapes (Array, Dictionary, Tuple, Variant, ...).
    Group,
    /// Anything the dump introduces that this tool does not know about.
    Unknown,
}

impl TypeCategory {
    pub fn parse(s: &str) -> Self {
        match s {
            "Primitive" => TypeCategory::Primitive,
            "DataType" => TypeCategory::DataType,
            "Enum" => TypeCategory::Enum,
            "Class" => TypeCategory::Class,
            "Group" => TypeCategory::Group,
            _ => TypeCategory::Unknown,
        }
    }
}

/// A `(category, name)` value-type reference as it appears in the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueTypeRef {
    pub category: TypeCategory,
    pub name: String,
}

impl ValueTypeRef {
    pub fn new(category: TypeCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(TypeCategory::Primitive, name)
    }

    pub fn data_type(name: impl Into<String>) -> Self {
        Self::new(TypeCategory::DataType, name)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeCategory::Class, name)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(TypeCategory::Enum, name)
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(TypeCategory::Group, name)
    }

    /// Name with a single trailing nullability marker removed, and whether it
    /// was present.
    pub fn split_nullable(&self) -> (&str, bool) {
        match self.name.strip_suffix(NULLABLE_MARKER) {
            Some(base) => (base, true),
            None => (self.name.as_str(), false),
        }
    }

    /// Name without its nullability marker.
    pub fn base_name(&self) -> &str {
        self.split_nullable().0
    }

    pub fn is_nullable(&self) -> bool {
        self.split_nullable().1
    }

    /// If this references a class, the referenced class name.
    pub fn class_name(&self) -> Option<&str> {
        (self.category == TypeCategory::Class).then(|| self.base_name())
    }

    /// Read a dump value type: either `{"Category": .., "Name": ..}` or a bare
    /// string, which the dump uses for primitive return types.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let field = |key: &str| map.get(key).and_then(Value::as_str).unwrap_or("");
                Some(Self::new(TypeCategory::parse(field("Category")), field("Name")))
            }
            Value::String(s) => Some(Self::primitive(s.as_str())),
            _ => None,
        }
    }
}

impl Default for ValueTypeRef {
    fn default() -> Self {
        Self::new(TypeCategory::Unknown, "")
    }
}

impl<'de> Deserialize<'de> for ValueTypeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(ValueTypeRef::from_value(&value).unwrap_or_default())
    }
}

/// Deserialize an optional value type, treating malformed shapes as absent.
pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<ValueTypeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ValueTypeRef::from_value(&value))
}
