use serde::Deserialize;

use super::tags::{self, TagSet};

/// Engine enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumDescriptor {
    pub name: String,

    /// Items in declared order.
    #[serde(default)]
    pub items: Vec<EnumItem>,

    #[serde(default)]
    pub tags: TagSet,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            tags: TagSet::default(),
        }
    }

    pub fn with_item(mut self, name: impl Into<String>, value: i64) -> Self {
        self.items.push(EnumItem {
            name: name.into(),
            value,
            tags: TagSet::default(),
        });
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.tags.contains(tags::DEPRECATED)
    }
}

/// Enum item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumItem {
    pub name: String,

    #[serde(default)]
    pub value: i64,

    #[serde(default)]
    pub tags: TagSet,
}

impl EnumItem {
    pub fn is_deprecated(&self) -> bool {
        self.tags.contains(tags::DEPRECATED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_enum() {
        let e: EnumDescriptor = serde_json::from_value(json!({
            "Name": "Material",
            "Items": [
                {"Name": "Plastic", "Value": 256},
                {"Name": "Wood", "Value": 512, "Tags": ["Deprecated"]}
            ]
        }))
        .unwrap();

        assert_eq!(e.items.len(), 2);
        assert_eq!(e.items[0].value, 256);
        assert!(e.items[1].is_deprecated());
        assert!(!e.is_deprecated());
    }
}
